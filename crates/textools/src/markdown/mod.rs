use crate::prelude::*;

pub mod render;

pub use render::{render_data, RenderOptions, RenderOutput};

#[derive(Debug, clap::Parser)]
#[command(name = "md")]
#[command(about = "Render a Markdown subset to HTML")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Render Markdown text to an HTML fragment
    #[clap(name = "render")]
    Render(render::RenderOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Render(options) => render::run(options, global),
    }
}
