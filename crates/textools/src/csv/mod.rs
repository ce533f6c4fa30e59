use crate::prelude::*;

pub mod convert;
pub mod preview;

// Re-export public data functions
pub use convert::convert_data;
pub use preview::preview_data;

#[derive(Debug, clap::Parser)]
#[command(name = "csv")]
#[command(about = "CSV parsing and conversion operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert delimited text to a JSON array of records
    #[clap(name = "convert")]
    Convert(convert::ConvertOptions),

    /// Parse delimited text and print it as a table
    #[clap(name = "preview")]
    Preview(preview::PreviewOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Convert(options) => convert::run(options, global),
        Commands::Preview(options) => preview::run(options, global),
    }
}
