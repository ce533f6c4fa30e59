#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod case;
mod csv;
mod hash;
mod input;
mod markdown;
mod prelude;
mod slug;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Everyday text utility tools: CSV conversion, Markdown rendering, hashing, case conversion and slug generation"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TEXTOOLS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// CSV parsing and conversion operations
    Csv(crate::csv::App),

    /// Render a Markdown subset to HTML
    Md(crate::markdown::App),

    /// Message digest operations
    Hash(crate::hash::App),

    /// Convert text between case styles
    Case(crate::case::App),

    /// Generate a URL-safe slug from free text
    Slug(crate::slug::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Csv(sub_app) => crate::csv::run(sub_app, app.global),
        SubCommands::Md(sub_app) => crate::markdown::run(sub_app, app.global),
        SubCommands::Hash(sub_app) => crate::hash::run(sub_app, app.global),
        SubCommands::Case(sub_app) => crate::case::run(sub_app, app.global),
        SubCommands::Slug(sub_app) => crate::slug::run(sub_app, app.global),
    }
}
