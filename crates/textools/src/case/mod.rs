use crate::input::resolve_input;
use crate::prelude::{println, *};
use std::path::PathBuf;
use textools_core::case::convert_case;

/// CLI mirror of the core case styles.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CaseStyle {
    /// UPPERCASE
    Upper,
    /// lowercase
    Lower,
    /// Title Case
    Title,
    /// Sentence case
    Sentence,
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
    /// snake_case
    Snake,
    /// kebab-case
    Kebab,
}

impl From<CaseStyle> for textools_core::case::CaseStyle {
    fn from(s: CaseStyle) -> Self {
        match s {
            CaseStyle::Upper => textools_core::case::CaseStyle::Upper,
            CaseStyle::Lower => textools_core::case::CaseStyle::Lower,
            CaseStyle::Title => textools_core::case::CaseStyle::Title,
            CaseStyle::Sentence => textools_core::case::CaseStyle::Sentence,
            CaseStyle::Camel => textools_core::case::CaseStyle::Camel,
            CaseStyle::Pascal => textools_core::case::CaseStyle::Pascal,
            CaseStyle::Snake => textools_core::case::CaseStyle::Snake,
            CaseStyle::Kebab => textools_core::case::CaseStyle::Kebab,
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(name = "case")]
#[command(about = "Convert text between case styles")]
pub struct App {
    /// Target case style
    #[arg(value_enum)]
    pub style: CaseStyle,

    /// Text to convert. Reads stdin when omitted or `-`.
    pub text: Option<String>,

    /// Read the input from a file instead.
    #[arg(short = 'F', long, env = "TEXTOOLS_CASE_FILE")]
    pub file: Option<PathBuf>,
}

pub fn run(app: App, _global: crate::Global) -> Result<()> {
    let input = resolve_input(app.text.as_deref(), app.file.as_ref())?;

    let converted = convert_case(&input, app.style.into()).map_err(|e| eyre!(e))?;
    println!("{converted}");

    Ok(())
}
