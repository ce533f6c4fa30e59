use crate::input::resolve_input;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::path::PathBuf;
use textools_core::slug::{slugify, SlugOptions};

/// Separator characters a slug may use.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Separator {
    /// Join words with `-`
    Hyphen,
    /// Join words with `_`
    Underscore,
}

impl From<Separator> for char {
    fn from(s: Separator) -> Self {
        match s {
            Separator::Hyphen => '-',
            Separator::Underscore => '_',
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(name = "slug")]
#[command(about = "Generate a URL-safe slug from free text")]
pub struct App {
    /// Text to slugify. Reads stdin when omitted or `-`.
    pub text: Option<String>,

    /// Read the input from a file instead.
    #[arg(short = 'F', long, env = "TEXTOOLS_SLUG_FILE")]
    pub file: Option<PathBuf>,

    /// Keep the original character case.
    #[arg(long)]
    pub no_lowercase: bool,

    /// Keep special characters instead of stripping them.
    #[arg(long)]
    pub keep_special_chars: bool,

    /// Drop common English stop words.
    #[arg(long)]
    pub remove_stop_words: bool,

    /// Drop digits.
    #[arg(long)]
    pub remove_numbers: bool,

    /// Word separator.
    #[arg(short, long, value_enum, default_value = "hyphen")]
    pub separator: Separator,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let input = resolve_input(app.text.as_deref(), app.file.as_ref())?;

    let options = SlugOptions {
        lowercase: !app.no_lowercase,
        remove_special_chars: !app.keep_special_chars,
        remove_stop_words: app.remove_stop_words,
        remove_numbers: app.remove_numbers,
        separator: app.separator.into(),
    };

    let slug = slugify(&input, &options);
    if slug.is_empty() {
        return Err(eyre!("Nothing left to slugify: the input reduced to an empty slug"));
    }

    if global.verbose {
        eprintln!("{}", f!("{} -> {}", input.trim(), slug).dimmed());
    }

    println!("{slug}");

    Ok(())
}
