use crate::input::resolve_input;
use crate::prelude::{eprintln, println, *};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(name = "hash")]
#[command(about = "Message digest operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Compute the MD5 digest of the input text
    #[clap(name = "md5")]
    Md5(DigestOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct DigestOptions {
    /// Text to digest. Reads stdin when omitted or `-`.
    pub text: Option<String>,

    /// Read the input from a file instead.
    #[arg(short = 'F', long, env = "TEXTOOLS_HASH_FILE")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct DigestOutput {
    pub algorithm: String,
    pub input_bytes: usize,
    pub digest: String,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Md5(options) => md5(options, global),
    }
}

fn md5(options: DigestOptions, global: crate::Global) -> Result<()> {
    let input = resolve_input(options.text.as_deref(), options.file.as_ref())?;
    let output = md5_data(&input);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", output.digest);

    if global.verbose {
        eprintln!("{} bytes digested", output.input_bytes);
    }

    Ok(())
}

/// Compute the MD5 digest of the given text.
pub fn md5_data(input: &str) -> DigestOutput {
    DigestOutput {
        algorithm: "md5".to_string(),
        input_bytes: input.len(),
        digest: textools_core::md5::digest_hex(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_known_vector() {
        let output = md5_data("abc");
        assert_eq!(output.digest, "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(output.algorithm, "md5");
        assert_eq!(output.input_bytes, 3);
    }

    #[test]
    fn test_md5_empty_input_still_digests() {
        let output = md5_data("");
        assert_eq!(output.digest, "d41d8cd98f00b204e9800998ecf8427e");
    }
}
