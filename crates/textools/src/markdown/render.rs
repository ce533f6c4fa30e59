use crate::input::resolve_input;
use crate::prelude::{eprintln, println, *};
use serde::Serialize;
use std::path::PathBuf;
use textools_core::markdown::render_markdown;

#[derive(Debug, clap::Args, Clone)]
pub struct RenderOptions {
    /// Markdown text to render. Reads stdin when omitted or `-`.
    pub text: Option<String>,

    /// Read the input from a file instead.
    #[arg(short = 'F', long, env = "TEXTOOLS_MD_FILE")]
    pub file: Option<PathBuf>,

    /// Output as JSON with render statistics
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct RenderOutput {
    pub html: String,
    pub input_chars: usize,
    pub html_chars: usize,
    pub blocks: usize,
}

pub fn run(options: RenderOptions, global: crate::Global) -> Result<()> {
    let input = resolve_input(options.text.as_deref(), options.file.as_ref())?;
    let output = render_data(&input);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", output.html);

    if global.verbose {
        eprintln!();
        eprintln!(
            "Rendered {} characters of Markdown into {} characters of HTML ({} blocks)",
            output.input_chars, output.html_chars, output.blocks
        );
    }

    Ok(())
}

/// Render Markdown and collect output statistics.
pub fn render_data(input: &str) -> RenderOutput {
    let html = render_markdown(input);
    log::debug!("rendered {} input chars", input.chars().count());

    let blocks = if html.is_empty() {
        0
    } else {
        html.lines().filter(|l| l.starts_with('<')).count()
    };

    RenderOutput {
        input_chars: input.chars().count(),
        html_chars: html.chars().count(),
        blocks,
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading() {
        let output = render_data("# Hi");
        assert!(output.html.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn test_render_bold() {
        let output = render_data("**bold**");
        assert!(output.html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_render_counts() {
        let output = render_data("first\n\nsecond");
        assert_eq!(output.input_chars, 13);
        assert_eq!(output.blocks, 2);
    }

    #[test]
    fn test_render_empty() {
        let output = render_data("");
        assert_eq!(output.html, "");
        assert_eq!(output.blocks, 0);
    }
}
