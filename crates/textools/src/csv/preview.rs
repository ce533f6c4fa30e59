use crate::input::resolve_input;
use crate::prelude::{println, *};
use colored::Colorize;
use std::path::PathBuf;
use textools_core::csv::{parse_csv, parse_delimiter};

#[derive(Debug, clap::Args, Clone)]
pub struct PreviewOptions {
    /// Delimited text to preview. Reads stdin when omitted or `-`.
    pub text: Option<String>,

    /// Read the input from a file instead.
    #[arg(short = 'F', long, env = "TEXTOOLS_CSV_FILE")]
    pub file: Option<PathBuf>,

    /// Field delimiter. Use `\t` for a literal tab.
    #[arg(short, long, env = "TEXTOOLS_CSV_DELIMITER", default_value = ",")]
    pub delimiter: String,

    /// Maximum number of rows to print (0 = all).
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

pub fn run(options: PreviewOptions, global: crate::Global) -> Result<()> {
    let input = resolve_input(options.text.as_deref(), options.file.as_ref())?;
    let rows = preview_data(&input, &options.delimiter)?;

    if rows.is_empty() {
        println!("{}", "No rows parsed".yellow());
        return Ok(());
    }

    let shown = if options.limit > 0 {
        rows.len().min(options.limit)
    } else {
        rows.len()
    };

    let mut table = new_table();
    for row in &rows[..shown] {
        table.add_row(prettytable::Row::new(
            row.iter().map(|f| prettytable::Cell::new(f)).collect(),
        ));
    }
    table.printstd();

    if shown < rows.len() {
        println!("{}", f!("... {} more rows", rows.len() - shown).dimmed());
    }

    if global.verbose {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        println!();
        println!("Rows: {} Columns: {width}", rows.len());
    }

    Ok(())
}

/// Parse delimited text into rows for display.
pub fn preview_data(input: &str, delimiter: &str) -> Result<Vec<Vec<String>>> {
    let delimiter = parse_delimiter(delimiter).map_err(|e| eyre!(e))?;
    Ok(parse_csv(input, delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_parses_rows() {
        let rows = preview_data("a;b\n1;2\n", ";").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_preview_rejects_bad_delimiter() {
        assert!(preview_data("a,b", ";;").is_err());
    }
}
