use crate::input::resolve_input;
use crate::prelude::{eprintln, println, *};
use std::path::PathBuf;
use textools_core::csv::{parse_csv, parse_delimiter};
use textools_core::records::{project_records, records_to_json};

#[derive(Debug, clap::Args, Clone)]
pub struct ConvertOptions {
    /// Delimited text to convert. Reads stdin when omitted or `-`.
    pub text: Option<String>,

    /// Read the input from a file instead.
    #[arg(short = 'F', long, env = "TEXTOOLS_CSV_FILE")]
    pub file: Option<PathBuf>,

    /// Field delimiter. Use `\t` for a literal tab.
    #[arg(short, long, env = "TEXTOOLS_CSV_DELIMITER", default_value = ",")]
    pub delimiter: String,

    /// Treat the first row as data instead of column names.
    #[arg(long)]
    pub no_header: bool,

    /// Coerce fields into numbers, booleans and nulls.
    #[arg(long)]
    pub types: bool,
}

pub fn run(options: ConvertOptions, global: crate::Global) -> Result<()> {
    let input = resolve_input(options.text.as_deref(), options.file.as_ref())?;
    let json = convert_data(&input, &options.delimiter, !options.no_header, options.types)?;

    if global.verbose {
        eprintln!("Input length: {} characters", input.chars().count());
    }

    println!("{json}");

    Ok(())
}

/// Parse delimited text and project it into a pretty-printed JSON array.
pub fn convert_data(
    input: &str,
    delimiter: &str,
    has_header: bool,
    convert_types: bool,
) -> Result<String> {
    let delimiter = parse_delimiter(delimiter).map_err(|e| eyre!(e))?;

    let rows = parse_csv(input, delimiter);
    log::debug!("parsed {} rows", rows.len());

    let records = project_records(&rows, has_header, convert_types)?;

    Ok(records_to_json(&records))
}
