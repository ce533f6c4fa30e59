//! Input resolution for text-bearing commands.
//!
//! Every tool accepts its text as a positional argument, from `--file`, or
//! from stdin when the argument is absent or `-`.

use crate::prelude::*;
use std::io::Read;
use std::path::PathBuf;

/// Resolve the text a command should operate on.
///
/// Precedence: `--file` wins over the positional argument; a positional `-`
/// or no argument at all reads stdin to end.
pub fn resolve_input(text: Option<&str>, file: Option<&PathBuf>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .wrap_err_with(|| f!("Failed to read input file: {}", path.display()));
    }

    match text {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read from stdin")?;
            Ok(buffer)
        }
        Some(text) => Ok(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_text_passes_through() {
        let text = resolve_input(Some("hello"), None).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_file_wins_over_positional() {
        let dir = std::env::temp_dir();
        let path = dir.join("textools_input_test.txt");
        std::fs::write(&path, "from file").unwrap();

        let text = resolve_input(Some("ignored"), Some(&path)).unwrap();
        assert_eq!(text, "from file");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_errors() {
        let path = PathBuf::from("/nonexistent/textools-no-such-file");
        assert!(resolve_input(None, Some(&path)).is_err());
    }
}
