//! Delimited-text parsing
//!
//! A single-pass, quote-aware scanner that turns raw delimited text into a
//! rectangular table of string fields. Malformed quoting never errors: the
//! scanner degrades to a literal best-effort parse.

/// Interpret a raw delimiter option.
///
/// A delimiter is a single character, or the two-character sentinel `\t`
/// meaning a literal tab. An empty delimiter is a structural error.
pub fn parse_delimiter(raw: &str) -> Result<char, String> {
    if raw == "\\t" {
        return Ok('\t');
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err("Delimiter must not be empty".to_string()),
        (Some(_), Some(_)) => Err(format!("Delimiter must be a single character, got {raw:?}")),
    }
}

/// Parse delimited text into rows of string fields.
///
/// RFC4180-style scan: a `"` toggles quote state, `""` inside quotes emits a
/// literal quote, delimiters and line breaks inside quotes are literal. `\r\n`
/// is consumed as a single line terminator. End of input flushes the pending
/// field and row; a final row consisting of exactly one empty field is
/// dropped, which handles a trailing newline and makes empty input parse to
/// zero rows. An unterminated quote at end of input still emits the
/// accumulated text.
pub fn parse_csv(input: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                // Escaped quote inside a quoted field
                field.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            row.push(std::mem::take(&mut field));
        } else if (c == '\n' || c == '\r') && !in_quotes {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            row.push(std::mem::take(&mut field));
            rows.push(std::mem::take(&mut row));
        } else {
            field.push(c);
        }
    }

    row.push(field);
    rows.push(row);

    // Trailing newline leaves a single empty field behind; drop it.
    if let Some(last) = rows.last() {
        if last.len() == 1 && last[0].is_empty() {
            rows.pop();
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize_as_csv(table: &[Vec<String>], delimiter: char) -> String {
        table
            .iter()
            .map(|row| row.join(&delimiter.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_parse_delimiter_single_char() {
        assert_eq!(parse_delimiter(","), Ok(','));
        assert_eq!(parse_delimiter(";"), Ok(';'));
        assert_eq!(parse_delimiter("|"), Ok('|'));
    }

    #[test]
    fn test_parse_delimiter_tab_sentinel() {
        assert_eq!(parse_delimiter("\\t"), Ok('\t'));
    }

    #[test]
    fn test_parse_delimiter_empty() {
        assert!(parse_delimiter("").is_err());
    }

    #[test]
    fn test_parse_delimiter_multi_char() {
        assert!(parse_delimiter(",,").is_err());
    }

    #[test]
    fn test_parse_simple_rows() {
        let rows = parse_csv("a,b,c\n1,2,3", ',');
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
                vec!["1".to_string(), "2".to_string(), "3".to_string()],
            ]
        );
    }

    #[test]
    fn test_parse_empty_input_yields_zero_rows() {
        assert!(parse_csv("", ',').is_empty());
    }

    #[test]
    fn test_parse_trailing_newline_dropped() {
        let rows = parse_csv("a,b\n1,2\n", ',');
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_parse_crlf_is_one_terminator() {
        let rows = parse_csv("a,b\r\n1,2\r\n", ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_parse_bare_cr_terminates_row() {
        let rows = parse_csv("a\r1", ',');
        assert_eq!(rows, vec![vec!["a".to_string()], vec!["1".to_string()]]);
    }

    #[test]
    fn test_parse_quoted_delimiter() {
        let rows = parse_csv("\"a,b\",c", ',');
        assert_eq!(rows, vec![vec!["a,b".to_string(), "c".to_string()]]);
    }

    #[test]
    fn test_parse_quoted_newline() {
        let rows = parse_csv("\"line1\nline2\",x", ',');
        assert_eq!(rows, vec![vec!["line1\nline2".to_string(), "x".to_string()]]);
    }

    #[test]
    fn test_parse_escaped_quote() {
        // "a""b" must parse back to exactly a"b
        let rows = parse_csv("\"a\"\"b\"", ',');
        assert_eq!(rows, vec![vec!["a\"b".to_string()]]);
    }

    #[test]
    fn test_parse_unterminated_quote_emits_text() {
        let rows = parse_csv("\"abc", ',');
        assert_eq!(rows, vec![vec!["abc".to_string()]]);
    }

    #[test]
    fn test_parse_empty_fields_preserved() {
        let rows = parse_csv("a,,c", ',');
        assert_eq!(
            rows,
            vec![vec!["a".to_string(), "".to_string(), "c".to_string()]]
        );
    }

    #[test]
    fn test_parse_interior_blank_line_kept() {
        let rows = parse_csv("a\n\nb", ',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["".to_string()]);
    }

    #[test]
    fn test_parse_tab_delimiter() {
        let rows = parse_csv("a\tb\n1\t2", '\t');
        assert_eq!(rows[0], vec!["a".to_string(), "b".to_string()]);
        assert_eq!(rows[1], vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_round_trip_plain_table() {
        let table = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["1".to_string(), "2".to_string()],
            vec!["x y".to_string(), "z".to_string()],
        ];
        let text = serialize_as_csv(&table, ',');
        assert_eq!(parse_csv(&text, ','), table);
    }

    #[test]
    fn test_round_trip_semicolon() {
        let table = vec![
            vec!["one".to_string(), "two".to_string()],
            vec!["three".to_string(), "four".to_string()],
        ];
        let text = serialize_as_csv(&table, ';');
        assert_eq!(parse_csv(&text, ';'), table);
    }
}
