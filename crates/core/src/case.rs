//! Text case conversion family
//!
//! Pure string-to-string mappings with no shared state. Blank input is a
//! validation error caught before any conversion runs.

use regex::Regex;

/// The supported case styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

/// Convert text into the requested case style.
///
/// Empty or whitespace-only input is rejected with a user-facing message
/// before any conversion is attempted.
pub fn convert_case(input: &str, style: CaseStyle) -> Result<String, String> {
    if input.trim().is_empty() {
        return Err("Please enter some text to convert".to_string());
    }

    let converted = match style {
        CaseStyle::Upper => input.to_uppercase(),
        CaseStyle::Lower => input.to_lowercase(),
        CaseStyle::Title => to_title_case(input),
        CaseStyle::Sentence => to_sentence_case(input),
        CaseStyle::Camel => to_camel_case(input),
        CaseStyle::Pascal => to_pascal_case(input),
        CaseStyle::Snake => to_delimited_case(input, '_'),
        CaseStyle::Kebab => to_delimited_case(input, '-'),
    };

    Ok(converted)
}

/// Lowercase, then capitalize the first letter of each space-separated token.
fn to_title_case(input: &str) -> String {
    input
        .to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase, then capitalize the first character and the first character
/// after each `.`, `?` or `!` followed by whitespace.
fn to_sentence_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalize_next = true;
    let mut after_terminator = false;

    for c in input.to_lowercase().chars() {
        if capitalize_next && !c.is_whitespace() {
            out.extend(c.to_uppercase());
            capitalize_next = false;
            after_terminator = false;
            continue;
        }

        out.push(c);

        if matches!(c, '.' | '?' | '!') {
            after_terminator = true;
        } else if c.is_whitespace() {
            if after_terminator {
                capitalize_next = true;
                after_terminator = false;
            }
        } else {
            after_terminator = false;
        }
    }

    out
}

/// Lowercase, then delete each non-alphanumeric run and uppercase the
/// character that follows it.
fn to_camel_case(input: &str) -> String {
    let re = Regex::new(r"[^a-zA-Z0-9]+(.)").unwrap();
    re.replace_all(&input.to_lowercase(), |caps: &regex::Captures| {
        caps[1].to_uppercase()
    })
    .to_string()
}

/// Camel case with the first character uppercased as well.
fn to_pascal_case(input: &str) -> String {
    capitalize_first(&to_camel_case(input))
}

/// Lowercase, replace whitespace runs with the separator, then strip
/// anything that is not lowercase-alphanumeric or the separator.
fn to_delimited_case(input: &str, separator: char) -> String {
    let ws = Regex::new(r"\s+").unwrap();
    ws.replace_all(&input.to_lowercase(), separator.to_string().as_str())
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == separator)
        .collect()
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
