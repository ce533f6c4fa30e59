//! URL slug generation
//!
//! Normalizes free text into a URL-safe slug via transliteration, filtering
//! and separator collapsing. The pipeline is idempotent: re-slugifying an
//! already-valid slug with the same options returns the same string.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fixed English stop-word list, matched case-insensitively on
/// whitespace-split tokens.
const STOP_WORDS: [&str; 28] = [
    "a", "an", "the", "and", "or", "but", "of", "for", "on", "in", "to", "at", "by", "with",
    "from", "as", "is", "are", "was", "were", "be", "been", "it", "its", "this", "that", "these",
    "those",
];

/// Option flags controlling the slug pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugOptions {
    pub lowercase: bool,
    pub remove_special_chars: bool,
    pub remove_stop_words: bool,
    pub remove_numbers: bool,
    pub separator: char,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_special_chars: true,
            remove_stop_words: false,
            remove_numbers: false,
            separator: '-',
        }
    }
}

/// Normalize free text into a slug.
///
/// Pipeline order: lowercase, diacritic stripping plus special-character
/// filtering, digit removal, stop-word removal, whitespace-to-separator
/// collapsing, a final character filter, separator deduplication and
/// trimming. The first filter keeps the chosen separator so a valid slug
/// passes through unchanged.
pub fn slugify(input: &str, options: &SlugOptions) -> String {
    let mut text = if options.lowercase {
        input.to_lowercase()
    } else {
        input.to_string()
    };

    if options.remove_special_chars {
        text = strip_diacritics(&text)
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == options.separator)
            .collect();
    }

    if options.remove_numbers {
        text = text.chars().filter(|c| !c.is_numeric()).collect();
    }

    if options.remove_stop_words {
        text = text
            .split_whitespace()
            .filter(|token| !STOP_WORDS.contains(&token.to_lowercase().as_str()))
            .collect::<Vec<_>>()
            .join(" ");
    }

    // Whitespace runs become the separator.
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_whitespace = true;
        } else {
            if in_whitespace && !slug.is_empty() {
                slug.push(options.separator);
            }
            in_whitespace = false;
            slug.push(c);
        }
    }

    if options.remove_special_chars {
        slug = slug
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == options.separator)
            .collect();
    }

    // Collapse runs of the separator, then trim it from both ends.
    let mut collapsed = String::with_capacity(slug.len());
    let mut last_was_separator = false;
    for c in slug.chars() {
        if c == options.separator {
            if !last_was_separator {
                collapsed.push(c);
            }
            last_was_separator = true;
        } else {
            collapsed.push(c);
            last_was_separator = false;
        }
    }

    collapsed
        .trim_matches(options.separator)
        .to_string()
}

/// Decompose to NFD and drop combining marks, so `é` becomes `e`.
fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        let slug = slugify("Hello World", &SlugOptions::default());
        assert_eq!(slug, "hello-world");
    }

    #[test]
    fn test_special_chars_removed() {
        let slug = slugify("Rust & Cargo: A Love Story!", &SlugOptions::default());
        assert_eq!(slug, "rust-cargo-a-love-story");
    }

    #[test]
    fn test_diacritics_stripped() {
        let slug = slugify("Café au Lait", &SlugOptions::default());
        assert_eq!(slug, "cafe-au-lait");
    }

    #[test]
    fn test_underscore_separator() {
        let options = SlugOptions {
            separator: '_',
            ..Default::default()
        };
        assert_eq!(slugify("Hello World", &options), "hello_world");
    }

    #[test]
    fn test_stop_words_removed() {
        let options = SlugOptions {
            remove_stop_words: true,
            ..Default::default()
        };
        assert_eq!(
            slugify("The Quick Fox and the Hound", &options),
            "quick-fox-hound"
        );
    }

    #[test]
    fn test_numbers_removed() {
        let options = SlugOptions {
            remove_numbers: true,
            ..Default::default()
        };
        assert_eq!(slugify("Top 10 Tips 2024", &options), "top-tips");
    }

    #[test]
    fn test_lowercase_disabled() {
        let options = SlugOptions {
            lowercase: false,
            ..Default::default()
        };
        assert_eq!(slugify("Hello World", &options), "Hello-World");
    }

    #[test]
    fn test_leading_trailing_separators_trimmed() {
        assert_eq!(slugify("  hello  ", &SlugOptions::default()), "hello");
        assert_eq!(slugify("--hello--", &SlugOptions::default()), "hello");
    }

    #[test]
    fn test_separator_runs_collapsed() {
        assert_eq!(
            slugify("a -- b --- c", &SlugOptions::default()),
            "a-b-c"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify("", &SlugOptions::default()), "");
        assert_eq!(slugify("!!!", &SlugOptions::default()), "");
    }

    #[test]
    fn test_idempotent_default_options() {
        let options = SlugOptions::default();
        for input in [
            "Hello World",
            "Café au Lait!",
            "  --weird -- spacing--  ",
            "already-a-slug",
        ] {
            let once = slugify(input, &options);
            assert_eq!(slugify(&once, &options), once);
        }
    }

    #[test]
    fn test_idempotent_all_flags() {
        let options = SlugOptions {
            lowercase: true,
            remove_special_chars: true,
            remove_stop_words: true,
            remove_numbers: true,
            separator: '_',
        };
        for input in ["The 10 Best Crates of 2024!", "hello_world", "a b c"] {
            let once = slugify(input, &options);
            assert_eq!(slugify(&once, &options), once);
        }
    }
}
