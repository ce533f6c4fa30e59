//! Markdown subset to HTML conversion
//!
//! A fixed-order cascade of global regex substitutions over the evolving
//! string. This is deliberately a linear rewrite, not an AST-based parser:
//! nested or overlapping constructs (a list inside a blockquote, emphasis
//! spanning a link) are best-effort only. The rule order is load-bearing:
//! bold before italic so `**` is not split into two `*`, images before links
//! so the leading `!` is not stranded, fenced code before inline code so
//! triple backticks are consumed first.

use regex::Regex;

/// Render a Markdown-subset document into an HTML fragment.
///
/// Pure and infallible: the same input always yields the same output.
pub fn render_markdown(input: &str) -> String {
    let mut html = input.replace("\r\n", "\n").replace('\r', "\n");

    // ATX headings, longest prefix first so `###` is not split as `#` + `##`.
    for level in (1..=6).rev() {
        let marker = "#".repeat(level);
        let re = Regex::new(&format!(r"(?m)^{marker}[ \t]+(.+)$")).unwrap();
        html = re
            .replace_all(&html, format!("<h{level}>${{1}}</h{level}>"))
            .to_string();
    }

    // Bold before italic.
    let re = Regex::new(r"\*\*([^*\n]+)\*\*").unwrap();
    html = re.replace_all(&html, "<strong>$1</strong>").to_string();
    let re = Regex::new(r"__([^_\n]+)__").unwrap();
    html = re.replace_all(&html, "<strong>$1</strong>").to_string();
    let re = Regex::new(r"\*([^*\n]+)\*").unwrap();
    html = re.replace_all(&html, "<em>$1</em>").to_string();
    let re = Regex::new(r"_([^_\n]+)_").unwrap();
    html = re.replace_all(&html, "<em>$1</em>").to_string();

    let re = Regex::new(r"~~([^~\n]+)~~").unwrap();
    html = re.replace_all(&html, "<del>$1</del>").to_string();

    let re = Regex::new(r"(?m)^>[ \t]?(.*)$").unwrap();
    html = re
        .replace_all(&html, "<blockquote>$1</blockquote>")
        .to_string();

    // Images share link syntax with a leading `!`, so they go first.
    let re = Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap();
    html = re
        .replace_all(&html, r#"<img src="$2" alt="$1">"#)
        .to_string();
    let re = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    html = re
        .replace_all(&html, r#"<a href="$2">$1</a>"#)
        .to_string();

    // Fenced code blocks before inline code so ``` is consumed first.
    let re = Regex::new(r"(?s)```(\w*)\n(.*?)```").unwrap();
    html = re
        .replace_all(&html, |caps: &regex::Captures| {
            let lang = &caps[1];
            let body = caps[2].replace('<', "&lt;").replace('>', "&gt;");
            if lang.is_empty() {
                format!("<pre><code>{body}</code></pre>")
            } else {
                format!("<pre><code class=\"language-{lang}\">{body}</code></pre>")
            }
        })
        .to_string();

    let re = Regex::new(r"`([^`\n]+)`").unwrap();
    html = re.replace_all(&html, "<code>$1</code>").to_string();

    // List items are wrapped individually, then adjacent wrappers merged.
    let re = Regex::new(r"(?m)^[*+-][ \t]+(.+)$").unwrap();
    html = re.replace_all(&html, "<ul><li>$1</li></ul>").to_string();
    let re = Regex::new(r"(?m)^\d+\.[ \t]+(.+)$").unwrap();
    html = re.replace_all(&html, "<ol><li>$1</li></ol>").to_string();
    html = html.replace("</ul>\n<ul>", "\n");
    html = html.replace("</ol>\n<ol>", "\n");

    wrap_paragraphs(&html)
}

const BLOCK_TAGS: [&str; 11] = [
    "<h1", "<h2", "<h3", "<h4", "<h5", "<h6", "<ul", "<ol", "<blockquote", "<pre", "<p",
];

/// Wrap bare text blocks in `<p>` tags.
///
/// Splits on blank-line boundaries; a block already starting with a
/// block-level tag is left alone, anything else is wrapped with internal
/// single newlines converted to `<br>`.
fn wrap_paragraphs(html: &str) -> String {
    let splitter = Regex::new(r"\n[ \t]*\n").unwrap();

    splitter
        .split(html)
        .filter_map(|block| {
            let block = block.trim();
            if block.is_empty() {
                return None;
            }
            if BLOCK_TAGS.iter().any(|tag| block.starts_with(tag)) {
                Some(block.to_string())
            } else {
                Some(format!("<p>{}</p>", block.replace('\n', "<br>")))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
