/// Markup the search API injects into titles and descriptions, in replacement order.
const REPLACEMENTS: [(&str, &str); 4] = [
    ("<b>", ""),
    ("</b>", ""),
    ("&quot;", "\""),
    ("&amp;", "&"),
];

/// Strips keyword highlighting and the two entities the API escapes.
///
/// Anything else (other tags, `&lt;`, numeric entities) passes through untouched.
pub fn clean_text(input: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(input.to_owned(), |text, (from, to)| text.replace(from, to))
}
