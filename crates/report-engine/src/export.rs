//! Helpers for presenting and downloading a report

/// Number of characters shown in a report preview
pub const PREVIEW_CHARS: usize = 1500;

/// First `limit` characters of `text`, with `\n...\n` appended when cut
pub fn text_preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}\n...\n", &text[..cut]),
        None => text.to_string(),
    }
}

/// Download name such as `pregabalin_neuropathic pain_innovation_report.pdf`
///
/// Path separators, quotes and control characters are replaced with `_` so
/// the name is safe both on disk and inside a `Content-Disposition` header.
pub fn report_file_name(molecule: &str, indication: &str, extension: &str) -> String {
    format!(
        "{}_{}_innovation_report.{}",
        sanitize(molecule),
        sanitize(indication),
        extension
    )
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | ';' => '_',
            c if c.is_control() || !c.is_ascii() => '_',
            c => c,
        })
        .collect()
}
