use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Convert a string into a file-name safe ASCII segment
/// - Strips diacritics via Unicode NFD decomposition (Montréal → Montreal)
/// - Keeps ASCII alphanumerics, `-` and `.`
/// - Replaces whitespace, `:` and other symbols with underscores
/// - Collapses repeated underscores and trims them at both ends
pub fn file_segment(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut pending_underscore = false;

    for ch in input.nfd() {
        if is_combining_mark(ch) || ch.is_control() {
            continue;
        }

        if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.') {
            if pending_underscore && !result.is_empty() {
                result.push('_');
            }
            pending_underscore = false;
            result.push(ch);
        } else {
            pending_underscore = true;
        }
    }

    result
}
