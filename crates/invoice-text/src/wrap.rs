//! Greedy word wrapping

/// Wrap text into lines no wider than `max_width`
///
/// The text is first split on `\n`; each segment is wrapped independently so
/// forced breaks survive. Within a segment words are accumulated while
/// `measure(line + " " + word) <= max_width`. A word wider than `max_width`
/// is placed alone on its own line and never split.
///
/// Empty segments produce empty lines, so the result always has at least one
/// line.
///
/// # Arguments
/// * `text` - Text to wrap
/// * `max_width` - Column width, in the same unit `measure` returns
/// * `measure` - Width of a string in the active font
pub fn wrap_text<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let segment = segment.strip_suffix('\r').unwrap_or(segment);
        let mut current_line = String::new();

        for word in segment.split_whitespace() {
            if current_line.is_empty() {
                // First word on line
                current_line.push_str(word);
                continue;
            }

            let candidate = format!("{current_line} {word}");
            if measure(&candidate) <= max_width {
                current_line = candidate;
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line.push_str(word);
            }
        }

        lines.push(current_line);
    }

    lines
}
