//! Word-boundary text wrapping for console output.

/// Console line width used for every rendered block.
pub const LINE_WIDTH: usize = 80;

/// Wrap text to `width` columns, breaking only between words.
///
/// Runs of whitespace (newlines included) collapse to single spaces. A word
/// longer than `width` gets a line of its own rather than being split.
pub fn wrap(text: &str, width: usize) -> String {
    wrap_lines(text, width, "", "").join("\n")
}

/// Like [`wrap`], prefixing the first line with `initial_indent` and the
/// rest with `subsequent_indent`. Indents count towards the width.
pub fn fill(text: &str, width: usize, initial_indent: &str, subsequent_indent: &str) -> String {
    wrap_lines(text, width, initial_indent, subsequent_indent).join("\n")
}

fn wrap_lines(text: &str, width: usize, initial_indent: &str, subsequent_indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            let indent = if lines.is_empty() {
                initial_indent
            } else {
                subsequent_indent
            };
            current.push_str(indent);
            current.push_str(word);
            current_len = indent.chars().count() + word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(subsequent_indent);
            current.push_str(word);
            current_len = subsequent_indent.chars().count() + word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
