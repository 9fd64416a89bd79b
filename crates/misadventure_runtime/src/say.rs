//! Paragraph-aware text output.
//!
//! Game text is usually written as indented multi-line string literals.
//! [`say`] strips the indentation, re-flows each paragraph to the terminal
//! width, and keeps paragraphs (separated by blank lines) apart.

/// Width used when the terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 80;

/// Current terminal width in columns, or [`DEFAULT_WIDTH`].
#[must_use]
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((w, _)) if w > 0 => usize::from(w),
        _ => DEFAULT_WIDTH,
    }
}

/// Re-flows `text` so that no line is wider than `width`.
///
/// Each line is trimmed, consecutive non-blank lines form a paragraph, and
/// each paragraph is filled greedily. Paragraphs are joined with one blank
/// line. Words longer than `width` are broken across lines.
#[must_use]
pub fn wrap_paragraphs(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.extend(line.split_whitespace());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
        .iter()
        .map(|words| fill(words, width))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn fill(words: &[&str], width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in words {
        for piece in split_long(word, width) {
            let piece_len = piece.chars().count();
            if line_len > 0 && line_len + 1 + piece_len > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(piece);
            line_len += piece_len;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

/// Splits `word` into chunks of at most `width` characters.
fn split_long(word: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = word;
    while rest.chars().count() > width {
        let cut = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(i, _)| i);
        let (head, tail) = rest.split_at(cut);
        pieces.push(head);
        rest = tail;
    }
    pieces.push(rest);
    pieces
}

/// Prints `text` wrapped to the terminal width.
pub fn say(text: &str) {
    say_with_width(text, terminal_width());
}

/// Prints `text` wrapped to `width` columns.
pub fn say_with_width(text: &str, width: usize) {
    println!("{}", wrap_paragraphs(text, width));
}
