//! Input tokenization.
//!
//! Converts a raw input line into the lowercase words the matcher compares
//! against compiled templates.

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Converts words to lowercase
    /// - Splits on any run of whitespace
    /// - Keeps punctuation attached to its word
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        input
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
