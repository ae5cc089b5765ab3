//! Input tokenizer

/// Lower-cases `text` and splits it on whitespace.
///
/// Blank input yields an empty vector.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}
