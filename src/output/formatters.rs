//! Formatting utilities for terminal output

/// Circled-number badge for a word length, e.g. `④` for a four-letter word
///
/// Lengths past twenty fall back to a parenthesized number.
#[must_use]
pub fn length_badge(length: usize) -> String {
    match length {
        // U+2460 CIRCLED DIGIT ONE .. U+2473 CIRCLED NUMBER TWENTY
        1..=20 => char::from_u32(0x2460 + length as u32 - 1)
            .map_or_else(|| format!("({length})"), String::from),
        _ => format!("({length})"),
    }
}

/// A word followed by its length badge
#[must_use]
pub fn word_with_badge(word: &str) -> String {
    format!("{} {word}", length_badge(word.chars().count()))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
