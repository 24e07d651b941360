use crate::catalog::Language;

const TELUGU_BLOCK: std::ops::RangeInclusive<char> = '\u{0C00}'..='\u{0C7F}';

/// Tag text by the share of Telugu-script letters among Latin + Telugu letters.
pub fn tag(text: &str) -> Language {
    let mut telugu = 0usize;
    let mut alpha = 0usize;
    for c in text.chars() {
        if TELUGU_BLOCK.contains(&c) {
            telugu += 1;
            alpha += 1;
        } else if c.is_ascii_alphabetic() {
            alpha += 1;
        }
    }
    if alpha == 0 {
        return Language::English;
    }

    let ratio = telugu as f64 / alpha as f64;
    if ratio > 0.3 {
        Language::Telugu
    } else if ratio > 0.05 {
        Language::Mixed
    } else {
        Language::English
    }
}
