// Conversions that work on the raw string without splitting it into words

use unicode_segmentation::UnicodeSegmentation;

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Strip leading and trailing whitespace. Inner delimiters and case are kept.
pub fn trimcase(text: &str) -> String {
    text.trim().to_string()
}

/// Uppercase the first grapheme and copy the rest untouched.
pub fn capitalcase(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    let Some(first) = graphemes.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&first.to_uppercase());
    out.push_str(&text[first.len()..]);
    out
}

/// Keep letters and digits only, in their original order and case.
pub fn alphanumcase(text: &str) -> String {
    text.chars().filter(|c| c.is_alphanumeric()).collect()
}
