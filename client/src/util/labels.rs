//! Canonical option labels.
//!
//! The id submitted for an option is its display text with pictographs and
//! presentation marks removed. Symbols in the BMP blocks below take the
//! whitespace run directly before them along; supplementary-plane characters
//! (most emoji) are removed on their own and the final trim cleans up.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

/// BMP ranges stripped together with their leading whitespace.
const STRIPPED_BMP: [(char, char); 5] = [
    ('\u{2700}', '\u{27BF}'), // dingbats
    ('\u{E000}', '\u{F8FF}'), // private use
    ('\u{2000}', '\u{206F}'), // general punctuation (ZWJ and friends)
    ('\u{2600}', '\u{26FF}'), // misc symbols
    ('\u{FE00}', '\u{FE0F}'), // variation selectors
];

fn is_stripped_bmp(c: char) -> bool {
    STRIPPED_BMP.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

fn is_supplementary(c: char) -> bool {
    u32::from(c) > 0xFFFF
}

/// Strip emoji and pictograph annotations from `text` and trim it.
#[must_use]
pub fn canonical_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Whitespace seen since the last kept character; dropped if a stripped
    // BMP symbol follows directly.
    let mut pending = String::new();
    for c in text.chars() {
        if is_stripped_bmp(c) {
            pending.clear();
        } else if is_supplementary(c) {
            out.push_str(&pending);
            pending.clear();
        } else if c.is_whitespace() {
            pending.push(c);
        } else {
            out.push_str(&pending);
            pending.clear();
            out.push(c);
        }
    }
    out.push_str(&pending);
    out.trim().to_owned()
}
