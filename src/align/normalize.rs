//! Word normalization shared by transcript and grouping words

/// The canonical apostrophe every quote variant collapses to
pub const APOSTROPHE: char = '\'';

/// Apostrophe look-alikes: typographic single quotes, backtick, modifier
/// letter apostrophe, prime
const APOSTROPHE_VARIANTS: [char; 6] = ['\u{2019}', '\u{2018}', '`', '\u{02BC}', '\u{2032}', '\u{201B}'];

/// Non-ASCII punctuation that commonly shows up in transcripts
const TYPOGRAPHIC_PUNCTUATION: [char; 12] = [
    '\u{201C}', '\u{201D}', '\u{201E}', '\u{2026}', '\u{2013}', '\u{2014}', '\u{00AB}', '\u{00BB}',
    '\u{00BF}', '\u{00A1}', '\u{2039}', '\u{203A}',
];

fn is_stripped(c: char) -> bool {
    c != APOSTROPHE && (c.is_ascii_punctuation() || TYPOGRAPHIC_PUNCTUATION.contains(&c))
}

/// Normalize a word for comparison
///
/// Quote variants become `'` and the word is lowercased. Then ASCII
/// punctuation other than `'` is removed, along with the characters in
/// `TYPOGRAPHIC_PUNCTUATION`, so `"You’ll,"` becomes `you'll`. Any other
/// non-ASCII symbol is kept as is. Applying it twice gives the same result as
/// applying it once.
pub fn normalize_word(word: &str) -> String {
    let standardized: String = word
        .chars()
        .map(|c| {
            if APOSTROPHE_VARIANTS.contains(&c) {
                APOSTROPHE
            } else {
                c
            }
        })
        .collect();

    standardized
        .to_lowercase()
        .chars()
        .filter(|&c| !is_stripped(c))
        .collect()
}

/// Split text on whitespace and normalize each word
///
/// Words that normalize to the empty string (bare punctuation such as `-`)
/// are kept so positions line up with the source words.
pub fn normalize_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(normalize_word).collect()
}
