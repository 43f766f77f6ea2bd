use super::lexicon::Lexicon;

/// First and last katakana with a hiragana counterpart (ァ..ヶ)
const KATAKANA_START: u32 = 0x30A1;
const KATAKANA_END: u32 = 0x30F6;
/// Distance from a katakana code point down to its hiragana twin
const KANA_OFFSET: u32 = 0x60;

/// Produces the searchable "bag of forms" for a piece of text.
///
/// The output is three space-separated layers: the case-folded input, the
/// same text with dictionary fragments expanded to their readings, and that
/// expansion with katakana unified to hiragana. Substring search over the
/// bag matches on whichever layer carries the needed spelling.
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> TextNormalizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let folded = fold_case(text);
        let expanded = self.expand_phonetic(&folded);
        let unified = katakana_to_hiragana(&expanded);

        format!("{} {} {}", folded, expanded, unified)
    }

    /// Applies every dictionary entry in lexicon order over one buffer, so a
    /// later entry may match text produced by an earlier one.
    pub fn expand_phonetic(&self, text: &str) -> String {
        let mut buffer = text.to_string();
        for entry in self.lexicon.phonetic() {
            if buffer.contains(entry.source.as_str()) {
                buffer = buffer.replace(entry.source.as_str(), &entry.phonetic);
            }
        }
        buffer
    }
}

/// ASCII lowercasing. Every other character, including full-width Latin and
/// half-width katakana, is left as written.
pub fn fold_case(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Maps each katakana in ァ..ヶ to its hiragana twin; everything else, including
/// the long-vowel mark, passes through unchanged.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (KATAKANA_START..=KATAKANA_END).contains(&code) {
                char::from_u32(code - KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
