//! Input data model: one tagged word as exported from the corpus database.
//!
//! The corpus-access layer resolves all structural navigation before export,
//! so each record already carries its section reference, the text of its
//! containing verse, and the word immediately before it.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRecord {
    /// Stable corpus node id, used by the curated exclusion list.
    pub node: u32,
    pub language: String,
    pub part_of_speech: String,
    /// Pointed surface text, cantillation included.
    pub surface: String,
    /// The inflectional ending morpheme of the surface form.
    pub verbal_ending: String,
    pub lemma: String,
    /// Corpus-wide frequency of the lemma.
    pub lemma_frequency: u32,
    pub gloss: String,
    pub stem: String,
    pub tense: String,
    pub person: String,
    pub gender: String,
    pub number: String,
    pub suffix_person: String,
    pub suffix_gender: String,
    pub suffix_number: String,
    /// Compact positional morphology code for the word, when annotated.
    #[serde(default)]
    pub morph_code: Option<String>,
    /// Positional morphology code for the word's suffix segment.
    #[serde(default)]
    pub morph_suffix_code: Option<String>,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    /// Text of the containing verse (or sentence where verse boundaries are
    /// missing), as resolved by the corpus-access layer.
    pub verse_text: String,
    /// The previous word in the same verse, if any.
    #[serde(default)]
    pub preceding: Option<PrecedingWord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecedingWord {
    pub part_of_speech: String,
    pub surface: String,
}

/// A plausible qal perfect 3ms verb token for tests to mutate.
#[cfg(test)]
pub(crate) fn sample_verb() -> WordRecord {
    WordRecord {
        node: 1,
        language: "Hebrew".to_string(),
        part_of_speech: "verb".to_string(),
        surface: "קָטַל".to_string(),
        verbal_ending: String::new(),
        lemma: "קטל".to_string(),
        lemma_frequency: 100,
        gloss: "kill".to_string(),
        stem: "qal".to_string(),
        tense: "perf".to_string(),
        person: "p3".to_string(),
        gender: "m".to_string(),
        number: "sg".to_string(),
        suffix_person: "NA".to_string(),
        suffix_gender: "NA".to_string(),
        suffix_number: "NA".to_string(),
        morph_code: None,
        morph_suffix_code: None,
        book: "Genesis".to_string(),
        chapter: 1,
        verse: 1,
        verse_text: "קָטַל אִישׁ".to_string(),
        preceding: None,
    }
}

impl WordRecord {
    /// NFC-normalize the Hebrew text fields. Exports differ in how they
    /// order combining niqqud, and the marker predicates match literal
    /// composed sequences.
    pub fn into_nfc(mut self) -> Self {
        self.surface = self.surface.nfc().collect();
        self.verbal_ending = self.verbal_ending.nfc().collect();
        self.lemma = self.lemma.nfc().collect();
        self.verse_text = self.verse_text.nfc().collect();
        if let Some(preceding) = &mut self.preceding {
            preceding.surface = preceding.surface.nfc().collect();
        }
        self
    }
}
