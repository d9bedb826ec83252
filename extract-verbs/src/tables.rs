//! Output data model: six flat tables cross-referencing each other by dense
//! rank id only. Every row serializes as a positional array to keep the
//! corpus document small.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// The complete serialized corpus.
#[derive(Debug, Serialize)]
pub struct CorpusTables {
    pub verbs: Vec<VerbFormRow>,
    pub occurrences: Vec<OccurrenceRow>,
    pub parsings: Vec<ParsingRow>,
    pub verses: Vec<VerseRow>,
    pub roots: Vec<RootRow>,
    pub books: Vec<BookRow>,
}

/// Display name of the book.
#[derive(Debug, Serialize, PartialEq)]
pub struct BookRow(pub String);

/// Transliterated lemma, corpus frequency, gloss.
#[derive(Debug, Serialize, PartialEq)]
pub struct RootRow(pub String, pub u32, pub String);

/// Transliterated surface text, root id.
#[derive(Debug, Serialize, PartialEq)]
pub struct VerbFormRow(pub String, pub u32);

/// Stem id, tense id, subject person/gender/number, suffix
/// person/gender/number, then the four marker flags as 0/1 in the order
/// paragogic nun, paragogic heh, cohortative, energic nun.
#[derive(Debug, Serialize, PartialEq)]
pub struct ParsingRow(
    pub u8,
    pub u8,
    pub [u8; 3],
    pub [u8; 3],
    pub u8,
    pub u8,
    pub u8,
    pub u8,
);

/// Book id, chapter, verse, transliterated verse text.
#[derive(Debug, Serialize, PartialEq)]
pub struct VerseRow(pub u32, pub u32, pub u32, pub String);

/// Verb form id, verse id, then one parsing id per analysis (two when the
/// encodings disagreed). Serialized flat, so rows vary in length.
#[derive(Debug, PartialEq)]
pub struct OccurrenceRow {
    pub verb: u32,
    pub verse: u32,
    pub parsings: Vec<u32>,
}

impl Serialize for OccurrenceRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2 + self.parsings.len()))?;
        seq.serialize_element(&self.verb)?;
        seq.serialize_element(&self.verse)?;
        for parsing in &self.parsings {
            seq.serialize_element(parsing)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_serialize_as_positional_arrays() {
        let row = RootRow("?O,".to_string(), 120, "say".to_string());
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            "[\"?O,\",120,\"say\"]"
        );

        let row = ParsingRow(1, 3, [3, 1, 1], [0, 0, 0], 0, 0, 0, 1);
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            "[1,3,[3,1,1],[0,0,0],0,0,0,1]"
        );
    }

    #[test]
    fn occurrence_row_flattens_parsing_ids() {
        let row = OccurrenceRow {
            verb: 5,
            verse: 9,
            parsings: vec![2],
        };
        assert_eq!(serde_json::to_string(&row).unwrap(), "[5,9,2]");

        let row = OccurrenceRow {
            verb: 5,
            verse: 9,
            parsings: vec![2, 7],
        };
        assert_eq!(serde_json::to_string(&row).unwrap(), "[5,9,2,7]");
    }

    #[test]
    fn book_row_is_a_bare_string() {
        let row = BookRow("1 Samuel".to_string());
        assert_eq!(serde_json::to_string(&row).unwrap(), r#""1 Samuel""#);
    }
}
