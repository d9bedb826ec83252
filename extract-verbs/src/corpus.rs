//! The entity types the pipeline deduplicates: books, roots, verb forms,
//! verses, and the occurrences that tie them together.
//!
//! Entities cross-reference each other by canonical string key; the final
//! integer ids only exist after every table is finalized.

use std::collections::BTreeSet;

use crate::records::WordRecord;
use hebrew_utils::text::{clean_verse_text, strip_accents};
use rank_table::Merge;

#[derive(Debug, Clone)]
pub struct Book {
    /// Corpus book name, underscores and all.
    pub name: String,
}

impl Book {
    pub fn new(record: &WordRecord) -> Self {
        Book {
            name: record.book.clone(),
        }
    }

    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}

impl Merge for Book {
    fn merge(&mut self, _other: Self) {}
}

/// A verbal lemma with its corpus-wide frequency and gloss.
#[derive(Debug, Clone)]
pub struct Root {
    pub lemma: String,
    pub frequency: u32,
    pub gloss: String,
}

impl Root {
    pub fn new(record: &WordRecord) -> Self {
        Root {
            lemma: record.lemma.clone(),
            frequency: record.lemma_frequency,
            gloss: record.gloss.clone(),
        }
    }
}

impl Merge for Root {
    fn merge(&mut self, _other: Self) {}
}

/// One distinct surface form of a verb, keyed by its accent-stripped text.
/// The accented spellings that collapse onto it are kept as variants.
#[derive(Debug, Clone)]
pub struct VerbForm {
    /// Accent-stripped surface text; the dedup key.
    pub text: String,
    /// Lemma key of the owning root.
    pub root_key: String,
    /// Accented spellings seen for this form, in lexicographic order.
    pub variants: BTreeSet<String>,
}

impl VerbForm {
    pub fn new(record: &WordRecord) -> Self {
        let mut surface = record.surface.clone();
        // A converted imperfect is inseparable from its vav prefix; when the
        // corpus tokenizes the conjunction separately, glue it back on.
        if record.tense == "wayq" {
            if let Some(preceding) = &record.preceding {
                if preceding.part_of_speech == "conj" {
                    surface = format!("{}{}", preceding.surface, surface);
                }
            }
        }
        VerbForm {
            text: strip_accents(&surface),
            root_key: record.lemma.clone(),
            variants: BTreeSet::from([surface]),
        }
    }
}

impl Merge for VerbForm {
    fn merge(&mut self, other: Self) {
        self.variants.extend(other.variants);
    }
}

#[derive(Debug, Clone)]
pub struct Verse {
    /// Name key of the containing book.
    pub book_key: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl Verse {
    pub fn new(record: &WordRecord) -> Self {
        Verse {
            book_key: record.book.clone(),
            chapter: record.chapter,
            verse: record.verse,
            text: clean_verse_text(&record.verse_text),
        }
    }

    pub fn key(&self) -> String {
        format!("{} {}:{}", self.book_key, self.chapter, self.verse)
    }
}

impl Merge for Verse {
    fn merge(&mut self, _other: Self) {}
}

/// One verb token that survived filtering: a form, where it occurs, and one
/// or two analyses of it (the second present only when the positional
/// encoding disagrees with the tagged one).
#[derive(Debug, Clone)]
pub struct VerbOccurrence {
    pub form_key: String,
    pub verse_key: String,
    pub parsing_keys: Vec<String>,
}
