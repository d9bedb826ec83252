//! Grammatical categories for Biblical Hebrew verbs.
//!
//! Each category can be parsed from two independent annotation encodings:
//! the tagged corpus codes (full strings like `"qal"` or `"p3"`) and the
//! compact positional morphology codes (single letters). The `code` methods
//! return the raw tagged-corpus spelling, which the pipeline uses for its
//! fine-grained dedup keys; the `id`/`normalized` methods return the compact
//! integers used in the serialized output.

use serde::{Deserialize, Serialize};

/// Derivational stem (binyan). Only these seven are supported; anything else
/// in the corpus is rare enough to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Qal,
    Nifal,
    Piel,
    Pual,
    Hifil,
    Hofal,
    Hitpael,
}

impl Stem {
    pub fn from_tagged(code: &str) -> Option<Self> {
        match code {
            "qal" => Some(Stem::Qal),
            "nif" => Some(Stem::Nifal),
            "piel" => Some(Stem::Piel),
            "pual" => Some(Stem::Pual),
            "hif" => Some(Stem::Hifil),
            "hof" => Some(Stem::Hofal),
            "hit" => Some(Stem::Hitpael),
            _ => None,
        }
    }

    pub fn from_positional(letter: char) -> Option<Self> {
        match letter {
            'q' | 'Q' => Some(Stem::Qal),
            'N' => Some(Stem::Nifal),
            'p' => Some(Stem::Piel),
            'P' => Some(Stem::Pual),
            'h' => Some(Stem::Hifil),
            'H' => Some(Stem::Hofal),
            't' => Some(Stem::Hitpael),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Stem::Qal => "qal",
            Stem::Nifal => "nif",
            Stem::Piel => "piel",
            Stem::Pual => "pual",
            Stem::Hifil => "hif",
            Stem::Hofal => "hof",
            Stem::Hitpael => "hit",
        }
    }

    /// Output id, ordered by corpus frequency of the stem.
    pub fn id(&self) -> u8 {
        match self {
            Stem::Qal => 1,
            Stem::Hifil => 2,
            Stem::Piel => 3,
            Stem::Nifal => 4,
            Stem::Hitpael => 5,
            Stem::Pual => 6,
            Stem::Hofal => 7,
        }
    }
}

/// Conjugation (tense/aspect form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Perfect,
    Imperfect,
    /// Wayyiqtol, the narrative past built on the imperfect.
    ConvertedImperfect,
    ActiveParticiple,
    InfinitiveConstruct,
    Imperative,
    PassiveParticiple,
    InfinitiveAbsolute,
}

impl Tense {
    pub fn from_tagged(code: &str) -> Option<Self> {
        match code {
            "perf" => Some(Tense::Perfect),
            "impf" => Some(Tense::Imperfect),
            "wayq" => Some(Tense::ConvertedImperfect),
            "ptca" => Some(Tense::ActiveParticiple),
            "infc" => Some(Tense::InfinitiveConstruct),
            "impv" => Some(Tense::Imperative),
            "ptcp" => Some(Tense::PassiveParticiple),
            "infa" => Some(Tense::InfinitiveAbsolute),
            _ => None,
        }
    }

    /// The positional encoding distinguishes more conjugations than the
    /// tagged one (sequential perfect, jussive, cohortative letters); those
    /// fold into the nearest tagged category.
    pub fn from_positional(letter: char) -> Option<Self> {
        match letter {
            'p' | 'q' => Some(Tense::Perfect),
            'i' | 'h' | 'j' => Some(Tense::Imperfect),
            'w' => Some(Tense::ConvertedImperfect),
            'v' => Some(Tense::Imperative),
            'r' => Some(Tense::ActiveParticiple),
            's' => Some(Tense::PassiveParticiple),
            'a' => Some(Tense::InfinitiveAbsolute),
            'c' => Some(Tense::InfinitiveConstruct),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Tense::Perfect => "perf",
            Tense::Imperfect => "impf",
            Tense::ConvertedImperfect => "wayq",
            Tense::ActiveParticiple => "ptca",
            Tense::InfinitiveConstruct => "infc",
            Tense::Imperative => "impv",
            Tense::PassiveParticiple => "ptcp",
            Tense::InfinitiveAbsolute => "infa",
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Tense::Perfect => 1,
            Tense::Imperfect => 2,
            Tense::ConvertedImperfect => 3,
            Tense::ActiveParticiple => 4,
            Tense::InfinitiveConstruct => 5,
            Tense::Imperative => 6,
            Tense::PassiveParticiple => 7,
            Tense::InfinitiveAbsolute => 8,
        }
    }

    /// Whether forms in this conjugation inflect for subject person.
    /// Participles and infinitives do not.
    pub fn has_subject_person(&self) -> bool {
        !matches!(
            self,
            Tense::ActiveParticiple
                | Tense::PassiveParticiple
                | Tense::InfinitiveConstruct
                | Tense::InfinitiveAbsolute
        )
    }
}

/// Grammatical person, with the two "no value" states the tagged corpus
/// distinguishes: `Unknown` (ambiguous form) and `NotApplicable` (the slot
/// does not exist, e.g. person on an infinitive, or no suffix attached).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
    Unknown,
    NotApplicable,
}

impl Person {
    pub fn from_tagged(code: &str) -> Option<Self> {
        match code {
            "p1" | "1" => Some(Person::First),
            "p2" | "2" => Some(Person::Second),
            "p3" | "3" => Some(Person::Third),
            "unknown" => Some(Person::Unknown),
            "NA" => Some(Person::NotApplicable),
            _ => None,
        }
    }

    pub fn from_positional(letter: char) -> Self {
        match letter {
            '1' => Person::First,
            '2' => Person::Second,
            '3' => Person::Third,
            _ => Person::Unknown,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Person::First => "1",
            Person::Second => "2",
            Person::Third => "3",
            Person::Unknown => "unknown",
            Person::NotApplicable => "NA",
        }
    }

    /// Collapses `Unknown` and `NotApplicable` to 0; this is the value the
    /// output tables carry and the value linguistic equality compares.
    pub fn normalized(&self) -> u8 {
        match self {
            Person::First => 1,
            Person::Second => 2,
            Person::Third => 3,
            Person::Unknown | Person::NotApplicable => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
    /// Forms that do not distinguish gender.
    Common,
    Unknown,
    NotApplicable,
}

impl Gender {
    pub fn from_tagged(code: &str) -> Option<Self> {
        match code {
            "m" => Some(Gender::Masculine),
            "f" => Some(Gender::Feminine),
            "c" => Some(Gender::Common),
            "unknown" => Some(Gender::Unknown),
            "NA" => Some(Gender::NotApplicable),
            _ => None,
        }
    }

    pub fn from_positional(letter: char) -> Self {
        match letter {
            'm' => Gender::Masculine,
            'f' => Gender::Feminine,
            'c' | 'b' => Gender::Common,
            _ => Gender::Unknown,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
            Gender::Common => "c",
            Gender::Unknown => "unknown",
            Gender::NotApplicable => "NA",
        }
    }

    pub fn normalized(&self) -> u8 {
        match self {
            Gender::Masculine => 1,
            Gender::Feminine => 2,
            Gender::Common | Gender::Unknown | Gender::NotApplicable => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Plural,
    Unknown,
    NotApplicable,
}

impl Number {
    pub fn from_tagged(code: &str) -> Option<Self> {
        match code {
            "sg" | "s" => Some(Number::Singular),
            "pl" | "p" => Some(Number::Plural),
            "unknown" => Some(Number::Unknown),
            "NA" => Some(Number::NotApplicable),
            _ => None,
        }
    }

    pub fn from_positional(letter: char) -> Self {
        match letter {
            's' => Number::Singular,
            'p' => Number::Plural,
            _ => Number::Unknown,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Number::Singular => "s",
            Number::Plural => "p",
            Number::Unknown => "unknown",
            Number::NotApplicable => "NA",
        }
    }

    pub fn normalized(&self) -> u8 {
        match self {
            Number::Singular => 1,
            Number::Plural => 2,
            Number::Unknown | Number::NotApplicable => 0,
        }
    }
}
