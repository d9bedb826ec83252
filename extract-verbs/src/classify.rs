//! Decoders from the two independent annotation encodings to one canonical
//! [`ParsingFeatures`] vector.
//!
//! The tagged encoding spells every field out as its own corpus feature;
//! the positional encoding packs part of speech, stem, tense and agreement
//! into fixed character positions of one compact code. The two decoders
//! share nothing but the output type, so a disagreement between them is
//! visible as two distinct feature vectors on the same occurrence.
//!
//! Four markers are not tagged in either encoding and are derived here from
//! the inflectional ending and the surface form: paragogic nun, paragogic
//! heh, cohortative, and energic nun.

use crate::parsing::ParsingFeatures;
use crate::records::WordRecord;
use hebrew_utils::text::strip_accents;
use hebrew_utils::{Gender, Number, Person, Stem, Tense};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The token's stem is outside the seven supported categories; the
    /// caller drops the token.
    #[error("unsupported verbal stem code {0:?}")]
    UnsupportedStem(String),
    #[error("unrecognized tense code {0:?}")]
    UnsupportedTense(String),
    #[error("unrecognized {field} code {code:?}")]
    BadAgreementCode { field: &'static str, code: String },
    /// The positional suffix code uses a prefix outside the known set. The
    /// decode tables are assumed stale, so this aborts the whole run.
    #[error("unexpected morphology suffix code {0:?}")]
    UnexpectedSuffixCode(String),
}

const QAMATS: char = '\u{05B8}';

// Suffix spellings below are written in NFC, matching the normalized input
// records: canonical reordering puts vowel points before the dagesh.
const TAV_DAGESH: &str = "\u{05EA}\u{05BC}"; // תּ
const ENERGIC_3MS: [&str; 2] = [
    "\u{05E0}\u{05BC}\u{05D5}\u{05BC}",         // ־נּוּ
    "\u{05E0}\u{05B0}\u{05D4}\u{05D5}\u{05BC}", // ־נְהוּ
];
const ENERGIC_2MS: [&str; 2] = [
    "\u{05DA}\u{05B8}\u{05BC}",         // ־ךָּ
    "\u{05DB}\u{05B8}\u{05BC}\u{05D4}", // ־כָּה
];
const ENERGIC_1CS: [&str; 2] = [
    "\u{05E0}\u{05B4}\u{05BC}\u{05D9}",         // ־נִּי
    "\u{05E0}\u{05B0}\u{05E0}\u{05B4}\u{05D9}", // ־נְנִי
];
const ENERGIC_3FS: &str = "\u{05E0}\u{05B8}\u{05BC}\u{05D4}"; // ־נָּה

/// Decode the tagged (per-feature) annotation of a verb token, deriving the
/// four ending-based markers along the way.
pub fn classify_tagged(record: &WordRecord) -> Result<ParsingFeatures, ClassifyError> {
    let stem = Stem::from_tagged(&record.stem)
        .ok_or_else(|| ClassifyError::UnsupportedStem(record.stem.clone()))?;
    let tense = Tense::from_tagged(&record.tense)
        .ok_or_else(|| ClassifyError::UnsupportedTense(record.tense.clone()))?;

    let mut features = ParsingFeatures {
        stem,
        tense,
        person: parse_person(&record.person, "person")?,
        gender: parse_gender(&record.gender, "gender")?,
        number: parse_number(&record.number, "number")?,
        suffix_person: parse_person(&record.suffix_person, "suffix person")?,
        suffix_gender: parse_gender(&record.suffix_gender, "suffix gender")?,
        suffix_number: parse_number(&record.suffix_number, "suffix number")?,
        paragogic_nun: false,
        paragogic_heh: false,
        cohortative: false,
        energic_nun: false,
    };

    let ending = strip_accents(&record.verbal_ending);
    let word = strip_accents(&record.surface);

    features.paragogic_nun =
        !ending_expects_nun(&features) && matches!(ending.chars().last(), Some('נ' | 'ן'));
    features.paragogic_heh = !features.has_suffix()
        && !ending_expects_heh(&features)
        && ends_with_added_heh(&ending);
    features.cohortative = features.person == Person::First
        && matches!(features.tense, Tense::Imperfect | Tense::ConvertedImperfect)
        && ending.ends_with('ה');
    features.energic_nun = has_energic_suffix(&features, &word, &record.lemma);

    Ok(features)
}

/// Decode the compact positional annotation, or report that none usable is
/// present. Missing codes, placeholders, non-verbal codes, and unrecognized
/// stem or tense letters all yield `Ok(None)`; only a wholly unknown suffix
/// prefix is an error.
pub fn classify_positional(
    record: &WordRecord,
) -> Result<Option<ParsingFeatures>, ClassifyError> {
    let mut code = record.morph_code.clone().unwrap_or_default();
    let mut suffix_code = record.morph_suffix_code.clone().unwrap_or_default();

    // A two-letter primary code means the morphology for this token landed
    // on the suffix segment of a multi-part word.
    if code.chars().count() == 2 {
        code = std::mem::take(&mut suffix_code);
    }
    if code == suffix_code {
        suffix_code.clear();
    }

    let chars: Vec<char> = code.chars().collect();
    if chars.is_empty() || code == "*" || chars.get(1) != Some(&'V') {
        return Ok(None);
    }
    if !suffix_code.is_empty()
        && !suffix_code.starts_with("HS")
        && !suffix_code.starts_with("HPp")
    {
        return Err(ClassifyError::UnexpectedSuffixCode(suffix_code));
    }

    let Some(stem) = chars.get(2).copied().and_then(Stem::from_positional) else {
        return Ok(None);
    };
    let Some(tense) = chars.get(3).copied().and_then(Tense::from_positional) else {
        return Ok(None);
    };

    // Subject agreement follows the tense letter, but only finite forms
    // spend a position on person.
    let (person, gender, number) = if tense.has_subject_person() {
        let Some(person) = chars.get(4).copied() else {
            // truncated finite code
            return Ok(None);
        };
        (
            Person::from_positional(person),
            chars
                .get(5)
                .copied()
                .map(Gender::from_positional)
                .unwrap_or(Gender::NotApplicable),
            chars
                .get(6)
                .copied()
                .map(Number::from_positional)
                .unwrap_or(Number::NotApplicable),
        )
    } else {
        (
            Person::NotApplicable,
            chars
                .get(4)
                .copied()
                .map(Gender::from_positional)
                .unwrap_or(Gender::NotApplicable),
            chars
                .get(5)
                .copied()
                .map(Number::from_positional)
                .unwrap_or(Number::NotApplicable),
        )
    };

    let suffix: Vec<char> = suffix_code.chars().collect();
    let (suffix_person, suffix_gender, suffix_number) = if suffix.len() > 3 {
        (
            Person::from_positional(suffix[3]),
            suffix
                .get(4)
                .copied()
                .map(Gender::from_positional)
                .unwrap_or(Gender::NotApplicable),
            suffix
                .get(5)
                .copied()
                .map(Number::from_positional)
                .unwrap_or(Number::NotApplicable),
        )
    } else {
        (
            Person::NotApplicable,
            Gender::NotApplicable,
            Number::NotApplicable,
        )
    };

    Ok(Some(ParsingFeatures {
        stem,
        tense,
        person,
        gender,
        number,
        suffix_person,
        suffix_gender,
        suffix_number,
        paragogic_nun: suffix.get(2) == Some(&'n'),
        paragogic_heh: matches!(suffix.get(2), Some('d') | Some('h')),
        cohortative: chars.get(3) == Some(&'h'),
        // the positional encoding does not mark the energic nun
        energic_nun: false,
    }))
}

fn parse_person(code: &str, field: &'static str) -> Result<Person, ClassifyError> {
    Person::from_tagged(code).ok_or_else(|| ClassifyError::BadAgreementCode {
        field,
        code: code.to_string(),
    })
}

fn parse_gender(code: &str, field: &'static str) -> Result<Gender, ClassifyError> {
    Gender::from_tagged(code).ok_or_else(|| ClassifyError::BadAgreementCode {
        field,
        code: code.to_string(),
    })
}

fn parse_number(code: &str, field: &'static str) -> Result<Number, ClassifyError> {
    Number::from_tagged(code).ok_or_else(|| ClassifyError::BadAgreementCode {
        field,
        code: code.to_string(),
    })
}

/// 2fp/3fp forms end in nun as part of their regular ending; only an added
/// nun counts as paragogic.
fn ending_expects_nun(features: &ParsingFeatures) -> bool {
    matches!(features.person, Person::Second | Person::Third)
        && features.gender == Gender::Feminine
        && features.number == Number::Plural
}

/// Cells whose regular ending is already heh-final.
fn ending_expects_heh(features: &ParsingFeatures) -> bool {
    let third_or_second = matches!(features.person, Person::Second | Person::Third);
    match features.tense {
        Tense::Perfect => {
            (features.person == Person::Third
                && features.gender == Gender::Feminine
                && features.number == Number::Singular)
                || (features.person == Person::Second
                    && features.gender == Gender::Masculine
                    && features.number == Number::Singular)
        }
        Tense::Imperfect | Tense::ConvertedImperfect => {
            (third_or_second
                && features.gender == Gender::Feminine
                && features.number == Number::Plural)
                || features.person == Person::First
        }
        Tense::Imperative => {
            features.gender == Gender::Feminine && features.number == Number::Plural
        }
        _ => false,
    }
}

/// The ending closes with the letter heh, or with a bare qamats that is not
/// part of a 2ms perfect tav or a suffixed kaf.
fn ends_with_added_heh(ending: &str) -> bool {
    if ending.ends_with('ה') {
        return true;
    }
    let Some(before) = ending.strip_suffix(QAMATS) else {
        return false;
    };
    !(before.ends_with('ך')
        || before.ends_with('כ')
        || before.ends_with('ת')
        || before.ends_with(TAV_DAGESH))
}

/// Energic nun: a heavy pronominal suffix spelling on one of the four
/// suffix cells that have one. The 1cs case must not confuse a root-final
/// geminated nun with the marker.
fn has_energic_suffix(features: &ParsingFeatures, word: &str, lemma: &str) -> bool {
    match (
        features.suffix_person,
        features.suffix_gender,
        features.suffix_number,
    ) {
        (Person::Third, Gender::Masculine, Number::Singular) => {
            ENERGIC_3MS.iter().any(|suffix| word.ends_with(suffix))
        }
        (Person::Second, Gender::Masculine, Number::Singular) => {
            ENERGIC_2MS.iter().any(|suffix| word.ends_with(suffix))
        }
        (Person::First, _, Number::Singular) => {
            word.ends_with(ENERGIC_1CS[0])
                || (word.ends_with(ENERGIC_1CS[1]) && !lemma.ends_with("נן"))
        }
        (Person::Third, Gender::Feminine, Number::Singular) => word.ends_with(ENERGIC_3FS),
        _ => false,
    }
}
