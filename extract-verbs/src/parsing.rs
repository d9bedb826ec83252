//! The canonical grammatical feature vector for one verb occurrence.

use hebrew_utils::{Gender, Number, Person, Stem, Tense};
use rank_table::Merge;

/// A full morphological analysis of a verb form: stem, conjugation, subject
/// agreement, pronominal suffix agreement, and the four optional markers.
///
/// Equality is linguistic: person/gender/number compare by their normalized
/// values, so an analysis decoded from the tagged corpus and one decoded
/// from the positional morphology compare equal when they describe the same
/// cell. The dedup [`key`](ParsingFeatures::key) is finer than equality
/// because it spells out the raw codes.
#[derive(Debug, Clone)]
pub struct ParsingFeatures {
    pub stem: Stem,
    pub tense: Tense,
    pub person: Person,
    pub gender: Gender,
    pub number: Number,
    pub suffix_person: Person,
    pub suffix_gender: Gender,
    pub suffix_number: Number,
    pub paragogic_nun: bool,
    pub paragogic_heh: bool,
    pub cohortative: bool,
    pub energic_nun: bool,
}

impl ParsingFeatures {
    /// Whether a pronominal suffix is attached at all.
    pub fn has_suffix(&self) -> bool {
        !matches!(self.suffix_person, Person::NotApplicable)
    }

    /// Literal field-by-field description using the raw codes. This is the
    /// dedup key: two analyses can be `==` yet occupy distinct slots when
    /// their raw codes differ (e.g. `unknown` vs `NA`).
    pub fn key(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {} {} {} {}",
            self.stem.code(),
            self.tense.code(),
            self.person.code(),
            self.gender.code(),
            self.number.code(),
            self.suffix_person.code(),
            self.suffix_gender.code(),
            self.suffix_number.code(),
            flag(self.paragogic_nun),
            flag(self.paragogic_heh),
            flag(self.cohortative),
            flag(self.energic_nun),
        )
    }
}

fn flag(value: bool) -> &'static str {
    if value { "T" } else { "F" }
}

impl PartialEq for ParsingFeatures {
    fn eq(&self, other: &Self) -> bool {
        self.stem == other.stem
            && self.tense == other.tense
            && self.person.normalized() == other.person.normalized()
            && self.gender.normalized() == other.gender.normalized()
            && self.number.normalized() == other.number.normalized()
            && self.suffix_person.normalized() == other.suffix_person.normalized()
            && self.suffix_gender.normalized() == other.suffix_gender.normalized()
            && self.suffix_number.normalized() == other.suffix_number.normalized()
            && self.paragogic_nun == other.paragogic_nun
            && self.paragogic_heh == other.paragogic_heh
            && self.cohortative == other.cohortative
            && self.energic_nun == other.energic_nun
    }
}

impl Eq for ParsingFeatures {}

impl Merge for ParsingFeatures {
    fn merge(&mut self, _other: Self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(stem: Stem, tense: Tense) -> ParsingFeatures {
        ParsingFeatures {
            stem,
            tense,
            person: Person::NotApplicable,
            gender: Gender::NotApplicable,
            number: Number::NotApplicable,
            suffix_person: Person::NotApplicable,
            suffix_gender: Gender::NotApplicable,
            suffix_number: Number::NotApplicable,
            paragogic_nun: false,
            paragogic_heh: false,
            cohortative: false,
            energic_nun: false,
        }
    }

    #[test]
    fn unknown_and_not_applicable_compare_equal() {
        let a = ParsingFeatures {
            person: Person::Unknown,
            ..bare(Stem::Qal, Tense::ActiveParticiple)
        };
        let b = ParsingFeatures {
            person: Person::NotApplicable,
            ..bare(Stem::Qal, Tense::ActiveParticiple)
        };
        assert_eq!(a, b);
        // but the dedup key still tells them apart
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn differing_flags_break_equality() {
        let a = bare(Stem::Qal, Tense::Imperfect);
        let b = ParsingFeatures {
            paragogic_nun: true,
            ..bare(Stem::Qal, Tense::Imperfect)
        };
        assert_ne!(a, b);
    }

    #[test]
    fn key_spells_out_every_field() {
        let p = ParsingFeatures {
            person: Person::Third,
            gender: Gender::Feminine,
            number: Number::Plural,
            energic_nun: true,
            ..bare(Stem::Hifil, Tense::ConvertedImperfect)
        };
        assert_eq!(p.key(), "hif wayq 3 f p NA NA NA F F F T");
    }

    #[test]
    fn suffix_presence() {
        let mut p = bare(Stem::Qal, Tense::Perfect);
        assert!(!p.has_suffix());
        p.suffix_person = Person::Unknown;
        assert!(p.has_suffix());
        p.suffix_person = Person::Third;
        assert!(p.has_suffix());
    }
}
