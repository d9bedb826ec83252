//! Stochastic thinning of over-represented grammatical classes.
//!
//! A handful of lemma/stem/tense combinations account for a huge share of
//! all verb tokens; left alone they would dominate any drill deck built
//! from the corpus. Each occurrence gets one random draw and the rules run
//! in order, first match deciding. Given the same seed and the same token
//! sequence the decisions are fully reproducible.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::corpus::{Root, VerbForm};
use crate::parsing::ParsingFeatures;
use hebrew_utils::text::has_vowel_points;
use hebrew_utils::{Stem, Tense};

/// Lemmas below this corpus frequency are dropped outright.
const MIN_LEMMA_FREQ: u32 = 20;
/// Qal perfect is so common that it gets a higher bar.
const MIN_QAL_PERFECT_LEMMA_FREQ: u32 = 50;

/// "to say", far and away the most frequent narrative verb.
const LEMMA_SAY: &str = "אמר";
/// "to be".
const LEMMA_BE: &str = "היה";

pub struct OccurrenceFilter {
    rng: ChaCha8Rng,
}

impl OccurrenceFilter {
    pub fn new(seed: u64) -> Self {
        OccurrenceFilter {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Decide whether to drop one occurrence. Must run after the token's
    /// entities are registered (it reads the deduped root) and before the
    /// occurrence is committed to the output list.
    ///
    /// Consumes exactly one draw per call regardless of which rule fires,
    /// so decision streams stay aligned across runs.
    pub fn should_drop(
        &mut self,
        root: &Root,
        form: &VerbForm,
        parsings: &[ParsingFeatures],
    ) -> bool {
        let draw: f64 = self.rng.random();

        // Rare markers are never thinned.
        if parsings
            .iter()
            .any(|p| p.paragogic_nun || p.paragogic_heh)
        {
            return false;
        }

        for parsing in parsings {
            if root.lemma == LEMMA_SAY
                && parsing.stem == Stem::Qal
                && parsing.tense == Tense::Perfect
            {
                return draw < 2.0 / 3.0;
            }
            if root.lemma == LEMMA_SAY
                && parsing.stem == Stem::Qal
                && parsing.tense == Tense::ConvertedImperfect
            {
                return draw < 3.0 / 4.0;
            }
            if root.lemma == LEMMA_BE && parsing.stem == Stem::Qal {
                if matches!(parsing.tense, Tense::Perfect | Tense::ConvertedImperfect) {
                    return draw < 3.0 / 4.0;
                }
                return draw < 1.0 / 2.0;
            }
            if root.frequency < MIN_LEMMA_FREQ
                || (parsing.stem == Stem::Qal
                    && parsing.tense == Tense::Perfect
                    && root.frequency < MIN_QAL_PERFECT_LEMMA_FREQ)
            {
                return true;
            }
        }

        // An unpointed form is useless for parsing drills.
        if !has_vowel_points(&form.text) {
            return true;
        }

        false
    }
}
