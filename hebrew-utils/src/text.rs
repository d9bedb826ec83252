//! Hebrew text cleanup and transliteration helpers.

/// Word-joining hyphen; tokens containing it carry more than one word's
/// morphology and are skipped upstream.
pub const MAQEF: char = '\u{05BE}';

/// Verse-final punctuation mark.
pub const SOF_PASUQ: char = '\u{05C3}';

const VOWEL_POINTS_START: char = '\u{05B0}';
const VOWEL_POINTS_END: char = '\u{05BC}';

/// Keep only letters, vowel points, and shin/sin dots. Cantillation marks,
/// maqef, sof pasuq, and everything else is removed.
pub fn strip_accents(text: &str) -> String {
    text.chars()
        .filter(|c| {
            matches!(
                c,
                '\u{05B0}'..='\u{05BC}' | '\u{05C1}' | '\u{05C2}' | '\u{05C7}'..='\u{05EA}' | ' '
            )
        })
        .collect()
}

/// Whether the text carries any vowel pointing at all. Unpointed forms are
/// useless for drilling and get filtered out.
pub fn has_vowel_points(text: &str) -> bool {
    text.chars()
        .any(|c| (VOWEL_POINTS_START..=VOWEL_POINTS_END).contains(&c))
}

/// Shift every character at or above the Hebrew block down into printable
/// ASCII, starting at `!`. The output tables store all Hebrew text this way
/// to keep the serialized corpus small; the consumer reverses the shift.
pub fn compact_transliterate(text: &str) -> String {
    const HEBREW_BLOCK_START: u32 = 0x0591;
    const ASCII_START: u32 = 33;
    text.chars()
        .map(|c| {
            if (c as u32) < HEBREW_BLOCK_START {
                c
            } else {
                char::from_u32(ASCII_START + c as u32 - HEBREW_BLOCK_START).unwrap_or(c)
            }
        })
        .collect()
}

/// Display cleanup for verse text: drop the sof pasuq and collapse the
/// whitespace runs it leaves behind.
pub fn clean_verse_text(text: &str) -> String {
    text.chars()
        .filter(|&c| c != SOF_PASUQ)
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_accents_removes_cantillation() {
        // qatal with a tipeha accent on the second syllable
        assert_eq!(strip_accents("קָטַ֖ל"), "קָטַל");
    }

    #[test]
    fn strip_accents_removes_maqef_and_sof_pasuq() {
        assert_eq!(strip_accents("אֶל־בֵּיתוֹ׃"), "אֶלבֵּיתוֹ");
    }

    #[test]
    fn strip_accents_keeps_shin_dot_and_dagesh() {
        assert_eq!(strip_accents("שָׁמַר"), "שָׁמַר");
        assert_eq!(strip_accents("דִּבֶּר"), "דִּבֶּר");
    }

    #[test]
    fn vowel_points_detected() {
        assert!(has_vowel_points("קָטַל"));
        assert!(!has_vowel_points("קטל"));
        assert!(!has_vowel_points(""));
    }

    #[test]
    fn transliteration_is_ascii_and_reversible_shift() {
        let out = compact_transliterate("אָמַר");
        assert!(out.is_ascii());
        // alef is U+05D0, so it lands at 33 + (0x05D0 - 0x0591)
        assert_eq!(out.chars().next(), char::from_u32(33 + 0x05D0 - 0x0591));
    }

    #[test]
    fn transliteration_passes_ascii_through() {
        assert_eq!(compact_transliterate("abc 123"), "abc 123");
    }

    #[test]
    fn verse_text_cleanup() {
        assert_eq!(
            clean_verse_text("וַיֹּאמֶר אֱלֹהִים ׃ "),
            "וַיֹּאמֶר אֱלֹהִים"
        );
    }
}
