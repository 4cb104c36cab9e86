//! Numbered-tone syllable -> tone-marked syllable conversion

use crate::core::vowels::{is_toneable_vowel, toned};

/// A vowel found in a syllable: the character and its character position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VowelOccurrence {
    ch: char,
    index: usize,
}

/// Collect every vowel occurrence in the syllable, left to right
fn find_vowels(syllable: &str) -> Vec<VowelOccurrence> {
    syllable
        .chars()
        .enumerate()
        .filter(|&(_, c)| is_toneable_vowel(c))
        .map(|(index, ch)| VowelOccurrence { ch, index })
        .collect()
}

/// Index into `vowels` of the occurrence that carries the tone mark
///
/// Standard placement precedence, checked against the concatenated vowel
/// sequence: 'a' and 'e' always win (lowercase before uppercase), "ou"
/// marks its 'o', exact "iu" marks the 'u', exact "ui" marks the 'i',
/// otherwise the last vowel.
fn target_vowel_index(vowels: &[VowelOccurrence]) -> usize {
    let sequence: String = vowels.iter().map(|v| v.ch).collect();

    for pick in ['a', 'A', 'e', 'E'] {
        if let Some(i) = vowels.iter().position(|v| v.ch == pick) {
            return i;
        }
    }

    if sequence.contains("ou") {
        if let Some(i) = vowels.iter().position(|v| v.ch == 'o') {
            return i;
        }
    }
    if sequence.contains("Ou") {
        if let Some(i) = vowels.iter().position(|v| v.ch == 'O') {
            return i;
        }
    }

    match sequence.as_str() {
        "iu" => 1, // tone on the u
        "ui" => 1, // tone on the i
        _ => vowels.len() - 1,
    }
}

/// Rewrite a numbered-tone syllable with the diacritic on the right vowel
///
/// The tone must be 1~4; any other value returns the syllable unchanged, as
/// does a syllable without a toneable vowel. Exactly one character is
/// substituted 1-for-1, so the character length never changes.
pub fn convert_syllable_with_tone(syllable: &str, tone: u8) -> String {
    let vowels = find_vowels(syllable);
    if vowels.is_empty() {
        return syllable.to_owned();
    }

    let target = vowels[target_vowel_index(&vowels)];
    match toned(target.ch, tone) {
        Some(marked) => syllable
            .chars()
            .enumerate()
            .map(|(i, c)| if i == target.index { marked } else { c })
            .collect(),
        // Tone outside 1~4
        None => syllable.to_owned(),
    }
}

/// 'v' typed on a QWERTY keyboard stands in for 'ü'
/// Only lowercase 'v' is rewritten
pub fn v_to_umlaut(c: char) -> Option<char> {
    if c == 'v' {
        Some('ü')
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_has_priority() {
        assert_eq!(convert_syllable_with_tone("hao", 3), "hǎo");
        assert_eq!(convert_syllable_with_tone("xian", 1), "xiān");
        assert_eq!(convert_syllable_with_tone("zhuang", 4), "zhuàng");
    }

    #[test]
    fn test_e_when_no_a() {
        assert_eq!(convert_syllable_with_tone("xie", 4), "xiè");
        assert_eq!(convert_syllable_with_tone("jue", 2), "jué");
        assert_eq!(convert_syllable_with_tone("wen", 3), "wěn");
    }

    #[test]
    fn test_ou_marks_the_o() {
        assert_eq!(convert_syllable_with_tone("dou", 1), "dōu");
        assert_eq!(convert_syllable_with_tone("zhou", 1), "zhōu");
        assert_eq!(convert_syllable_with_tone("ou", 3), "ǒu");
    }

    #[test]
    fn test_exact_iu_and_ui() {
        assert_eq!(convert_syllable_with_tone("liu", 2), "liú");
        assert_eq!(convert_syllable_with_tone("gui", 4), "guì");
        assert_eq!(convert_syllable_with_tone("niu", 2), "niú");
        assert_eq!(convert_syllable_with_tone("shui", 3), "shuǐ");
    }

    #[test]
    fn test_last_vowel_fallback() {
        assert_eq!(convert_syllable_with_tone("shi", 4), "shì");
        assert_eq!(convert_syllable_with_tone("zhong", 1), "zhōng");
        assert_eq!(convert_syllable_with_tone("lü", 4), "lǜ");
        assert_eq!(convert_syllable_with_tone("yun", 2), "yún");
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(convert_syllable_with_tone("Hao", 3), "Hǎo");
        assert_eq!(convert_syllable_with_tone("Qing", 1), "Qīng");
        assert_eq!(convert_syllable_with_tone("LUO", 2), "LUÓ");
        assert_eq!(convert_syllable_with_tone("Ou", 1), "Ōu");
        assert_eq!(convert_syllable_with_tone("E", 4), "È");
    }

    #[test]
    fn test_no_vowel_unchanged() {
        assert_eq!(convert_syllable_with_tone("", 1), "");
        assert_eq!(convert_syllable_with_tone("ng", 2), "ng");
        assert_eq!(convert_syllable_with_tone("xyz", 3), "xyz");
    }

    #[test]
    fn test_out_of_range_tone_unchanged() {
        assert_eq!(convert_syllable_with_tone("ma", 0), "ma");
        assert_eq!(convert_syllable_with_tone("ma", 5), "ma");
        assert_eq!(convert_syllable_with_tone("hao", 9), "hao");
    }

    #[test]
    fn test_char_length_preserved() {
        for syllable in ["hao", "xie", "dou", "liu", "gui", "shi", "lü", "nüe"] {
            for tone in 1..=4 {
                let converted = convert_syllable_with_tone(syllable, tone);
                assert_eq!(
                    converted.chars().count(),
                    syllable.chars().count(),
                    "{}+{} -> {}",
                    syllable,
                    tone,
                    converted
                );
            }
        }
    }

    #[test]
    fn test_table_round_trip() {
        use crate::core::vowels::VOWEL_TABLE;
        for (vowel, variants) in VOWEL_TABLE.iter() {
            for tone in 1..=4u8 {
                assert_eq!(
                    convert_syllable_with_tone(&vowel.to_string(), tone),
                    variants[usize::from(tone - 1)].to_string()
                );
            }
        }
    }

    #[test]
    fn test_consonants_and_case_untouched() {
        assert_eq!(convert_syllable_with_tone("Zhang", 1), "Zhāng");
        assert_eq!(convert_syllable_with_tone("BA", 4), "BÀ");
    }

    #[test]
    fn test_v_to_umlaut() {
        assert_eq!(v_to_umlaut('v'), Some('ü'));
        assert_eq!(v_to_umlaut('V'), None);
        assert_eq!(v_to_umlaut('u'), None);
        assert_eq!(v_to_umlaut('ü'), None);
    }
}
