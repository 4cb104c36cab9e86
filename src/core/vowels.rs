//! Pinyin letter classes and the tone-diacritic vowel table

use std::collections::HashMap;
use std::sync::LazyLock;

/// Toneable vowel -> its four diacritic variants, indexed by tone - 1
///
/// Every variant is a precomposed single code point, so substituting one
/// for the plain vowel keeps the syllable's character length unchanged.
pub static VOWEL_TABLE: LazyLock<HashMap<char, [char; 4]>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    // Lowercase
    map.insert('a', ['ā', 'á', 'ǎ', 'à']);
    map.insert('e', ['ē', 'é', 'ě', 'è']);
    map.insert('i', ['ī', 'í', 'ǐ', 'ì']);
    map.insert('o', ['ō', 'ó', 'ǒ', 'ò']);
    map.insert('u', ['ū', 'ú', 'ǔ', 'ù']);
    map.insert('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ']);
    // Uppercase
    map.insert('A', ['Ā', 'Á', 'Ǎ', 'À']);
    map.insert('E', ['Ē', 'É', 'Ě', 'È']);
    map.insert('I', ['Ī', 'Í', 'Ǐ', 'Ì']);
    map.insert('O', ['Ō', 'Ó', 'Ǒ', 'Ò']);
    map.insert('U', ['Ū', 'Ú', 'Ǔ', 'Ù']);
    map.insert('Ü', ['Ǖ', 'Ǘ', 'Ǚ', 'Ǜ']);
    map
});

/// Diacritic variant of a vowel at the given tone
/// Returns None for a non-toneable character or a tone outside 1~4
pub fn toned(c: char, tone: u8) -> Option<char> {
    if !(1..=4).contains(&tone) {
        return None;
    }
    VOWEL_TABLE
        .get(&c)
        .map(|variants| variants[usize::from(tone - 1)])
}

/// Whether the character can carry a tone mark (a/e/i/o/u/ü, either case)
pub fn is_toneable_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'ü' | 'A' | 'E' | 'I' | 'O' | 'U' | 'Ü'
    )
}

/// Whether the character is a pinyin consonant letter (either case)
///
/// 'v' is not in this class: it never reaches a syllable as itself, since
/// the engine rewrites it to 'ü' the moment it is typed.
pub fn is_syllable_consonant(c: char) -> bool {
    matches!(
        c.to_ascii_lowercase(),
        'b' | 'c'
            | 'd'
            | 'f'
            | 'g'
            | 'h'
            | 'j'
            | 'k'
            | 'l'
            | 'm'
            | 'n'
            | 'p'
            | 'q'
            | 'r'
            | 's'
            | 't'
            | 'w'
            | 'x'
            | 'y'
            | 'z'
    )
}
