//! Trailing pinyin-syllable extraction (finite state scan)

use crate::core::vowels::{is_syllable_consonant, is_toneable_vowel};

/// Scan state, walking right to left from the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Consonants after the last vowel (possibly none)
    TrailingConsonants,
    /// Inside a vowel run
    VowelCore,
    /// Consonants left of a vowel run (leading or between vowel runs)
    LeadingConsonants,
}

/// Longest trailing substring of `window` shaped like a pinyin syllable:
/// vowel runs optionally surrounded and separated by consonant runs, ending
/// exactly at the end of the window.
///
/// Classification is case-insensitive; the returned slice keeps the original
/// casing. Returns None when the trailing letters contain no vowel.
pub fn extract(window: &str) -> Option<&str> {
    let mut state = State::TrailingConsonants;
    let mut start = window.len();

    for (idx, c) in window.char_indices().rev() {
        state = if is_toneable_vowel(c) {
            State::VowelCore
        } else if is_syllable_consonant(c) {
            match state {
                // Not past a vowel yet
                State::TrailingConsonants => State::TrailingConsonants,
                // Consonants before a vowel stay part of the syllable
                State::VowelCore | State::LeadingConsonants => State::LeadingConsonants,
            }
        } else {
            // Space, digit, toned vowel, 'v', ... : syllable boundary
            break;
        };
        start = idx;
    }

    match state {
        // Never reached a vowel
        State::TrailingConsonants => None,
        State::VowelCore | State::LeadingConsonants => Some(&window[start..]),
    }
}
