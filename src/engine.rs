//! Keystroke routing: decides whether a typed character rewrites nearby text

use crate::config::PintoneConfig;
use crate::core::converter::{convert_syllable_with_tone, v_to_umlaut};
use crate::core::syllable_fsm::extract;

/// How far back from the cursor the extractor looks, in characters
///
/// Fixed design constant: bounds every scan without cutting a syllable
/// short (pinyin syllables are at most six letters).
pub const WINDOW_CHARS: usize = 10;

/// A text edit for the host to apply: replace the span covering
/// `consume_before` characters left of the typed character, plus the typed
/// character itself, with `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub consume_before: usize,
    pub text: String,
}

/// Pinyin input engine
///
/// Holds the loaded config and the live enabled flag. All methods that
/// compute text are `&self`; the host owns the instance and serializes
/// edits against its document.
#[derive(Debug, Clone)]
pub struct Engine {
    config: PintoneConfig,
    enabled: bool,
}

impl Engine {
    /// New engine; starts in the enabled state the config asks for
    pub fn new(config: PintoneConfig) -> Self {
        let enabled = config.enabled;
        Self { config, enabled }
    }

    /// New engine with default config
    pub fn with_defaults() -> Self {
        Self::new(PintoneConfig::default())
    }

    /// Enable/disable conversion
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether conversion is currently active
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the enabled flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Route one typed character
    ///
    /// `before_cursor` is the current line up to (not including) the typed
    /// character. Returns the edit to apply, or None when the keystroke is
    /// not ours to handle.
    pub fn feed(&self, before_cursor: &str, typed: char) -> Option<Replacement> {
        if !self.enabled {
            return None;
        }

        if self.config.convert_v {
            if let Some(umlaut) = v_to_umlaut(typed) {
                return Some(Replacement {
                    consume_before: 0,
                    text: umlaut.to_string(),
                });
            }
        }

        if !('1'..='4').contains(&typed) {
            return None;
        }
        let tone = typed as u8 - b'0';

        let window = last_chars(before_cursor, WINDOW_CHARS);
        let syllable = extract(window)?;
        let converted = convert_syllable_with_tone(syllable, tone);
        log::debug!("{}{} -> {}", syllable, typed, converted);

        Some(Replacement {
            consume_before: syllable.chars().count(),
            text: converted,
        })
    }

    /// Simulate typing `input` character by character and return the
    /// resulting text
    pub fn convert(&self, input: &str) -> String {
        let mut buffer = String::new();
        for c in input.chars() {
            match self.feed(&buffer, c) {
                Some(replacement) => {
                    for _ in 0..replacement.consume_before {
                        buffer.pop();
                    }
                    buffer.push_str(&replacement.text);
                }
                None => buffer.push(c),
            }
        }
        buffer
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Convert a whole string with default settings
pub fn convert(input: &str) -> String {
    Engine::with_defaults().convert(input)
}

/// Last `n` characters of `s` (the whole string when shorter)
fn last_chars(s: &str, n: usize) -> &str {
    debug_assert!(n > 0);
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
