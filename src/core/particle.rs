/// Korean particle (josa) selection.
///
/// A particle's form depends on whether the final syllable of the phrase
/// ends in a consonant (batchim).

use serde::Serialize;

const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;
/// Final-consonant slots per syllable block.
const FINALS: u32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Particle {
    /// 을/를
    Object,
    /// 이/가
    Subject,
    /// 은/는
    Topic,
}

impl Particle {
    /// The form used after a final consonant.
    pub fn after_consonant(&self) -> &'static str {
        match self {
            Self::Object => "을",
            Self::Subject => "이",
            Self::Topic => "은",
        }
    }

    /// The form used after a vowel, and for non-Hangul phrases.
    pub fn after_vowel(&self) -> &'static str {
        match self {
            Self::Object => "를",
            Self::Subject => "가",
            Self::Topic => "는",
        }
    }

    /// Pick the form that fits `phrase`. Trailing whitespace is ignored.
    pub fn select(&self, phrase: &str) -> &'static str {
        match final_consonant(phrase) {
            Some(true) => self.after_consonant(),
            _ => self.after_vowel(),
        }
    }
}

/// Whether the last character of `phrase` is a Hangul syllable with a
/// final consonant. `None` when it is not a Hangul syllable at all.
pub fn final_consonant(phrase: &str) -> Option<bool> {
    let last = phrase.trim_end().chars().last()? as u32;
    if !(HANGUL_BASE..=HANGUL_LAST).contains(&last) {
        return None;
    }
    Some((last - HANGUL_BASE) % FINALS != 0)
}

/// `phrase` with trailing whitespace removed and the particle appended.
pub fn attach(phrase: &str, particle: Particle) -> String {
    let trimmed = phrase.trim_end();
    format!("{}{}", trimmed, particle.select(trimmed))
}
