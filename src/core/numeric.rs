/// Numeric attribute codes: a duration digit followed by a stability digit.

use serde::Serialize;
use std::fmt;

/// How long the tagged state lasts (first digit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Duration {
    UnderTenMinutes,
    UnderThirtyMinutes,
    UnderOneHour,
    UnderThreeHours,
    ThreeHoursOrMore,
    /// Digit outside the 1–5 legend.
    Undetermined,
}

impl Duration {
    pub fn from_digit(digit: char) -> Self {
        match digit {
            '1' => Self::UnderTenMinutes,
            '2' => Self::UnderThirtyMinutes,
            '3' => Self::UnderOneHour,
            '4' => Self::UnderThreeHours,
            '5' => Self::ThreeHoursOrMore,
            _ => Self::Undetermined,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UnderTenMinutes => "10분미만",
            Self::UnderThirtyMinutes => "30분미만",
            Self::UnderOneHour => "1시간미만",
            Self::UnderThreeHours => "3시간미만",
            Self::ThreeHoursOrMore => "3시간이상",
            Self::Undetermined => "미정",
        }
    }
}

/// How steady or fast the tagged state is (second digit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stability {
    Stable,
    SlightlyUnstable,
    Unstable,
    Fast,
    VeryFast,
}

impl Stability {
    /// Digits outside the 1–5 legend read as stable.
    pub fn from_digit(digit: char) -> Self {
        match digit {
            '2' => Self::SlightlyUnstable,
            '3' => Self::Unstable,
            '4' => Self::Fast,
            '5' => Self::VeryFast,
            _ => Self::Stable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Stable => "안정",
            Self::SlightlyUnstable => "약간불안",
            Self::Unstable => "불안정",
            Self::Fast => "빠름",
            Self::VeryFast => "매우빠름",
        }
    }
}

/// A decoded numeric attribute code. Displays as `(duration/stability)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NumericCode {
    pub duration: Duration,
    pub stability: Stability,
}

impl NumericCode {
    /// Decode a digit string. A single digit drives both halves; digits
    /// past the second are ignored. Never fails.
    pub fn decode(code: &str) -> Self {
        let mut digits = code.chars();
        let Some(first) = digits.next() else {
            return Self {
                duration: Duration::Undetermined,
                stability: Stability::Stable,
            };
        };
        let second = digits.next().unwrap_or(first);

        if !('1'..='5').contains(&first) || !('1'..='5').contains(&second) {
            tracing::debug!(target: "tuacavo::numeric", code, "numeric code digit outside legend");
        }

        Self {
            duration: Duration::from_digit(first),
            stability: Stability::from_digit(second),
        }
    }
}

impl fmt::Display for NumericCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.duration.label(), self.stability.label())
    }
}
