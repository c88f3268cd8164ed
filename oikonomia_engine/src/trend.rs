//! Three-way classification of percent changes.

use strum_macros::Display;

/// Direction of a percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    /// Strictly above zero.
    Positive,
    /// Strictly below zero.
    Negative,
    /// Exactly zero (or not a number).
    Neutral,
}

impl Trend {
    /// Classify `value` with an exact comparison against zero; no epsilon.
    pub fn classify(value: f64) -> Self {
        if value > 0.0 {
            Trend::Positive
        } else if value < 0.0 {
            Trend::Negative
        } else {
            Trend::Neutral
        }
    }
}
