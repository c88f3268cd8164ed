//! Immutable colour configuration for the presenter.
//!
//! # Color Palette
//! - **Positive**: pure green (gains)
//! - **Negative**: pure red (losses)
//! - **Neutral**: dim grey (unchanged)
//! - **Accent**: terminal blue (titles)

use ratatui::style::Color;
use oikonomia_engine::Trend;

/// Colours used when printing; chosen once at start-up and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Gains.
    pub positive: Color,
    /// Losses.
    pub negative: Color,
    /// No change.
    pub neutral: Color,
    /// Banner and headings.
    pub accent: Color,
    /// Secondary text such as the capture timestamp.
    pub muted: Color,
    /// When `false` the buffer is written without escape codes.
    pub colored: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            positive: Color::Rgb(0x00, 0xFF, 0x00),
            negative: Color::Rgb(0xFF, 0x00, 0x00),
            neutral: Color::Rgb(0x45, 0x45, 0x45),
            accent: Color::Blue,
            muted: Color::Gray,
            colored: true,
        }
    }
}

impl Theme {
    /// Same palette with styling switched off.
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::default()
        }
    }

    /// Colour for a change classified as `trend`.
    pub fn trend_color(&self, trend: Trend) -> Color {
        match trend {
            Trend::Positive => self.positive,
            Trend::Negative => self.negative,
            Trend::Neutral => self.neutral,
        }
    }

    /// Colour for a raw percent change.
    pub fn change_color(&self, value: f64) -> Color {
        self.trend_color(Trend::classify(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_colors_follow_the_sign() {
        let theme = Theme::default();
        assert_eq!(theme.change_color(1.2), theme.positive);
        assert_eq!(theme.change_color(-0.01), theme.negative);
        assert_eq!(theme.change_color(0.0), theme.neutral);
    }
}
