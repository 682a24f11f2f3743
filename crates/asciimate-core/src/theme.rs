//! Display settings shared by the player and the front end.

use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Playback speed, applied as a multiplier on frame holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Normal,
            AnimationSpeed::Normal => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Scale a frame hold by this speed (x1.5, x1, x0.5).
    pub fn scale(self, hold: Duration) -> Duration {
        match self {
            AnimationSpeed::Slow => hold * 3 / 2,
            AnimationSpeed::Normal => hold,
            AnimationSpeed::Fast => hold / 2,
        }
    }

    /// Short label for status lines.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Normal => "normal",
            AnimationSpeed::Fast => "fast",
        }
    }
}

/// Color theme for rendered frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::White,
            ColorTheme::White => ColorTheme::Cyan,
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::White => Color::White,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_cycle() {
        let speed = AnimationSpeed::default();
        assert_eq!(speed, AnimationSpeed::Normal);
        assert_eq!(speed.next(), AnimationSpeed::Fast);
        assert_eq!(speed.next().next(), AnimationSpeed::Slow);
        assert_eq!(speed.next().next().next(), AnimationSpeed::Normal);
    }

    #[test]
    fn test_speed_scale() {
        let hold = Duration::from_millis(100);
        assert_eq!(AnimationSpeed::Normal.scale(hold), hold);
        assert_eq!(AnimationSpeed::Fast.scale(hold), Duration::from_millis(50));
        assert_eq!(AnimationSpeed::Slow.scale(hold), Duration::from_millis(150));
    }

    #[test]
    fn test_color_theme_cycle_returns_to_start() {
        let mut theme = ColorTheme::default();
        for _ in 0..7 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Cyan);
        assert_eq!(ColorTheme::Magenta.color(), Color::Magenta);
    }
}
