//! Light/dark color scheme.

use crate::color::Color;

/// The host's current color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Color painted by the eraser, matching the surface background.
    pub fn erase_color(self) -> Color {
        match self {
            Theme::Light => Color::WHITE,
            Theme::Dark => Color::BLACK,
        }
    }

    /// Background color written into board snapshots.
    pub fn background_color(self) -> Color {
        self.erase_color()
    }

    /// Default pen color, contrasting with the background.
    pub fn ink_color(self) -> Color {
        match self {
            Theme::Light => Color::BLACK,
            Theme::Dark => Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erase_color_matches_background() {
        assert_eq!(Theme::Light.erase_color(), Color::WHITE);
        assert_eq!(Theme::Dark.erase_color(), Color::BLACK);
        assert_eq!(Theme::Dark.background_color(), Theme::Dark.erase_color());
    }

    #[test]
    fn test_ink_contrasts_background() {
        assert_eq!(Theme::Light.ink_color(), Color::BLACK);
        assert_eq!(Theme::Dark.ink_color(), Color::WHITE);
    }
}
