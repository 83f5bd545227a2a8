use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const FAVORITE: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
    pub note_background: Color,
    pub button_background: Color,
    pub button_color: Color,
}

const LIGHT: Palette = Palette {
    foreground: Color::Rgb(0x00, 0x00, 0x00),
    background: Color::Rgb(0xee, 0xee, 0xee),
    note_background: Color::Rgb(0xff, 0xff, 0xff),
    button_background: Color::Rgb(0x4c, 0xaf, 0x50),
    button_color: Color::Rgb(0xff, 0xff, 0xff),
};

const DARK: Palette = Palette {
    foreground: Color::Rgb(0xff, 0xff, 0xff),
    background: Color::Rgb(0x22, 0x22, 0x22),
    note_background: Color::Rgb(0x33, 0x33, 0x33),
    button_background: Color::Rgb(0x1a, 0x88, 0x70),
    button_color: Color::Rgb(0xff, 0xff, 0xff),
};

/// Two-value theme switch. Passed explicitly to everything that draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_two_values() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Theme::Dark.palette().background, Color::Rgb(0x22, 0x22, 0x22));
    }
}
