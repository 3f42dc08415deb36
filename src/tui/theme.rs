//! # Theme
//!
//! The app palette. Truecolor terminals get the full RGB values; others
//! get the nearest of the 16 named colours.

use ratatui::style::{Color, Modifier, Style};

use crate::core::catalog::Sex;

const CREAM: (u8, u8, u8) = (0xFA, 0xF3, 0xE0);
const LIGHT_BROWN: (u8, u8, u8) = (0xEA, 0xBF, 0x9F);
const DARK_BROWN: (u8, u8, u8) = (0xB6, 0x89, 0x73);
const NEAR_BLACK: (u8, u8, u8) = (0x1E, 0x21, 0x2D);
const LIGHT_GRAY: (u8, u8, u8) = (0xF1, 0xF1, 0xF1);
const MALE_BLUE: (u8, u8, u8) = (0x3F, 0x51, 0xB5);
const FEMALE_PINK: (u8, u8, u8) = (0xE9, 0x1E, 0x63);
const PHONE_BLUE: (u8, u8, u8) = (0x4F, 0xC3, 0xF7);
const MESSAGE_GREEN: (u8, u8, u8) = (0xAE, 0xD5, 0x81);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    truecolor: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Theme {
    pub fn new(truecolor: bool) -> Self {
        Self { truecolor }
    }

    fn pick(&self, rgb: (u8, u8, u8), named: Color) -> Color {
        if self.truecolor {
            Color::Rgb(rgb.0, rgb.1, rgb.2)
        } else {
            named
        }
    }

    pub fn primary(&self) -> Color {
        self.pick(DARK_BROWN, Color::Yellow)
    }

    pub fn accent(&self) -> Color {
        self.pick(LIGHT_BROWN, Color::LightYellow)
    }

    pub fn muted(&self) -> Color {
        Color::Gray
    }

    pub fn highlight_bg(&self) -> Color {
        self.pick(CREAM, Color::White)
    }

    pub fn highlight_fg(&self) -> Color {
        self.pick(NEAR_BLACK, Color::Black)
    }

    pub fn on_primary(&self) -> Color {
        self.pick(LIGHT_GRAY, Color::White)
    }

    pub fn sex_color(&self, sex: Sex) -> Color {
        match sex {
            Sex::Male => self.pick(MALE_BLUE, Color::Blue),
            Sex::Female => self.pick(FEMALE_PINK, Color::Magenta),
        }
    }

    pub fn phone(&self) -> Color {
        self.pick(PHONE_BLUE, Color::LightCyan)
    }

    pub fn message(&self) -> Color {
        self.pick(MESSAGE_GREEN, Color::LightGreen)
    }

    /// Border for cards and tiles; the highlighted one stands out.
    pub fn border(&self, highlighted: bool) -> Style {
        if highlighted {
            Style::default()
                .fg(self.primary())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}
