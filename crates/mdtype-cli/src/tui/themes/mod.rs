//! Light and dark page themes

use mdtype_core::ThemeMode;
use ratatui::style::Color;

/// Colors used across the demo page
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub display_name: &'static str,
    pub bg_color: Color,
    pub text_color: Color,
    pub accent_color: Color,
    pub dim_color: Color,
    pub border_color: Color,
    /// Rendered math spans
    pub math_color: Color,
    /// Key hints on toolbar buttons
    pub button_color: Color,
}

pub const LIGHT: Theme = Theme {
    display_name: "Light",
    bg_color: Color::Rgb(255, 255, 255),
    text_color: Color::Rgb(38, 38, 38),
    accent_color: Color::Rgb(77, 107, 254),
    dim_color: Color::Rgb(140, 140, 140),
    border_color: Color::Rgb(214, 214, 214),
    math_color: Color::Rgb(0, 0, 255),
    button_color: Color::Rgb(77, 107, 254),
};

pub const DARK: Theme = Theme {
    display_name: "Dark",
    bg_color: Color::Rgb(41, 42, 45),
    text_color: Color::Rgb(249, 250, 251),
    accent_color: Color::Rgb(120, 145, 255),
    dim_color: Color::Rgb(150, 150, 155),
    border_color: Color::Rgb(80, 82, 88),
    math_color: Color::Rgb(130, 170, 255),
    button_color: Color::Rgb(120, 145, 255),
};

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_lookup() {
        assert_eq!(Theme::for_mode(ThemeMode::Light).display_name, "Light");
        assert_eq!(Theme::for_mode(ThemeMode::Dark).display_name, "Dark");
    }
}
