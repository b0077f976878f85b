use ratatui::style::Color;

use crate::error::AppError;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
    pub game_over: Color,
}

/// Classic teal snake on navy theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::Rgb(0x4e, 0xcd, 0xc4),
    snake_body: Color::Rgb(0x45, 0xb7, 0xb8),
    food: Color::Rgb(0xff, 0x6b, 0x6b),
    play_bg: Color::Rgb(0x16, 0x21, 0x3e),
    border_fg: Color::Rgb(0x0f, 0x34, 0x60),
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Rgb(0x4e, 0xcd, 0xc4),
    game_over: Color::Rgb(0xff, 0x6b, 0x6b),
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    hud_score: Color::Cyan,
    hud_muted: Color::DarkGray,
    menu_title: Color::Cyan,
    game_over: Color::LightRed,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    hud_score: Color::Magenta,
    hud_muted: Color::DarkGray,
    menu_title: Color::Magenta,
    game_over: Color::Yellow,
};

/// All available themes; the first is the default.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a theme by case-insensitive name.
pub fn theme_by_name(name: &str) -> Result<&'static Theme, AppError> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| AppError::UnknownTheme(name.to_owned()))
}
