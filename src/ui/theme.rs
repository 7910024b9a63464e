use ratatui::style::Color;

/// Colors used by the overflow strip.
pub struct Theme;

impl Theme {
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_ACCENT: Color = Color::Cyan;
    pub const INDICATOR_BG: Color = Color::Rgb(0x45, 0x47, 0x5a);
}
