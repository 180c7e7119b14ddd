use ratatui::style::Color;

use lakeview_app::view::Tone;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
    pub const SURFACE: Color = Color::Rgb(0x45, 0x47, 0x5a);
    pub const OVERLAY: Color = Color::Rgb(0x6c, 0x70, 0x86);
    pub const GREEN: Color = Color::Rgb(0xa6, 0xe3, 0xa1);
    pub const RED: Color = Color::Rgb(0xf3, 0x8b, 0xa8);
    pub const BLUE: Color = Color::Rgb(0x89, 0xb4, 0xfa);
    pub const YELLOW: Color = Color::Rgb(0xf9, 0xe2, 0xaf);
    pub const TEAL: Color = Color::Rgb(0x94, 0xe2, 0xd5);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Panel borders
    pub const FOCUS_BORDER: Color = Palette::BLUE;
    pub const UNFOCUS_BORDER: Color = Palette::SURFACE;

    // Text
    pub const TEXT_ACCENT: Color = Palette::TEAL;
    pub const TEXT_MUTED: Color = Palette::OVERLAY;
    pub const TEXT_CODE: Color = Palette::YELLOW;

    // List cursor and active entry
    pub const CURSOR_BG: Color = Palette::SURFACE;
    pub const ACTIVE_ENTRY: Color = Palette::BLUE;

    // Table header background
    pub const TABLE_HEADER_BG: Color = Color::Rgb(0x2a, 0x2a, 0x2e);

    // Toasts
    pub const TOAST_BG: Color = Palette::DUCKBONES;

    pub const fn tone(tone: Tone) -> Color {
        match tone {
            Tone::Success => Palette::GREEN,
            Tone::Secondary => Palette::OVERLAY,
            Tone::Danger => Palette::RED,
            Tone::Info => Palette::BLUE,
            Tone::Warning => Palette::YELLOW,
        }
    }
}
