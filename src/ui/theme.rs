use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
    pub const SURFACE: Color = Color::Rgb(0x45, 0x47, 0x5a);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Modal/Overlay backgrounds
    pub const MODAL_BG: Color = Palette::DUCKBONES;
    pub const MODAL_BORDER: Color = Color::Cyan;

    // Panel borders
    pub const FOCUS_BORDER: Color = Color::Cyan;
    pub const UNFOCUS_BORDER: Color = Color::DarkGray;

    // Text
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const TEXT_ACCENT: Color = Color::Yellow;

    // Key chips in the help overlay
    pub const KEY_CHIP_BG: Color = Palette::SURFACE;
    pub const KEY_CHIP_FG: Color = Color::White;

    // Status
    pub const STATUS_SUCCESS: Color = Color::Green;
    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_PENDING: Color = Color::Yellow;

    // Table header/selected row backgrounds
    pub const TABLE_HEADER_BG: Color = Color::Rgb(0x2a, 0x2a, 0x2e);
    pub const SELECTED_BG: Color = Palette::SURFACE;
}
