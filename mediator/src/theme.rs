//! Palette and recurring measurements of the dashboard.
//!
//! Colors follow the Tailwind 2 palette names the page was designed with.

use webdom::{Color, Shadow, Size, Style};

pub const INDIGO_600: Color = Color::hex(0x4F46E5);
pub const INDIGO_700: Color = Color::hex(0x4338CA);
pub const INDIGO_800: Color = Color::hex(0x3730A3);
pub const AMBER_600: Color = Color::hex(0xD97706);
pub const ORANGE_600: Color = Color::hex(0xEA580C);
pub const ORANGE_400: Color = Color::hex(0xFB923C);
pub const AMBER_400: Color = Color::hex(0xFBBF24);
pub const EMERALD_400: Color = Color::hex(0x34D399);
pub const BLUE_400: Color = Color::hex(0x60A5FA);
pub const GRAY_50: Color = Color::hex(0xF9FAFB);
pub const GRAY_100: Color = Color::hex(0xF3F4F6);
pub const GRAY_200: Color = Color::hex(0xE5E7EB);
pub const GRAY_600: Color = Color::hex(0x4B5563);
pub const GRAY_800: Color = Color::hex(0x1F2937);
pub const WHITE: Color = Color::hex(0xFFFFFF);

/// Radius of cards and panels.
pub const RADIUS_LG: Size = Size::rem(0.5);
/// Fully rounded pill ends.
pub const RADIUS_FULL: Size = Size::px(9999.0);

/// Opacity of the productivity series and its legend swatch.
pub const TRANSLUCENT: f32 = 0.5;

/// `text-sm`: 0.875rem / 1.25rem.
pub fn text_sm() -> Style {
    Style::new().text_size(Size::rem(0.875), Size::rem(1.25))
}

/// `text-xs`: 0.75rem / 1rem.
pub fn text_xs() -> Style {
    Style::new().text_size(Size::rem(0.75), Size::rem(1.0))
}

/// White surface with rounded corners and a small shadow.
pub fn surface() -> Style {
    Style::new()
        .background(WHITE)
        .radius(RADIUS_LG)
        .shadow(Shadow::sm())
}
