#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    /// A CSS keyword such as `transparent` or `currentColor`.
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// `Color::hex(0x4F46E5)` is `#4F46E5`.
    pub const fn hex(value: u32) -> Self {
        Self::Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn white() -> Self {
        Self::hex(0xFFFFFF)
    }

    /// Opaque sRGB value, or `None` for keywords the browser resolves.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } | Self::Rgba { r, g, b, .. } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h, .. } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Named(_) => None,
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => format!("#{r:02X}{g:02X}{b:02X}"),
            Self::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
            Self::Oklch { l, c, h, a } => {
                let Rgb { r, g, b } = oklch_to_rgb(*l, *c, *h);
                if *a >= 1.0 {
                    format!("#{r:02X}{g:02X}{b:02X}")
                } else {
                    format!("rgba({r}, {g}, {b}, {a})")
                }
            }
            Self::Named(name) => name.clone(),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_renders_uppercase() {
        assert_eq!(Color::hex(0x4f46e5).to_css(), "#4F46E5");
        assert_eq!(Color::white().to_css(), "#FFFFFF");
    }

    #[test]
    fn rgba_keeps_alpha() {
        assert_eq!(Color::rgba(0, 0, 0, 0.05).to_css(), "rgba(0, 0, 0, 0.05)");
    }

    #[test]
    fn oklch_white_is_white() {
        let rgb = Color::oklch(1.0, 0.0, 0.0).to_rgb().unwrap();
        assert!(rgb.r >= 254 && rgb.g >= 254 && rgb.b >= 254, "{rgb:?}");
    }

    #[test]
    fn named_has_no_rgb() {
        assert_eq!(Color::named("transparent").to_rgb(), None);
        assert_eq!(Color::named("transparent").to_css(), "transparent");
    }
}
