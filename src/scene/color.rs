use std::fmt;

/// Straight (non-premultiplied) sRGB colour with a fractional alpha.
///
/// SVG output splits this into a `#rrggbb` paint and a separate `*-opacity` attribute, which
/// every external converter understands (unlike CSS `rgba()` paint values).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const WHITE: Self = Self::hex(0xffffff);
    pub const BLACK: Self = Self::hex(0x000000);

    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn alpha(self) -> f64 {
        self.a.clamp(0.0, 1.0)
    }

    pub fn is_opaque(self) -> bool {
        self.alpha() >= 1.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal_unpacks_channels() {
        let c = Color::hex(0xf36dd5);
        assert_eq!((c.r, c.g, c.b), (0xf3, 0x6d, 0xd5));
        assert!(c.is_opaque());
        assert_eq!(c.to_string(), "#f36dd5");
    }

    #[test]
    fn alpha_is_clamped_for_output() {
        let c = Color::WHITE.with_alpha(1.7);
        assert_eq!(c.alpha(), 1.0);
        assert!(!Color::WHITE.with_alpha(0.2).is_opaque());
    }
}
