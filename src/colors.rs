//! 8-bit RGBA colors and the demo palette.
//!
//! Framebuffers store colors packed as ARGB8888 (`0xAARRGGBB`), which is
//! also the layout of the streaming texture the window presents.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Builds a color from normalized channels, clamping to `[0, 1]`.
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgba(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
    }

    /// Packs into ARGB8888.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub const fn from_argb(argb: u32) -> Self {
        Self::rgba(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }
}

// Cube face palette
pub const RED: Color = Color::rgb(255, 0, 0);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const MAGENTA: Color = Color::rgb(255, 0, 255);
pub const ORANGE: Color = Color::rgb(255, 162, 0);
pub const DARK_RED: Color = Color::rgb(120, 0, 0);
pub const PURPLE: Color = Color::rgb(120, 0, 120);

/// Mid gray, the default clear color.
pub const BACKGROUND: Color = Color::rgb(128, 128, 128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_alpha_in_high_byte() {
        assert_eq!(ORANGE.to_argb(), 0xFFFF_A200);
        assert_eq!(Color::from_argb(0x80FF_A200), Color::rgba(255, 162, 0, 128));
    }

    #[test]
    fn from_f32_rounds_and_clamps() {
        assert_eq!(Color::from_f32(0.5, 0.5, 0.5, 1.0), BACKGROUND);
        assert_eq!(Color::from_f32(-1.0, 2.0, 0.0, 1.0), Color::rgb(0, 255, 0));
    }
}
