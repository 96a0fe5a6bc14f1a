//! RGBA color value type

use image::Rgba;

/// An 8-bit RGBA color
///
/// Foreground motifs share one base color and vary only the alpha, so colors
/// are built with [`Color::rgb`] and specialised with [`Color::with_alpha`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity, 0 transparent to 255 opaque
    pub a: u8,
}

impl Color {
    /// Fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit opacity
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same RGB channels with a different opacity
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Same RGB channels with the opacity scaled by `coverage / 255`
    pub const fn with_coverage(self, coverage: u8) -> Self {
        let scaled = (self.a as u16 * coverage as u16 + 127) / 255;
        self.with_alpha(scaled as u8)
    }

    /// Whether drawing with this color leaves the canvas unchanged
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Self([color.r, color.g, color.b, color.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let Rgba([r, g, b, a]) = pixel;
        Self { r, g, b, a }
    }
}
