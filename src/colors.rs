//! RGBW color values.
//!
//! Channel colors are stored as 8-bit RGBW quadruples, the format LED strip
//! drivers consume directly. The red, green and blue channels interoperate
//! with `palette::Srgb<u8>`.

use palette::Srgb;

/// A four-channel LED color: red, green, blue and a dedicated white channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbwColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
}

impl RgbwColor {
    /// All channels off.
    pub const OFF: Self = Self::new(0, 0, 0, 0);

    /// Creates a color from its four channel values.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Creates a color from an 8-bit sRGB triple and a white level.
    #[inline]
    pub fn from_rgb(rgb: Srgb<u8>, white: u8) -> Self {
        Self::new(rgb.red, rgb.green, rgb.blue, white)
    }

    /// Returns the red, green and blue channels, dropping white.
    #[inline]
    pub fn rgb(&self) -> Srgb<u8> {
        Srgb::new(self.red, self.green, self.blue)
    }

    /// Returns true if every channel is zero.
    #[inline]
    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }
}

impl From<(u8, u8, u8, u8)> for RgbwColor {
    fn from((red, green, blue, white): (u8, u8, u8, u8)) -> Self {
        Self::new(red, green, blue, white)
    }
}

impl From<RgbwColor> for (u8, u8, u8, u8) {
    fn from(color: RgbwColor) -> Self {
        (color.red, color.green, color.blue, color.white)
    }
}
