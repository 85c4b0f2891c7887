// MIT/Apache2 License

use crate::intensity::Intensity;
use std::fmt;

/// A four-element color.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: Intensity,
    g: Intensity,
    b: Intensity,
    a: Intensity,
}

impl Color {
    pub const WHITE: Color = unsafe { Color::new_unchecked(1.0, 1.0, 1.0, 1.0) };
    pub const BLACK: Color = unsafe { Color::new_unchecked(0.0, 0.0, 0.0, 1.0) };
    pub const RED: Color = unsafe { Color::new_unchecked(1.0, 0.0, 0.0, 1.0) };
    pub const GREEN: Color = unsafe { Color::new_unchecked(0.0, 1.0, 0.0, 1.0) };
    pub const BLUE: Color = unsafe { Color::new_unchecked(0.0, 0.0, 1.0, 1.0) };
    pub const YELLOW: Color = unsafe { Color::new_unchecked(1.0, 1.0, 0.0, 1.0) };

    /// Create a new color.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if any of the elements are NaN or outside of [0, 1].
    #[inline]
    pub const unsafe fn new_unchecked(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: Intensity::new_unchecked(r),
            g: Intensity::new_unchecked(g),
            b: Intensity::new_unchecked(b),
            a: Intensity::new_unchecked(a),
        }
    }

    /// Creates a new color. This function returns `None` if any of the elements are NaN or out of range.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Option<Self> {
        Some(Self {
            r: Intensity::new(r)?,
            g: Intensity::new(g)?,
            b: Intensity::new(b)?,
            a: Intensity::new(a)?,
        })
    }

    /// Unpack a color stored as `0xAARRGGBB`.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self {
            r: Intensity::from_u8(r),
            g: Intensity::from_u8(g),
            b: Intensity::from_u8(b),
            a: Intensity::from_u8(a),
        }
    }

    /// Gets the red element.
    #[inline]
    pub fn red(self) -> f32 {
        self.r.into_inner()
    }

    /// Gets the green element.
    #[inline]
    pub fn green(self) -> f32 {
        self.g.into_inner()
    }

    /// Gets the blue element.
    #[inline]
    pub fn blue(self) -> f32 {
        self.b.into_inner()
    }

    /// Gets the alpha element.
    #[inline]
    pub fn alpha(self) -> f32 {
        self.a.into_inner()
    }

    /// Clamp to u8's.
    #[inline]
    pub fn clamp_u8(self) -> (u8, u8, u8, u8) {
        (
            self.r.clamp_u8(),
            self.g.clamp_u8(),
            self.b.clamp_u8(),
            self.a.clamp_u8(),
        )
    }

    /// Pack this color as `0xAARRGGBB`, the layout pictures store colors in.
    #[inline]
    pub fn to_argb(self) -> u32 {
        let (r, g, b, a) = self.clamp_u8();
        u32::from_be_bytes([a, r, g, b])
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({:#010X})", self.to_argb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_pack() {
        assert_eq!(Color::YELLOW.to_argb(), 0xFFFF_FF00);
        assert_eq!(Color::BLUE.to_argb(), 0xFF00_00FF);
        assert_eq!(Color::BLACK.to_argb(), 0xFF00_0000);
        assert_eq!(Color::RED.to_argb(), 0xFFFF_0000);
    }

    #[test]
    fn argb_unpacks() {
        let color = Color::from_argb(0x80FF_0000);
        assert_eq!(color.clamp_u8(), (255, 0, 0, 128));
        assert_eq!(Color::from_argb(0xFFFF_FF00), Color::YELLOW);
    }

    #[test]
    fn rejects_nan() {
        assert!(Color::new(f32::NAN, 0.0, 0.0, 1.0).is_none());
    }
}
