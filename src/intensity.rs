// MIT/Apache2 License

use num_traits::{AsPrimitive, Bounded};
use ordered_float::NotNan;
use std::ops;

/// A color channel, going from zero to one. This type is essentially a wrapper around an `f32`, but with two
/// invariants:
///
/// * The inner value will always be between `0.0` and `1.0`.
/// * The inner value will never be `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Intensity {
    inner: NotNan<f32>,
}

impl Intensity {
    pub const ZERO: Intensity = unsafe { Intensity::new_unchecked(0.0) };
    pub const ONE: Intensity = unsafe { Intensity::new_unchecked(1.0) };

    /// Create a new `Intensity`, without checking the inner value.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if `inner` is not a number, or outside of the range [0, 1].
    #[allow(unused_unsafe)]
    #[inline]
    pub const unsafe fn new_unchecked(inner: f32) -> Self {
        Self {
            inner: unsafe { NotNan::new_unchecked(inner) },
        }
    }

    /// Create a new `Intensity`. If the inner value does not meet the invariants mentioned above, this function
    /// returns `None`.
    #[inline]
    pub fn new(inner: f32) -> Option<Self> {
        if inner.is_nan() || inner < 0.0 || inner > 1.0 {
            None
        } else {
            Some(Self {
                inner: NotNan::new(inner).ok()?,
            })
        }
    }

    /// Create an `Intensity` from an 8-bit channel value.
    #[inline]
    pub fn from_u8(channel: u8) -> Self {
        let value = f32::from(channel) / f32::from(u8::MAX);
        // a u8 divided by its maximum is always in range
        Self::new(value).unwrap_or(Self::ZERO)
    }

    /// Get the inner value of the `Intensity`.
    #[inline]
    pub fn into_inner(self) -> f32 {
        self.inner.into_inner()
    }

    /// Scale this value to the full range of an unsigned integer type.
    #[inline]
    pub fn clamp<N: Bounded + Copy + ops::Sub + 'static>(self) -> N
    where
        f32: AsPrimitive<N> + From<N::Output>,
    {
        let bounds: f32 = (N::max_value() - N::min_value()).into();
        (bounds * self.into_inner()).round().as_()
    }

    /// Clamp this value to a `u8`.
    #[inline]
    pub fn clamp_u8(self) -> u8 {
        self.clamp()
    }
}

impl Default for Intensity {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Intensity> for f32 {
    #[inline]
    fn from(i: Intensity) -> f32 {
        i.into_inner()
    }
}
