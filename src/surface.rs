// MIT/Apache2 License

use crate::Paint;
use lyon_geom::{Rect, Vector};

/// A surface which drawing commands can be applied to.
///
/// Coordinates passed to a surface are in its current coordinate space. `translate()` shifts that space, and
/// `save()`/`restore()` bracket a change so it can be undone.
pub trait Surface {
    /// Push the current coordinate space onto the save stack.
    fn save(&mut self) -> crate::Result;
    /// Pop the coordinate space pushed by the matching `save()`.
    fn restore(&mut self) -> crate::Result;
    /// Shift the current coordinate space by `(dx, dy)`.
    fn translate(&mut self, dx: f32, dy: f32) -> crate::Result;

    /// Fill or stroke a rectangle.
    fn draw_rect(&mut self, rect: Rect<f32>, paint: &Paint) -> crate::Result;
    /// Attach a key, and optionally a value, to an area of the surface. Annotations draw nothing.
    fn draw_annotation(&mut self, rect: Rect<f32>, key: &str, value: Option<&[u8]>)
        -> crate::Result;

    /// The number of saves that have not been restored yet.
    fn save_count(&self) -> usize;

    /// Shift the current coordinate space by a vector.
    #[inline]
    fn translate_by(&mut self, offset: Vector<f32>) -> crate::Result {
        self.translate(offset.x, offset.y)
    }

    /// Draw several rectangles with the same paint.
    #[inline]
    fn draw_rects(&mut self, rects: &[Rect<f32>], paint: &Paint) -> crate::Result {
        rects
            .iter()
            .copied()
            .try_for_each(|rect| self.draw_rect(rect, paint))
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn save(&mut self) -> crate::Result {
        (**self).save()
    }

    #[inline]
    fn restore(&mut self) -> crate::Result {
        (**self).restore()
    }

    #[inline]
    fn translate(&mut self, dx: f32, dy: f32) -> crate::Result {
        (**self).translate(dx, dy)
    }

    #[inline]
    fn draw_rect(&mut self, rect: Rect<f32>, paint: &Paint) -> crate::Result {
        (**self).draw_rect(rect, paint)
    }

    #[inline]
    fn draw_annotation(
        &mut self,
        rect: Rect<f32>,
        key: &str,
        value: Option<&[u8]>,
    ) -> crate::Result {
        (**self).draw_annotation(rect, key, value)
    }

    #[inline]
    fn save_count(&self) -> usize {
        (**self).save_count()
    }
}
