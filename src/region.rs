// MIT/Apache2 License

use crate::{Color, Marker, Paint, Surface};
use lyon_geom::{Point, Rect, Size, Vector};

/// A filled, annotated rectangle, along with the regions nested inside of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: u64,
    pub name: &'static str,
    pub width: f32,
    pub height: f32,
    /// X offset of this region's origin from its parent's origin.
    pub offset_x: f32,
    /// Y offset of this region's origin from its parent's origin.
    pub offset_y: f32,
    pub color: Color,
    pub children: &'static [Region],
}

/// A region together with where it ends up once every ancestor's offset is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRegion<'a> {
    pub region: &'a Region,
    pub parent: Option<u64>,
    pub bounds: Rect<f32>,
}

impl Region {
    /// The region's rectangle in its own coordinate space.
    #[inline]
    pub fn local_rect(&self) -> Rect<f32> {
        Rect::new(Point::new(0.0, 0.0), Size::new(self.width, self.height))
    }

    #[inline]
    pub fn offset(&self) -> Vector<f32> {
        Vector::new(self.offset_x, self.offset_y)
    }

    /// Every region in this tree in drawing order, with absolute bounds computed by summing the offsets of the
    /// region and all of its ancestors. The root is drawn untranslated, so its own offset is not applied.
    pub fn walk(&self) -> Vec<PlacedRegion<'_>> {
        let mut placed = Vec::new();
        self.walk_into(None, Vector::new(0.0, 0.0), &mut placed);
        placed
    }

    fn walk_into<'a>(
        &'a self,
        parent: Option<u64>,
        origin: Vector<f32>,
        placed: &mut Vec<PlacedRegion<'a>>,
    ) {
        let origin = match parent {
            Some(_) => origin + self.offset(),
            None => origin,
        };
        placed.push(PlacedRegion {
            region: self,
            parent,
            bounds: self.local_rect().translate(origin),
        });

        for child in self.children {
            child.walk_into(Some(self.id), origin, placed);
        }
    }

    /// Draw this tree onto `surface`. Each region is bracketed by begin and end markers placed at its local
    /// rectangle; nested regions are filled inside a saved, translated coordinate space.
    #[inline]
    pub fn record<S: Surface + ?Sized>(&self, surface: &mut S, paint: &Paint) -> crate::Result {
        self.record_at(surface, paint, false)
    }

    fn record_at<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        paint: &Paint,
        nested: bool,
    ) -> crate::Result {
        let local = self.local_rect();
        let begin = Marker::begin(self.id, self.name).to_string();
        surface.draw_annotation(local, &begin, None)?;

        if nested {
            surface.save()?;
            surface.translate_by(self.offset())?;
        }

        surface.draw_rect(local, &paint.with_color(self.color))?;

        for child in self.children {
            child.record_at(surface, paint, true)?;
        }

        if nested {
            surface.restore()?;
        }

        let end = Marker::end(self.id, self.name).to_string();
        surface.draw_annotation(local, &end, None)
    }
}
