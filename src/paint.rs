// MIT/Apache2 License

use crate::Color;

/// Defines which parts of a shape a paint covers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    Fill,
    Stroke,
    StrokeAndFill,
}

impl PaintStyle {
    #[inline]
    pub(crate) fn to_byte(self) -> u8 {
        match self {
            PaintStyle::Fill => 0,
            PaintStyle::Stroke => 1,
            PaintStyle::StrokeAndFill => 2,
        }
    }

    #[inline]
    pub(crate) fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(PaintStyle::Fill),
            1 => Some(PaintStyle::Stroke),
            2 => Some(PaintStyle::StrokeAndFill),
            _ => None,
        }
    }
}

/// How a shape is drawn onto a surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    /// Whether edges are anti-aliased.
    pub anti_alias: bool,
    /// The width of stroked lines. Zero means hairline.
    pub stroke_width: f32,
}

impl Default for Paint {
    #[inline]
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            style: PaintStyle::Fill,
            anti_alias: false,
            stroke_width: 0.0,
        }
    }
}

impl Paint {
    /// An anti-aliased solid fill in the given color.
    #[inline]
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            anti_alias: true,
            ..Self::default()
        }
    }

    /// This paint, recolored.
    #[inline]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}
