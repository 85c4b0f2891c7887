// MIT/Apache2 License

use crate::Paint;
use lyon_geom::{Rect, Vector};
use std::fmt;

pub(crate) const DRAW_RECT: u8 = 21;
pub(crate) const RESTORE: u8 = 28;
pub(crate) const SAVE: u8 = 30;
pub(crate) const TRANSLATE: u8 = 35;
pub(crate) const DRAW_ANNOTATION: u8 = 60;

/// A single recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Translate(Vector<f32>),
    DrawRect {
        rect: Rect<f32>,
        paint: Paint,
    },
    DrawAnnotation {
        rect: Rect<f32>,
        key: String,
        value: Option<Vec<u8>>,
    },
}

impl DrawOp {
    /// The code this op is stored under in a serialized picture.
    #[inline]
    pub fn code(&self) -> u8 {
        match self {
            DrawOp::Save => SAVE,
            DrawOp::Restore => RESTORE,
            DrawOp::Translate(_) => TRANSLATE,
            DrawOp::DrawRect { .. } => DRAW_RECT,
            DrawOp::DrawAnnotation { .. } => DRAW_ANNOTATION,
        }
    }

    /// The annotation key, if this op is an annotation.
    #[inline]
    pub fn annotation_key(&self) -> Option<&str> {
        match self {
            DrawOp::DrawAnnotation { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Save => f.write_str("save"),
            DrawOp::Restore => f.write_str("restore"),
            DrawOp::Translate(v) => write!(f, "translate({}, {})", v.x, v.y),
            DrawOp::DrawRect { rect, paint } => write!(
                f,
                "drawRect([{}, {}, {}, {}], {:?})",
                rect.min_x(),
                rect.min_y(),
                rect.max_x(),
                rect.max_y(),
                paint.color
            ),
            DrawOp::DrawAnnotation { rect, key, .. } => write!(
                f,
                "drawAnnotation([{}, {}, {}, {}], {:?})",
                rect.min_x(),
                rect.min_y(),
                rect.max_x(),
                rect.max_y(),
                key
            ),
        }
    }
}
