// MIT/Apache2 License

//! The four nested boxes recorded into `boxes.skp`, fixture data for the layout inspector.

use crate::{Color, Paint, Picture, PictureRecorder, Region, Surface};
use lyon_geom::Rect;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// The file the fixture is written to, relative to the working directory.
pub const OUTPUT_FILE: &str = "boxes.skp";

const APP_COMPAT_BUTTON: Region = Region {
    id: 3,
    name: "AppCompatButton",
    width: 200.0,
    height: 500.0,
    offset_x: 200.0,
    offset_y: 200.0,
    color: Color::BLACK,
    children: &[],
};

const FRAME_LAYOUT: Region = Region {
    id: 2,
    name: "FrameLayout",
    width: 500.0,
    height: 1000.0,
    offset_x: 100.0,
    offset_y: 100.0,
    color: Color::BLUE,
    children: &[APP_COMPAT_BUTTON],
};

const BUTTON: Region = Region {
    id: 4,
    name: "Button",
    width: 400.0,
    height: 500.0,
    offset_x: 300.0,
    offset_y: 1200.0,
    color: Color::RED,
    children: &[],
};

/// The root of the box tree.
pub const LINEAR_LAYOUT: Region = Region {
    id: 1,
    name: "LinearLayout",
    width: 1000.0,
    height: 2000.0,
    offset_x: 0.0,
    offset_y: 0.0,
    color: Color::YELLOW,
    children: &[FRAME_LAYOUT, BUTTON],
};

/// The paint every box is filled with, before it is given the box's color.
#[inline]
pub fn box_paint() -> Paint {
    Paint::fill(Color::BLACK)
}

/// Draw the boxes onto any surface.
#[inline]
pub fn record_boxes<S: Surface + ?Sized>(surface: &mut S) -> crate::Result {
    LINEAR_LAYOUT.record(surface, &box_paint())
}

/// Record the boxes into a picture bounded by the outermost box.
pub fn boxes_picture() -> crate::Result<Picture> {
    let bounds: Rect<f32> = LINEAR_LAYOUT.local_rect();
    let mut recorder = PictureRecorder::begin_recording(bounds);
    record_boxes(&mut recorder)?;
    Ok(recorder.finish_recording_as_picture())
}

/// Serialize the boxes picture and write it to `path`, replacing anything already there. Returns the number of
/// bytes written.
pub fn write_boxes<P: AsRef<Path>>(path: P) -> crate::Result<usize> {
    let data = boxes_picture()?.serialize()?;

    let mut file = BufWriter::new(File::create(path.as_ref())?);
    file.write_all(&data)?;
    file.flush()?;

    log::debug!("Wrote {} bytes to {}", data.len(), path.as_ref().display());
    Ok(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrawOp;

    #[test]
    fn picture_is_bounded_by_outer_box() {
        let picture = boxes_picture().unwrap();
        assert_eq!(picture.cull_rect(), LINEAR_LAYOUT.local_rect());
        assert_eq!(picture.ops().len(), 8 + 4 + 3 * 3);
    }

    #[test]
    fn boxes_are_anti_aliased_fills() {
        let picture = boxes_picture().unwrap();
        for op in picture.ops() {
            if let DrawOp::DrawRect { paint, .. } = op {
                assert!(paint.anti_alias);
                assert_eq!(paint.style, crate::PaintStyle::Fill);
                approx::assert_abs_diff_eq!(paint.stroke_width, 0.0);
            }
        }
    }

    #[test]
    fn absolute_bounds() {
        let bounds: Vec<(u64, [f32; 4])> = LINEAR_LAYOUT
            .walk()
            .into_iter()
            .map(|placed| {
                let b = placed.bounds;
                (
                    placed.region.id,
                    [b.min_x(), b.min_y(), b.max_x(), b.max_y()],
                )
            })
            .collect();

        assert_eq!(
            bounds,
            vec![
                (1, [0.0, 0.0, 1000.0, 2000.0]),
                (2, [100.0, 100.0, 600.0, 1100.0]),
                (3, [300.0, 300.0, 500.0, 800.0]),
                (4, [300.0, 1200.0, 700.0, 1700.0]),
            ]
        );
    }
}
