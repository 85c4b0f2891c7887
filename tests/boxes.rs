// MIT/Apache2 License

use boxes_skp::{boxes::LINEAR_LAYOUT, Color, Marker, MarkerKind, Paint, Picture, Surface};
use lyon_geom::{Rect, Vector};
use std::{fs, path::PathBuf};

/// Replays a picture, tracking the device-space position of every fill.
struct Replay {
    origin: Vector<f32>,
    saved: Vec<Vector<f32>>,
    fills: Vec<(Rect<f32>, Color)>,
    keys: Vec<String>,
}

impl Replay {
    fn new() -> Self {
        Self {
            origin: Vector::new(0.0, 0.0),
            saved: Vec::new(),
            fills: Vec::new(),
            keys: Vec::new(),
        }
    }
}

impl Surface for Replay {
    fn save(&mut self) -> boxes_skp::Result {
        self.saved.push(self.origin);
        Ok(())
    }

    fn restore(&mut self) -> boxes_skp::Result {
        self.origin = self.saved.pop().ok_or(boxes_skp::Error::UnbalancedRestore)?;
        Ok(())
    }

    fn translate(&mut self, dx: f32, dy: f32) -> boxes_skp::Result {
        self.origin += Vector::new(dx, dy);
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect<f32>, paint: &Paint) -> boxes_skp::Result {
        self.fills.push((rect.translate(self.origin), paint.color));
        Ok(())
    }

    fn draw_annotation(
        &mut self,
        _rect: Rect<f32>,
        key: &str,
        value: Option<&[u8]>,
    ) -> boxes_skp::Result {
        assert!(value.is_none());
        self.keys.push(key.to_string());
        Ok(())
    }

    fn save_count(&self) -> usize {
        self.saved.len()
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("boxes-skp-{}-{}.skp", std::process::id(), name))
}

fn generate(name: &str) -> Vec<u8> {
    let path = temp_path(name);
    let written = boxes_skp::write_boxes(&path).unwrap();
    let data = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(written, data.len());
    data
}

fn replay(data: &[u8]) -> Replay {
    let picture = Picture::deserialize(data).unwrap();
    let mut replay = Replay::new();
    picture.playback(&mut replay).unwrap();
    assert_eq!(replay.save_count(), 0);
    replay
}

#[test]
fn writes_a_non_empty_file() {
    let data = generate("non-empty");
    assert!(!data.is_empty());
    assert_eq!(&data[..8], b"skiapict");
}

#[test]
fn fills_four_boxes_in_order() {
    let replay = replay(&generate("fills"));

    let fills: Vec<([f32; 4], u32)> = replay
        .fills
        .iter()
        .map(|(rect, color)| {
            (
                [rect.min_x(), rect.min_y(), rect.width(), rect.height()],
                color.to_argb(),
            )
        })
        .collect();

    assert_eq!(
        fills,
        vec![
            ([0.0, 0.0, 1000.0, 2000.0], 0xFFFF_FF00),
            ([100.0, 100.0, 500.0, 1000.0], 0xFF00_00FF),
            ([300.0, 300.0, 200.0, 500.0], 0xFF00_0000),
            ([300.0, 1200.0, 400.0, 500.0], 0xFFFF_0000),
        ]
    );
}

#[test]
fn device_bounds_match_summed_offsets() {
    let replay = replay(&generate("bounds"));
    let expected: Vec<Rect<f32>> = LINEAR_LAYOUT
        .walk()
        .into_iter()
        .map(|placed| placed.bounds)
        .collect();
    let actual: Vec<Rect<f32>> = replay.fills.iter().map(|(rect, _)| *rect).collect();
    assert_eq!(actual, expected);
}

#[test]
fn markers_pair_up_and_nest() {
    let replay = replay(&generate("markers"));

    assert_eq!(
        replay.keys,
        vec![
            "RenderNode(id=1, name='LinearLayout')",
            "RenderNode(id=2, name='FrameLayout')",
            "RenderNode(id=3, name='AppCompatButton')",
            "/RenderNode(id=3, name='AppCompatButton')",
            "/RenderNode(id=2, name='FrameLayout')",
            "RenderNode(id=4, name='Button')",
            "/RenderNode(id=4, name='Button')",
            "/RenderNode(id=1, name='LinearLayout')",
        ]
    );

    let mut open: Vec<(u64, &str)> = Vec::new();
    let mut parents = Vec::new();
    for key in &replay.keys {
        let marker = Marker::parse(key).unwrap();
        match marker.kind {
            MarkerKind::Begin => {
                parents.push((marker.id, open.last().map(|&(id, _)| id)));
                open.push((marker.id, marker.name));
            }
            MarkerKind::End => assert_eq!(open.pop(), Some((marker.id, marker.name))),
        }
    }

    assert!(open.is_empty());
    assert_eq!(
        parents,
        vec![(1, None), (2, Some(1)), (3, Some(2)), (4, Some(1))]
    );
}

#[test]
fn markers_use_local_bounds() {
    let picture = boxes_skp::boxes_picture().unwrap();
    let rects: Vec<Rect<f32>> = picture
        .ops()
        .iter()
        .filter_map(|op| match op {
            boxes_skp::DrawOp::DrawAnnotation { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();

    assert_eq!(rects.len(), 8);
    assert!(rects.iter().all(|rect| rect.origin.x == 0.0 && rect.origin.y == 0.0));
}

#[test]
fn output_is_deterministic() {
    let first = generate("first");
    let second = generate("second");
    assert_eq!(first, second);
}

#[test]
fn overwrites_existing_file() {
    let path = temp_path("overwrite");
    fs::write(&path, vec![0xABu8; 64 * 1024]).unwrap();

    boxes_skp::write_boxes(&path).unwrap();
    let data = fs::read(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let expected = boxes_skp::boxes_picture().unwrap().serialize().unwrap();
    assert_eq!(data, expected);
}
