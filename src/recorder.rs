// MIT/Apache2 License

use crate::{DrawOp, Error, Paint, Picture, Surface};
use lyon_geom::{Rect, Vector};
use tinyvec::TinyVec;

/// A surface that records every command applied to it, to be turned into a `Picture`.
#[derive(Debug)]
pub struct PictureRecorder {
    cull_rect: Rect<f32>,
    ops: Vec<DrawOp>,
    // index into `ops` of every save() not yet restored
    saves: TinyVec<[usize; 8]>,
}

impl PictureRecorder {
    /// Start recording a picture covering `cull_rect`.
    #[inline]
    pub fn begin_recording(cull_rect: Rect<f32>) -> Self {
        log::debug!("Beginning recording with bounds {:?}", cull_rect);
        Self {
            cull_rect,
            ops: Vec::new(),
            saves: TinyVec::new(),
        }
    }

    /// The commands recorded so far.
    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Stop recording. Any `save()` left open is closed with an implicit `restore()`.
    pub fn finish_recording_as_picture(mut self) -> Picture {
        if !self.saves.is_empty() {
            log::warn!(
                "Recording finished with {} unbalanced save(s); restoring them",
                self.saves.len()
            );
        }

        while self.saves.pop().is_some() {
            self.ops.push(DrawOp::Restore);
        }

        log::debug!("Finished recording of {} ops", self.ops.len());
        Picture::new(self.cull_rect, self.ops)
    }

    #[inline]
    fn record(&mut self, op: DrawOp) {
        log::debug!("Recording {}", &op);
        self.ops.push(op);
    }
}

impl Surface for PictureRecorder {
    #[inline]
    fn save(&mut self) -> crate::Result {
        self.saves.push(self.ops.len());
        self.record(DrawOp::Save);
        Ok(())
    }

    #[inline]
    fn restore(&mut self) -> crate::Result {
        match self.saves.pop() {
            Some(at) => {
                log::trace!("Restoring save recorded at op #{}", at);
                self.record(DrawOp::Restore);
                Ok(())
            }
            None => Err(Error::UnbalancedRestore),
        }
    }

    #[inline]
    fn translate(&mut self, dx: f32, dy: f32) -> crate::Result {
        self.record(DrawOp::Translate(Vector::new(dx, dy)));
        Ok(())
    }

    #[inline]
    fn draw_rect(&mut self, rect: Rect<f32>, paint: &Paint) -> crate::Result {
        self.record(DrawOp::DrawRect {
            rect,
            paint: *paint,
        });
        Ok(())
    }

    #[inline]
    fn draw_annotation(
        &mut self,
        rect: Rect<f32>,
        key: &str,
        value: Option<&[u8]>,
    ) -> crate::Result {
        self.record(DrawOp::DrawAnnotation {
            rect,
            key: key.to_string(),
            value: value.map(<[u8]>::to_vec),
        });
        Ok(())
    }

    #[inline]
    fn save_count(&self) -> usize {
        self.saves.len()
    }
}
