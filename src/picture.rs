// MIT/Apache2 License

use crate::{
    codec::{self, Reader, EOF_TAG, PAINT_TAG, READER_TAG},
    op, Color, DrawOp, Error, Paint, PaintStyle, Surface,
};
use bytes::{BufMut, BytesMut};
use lyon_geom::{Rect, Vector};

/// The first eight bytes of every serialized picture.
pub const PICTURE_MAGIC: &[u8; 8] = b"skiapict";
/// The only format version this crate writes and reads.
pub const PICTURE_VERSION: u32 = 1;

const OP_SIZE_MASK: u32 = 0x00FF_FFFF;
const ANTI_ALIAS_FLAG: u8 = 1;

/// An immutable recording of drawing commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    cull_rect: Rect<f32>,
    ops: Vec<DrawOp>,
}

impl Picture {
    #[inline]
    pub(crate) fn new(cull_rect: Rect<f32>, ops: Vec<DrawOp>) -> Self {
        Self { cull_rect, ops }
    }

    /// The bounds this picture was recorded with.
    #[inline]
    pub fn cull_rect(&self) -> Rect<f32> {
        self.cull_rect
    }

    /// The recorded commands, in order.
    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Apply every recorded command to `surface`, in order.
    pub fn playback<S: Surface + ?Sized>(&self, surface: &mut S) -> crate::Result {
        self.ops.iter().try_for_each(|op| match op {
            DrawOp::Save => surface.save(),
            DrawOp::Restore => surface.restore(),
            DrawOp::Translate(offset) => surface.translate_by(*offset),
            DrawOp::DrawRect { rect, paint } => surface.draw_rect(*rect, paint),
            DrawOp::DrawAnnotation { rect, key, value } => {
                surface.draw_annotation(*rect, key, value.as_deref())
            }
        })
    }

    /// Encode this picture. The output depends on nothing but the picture itself.
    pub fn serialize(&self) -> crate::Result<Vec<u8>> {
        let mut paints: Vec<Paint> = Vec::new();
        let mut op_data = BytesMut::new();
        for op in &self.ops {
            encode_op(&mut op_data, op, &mut paints)?;
        }

        let mut buf = BytesMut::with_capacity(op_data.len() + 64);
        buf.put_slice(PICTURE_MAGIC);
        buf.put_u32_le(PICTURE_VERSION);
        codec::put_rect(&mut buf, &self.cull_rect);
        buf.put_u8(1);

        buf.put_u32_le(READER_TAG);
        buf.put_u32_le(op_data.len() as u32);
        buf.put_slice(&op_data);

        buf.put_u32_le(PAINT_TAG);
        buf.put_u32_le(paints.len() as u32);
        for paint in &paints {
            encode_paint(&mut buf, paint);
        }

        buf.put_u32_le(EOF_TAG);

        log::trace!(
            "Serialized {} ops and {} paints into {} bytes",
            self.ops.len(),
            paints.len(),
            buf.len()
        );
        Ok(buf.to_vec())
    }

    /// Decode a picture written by `serialize`.
    pub fn deserialize(data: &[u8]) -> crate::Result<Picture> {
        let mut reader = Reader::new(data);
        if reader.bytes(PICTURE_MAGIC.len())? != PICTURE_MAGIC {
            return Err(Error::BadMagic);
        }

        let version = reader.u32()?;
        if version != PICTURE_VERSION {
            return Err(Error::UnsupportedVersion(version));
        }

        let cull_rect = reader.rect()?;
        if reader.u8()? == 0 {
            return Ok(Picture::new(cull_rect, Vec::new()));
        }

        reader.tag(READER_TAG)?;
        let op_len = reader.u32()? as usize;
        let op_data = reader.bytes(op_len)?;

        reader.tag(PAINT_TAG)?;
        let paint_count = reader.u32()? as usize;
        let paints = (0..paint_count)
            .map(|_| decode_paint(&mut reader))
            .collect::<crate::Result<Vec<Paint>>>()?;

        reader.tag(EOF_TAG)?;

        let mut op_reader = Reader::new(op_data);
        let mut ops = Vec::new();
        while !op_reader.is_empty() {
            ops.push(decode_op(&mut op_reader, &paints)?);
        }

        log::trace!("Deserialized {} ops and {} paints", ops.len(), paints.len());
        Ok(Picture::new(cull_rect, ops))
    }
}

fn encode_op(buf: &mut BytesMut, op: &DrawOp, paints: &mut Vec<Paint>) -> crate::Result {
    let start = buf.len();
    // patched once the payload length is known
    buf.put_u32_le(0);

    match op {
        DrawOp::Save | DrawOp::Restore => {}
        DrawOp::Translate(offset) => {
            buf.put_f32_le(offset.x);
            buf.put_f32_le(offset.y);
        }
        DrawOp::DrawRect { rect, paint } => {
            let index = match paints.iter().position(|p| p == paint) {
                Some(index) => index,
                None => {
                    paints.push(*paint);
                    paints.len() - 1
                }
            };
            buf.put_u32_le(index as u32);
            codec::put_rect(buf, rect);
        }
        DrawOp::DrawAnnotation { rect, key, value } => {
            codec::put_rect(buf, rect);
            codec::put_padded(buf, key.as_bytes());
            codec::put_optional(buf, value.as_deref());
        }
    }

    let size = buf.len() - start;
    if size > OP_SIZE_MASK as usize {
        return Err(Error::OpTooLarge(size));
    }

    let header = (u32::from(op.code()) << 24) | size as u32;
    buf[start..start + 4].copy_from_slice(&header.to_le_bytes());
    Ok(())
}

fn decode_op(reader: &mut Reader<'_>, paints: &[Paint]) -> crate::Result<DrawOp> {
    let header = reader.u32()?;
    let code = (header >> 24) as u8;
    let size = (header & OP_SIZE_MASK) as usize;
    if size < 4 {
        return Err(Error::BadOpSize { op: code, size });
    }

    let mut payload = Reader::new(reader.bytes(size - 4)?);
    let op = match code {
        op::SAVE => DrawOp::Save,
        op::RESTORE => DrawOp::Restore,
        op::TRANSLATE => {
            let dx = payload.finite_f32()?;
            let dy = payload.finite_f32()?;
            DrawOp::Translate(Vector::new(dx, dy))
        }
        op::DRAW_RECT => {
            let index = payload.u32()? as usize;
            let paint = *paints.get(index).ok_or(Error::PaintIndex(index))?;
            let rect = payload.rect()?;
            DrawOp::DrawRect { rect, paint }
        }
        op::DRAW_ANNOTATION => {
            let rect = payload.rect()?;
            let key = std::str::from_utf8(payload.padded()?)
                .map_err(|_| Error::InvalidKey)?
                .to_string();
            let value = payload.optional()?.map(<[u8]>::to_vec);
            DrawOp::DrawAnnotation { rect, key, value }
        }
        other => return Err(Error::UnknownOp(other)),
    };

    if payload.is_empty() {
        Ok(op)
    } else {
        Err(Error::BadOpSize { op: code, size })
    }
}

fn encode_paint(buf: &mut BytesMut, paint: &Paint) {
    buf.put_u32_le(paint.color.to_argb());
    buf.put_f32_le(paint.stroke_width);
    buf.put_u8(paint.style.to_byte());
    buf.put_u8(if paint.anti_alias { ANTI_ALIAS_FLAG } else { 0 });
    buf.put_bytes(0, 2);
}

fn decode_paint(reader: &mut Reader<'_>) -> crate::Result<Paint> {
    let color = Color::from_argb(reader.u32()?);
    let stroke_width = reader.finite_f32()?;
    let style = reader.u8()?;
    let style = PaintStyle::from_byte(style).ok_or(Error::BadPaintStyle(style))?;
    let flags = reader.u8()?;
    reader.skip(2)?;

    Ok(Paint {
        color,
        style,
        anti_alias: flags & ANTI_ALIAS_FLAG != 0,
        stroke_width,
    })
}
