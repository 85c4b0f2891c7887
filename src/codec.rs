// MIT/Apache2 License

//! Little-endian primitives shared by the picture writer and reader.

use crate::Error;
use bytes::{Buf, BufMut, BytesMut};
use lyon_geom::{Point, Rect, Size};

/// Build a chunk tag out of four ASCII characters.
#[inline]
pub(crate) const fn four_byte_tag(tag: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*tag)
}

pub(crate) const READER_TAG: u32 = four_byte_tag(b"read");
pub(crate) const PAINT_TAG: u32 = four_byte_tag(b"pnt ");
pub(crate) const EOF_TAG: u32 = four_byte_tag(b"eof ");

#[inline]
fn padding(len: usize) -> usize {
    (4 - len % 4) % 4
}

#[inline]
pub(crate) fn put_rect(buf: &mut BytesMut, rect: &Rect<f32>) {
    buf.put_f32_le(rect.origin.x);
    buf.put_f32_le(rect.origin.y);
    buf.put_f32_le(rect.size.width);
    buf.put_f32_le(rect.size.height);
}

/// Length written in place of a byte string that is absent.
pub(crate) const ABSENT: u32 = u32::MAX;

/// Write a length-prefixed byte string, zero-padded to a four byte boundary.
#[inline]
pub(crate) fn put_padded(buf: &mut BytesMut, bytes: &[u8]) {
    buf.put_u32_le(bytes.len() as u32);
    buf.put_slice(bytes);
    buf.put_bytes(0, padding(bytes.len()));
}

/// Write an optional byte string; `None` is stored as the `ABSENT` length.
#[inline]
pub(crate) fn put_optional(buf: &mut BytesMut, bytes: Option<&[u8]>) {
    match bytes {
        Some(bytes) => put_padded(buf, bytes),
        None => buf.put_u32_le(ABSENT),
    }
}

/// A bounds-checked cursor over a serialized picture.
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    #[inline]
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        !self.buf.has_remaining()
    }

    #[inline]
    fn ensure(&self, len: usize) -> crate::Result {
        if self.buf.remaining() < len {
            Err(Error::Truncated {
                needed: len - self.buf.remaining(),
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    pub(crate) fn u8(&mut self) -> crate::Result<u8> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    #[inline]
    pub(crate) fn u32(&mut self) -> crate::Result<u32> {
        self.ensure(4)?;
        Ok(self.buf.get_u32_le())
    }

    #[inline]
    pub(crate) fn f32(&mut self) -> crate::Result<f32> {
        self.ensure(4)?;
        Ok(self.buf.get_f32_le())
    }

    #[inline]
    pub(crate) fn finite_f32(&mut self) -> crate::Result<f32> {
        let value = self.f32()?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::NonFinite)
        }
    }

    /// Take the next `len` bytes.
    #[inline]
    pub(crate) fn bytes(&mut self, len: usize) -> crate::Result<&'a [u8]> {
        self.ensure(len)?;
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    #[inline]
    pub(crate) fn skip(&mut self, len: usize) -> crate::Result {
        self.bytes(len).map(|_| ())
    }

    #[inline]
    pub(crate) fn tag(&mut self, expected: u32) -> crate::Result {
        let found = self.u32()?;
        if found == expected {
            Ok(())
        } else {
            Err(Error::BadTag { expected, found })
        }
    }

    #[inline]
    pub(crate) fn rect(&mut self) -> crate::Result<Rect<f32>> {
        let x = self.finite_f32()?;
        let y = self.finite_f32()?;
        let width = self.finite_f32()?;
        let height = self.finite_f32()?;
        Ok(Rect::new(Point::new(x, y), Size::new(width, height)))
    }

    /// Read a byte string written by `put_padded`.
    #[inline]
    pub(crate) fn padded(&mut self) -> crate::Result<&'a [u8]> {
        let len = self.u32()? as usize;
        self.padded_body(len)
    }

    /// Read a byte string written by `put_optional`.
    #[inline]
    pub(crate) fn optional(&mut self) -> crate::Result<Option<&'a [u8]>> {
        match self.u32()? {
            ABSENT => Ok(None),
            len => self.padded_body(len as usize).map(Some),
        }
    }

    #[inline]
    fn padded_body(&mut self, len: usize) -> crate::Result<&'a [u8]> {
        let bytes = self.bytes(len)?;
        self.skip(padding(len))?;
        Ok(bytes)
    }
}
