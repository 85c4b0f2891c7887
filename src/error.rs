// MIT/Apache2 License

use std::{fmt, io};

/// Sum error type for recording, encoding and decoding pictures.
#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    Io(io::Error),
    /// `restore()` was called with no matching `save()`.
    UnbalancedRestore,
    /// The input does not begin with the picture magic.
    BadMagic,
    /// The picture was written by a format version we do not read.
    UnsupportedVersion(u32),
    /// The input ended while `needed` more bytes were expected.
    Truncated { needed: usize },
    /// A chunk tag other than the one expected was found.
    BadTag { expected: u32, found: u32 },
    /// The op stream contains an op code we do not know.
    UnknownOp(u8),
    /// An op's recorded size does not match its payload.
    BadOpSize { op: u8, size: usize },
    /// A draw op refers to a paint that is not in the paint table.
    PaintIndex(usize),
    /// A paint record holds an unknown style.
    BadPaintStyle(u8),
    /// A float that must be finite was not.
    NonFinite,
    /// An annotation key is not valid UTF-8.
    InvalidKey,
    /// An op does not fit in the 24 bits reserved for its size.
    OpTooLarge(usize),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(io) => Some(io),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(io) => fmt::Display::fmt(io, f),
            Self::UnbalancedRestore => f.write_str("restore() called without a matching save()"),
            Self::BadMagic => f.write_str("Input is not a picture: bad magic"),
            Self::UnsupportedVersion(v) => write!(f, "Picture version {} is not supported", v),
            Self::Truncated { needed } => {
                write!(f, "Picture is truncated: {} more bytes expected", needed)
            }
            Self::BadTag { expected, found } => write!(
                f,
                "Expected chunk tag {:#010x}, found {:#010x}",
                expected, found
            ),
            Self::UnknownOp(op) => write!(f, "Unknown op code {}", op),
            Self::BadOpSize { op, size } => write!(f, "Op {} has invalid size {}", op, size),
            Self::PaintIndex(i) => write!(f, "Paint #{} does not exist", i),
            Self::BadPaintStyle(s) => write!(f, "Unknown paint style {}", s),
            Self::NonFinite => f.write_str("Expected a finite float"),
            Self::InvalidKey => f.write_str("Annotation key is not valid UTF-8"),
            Self::OpTooLarge(size) => write!(f, "Op of {} bytes is too large to record", size),
        }
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(io: io::Error) -> Self {
        Self::Io(io)
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
