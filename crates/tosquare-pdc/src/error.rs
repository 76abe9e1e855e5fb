use std::fmt;

/// A failure while decoding or encoding a PDC image.
#[derive(Debug)]
pub enum PdcError {
    /// The first four bytes were not `PDCI`.
    BadMagic([u8; 4]),
    /// The input ended while `needed` more bytes were expected at `offset`.
    Truncated { offset: usize, needed: usize },
    /// The size field disagrees with the number of bytes that follow it.
    SizeMismatch { declared: u32, actual: usize },
    UnsupportedVersion(u8),
    /// Command `index` carries a type byte that is not path, circle or precise path.
    UnknownCommandType { index: usize, kind: u8 },
    /// Circle commands carry exactly one point (the center).
    CirclePointCount { index: usize, count: usize },
    /// A command or image is too large for the format's 16-bit counters.
    TooLarge(&'static str),
    Io(std::io::Error),
}

impl fmt::Display for PdcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdcError::BadMagic(m) => write!(f, "pdc: bad magic {:?}, expected \"PDCI\"", m),
            PdcError::Truncated { offset, needed } => {
                write!(f, "pdc: truncated input at byte {}: {} more byte(s) expected", offset, needed)
            }
            PdcError::SizeMismatch { declared, actual } => {
                write!(f, "pdc: size field says {} byte(s) but {} follow", declared, actual)
            }
            PdcError::UnsupportedVersion(v) => write!(f, "pdc: unsupported version {}", v),
            PdcError::UnknownCommandType { index, kind } => {
                write!(f, "pdc: command {} has unknown type {}", index, kind)
            }
            PdcError::CirclePointCount { index, count } => {
                write!(f, "pdc: circle command {} has {} point(s), expected 1", index, count)
            }
            PdcError::TooLarge(what) => write!(f, "pdc: {} does not fit the format", what),
            PdcError::Io(err) => write!(f, "pdc: {}", err),
        }
    }
}

impl std::error::Error for PdcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PdcError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PdcError {
    fn from(err: std::io::Error) -> Self {
        PdcError::Io(err)
    }
}
