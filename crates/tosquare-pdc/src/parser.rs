use std::io::Read;

use crate::color::Color8;
use crate::command::{CommandKind, DrawCommand};
use crate::error::PdcError;
use crate::geometry::{Point, Size};
use crate::image::{DrawCommandImage, PDC_VERSION};

pub(crate) const MAGIC: [u8; 4] = *b"PDCI";

/// Bytes in the magic word plus the size field.
pub(crate) const HEADER_LEN: usize = 8;

// ── Parser ────────────────────────────────────────────────────────────────

/// Little-endian cursor over an image payload.
///
/// Offsets reported in errors are absolute (they include the 8-byte header).
pub struct Parser<'b> {
    bytes: &'b [u8],
    pos: usize,
    base: usize,
}

impl<'b> Parser<'b> {
    pub fn new(bytes: &'b [u8]) -> Self {
        Self { bytes, pos: 0, base: 0 }
    }

    fn with_base(bytes: &'b [u8], base: usize) -> Self {
        Self { bytes, pos: 0, base }
    }

    fn take(&mut self, n: usize) -> Result<&'b [u8], PdcError> {
        let remaining = self.bytes.len() - self.pos;
        if remaining < n {
            return Err(PdcError::Truncated { offset: self.base + self.pos, needed: n - remaining });
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8, PdcError> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16, PdcError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32, PdcError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn i16(&mut self) -> Result<i16, PdcError> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    fn point(&mut self) -> Result<Point, PdcError> {
        let x = self.i16()?;
        let y = self.i16()?;
        Ok(Point::new(x, y))
    }

    // ── Image ─────────────────────────────────────────────────────────────

    /// Parses a full file: magic, size field, then the payload.
    pub fn parse_file(&mut self) -> Result<DrawCommandImage, PdcError> {
        let magic = self.take(4)?;
        if magic != MAGIC {
            return Err(PdcError::BadMagic([magic[0], magic[1], magic[2], magic[3]]));
        }
        let declared = self.u32()?;
        let rest = &self.bytes[self.pos..];
        if rest.len() < declared as usize {
            return Err(PdcError::SizeMismatch { declared, actual: rest.len() });
        }

        // Anything after the declared payload belongs to the container, not the image.
        let mut payload = Parser::with_base(&rest[..declared as usize], self.base + self.pos);
        let image = payload.parse_payload()?;
        if payload.pos != payload.bytes.len() {
            return Err(PdcError::SizeMismatch { declared, actual: payload.pos });
        }
        self.pos += declared as usize;
        Ok(image)
    }

    fn parse_payload(&mut self) -> Result<DrawCommandImage, PdcError> {
        let version = self.u8()?;
        if version != PDC_VERSION {
            return Err(PdcError::UnsupportedVersion(version));
        }
        self.u8()?; // reserved
        let w = self.i16()?;
        let h = self.i16()?;

        let count = self.u16()? as usize;
        let mut commands = Vec::with_capacity(count);
        for index in 0..count {
            commands.push(self.parse_command(index)?);
        }

        Ok(DrawCommandImage::new(Size::new(w, h), commands))
    }

    // ── Command ───────────────────────────────────────────────────────────

    fn parse_command(&mut self, index: usize) -> Result<DrawCommand, PdcError> {
        let type_byte = self.u8()?;
        let kind = CommandKind::from_byte(type_byte)
            .ok_or(PdcError::UnknownCommandType { index, kind: type_byte })?;
        let flags = self.u8()?;
        let stroke_color = Color8(self.u8()?);
        let stroke_width = self.u8()?;
        let fill_color = Color8(self.u8()?);
        // Shared field: open flag for paths, radius for circles.
        let open_or_radius = self.u16()?;
        let num_points = self.u16()? as usize;

        if kind == CommandKind::Circle && num_points != 1 {
            return Err(PdcError::CirclePointCount { index, count: num_points });
        }

        let mut points = Vec::with_capacity(num_points);
        for _ in 0..num_points {
            points.push(self.point()?);
        }

        let (path_open, radius) = match kind {
            CommandKind::Circle => (false, open_or_radius),
            CommandKind::Path | CommandKind::PrecisePath => (open_or_radius & 1 != 0, 0),
        };

        Ok(DrawCommand {
            kind,
            hidden: flags & 1 != 0,
            stroke_color,
            stroke_width,
            fill_color,
            path_open,
            radius,
            points,
        })
    }
}

/// Decodes a PDC image file held in memory.
pub fn parse_image(bytes: &[u8]) -> Result<DrawCommandImage, PdcError> {
    Parser::new(bytes).parse_file()
}

/// Reads and decodes a PDC image file from `reader`.
pub fn read_image<R: Read>(mut reader: R) -> Result<DrawCommandImage, PdcError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_image(&bytes)
}
