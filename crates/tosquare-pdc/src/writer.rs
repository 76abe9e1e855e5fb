use std::io::Write;

use crate::command::{CommandKind, DrawCommand};
use crate::error::PdcError;
use crate::image::{DrawCommandImage, PDC_VERSION};
use crate::parser::{HEADER_LEN, MAGIC};

/// Encodes `image` as a complete PDC file.
pub fn image_to_bytes(image: &DrawCommandImage) -> Result<Vec<u8>, PdcError> {
    let mut out = Vec::with_capacity(HEADER_LEN + 8 + image.commands().len() * 9 + image.num_points() * 4);
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&[0; 4]); // size, patched below

    out.push(PDC_VERSION);
    out.push(0); // reserved
    let size = image.bounds_size();
    out.extend_from_slice(&size.w.to_le_bytes());
    out.extend_from_slice(&size.h.to_le_bytes());

    let count = u16::try_from(image.commands().len()).map_err(|_| PdcError::TooLarge("command count"))?;
    out.extend_from_slice(&count.to_le_bytes());
    for command in image.commands() {
        write_command(&mut out, command)?;
    }

    let payload = u32::try_from(out.len() - HEADER_LEN).map_err(|_| PdcError::TooLarge("image"))?;
    out[4..HEADER_LEN].copy_from_slice(&payload.to_le_bytes());
    Ok(out)
}

/// Encodes `image` and writes it to `writer`.
pub fn write_image<W: Write>(image: &DrawCommandImage, mut writer: W) -> Result<(), PdcError> {
    writer.write_all(&image_to_bytes(image)?)?;
    Ok(())
}

fn write_command(out: &mut Vec<u8>, command: &DrawCommand) -> Result<(), PdcError> {
    out.push(command.kind.to_byte());
    out.push(command.hidden as u8);
    out.push(command.stroke_color.0);
    out.push(command.stroke_width);
    out.push(command.fill_color.0);

    let open_or_radius = match command.kind {
        CommandKind::Circle => command.radius,
        CommandKind::Path | CommandKind::PrecisePath => command.path_open as u16,
    };
    out.extend_from_slice(&open_or_radius.to_le_bytes());

    let num_points = u16::try_from(command.points.len()).map_err(|_| PdcError::TooLarge("point count"))?;
    out.extend_from_slice(&num_points.to_le_bytes());
    for p in &command.points {
        out.extend_from_slice(&p.x.to_le_bytes());
        out.extend_from_slice(&p.y.to_le_bytes());
    }
    Ok(())
}
