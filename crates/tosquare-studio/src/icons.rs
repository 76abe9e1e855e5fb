use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tosquare_engine::coords::{Point, Size};
use tosquare_engine::pdc::{Color8, DrawCommand, DrawCommandImage, write_image};

const VIEW_BOX: Size = Size::new(50, 50);

fn pts(coords: &[(i16, i16)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Cloud with three slanted rain streaks.
pub fn heavy_rain() -> DrawCommandImage {
    let cloud = DrawCommand::path(pts(&[
        (8, 26), (7, 20), (12, 15), (18, 15), (22, 9), (30, 7),
        (37, 11), (39, 17), (44, 19), (45, 25), (41, 29), (11, 29),
    ]))
    .fill(Color8::WHITE)
    .stroke(Color8::BLACK, 2);

    let streak = |x: i16, len: i16| {
        DrawCommand::path(pts(&[(x, 33), (x - 3, 33 + len)]))
            .open(true)
            .stroke(Color8::BLUE, 2)
    };

    DrawCommandImage::new(VIEW_BOX, vec![cloud, streak(15, 9), streak(25, 12), streak(35, 9)])
}

/// Page with a folded corner and three lines of text.
pub fn document() -> DrawCommandImage {
    let page = DrawCommand::path(pts(&[(10, 4), (32, 4), (40, 12), (40, 46), (10, 46)]))
        .fill(Color8::WHITE)
        .stroke(Color8::BLACK, 2);
    let fold = DrawCommand::path(pts(&[(32, 4), (32, 12), (40, 12)]))
        .open(true)
        .stroke(Color8::BLACK, 2);
    let line = |y: i16, end: i16| {
        DrawCommand::path(pts(&[(16, y), (end, y)]))
            .open(true)
            .stroke(Color8::LIGHT_GRAY, 2)
    };

    DrawCommandImage::new(VIEW_BOX, vec![page, fold, line(20, 34), line(28, 34), line(36, 28)])
}

/// Writes both built-in icons into `dir` as `.pdc` files.
pub fn export(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for (name, image) in [("heavy_rain.pdc", heavy_rain()), ("document.pdc", document())] {
        let path = dir.join(name);
        let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_image(&image, &mut out).with_context(|| format!("failed to write {}", path.display()))?;
        out.flush().with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
