use tosquare_pdc::{DrawCommand, DrawCommandImage};

use crate::coords::{Point, Size};

use super::Progress;

/// Moves one coordinate toward the nearer of the two square edges (`1` or
/// `bound - 1`) by `progress`.
///
/// Ties go to `bound - 1`. Deltas wrap to 16 bits and the scaling truncates
/// toward zero, so pixel paths match the watch firmware exactly.
pub fn attract_coordinate(point: i16, bound: i16, progress: Progress) -> i16 {
    let p = i32::from(point);
    let delta_0 = (1 - p) as i16;
    let delta_b = (i32::from(bound) - 1 - p) as i16;
    let delta = if delta_0.unsigned_abs() < delta_b.unsigned_abs() { delta_0 } else { delta_b };

    let moved = i64::from(delta) * i64::from(progress.value()) / i64::from(progress.max());
    (i64::from(point) + moved) as i16
}

/// Attracts both axes of `point` toward the square described by `size`.
///
/// `y` is shifted down one pixel before the transform.
pub fn attract_point(point: Point, size: Size, progress: Progress) -> Point {
    let y = point.y.wrapping_add(1);
    Point::new(
        attract_coordinate(point.x, size.w, progress),
        attract_coordinate(y, size.h, progress),
    )
}

/// Attracts every point of every command in place.
pub fn attract_shape(commands: &mut [DrawCommand], size: Size, progress: Progress) {
    for command in commands {
        for i in 0..command.num_points() {
            if let Some(point) = command.point(i) {
                command.set_point(i, attract_point(point, size, progress));
            }
        }
    }
}

/// Attracts an image's command list toward its own bounding square.
pub fn attract_image(image: &mut DrawCommandImage, progress: Progress) {
    let size = image.bounds_size();
    attract_shape(image.commands_mut(), size, progress);
}
