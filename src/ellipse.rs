/*
 *  ellipse.rs
 *
 *  AirScope - the airwaves, at a glance
 *  (c) 2024-26 Stuart Hunter
 *
 *  Integer-only upper-half ellipse rasterizer for the signal blips
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_graphics::prelude::*;

/// Draw the upper half of an ellipse centered at `center` with radii
/// `rx`/`ry`, midpoint style: two regions split where the slope passes
/// -1, decision variable accumulated in integers only.
///
/// Radii below 2 (negative included) draw nothing; step artifacts make
/// those sizes worthless on the panel anyway.
pub fn draw_half_ellipse<D>(
    target: &mut D,
    center: Point,
    rx: i32,
    ry: i32,
    color: D::Color,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    if rx < 2 || ry < 2 {
        return Ok(());
    }
    let (x0, y0) = (center.x, center.y);
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let fx2 = 4 * rx2;
    let fy2 = 4 * ry2;
    let mut points = Vec::new();

    // region 1: from the apex down to slope -1, y falls as the
    // decision variable overflows
    let mut x = 0;
    let mut y = ry;
    let mut s = 2 * ry2 + rx2 * (1 - 2 * ry);
    while ry2 * x <= rx2 * y {
        points.push(Point::new(x0 + x, y0 - y));
        points.push(Point::new(x0 - x, y0 - y));
        if s >= 0 {
            s += fx2 * (1 - y);
            y -= 1;
        }
        s += ry2 * (4 * x + 6);
        x += 1;
    }

    // region 2: in from the flanks, x falls instead
    let mut x = rx;
    let mut y = 0;
    let mut s = 2 * rx2 + ry2 * (1 - 2 * rx);
    while rx2 * y <= ry2 * x {
        points.push(Point::new(x0 + x, y0 - y));
        points.push(Point::new(x0 - x, y0 - y));
        if s >= 0 {
            s += fy2 * (1 - x);
            x -= 1;
        }
        s += rx2 * (4 * y + 6);
        y += 1;
    }

    target.draw_iter(points.into_iter().map(|p| Pixel(p, color)))
}
