/*
 *  color.rs
 *
 *  AirScope - the airwaves, at a glance
 *  (c) 2024-26 Stuart Hunter
 *
 *  Channel-identity palette and RGB565 packing
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

use embedded_graphics::pixelcolor::Rgb565;

/// Pack 8-bit RGB into an RGB565 word.
///
/// Exposed for callers that talk to the panel in raw 16-bit colors.
pub fn convert_rgb(red: u8, green: u8, blue: u8) -> u16 {
    (((red & 0xF8) as u16) << 8) | (((green & 0xFC) as u16) << 3) | ((blue >> 3) as u16)
}

// Palette in Rgb565 component form (5/6/5). Raw words in the comments.
pub const RED: Rgb565 = Rgb565::new(31, 0, 0); //        0xF800
pub const ORANGE: Rgb565 = Rgb565::new(31, 45, 0); //    0xFDA0
pub const BROWN: Rgb565 = Rgb565::new(19, 19, 0); //     0x9A60
pub const GREEN: Rgb565 = Rgb565::new(0, 63, 0); //      0x07E0
pub const DARK_CYAN: Rgb565 = Rgb565::new(0, 31, 15); // 0x03EF
pub const BLUE: Rgb565 = Rgb565::new(0, 0, 31); //       0x001F
pub const MAGENTA: Rgb565 = Rgb565::new(31, 0, 31); //   0xF81F

/// Plot background.
pub const BACKGROUND: Rgb565 = Rgb565::new(31, 63, 31);

/// Baseline axes, 0x4A6378 in RGB888.
pub const AXIS: Rgb565 = Rgb565::new(9, 24, 15);

const PALETTE: [Rgb565; 7] = [RED, ORANGE, BROWN, GREEN, DARK_CYAN, BLUE, MAGENTA];

/// Color identity for a display slot, shared by legend text and markers.
///
/// The seven-color cycle restarts at slot 34 (channel 100); blue is
/// skipped once in the short 60..96 row so the reserved gap slot after
/// channel 68 does not burn a palette entry.
pub fn color_for(slot: usize) -> Rgb565 {
    match slot {
        0..=32 => PALETTE[slot % 7],
        33 => MAGENTA,
        _ => PALETTE[(slot - 34) % 7],
    }
}
