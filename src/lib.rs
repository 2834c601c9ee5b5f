/*
 *  lib.rs
 *
 *  AirScope - the airwaves, at a glance
 *  (c) 2024-26 Stuart Hunter
 *
 *  Wi-Fi spectrum analyzer renderer for 480x320 RGB565 panels
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

//! Plots per-channel signal strength across the 2.4 GHz and 5 GHz bands
//! on any `embedded-graphics` `DrawTarget<Color = Rgb565>`. The scanner
//! feeding detections and the panel driver underneath the draw target
//! are both external; this crate owns the channel-to-geometry mapping
//! and the incremental drawing protocol.

pub mod analyzer;
pub mod channel;
pub mod color;
pub mod config;
pub mod ellipse;
pub mod surface;

pub use analyzer::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Signal, SpectrumGraph};
pub use channel::{Band, Channel, ChannelError, RSSI_FLOOR};
pub use color::convert_rgb;
pub use surface::FrameSurface;
