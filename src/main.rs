/*
 *  main.rs
 *
 *  AirScope - the airwaves, at a glance
 *  (c) 2024-26 Stuart Hunter
 *
 *  Demo driver: renders synthetic scan results into a RAM surface
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

use std::time::Duration;

use anyhow::Result;
use embedded_graphics::pixelcolor::Rgb565;
use env_logger::Env;
use log::{debug, info};
use rand::Rng;

use airscope::channel::Channel;
use airscope::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FrameSurface, Signal, SpectrumGraph, config};

fn main() -> Result<()> {
    let cfg = config::load()?;

    env_logger::Builder::from_env(
        Env::default().default_filter_or(cfg.log_level.as_deref().unwrap_or("info")),
    )
    .format_timestamp_secs()
    .init();

    info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let frames = cfg.frames.unwrap_or(1);
    let signals_per_frame = cfg.signals_per_frame.unwrap_or(12);
    let interval = Duration::from_millis(cfg.frame_interval_ms.unwrap_or(250));

    let mut surface = FrameSurface::new(DISPLAY_WIDTH, DISPLAY_HEIGHT, Rgb565::new(0, 0, 0));
    let mut graph = SpectrumGraph::new();
    let channels: Vec<Channel> = Channel::all().collect();
    let mut rng = rand::rng();

    // stand-in for the wireless scanner: one refresh per frame, then a
    // burst of detections against the shared surface
    for frame in 0..frames {
        graph.draw_graph(&mut surface)?;
        for _ in 0..signals_per_frame {
            let channel = channels[rng.random_range(0..channels.len())];
            let rssi = rng.random_range(-95..=-35i32) as i8;
            let label = format!(
                "{:02X}:{:02X}:{:02X}",
                rng.random::<u8>(),
                rng.random::<u8>(),
                rng.random::<u8>()
            );
            graph.draw_signal(&mut surface, &Signal { channel, rssi, label: &label })?;
        }
        debug!("frame {} of {} rendered", frame + 1, frames);
        if frame + 1 < frames {
            std::thread::sleep(interval);
        }
    }

    if let Some(path) = cfg.snapshot.as_deref() {
        surface.write_ppm(path)?;
        info!("snapshot written to {}", path.display());
    }
    Ok(())
}
