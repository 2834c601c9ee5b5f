/*
 *  analyzer.rs
 *
 *  AirScope - the airwaves, at a glance
 *  (c) 2024-26 Stuart Hunter
 *
 *  Spectrum graph: baselines, channel legends and per-signal blips
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

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X12},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use log::debug;

use crate::channel::{BAND24_SLOTS, CHANNEL_LEGEND, Channel, RSSI_FLOOR, SLOT_COUNT};
use crate::color::{self, color_for};
use crate::ellipse::draw_half_ellipse;

/// Panel geometry the layout below is fixed to.
pub const DISPLAY_WIDTH: u32 = 480;
pub const DISPLAY_HEIGHT: u32 = 320;

// Layout. The 2.4 GHz band spreads 14 slots at 30 px; 5 GHz crams 57
// slots at 7 px. Both rows share the left margin.
const PLOT_TOP: i32 = 40;
const MARGIN_X: i32 = 40;
const SPACING_24: i32 = 30;
const SPACING_5: i32 = 7;
const BASELINE_24: i32 = 170;
const BASELINE_5: i32 = 290;
const AXIS_X0: i32 = 20;
const AXIS_X1: i32 = 460;
const LEGEND_DROP: i32 = 10;
const LABEL_RISE: i32 = 10;

/// One scan detection, consumed immediately by [`SpectrumGraph::draw_signal`].
#[derive(Debug, Clone, Copy)]
pub struct Signal<'a> {
    pub channel: Channel,
    /// dBm, anything at or below [`RSSI_FLOOR`] renders as nothing.
    pub rssi: i8,
    /// Identifier shown next to the strongest blip, typically a BSSID.
    pub label: &'a str,
}

/// Render context for one spectrum plot.
///
/// Owns the labeled-this-frame bookkeeping, so independent contexts
/// (second panel, tests) never interfere. `draw_graph` starts a frame,
/// then `draw_signal` is called once per detection.
#[derive(Debug, Clone)]
pub struct SpectrumGraph {
    labeled: [bool; SLOT_COUNT],
}

impl SpectrumGraph {
    pub fn new() -> Self {
        Self { labeled: [false; SLOT_COUNT] }
    }

    /// Start a frame: wipe the plot region, draw both baselines and the
    /// channel legends, and forget which slots were labeled.
    pub fn draw_graph<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.labeled = [false; SLOT_COUNT];

        Rectangle::new(
            Point::new(0, PLOT_TOP),
            Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT - PLOT_TOP as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(color::BACKGROUND))
        .draw(target)?;

        for y in [BASELINE_24, BASELINE_5] {
            Line::new(Point::new(AXIS_X0, y), Point::new(AXIS_X1, y))
                .into_styled(PrimitiveStyle::with_stroke(color::AXIS, 1))
                .draw(target)?;
        }

        for (slot, entry) in CHANNEL_LEGEND.iter().enumerate() {
            let Some(ch) = entry else { continue };
            let at = Point::new(slot_x(slot), baseline_y(slot) + LEGEND_DROP);
            draw_centered(target, &ch.to_string(), at, color_for(slot))?;
        }
        Ok(())
    }

    /// Plot one detection: a half-ellipse blip sized by signal strength,
    /// plus a text label for the first detection per slot per frame.
    pub fn draw_signal<D>(&mut self, target: &mut D, signal: &Signal<'_>) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let slot = signal.channel.display_index();
        let ry = signal.rssi as i32 - RSSI_FLOOR;
        let center = Point::new(slot_x(slot), baseline_y(slot));
        let color = color_for(slot);

        debug!(
            "ch {} rssi {} -> slot {} at {},{}",
            signal.channel, signal.rssi, slot, center.x, center.y
        );
        draw_half_ellipse(target, center, ry / 2, ry, color)?;

        if !self.labeled[slot] {
            let text = format!("{} ({})", signal.label, signal.rssi);
            let at = Point::new(center.x, center.y - LABEL_RISE - ry);
            draw_centered(target, &text, at, color)?;
            self.labeled[slot] = true;
        }
        Ok(())
    }
}

impl Default for SpectrumGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Horizontal anchor of a display slot.
fn slot_x(slot: usize) -> i32 {
    if slot < BAND24_SLOTS {
        MARGIN_X + slot as i32 * SPACING_24
    } else {
        MARGIN_X + (slot - BAND24_SLOTS) as i32 * SPACING_5
    }
}

/// Baseline the slot's blip grows up from.
fn baseline_y(slot: usize) -> i32 {
    if slot < BAND24_SLOTS { BASELINE_24 } else { BASELINE_5 }
}

/// Center-center text, the datum the whole layout is specified in.
fn draw_centered<D>(target: &mut D, text: &str, center: Point, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let character_style = MonoTextStyle::new(&FONT_6X12, color);
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style(text, center, character_style, text_style).draw(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FrameSurface;

    fn surface() -> FrameSurface<Rgb565> {
        FrameSurface::new(DISPLAY_WIDTH, DISPLAY_HEIGHT, Rgb565::new(0, 0, 0))
    }

    #[test]
    fn slot_anchors_match_band_spacing() {
        assert_eq!(slot_x(0), 40);
        assert_eq!(slot_x(5), 190);
        assert_eq!(slot_x(13), 430);
        assert_eq!(slot_x(14), 40);
        assert_eq!(slot_x(58), 348);
        assert_eq!(slot_x(70), 432);
        assert_eq!(baseline_y(13), 170);
        assert_eq!(baseline_y(14), 290);
    }

    #[test]
    fn graph_clears_plot_and_draws_baselines() {
        let mut fb = surface();
        let mut graph = SpectrumGraph::new();
        graph.draw_graph(&mut fb).unwrap();

        // banner strip above the plot untouched
        assert_eq!(fb.pixel(Point::new(240, 10)), Some(Rgb565::new(0, 0, 0)));
        assert_eq!(fb.pixel(Point::new(240, 60)), Some(color::BACKGROUND));
        for x in [20, 240, 460] {
            assert_eq!(fb.pixel(Point::new(x, 170)), Some(color::AXIS));
            assert_eq!(fb.pixel(Point::new(x, 290)), Some(color::AXIS));
        }
        assert_eq!(fb.pixel(Point::new(10, 170)), Some(color::BACKGROUND));
    }

    #[test]
    fn graph_resets_labeled_slots() {
        let mut fb = surface();
        let mut graph = SpectrumGraph::new();
        graph.draw_graph(&mut fb).unwrap();
        let sig = Signal { channel: Channel::new(36).unwrap(), rssi: -60, label: "ap" };
        graph.draw_signal(&mut fb, &sig).unwrap();
        assert!(graph.labeled[sig.channel.display_index()]);
        graph.draw_graph(&mut fb).unwrap();
        assert!(graph.labeled.iter().all(|l| !l));
    }

    #[test]
    fn one_label_per_slot_per_frame() {
        let mut fb = surface();
        let mut graph = SpectrumGraph::new();
        graph.draw_graph(&mut fb).unwrap();
        let ch = Channel::new(40).unwrap();
        for i in 0..5 {
            let sig = Signal { channel: ch, rssi: -70, label: "ap" };
            graph.draw_signal(&mut fb, &sig).unwrap();
            assert!(graph.labeled[ch.display_index()], "pass {i}");
        }
    }

    #[test]
    fn marker_lands_on_channel_6_fixture() {
        // ch 6, -50 dBm: slot 5, baseline 170, ry 50, apex at (190, 120)
        let mut fb = surface();
        let mut graph = SpectrumGraph::new();
        graph.draw_graph(&mut fb).unwrap();
        let sig = Signal { channel: Channel::new(6).unwrap(), rssi: -50, label: "ap" };
        graph.draw_signal(&mut fb, &sig).unwrap();
        assert_eq!(fb.pixel(Point::new(190, 120)), Some(color_for(5)));
        // flanks on the baseline at x0 +/- rx
        assert_eq!(fb.pixel(Point::new(190 - 25, 170)), Some(color_for(5)));
        assert_eq!(fb.pixel(Point::new(190 + 25, 170)), Some(color_for(5)));
    }

    #[test]
    fn marker_lands_on_channel_149_fixture() {
        // ch 149, -80 dBm: slot 58, baseline 290, ry 20, apex at (348, 270)
        let mut fb = surface();
        let mut graph = SpectrumGraph::new();
        graph.draw_graph(&mut fb).unwrap();
        let sig = Signal { channel: Channel::new(149).unwrap(), rssi: -80, label: "ap" };
        graph.draw_signal(&mut fb, &sig).unwrap();
        assert_eq!(fb.pixel(Point::new(348, 270)), Some(color_for(58)));
    }

    #[test]
    fn floor_rssi_draws_no_marker_but_still_labels() {
        let mut fb = surface();
        let mut graph = SpectrumGraph::new();
        graph.draw_graph(&mut fb).unwrap();
        let before = fb.clone();
        // ry = -5: below the floor, blip suppressed by the radius guard
        let sig = Signal { channel: Channel::new(1).unwrap(), rssi: -105, label: "x" };
        graph.draw_signal(&mut fb, &sig).unwrap();
        assert!(graph.labeled[0]);
        // no blip, and in particular nothing mirrored below the baseline;
        // rows under the label text box are untouched
        for y in 172..260 {
            for x in 0..120 {
                assert_eq!(fb.pixel(Point::new(x, y)), before.pixel(Point::new(x, y)));
            }
        }
    }
}
