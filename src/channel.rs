/*
 *  channel.rs
 *
 *  AirScope - the airwaves, at a glance
 *  (c) 2024-26 Stuart Hunter
 *
 *  Wi-Fi channel numbering and the dense display-index mapping
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

use thiserror::Error;

/// Weakest signal we plot, in dBm. Bar heights are measured up from here.
pub const RSSI_FLOOR: i32 = -100;

/// Display slots across both bands: 14 for 2.4 GHz plus 57 for 5 GHz.
pub const SLOT_COUNT: usize = 71;

/// Slots occupied by the 2.4 GHz band (display indices 0..14).
pub const BAND24_SLOTS: usize = 14;

/// Error type for channel validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("unsupported Wi-Fi channel {0}")]
    Unsupported(u16),
}

/// Frequency band a channel belongs to. The two bands use different
/// horizontal packing and sit on different baselines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Ghz24,
    Ghz5,
}

/// A validated Wi-Fi channel number.
///
/// The supported domain is 1-14 (2.4 GHz), the even channels 32-64,
/// 68, 96, the even channels 100-144 and the odd channels 149-173
/// (5 GHz). Anything else is rejected at construction, so a `Channel`
/// can never alias onto a neighboring display slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Channel(u16);

impl Channel {
    pub fn new(number: u16) -> Result<Self, ChannelError> {
        let supported = match number {
            1..=14 => true,
            32..=64 => number % 2 == 0,
            68 | 96 => true,
            100..=144 => number % 2 == 0,
            149..=173 => number % 2 == 1,
            _ => false,
        };
        if supported {
            Ok(Self(number))
        } else {
            Err(ChannelError::Unsupported(number))
        }
    }

    pub fn number(self) -> u16 {
        self.0
    }

    pub fn band(self) -> Band {
        if self.0 <= 14 { Band::Ghz24 } else { Band::Ghz5 }
    }

    /// Dense display index in `0..SLOT_COUNT`, banded arithmetic.
    ///
    /// 2.4 GHz packs one slot per channel; the 5 GHz sub-bands pack one
    /// slot per two channel numbers, with 68 and 96 as fixed points
    /// bridging the regulatory gaps around them.
    pub fn display_index(self) -> usize {
        let ch = self.0 as usize;
        if ch <= 14 {
            ch - 1 /* 2.4 GHz, channel 1-14 */
        } else if ch <= 64 {
            14 + (ch - 32) / 2 /* 5 GHz, channel 32-64 */
        } else if ch == 68 {
            31
        } else if ch == 96 {
            33
        } else if ch <= 144 {
            34 + (ch - 100) / 2 /* channel 100-144 */
        } else {
            58 + (ch - 149) / 2 /* channel 149-173 */
        }
    }

    /// Every supported channel, ascending.
    pub fn all() -> impl Iterator<Item = Channel> {
        (1..=14u16)
            .chain((32..=64).step_by(2))
            .chain([68, 96])
            .chain((100..=144).step_by(2))
            .chain((149..=173).step_by(2))
            .map(Channel)
    }
}

impl TryFrom<u16> for Channel {
    type Error = ChannelError;

    fn try_from(number: u16) -> Result<Self, Self::Error> {
        Channel::new(number)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Channel numbers printed under each display slot.
///
/// Every 2.4 GHz slot gets a legend; in the 5 GHz run only every fourth
/// slot is labeled to keep the 7 px packing readable. `None` marks both
/// the unlabeled slots and the two reserved gaps (after 64 and after
/// 144) that no channel maps onto.
pub const CHANNEL_LEGEND: [Option<u16>; SLOT_COUNT] = [
    Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7),
    Some(8), Some(9), Some(10), Some(11), Some(12), Some(13), Some(14),
    Some(32), None, None, None, Some(40), None, None,       /*  32 - 44 */
    None, Some(48), None, None, None, Some(56), None,       /*  46 - 58 */
    None, None, Some(64), None, None, None,                 /*  60, 62, 64, 68, gap, 96 */
    Some(100), None, None, None, Some(108), None, None,     /* 100 - 112 */
    None, Some(116), None, None, None, Some(124), None,     /* 114 - 126 */
    None, None, Some(132), None, None, None, Some(140),     /* 128 - 140 */
    None, None, None, Some(149), None, None, None,          /* 142, 144, gap, 149 - 155 */
    Some(157), None, None, None, Some(165), None, None,     /* 157 - 169 */
    None, Some(173),
];
