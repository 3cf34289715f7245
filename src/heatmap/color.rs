//! ROI to colour mapping

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness on a 0-255 scale (ITU-R BT.601 weights)
    pub fn luma(&self) -> u8 {
        let weighted = 299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        (weighted / 1000) as u8
    }
}

/// ROI anchors in percent, ascending: deep red through amber to deep green
const ANCHORS: [(Decimal, Rgb); 7] = [
    (dec!(-100), Rgb::new(220, 50, 47)),
    (dec!(-20), Rgb::new(244, 67, 54)),
    (dec!(0), Rgb::new(255, 193, 7)),
    (dec!(10), Rgb::new(255, 235, 59)),
    (dec!(50), Rgb::new(139, 195, 74)),
    (dec!(100), Rgb::new(76, 175, 80)),
    (dec!(200), Rgb::new(0, 200, 83)),
];

fn lerp_channel(from: u8, to: u8, t: Decimal) -> u8 {
    let start = Decimal::from(from);
    let value = start + t * (Decimal::from(to) - start);
    value.trunc().to_u8().unwrap_or(from)
}

/// Colour for an ROI percentage, clamped to the outer anchors
pub fn roi_to_color(roi: Decimal) -> Rgb {
    let (first_roi, first_color) = ANCHORS[0];
    let (last_roi, last_color) = ANCHORS[ANCHORS.len() - 1];

    if roi <= first_roi {
        return first_color;
    }
    if roi >= last_roi {
        return last_color;
    }

    ANCHORS
        .windows(2)
        .find(|pair| roi >= pair[0].0 && roi <= pair[1].0)
        .map(|pair| {
            let (r1, c1) = pair[0];
            let (r2, c2) = pair[1];
            let t = (roi - r1) / (r2 - r1);
            Rgb::new(
                lerp_channel(c1.r, c2.r, t),
                lerp_channel(c1.g, c2.g, t),
                lerp_channel(c1.b, c2.b, t),
            )
        })
        .unwrap_or(first_color)
}
