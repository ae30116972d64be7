use std::f64::consts::FRAC_PI_2;

use crate::rng::XorShift32;

/// Needle length `l`.
pub const NEEDLE_LENGTH: f64 = 1.0;
/// Distance `t` between parallel lines. The crossing formula needs `l <= t`.
pub const LINE_SPACING: f64 = 1.0;

/// One dropped needle, folded by symmetry onto a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeedleDrop {
    /// Centre to nearest line, in [0, t/2).
    pub distance: f64,
    /// Angle to the lines, in [0, π/2).
    pub angle: f64,
}

impl NeedleDrop {
    /// Draws the distance first, then the angle.
    pub fn sample(rng: &mut XorShift32) -> Self {
        let distance = rng.next_f64() * (LINE_SPACING / 2.0);
        let angle = rng.next_f64() * FRAC_PI_2;
        Self { distance, angle }
    }

    pub fn half_projection(&self) -> f64 {
        (NEEDLE_LENGTH / 2.0) * self.angle.sin()
    }

    pub fn crosses(&self) -> bool {
        self.distance <= self.half_projection()
    }
}

pub fn estimate_buffon(trials: u32, rng: &mut XorShift32) -> u64 {
    let mut crosses = 0;
    for _ in 0..trials {
        if NeedleDrop::sample(rng).crosses() {
            crosses += 1;
        }
    }
    crosses
}

/// Inverts `P(cross) = 2l / (πt)`. Zero crossings give 0.0.
pub fn pi_from_ratio(p: f64) -> f64 {
    if p > 0.0 {
        2.0 * NEEDLE_LENGTH / (LINE_SPACING * p)
    } else {
        0.0
    }
}
