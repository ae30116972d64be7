use crate::rng::XorShift32;

// The unit square is [0, MAX] x [0, MAX] and the circle has radius MAX.
const RADIUS: u64 = u32::MAX as u64;
const RADIUS_SQUARED: u64 = RADIUS * RADIUS;

/// Exact integer test for `x² + y² <= MAX²`.
///
/// A sum of squares that does not fit in 64 bits is larger than `MAX²`,
/// so an overflowing addition counts as outside.
#[inline]
pub fn in_quarter_circle(x: u32, y: u32) -> bool {
    let xx = u64::from(x) * u64::from(x);
    let yy = u64::from(y) * u64::from(y);
    match xx.checked_add(yy) {
        Some(sum) => sum <= RADIUS_SQUARED,
        None => false,
    }
}

/// Throws `trials` random points into the square and counts those that land
/// inside the quarter circle.
pub fn estimate_circle(trials: u32, rng: &mut XorShift32) -> u64 {
    let mut hits = 0;
    for _ in 0..trials {
        let x = rng.next_u32();
        let y = rng.next_u32();
        if in_quarter_circle(x, y) {
            hits += 1;
        }
    }
    hits
}

// quarter disk / square = pi/4
pub fn pi_from_ratio(p: f64) -> f64 {
    4.0 * p
}
