//! Xorshift32 generator shared by every estimator.
//!
//! Fast and fully reproducible, but with short-range correlations and a
//! period below 2^32. Fine for the sample sizes used here, not for large
//! simulations and never for anything security related.

use rand::{Error, RngCore, SeedableRng};

/// Seed used when nothing else is given.
pub const DEFAULT_SEED: u32 = 123_456_789;

/// Replaces a zero seed; zero is a fixed point of the xorshift transform.
pub const FALLBACK_SEED: u32 = 2_463_534_242;

const DOUBLE_SCALE: f64 = (1u64 << 53) as f64;

/// Single-register xorshift generator (shifts 13, 17, 5).
///
/// The state is never zero: a zero seed is remapped to [`FALLBACK_SEED`] and
/// the transform is a bijection on non-zero words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        let mut rng = Self { state: FALLBACK_SEED };
        rng.seed(seed);
        rng
    }

    /// Re-initialises the register, applying the zero-seed remap.
    pub fn seed(&mut self, seed: u32) {
        self.state = if seed == 0 { FALLBACK_SEED } else { seed };
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform double in [0, 1) built from 53 random bits.
    ///
    /// Takes the top 26 bits of one draw and the top 27 bits of the next,
    /// so the largest value is `(2^53 - 1) / 2^53`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let hi = u64::from(self.next_u32() >> 6);
        let lo = u64::from(self.next_u32() >> 5);
        ((hi << 27) | lo) as f64 / DOUBLE_SCALE
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        XorShift32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(XorShift32::next_u32(self));
        let hi = u64::from(XorShift32::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = XorShift32::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
