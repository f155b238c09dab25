//! Xorshift32 pseudo-random source for obstacle offsets.

/// Fallback used when a zero seed is supplied (xorshift is stuck at zero).
const ZERO_SEED_FALLBACK: u32 = 0x9E37_79B9;

#[derive(Debug, Clone, Copy)]
pub struct Rng(u32);

impl Rng {
    pub const fn new(seed: u32) -> Self {
        if seed == 0 {
            Self(ZERO_SEED_FALLBACK)
        } else {
            Self(seed)
        }
    }

    pub fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    /// Uniform-ish value in `[min, max]`.
    pub fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        let span = (max - min + 1) as u32;
        min + (self.next() % span) as i32
    }
}
