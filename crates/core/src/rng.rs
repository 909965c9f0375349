//! RNG module - reseedable pseudorandom source for map generation
//!
//! A small LCG is enough here: generation only needs uniform-ish draws in
//! short ranges, and a fixed seed must always rebuild the same map.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Restart the sequence from `seed`.
    pub fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Draws from the high 16 bits; the low bits of a power-of-two LCG have
    /// short periods (bit 0 simply alternates).
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }

    /// Fair coin.
    pub fn next_bool(&mut self) -> bool {
        self.next_range(2) == 1
    }

    /// Current state, usable as a seed to replay from this point.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Seed derived from wall-clock timing, for the regenerate trigger.
pub fn timing_seed() -> u32 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(0);
    nanos.rotate_left(13) ^ 0x9E37_79B9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut rng = SimpleRng::new(7);
        let first: Vec<u32> = (0..5).map(|_| rng.next_u32()).collect();
        rng.reseed(7);
        let again: Vec<u32> = (0..5).map(|_| rng.next_u32()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for max in 1..20 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_coin_does_not_strictly_alternate() {
        let mut rng = SimpleRng::new(3);
        let flips: Vec<bool> = (0..32).map(|_| rng.next_bool()).collect();
        let alternates = flips.windows(2).all(|w| w[0] != w[1]);
        assert!(!alternates);
        assert!(flips.iter().any(|&b| b));
        assert!(flips.iter().any(|&b| !b));
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
