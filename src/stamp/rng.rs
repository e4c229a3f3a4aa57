use crate::util::time;

/// Small seeded random number generator (xorshift32) for spray patterns.
///
/// Not suitable for anything but visual noise.
#[derive(Debug, Clone)]
pub struct StampRng {
    state: u32,
}

impl StampRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Seed from the wall clock.
    pub fn from_clock() -> Self {
        Self::new(time::clock_seed())
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_unit(&mut self) -> f32 {
        // 24 bits fit exactly in an f32 mantissa
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `[low, high)`.
    pub fn range(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.next_unit()
    }
}

impl Default for StampRng {
    fn default() -> Self {
        Self::from_clock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = StampRng::new(7);
        let mut b = StampRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_still_produces_values() {
        let mut rng = StampRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = StampRng::new(12345);
        for _ in 0..10_000 {
            let v = rng.range(-3.0, 5.0);
            assert!((-3.0..5.0).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn test_unit_values_spread_out() {
        let mut rng = StampRng::new(99);
        let samples: Vec<f32> = (0..1000).map(|_| rng.next_unit()).collect();
        let low = samples.iter().filter(|v| **v < 0.5).count();
        assert!((350..650).contains(&low), "skewed split: {low}");
    }
}
