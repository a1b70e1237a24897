//! Xorshift entropy shared by the hexagram shuffle and the noise bank.

use std::sync::Arc;

use parking_lot::Mutex;

/// Seed every generator starts from unless the caller supplies one.
pub const DEFAULT_SEED: u32 = 0x1234_5678;

/// Anything that can hand out raw 32-bit random words.
pub trait Entropy {
    fn next_u32(&mut self) -> u32;

    /// Bipolar white noise sample in `[-1.0, 1.0)`, built from bits 8..24 of
    /// the next word.
    #[inline]
    fn white(&mut self) -> f32 {
        ((self.next_u32() >> 8) & 0xFFFF) as f32 / 32768.0 - 1.0
    }

    /// Draw in `0..bound` by plain modulo reduction.
    ///
    /// Slightly biased towards small values when `bound` is not a power of
    /// two. Callers rely on this exact reduction for reproducible shuffles.
    #[inline]
    fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound.max(1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// A zero seed would lock the generator at zero forever, so it falls back
    /// to [`DEFAULT_SEED`].
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Entropy for Xorshift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

pub type SharedRng = Arc<Mutex<Xorshift32>>;

/// Where a generator instance draws its randomness from.
///
/// `Owned` keeps instances independent. `Shared` reproduces the single
/// process-wide generator of the hardware module: every instance holding a
/// clone of the same `Arc` advances the same state.
#[derive(Clone, Debug)]
pub enum EntropySource {
    Owned(Xorshift32),
    Shared(SharedRng),
}

impl EntropySource {
    pub fn seeded(seed: u32) -> Self {
        EntropySource::Owned(Xorshift32::new(seed))
    }

    pub fn shared(rng: &SharedRng) -> Self {
        EntropySource::Shared(Arc::clone(rng))
    }

    pub fn new_shared(seed: u32) -> SharedRng {
        Arc::new(Mutex::new(Xorshift32::new(seed)))
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        EntropySource::Owned(Xorshift32::default())
    }
}

impl Entropy for EntropySource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            EntropySource::Owned(rng) => rng.next_u32(),
            EntropySource::Shared(rng) => rng.lock().next_u32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_sequence() {
        let mut rng = Xorshift32::default();
        assert_eq!(rng.next_u32(), 0x8798_5aa5);
        assert_eq!(rng.next_u32(), 0x155b_24a3);
        assert_eq!(rng.next_u32(), 0x4820_f4c4);
    }

    #[test]
    fn zero_seed_does_not_stick() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn white_stays_in_bipolar_range() {
        let mut rng = Xorshift32::new(7);
        for _ in 0..10_000 {
            let w = rng.white();
            assert!((-1.0..1.0).contains(&w), "white sample {w} out of range");
        }
    }

    #[test]
    fn below_respects_bound() {
        let mut rng = Xorshift32::default();
        for bound in 1..=64 {
            for _ in 0..50 {
                assert!(rng.below(bound) < bound);
            }
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn shared_source_advances_one_state() {
        let shared = EntropySource::new_shared(DEFAULT_SEED);
        let mut a = EntropySource::shared(&shared);
        let mut b = EntropySource::shared(&shared);
        let first = a.next_u32();
        let second = b.next_u32();

        let mut reference = Xorshift32::default();
        assert_eq!(first, reference.next_u32());
        assert_eq!(second, reference.next_u32());
    }

    #[test]
    fn owned_sources_are_independent() {
        let mut a = EntropySource::default();
        let mut b = EntropySource::default();
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
