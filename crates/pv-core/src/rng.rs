//! Deterministic per-channel RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each channel gets its own independent `SmallRng` seeded by:
//!
//!   seed = root_seed XOR (channel_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive channel IDs uniformly across the seed space.
//! This means:
//!
//! - Channels never share RNG state, so jitter draws on one channel do not
//!   perturb another channel's sequence.
//! - Registering a new channel at the end of the set does not disturb the
//!   streams of existing channels — runs stay reproducible as the channel
//!   table grows.
//!
//! Hosts that don't care about reproducibility seed each channel from
//! entropy via [`ChannelRng::from_entropy`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ChannelId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-channel deterministic RNG.
///
/// Create one per channel at registration time; store in a `Vec<ChannelRng>`
/// parallel to the other channel arrays.
pub struct ChannelRng(SmallRng);

impl ChannelRng {
    /// Seed deterministically from the set's root seed and a channel ID.
    pub fn new(root_seed: u64, channel: ChannelId) -> Self {
        let seed = root_seed ^ (channel.0 as u64).wrapping_mul(MIXING_CONSTANT);
        ChannelRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.  Not reproducible.
    pub fn from_entropy() -> Self {
        ChannelRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
