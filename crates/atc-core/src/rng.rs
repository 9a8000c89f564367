//! Deterministic per-agent RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every agent owns exactly one `AgentRng`, seeded from its own settings.
//! This means:
//!
//! - Agents never share RNG state (no contention, no ordering dependency).
//! - A fixed seed plus a fixed inbound message sequence reproduces an agent's
//!   state trace bit for bit, regardless of what its peers do.
//! - All RNG calls are local to the owning thread; no synchronisation needed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Per-agent deterministic RNG.
///
/// Created by the runtime from the agent's tick settings: a configured seed
/// gives a reproducible run, omitting it draws a fresh seed from OS entropy.
/// The type is `!Sync` to prevent accidental sharing across threads.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically.
    pub fn seeded(seed: u64) -> Self {
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy — non-reproducible runs.
    pub fn from_entropy() -> Self {
        AgentRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    ///
    /// For `f32` this is uniform over `[0, 1)`, so a draw compared against a
    /// probability of 0 can never succeed.
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
}
