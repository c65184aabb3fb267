//! RNG oracle for deterministic random number generation.
//!
//! Chamber loads and item grants draw from a trait-based RNG so a session can
//! be replayed from its seed. Every draw is keyed by a seed derived from the
//! game seed, the action nonce, and a [`SeedContext`] naming the roll.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Fair coin flip.
    fn coin(&self, seed: u64) -> bool {
        self.next_u32(seed) & 1 == 1
    }

    /// Generate a random index in `0..len`.
    fn index(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Names the roll a seed is derived for, so draws within one action never
/// share a seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedContext {
    /// One shot of a chamber load. `attempt` counts rejected draws.
    ChamberShot { attempt: u32, index: u32 },
    /// One item grant. `grant` counts grants for that side this round.
    ItemGrant { grant: u32 },
}

impl SeedContext {
    fn mix(self) -> u64 {
        match self {
            SeedContext::ChamberShot { attempt, index } => {
                ((attempt as u64) << 8) | (index as u64)
            }
            SeedContext::ItemGrant { grant } => (1 << 40) | grant as u64,
        }
    }
}

/// Compute deterministic seed from session state components.
///
/// * `game_seed` - Base seed set at session start (for replay/determinism)
/// * `nonce` - Round-start/action sequence number
/// * `side` - Index of the side the roll is for (0 = player, 1 = opponent)
/// * `context` - Which roll within the operation
pub fn compute_seed(game_seed: u64, nonce: u64, side: u32, context: SeedContext) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (side as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= context.mix().wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
