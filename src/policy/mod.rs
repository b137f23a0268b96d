//! Opponent move selection.
//!
//! Policies are trait-based so the board engine never depends on how the
//! machine picks its move: the game loop hands a policy the current
//! legal-move list and gets exactly one of its entries back. Swapping the
//! uniform-random opponent for a heuristic one is a policy substitution, not
//! an engine change.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::Coord;

/// Policy for choosing the machine's move.
pub trait MovePolicy {
    /// Pick one coordinate out of `legal`.
    ///
    /// Returns `None` only when `legal` is empty. Implementations must
    /// return an element of `legal`, never an invented coordinate.
    fn choose(&mut self, legal: &[Coord]) -> Option<Coord>;
}

/// Uniform-random move selection.
///
/// Uses a seeded ChaCha8 generator so a game is reproducible given its seed.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// Create a policy with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a policy seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, legal: &[Coord]) -> Option<Coord> {
        legal.choose(&mut self.rng).copied()
    }
}
