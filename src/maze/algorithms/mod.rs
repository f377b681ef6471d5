mod rnd_prims;

pub use rnd_prims::RndPrims;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::{dims::Dims, maze::Maze};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid maze size: {0:?}")]
    InvalidSize(Dims),
}

pub trait MazeAlgorithm {
    /// Validates the requested size, seeds the generator and hands off to the
    /// algorithm. A `None` seed draws one from thread entropy, so generation
    /// is reproducible exactly when the caller pins the seed.
    fn generate(size: Dims, seed: Option<u64>) -> Result<Maze, GenerationError> {
        if !size.all_positive() {
            return Err(GenerationError::InvalidSize(size));
        }

        let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));
        Ok(Self::generate_individual(size, &mut rng))
    }

    /// Runs the algorithm itself. `size` has already been checked to be
    /// positive in both dimensions.
    fn generate_individual(size: Dims, rng: &mut Random) -> Maze;
}
