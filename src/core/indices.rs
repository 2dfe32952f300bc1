use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::core::error::{BenchError, Result};

/// A source of positions for the index buffer.
pub trait IndexSource {
    /// Overwrite every entry of `indices` with a position in `[0, vector_size)`.
    fn fill(&mut self, indices: &mut [usize], vector_size: usize) -> Result<()>;
}

fn check_vector_size(vector_size: usize) -> Result<()> {
    if vector_size == 0 {
        return Err(BenchError::InvalidParameter("cannot draw indices into an empty vector".to_string()));
    }
    Ok(())
}

/// Uniformly distributed indices from a pseudo-random generator.
pub struct RandomIndices<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomIndices<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomIndices<StdRng> {
    /// Reproducible sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> IndexSource for RandomIndices<R> {
    fn fill(&mut self, indices: &mut [usize], vector_size: usize) -> Result<()> {
        check_vector_size(vector_size)?;
        for index in indices.iter_mut() {
            *index = self.rng.gen_range(0..vector_size);
        }
        Ok(())
    }
}

/// Replays a fixed sequence of indices, cycling when the buffer is longer.
#[derive(Debug, Clone)]
pub struct FixedIndices {
    sequence: Vec<usize>,
}

impl FixedIndices {
    pub fn new(sequence: Vec<usize>) -> Self {
        Self { sequence }
    }
}

impl IndexSource for FixedIndices {
    fn fill(&mut self, indices: &mut [usize], vector_size: usize) -> Result<()> {
        check_vector_size(vector_size)?;
        if self.sequence.is_empty() && !indices.is_empty() {
            return Err(BenchError::InvalidParameter("fixed index sequence is empty".to_string()));
        }

        for (slot, &index) in indices.iter_mut().zip(self.sequence.iter().cycle()) {
            if index >= vector_size {
                return Err(BenchError::IndexOutOfRange { index, vector_size });
            }
            *slot = index;
        }
        Ok(())
    }
}
