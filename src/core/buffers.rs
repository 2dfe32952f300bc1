use std::mem;

use crate::core::error::{BenchError, Result};
use crate::core::indices::IndexSource;

/// The three buffers a benchmark run reads from.
///
/// `narrow` and `wide` hold the same identity sequence at different element
/// widths. Position `i` of `narrow` holds `i mod 256`: the truncation is what
/// makes the vector one byte per element and must not be widened.
#[derive(Debug)]
pub struct BenchBuffers {
    narrow: Vec<u8>,
    wide: Vec<u32>,
    indices: Vec<usize>,
}

impl BenchBuffers {
    /// Allocate and initialize the vectors. The index buffer is zero-filled
    /// and carries no meaning until the first [`shuffle`](Self::shuffle).
    pub fn new(vector_size: usize, index_size: usize) -> Result<Self> {
        if vector_size == 0 {
            return Err(BenchError::InvalidParameter("vector_size must be greater than 0".to_string()));
        }

        let mut narrow = allocate::<u8>("narrow vector", vector_size)?;
        let mut wide = allocate::<u32>("wide vector", vector_size)?;
        let mut indices = allocate::<usize>("index buffer", index_size)?;

        narrow.extend((0..vector_size).map(|i| i as u8));
        wide.extend((0..vector_size).map(|i| i as u32));
        indices.resize(index_size, 0);

        Ok(Self { narrow, wide, indices })
    }

    /// Overwrite every index with a fresh position drawn from `source`.
    pub fn shuffle<S: IndexSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        source.fill(&mut self.indices, self.narrow.len())
    }

    pub fn narrow(&self) -> &[u8] {
        &self.narrow
    }

    pub fn wide(&self) -> &[u32] {
        &self.wide
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn vector_size(&self) -> usize {
        self.narrow.len()
    }

    /// Bytes [`new`](Self::new) will request for the given sizes.
    pub fn required_bytes(vector_size: usize, index_size: usize) -> u64 {
        let per_position = (mem::size_of::<u8>() + mem::size_of::<u32>()) as u64;
        (vector_size as u64)
            .saturating_mul(per_position)
            .saturating_add((index_size as u64).saturating_mul(mem::size_of::<usize>() as u64))
    }

    /// Total bytes held by the three buffers.
    pub fn footprint(&self) -> u64 {
        let bytes = self.narrow.capacity() * mem::size_of::<u8>()
            + self.wide.capacity() * mem::size_of::<u32>()
            + self.indices.capacity() * mem::size_of::<usize>();
        bytes as u64
    }
}

fn allocate<T>(what: &str, len: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|e| BenchError::Allocation(format!("{} of {} elements: {}", what, len, e)))?;
    Ok(buffer)
}
