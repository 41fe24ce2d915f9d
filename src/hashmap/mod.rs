use thiserror::Error;

mod hash_table;
mod hasher;

#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    /// A computed bucket index fell outside `0..capacity`.
    /// Unreachable while the index is reduced modulo the capacity,
    /// so seeing this means the table itself is broken
    #[error("Trying to access index out of bounds, got: {index}, valid range: 0..{capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },

    #[error("Table capacity must be greater than zero")]
    ZeroCapacity,

    #[error("Load factor must be a finite number greater than zero, got: {0}")]
    InvalidLoadFactor(f64),
}

pub use hash_table::{HashTable, Iter};
pub use hasher::{CharCodeSum, Fnv1a, KeyHasher};
