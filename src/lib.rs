pub mod config;
pub mod hashmap;

pub use config::TableConfig;
pub use hashmap::{CharCodeSum, Fnv1a, HashTable, Iter, KeyHasher, TableError};
