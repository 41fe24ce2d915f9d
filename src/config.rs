use crate::hashmap::TableError;

/// Number of buckets a fresh table starts with
pub const DEFAULT_CAPACITY: usize = 16;

/// Ratio of items to buckets at which the table doubles
pub const DEFAULT_LOAD_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub load_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn with_initial_capacity(mut self, cap: usize) -> Self {
        self.initial_capacity = cap;
        self
    }

    pub fn with_load_factor(mut self, lf: f64) -> Self {
        self.load_factor = lf;
        self
    }

    /// Checks that the table built from this config can
    /// keep its invariants: at least one bucket and a load factor
    /// that can actually be reached
    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0f64 {
            return Err(TableError::InvalidLoadFactor(self.load_factor));
        }
        Ok(())
    }
}
