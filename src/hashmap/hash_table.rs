use std::slice;

use log::{debug, trace};

use super::TableError;
use super::hasher::{CharCodeSum, KeyHasher};
use crate::config::TableConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

/// A string keyed hash table resolving collisions by chaining.
///
/// Every bucket keeps its entries in insertion order. The table doubles
/// its bucket count as soon as `len / capacity` reaches the configured
/// load factor, and never shrinks.
#[derive(Debug, Clone)]
pub struct HashTable<V, H = CharCodeSum> {
    buckets: Vec<Vec<Entry<V>>>,
    items: usize,
    max_load_factor: f64,
    hasher: H,
}

#[derive(Debug)]
pub struct Iter<'a, V> {
    buckets: &'a [Vec<Entry<V>>],
    cursor: slice::Iter<'a, Entry<V>>,
    bucket_idx: usize,
    remaining: usize,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with 16 buckets and a load factor of 0.8
    pub fn new() -> Self {
        Self::from_parts(TableConfig::default(), CharCodeSum)
    }

    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        Self::with_config_and_hasher(config, CharCodeSum)
    }
}

impl<V, H: KeyHasher> HashTable<V, H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self::from_parts(TableConfig::default(), hasher)
    }

    pub fn with_config_and_hasher(config: TableConfig, hasher: H) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self::from_parts(config, hasher))
    }

    fn from_parts(config: TableConfig, hasher: H) -> Self {
        Self {
            buckets: Self::empty_buckets(config.initial_capacity),
            items: 0,
            max_load_factor: config.load_factor,
            hasher,
        }
    }

    /// Returns the number of keys stored in the table
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Returns the number of buckets, or "slots" of the table
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Current ratio of stored keys to buckets
    pub fn load_factor(&self) -> f64 {
        self.items as f64 / self.capacity() as f64
    }

    /// The ratio at which an insert grows the table
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Inserts `value` under `key`, returning the previous value (if there was any).
    ///
    /// Overwriting keeps the entry at its position within the bucket.
    /// A new key is appended to its bucket, and the table doubles
    /// right away if that pushes it to the load factor.
    pub fn set(&mut self, key: &str, value: V) -> Result<Option<V>, TableError> {
        let i = self.bucket_for(key)?;
        let bucket = &mut self.buckets[i];

        if let Some(entry) = bucket.iter_mut().find(|e| e.key == key) {
            return Ok(Some(std::mem::replace(&mut entry.value, value)));
        }

        bucket.push(Entry {
            key: key.into(),
            value,
        });
        self.items += 1;

        if self.load_factor() >= self.max_load_factor {
            self.resize()?;
        }
        Ok(None)
    }

    pub fn get(&self, key: &str) -> Result<Option<&V>, TableError> {
        let i = self.bucket_for(key)?;
        Ok(self.buckets[i]
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut V>, TableError> {
        let i = self.bucket_for(key)?;
        Ok(self.buckets[i]
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value))
    }

    pub fn has(&self, key: &str) -> Result<bool, TableError> {
        Ok(self.get(key)?.is_some())
    }

    /// Removes `key`, returning its value. The remaining entries
    /// of the bucket keep their order
    pub fn remove(&mut self, key: &str) -> Result<Option<V>, TableError> {
        let i = self.bucket_for(key)?;
        let bucket = &mut self.buckets[i];

        match bucket.iter().position(|e| e.key == key) {
            Some(pos) => {
                self.items -= 1;
                Ok(Some(bucket.remove(pos).value))
            }
            None => Ok(None),
        }
    }

    /// Drops every entry but keeps the current capacity
    pub fn clear(&mut self) {
        trace!(
            target: "clear",
            "dropping {} items, keeping {} buckets",
            self.items,
            self.capacity()
        );
        self.buckets = Self::empty_buckets(self.capacity());
        self.items = 0;
    }

    // [adapters]

    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn entries(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.to_owned(), v.clone())).collect()
    }

    /// Walks the buckets in index order, and each bucket in insertion order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: &self.buckets,
            cursor: self.buckets.first().map(|b| b.iter()).unwrap_or_default(),
            bucket_idx: 0,
            remaining: self.items,
        }
    }

    // [private]

    fn empty_buckets(cap: usize) -> Vec<Vec<Entry<V>>> {
        (0..cap).map(|_| Vec::new()).collect()
    }

    fn index_for(&self, key: &str, cap: usize) -> usize {
        (self.hasher.hash_key(key) % cap as u64) as usize
    }

    fn check_index(index: usize, cap: usize) -> Result<usize, TableError> {
        if index >= cap {
            trace!(target: "bucket_for", "index {} outside of 0..{}", index, cap);
            return Err(TableError::IndexOutOfBounds {
                index,
                capacity: cap,
            });
        }
        Ok(index)
    }

    fn bucket_for(&self, key: &str) -> Result<usize, TableError> {
        let cap = self.capacity();
        Self::check_index(self.index_for(key, cap), cap)
    }

    /// Doubles the bucket count and rehashes every entry
    /// against the new capacity.
    ///
    /// # Errors
    ///
    /// Fails with `IndexOutOfBounds` if a rehashed index does not fit
    /// the new bucket array. Entries moved before the failure are lost,
    /// so the table must not be used afterwards
    fn resize(&mut self) -> Result<(), TableError> {
        let new_cap = self.capacity() * 2;
        debug!(
            target: "resize",
            "growing {} -> {} buckets ({} items)",
            self.capacity(),
            new_cap,
            self.items
        );

        let mut new_buckets = Self::empty_buckets(new_cap);
        let old_buckets = std::mem::take(&mut self.buckets);

        for elem in old_buckets.into_iter().flatten() {
            let i = Self::check_index(self.index_for(&elem.key, new_cap), new_buckets.len())?;
            new_buckets[i].push(elem);
        }

        self.buckets = new_buckets;
        trace!(target: "resize", "load factor now {:.3}", self.load_factor());
        Ok(())
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.cursor.next() {
                Some(entry) => {
                    self.remaining -= 1;
                    return Some((entry.key.as_str(), &entry.value));
                }
                None => {
                    if self.bucket_idx + 1 >= self.buckets.len() {
                        return None;
                    }
                    self.bucket_idx += 1;
                    self.cursor = self.buckets[self.bucket_idx].iter();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V, H: KeyHasher> IntoIterator for &'a HashTable<V, H> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
