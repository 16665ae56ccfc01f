use std::{
    fmt,
    iter::{Flatten, FusedIterator},
    mem, slice, vec,
};

use tracing::debug;

use crate::{
    config::{ConfigError, MapConfig},
    key::IntegerKey,
    resize::{ResizeEvent, ResizeHook},
};

/// A key-value pair stored in a bucket
#[derive(Debug, Clone)]
struct Entry<K, V> {
    /// The key, placed by [`IntegerKey::bucket_index`]
    key: K,
    /// The value associated with the key
    value: V,
}

/// Entries whose keys share a bucket index, in insertion order
type Bucket<K, V> = Vec<Entry<K, V>>;

/// Allocates `capacity` empty buckets
fn empty_buckets<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

/// A hash map resolving collisions by separate chaining.
///
/// Keys are integers placed at `key mod capacity`. Every bucket is a chain scanned linearly on
/// lookup. Before each [`set`](Self::set) the load factor is compared against the load
/// threshold, and when it is reached the bucket array is rebuilt `extend_ratio` times larger
/// with every entry re-inserted.
///
/// Note: This implementation is single-threaded. Mutation requires `&mut self` and no locking is
/// performed.
pub struct ChainedHashMap<K, V> {
    /// The chains; its length is the capacity and is never zero
    buckets: Vec<Bucket<K, V>>,
    /// Number of entries across all buckets
    size: usize,
    /// Load factor at which the next `set` grows the table first
    load_threshold: f64,
    /// Multiplier applied to the capacity on resize
    extend_ratio: usize,
    /// Optional callback notified after each resize
    on_resize: Option<ResizeHook>,
}

impl<K, V> fmt::Debug for ChainedHashMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashMap")
            .field("size", &self.size)
            .field("capacity", &self.buckets.len())
            .field("load_threshold", &self.load_threshold)
            .field("extend_ratio", &self.extend_ratio)
            .field("on_resize", &self.on_resize.is_some())
            .field("buckets", &self.buckets)
            .finish()
    }
}

impl<K, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: IntegerKey, V> Extend<(K, V)> for ChainedHashMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: IntegerKey, V> FromIterator<(K, V)> for ChainedHashMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> ChainedHashMap<K, V> {
    /// Creates an empty map with 4 buckets, a load threshold of 2/3 and an extend ratio of 2
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(MapConfig::new())
    }

    /// Creates an empty map with `capacity` buckets (at least one) and default growth parameters
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_valid_config(MapConfig::new().capacity(capacity.max(1)))
    }

    /// Creates an empty map from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the capacity is zero, the load threshold is not a positive
    /// finite number, or the extend ratio is below 2.
    pub fn with_config(config: MapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Builds the map from parameters that already passed validation
    fn from_valid_config(config: MapConfig) -> Self {
        Self {
            buckets: empty_buckets(config.capacity),
            size: 0,
            load_threshold: config.load_threshold,
            extend_ratio: config.extend_ratio,
            on_resize: None,
        }
    }

    /// Installs a callback run after every resize, replacing any previous one
    pub fn on_resize<F>(&mut self, hook: F)
    where
        F: FnMut(ResizeEvent) + 'static,
    {
        self.on_resize = Some(Box::new(hook));
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor that triggers growth
    #[must_use]
    pub fn load_threshold(&self) -> f64 {
        self.load_threshold
    }

    /// Returns the multiplier applied to the capacity on resize
    #[must_use]
    pub fn extend_ratio(&self) -> usize {
        self.extend_ratio
    }

    /// Returns the ratio of entries to buckets
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the chain length of every bucket, in bucket order
    pub fn bucket_lens(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.buckets.iter().map(Vec::len)
    }

    /// Returns an iterator over all entries, in bucket order and then chain order.
    ///
    /// Each call starts a fresh traversal of the current contents.
    #[must_use]
    pub fn items(&self) -> Items<'_, K, V> {
        Items { buckets: self.buckets.iter(), chain: slice::Iter::default(), remaining: self.size }
    }

    /// Same as [`items`](Self::items)
    #[must_use]
    pub fn iter(&self) -> Items<'_, K, V> {
        self.items()
    }

    /// Removes every entry while keeping the current capacity
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }
}

impl<K: IntegerKey, V> ChainedHashMap<K, V> {
    /// Returns the chain holding `key` under the current capacity
    fn bucket(&self, key: K) -> Option<&Bucket<K, V>> {
        self.buckets.get(key.bucket_index(self.buckets.len()))
    }

    /// Returns the mutable chain holding `key` under the current capacity
    fn bucket_mut(&mut self, key: K) -> Option<&mut Bucket<K, V>> {
        let index = key.bucket_index(self.buckets.len());
        self.buckets.get_mut(index)
    }


    /// Inserts `value` under `key`, or overwrites the value already stored there.
    ///
    /// The load factor is checked before anything else, so a call that only updates an existing
    /// key can still grow the table. Returns the previous value when the key was present.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.maybe_resize();

        // `bucket_index` is always below the capacity, which is never zero, so the chain exists
        // and this never returns early
        debug_assert!(key.bucket_index(self.buckets.len()) < self.buckets.len());
        let bucket = self.bucket_mut(key)?;
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry { key, value });
        self.size = self.size.saturating_add(1);
        None
    }

    /// Returns the value stored under `key`, or `None` when it is absent
    #[must_use]
    pub fn get(&self, key: K) -> Option<&V> {
        self.bucket(key)?.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.bucket_mut(key)?
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Removes `key` and returns its value.
    ///
    /// The remaining entries of the chain keep their relative order. Absent keys leave the map
    /// untouched.
    pub fn delete(&mut self, key: K) -> Option<V> {
        let bucket = self.bucket_mut(key)?;
        let position = bucket.iter().position(|entry| entry.key == key)?;
        let entry = bucket.remove(position);
        self.size = self.size.saturating_sub(1);
        Some(entry.value)
    }

    /// Grows the table once when the load factor has reached the threshold.
    ///
    /// A single growth may leave the load factor at or over a very low threshold; the next `set`
    /// grows again.
    fn maybe_resize(&mut self) {
        if self.load_factor() >= self.load_threshold {
            self.extend_buckets();
        }
    }

    /// Rebuilds the buckets `extend_ratio` times larger and re-inserts every entry
    fn extend_buckets(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity.saturating_mul(self.extend_ratio);
        if new_capacity == old_capacity {
            return;
        }
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.size = 0;

        // Keys are already unique, so entries go straight to the end of their new chain
        for entry in old_buckets.into_iter().flatten() {
            let index = entry.key.bucket_index(new_capacity);
            if let Some(bucket) = self.buckets.get_mut(index) {
                bucket.push(entry);
                self.size = self.size.saturating_add(1);
            }
        }

        debug!(
            old_capacity,
            new_capacity,
            size = self.size,
            load_threshold = self.load_threshold,
            "chained hash map resized"
        );

        if let Some(hook) = self.on_resize.as_mut() {
            hook(ResizeEvent { old_capacity, new_capacity, size: self.size });
        }
    }
}

/// Iterator over the entries of a [`ChainedHashMap`]
#[derive(Debug, Clone)]
pub struct Items<'a, K, V> {
    /// Buckets not visited yet
    buckets: slice::Iter<'a, Bucket<K, V>>,
    /// Rest of the chain currently being walked
    chain: slice::Iter<'a, Entry<K, V>>,
    /// Entries still to be yielded
    remaining: usize,
}

impl<'a, K, V> Iterator for Items<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some((&entry.key, &entry.value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Items<'_, K, V> {}

impl<K, V> FusedIterator for Items<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Items<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

/// Owning iterator over the entries of a [`ChainedHashMap`], in bucket order
#[derive(Debug)]
pub struct IntoIter<K, V> {
    /// The chains, flattened in bucket order
    entries: Flatten<vec::IntoIter<Bucket<K, V>>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| (entry.key, entry.value))
    }
}

impl<K, V> IntoIterator for ChainedHashMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { entries: self.buckets.into_iter().flatten() }
    }
}
