//! Utility traits for `ChainedHashMap`

use crate::{ChainedHashMap, IntegerKey};

/// Extension trait for map implementations that provides additional utility methods
pub trait HashMapExtensions<K, V> {
    /// Returns the keys of the hash map as a Vec, in iteration order
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the hash map as a Vec, in iteration order
    fn values(&self) -> Vec<V>;

    /// Returns true if the hash map contains the given key
    fn contains_key(&self, key: K) -> bool;
}

impl<K, V> HashMapExtensions<K, V> for ChainedHashMap<K, V>
where
    K: IntegerKey,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.items().map(|(&k, _)| k).collect()
    }

    fn values(&self) -> Vec<V> {
        self.items().map(|(_, v)| v.clone()).collect()
    }

    fn contains_key(&self, key: K) -> bool {
        self.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colliding_keys_share_one_chain() {
        let mut map = ChainedHashMap::new();
        // 2, 6 and 10 all land in bucket 2 of 4
        map.set(6_i64, "six".to_string());
        map.set(2, "two".to_string());
        map.set(10, "ten".to_string());

        assert_eq!(map.bucket_lens().collect::<Vec<_>>(), vec![0, 0, 3, 0]);
        assert_eq!(map.keys(), vec![6, 2, 10]);
        assert_eq!(map.values(), vec!["six".to_string(), "two".to_string(), "ten".to_string()]);

        map.delete(2);
        assert_eq!(map.keys(), vec![6, 10]);
        assert_eq!(map.values(), vec!["six".to_string(), "ten".to_string()]);
    }

    #[test]
    fn test_keys_follow_item_order() {
        let map: ChainedHashMap<u32, u32> = [(5, 0), (1, 0), (4, 0)].into_iter().collect();
        assert_eq!(map.keys(), vec![4, 5, 1]);
    }

    #[test]
    fn test_contains_key() {
        let mut map = ChainedHashMap::new();
        map.set(1_u8, 1);

        assert!(map.contains_key(1));
        assert!(!map.contains_key(2));

        map.delete(1);
        assert!(!map.contains_key(1));
    }
}
