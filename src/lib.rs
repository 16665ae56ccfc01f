//! # Chained Hash Map
//!
//! A Rust implementation of a hash table that resolves collisions by separate chaining.
//!
//! Every bucket holds an ordered chain of key-value pairs. Integer keys are placed at
//! `key mod capacity`, lookups scan the chain linearly, and the bucket array grows by a fixed
//! ratio once the load factor reaches a threshold. The growth check runs before each insert is
//! counted, so the map can sit exactly at the threshold until the next `set`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chained_map::ChainedHashMap;
//!
//! // Three buckets: keys 5 and 11 collide in bucket 2
//! let mut map = ChainedHashMap::with_capacity(3);
//!
//! map.set(1, 2);
//! map.set(5, 3);
//! assert_eq!(map.capacity(), 3);
//!
//! // The load factor is 2/3 here, so this insert grows the table first
//! map.set(11, 3);
//! map.set(15, 2);
//! assert_eq!(map.capacity(), 6);
//!
//! assert_eq!(map.get(11), Some(&3));
//! assert_eq!(map.get(999), None);
//!
//! let items: Vec<_> = map.items().collect();
//! assert_eq!(items, vec![(&1, &2), (&15, &2), (&5, &3), (&11, &3)]);
//! ```
//!
//! ## Observing Resizes
//!
//! ```rust
//! use chained_map::{ChainedHashMap, MapConfig, ResizeEvent};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let config = MapConfig::new().capacity(2).load_threshold(0.5);
//! let mut map = ChainedHashMap::with_config(config).unwrap();
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! map.on_resize(move |event| sink.borrow_mut().push(event));
//!
//! map.set(0_u32, "zero");
//! map.set(1, "one");
//!
//! assert_eq!(
//!     *seen.borrow(),
//!     vec![ResizeEvent { old_capacity: 2, new_capacity: 4, size: 1 }]
//! );
//! ```

/// Module implementing the separate chaining hash map
mod chained_hashmap;
/// Construction parameters and their validation
mod config;
/// Integer keys and bucket placement
mod key;
/// Resize notifications
mod resize;
/// Utility traits for the hash map
mod utils;

pub use chained_hashmap::{ChainedHashMap, IntoIter, Items};
pub use config::{
    ConfigError, DEFAULT_CAPACITY, DEFAULT_EXTEND_RATIO, DEFAULT_LOAD_THRESHOLD, MapConfig,
};
pub use key::IntegerKey;
pub use resize::ResizeEvent;
pub use utils::HashMapExtensions;
