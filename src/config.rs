//! Construction parameters for [`ChainedHashMap`](crate::ChainedHashMap)

use thiserror::Error;

/// Number of buckets a map starts with when no capacity is given
pub const DEFAULT_CAPACITY: usize = 4;

/// Load factor at which the map grows before the next insert
pub const DEFAULT_LOAD_THRESHOLD: f64 = 2.0 / 3.0;

/// Factor the bucket count is multiplied by on every resize
pub const DEFAULT_EXTEND_RATIO: usize = 2;

/// Errors reported when a [`MapConfig`] is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The map needs at least one bucket
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    /// The threshold must be a positive finite ratio
    #[error("load threshold must be finite and greater than 0, got {0}")]
    InvalidLoadThreshold(f64),
    /// Growing by less than a factor of two never brings the load factor back under the threshold
    #[error("extend ratio must be at least 2, got {0}")]
    InvalidExtendRatio(usize),
}

/// Parameters used to build a [`ChainedHashMap`](crate::ChainedHashMap).
///
/// ```rust
/// use chained_map::{ChainedHashMap, MapConfig};
///
/// let config = MapConfig::new().capacity(3).load_threshold(0.75).extend_ratio(3);
/// let map: ChainedHashMap<u32, &str> = ChainedHashMap::with_config(config).unwrap();
/// assert_eq!(map.capacity(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Initial number of buckets
    pub capacity: usize,
    /// Load factor that triggers a resize on the next insert
    pub load_threshold: f64,
    /// Multiplier applied to the bucket count on resize
    pub extend_ratio: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MapConfig {
    /// Creates a config holding the default parameters
    #[must_use]
    pub const fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            extend_ratio: DEFAULT_EXTEND_RATIO,
        }
    }

    /// Sets the initial number of buckets
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load factor that triggers growth
    #[must_use]
    pub const fn load_threshold(mut self, load_threshold: f64) -> Self {
        self.load_threshold = load_threshold;
        self
    }

    /// Sets the growth multiplier
    #[must_use]
    pub const fn extend_ratio(mut self, extend_ratio: usize) -> Self {
        self.extend_ratio = extend_ratio;
        self
    }

    /// Checks that the parameters describe a map that can hold its invariants.
    ///
    /// # Errors
    ///
    /// Returns the first rejected parameter, checked in field order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.load_threshold.is_finite() || self.load_threshold <= 0.0 {
            return Err(ConfigError::InvalidLoadThreshold(self.load_threshold));
        }
        if self.extend_ratio < 2 {
            return Err(ConfigError::InvalidExtendRatio(self.extend_ratio));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MapConfig::default();
        assert_eq!(config.capacity, 4);
        assert_eq!(config.extend_ratio, 2);
        assert!((config.load_threshold - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert_eq!(MapConfig::new().capacity(0).validate(), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn test_rejects_bad_thresholds() {
        for threshold in [0.0, -0.5, f64::INFINITY] {
            assert_eq!(
                MapConfig::new().load_threshold(threshold).validate(),
                Err(ConfigError::InvalidLoadThreshold(threshold))
            );
        }
        assert!(matches!(
            MapConfig::new().load_threshold(f64::NAN).validate(),
            Err(ConfigError::InvalidLoadThreshold(t)) if t.is_nan()
        ));
    }

    #[test]
    fn test_rejects_small_extend_ratio() {
        assert_eq!(
            MapConfig::new().extend_ratio(1).validate(),
            Err(ConfigError::InvalidExtendRatio(1))
        );
        assert_eq!(
            MapConfig::new().extend_ratio(0).validate(),
            Err(ConfigError::InvalidExtendRatio(0))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ConfigError::ZeroCapacity.to_string(), "capacity must be at least 1");
        assert_eq!(
            ConfigError::InvalidExtendRatio(1).to_string(),
            "extend ratio must be at least 2, got 1"
        );
    }
}
