//! Integer keys and their bucket placement

/// A key that can be placed into a bucket by its integer value.
///
/// The bucket of a key is `key mod capacity`, taken as the Euclidean remainder so that negative
/// keys still land inside `0..capacity`. Placement depends on the current capacity, so a key
/// moves between buckets when the map grows.
pub trait IntegerKey: Copy + Eq {
    /// Returns the bucket index of `self` for a table with `capacity` buckets.
    ///
    /// A `capacity` of zero maps every key onto bucket 0.
    fn bucket_index(self, capacity: usize) -> usize;
}

/// Implements [`IntegerKey`] for primitive integers that fit into `i128`
macro_rules! impl_integer_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntegerKey for $ty {
                #[inline]
                fn bucket_index(self, capacity: usize) -> usize {
                    euclid_index(i128::try_from(self).ok(), capacity)
                }
            }
        )*
    };
}

impl_integer_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Computes `value mod capacity` in `i128`, where every supported key type and every capacity fit
fn euclid_index(value: Option<i128>, capacity: usize) -> usize {
    let (Some(value), Ok(modulus)) = (value, i128::try_from(capacity)) else {
        return 0;
    };
    value.checked_rem_euclid(modulus).and_then(|index| usize::try_from(index).ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_keys_use_modulo() {
        assert_eq!(1_i64.bucket_index(3), 1);
        assert_eq!(5_i64.bucket_index(3), 2);
        assert_eq!(11_i64.bucket_index(3), 2);
        assert_eq!(15_i64.bucket_index(6), 3);
    }

    #[test]
    fn test_negative_keys_stay_in_range() {
        assert_eq!((-1_i32).bucket_index(4), 3);
        assert_eq!((-8_i32).bucket_index(4), 0);
        assert_eq!(i64::MIN.bucket_index(7), 6);
    }

    #[test]
    fn test_unsigned_extremes() {
        assert_eq!(u64::MAX.bucket_index(2), 1);
        assert_eq!(usize::MAX.bucket_index(1), 0);
        assert_eq!(0_u8.bucket_index(5), 0);
    }

    #[test]
    fn test_index_always_below_capacity() {
        for capacity in 1..=17_usize {
            for key in -100_i64..=100 {
                assert!(key.bucket_index(capacity) < capacity, "key {key} capacity {capacity}");
            }
            assert!(i64::MIN.bucket_index(capacity) < capacity);
            assert!(u64::MAX.bucket_index(capacity) < capacity);
        }
    }

    #[test]
    fn test_zero_capacity_maps_to_first_bucket() {
        assert_eq!(42_u32.bucket_index(0), 0);
        assert_eq!((-42_i16).bucket_index(0), 0);
    }
}
