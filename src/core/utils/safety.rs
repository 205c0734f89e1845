//! Zero-cost safety macros
//!
//! In debug builds cell lookups keep their bounds checks (panics carry the
//! bad index), release builds use unchecked access. The tilemap facade hits
//! these on every solidity query, which is the hot path of collision
//! resolution.

/// Bounds-checked in debug, unchecked in release.
///
/// Read: `*fast!(slice, [index])`
/// Write: `fast!(slice, [index] = value)`
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fast_read_and_write() {
        let mut arr = vec![1u8, 2, 3, 4, 5];
        assert_eq!(*fast!(arr, [2]), 3);
        fast!(arr, [2] = 100);
        assert_eq!(arr[2], 100);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_bounds_check_debug() {
        let arr = vec![1, 2, 3];
        let _ = *fast!(arr, [10]);
    }
}
