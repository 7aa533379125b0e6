//! Zero-cost bounds checking for the propagation hot loop
//!
//! Debug builds index normally so an off-by-one in row arithmetic panics
//! with a readable message. Release builds use unchecked access.
//!
//! Usage:
//! ```rust
//! use doomfire_engine::fast;
//!
//! let width = 4;
//! let mut heat = vec![0u8; width * 2];
//! // Write: fast!(slice, [index] = value)
//! fast!(heat, [width + 1] = 36);
//! // Read: fast!(slice, [index])
//! let below = *fast!(heat, [width + 1]);
//! assert_eq!(below, 36);
//! ```

/// Indexed read/write that is bounds-checked only with `debug_assertions`.
///
/// Callers must guarantee the index is in range; every call site derives
/// it from the field dimensions.
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
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
