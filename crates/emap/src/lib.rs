//! Key-value map with pluggable key normalization and a default value.
//!
//! [`EnhancedMap`] wraps a native store through a forwarding [`MapProxy`] and
//! changes exactly three operations:
//!
//! - `get`, `has`, and `set` normalize the key first, so keys that normalize
//!   equal (a boxed `"k"` and a raw `"k"`, by default) share one entry;
//! - `get` returns a configured default instead of `None` on a miss.
//!
//! Every other store operation is forwarded unchanged.
//!
//! ```
//! use emap::{EnhancedMap, Key, MapOptions};
//!
//! let mut map: EnhancedMap<Key, &str> =
//!     EnhancedMap::from_options(MapOptions::new().with_default("none"));
//! map.set(Key::boxed("k"), "v");
//!
//! assert_eq!(map.get(&Key::from("k")), Some(&"v"));
//! assert_eq!(map.get(&Key::from("missing")), Some(&"none"));
//! ```

pub mod map;
pub mod options;

pub use map::EnhancedMap;
pub use options::{MapOptions, NormalizeFn, NormalizeKeys};

// Re-export key and store types
pub use emap_key::{
    is_boxed_primitive, unbox_primitive, BoxedPrimitive, DefaultNormalize, Key, KeyError,
    KeyKind, KeyResult, Number, ObjectRef, Primitive, Symbol,
};
pub use emap_store::{AssociativeStore, DefaultStore, Keys, MapProxy, Values};
