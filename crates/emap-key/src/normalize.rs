//! The default key normalization.
//!
//! A boxed primitive and the raw primitive it wraps are different keys under
//! plain equality, but callers almost always mean the same entry. The default
//! strategy unwraps boxes and leaves everything else alone.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::key::Key;

/// Returns `true` if `key` is a boxed bool, number, or text.
pub fn is_boxed_primitive(key: &Key) -> bool {
    key.is_boxed()
}

/// Unwrap a boxed primitive; return any other key unchanged.
///
/// Objects keep their identity; `Null`, `Absent`, symbols, and raw
/// primitives come back as they went in.
pub fn unbox_primitive(key: &Key) -> Key {
    match key {
        Key::Boxed(boxed) => Key::from(boxed.value().clone()),
        other => other.clone(),
    }
}

/// The normalization a map applies when no strategy is configured.
///
/// The provided method is the identity, so a key type with nothing to fold
/// opts in with an empty impl:
///
/// ```
/// use emap_key::DefaultNormalize;
///
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// struct UserId(u64);
///
/// impl DefaultNormalize for UserId {}
///
/// assert!(UserId(7).default_normalize() == UserId(7));
/// ```
pub trait DefaultNormalize: Sized {
    fn default_normalize(self) -> Self {
        self
    }
}

impl DefaultNormalize for Key {
    fn default_normalize(self) -> Self {
        match self {
            Key::Boxed(boxed) => Key::from(boxed.into_value()),
            other => other,
        }
    }
}

macro_rules! identity_normalize {
    ($($t:ty),* $(,)?) => {
        $(impl DefaultNormalize for $t {})*
    };
}

identity_normalize!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    String, Arc<str>, Rc<str>, Box<str>, Vec<u8>,
);

impl DefaultNormalize for &str {}

impl DefaultNormalize for Cow<'_, str> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{ObjectRef, Symbol};
    use proptest::prelude::*;

    // -----------------------------------------------------------------------
    // Boxed primitives are unwrapped
    // -----------------------------------------------------------------------

    #[test]
    fn unboxes_numbers() {
        assert_eq!(unbox_primitive(&Key::boxed(2)), Key::from(2));
    }

    #[test]
    fn unboxes_booleans() {
        assert_eq!(unbox_primitive(&Key::boxed(true)), Key::from(true));
    }

    #[test]
    fn unboxes_text() {
        assert_eq!(unbox_primitive(&Key::boxed("test")), Key::from("test"));
    }

    #[test]
    fn owned_and_borrowed_paths_agree() {
        let key = Key::boxed(4.5);
        assert_eq!(unbox_primitive(&key), key.clone().default_normalize());
    }

    // -----------------------------------------------------------------------
    // Everything else is untouched
    // -----------------------------------------------------------------------

    #[test]
    fn unequal_primitives_stay_unequal() {
        assert_ne!(unbox_primitive(&Key::from(1)), unbox_primitive(&Key::from(2)));
        assert_ne!(
            unbox_primitive(&Key::from(false)),
            unbox_primitive(&Key::from(true))
        );
        assert_ne!(unbox_primitive(&Key::from("a")), unbox_primitive(&Key::from("b")));
    }

    #[test]
    fn distinct_symbols_stay_distinct() {
        let a = Key::from(Symbol::described("test"));
        let b = Key::from(Symbol::described("test"));
        assert_ne!(unbox_primitive(&a), unbox_primitive(&b));
        assert_eq!(unbox_primitive(&a), a);
    }

    #[test]
    fn objects_keep_identity() {
        let a = Key::from(ObjectRef::new());
        let b = Key::from(ObjectRef::new());
        assert_ne!(unbox_primitive(&a), unbox_primitive(&b));
        assert_eq!(unbox_primitive(&a), a);
    }

    #[test]
    fn null_and_absent_pass_through() {
        assert_eq!(unbox_primitive(&Key::Null), Key::Null);
        assert_eq!(unbox_primitive(&Key::Absent), Key::Absent);
    }

    #[test]
    fn predicate_only_matches_boxes() {
        assert!(is_boxed_primitive(&Key::boxed("x")));
        assert!(!is_boxed_primitive(&Key::from("x")));
        assert!(!is_boxed_primitive(&Key::object()));
        assert!(!is_boxed_primitive(&Key::Null));
    }

    #[test]
    fn std_types_are_identity() {
        assert_eq!(String::from("k").default_normalize(), "k");
        assert_eq!(42u64.default_normalize(), 42);
        assert_eq!("k".default_normalize(), "k");
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    fn primitive_key() -> impl Strategy<Value = Key> {
        prop_oneof![
            any::<bool>().prop_map(Key::from),
            any::<i32>().prop_map(Key::from),
            "[a-z]{0,8}".prop_map(Key::from),
        ]
    }

    proptest! {
        #[test]
        fn boxing_then_normalizing_yields_raw(key in primitive_key()) {
            let primitive = key.clone().into_primitive().unwrap();
            prop_assert_eq!(unbox_primitive(&Key::boxed(primitive)), key);
        }

        #[test]
        fn normalization_is_idempotent(key in primitive_key(), boxed in any::<bool>()) {
            let key = if boxed {
                Key::boxed(key.into_primitive().unwrap())
            } else {
                key
            };
            let once = unbox_primitive(&key);
            prop_assert_eq!(unbox_primitive(&once), once.clone());
            prop_assert_eq!(unbox_primitive(&key), once);
        }
    }
}
