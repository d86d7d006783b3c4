use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::key::Primitive;

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Allocate a process-unique identity. Never returns 0.
fn next_identity() -> u64 {
    NEXT_IDENTITY.fetch_add(1, AtomicOrdering::Relaxed)
}

/// Mark `id` as taken so later allocations never hand it out again.
fn reserve_identity(id: u64) -> u64 {
    NEXT_IDENTITY.fetch_max(id.saturating_add(1), AtomicOrdering::Relaxed);
    id
}

// Deserialized identities go through these so the counter moves past them.

#[derive(Deserialize)]
struct SymbolRepr {
    id: u64,
    description: Option<Arc<str>>,
}

impl From<SymbolRepr> for Symbol {
    fn from(repr: SymbolRepr) -> Self {
        Self {
            id: reserve_identity(repr.id),
            description: repr.description,
        }
    }
}

#[derive(Deserialize)]
struct ObjectRefRepr {
    id: u64,
}

impl From<ObjectRefRepr> for ObjectRef {
    fn from(repr: ObjectRefRepr) -> Self {
        Self {
            id: reserve_identity(repr.id),
        }
    }
}

#[derive(Deserialize)]
struct BoxedPrimitiveRepr {
    id: u64,
    value: Primitive,
}

impl From<BoxedPrimitiveRepr> for BoxedPrimitive {
    fn from(repr: BoxedPrimitiveRepr) -> Self {
        Self {
            id: reserve_identity(repr.id),
            value: repr.value,
        }
    }
}

/// A unique, optionally described token.
///
/// Two symbols are equal only if one is a clone of the other; the
/// description is informational and does not take part in equality.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "SymbolRepr")]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a fresh symbol with no description.
    pub fn new() -> Self {
        Self {
            id: next_identity(),
            description: None,
        }
    }

    /// Create a fresh symbol carrying a description.
    pub fn described(description: impl Into<Arc<str>>) -> Self {
        Self {
            id: next_identity(),
            description: Some(description.into()),
        }
    }

    /// The identity of this symbol.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol#{}({})", self.id, self.description().unwrap_or(""))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// Handle to an opaque object, compared by identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "ObjectRefRepr")]
pub struct ObjectRef {
    id: u64,
}

impl ObjectRef {
    /// Allocate a new object identity.
    pub fn new() -> Self {
        Self { id: next_identity() }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Default for ObjectRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef#{}", self.id)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.id)
    }
}

/// A primitive wrapped in an object with its own identity.
///
/// A boxed primitive is never equal to the raw primitive it wraps, nor to
/// another box wrapping the same value. Only clones of the same box compare
/// equal. Use [`value`](Self::value) to get the wrapped primitive back.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "BoxedPrimitiveRepr")]
pub struct BoxedPrimitive {
    id: u64,
    value: Primitive,
}

impl BoxedPrimitive {
    /// Box a primitive under a fresh identity.
    pub fn new(value: impl Into<Primitive>) -> Self {
        Self {
            id: next_identity(),
            value: value.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// The wrapped primitive.
    pub fn value(&self) -> &Primitive {
        &self.value
    }

    /// Consume the box and return the wrapped primitive.
    pub fn into_value(self) -> Primitive {
        self.value
    }
}

impl PartialEq for BoxedPrimitive {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BoxedPrimitive {}

impl Hash for BoxedPrimitive {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for BoxedPrimitive {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BoxedPrimitive {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for BoxedPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxedPrimitive#{}({:?})", self.id, self.value)
    }
}

impl fmt::Display for BoxedPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boxed({})", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identities_are_unique() {
        let ids: HashSet<u64> = (0..64).map(|_| ObjectRef::new().id()).collect();
        assert_eq!(ids.len(), 64);
        assert!(!ids.contains(&0));
    }

    #[test]
    fn symbols_with_same_description_differ() {
        let a = Symbol::described("test");
        let b = Symbol::described("test");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.description(), Some("test"));
    }

    #[test]
    fn objects_compare_by_identity() {
        let a = ObjectRef::new();
        let b = ObjectRef::new();
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn boxes_of_equal_values_differ() {
        let a = BoxedPrimitive::new(2);
        let b = BoxedPrimitive::new(2);
        assert_ne!(a, b);
        assert_eq!(a.value(), b.value());
        assert_eq!(a, a.clone());
    }

    #[test]
    fn into_value_returns_wrapped_primitive() {
        let boxed = BoxedPrimitive::new("test");
        assert_eq!(boxed.into_value(), Primitive::from("test"));
    }

    #[test]
    fn deserialized_identity_is_never_reallocated() {
        let loaded: ObjectRef = serde_json::from_str(r#"{"id":1000000}"#).unwrap();
        assert_eq!(loaded.id(), 1_000_000);
        let fresh = ObjectRef::new();
        assert_ne!(loaded, fresh);
        assert!(fresh.id() > loaded.id());
    }

    #[test]
    fn deserialized_symbol_and_box_reserve_their_ids() {
        let symbol: Symbol =
            serde_json::from_str(r#"{"id":2000000,"description":"s"}"#).unwrap();
        assert!(Symbol::new().id() > symbol.id());
        assert_eq!(symbol.description(), Some("s"));

        let boxed: BoxedPrimitive =
            serde_json::from_str(r#"{"id":3000000,"value":{"Bool":true}}"#).unwrap();
        assert!(BoxedPrimitive::new(true).id() > boxed.id());
        assert_eq!(boxed.value(), &Primitive::Bool(true));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Symbol::described("s").to_string(), "Symbol(s)");
        assert_eq!(BoxedPrimitive::new(true).to_string(), "boxed(true)");
    }
}
