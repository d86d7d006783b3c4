use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{KeyError, KeyResult};
use crate::identity::{BoxedPrimitive, ObjectRef, Symbol};
use crate::number::Number;

/// A value that can be boxed: bool, number, or text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Primitive {
    Bool(bool),
    Number(Number),
    Text(Arc<str>),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Number(n) => write!(f, "{n}"),
            Primitive::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Bool(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Number(Number::new(value))
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Number(Number::from(value))
    }
}

impl From<Number> for Primitive {
    fn from(value: Number) -> Self {
        Primitive::Number(value)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::Text(Arc::from(value))
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::Text(Arc::from(value))
    }
}

/// The variant name of a [`Key`], used in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyKind {
    Absent,
    Null,
    Bool,
    Number,
    Text,
    Symbol,
    Object,
    Boxed,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyKind::Absent => "absent",
            KeyKind::Null => "null",
            KeyKind::Bool => "bool",
            KeyKind::Number => "number",
            KeyKind::Text => "text",
            KeyKind::Symbol => "symbol",
            KeyKind::Object => "object",
            KeyKind::Boxed => "boxed",
        };
        f.write_str(name)
    }
}

/// A dynamic map key.
///
/// Equality follows the value/identity split of the source data:
///
/// - `Absent`, `Null`, `Bool`, `Number`, and `Text` compare by value
///   (`Number` uses same-value-zero, see [`Number`]).
/// - `Symbol`, `Object`, and `Boxed` compare by identity. A boxed `2` is
///   neither equal to the raw `2` nor to another boxed `2`.
///
/// Folding boxed primitives into raw ones is the job of a normalization
/// strategy, not of `Key` equality; see [`unbox_primitive`](crate::unbox_primitive).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    /// No value at all.
    Absent,
    Null,
    Bool(bool),
    Number(Number),
    Text(Arc<str>),
    Symbol(Symbol),
    Object(ObjectRef),
    Boxed(BoxedPrimitive),
}

impl Key {
    /// Shorthand for `Key::Text`.
    pub fn text(value: impl Into<Arc<str>>) -> Self {
        Key::Text(value.into())
    }

    /// Shorthand for `Key::Number`.
    pub fn number(value: impl Into<Number>) -> Self {
        Key::Number(value.into())
    }

    /// Box `value` under a fresh identity.
    pub fn boxed(value: impl Into<Primitive>) -> Self {
        Key::Boxed(BoxedPrimitive::new(value))
    }

    /// A fresh object identity.
    pub fn object() -> Self {
        Key::Object(ObjectRef::new())
    }

    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Absent => KeyKind::Absent,
            Key::Null => KeyKind::Null,
            Key::Bool(_) => KeyKind::Bool,
            Key::Number(_) => KeyKind::Number,
            Key::Text(_) => KeyKind::Text,
            Key::Symbol(_) => KeyKind::Symbol,
            Key::Object(_) => KeyKind::Object,
            Key::Boxed(_) => KeyKind::Boxed,
        }
    }

    /// Returns `true` for raw (unboxed) bool, number, and text keys.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Key::Bool(_) | Key::Number(_) | Key::Text(_))
    }

    pub fn is_boxed(&self) -> bool {
        matches!(self, Key::Boxed(_))
    }

    /// Convert a raw primitive key into a [`Primitive`].
    ///
    /// Boxed keys are rejected; unbox them first.
    pub fn into_primitive(self) -> KeyResult<Primitive> {
        match self {
            Key::Bool(b) => Ok(Primitive::Bool(b)),
            Key::Number(n) => Ok(Primitive::Number(n)),
            Key::Text(s) => Ok(Primitive::Text(s)),
            other => Err(KeyError::NotPrimitive(other.kind())),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Absent => f.write_str("absent"),
            Key::Null => f.write_str("null"),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Number(n) => write!(f, "{n}"),
            Key::Text(s) => write!(f, "{s:?}"),
            Key::Symbol(s) => write!(f, "{s}"),
            Key::Object(o) => write!(f, "{o}"),
            Key::Boxed(b) => write!(f, "{b}"),
        }
    }
}

impl From<Primitive> for Key {
    fn from(value: Primitive) -> Self {
        match value {
            Primitive::Bool(b) => Key::Bool(b),
            Primitive::Number(n) => Key::Number(n),
            Primitive::Text(s) => Key::Text(s),
        }
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Number(Number::new(value))
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Number(Number::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Number(Number::from(value))
    }
}

impl From<Number> for Key {
    fn from(value: Number) -> Self {
        Key::Number(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(Arc::from(value))
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(Arc::from(value))
    }
}

impl From<Symbol> for Key {
    fn from(value: Symbol) -> Self {
        Key::Symbol(value)
    }
}

impl From<ObjectRef> for Key {
    fn from(value: ObjectRef) -> Self {
        Key::Object(value)
    }
}

impl From<BoxedPrimitive> for Key {
    fn from(value: BoxedPrimitive) -> Self {
        Key::Boxed(value)
    }
}

impl<T: Into<Key>> From<Option<T>> for Key {
    /// `None` maps to [`Key::Absent`].
    fn from(value: Option<T>) -> Self {
        value.map_or(Key::Absent, Into::into)
    }
}

impl TryFrom<&Key> for bool {
    type Error = KeyError;

    fn try_from(key: &Key) -> KeyResult<Self> {
        match key {
            Key::Bool(b) => Ok(*b),
            other => Err(KeyError::TypeMismatch {
                expected: KeyKind::Bool,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<&Key> for f64 {
    type Error = KeyError;

    fn try_from(key: &Key) -> KeyResult<Self> {
        match key {
            Key::Number(n) => Ok(n.get()),
            other => Err(KeyError::TypeMismatch {
                expected: KeyKind::Number,
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<&Key> for String {
    type Error = KeyError;

    fn try_from(key: &Key) -> KeyResult<Self> {
        match key {
            Key::Text(s) => Ok(s.to_string()),
            other => Err(KeyError::TypeMismatch {
                expected: KeyKind::Text,
                found: other.kind(),
            }),
        }
    }
}
