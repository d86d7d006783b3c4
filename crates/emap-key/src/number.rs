use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A numeric key component.
///
/// Wraps an `f64` and compares with same-value-zero semantics: every `NaN`
/// equals every other `NaN`, and `0.0` equals `-0.0`. `Hash` and `Ord` agree
/// with that equality, so a `Number` is usable in both hashed and ordered
/// stores.
///
/// A stored `-0.0` reads back as `0.0`, the way a native map keys entries.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Number(f64);

impl Number {
    /// Wrap an `f64`, storing `-0.0` as `0.0`.
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    /// The stored `f64`. Never negative zero.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns `true` if this number is `NaN`.
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// The value with `-0.0` folded to `0.0` and every `NaN` folded to one
    /// quiet `NaN`.
    fn canonical(self) -> f64 {
        if self.0.is_nan() {
            f64::NAN
        } else if self.0 == 0.0 {
            0.0
        } else {
            self.0
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.canonical().to_bits() == other.canonical().to_bits()
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state);
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self.0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.0
    }
}

macro_rules! number_from_lossless {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Self::new(f64::from(value))
                }
            }
        )*
    };
}

number_from_lossless!(i8, i16, i32, u8, u16, u32, f32);
