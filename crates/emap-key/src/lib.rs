//! Dynamic key model for the enhanced map.
//!
//! Keys handed to an enhanced map may come from a dynamic source where the
//! same logical value can show up in two forms: a raw primitive and a boxed
//! wrapper around that primitive. The wrapper has its own identity, so under
//! plain equality the two never collide. This crate models such keys and
//! provides the default normalization that folds the two forms together.
//!
//! # Key Types
//!
//! - [`Key`] — a dynamic key: absent, null, bool, number, text, symbol,
//!   object, or boxed primitive
//! - [`Number`] — `f64` with same-value-zero equality (`NaN == NaN`, `0 == -0`)
//! - [`Primitive`] — the values that may be boxed
//! - [`Symbol`], [`ObjectRef`], [`BoxedPrimitive`] — identity-bearing values
//! - [`DefaultNormalize`] — the strategy a map uses when none is configured

pub mod error;
pub mod identity;
pub mod key;
pub mod normalize;
pub mod number;

pub use error::{KeyError, KeyResult};
pub use identity::{BoxedPrimitive, ObjectRef, Symbol};
pub use key::{Key, KeyKind, Primitive};
pub use normalize::{is_boxed_primitive, unbox_primitive, DefaultNormalize};
pub use number::Number;
