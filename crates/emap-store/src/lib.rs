//! Associative store surface for the enhanced map.
//!
//! This crate declares the operation surface of a native key-value store
//! once, as a trait, and provides a wrapper that republishes that surface by
//! forwarding to an owned store instance.
//!
//! # Storage Backends
//!
//! All backends implement the [`AssociativeStore`] trait:
//!
//! - `IndexMap` — insertion ordered ([`DefaultStore`])
//! - `HashMap` — unordered
//! - `BTreeMap` — sorted by key
//!
//! # Design Rules
//!
//! 1. The forwarded surface is the trait. It never changes per instance.
//! 2. [`MapProxy`] adds no state and no error kinds of its own.
//! 3. A miss is `None`, the store's native absent value.
//! 4. Ordering guarantees are whatever the backend provides.

pub mod native;
pub mod proxy;
pub mod traits;

pub use proxy::{DefaultStore, MapProxy};
pub use traits::{AssociativeStore, Keys, Values};
