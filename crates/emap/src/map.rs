use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use emap_key::DefaultNormalize;
use emap_store::{AssociativeStore, DefaultStore, MapProxy};

use crate::options::{MapOptions, NormalizeFn, NormalizeKeys};

/// The strategy an [`EnhancedMap`] resolved at construction.
enum Normalizer<K> {
    Disabled,
    Builtin(fn(K) -> K),
    Custom(NormalizeFn<K>),
}

impl<K> Normalizer<K> {
    fn resolve(option: NormalizeKeys<K>) -> Self
    where
        K: DefaultNormalize,
    {
        match option {
            NormalizeKeys::Default => Normalizer::Builtin(K::default_normalize),
            NormalizeKeys::Disabled => Normalizer::Disabled,
            NormalizeKeys::Custom(f) => Normalizer::Custom(f),
        }
    }

    fn apply(&self, key: K) -> K {
        match self {
            Normalizer::Disabled => key,
            Normalizer::Builtin(f) => f(key),
            Normalizer::Custom(f) => f(key),
        }
    }

    fn is_enabled(&self) -> bool {
        !matches!(self, Normalizer::Disabled)
    }

    fn mode(&self) -> &'static str {
        match self {
            Normalizer::Disabled => "disabled",
            Normalizer::Builtin(_) => "default",
            Normalizer::Custom(_) => "custom",
        }
    }
}

impl<K> Clone for Normalizer<K> {
    fn clone(&self) -> Self {
        match self {
            Normalizer::Disabled => Normalizer::Disabled,
            Normalizer::Builtin(f) => Normalizer::Builtin(*f),
            Normalizer::Custom(f) => Normalizer::Custom(Arc::clone(f)),
        }
    }
}

/// A key-value map with key normalization and a default value.
///
/// Behaves like the store `S` it wraps, with three operations changed:
///
/// - [`get`](Self::get), [`has`](Self::has), and [`set`](Self::set) run the
///   key through the configured normalization before touching the store, so
///   keys that normalize equal share one entry.
/// - [`get`](Self::get) returns the configured default on a miss. Without a
///   default it returns `None`, like the store does.
///
/// Everything else (`len`, `remove`, `clear`, iteration) is forwarded
/// unchanged and works on stored keys, which are already normalized.
/// `remove` does **not** normalize: removing by a boxed key will not find an
/// entry stored under the unboxed key. Normalize first with
/// [`normalize_key`](Self::normalize_key) when that matters.
///
/// Initial `data` from [`MapOptions`] goes to the store as given, without
/// normalization.
///
/// A strategy that panics unwinds through the calling operation; nothing is
/// caught.
pub struct EnhancedMap<K, V, S = DefaultStore<K, V>> {
    inner: MapProxy<S>,
    normalizer: Normalizer<K>,
    default: Option<V>,
}

impl<K, V, S> EnhancedMap<K, V, S>
where
    K: DefaultNormalize,
    S: AssociativeStore<Key = K, Value = V>,
{
    /// Create an empty map with no default and the default normalization.
    pub fn new() -> Self {
        Self::from_options(MapOptions::default())
    }

    /// Create a map from explicit options.
    pub fn from_options(options: MapOptions<K, V>) -> Self {
        let MapOptions {
            data,
            default,
            normalize_keys,
        } = options;

        let normalizer = Normalizer::resolve(normalize_keys);
        let inner = MapProxy::from_pairs(data);
        debug!(
            entries = inner.len(),
            normalization = normalizer.mode(),
            has_default = default.is_some(),
            "enhanced map created"
        );

        Self {
            inner,
            normalizer,
            default,
        }
    }
}

impl<K, V, S> EnhancedMap<K, V, S>
where
    S: AssociativeStore<Key = K, Value = V>,
{
    /// Apply the configured normalization to `key`.
    ///
    /// Returns `key` unchanged when normalization is disabled.
    pub fn normalize_key(&self, key: K) -> K {
        self.normalizer.apply(key)
    }

    /// The stored-key form of `key`, borrowing when nothing needs to change.
    fn lookup_key<'k>(&self, key: &'k K) -> Cow<'k, K>
    where
        K: Clone,
    {
        if self.normalizer.is_enabled() {
            Cow::Owned(self.normalizer.apply(key.clone()))
        } else {
            Cow::Borrowed(key)
        }
    }

    /// Look up `key` after normalization.
    ///
    /// On a miss, returns the configured default, or `None` if there is no
    /// default.
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Clone,
    {
        let key = self.lookup_key(key);
        self.inner.get(&*key).or(self.default.as_ref())
    }

    /// Returns `true` if an entry exists for the normalized `key`.
    pub fn has(&self, key: &K) -> bool
    where
        K: Clone,
    {
        let key = self.lookup_key(key);
        self.inner.contains_key(&*key)
    }

    /// Store `value` under the normalized `key`, replacing any prior value.
    ///
    /// Returns the map for chaining.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.store(key, value);
        self
    }

    fn store(&mut self, key: K, value: V) -> Option<V> {
        let key = self.normalize_key(key);
        let previous = self.inner.insert(key, value);
        trace!(
            entries = self.inner.len(),
            replaced = previous.is_some(),
            "entry stored"
        );
        previous
    }

    /// The configured default value, if any.
    pub fn default_value(&self) -> Option<&V> {
        self.default.as_ref()
    }

    /// Returns `true` unless normalization was disabled.
    pub fn is_normalizing(&self) -> bool {
        self.normalizer.is_enabled()
    }

    /// The forwarding container this map is built on.
    pub fn as_proxy(&self) -> &MapProxy<S> {
        &self.inner
    }

    /// Unwrap and return the underlying store.
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

impl<K, V, S> AssociativeStore for EnhancedMap<K, V, S>
where
    K: Clone + DefaultNormalize,
    S: AssociativeStore<Key = K, Value = V>,
{
    type Key = K;
    type Value = V;
    type Iter<'a> = S::Iter<'a> where Self: 'a;

    /// Same as constructing with `data` and otherwise default options.
    fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_options(MapOptions::new().with_data(pairs))
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn get(&self, key: &K) -> Option<&V> {
        EnhancedMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.has(key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.store(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.inner.iter()
    }
}

impl<K, V, S> Default for EnhancedMap<K, V, S>
where
    K: DefaultNormalize,
    S: AssociativeStore<Key = K, Value = V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V: Clone, S: Clone> Clone for EnhancedMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            normalizer: self.normalizer.clone(),
            default: self.default.clone(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a EnhancedMap<K, V, S>
where
    S: AssociativeStore<Key = K, Value = V> + 'a,
{
    type Item = (&'a K, &'a V);
    type IntoIter = S::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K, V, S> Extend<(K, V)> for EnhancedMap<K, V, S>
where
    S: AssociativeStore<Key = K, Value = V>,
{
    /// Equivalent to calling [`set`](EnhancedMap::set) for each pair.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.store(key, value);
        }
    }
}

impl<K, V, S> fmt::Debug for EnhancedMap<K, V, S>
where
    S: AssociativeStore<Key = K, Value = V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnhancedMap")
            .field("entries", &self.inner.len())
            .field("normalization", &self.normalizer.mode())
            .field("has_default", &self.default.is_some())
            .finish()
    }
}
