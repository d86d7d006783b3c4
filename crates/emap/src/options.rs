use std::fmt;
use std::sync::Arc;

/// A caller-supplied key normalization function.
pub type NormalizeFn<K> = Arc<dyn Fn(K) -> K + Send + Sync>;

/// How an [`EnhancedMap`](crate::EnhancedMap) normalizes keys.
pub enum NormalizeKeys<K> {
    /// Use the key type's [`DefaultNormalize`](emap_key::DefaultNormalize)
    /// impl. For [`Key`](emap_key::Key) that unboxes boxed primitives.
    Default,
    /// No normalization: keys are stored and looked up as given.
    Disabled,
    /// A custom function from raw key to normalized key.
    Custom(NormalizeFn<K>),
}

impl<K> NormalizeKeys<K> {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(K) -> K + Send + Sync + 'static,
    {
        NormalizeKeys::Custom(Arc::new(f))
    }
}

impl<K> Default for NormalizeKeys<K> {
    fn default() -> Self {
        NormalizeKeys::Default
    }
}

impl<K> Clone for NormalizeKeys<K> {
    fn clone(&self) -> Self {
        match self {
            NormalizeKeys::Default => NormalizeKeys::Default,
            NormalizeKeys::Disabled => NormalizeKeys::Disabled,
            NormalizeKeys::Custom(f) => NormalizeKeys::Custom(Arc::clone(f)),
        }
    }
}

impl<K> fmt::Debug for NormalizeKeys<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeKeys::Default => f.write_str("Default"),
            NormalizeKeys::Disabled => f.write_str("Disabled"),
            NormalizeKeys::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Construction options for an [`EnhancedMap`](crate::EnhancedMap).
///
/// All three fields are optional; [`MapOptions::default`] means no initial
/// data, no default value, and the default normalization.
#[derive(Clone, Debug)]
pub struct MapOptions<K, V> {
    /// Initial key/value pairs, handed to the underlying store as given.
    /// These keys are not normalized.
    pub data: Vec<(K, V)>,
    /// Value `get` returns on a miss. `None` means misses return `None`.
    pub default: Option<V>,
    /// Key normalization strategy.
    pub normalize_keys: NormalizeKeys<K>,
}

impl<K, V> Default for MapOptions<K, V> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            default: None,
            normalize_keys: NormalizeKeys::Default,
        }
    }
}

impl<K, V> MapOptions<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: impl IntoIterator<Item = (K, V)>) -> Self {
        self.data = data.into_iter().collect();
        self
    }

    pub fn with_default(mut self, default: V) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_normalizer<F>(mut self, f: F) -> Self
    where
        F: Fn(K) -> K + Send + Sync + 'static,
    {
        self.normalize_keys = NormalizeKeys::custom(f);
        self
    }

    pub fn without_normalization(mut self) -> Self {
        self.normalize_keys = NormalizeKeys::Disabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options: MapOptions<String, i32> = MapOptions::default();
        assert!(options.data.is_empty());
        assert!(options.default.is_none());
        assert!(matches!(options.normalize_keys, NormalizeKeys::Default));
    }

    #[test]
    fn builder_sets_fields() {
        let options = MapOptions::new()
            .with_data([("a".to_string(), 1)])
            .with_default(5)
            .without_normalization();
        assert_eq!(options.data, vec![("a".to_string(), 1)]);
        assert_eq!(options.default, Some(5));
        assert!(matches!(options.normalize_keys, NormalizeKeys::Disabled));
    }

    #[test]
    fn custom_normalizer_is_kept() {
        let options: MapOptions<String, i32> =
            MapOptions::new().with_normalizer(|k: String| k.to_lowercase());
        match options.normalize_keys {
            NormalizeKeys::Custom(f) => assert_eq!(f("KEY".to_string()), "key"),
            other => panic!("unexpected strategy: {other:?}"),
        }
    }

    #[test]
    fn debug_hides_function() {
        let strategy: NormalizeKeys<u8> = NormalizeKeys::custom(|k| k);
        assert_eq!(format!("{strategy:?}"), "Custom(..)");
    }
}
