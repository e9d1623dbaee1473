//! Caching registry of logical names to providers

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, trace};

use crate::providers::{ProviderResult, SharedProvider};
use crate::value::ConfigValue;

/// Which source would serve a logical name right now
///
/// Reported by [`ConfigValueStore::resolution_info`]; useful when
/// debugging why a value came out the way it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionInfo {
    /// Whether the name currently has a cached (or directly set) value
    pub cached: bool,
    /// Name of the registered provider, or `"none"`
    pub source: String,
}

impl ResolutionInfo {
    fn new(cached: bool, source: impl Into<String>) -> Self {
        Self {
            cached,
            source: source.into(),
        }
    }
}

/// The top-level registry and cache for configuration values
///
/// Maps logical names to providers and memoizes each resolved value, so
/// a name is computed at most once per store unless explicitly
/// overridden. Absent results are deliberately not cached: a source
/// that gains a value later (or a provider registered later) is still
/// observable on the next lookup for a name that previously resolved to
/// nothing.
///
/// The store is not a process-wide singleton; callers own an instance
/// and pass it around. Interior locking keeps individual operations
/// consistent, but concurrent lookups for the same uncached name are
/// not deduplicated: both may invoke the provider, last write wins.
///
/// # Example
///
/// ```
/// use confstack_core::{ConfigValueStore, ConfigValue, ConstantProvider};
/// use std::sync::Arc;
///
/// let store = ConfigValueStore::new();
/// store.set_config_provider("region", Arc::new(ConstantProvider::new("eu-west-1")));
/// let value = store.get_config_variable("region").unwrap();
/// assert_eq!(value, Some(ConfigValue::from("eu-west-1")));
/// ```
#[derive(Default)]
pub struct ConfigValueStore {
    mapping: RwLock<HashMap<String, SharedProvider>>,
    cache: RwLock<HashMap<String, ConfigValue>>,
}

impl ConfigValueStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with an initial name-to-provider mapping
    pub fn with_mapping(mapping: HashMap<String, SharedProvider>) -> Self {
        Self {
            mapping: RwLock::new(mapping),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a logical name
    ///
    /// Returns the cached value if one exists; otherwise invokes the
    /// registered provider, caches a non-absent result, and returns it.
    /// A name with no registered provider resolves to `Ok(None)`, not
    /// an error. A conversion failure inside a chain propagates as
    /// `Err` and nothing is cached for the name.
    pub fn get_config_variable(&self, logical_name: &str) -> ProviderResult<Option<ConfigValue>> {
        {
            let cache = self.cache.read().unwrap();
            if let Some(value) = cache.get(logical_name) {
                trace!(logical_name, "cache hit");
                return Ok(Some(value.clone()));
            }
        }

        // Clone the provider handle out so the registry lock is not
        // held while provider code runs.
        let provider = {
            let mapping = self.mapping.read().unwrap();
            mapping.get(logical_name).cloned()
        };
        let Some(provider) = provider else {
            trace!(logical_name, "no provider registered");
            return Ok(None);
        };

        match provider.provide()? {
            Some(value) => {
                trace!(logical_name, source = provider.name(), "resolved and cached");
                let mut cache = self.cache.write().unwrap();
                cache.insert(logical_name.to_string(), value.clone());
                Ok(Some(value))
            }
            // Absent results are not cached, so a later registration or
            // source change stays observable.
            None => Ok(None),
        }
    }

    /// Set a value directly, bypassing the registered provider
    ///
    /// Takes effect immediately for subsequent reads and wins over both
    /// the cache and anything the provider would produce, until the
    /// name is reset or set again.
    pub fn set_config_variable(&self, logical_name: &str, value: impl Into<ConfigValue>) {
        debug!(logical_name, "setting config variable directly");
        let mut cache = self.cache.write().unwrap();
        cache.insert(logical_name.to_string(), value.into());
    }

    /// Register or replace the provider for a logical name
    ///
    /// Any cached value for the name is invalidated, so the next read
    /// consults the new provider immediately.
    pub fn set_config_provider(&self, logical_name: &str, provider: SharedProvider) {
        debug!(logical_name, source = provider.name(), "registering provider");
        {
            let mut mapping = self.mapping.write().unwrap();
            mapping.insert(logical_name.to_string(), provider);
        }
        let mut cache = self.cache.write().unwrap();
        cache.remove(logical_name);
    }

    /// Drop the cached value for one name
    ///
    /// Returns whether a cached value existed. The registered provider,
    /// if any, is consulted again on the next read.
    pub fn clear_cache(&self, logical_name: &str) -> bool {
        let mut cache = self.cache.write().unwrap();
        cache.remove(logical_name).is_some()
    }

    /// Drop every cached value, keeping all registrations
    pub fn reset(&self) {
        debug!("resetting config value cache");
        let mut cache = self.cache.write().unwrap();
        cache.clear();
    }

    /// Report which source would serve a logical name right now
    pub fn resolution_info(&self, logical_name: &str) -> ResolutionInfo {
        let cached = {
            let cache = self.cache.read().unwrap();
            cache.contains_key(logical_name)
        };
        let mapping = self.mapping.read().unwrap();
        match mapping.get(logical_name) {
            Some(provider) => ResolutionInfo::new(cached, provider.name()),
            None => ResolutionInfo::new(cached, "none"),
        }
    }
}

impl std::fmt::Debug for ConfigValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mapping = self.mapping.read().unwrap();
        let cache = self.cache.read().unwrap();
        f.debug_struct("ConfigValueStore")
            .field("registered", &mapping.len())
            .field("cached", &cache.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{ConstantProvider, InstanceVarProvider};
    use crate::sources::InstanceVarMap;
    use std::sync::Arc;

    #[test]
    fn test_does_provide_none_if_no_variable_exists() {
        let store = ConfigValueStore::new();
        assert_eq!(store.get_config_variable("fake_variable").unwrap(), None);
    }

    #[test]
    fn test_does_provide_value_if_variable_exists() {
        let mut mapping: HashMap<String, SharedProvider> = HashMap::new();
        mapping.insert(
            "fake_variable".to_string(),
            Arc::new(ConstantProvider::new("foo")),
        );
        let store = ConfigValueStore::with_mapping(mapping);

        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("foo")),
        );
    }

    #[test]
    fn test_provided_value_is_cached() {
        let vars = InstanceVarMap::new();
        vars.set("fake_variable", "foo");

        let store = ConfigValueStore::new();
        store.set_config_provider(
            "fake_variable",
            Arc::new(InstanceVarProvider::new("fake_variable", vars.clone())),
        );

        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("foo")),
        );

        // Mutating the backing source must not change the answer
        vars.set("fake_variable", "bar");
        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("foo")),
        );
    }

    #[test]
    fn test_absent_result_is_not_cached() {
        let vars = InstanceVarMap::new();
        let store = ConfigValueStore::new();
        store.set_config_provider(
            "fake_variable",
            Arc::new(InstanceVarProvider::new("fake_variable", vars.clone())),
        );

        assert_eq!(store.get_config_variable("fake_variable").unwrap(), None);

        // A source that gains a value later is still observable
        vars.set("fake_variable", "foo");
        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("foo")),
        );
    }

    #[test]
    fn test_can_set_variable() {
        let store = ConfigValueStore::new();
        store.set_config_variable("fake_variable", "foo");
        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("foo")),
        );
    }

    #[test]
    fn test_set_variable_does_override_cache() {
        let store = ConfigValueStore::new();
        store.set_config_provider("fake_variable", Arc::new(ConstantProvider::new("foo")));

        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("foo")),
        );

        store.set_config_variable("fake_variable", "bar");
        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("bar")),
        );
    }

    #[test]
    fn test_set_provider_invalidates_cached_value() {
        let store = ConfigValueStore::new();
        store.set_config_provider("fake_variable", Arc::new(ConstantProvider::new("foo")));

        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("foo")),
        );

        store.set_config_provider("fake_variable", Arc::new(ConstantProvider::new("bar")));
        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("bar")),
        );
    }

    #[test]
    fn test_clear_cache_reconsults_provider() {
        let vars = InstanceVarMap::new();
        vars.set("fake_variable", "foo");

        let store = ConfigValueStore::new();
        store.set_config_provider(
            "fake_variable",
            Arc::new(InstanceVarProvider::new("fake_variable", vars.clone())),
        );

        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("foo")),
        );

        vars.set("fake_variable", "bar");
        assert!(store.clear_cache("fake_variable"));
        assert_eq!(
            store.get_config_variable("fake_variable").unwrap(),
            Some(ConfigValue::from("bar")),
        );

        assert!(!store.clear_cache("never_resolved"));
    }

    #[test]
    fn test_reset_clears_all_cached_values() {
        let store = ConfigValueStore::new();
        store.set_config_variable("a", "1");
        store.set_config_variable("b", "2");

        store.reset();

        assert_eq!(store.get_config_variable("a").unwrap(), None);
        assert_eq!(store.get_config_variable("b").unwrap(), None);
    }

    #[test]
    fn test_conversion_failure_propagates_through_lookup() {
        use crate::convert::parse_int;
        use crate::providers::{ChainProvider, ProviderError};

        let providers: Vec<SharedProvider> = vec![Arc::new(ConstantProvider::new("not a number"))];
        let chain = ChainProvider::with_conversion(providers, parse_int());

        let store = ConfigValueStore::new();
        store.set_config_provider("fake_variable", Arc::new(chain));

        assert!(matches!(
            store.get_config_variable("fake_variable"),
            Err(ProviderError::Conversion(_)),
        ));

        // Nothing was cached for the failed lookup
        assert!(!store.resolution_info("fake_variable").cached);
    }

    #[test]
    fn test_resolution_info() {
        let store = ConfigValueStore::new();

        let info = store.resolution_info("fake_variable");
        assert!(!info.cached);
        assert_eq!(info.source, "none");

        store.set_config_provider("fake_variable", Arc::new(ConstantProvider::new("foo")));
        let info = store.resolution_info("fake_variable");
        assert!(!info.cached);
        assert_eq!(info.source, "constant");

        store.get_config_variable("fake_variable").unwrap();
        let info = store.resolution_info("fake_variable");
        assert!(info.cached);
        assert_eq!(info.source, "constant");
    }
}
