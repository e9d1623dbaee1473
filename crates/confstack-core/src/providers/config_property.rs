//! Config file property provider

use super::error::ProviderResult;
use super::traits::Provider;
use crate::sources::ScopedConfigMap;
use crate::value::ConfigValue;

/// Provider backed by the profile-scoped config file mapping
///
/// The mapping is already resolved to the active profile by the
/// collaborator that parses the config file; this provider does a
/// single-key lookup against it.
#[derive(Debug, Clone)]
pub struct ConfigPropertyProvider {
    property: String,
    config: ScopedConfigMap,
}

impl ConfigPropertyProvider {
    /// Create a provider reading `property` from the scoped config
    pub fn new(property: impl Into<String>, config: ScopedConfigMap) -> Self {
        Self {
            property: property.into(),
            config,
        }
    }
}

impl Provider for ConfigPropertyProvider {
    fn name(&self) -> &str {
        "config-file"
    }

    fn provide(&self) -> ProviderResult<Option<ConfigValue>> {
        Ok(self.config.get(&self.property))
    }
}
