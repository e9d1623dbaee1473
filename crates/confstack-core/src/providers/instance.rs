//! Instance variable provider

use super::error::ProviderResult;
use super::traits::Provider;
use crate::sources::InstanceVarMap;
use crate::value::ConfigValue;

/// Provider backed by the session's runtime instance variables
///
/// Values explicitly set at runtime are expected to win over every
/// other source, so by convention this provider sits first in a chain.
///
/// # Example
///
/// ```
/// use confstack_core::{InstanceVarMap, InstanceVarProvider, Provider};
///
/// let vars = InstanceVarMap::new();
/// vars.set("region", "eu-west-1");
///
/// let provider = InstanceVarProvider::new("region", vars);
/// assert!(provider.provide().unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct InstanceVarProvider {
    instance_var: String,
    vars: InstanceVarMap,
}

impl InstanceVarProvider {
    /// Create a provider reading `instance_var` from the given map
    pub fn new(instance_var: impl Into<String>, vars: InstanceVarMap) -> Self {
        Self {
            instance_var: instance_var.into(),
            vars,
        }
    }
}

impl Provider for InstanceVarProvider {
    fn name(&self) -> &str {
        "instance"
    }

    fn provide(&self) -> ProviderResult<Option<ConfigValue>> {
        Ok(self.vars.get(&self.instance_var))
    }
}
