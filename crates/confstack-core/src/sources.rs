//! Shared handles to the backing sources providers read from
//!
//! The surrounding session owns these mappings; providers hold cheap
//! clones and re-read them on every resolution. None of them are parsed
//! or populated here: the environment snapshot, the profile-scoped
//! config file contents, and the runtime instance variables are all
//! prepared by external collaborators before this crate is consulted.

use std::collections::HashMap;
use std::env;
use std::sync::{Arc, RwLock};

use crate::value::ConfigValue;

/// Session-scoped runtime variables
///
/// Values set here represent explicit runtime overrides and by
/// convention sit at the top of every resolution chain.
///
/// # Example
///
/// ```
/// use confstack_core::InstanceVarMap;
///
/// let vars = InstanceVarMap::new();
/// vars.set("region", "eu-west-1");
/// assert!(vars.get("region").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstanceVarMap {
    vars: Arc<RwLock<HashMap<String, ConfigValue>>>,
}

impl InstanceVarMap {
    /// Create a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with initial variables
    pub fn with_vars(initial: HashMap<String, ConfigValue>) -> Self {
        Self {
            vars: Arc::new(RwLock::new(initial)),
        }
    }

    /// Get the variable for a name
    pub fn get(&self, name: &str) -> Option<ConfigValue> {
        let vars = self.vars.read().unwrap();
        vars.get(name).cloned()
    }

    /// Set a variable
    pub fn set(&self, name: &str, value: impl Into<ConfigValue>) {
        let mut vars = self.vars.write().unwrap();
        vars.insert(name.to_string(), value.into());
    }

    /// Remove a variable
    pub fn remove(&self, name: &str) {
        let mut vars = self.vars.write().unwrap();
        vars.remove(name);
    }
}

/// Environment variables as a plain name-to-string mapping
///
/// Absence of a key is never an error. The map is usually a snapshot of
/// the process environment taken once at session construction, but tests
/// hand in their own.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentMap {
    vars: Arc<RwLock<HashMap<String, String>>>,
}

impl EnvironmentMap {
    /// Create a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with initial variables
    pub fn with_vars(initial: HashMap<String, String>) -> Self {
        Self {
            vars: Arc::new(RwLock::new(initial)),
        }
    }

    /// Snapshot the current process environment
    pub fn from_process_env() -> Self {
        Self::with_vars(env::vars().collect())
    }

    /// Get the value for a name
    pub fn get(&self, name: &str) -> Option<String> {
        let vars = self.vars.read().unwrap();
        vars.get(name).cloned()
    }

    /// Set a variable
    pub fn set(&self, name: &str, value: impl Into<String>) {
        let mut vars = self.vars.write().unwrap();
        vars.insert(name.to_string(), value.into());
    }

    /// Remove a variable
    pub fn remove(&self, name: &str) {
        let mut vars = self.vars.write().unwrap();
        vars.remove(name);
    }
}

/// Configuration file properties, already resolved to the active profile
///
/// Parsing and profile scoping happen upstream; this is a direct
/// key-to-value view of the result.
#[derive(Debug, Clone, Default)]
pub struct ScopedConfigMap {
    properties: Arc<RwLock<HashMap<String, ConfigValue>>>,
}

impl ScopedConfigMap {
    /// Create a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with initial properties
    pub fn with_properties(initial: HashMap<String, ConfigValue>) -> Self {
        Self {
            properties: Arc::new(RwLock::new(initial)),
        }
    }

    /// Get the property for a name
    pub fn get(&self, name: &str) -> Option<ConfigValue> {
        let properties = self.properties.read().unwrap();
        properties.get(name).cloned()
    }

    /// Set a property
    pub fn set(&self, name: &str, value: impl Into<ConfigValue>) {
        let mut properties = self.properties.write().unwrap();
        properties.insert(name.to_string(), value.into());
    }
}
