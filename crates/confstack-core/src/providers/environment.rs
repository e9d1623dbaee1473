//! Environment variable provider

use super::error::ProviderResult;
use super::traits::Provider;
use crate::sources::EnvironmentMap;
use crate::value::ConfigValue;

/// Provider backed by environment variables
///
/// A single logical name may be satisfied by any of several candidate
/// environment variable spellings (current plus legacy names). The
/// candidates are scanned in order and the first one defined wins, even
/// when a later one is also set.
///
/// # Example
///
/// ```
/// use confstack_core::{EnvironmentMap, EnvironmentProvider, Provider};
///
/// let env = EnvironmentMap::new();
/// env.set("APP_REGION", "eu-west-1");
///
/// let provider = EnvironmentProvider::with_candidates(
///     vec!["APP_REGION".to_string(), "APP_DEFAULT_REGION".to_string()],
///     env,
/// );
/// assert!(provider.provide().unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentProvider {
    names: Vec<String>,
    env: EnvironmentMap,
}

impl EnvironmentProvider {
    /// Create a provider reading a single environment variable
    pub fn new(name: impl Into<String>, env: EnvironmentMap) -> Self {
        Self {
            names: vec![name.into()],
            env,
        }
    }

    /// Create a provider with an ordered list of candidate names
    ///
    /// Earlier names take precedence over later ones.
    pub fn with_candidates(names: Vec<String>, env: EnvironmentMap) -> Self {
        Self { names, env }
    }

    /// The candidate names, in precedence order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Provider for EnvironmentProvider {
    fn name(&self) -> &str {
        "env"
    }

    fn provide(&self) -> ProviderResult<Option<ConfigValue>> {
        for name in &self.names {
            if let Some(value) = self.env.get(name) {
                return Ok(Some(ConfigValue::Str(value)));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> EnvironmentMap {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentMap::with_vars(map)
    }

    #[test]
    fn test_does_provide_none_if_no_variable_exists() {
        let provider = EnvironmentProvider::new("FOO", env_of(&[]));
        assert_eq!(provider.provide().unwrap(), None);
    }

    #[test]
    fn test_does_provide_value_if_variable_exists() {
        let provider = EnvironmentProvider::new("FOO", env_of(&[("FOO", "bar")]));
        assert_eq!(provider.provide().unwrap(), Some(ConfigValue::from("bar")));
    }

    #[test]
    fn test_does_provide_none_if_no_candidate_exists() {
        let provider = EnvironmentProvider::with_candidates(
            vec!["FOO".to_string(), "BAR".to_string()],
            env_of(&[]),
        );
        assert_eq!(provider.provide().unwrap(), None);
    }

    #[test]
    fn test_does_provide_first_candidate() {
        let provider = EnvironmentProvider::with_candidates(
            vec!["FOO".to_string(), "BAR".to_string()],
            env_of(&[("FOO", "baz")]),
        );
        assert_eq!(provider.provide().unwrap(), Some(ConfigValue::from("baz")));
    }

    #[test]
    fn test_does_provide_second_candidate() {
        let provider = EnvironmentProvider::with_candidates(
            vec!["FOO".to_string(), "BAR".to_string()],
            env_of(&[("BAR", "baz")]),
        );
        assert_eq!(provider.provide().unwrap(), Some(ConfigValue::from("baz")));
    }

    #[test]
    fn test_does_provide_first_when_both_exist() {
        let provider = EnvironmentProvider::with_candidates(
            vec!["FOO".to_string(), "BAR".to_string()],
            env_of(&[("FOO", "baz"), ("BAR", "buz")]),
        );
        assert_eq!(provider.provide().unwrap(), Some(ConfigValue::from("baz")));
    }

    #[test]
    fn test_empty_string_is_present() {
        let provider = EnvironmentProvider::new("FOO", env_of(&[("FOO", "")]));
        assert_eq!(provider.provide().unwrap(), Some(ConfigValue::from("")));
    }

    #[test]
    fn test_rereads_environment_each_call() {
        let env = env_of(&[]);
        let provider = EnvironmentProvider::new("FOO", env.clone());

        assert_eq!(provider.provide().unwrap(), None);

        env.set("FOO", "bar");
        assert_eq!(provider.provide().unwrap(), Some(ConfigValue::from("bar")));
    }
}
