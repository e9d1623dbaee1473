//! Constant value provider

use super::error::ProviderResult;
use super::traits::Provider;
use crate::value::ConfigValue;

/// Provider that always produces a fixed value
///
/// Used to express a fallback default at the end of a chain.
#[derive(Debug, Clone)]
pub struct ConstantProvider {
    value: ConfigValue,
}

impl ConstantProvider {
    /// Create a provider producing `value`
    pub fn new(value: impl Into<ConfigValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Provider for ConstantProvider {
    fn name(&self) -> &str {
        "constant"
    }

    fn provide(&self) -> ProviderResult<Option<ConfigValue>> {
        Ok(Some(self.value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_provide_value() {
        let provider = ConstantProvider::new("foo");
        assert_eq!(provider.provide().unwrap(), Some(ConfigValue::from("foo")));
    }

    #[test]
    fn test_can_provide_typed_value() {
        let provider = ConstantProvider::new(10);
        assert_eq!(provider.provide().unwrap(), Some(ConfigValue::from(10)));
    }
}
