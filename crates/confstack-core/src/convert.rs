//! Conversion functions applied to a chain's winning value
//!
//! A conversion function is the explicit narrowing boundary from the
//! raw source representation (usually a string) to a typed value. It
//! runs exactly once, on the winning value of a chain, and its failure
//! propagates to the caller of the lookup rather than falling back to
//! lower-priority sources.

use std::sync::Arc;

use crate::providers::{ProviderError, ProviderResult};
use crate::value::ConfigValue;

/// A pure value-to-value conversion, shared across chain clones
pub type ConversionFn = Arc<dyn Fn(ConfigValue) -> ProviderResult<ConfigValue> + Send + Sync>;

/// Converter that parses string values into integers
///
/// Values that already are integers pass through unchanged.
pub fn parse_int() -> ConversionFn {
    Arc::new(|value| match value {
        ConfigValue::Int(_) => Ok(value),
        ConfigValue::Str(s) => s
            .parse::<i64>()
            .map(ConfigValue::Int)
            .map_err(|e| ProviderError::conversion(format!("'{}' is not an integer: {}", s, e))),
        other => Err(ProviderError::conversion(format!(
            "cannot convert {} to an integer",
            other
        ))),
    })
}

/// Converter that parses string values into booleans
///
/// Accepts `true` and `false` in any case. Values that already are
/// booleans pass through unchanged.
pub fn parse_bool() -> ConversionFn {
    Arc::new(|value| match value {
        ConfigValue::Bool(_) => Ok(value),
        ConfigValue::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(ConfigValue::Bool(true)),
            "false" => Ok(ConfigValue::Bool(false)),
            _ => Err(ProviderError::conversion(format!(
                "'{}' is not a boolean",
                s
            ))),
        },
        other => Err(ProviderError::conversion(format!(
            "cannot convert {} to a boolean",
            other
        ))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(convert: &ConversionFn, value: ConfigValue) -> ProviderResult<ConfigValue> {
        (**convert)(value)
    }

    #[test]
    fn test_parse_int() {
        let convert = parse_int();
        assert_eq!(
            apply(&convert, ConfigValue::from("1")).unwrap(),
            ConfigValue::Int(1)
        );
        assert_eq!(
            apply(&convert, ConfigValue::from("-12")).unwrap(),
            ConfigValue::Int(-12)
        );
    }

    #[test]
    fn test_parse_int_passthrough() {
        let convert = parse_int();
        assert_eq!(
            apply(&convert, ConfigValue::Int(5)).unwrap(),
            ConfigValue::Int(5)
        );
    }

    #[test]
    fn test_parse_int_rejects_non_numeric() {
        let convert = parse_int();
        assert!(matches!(
            apply(&convert, ConfigValue::from("abc")),
            Err(ProviderError::Conversion(_))
        ));
        assert!(matches!(
            apply(&convert, ConfigValue::Bool(true)),
            Err(ProviderError::Conversion(_))
        ));
    }

    #[test]
    fn test_parse_bool() {
        let convert = parse_bool();
        assert_eq!(
            apply(&convert, ConfigValue::from("true")).unwrap(),
            ConfigValue::Bool(true)
        );
        assert_eq!(
            apply(&convert, ConfigValue::from("False")).unwrap(),
            ConfigValue::Bool(false)
        );
        assert_eq!(
            apply(&convert, ConfigValue::Bool(true)).unwrap(),
            ConfigValue::Bool(true)
        );
    }

    #[test]
    fn test_parse_bool_rejects_other_strings() {
        let convert = parse_bool();
        assert!(matches!(
            apply(&convert, ConfigValue::from("yes")),
            Err(ProviderError::Conversion(_))
        ));
    }
}
