//! Chained provider with first-match-wins behavior

use tracing::trace;

use super::error::ProviderResult;
use super::traits::{Provider, SharedProvider};
use crate::convert::ConversionFn;
use crate::value::ConfigValue;

/// A provider that composes other providers with priority fallback
///
/// Resolution walks the providers in order and returns the first
/// non-absent result. An optional conversion function is applied to the
/// winning value only, never to an absent result; if it fails, the
/// error propagates to the caller rather than falling through to later
/// providers.
///
/// An empty chain is legal and always resolves to absent. The chain
/// carries no cache of its own; each call re-resolves.
///
/// # Example
///
/// ```
/// use confstack_core::{ChainProvider, ConstantProvider, Provider, SharedProvider};
/// use std::sync::Arc;
///
/// let providers: Vec<SharedProvider> = vec![Arc::new(ConstantProvider::new("foo"))];
/// let chain = ChainProvider::new(providers);
/// assert!(chain.provide().unwrap().is_some());
/// ```
pub struct ChainProvider {
    providers: Vec<SharedProvider>,
    conversion: Option<ConversionFn>,
}

impl ChainProvider {
    /// Create a chain over the given providers, in precedence order
    pub fn new(providers: Vec<SharedProvider>) -> Self {
        Self {
            providers,
            conversion: None,
        }
    }

    /// Create a chain whose winning value is passed through `conversion`
    pub fn with_conversion(providers: Vec<SharedProvider>, conversion: ConversionFn) -> Self {
        Self {
            providers,
            conversion: Some(conversion),
        }
    }

    /// The providers in this chain, in precedence order
    pub fn providers(&self) -> &[SharedProvider] {
        &self.providers
    }
}

impl Provider for ChainProvider {
    fn name(&self) -> &str {
        "chain"
    }

    fn provide(&self) -> ProviderResult<Option<ConfigValue>> {
        for provider in &self.providers {
            if let Some(value) = provider.provide()? {
                trace!(source = provider.name(), "chain resolved a value");
                return match self.conversion.as_deref() {
                    Some(convert) => convert(value).map(Some),
                    None => Ok(Some(value)),
                };
            }
        }
        Ok(None)
    }
}

// Arc<dyn Provider> has no Debug; list the provider names instead
impl std::fmt::Debug for ChainProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("ChainProvider")
            .field("providers", &names)
            .field("has_conversion", &self.conversion.is_some())
            .finish()
    }
}
