//! Provider trait definition

use std::sync::Arc;

use super::error::ProviderResult;
use crate::value::ConfigValue;

/// A single-source configuration value producer
///
/// Implementations:
/// - `InstanceVarProvider`: session-scoped runtime variables
/// - `EnvironmentProvider`: environment variables, with candidate names
/// - `ConfigPropertyProvider`: profile-scoped config file properties
/// - `ConstantProvider`: a fixed default
/// - `ChainProvider`: ordered composition with first-match-wins
///
/// `provide` is read-only with respect to the backing source.
/// `Ok(None)` means "this source has nothing for this name" and is the
/// common, expected outcome; it is distinct from a present empty string.
/// Leaf providers never fail. Only a chain's conversion step returns
/// `Err`, and that error propagates to the original caller.
pub trait Provider: Send + Sync {
    /// Human-readable name of this provider, used for source attribution
    fn name(&self) -> &str;

    /// Produce the value, or `None` if the backing source has nothing
    fn provide(&self) -> ProviderResult<Option<ConfigValue>>;
}

/// Type alias for a shared provider
pub type SharedProvider = Arc<dyn Provider>;
