//! Builder translating sparse source descriptors into ordered chains

use std::sync::Arc;

use tracing::debug;

use crate::convert::ConversionFn;
use crate::providers::{
    ChainProvider, ConfigPropertyProvider, ConstantProvider, EnvironmentProvider,
    InstanceVarProvider, SharedProvider,
};
use crate::sources::{EnvironmentMap, InstanceVarMap, ScopedConfigMap};
use crate::value::ConfigValue;

/// Factory for resolution chains over one session's sources
///
/// Holds handles to the session's instance variables, environment, and
/// profile-scoped config file, and wires them into providers in the
/// canonical priority order:
///
/// 1. instance variable (on by default, keyed by the logical name)
/// 2. environment variable(s), in the order the candidates were given
/// 3. config file property
/// 4. constant default
///
/// Source categories not described are simply not in the chain. The
/// factory runs at wiring time only; it is not on the lookup path.
///
/// # Example
///
/// ```
/// use confstack_core::{ConfigChainFactory, EnvironmentMap, InstanceVarMap, ScopedConfigMap};
///
/// let factory = ConfigChainFactory::new(
///     InstanceVarMap::new(),
///     EnvironmentMap::new(),
///     ScopedConfigMap::new(),
/// );
/// let provider = factory
///     .chain("region")
///     .env_var("APP_REGION")
///     .config_property("region")
///     .default("us-east-1")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigChainFactory {
    instance_vars: InstanceVarMap,
    environ: EnvironmentMap,
    scoped_config: ScopedConfigMap,
}

impl ConfigChainFactory {
    /// Create a factory over the given session sources
    pub fn new(
        instance_vars: InstanceVarMap,
        environ: EnvironmentMap,
        scoped_config: ScopedConfigMap,
    ) -> Self {
        Self {
            instance_vars,
            environ,
            scoped_config,
        }
    }

    /// Start describing the sources for a logical name
    pub fn chain(&self, logical_name: impl Into<String>) -> ConfigChainBuilder<'_> {
        ConfigChainBuilder {
            factory: self,
            logical_name: logical_name.into(),
            instance: true,
            env_names: Vec::new(),
            config_property: None,
            default: None,
            conversion: None,
        }
    }
}

/// Sparse description of one logical name's sources
///
/// Produced by [`ConfigChainFactory::chain`]; every source category is
/// optional except the instance variable, which is on by default and
/// can be switched off with [`instance(false)`](Self::instance).
pub struct ConfigChainBuilder<'a> {
    factory: &'a ConfigChainFactory,
    logical_name: String,
    instance: bool,
    env_names: Vec<String>,
    config_property: Option<String>,
    default: Option<ConfigValue>,
    conversion: Option<ConversionFn>,
}

impl ConfigChainBuilder<'_> {
    /// Include or exclude the instance variable source
    ///
    /// When included, the logical name itself is the instance variable
    /// key.
    pub fn instance(mut self, include: bool) -> Self {
        self.instance = include;
        self
    }

    /// Add one candidate environment variable name
    ///
    /// May be called repeatedly; earlier candidates win.
    pub fn env_var(mut self, name: impl Into<String>) -> Self {
        self.env_names.push(name.into());
        self
    }

    /// Add several candidate environment variable names, in order
    pub fn env_vars(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.env_names.extend(names);
        self
    }

    /// Read the given property from the scoped config file
    pub fn config_property(mut self, name: impl Into<String>) -> Self {
        self.config_property = Some(name.into());
        self
    }

    /// Fall back to a fixed default when no other source has a value
    pub fn default(mut self, value: impl Into<ConfigValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Pass the winning value through a conversion function
    pub fn convert(mut self, conversion: ConversionFn) -> Self {
        self.conversion = Some(conversion);
        self
    }

    /// Assemble the provider, ready for registration in a store
    ///
    /// A single described source without a conversion comes back as the
    /// bare provider; anything else is wrapped in a [`ChainProvider`].
    pub fn build(self) -> SharedProvider {
        let mut providers: Vec<SharedProvider> = Vec::new();

        if self.instance {
            providers.push(Arc::new(InstanceVarProvider::new(
                &self.logical_name,
                self.factory.instance_vars.clone(),
            )));
        }
        if !self.env_names.is_empty() {
            providers.push(Arc::new(EnvironmentProvider::with_candidates(
                self.env_names,
                self.factory.environ.clone(),
            )));
        }
        if let Some(property) = self.config_property {
            providers.push(Arc::new(ConfigPropertyProvider::new(
                property,
                self.factory.scoped_config.clone(),
            )));
        }
        if let Some(value) = self.default {
            providers.push(Arc::new(ConstantProvider::new(value)));
        }

        debug!(
            logical_name = %self.logical_name,
            sources = providers.len(),
            "built config chain"
        );

        match self.conversion {
            None if providers.len() == 1 => providers.remove(0),
            None => Arc::new(ChainProvider::new(providers)),
            Some(conversion) => Arc::new(ChainProvider::with_conversion(providers, conversion)),
        }
    }
}
