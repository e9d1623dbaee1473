//! Confstack Core
//!
//! Runtime-agnostic resolution of named configuration values from a
//! prioritized chain of sources. Callers address configuration by a
//! stable logical name ("region", "retries"). Which underlying source
//! actually supplied the value, whether a runtime-set variable, an
//! environment variable, a config file property, or a fixed default,
//! stays hidden behind the [`Provider`] abstraction.
//!
//! Parsing the config file, enumerating the environment, and building
//! the surrounding session are all external concerns: this crate only
//! consumes their results as ready-made in-memory mappings.
//!
//! ## Resolution flow
//!
//! A [`ConfigChainFactory`] wires a logical name's sources into an
//! ordered chain once, at session setup. A [`ConfigValueStore`] holds
//! the name-to-provider registry, memoizes resolved values, and answers
//! every later lookup from its cache.
//!
//! ```rust
//! use confstack_core::{
//!     ConfigChainFactory, ConfigValue, ConfigValueStore,
//!     EnvironmentMap, InstanceVarMap, ScopedConfigMap,
//! };
//!
//! let instance_vars = InstanceVarMap::new();
//! let environ = EnvironmentMap::new();
//! environ.set("APP_REGION", "eu-west-1");
//! let scoped_config = ScopedConfigMap::new();
//!
//! let factory = ConfigChainFactory::new(instance_vars, environ, scoped_config);
//! let store = ConfigValueStore::new();
//! store.set_config_provider(
//!     "region",
//!     factory
//!         .chain("region")
//!         .env_var("APP_REGION")
//!         .config_property("region")
//!         .default("us-east-1")
//!         .build(),
//! );
//!
//! let value = store.get_config_variable("region").unwrap();
//! assert_eq!(value, Some(ConfigValue::from("eu-west-1")));
//! ```

pub mod convert;
pub mod factory;
pub mod providers;
pub mod sources;
pub mod store;
pub mod value;

// Re-export commonly used types
pub use convert::{parse_bool, parse_int, ConversionFn};
pub use factory::{ConfigChainBuilder, ConfigChainFactory};
pub use providers::{
    ChainProvider, ConfigPropertyProvider, ConstantProvider, EnvironmentProvider,
    InstanceVarProvider, Provider, ProviderError, ProviderResult, SharedProvider,
};
pub use sources::{EnvironmentMap, InstanceVarMap, ScopedConfigMap};
pub use store::{ConfigValueStore, ResolutionInfo};
pub use value::ConfigValue;
