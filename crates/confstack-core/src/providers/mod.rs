//! Configuration value providers
//!
//! Each provider answers one question: "does your source have a value
//! for this name?" The leaf providers read a single backing source;
//! `ChainProvider` composes them into a priority order.

mod chain;
mod config_property;
mod constant;
mod environment;
mod error;
mod instance;
mod traits;

pub use chain::ChainProvider;
pub use config_property::ConfigPropertyProvider;
pub use constant::ConstantProvider;
pub use environment::EnvironmentProvider;
pub use error::{ProviderError, ProviderResult};
pub use instance::InstanceVarProvider;
pub use traits::{Provider, SharedProvider};
