//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ContractsConfig (validated, immutable)
//!     → ContractBindings::from_config
//! ```
//!
//! All fields have defaults, so a missing file means a local development node.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ArtifactsConfig, ContractsConfig, ObservabilityConfig, RpcConfig};
