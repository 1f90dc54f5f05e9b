//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so an empty file describes a local
//! development node.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ContractsConfig {
    /// Node endpoint settings.
    pub rpc: RpcConfig,

    /// Artifact file locations.
    pub artifacts: ArtifactsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// JSON-RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Endpoint URL. Local development nodes listen on 9545 or 8545.
    pub url: String,

    /// RPC request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9545".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Paths to the contract build artifacts.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Token contract artifact.
    pub token: PathBuf,

    /// Marketplace contract artifact.
    pub marketplace: PathBuf,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            token: PathBuf::from("build/contracts/EnigmaToken.json"),
            marketplace: PathBuf::from("build/contracts/RecoverableMarketplace.json"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
