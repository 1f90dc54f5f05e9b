//! Error definitions shared by the contract wiring.

use alloy::primitives::Address;
use alloy::transports::{RpcError, TransportError};
use thiserror::Error;

/// Errors that can occur while resolving or calling contracts.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The artifact has no deployment record for the connected network.
    #[error("{contract} has not been deployed to detected network {network_id}")]
    DeploymentNotFound { contract: String, network_id: u64 },

    /// A deployment record exists but the node has no code at that address.
    #[error("Cannot create instance of {contract}; no code at address {address}")]
    NoCodeAtAddress { contract: String, address: Address },

    /// Resolution attempted before a transport was attached.
    #[error("{0} has no transport attached")]
    TransportNotSet(String),

    /// The node could not be reached.
    #[error("Transport unreachable: {0}")]
    TransportUnreachable(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The node answered with an error.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The endpoint URL could not be used.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The artifact file could not be read or parsed.
    #[error("Failed to load artifact {path}: {reason}")]
    Artifact { path: String, reason: String },

    /// The ABI does not declare the requested method.
    #[error("{contract} has no method named {method}")]
    UnknownMethod { contract: String, method: String },

    /// A transaction was requested without a default sending account.
    #[error("{0} has no default sending account")]
    MissingSender(String),

    /// Encoding, decoding or submission of a contract call failed.
    #[error("Contract call failed: {0}")]
    Call(String),
}

impl From<TransportError> for ContractError {
    fn from(err: TransportError) -> Self {
        match err {
            RpcError::Transport(kind) => ContractError::TransportUnreachable(kind.to_string()),
            other => ContractError::Rpc(other.to_string()),
        }
    }
}

impl From<alloy::contract::Error> for ContractError {
    fn from(err: alloy::contract::Error) -> Self {
        match err {
            alloy::contract::Error::TransportError(e) => e.into(),
            other => ContractError::Call(other.to_string()),
        }
    }
}

/// Result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
