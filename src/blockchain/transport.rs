//! JSON-RPC transport handle.
//!
//! # Responsibilities
//! - Hold the endpoint a node is reached at (scheme, host, port)
//! - Own the provider every contract factory talks through
//! - Bound each RPC call by the configured timeout
//!
//! Cloning a [`Transport`] shares the same provider. Two factories holding
//! clones of one handle observe the same node and ledger state.

use alloy::primitives::{Address, Bytes};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::blockchain::types::{ContractError, ContractResult};

struct TransportInner {
    endpoint: Url,
    provider: DynProvider,
    rpc_timeout: Duration,
}

/// Shared connection configuration for one node.
#[derive(Clone)]
pub struct Transport {
    inner: Arc<TransportInner>,
}

impl Transport {
    /// Build an HTTP transport for `endpoint`.
    ///
    /// No request is sent; an unreachable node surfaces on first use.
    pub fn connect_http(endpoint: &str, rpc_timeout: Duration) -> ContractResult<Self> {
        let url: Url = endpoint
            .parse()
            .map_err(|e| ContractError::InvalidEndpoint(format!("'{}': {}", endpoint, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ContractError::InvalidEndpoint(format!(
                "'{}': unsupported scheme {}",
                endpoint,
                url.scheme()
            )));
        }

        let provider = ProviderBuilder::new().connect_http(url.clone()).erased();

        tracing::info!(
            endpoint = %url,
            timeout_secs = rpc_timeout.as_secs(),
            "Transport configured"
        );

        Ok(Self {
            inner: Arc::new(TransportInner {
                endpoint: url,
                provider,
                rpc_timeout,
            }),
        })
    }

    /// The endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Host part of the endpoint.
    pub fn host(&self) -> &str {
        self.inner.endpoint.host_str().unwrap_or_default()
    }

    /// Port of the endpoint, falling back to the scheme default.
    pub fn port(&self) -> Option<u16> {
        self.inner.endpoint.port_or_known_default()
    }

    /// Per-request timeout.
    pub fn rpc_timeout(&self) -> Duration {
        self.inner.rpc_timeout
    }

    /// Underlying provider, for raw calls.
    pub fn provider(&self) -> &DynProvider {
        &self.inner.provider
    }

    /// True when both handles share one provider.
    pub fn same_as(&self, other: &Transport) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Network id reported by `net_version`.
    pub async fn net_version(&self) -> ContractResult<u64> {
        self.bounded(self.provider().get_net_version()).await
    }

    /// Chain id reported by `eth_chainId`.
    pub async fn chain_id(&self) -> ContractResult<u64> {
        self.bounded(self.provider().get_chain_id()).await
    }

    /// Latest block number.
    pub async fn block_number(&self) -> ContractResult<u64> {
        self.bounded(self.provider().get_block_number()).await
    }

    /// Accounts managed by the node.
    pub async fn accounts(&self) -> ContractResult<Vec<Address>> {
        self.bounded(self.provider().get_accounts()).await
    }

    /// Code deployed at `address` on the latest block.
    pub async fn code_at(&self, address: Address) -> ContractResult<Bytes> {
        self.bounded(self.provider().get_code_at(address)).await
    }

    async fn bounded<F, T>(&self, fut: F) -> ContractResult<T>
    where
        F: IntoFuture<Output = Result<T, alloy::transports::TransportError>>,
    {
        match timeout(self.inner.rpc_timeout, fut.into_future()).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::warn!(endpoint = %self.inner.endpoint, error = %e, "RPC error");
                Err(e.into())
            }
            Err(_) => {
                tracing::warn!(endpoint = %self.inner.endpoint, "RPC timeout");
                Err(ContractError::Timeout(self.inner.rpc_timeout.as_secs()))
            }
        }
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("timeout_secs", &self.inner.rpc_timeout.as_secs())
            .finish()
    }
}
