//! Contract client factory.
//!
//! A factory pairs one artifact with a transport and resolves deployed
//! instances on demand. Resolution is never cached: every call to
//! [`ContractFactory::deployed`] asks the node again.

use alloy::primitives::Address;
use std::sync::Arc;

use crate::blockchain::artifact::Artifact;
use crate::blockchain::instance::DeployedContract;
use crate::blockchain::transport::Transport;
use crate::blockchain::types::{ContractError, ContractResult};

/// Call parameters applied to every instance a factory resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxDefaults {
    /// Node-managed account calls and transactions are sent from.
    pub from: Option<Address>,

    /// Gas limit.
    pub gas: Option<u64>,

    /// Gas price in wei.
    pub gas_price: Option<u128>,
}

/// Binds an artifact to a transport.
#[derive(Debug, Clone)]
pub struct ContractFactory {
    artifact: Arc<Artifact>,
    transport: Option<Transport>,
    defaults: TxDefaults,
}

impl ContractFactory {
    /// Create a factory with no transport attached.
    pub fn new(artifact: Artifact) -> Self {
        Self {
            artifact: Arc::new(artifact),
            transport: None,
            defaults: TxDefaults::default(),
        }
    }

    /// Attach the transport used for resolution and calls.
    pub fn set_transport(&mut self, transport: Transport) {
        self.transport = Some(transport);
    }

    /// The attached transport, if any.
    pub fn transport(&self) -> Option<&Transport> {
        self.transport.as_ref()
    }

    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn contract_name(&self) -> &str {
        &self.artifact.contract_name
    }

    pub fn defaults(&self) -> &TxDefaults {
        &self.defaults
    }

    /// Replace the call defaults. Instances resolved earlier keep theirs.
    pub fn set_defaults(&mut self, defaults: TxDefaults) {
        self.defaults = defaults;
    }

    /// Set only the default sending account.
    pub fn set_default_from(&mut self, from: Address) {
        self.defaults.from = Some(from);
    }

    /// Resolve the instance deployed on the connected network.
    ///
    /// Fails with [`ContractError::DeploymentNotFound`] when the artifact has
    /// no record for the network id the node reports.
    pub async fn deployed(&self) -> ContractResult<DeployedContract> {
        let transport = self.require_transport()?;
        let network_id = transport.net_version().await?;

        let Some(deployment) = self.artifact.deployment(network_id) else {
            tracing::warn!(
                contract = %self.artifact.contract_name,
                network_id = network_id,
                "No deployment recorded for network"
            );
            return Err(ContractError::DeploymentNotFound {
                contract: self.artifact.contract_name.clone(),
                network_id,
            });
        };

        self.bind(transport, deployment.address, network_id).await
    }

    /// Bind to an explicit address on the connected network.
    pub async fn at(&self, address: Address) -> ContractResult<DeployedContract> {
        let transport = self.require_transport()?;
        let network_id = transport.net_version().await?;
        self.bind(transport, address, network_id).await
    }

    async fn bind(
        &self,
        transport: &Transport,
        address: Address,
        network_id: u64,
    ) -> ContractResult<DeployedContract> {
        let code = transport.code_at(address).await?;
        if code.is_empty() {
            return Err(ContractError::NoCodeAtAddress {
                contract: self.artifact.contract_name.clone(),
                address,
            });
        }

        tracing::debug!(
            contract = %self.artifact.contract_name,
            network_id = network_id,
            address = %address,
            "Contract resolved"
        );

        Ok(DeployedContract::new(
            self.artifact.clone(),
            transport.clone(),
            address,
            network_id,
            self.defaults.clone(),
        ))
    }

    fn require_transport(&self) -> ContractResult<&Transport> {
        self.transport
            .as_ref()
            .ok_or_else(|| ContractError::TransportNotSet(self.artifact.contract_name.clone()))
    }
}
