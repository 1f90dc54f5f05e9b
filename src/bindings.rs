//! Token and marketplace contract bindings.
//!
//! Builds one [`Transport`] and attaches it to the two contract factories the
//! application talks to. Construction is pure composition; the node is first
//! contacted when a contract is resolved.

use std::time::Duration;

use crate::blockchain::{
    Artifact, ContractFactory, ContractResult, DeployedContract, Transport,
};
use crate::config::ContractsConfig;

/// The application's contract handles, sharing one transport.
#[derive(Debug, Clone)]
pub struct ContractBindings {
    transport: Transport,
    token: ContractFactory,
    marketplace: ContractFactory,
}

impl ContractBindings {
    /// Bind both artifacts to `transport`.
    pub fn new(token: Artifact, marketplace: Artifact, transport: Transport) -> Self {
        let mut token = ContractFactory::new(token);
        let mut marketplace = ContractFactory::new(marketplace);
        token.set_transport(transport.clone());
        marketplace.set_transport(transport.clone());

        tracing::info!(
            endpoint = %transport.endpoint(),
            token = %token.contract_name(),
            marketplace = %marketplace.contract_name(),
            "Contract bindings initialized"
        );

        Self {
            transport,
            token,
            marketplace,
        }
    }

    /// Load the configured artifacts and build the transport.
    pub fn from_config(config: &ContractsConfig) -> ContractResult<Self> {
        let token = Artifact::load(&config.artifacts.token)?;
        let marketplace = Artifact::load(&config.artifacts.marketplace)?;
        let transport = Transport::connect_http(
            &config.rpc.url,
            Duration::from_secs(config.rpc.timeout_secs),
        )?;

        Ok(Self::new(token, marketplace, transport))
    }

    /// Resolve the token contract on the connected network.
    pub async fn resolve_token_contract(&self) -> ContractResult<DeployedContract> {
        self.token.deployed().await
    }

    /// Resolve the marketplace contract on the connected network.
    pub async fn resolve_marketplace_contract(&self) -> ContractResult<DeployedContract> {
        self.marketplace.deployed().await
    }

    /// Shared transport, for raw calls and account listing.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn token_factory(&self) -> &ContractFactory {
        &self.token
    }

    pub fn token_factory_mut(&mut self) -> &mut ContractFactory {
        &mut self.token
    }

    pub fn marketplace_factory(&self) -> &ContractFactory {
        &self.marketplace
    }

    pub fn marketplace_factory_mut(&mut self) -> &mut ContractFactory {
        &mut self.marketplace
    }
}
