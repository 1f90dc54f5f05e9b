//! Resolved on-chain contract instances.

use alloy::contract::{ContractInstance, Interface};
use alloy::dyn_abi::DynSolValue;
use alloy::json_abi::JsonAbi;
use alloy::primitives::{Address, TxHash};
use alloy::providers::DynProvider;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::time::timeout;

use crate::blockchain::artifact::Artifact;
use crate::blockchain::factory::TxDefaults;
use crate::blockchain::transport::Transport;
use crate::blockchain::types::{ContractError, ContractResult};

/// A contract at a known address, callable through its ABI.
pub struct DeployedContract {
    artifact: Arc<Artifact>,
    transport: Transport,
    network_id: u64,
    defaults: TxDefaults,
    instance: ContractInstance<DynProvider>,
}

impl DeployedContract {
    pub(crate) fn new(
        artifact: Arc<Artifact>,
        transport: Transport,
        address: Address,
        network_id: u64,
        defaults: TxDefaults,
    ) -> Self {
        let interface = Interface::new(artifact.abi.clone());
        let instance = ContractInstance::new(address, transport.provider().clone(), interface);
        Self {
            artifact,
            transport,
            network_id,
            defaults,
            instance,
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub fn contract_name(&self) -> &str {
        &self.artifact.contract_name
    }

    /// Network id the instance was resolved on.
    pub fn network_id(&self) -> u64 {
        self.network_id
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.artifact.abi
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn defaults(&self) -> &TxDefaults {
        &self.defaults
    }

    pub fn method_names(&self) -> Vec<String> {
        self.artifact.method_names()
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.artifact.abi.functions.contains_key(name)
    }

    /// Read-only call via `eth_call`.
    pub async fn call(
        &self,
        method: &str,
        args: &[DynSolValue],
    ) -> ContractResult<Vec<DynSolValue>> {
        self.ensure_method(method)?;

        let mut builder = self.instance.function(method, args)?;
        if let Some(from) = self.defaults.from {
            builder = builder.from(from);
        }
        if let Some(gas) = self.defaults.gas {
            builder = builder.gas(gas);
        }
        if let Some(gas_price) = self.defaults.gas_price {
            builder = builder.gas_price(gas_price);
        }

        let rpc_timeout = self.transport.rpc_timeout();
        match timeout(rpc_timeout, builder.call().into_future()).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(ContractError::Timeout(rpc_timeout.as_secs())),
        }
    }

    /// Submit a transaction via `eth_sendTransaction` from the default account.
    ///
    /// The node holds the key; nothing is signed locally.
    pub async fn send(&self, method: &str, args: &[DynSolValue]) -> ContractResult<TxHash> {
        self.ensure_method(method)?;
        let from = self
            .defaults
            .from
            .ok_or_else(|| ContractError::MissingSender(self.artifact.contract_name.clone()))?;

        let mut builder = self.instance.function(method, args)?.from(from);
        if let Some(gas) = self.defaults.gas {
            builder = builder.gas(gas);
        }
        if let Some(gas_price) = self.defaults.gas_price {
            builder = builder.gas_price(gas_price);
        }

        let rpc_timeout = self.transport.rpc_timeout();
        let pending = match timeout(rpc_timeout, builder.send()).await {
            Ok(result) => result?,
            Err(_) => return Err(ContractError::Timeout(rpc_timeout.as_secs())),
        };

        let tx_hash = *pending.tx_hash();
        tracing::info!(
            contract = %self.artifact.contract_name,
            method = method,
            tx_hash = %tx_hash,
            "Transaction submitted"
        );
        Ok(tx_hash)
    }

    fn ensure_method(&self, method: &str) -> ContractResult<()> {
        if self.has_method(method) {
            Ok(())
        } else {
            Err(ContractError::UnknownMethod {
                contract: self.artifact.contract_name.clone(),
                method: method.to_string(),
            })
        }
    }
}

impl std::fmt::Debug for DeployedContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployedContract")
            .field("contract", &self.artifact.contract_name)
            .field("address", &self.address())
            .field("network_id", &self.network_id)
            .finish()
    }
}
