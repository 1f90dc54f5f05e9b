//! Contract build artifacts.
//!
//! An artifact is the JSON file produced by the contract build: the ABI plus
//! one deployment record per network the contract was migrated to. Only the
//! keys below are read; bytecode, sources and compiler metadata are ignored.

use alloy::json_abi::JsonAbi;
use alloy::primitives::{Address, TxHash};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::blockchain::types::{ContractError, ContractResult};

/// Per-network deployment record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDeployment {
    /// Address the contract was deployed at.
    pub address: Address,

    /// Hash of the deployment transaction, when recorded.
    #[serde(default)]
    pub transaction_hash: Option<TxHash>,
}

/// Interface descriptor for one contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Contract name as declared in source.
    pub contract_name: String,

    /// Contract ABI.
    pub abi: JsonAbi,

    /// Deployments keyed by network id (decimal string).
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkDeployment>,
}

impl Artifact {
    /// Parse an artifact from JSON text.
    pub fn from_json(json: &str) -> ContractResult<Self> {
        serde_json::from_str(json).map_err(|e| ContractError::Artifact {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Read and parse an artifact file.
    pub fn load(path: &Path) -> ContractResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ContractError::Artifact {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let artifact: Artifact =
            serde_json::from_str(&content).map_err(|e| ContractError::Artifact {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            contract = %artifact.contract_name,
            networks = artifact.networks.len(),
            "Artifact loaded"
        );

        Ok(artifact)
    }

    /// Deployment record for a network id, if any.
    pub fn deployment(&self, network_id: u64) -> Option<&NetworkDeployment> {
        self.networks.get(&network_id.to_string())
    }

    /// Function names declared by the ABI, sorted.
    pub fn method_names(&self) -> Vec<String> {
        // `functions` is a BTreeMap keyed by name, so overloads collapse and order is stable.
        self.abi.functions.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TOKEN_JSON: &str = r#"{
        "contractName": "EnigmaToken",
        "abi": [
            {"type": "function", "name": "totalSupply", "inputs": [],
             "outputs": [{"name": "", "type": "uint256"}], "stateMutability": "view"},
            {"type": "function", "name": "transfer",
             "inputs": [{"name": "to", "type": "address"}, {"name": "value", "type": "uint256"}],
             "outputs": [{"name": "", "type": "bool"}], "stateMutability": "nonpayable"}
        ],
        "bytecode": "0x6080",
        "networks": {
            "5777": {
                "address": "0x345ca3e014aaf5dca488057592ee47305d9b3e10",
                "transactionHash":
                    "0x1111111111111111111111111111111111111111111111111111111111111111"
            }
        }
    }"#;

    #[test]
    fn test_parse_artifact() {
        let artifact = Artifact::from_json(TOKEN_JSON).unwrap();
        assert_eq!(artifact.contract_name, "EnigmaToken");
        assert_eq!(artifact.method_names(), vec!["totalSupply", "transfer"]);

        let deployment = artifact.deployment(5777).unwrap();
        assert_eq!(
            deployment.address.to_string().to_lowercase(),
            "0x345ca3e014aaf5dca488057592ee47305d9b3e10"
        );
        assert!(deployment.transaction_hash.is_some());
        assert!(artifact.deployment(1).is_none());
    }

    #[test]
    fn test_missing_networks_is_empty() {
        let artifact = Artifact::from_json(r#"{"contractName": "Bare", "abi": []}"#).unwrap();
        assert!(artifact.networks.is_empty());
        assert!(artifact.method_names().is_empty());
    }

    #[test]
    fn test_malformed_artifact() {
        let result = Artifact::from_json(r#"{"abi": "not an abi"}"#);
        assert!(matches!(result, Err(ContractError::Artifact { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TOKEN_JSON.as_bytes()).unwrap();

        let artifact = Artifact::load(file.path()).unwrap();
        assert_eq!(artifact.contract_name, "EnigmaToken");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Artifact::load(Path::new("/nonexistent/EnigmaToken.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/EnigmaToken.json"));
    }
}
