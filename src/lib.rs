//! Token and marketplace contract clients bound to one JSON-RPC node.

pub mod bindings;
pub mod blockchain;
pub mod config;
pub mod observability;

pub use bindings::ContractBindings;
pub use blockchain::{ContractError, ContractFactory, DeployedContract, Transport};
pub use config::ContractsConfig;
