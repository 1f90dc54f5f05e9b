//! Contract client subsystem.
//!
//! # Data Flow
//! ```text
//! artifact JSON (ABI + per-network addresses)
//!     → artifact.rs (parse)
//!     → factory.rs (artifact + shared transport)
//!     → instance.rs (resolved address, callable methods)
//!
//! RPC endpoint URL
//!     → transport.rs (provider with per-call timeout)
//! ```
//!
//! # Constraints
//! - Building a transport or factory performs no network I/O
//! - Every resolution asks the node; nothing is cached here
//! - No local signing; transactions go through node-managed accounts

pub mod artifact;
pub mod factory;
pub mod instance;
pub mod transport;
pub mod types;

pub use artifact::{Artifact, NetworkDeployment};
pub use factory::{ContractFactory, TxDefaults};
pub use instance::DeployedContract;
pub use transport::Transport;
pub use types::{ContractError, ContractResult};
