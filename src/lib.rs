//! Address book for the Ethos smart contracts on Base.
//!
//! Maps each logical contract to its deployed address per environment,
//! resolving the proxy address for upgradeable contracts, and carries the
//! interface declarations consumers bind against. The deployment records
//! are compiled into the crate; resolution is pure and needs no network
//! access.
//!
//! ```
//! use ethos_contracts::{Contract, Environment, contracts_for_environment};
//!
//! let lookup = contracts_for_environment(Environment::Testnet)?;
//! let review = &lookup[&Contract::Review];
//! assert!(review.is_proxy);
//! # Ok::<(), ethos_contracts::RegistryError>(())
//! ```

pub mod abi;
pub mod constants;
mod dataset;
mod environment;
mod error;
mod registry;

pub use dataset::{Deployment, DeploymentRecord, DeploymentSet};
pub use environment::{
    ContractKey, Environment, Network, contract_key_by_environment, is_mainnet_environment,
    network_by_environment,
};
pub use error::RegistryError;
pub use registry::{
    Contract, ContractInfo, ContractLookup, TargetContract, contracts_for_environment,
    is_target_contract,
};
