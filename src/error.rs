use alloy::primitives::AddressError;
use thiserror::Error;

use crate::environment::ContractKey;
use crate::registry::Contract;

/// Errors raised while resolving the embedded deployment data.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An upgradeable contract has no proxy address recorded for the
    /// resolved dataset key. This is a defect in the deployment records,
    /// not a runtime condition worth retrying.
    #[error("missing contract address for {0}")]
    MissingAddress(Contract),

    #[error("invalid address for {contract} ({key}): {source}")]
    InvalidAddress {
        contract: Contract,
        key: ContractKey,
        #[source]
        source: AddressError,
    },

    #[error("malformed deployment record for {contract}: {source}")]
    Dataset {
        contract: Contract,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("unknown contract: {0}")]
    UnknownContract(String),

    #[error("not a target contract: {0}")]
    NotTargetContract(String),
}
