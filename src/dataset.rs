use alloy::primitives::Address;
use serde::Deserialize;

use crate::environment::ContractKey;
use crate::error::RegistryError;
use crate::registry::Contract;

/// One deployment entry: the implementation address, plus the proxy address
/// when the contract is deployed behind one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeploymentRecord {
    pub address: String,
    pub proxy_address: Option<String>,
}

/// A contract's full dataset: one deployment record per dataset key.
///
/// All three keys must be present; a document missing one fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentSet {
    pub dev: DeploymentRecord,
    pub testnet: DeploymentRecord,
    pub prod: DeploymentRecord,
}

impl DeploymentSet {
    /// Parses one embedded JSON document.
    pub fn parse(contract: Contract, source: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(source).map_err(|source| RegistryError::Dataset { contract, source })
    }

    pub fn record(&self, key: ContractKey) -> &DeploymentRecord {
        match key {
            ContractKey::Dev => &self.dev,
            ContractKey::Testnet => &self.testnet,
            ContractKey::Prod => &self.prod,
        }
    }

    /// Resolves the deployment for one dataset key.
    pub fn deployment(
        &self,
        contract: Contract,
        key: ContractKey,
    ) -> Result<Deployment, RegistryError> {
        Deployment::resolve(contract, key, self.record(key))
    }
}

/// A resolved deployment. Whether the callable address is the proxy or the
/// contract itself is decided here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Upgradeable { implementation: Address, proxy: Address },
    Fixed { address: Address },
}

impl Deployment {
    /// Builds a deployment from a raw record, validating every address.
    ///
    /// An upgradeable contract without a proxy address is a defect in the
    /// deployment records and fails with [`RegistryError::MissingAddress`].
    /// A proxy recorded for a non-upgradeable contract is ignored.
    pub fn resolve(
        contract: Contract,
        key: ContractKey,
        record: &DeploymentRecord,
    ) -> Result<Self, RegistryError> {
        let address = parse_address(contract, key, &record.address)?;

        if !contract.is_upgradeable() {
            return Ok(Deployment::Fixed { address });
        }

        let proxy = match record.proxy_address.as_deref() {
            Some(proxy) => parse_address(contract, key, proxy)?,
            None => return Err(RegistryError::MissingAddress(contract)),
        };

        Ok(Deployment::Upgradeable { implementation: address, proxy })
    }

    /// Address clients call: the proxy for upgradeable deployments, the
    /// contract itself otherwise.
    pub const fn call_address(self) -> Address {
        match self {
            Deployment::Upgradeable { proxy, .. } => proxy,
            Deployment::Fixed { address } => address,
        }
    }

    pub const fn is_upgradeable(self) -> bool {
        matches!(self, Deployment::Upgradeable { .. })
    }
}

/// Checksummed (EIP-55) address parsing. Wrong length, non-hex characters,
/// and checksum mismatches all fail here.
fn parse_address(
    contract: Contract,
    key: ContractKey,
    s: &str,
) -> Result<Address, RegistryError> {
    Address::parse_checksummed(s, None).map_err(|source| RegistryError::InvalidAddress {
        contract,
        key,
        source,
    })
}
