use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;

use crate::constants;
use crate::dataset::DeploymentSet;
use crate::environment::{Environment, contract_key_by_environment};
use crate::error::RegistryError;

/// Logical identifiers for the deployed Ethos contracts, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Contract {
    Attestation,
    ContractAddressManager,
    Discussion,
    InteractionControl,
    Profile,
    ReputationMarket,
    Review,
    SignatureVerifier,
    Vote,
    Vouch,
}

impl Contract {
    /// The fixed identifier list. Lookup iteration follows this order.
    pub const ALL: [Contract; 10] = [
        Contract::Attestation,
        Contract::ContractAddressManager,
        Contract::Discussion,
        Contract::InteractionControl,
        Contract::Profile,
        Contract::ReputationMarket,
        Contract::Review,
        Contract::SignatureVerifier,
        Contract::Vote,
        Contract::Vouch,
    ];

    /// Identifier string, as used in configuration and dataset file names.
    pub const fn id(self) -> &'static str {
        match self {
            Contract::Attestation => "attestation",
            Contract::ContractAddressManager => "contractAddressManager",
            Contract::Discussion => "discussion",
            Contract::InteractionControl => "interactionControl",
            Contract::Profile => "profile",
            Contract::ReputationMarket => "reputationMarket",
            Contract::Review => "review",
            Contract::SignatureVerifier => "signatureVerifier",
            Contract::Vote => "vote",
            Contract::Vouch => "vouch",
        }
    }

    /// Name the contract was deployed under.
    pub const fn contract_name(self) -> &'static str {
        match self {
            Contract::Attestation => "EthosAttestation",
            Contract::ContractAddressManager => "ContractAddressManager",
            Contract::Discussion => "EthosDiscussion",
            Contract::InteractionControl => "InteractionControl",
            Contract::Profile => "EthosProfile",
            Contract::ReputationMarket => "ReputationMarket",
            Contract::Review => "EthosReview",
            Contract::SignatureVerifier => "SignatureVerifier",
            Contract::Vote => "EthosVote",
            Contract::Vouch => "EthosVouch",
        }
    }

    /// Symbolic name the contract is registered under with the on-chain
    /// address manager.
    pub const fn smart_contract_name(self) -> &'static str {
        match self {
            Contract::Attestation => constants::ETHOS_ATTESTATION,
            Contract::ContractAddressManager => constants::ETHOS_CONTRACT_ADDRESS_MANAGER,
            Contract::Discussion => constants::ETHOS_DISCUSSION,
            Contract::InteractionControl => constants::ETHOS_INTERACTION_CONTROL,
            Contract::Profile => constants::ETHOS_PROFILE,
            Contract::ReputationMarket => constants::ETHOS_REPUTATION_MARKET,
            Contract::Review => constants::ETHOS_REVIEW,
            Contract::SignatureVerifier => constants::ETHOS_SIGNATURE_VERIFIER,
            Contract::Vote => constants::ETHOS_VOTE,
            Contract::Vouch => constants::ETHOS_VOUCH,
        }
    }

    /// Upgradeable contracts sit behind a proxy; the proxy address is the
    /// one clients call.
    pub const fn is_upgradeable(self) -> bool {
        !matches!(
            self,
            Contract::ContractAddressManager
                | Contract::InteractionControl
                | Contract::SignatureVerifier
        )
    }

    /// Alias carried into the lookup entry. The address manager does not
    /// register itself, and the signature verifier is only called internally
    /// by the other contracts, so neither carries one.
    pub const fn alias(self) -> Option<&'static str> {
        match self {
            Contract::ContractAddressManager | Contract::SignatureVerifier => None,
            _ => Some(self.smart_contract_name()),
        }
    }

    /// Embedded deployment document for this contract.
    fn dataset(self) -> &'static str {
        match self {
            Contract::Attestation => include_str!("../data/attestation.json"),
            Contract::ContractAddressManager => {
                include_str!("../data/contractAddressManager.json")
            }
            Contract::Discussion => include_str!("../data/discussion.json"),
            Contract::InteractionControl => include_str!("../data/interactionControl.json"),
            Contract::Profile => include_str!("../data/profile.json"),
            Contract::ReputationMarket => include_str!("../data/reputationMarket.json"),
            Contract::Review => include_str!("../data/review.json"),
            Contract::SignatureVerifier => include_str!("../data/signatureVerifier.json"),
            Contract::Vote => include_str!("../data/vote.json"),
            Contract::Vouch => include_str!("../data/vouch.json"),
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Contract {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Contract::ALL
            .into_iter()
            .find(|contract| contract.id() == s)
            .ok_or_else(|| RegistryError::UnknownContract(s.to_string()))
    }
}

/// One resolved lookup entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractInfo {
    /// Name the contract was deployed under.
    pub name: &'static str,
    /// Address clients call: the proxy for upgradeable contracts.
    pub address: Address,
    pub is_proxy: bool,
    pub is_upgradeable: bool,
    /// Address-manager symbol, where the contract is registered with it.
    pub alias: Option<&'static str>,
}

/// Resolved addresses for every contract, keyed by identifier.
pub type ContractLookup = BTreeMap<Contract, ContractInfo>;

/// Resolves the full contract lookup for an environment.
///
/// Every one of the 10 identifiers is present in the result; there is no
/// partial result on failure.
///
/// # Errors
///
/// Fails when an upgradeable contract has no proxy address recorded for the
/// environment's dataset key, or when a record holds a malformed address.
pub fn contracts_for_environment(
    environment: Environment,
) -> Result<ContractLookup, RegistryError> {
    let key = contract_key_by_environment(environment);
    let mut lookup = ContractLookup::new();

    for contract in Contract::ALL {
        let set = DeploymentSet::parse(contract, contract.dataset())?;
        let deployment = set.deployment(contract, key)?;

        lookup.insert(
            contract,
            ContractInfo {
                name: contract.contract_name(),
                address: deployment.call_address(),
                is_proxy: deployment.is_upgradeable(),
                is_upgradeable: deployment.is_upgradeable(),
                alias: contract.alias(),
            },
        );
    }

    Ok(lookup)
}

/// Contracts that accept review, vouch, attestation and discussion actions:
/// the actionable relationship targets, as opposed to infrastructure
/// contracts like the address manager or the signature verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetContract {
    Attestation,
    Review,
    Vouch,
    Discussion,
}

impl TargetContract {
    pub const ALL: [TargetContract; 4] = [
        TargetContract::Attestation,
        TargetContract::Review,
        TargetContract::Vouch,
        TargetContract::Discussion,
    ];

    /// The registry identifier this target resolves to.
    pub const fn contract(self) -> Contract {
        match self {
            TargetContract::Attestation => Contract::Attestation,
            TargetContract::Review => Contract::Review,
            TargetContract::Vouch => Contract::Vouch,
            TargetContract::Discussion => Contract::Discussion,
        }
    }

    pub const fn id(self) -> &'static str {
        self.contract().id()
    }
}

impl From<TargetContract> for Contract {
    fn from(target: TargetContract) -> Self {
        target.contract()
    }
}

impl fmt::Display for TargetContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TargetContract {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetContract::ALL
            .into_iter()
            .find(|target| target.id() == s)
            .ok_or_else(|| RegistryError::NotTargetContract(s.to_string()))
    }
}

/// True when the string names one of the four target contracts.
pub fn is_target_contract(value: &str) -> bool {
    TargetContract::from_str(value).is_ok()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn every_environment_resolves_all_contracts_in_order() {
        for environment in Environment::ALL {
            let lookup = contracts_for_environment(environment).unwrap();

            assert_eq!(lookup.len(), Contract::ALL.len());
            let order: Vec<Contract> = lookup.keys().copied().collect();
            assert_eq!(order, Contract::ALL);
        }
    }

    #[test]
    fn resolved_addresses_match_the_deployment_records() {
        for environment in Environment::ALL {
            let key = contract_key_by_environment(environment);
            let lookup = contracts_for_environment(environment).unwrap();

            for contract in Contract::ALL {
                let info = &lookup[&contract];
                let set = DeploymentSet::parse(contract, contract.dataset()).unwrap();
                let record = set.record(key);

                let expected = if contract.is_upgradeable() {
                    record.proxy_address.clone().unwrap()
                } else {
                    record.address.clone()
                };

                // Display renders the EIP-55 checksummed form, which the
                // records are stored in.
                assert_eq!(info.address.to_string(), expected);
                assert_eq!(info.is_proxy, info.is_upgradeable);
                assert_eq!(info.is_upgradeable, contract.is_upgradeable());
                assert_eq!(info.name, contract.contract_name());
                assert_eq!(info.alias, contract.alias());
            }
        }
    }

    #[test]
    fn local_shares_the_dev_contract_set() {
        let local = contracts_for_environment(Environment::Local).unwrap();
        let dev = contracts_for_environment(Environment::Dev).unwrap();
        assert_eq!(local, dev);

        let prod = contracts_for_environment(Environment::Prod).unwrap();
        assert_ne!(local[&Contract::Attestation], prod[&Contract::Attestation]);
    }

    #[test]
    fn known_deployments_spot_checks() {
        let dev = contracts_for_environment(Environment::Dev).unwrap();
        assert_eq!(
            dev[&Contract::Attestation].address,
            address!("906f7DAFB723e73F8e3617D199D3A30646AE913f")
        );
        assert_eq!(
            dev[&Contract::ContractAddressManager].address,
            address!("38C31174907de138E8C0dd9e1f472432413c4f39")
        );

        let prod = contracts_for_environment(Environment::Prod).unwrap();
        assert_eq!(
            prod[&Contract::Review].address,
            address!("8b84322D6D7132BADF2AAcE17E083Ba9575C4852")
        );
    }

    #[test]
    fn aliases_cover_everything_but_the_infrastructure_pair() {
        let lookup = contracts_for_environment(Environment::Dev).unwrap();

        assert_eq!(
            lookup[&Contract::Attestation].alias,
            Some(constants::ETHOS_ATTESTATION)
        );
        assert_eq!(
            lookup[&Contract::InteractionControl].alias,
            Some(constants::ETHOS_INTERACTION_CONTROL)
        );
        assert_eq!(lookup[&Contract::ContractAddressManager].alias, None);
        assert_eq!(lookup[&Contract::SignatureVerifier].alias, None);

        let attached = lookup.values().filter(|info| info.alias.is_some()).count();
        assert_eq!(attached, 8);
    }

    #[test]
    fn smart_contract_names_are_total() {
        for contract in Contract::ALL {
            let name = contract.smart_contract_name();
            assert!(name.starts_with("ETHOS_"));
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
        assert_eq!(Contract::Vouch.smart_contract_name(), "ETHOS_VOUCH");
        assert_eq!(
            Contract::ContractAddressManager.smart_contract_name(),
            "ETHOS_CONTRACT_ADDRESS_MANAGER"
        );
    }

    #[test]
    fn contract_identifiers_round_trip() {
        for contract in Contract::ALL {
            assert_eq!(contract.id().parse::<Contract>().unwrap(), contract);
            assert_eq!(contract.to_string(), contract.id());
        }
        assert!("escrow".parse::<Contract>().is_err());
        assert!("Attestation".parse::<Contract>().is_err());
    }

    #[test]
    fn target_contracts_are_exactly_the_four_actionable_ones() {
        assert!(is_target_contract("attestation"));
        assert!(is_target_contract("review"));
        assert!(is_target_contract("vouch"));
        assert!(is_target_contract("discussion"));

        assert!(!is_target_contract("vote"));
        assert!(!is_target_contract("profile"));
        assert!(!is_target_contract("contractAddressManager"));
        assert!(!is_target_contract(""));
        assert!(!is_target_contract("Vouch"));
        assert!(!is_target_contract("ETHOS_REVIEW"));
    }

    #[test]
    fn target_contract_conversions() {
        for target in TargetContract::ALL {
            assert_eq!(target.id().parse::<TargetContract>().unwrap(), target);
            assert!(is_target_contract(target.id()));
        }
        assert_eq!(Contract::from(TargetContract::Review), Contract::Review);
        assert_eq!(Contract::from(TargetContract::Discussion), Contract::Discussion);
        assert!("vote".parse::<TargetContract>().is_err());
    }
}
