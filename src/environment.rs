use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Deployment environment the off-chain services run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Dev,
    Testnet,
    Prod,
}

/// Base network a contract set is deployed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    BaseSepolia,
    BaseMainnet,
}

/// Key selecting a deployment record inside a contract's dataset.
///
/// There is no `local` key: local development shares the dev deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKey {
    Dev,
    Testnet,
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Local,
        Environment::Dev,
        Environment::Testnet,
        Environment::Prod,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Testnet => "testnet",
            Environment::Prod => "prod",
        }
    }
}

impl Network {
    pub const fn as_str(self) -> &'static str {
        match self {
            Network::BaseSepolia => "base-sepolia",
            Network::BaseMainnet => "base-mainnet",
        }
    }

    /// Canonical chain id (Base Sepolia 84532, Base mainnet 8453).
    pub const fn chain_id(self) -> u64 {
        match self {
            Network::BaseSepolia => 84532,
            Network::BaseMainnet => 8453,
        }
    }
}

impl ContractKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContractKey::Dev => "dev",
            ContractKey::Testnet => "testnet",
            ContractKey::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContractKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "testnet" => Ok(Environment::Testnet),
            "prod" => Ok(Environment::Prod),
            other => Err(RegistryError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Network a given environment's contracts are deployed on. Everything
/// except prod runs on Base Sepolia.
pub fn network_by_environment(environment: Environment) -> Network {
    match environment {
        Environment::Local | Environment::Dev | Environment::Testnet => Network::BaseSepolia,
        Environment::Prod => Network::BaseMainnet,
    }
}

pub fn is_mainnet_environment(environment: Environment) -> bool {
    network_by_environment(environment) == Network::BaseMainnet
}

/// Dataset key for an environment. Both local and dev environments use the
/// same contract addresses.
pub fn contract_key_by_environment(environment: Environment) -> ContractKey {
    match environment {
        Environment::Local | Environment::Dev => ContractKey::Dev,
        Environment::Testnet => ContractKey::Testnet,
        Environment::Prod => ContractKey::Prod,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prod_is_the_only_mainnet_environment() {
        assert_eq!(network_by_environment(Environment::Local), Network::BaseSepolia);
        assert_eq!(network_by_environment(Environment::Dev), Network::BaseSepolia);
        assert_eq!(network_by_environment(Environment::Testnet), Network::BaseSepolia);
        assert_eq!(network_by_environment(Environment::Prod), Network::BaseMainnet);

        for environment in Environment::ALL {
            assert_eq!(
                is_mainnet_environment(environment),
                network_by_environment(environment) == Network::BaseMainnet,
            );
            assert_eq!(
                is_mainnet_environment(environment),
                environment == Environment::Prod,
            );
        }
    }

    #[test]
    fn local_collapses_to_the_dev_key() {
        assert_eq!(contract_key_by_environment(Environment::Local), ContractKey::Dev);
        assert_eq!(contract_key_by_environment(Environment::Dev), ContractKey::Dev);
        assert_eq!(contract_key_by_environment(Environment::Testnet), ContractKey::Testnet);
        assert_eq!(contract_key_by_environment(Environment::Prod), ContractKey::Prod);
    }

    #[test]
    fn environment_strings_round_trip() {
        for environment in Environment::ALL {
            assert_eq!(environment.as_str().parse::<Environment>().unwrap(), environment);
        }
        assert!("staging".parse::<Environment>().is_err());
        assert!("Dev".parse::<Environment>().is_err());
    }

    #[test]
    fn network_constants() {
        assert_eq!(Network::BaseSepolia.as_str(), "base-sepolia");
        assert_eq!(Network::BaseMainnet.as_str(), "base-mainnet");
        assert_eq!(Network::BaseSepolia.chain_id(), 84532);
        assert_eq!(Network::BaseMainnet.chain_id(), 8453);
    }
}
