// Environment variable the CLI reads the default environment from.
pub const ETHOS_ENV_VAR: &str = "ETHOS_ENV";

// Symbolic names the contracts are registered under with the on-chain
// contract address manager.
pub const ETHOS_ATTESTATION: &str = "ETHOS_ATTESTATION";
pub const ETHOS_CONTRACT_ADDRESS_MANAGER: &str = "ETHOS_CONTRACT_ADDRESS_MANAGER";
pub const ETHOS_DISCUSSION: &str = "ETHOS_DISCUSSION";
pub const ETHOS_INTERACTION_CONTROL: &str = "ETHOS_INTERACTION_CONTROL";
pub const ETHOS_PROFILE: &str = "ETHOS_PROFILE";
pub const ETHOS_REPUTATION_MARKET: &str = "ETHOS_REPUTATION_MARKET";
pub const ETHOS_REVIEW: &str = "ETHOS_REVIEW";
pub const ETHOS_SIGNATURE_VERIFIER: &str = "ETHOS_SIGNATURE_VERIFIER";
pub const ETHOS_VOTE: &str = "ETHOS_VOTE";
pub const ETHOS_VOUCH: &str = "ETHOS_VOUCH";
