/// PDA seeds for endpoint-owned accounts
pub const INTEGRATOR_CONFIG_SEED: &[u8] = b"integrator_config";
pub const INTEGRATOR_CHAIN_CONFIG_SEED: &[u8] = b"integrator_chain_config";
pub const ADAPTER_INFO_SEED: &[u8] = b"adapter_info";
pub const SEQUENCE_TRACKER_SEED: &[u8] = b"sequence_tracker";
pub const ATTESTATION_INFO_SEED: &[u8] = b"attestation_info";

/// Seed of the PDA an integrator program signs with when calling the endpoint
pub const INTEGRATOR_PROGRAM_SEED: &[u8] = b"endpoint_integrator";

/// Seed of the PDA an adapter program signs with when calling the endpoint
pub const ADAPTER_PDA_SEED: &[u8] = b"adapter_pda";
