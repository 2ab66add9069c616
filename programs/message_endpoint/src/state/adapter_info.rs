use anchor_lang::prelude::*;

/// A registered adapter for one integrator.
///
/// The (integrator, adapter) pair is unique by PDA derivation; the index is
/// assigned once at registration and never reused. Adapters are only ever
/// enabled or disabled per chain, never deregistered.
#[account]
pub struct AdapterInfo {
    /// PDA bump seed
    pub bump: u8,

    /// Program ID of the integrator, used as a PDA seed
    pub integrator_program_id: Pubkey,

    /// Program ID of the adapter, used as a PDA seed
    pub adapter_program_id: Pubkey,

    /// Position of the adapter in the integrator's registry; doubles as
    /// its bit position in every bitmap
    pub index: u8,
}

impl AdapterInfo {
    pub const SIZE: usize = 1   // bump
        + 32                    // integrator_program_id
        + 32                    // adapter_program_id
        + 1;                    // index
}
