use anchor_lang::prelude::*;

use crate::utils::universal_address::UniversalAddress;

/// Event emitted when an integrator registers
#[event]
pub struct IntegratorRegistered {
    pub integrator: Pubkey,
    pub admin: Pubkey,
}

/// Event emitted when an adapter is added to an integrator's registry
#[event]
pub struct AdapterAdded {
    pub integrator: Pubkey,
    pub adapter: Pubkey,
    pub index: u8,
}

/// Event emitted when an adapter is enabled for a chain
#[event]
pub struct AdapterEnabled {
    pub integrator: Pubkey,
    pub chain_id: u16,
    pub adapter: Pubkey,
    pub send: bool,
}

/// Event emitted when an adapter is disabled for a chain
#[event]
pub struct AdapterDisabled {
    pub integrator: Pubkey,
    pub chain_id: u16,
    pub adapter: Pubkey,
    pub send: bool,
}

/// Event emitted when an admin transfer handshake starts
#[event]
pub struct AdminTransferInitiated {
    pub integrator: Pubkey,
    pub pending_admin: Pubkey,
}

/// Event emitted when a pending admin claims the role
#[event]
pub struct AdminClaimed {
    pub integrator: Pubkey,
    pub admin: Pubkey,
}

/// Event emitted when the admin is replaced in one step
#[event]
pub struct AdminUpdated {
    pub integrator: Pubkey,
    pub admin: Pubkey,
}

/// Event emitted when the admin role is discarded forever
#[event]
pub struct AdminDiscarded {
    pub integrator: Pubkey,
}

/// Event emitted when an outgoing message enters the outbox
#[event]
pub struct MessageSent {
    pub src_addr: UniversalAddress,
    pub sequence: u64,
    pub dst_chain: u16,
    pub dst_addr: UniversalAddress,
    pub payload_hash: [u8; 32],
    pub outstanding_adapters: u128,
}

/// Event emitted when an adapter picks up an outbox message
#[event]
pub struct MessagePickedUp {
    pub outbox_message: Pubkey,
    pub adapter: Pubkey,
    pub remaining_adapters: u128,
}

/// Event emitted when an adapter attests to an incoming message
#[event]
pub struct MessageAttested {
    pub message_hash: [u8; 32],
    pub adapter: Pubkey,
    pub index: u8,
}

/// Event emitted when an incoming message is executed
#[event]
pub struct MessageExecuted {
    pub message_hash: [u8; 32],
    pub src_chain: u16,
    pub sequence: u64,
}
