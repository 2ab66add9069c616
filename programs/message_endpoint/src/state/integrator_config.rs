use anchor_lang::prelude::*;

use crate::errors::EndpointError;

/// Governance state of an integrator's configuration.
///
/// Modeled as a tagged state machine so a pending transfer can never
/// coexist with a discarded admin.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminState {
    /// A single admin with full authority over the integrator's config
    Active { admin: Pubkey },

    /// A two-step handshake is underway; config changes are locked until
    /// the pending admin claims
    PendingTransfer { admin: Pubkey, pending_admin: Pubkey },

    /// The admin was discarded; the config can never change again
    Immutable,
}

impl AdminState {
    /// Serialized size: discriminant + largest variant (two pubkeys)
    pub const SIZE: usize = 1 + 32 + 32;
}

/// Per-integrator root account: governance state plus the registry of
/// adapters in registration order.
#[account]
pub struct IntegratorConfig {
    /// PDA bump seed
    pub bump: u8,

    /// Program ID of the integrator, used as a PDA seed
    pub integrator_program_id: Pubkey,

    /// Current governance state
    pub admin_state: AdminState,

    /// Registered adapter program IDs; an adapter's index is its position
    /// in this list and never changes
    pub adapters: Vec<Pubkey>,
}

impl IntegratorConfig {
    /// Hard cap on adapters per integrator, matching the bitmap width
    pub const MAX_ADAPTERS: usize = 128;

    /// Account size excluding the 8-byte discriminator
    pub const SIZE: usize = 1                           // bump
        + 32                                            // integrator_program_id
        + AdminState::SIZE                              // admin_state
        + 4 + (32 * Self::MAX_ADAPTERS);                // adapters vec

    /// Check that `caller` may perform admin-gated configuration changes
    pub fn verify_admin(&self, caller: &Pubkey) -> Result<()> {
        match &self.admin_state {
            AdminState::Active { admin } => {
                require_keys_eq!(*admin, *caller, EndpointError::CallerNotAuthorized);
                Ok(())
            }
            AdminState::PendingTransfer { .. } => err!(EndpointError::AdminTransferInProgress),
            AdminState::Immutable => err!(EndpointError::CallerNotAuthorized),
        }
    }

    /// Begin the two-step admin handshake
    pub fn transfer_admin(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<()> {
        match self.admin_state {
            AdminState::Active { admin } => {
                require_keys_eq!(admin, *caller, EndpointError::CallerNotAuthorized);
                self.admin_state = AdminState::PendingTransfer {
                    admin,
                    pending_admin: new_admin,
                };
                Ok(())
            }
            AdminState::PendingTransfer { .. } => err!(EndpointError::AdminTransferInProgress),
            AdminState::Immutable => err!(EndpointError::CallerNotAuthorized),
        }
    }

    /// Complete the handshake; only the pending admin may claim
    pub fn claim_admin(&mut self, caller: &Pubkey) -> Result<()> {
        match self.admin_state {
            AdminState::PendingTransfer { pending_admin, .. } => {
                require_keys_eq!(pending_admin, *caller, EndpointError::CallerNotAuthorized);
                self.admin_state = AdminState::Active {
                    admin: pending_admin,
                };
                Ok(())
            }
            _ => err!(EndpointError::NoAdminTransferInProgress),
        }
    }

    /// Replace the admin in one step, bypassing the claim handshake
    pub fn update_admin(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<()> {
        match self.admin_state {
            AdminState::Active { admin } => {
                require_keys_eq!(admin, *caller, EndpointError::CallerNotAuthorized);
                self.admin_state = AdminState::Active { admin: new_admin };
                Ok(())
            }
            AdminState::PendingTransfer { .. } => err!(EndpointError::AdminTransferInProgress),
            AdminState::Immutable => err!(EndpointError::CallerNotAuthorized),
        }
    }

    /// Make the config immutable. Terminal: no admin-gated call ever
    /// succeeds again for this integrator.
    pub fn discard_admin(&mut self, caller: &Pubkey) -> Result<()> {
        match self.admin_state {
            AdminState::Active { admin } => {
                require_keys_eq!(admin, *caller, EndpointError::CallerNotAuthorized);
                self.admin_state = AdminState::Immutable;
                Ok(())
            }
            AdminState::PendingTransfer { .. } => err!(EndpointError::AdminTransferInProgress),
            AdminState::Immutable => err!(EndpointError::CallerNotAuthorized),
        }
    }

    /// Record a new adapter and return its index (count at registration
    /// time). Pair uniqueness is enforced by the AdapterInfo PDA init.
    pub fn add_adapter(&mut self, adapter_program_id: Pubkey) -> Result<u8> {
        require!(
            self.adapters.len() < Self::MAX_ADAPTERS,
            EndpointError::MaxAdaptersReached
        );
        let index = self.adapters.len() as u8;
        self.adapters.push(adapter_program_id);
        Ok(index)
    }
}
