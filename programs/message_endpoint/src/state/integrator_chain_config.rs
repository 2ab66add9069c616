use anchor_lang::prelude::*;

use crate::errors::EndpointError;
use crate::utils::bitmap::Bitmap;

/// Adapter enablement for one (integrator, chain) pair.
///
/// Send and receive directions are independent bitmaps over the
/// integrator's adapter indices. Created lazily by the first enable call
/// for the pair.
#[account]
pub struct IntegratorChainConfig {
    /// PDA bump seed
    pub bump: u8,

    /// Program ID of the integrator, used as a PDA seed
    pub integrator_program_id: Pubkey,

    /// Chain this config applies to, used as a PDA seed; never 0
    pub chain_id: u16,

    /// Adapters enabled for sending to this chain
    pub send_adapter_bitmap: Bitmap,

    /// Adapters enabled for receiving from this chain
    pub recv_adapter_bitmap: Bitmap,
}

impl IntegratorChainConfig {
    pub const SIZE: usize = 1   // bump
        + 32                    // integrator_program_id
        + 2                     // chain_id
        + Bitmap::SIZE          // send_adapter_bitmap
        + Bitmap::SIZE;         // recv_adapter_bitmap

    pub fn new(bump: u8, integrator_program_id: Pubkey, chain_id: u16) -> Self {
        Self {
            bump,
            integrator_program_id,
            chain_id,
            send_adapter_bitmap: Bitmap::new(),
            recv_adapter_bitmap: Bitmap::new(),
        }
    }

    pub fn enable_send_adapter(&mut self, index: u8) -> Result<()> {
        require!(
            !self.send_adapter_bitmap.get(index)?,
            EndpointError::AdapterAlreadyEnabled
        );
        self.send_adapter_bitmap.set(index, true)
    }

    pub fn disable_send_adapter(&mut self, index: u8) -> Result<()> {
        require!(
            self.send_adapter_bitmap.get(index)?,
            EndpointError::AdapterAlreadyDisabled
        );
        self.send_adapter_bitmap.set(index, false)
    }

    pub fn enable_recv_adapter(&mut self, index: u8) -> Result<()> {
        require!(
            !self.recv_adapter_bitmap.get(index)?,
            EndpointError::AdapterAlreadyEnabled
        );
        self.recv_adapter_bitmap.set(index, true)
    }

    pub fn disable_recv_adapter(&mut self, index: u8) -> Result<()> {
        require!(
            self.recv_adapter_bitmap.get(index)?,
            EndpointError::AdapterAlreadyDisabled
        );
        self.recv_adapter_bitmap.set(index, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_config() -> IntegratorChainConfig {
        IntegratorChainConfig::new(254, Pubkey::new_unique(), 5)
    }

    #[test]
    fn enable_disable_round_trip() {
        let mut config = chain_config();

        config.enable_send_adapter(3).unwrap();
        assert!(config.send_adapter_bitmap.get(3).unwrap());
        // The receive direction is independent
        assert!(!config.recv_adapter_bitmap.get(3).unwrap());

        config.disable_send_adapter(3).unwrap();
        assert!(config.send_adapter_bitmap.is_empty());
    }

    #[test]
    fn double_enable_fails_and_leaves_bitmap_unchanged() {
        let mut config = chain_config();

        config.enable_recv_adapter(7).unwrap();
        let before = config.recv_adapter_bitmap;
        assert_eq!(
            config.enable_recv_adapter(7).unwrap_err(),
            EndpointError::AdapterAlreadyEnabled.into()
        );
        assert_eq!(config.recv_adapter_bitmap, before);
    }

    #[test]
    fn disable_of_clear_bit_fails() {
        let mut config = chain_config();
        assert_eq!(
            config.disable_send_adapter(0).unwrap_err(),
            EndpointError::AdapterAlreadyDisabled.into()
        );
        assert_eq!(
            config.disable_recv_adapter(0).unwrap_err(),
            EndpointError::AdapterAlreadyDisabled.into()
        );
    }

    #[test]
    fn index_bounds_are_enforced() {
        let mut config = chain_config();
        assert_eq!(
            config.enable_send_adapter(128).unwrap_err(),
            EndpointError::BitmapIndexOutOfBounds.into()
        );
    }
}
