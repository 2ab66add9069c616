use anchor_lang::prelude::*;

use crate::errors::EndpointError;
use crate::utils::bitmap::Bitmap;
use crate::utils::universal_address::UniversalAddress;

/// An outgoing message waiting to be picked up by every send-enabled
/// adapter.
///
/// `outstanding_adapters` starts as a snapshot of the send bitmap at send
/// time and only ever shrinks; the account is closed (rent refunded) by
/// the pickup that clears the last bit.
#[account]
pub struct OutboxMessage {
    /// The sending integrator as a universal address
    pub src_addr: UniversalAddress,

    /// Sequence number of the message
    pub sequence: u64,

    /// Destination chain ID
    pub dst_chain: u16,

    /// Destination address on the destination chain
    pub dst_addr: UniversalAddress,

    /// keccak256 digest of the payload; the payload itself never touches
    /// the endpoint
    pub payload_hash: [u8; 32],

    /// Send-enabled adapters that have not yet picked up the message
    pub outstanding_adapters: Bitmap,

    /// Recipient of the rent when this account is closed
    pub refund_recipient: Pubkey,
}

impl OutboxMessage {
    pub const SIZE: usize = UniversalAddress::SIZE  // src_addr
        + 8                                         // sequence
        + 2                                         // dst_chain
        + UniversalAddress::SIZE                    // dst_addr
        + 32                                        // payload_hash
        + Bitmap::SIZE                              // outstanding_adapters
        + 32;                                       // refund_recipient

    /// Clear the adapter's outstanding bit
    pub fn pick_up(&mut self, adapter_index: u8) -> Result<()> {
        require!(
            self.outstanding_adapters.get(adapter_index)?,
            EndpointError::MessageAlreadyPickedUp
        );
        self.outstanding_adapters.set(adapter_index, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outbox(outstanding: u128) -> OutboxMessage {
        OutboxMessage {
            src_addr: UniversalAddress::from_pubkey(&Pubkey::new_unique()),
            sequence: 0,
            dst_chain: 5,
            dst_addr: UniversalAddress::from_bytes([2u8; 32]),
            payload_hash: [3u8; 32],
            outstanding_adapters: Bitmap::from_value(outstanding),
            refund_recipient: Pubkey::new_unique(),
        }
    }

    #[test]
    fn pickups_drain_the_snapshot() {
        // Adapters 0, 1 and 4 were send-enabled at send time
        let mut message = outbox(0b10011);

        message.pick_up(0).unwrap();
        message.pick_up(4).unwrap();
        assert!(!message.outstanding_adapters.is_empty());

        message.pick_up(1).unwrap();
        assert!(message.outstanding_adapters.is_empty());
    }

    #[test]
    fn second_pickup_by_same_adapter_fails() {
        let mut message = outbox(0b11);

        message.pick_up(0).unwrap();
        assert_eq!(
            message.pick_up(0).unwrap_err(),
            EndpointError::MessageAlreadyPickedUp.into()
        );
        // Bit 1 is still outstanding
        assert!(message.outstanding_adapters.get(1).unwrap());
    }

    #[test]
    fn pickup_by_never_enabled_adapter_fails() {
        let mut message = outbox(0b1);
        assert_eq!(
            message.pick_up(9).unwrap_err(),
            EndpointError::MessageAlreadyPickedUp.into()
        );
    }
}
