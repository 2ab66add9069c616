use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::errors::EndpointError;
use crate::utils::bitmap::Bitmap;
use crate::utils::universal_address::UniversalAddress;

/// Attestation ledger entry for one incoming message.
///
/// The message identity tuple is collapsed into a single keccak256
/// `message_hash`, which also addresses the account. `executed` is the
/// replay-protection flag: it transitions false to true exactly once.
#[account]
#[derive(Debug)]
pub struct AttestationInfo {
    /// PDA bump seed
    pub bump: u8,

    /// keccak256 over the full message identity tuple; also the PDA seed
    pub message_hash: [u8; 32],

    /// Source chain ID; never 0 for an initialized record
    pub src_chain: u16,

    /// Source address
    pub src_addr: UniversalAddress,

    /// Sequence number assigned on the source chain
    pub sequence: u64,

    /// Destination chain ID
    pub dst_chain: u16,

    /// Destination address: the universal address of the destination
    /// integrator program
    pub dst_addr: UniversalAddress,

    /// keccak256 digest of the payload
    pub payload_hash: [u8; 32],

    /// Replay protection flag
    pub executed: bool,

    /// Adapters that have attested to this message
    pub attested_adapters: Bitmap,
}

impl AttestationInfo {
    pub const SIZE: usize = 1   // bump
        + 32                    // message_hash
        + 2                     // src_chain
        + UniversalAddress::SIZE
        + 8                     // sequence
        + 2                     // dst_chain
        + UniversalAddress::SIZE
        + 32                    // payload_hash
        + 1                     // executed
        + Bitmap::SIZE;         // attested_adapters

    pub fn new(
        bump: u8,
        src_chain: u16,
        src_addr: UniversalAddress,
        sequence: u64,
        dst_chain: u16,
        dst_addr: UniversalAddress,
        payload_hash: [u8; 32],
    ) -> Result<Self> {
        // Chain ID 0 is the freshly-zeroed-account sentinel and can never
        // name a real chain
        require!(src_chain != 0 && dst_chain != 0, EndpointError::InvalidChainId);
        Ok(Self {
            bump,
            message_hash: Self::compute_message_hash(
                src_chain,
                src_addr,
                sequence,
                dst_chain,
                dst_addr,
                payload_hash,
            ),
            src_chain,
            src_addr,
            sequence,
            dst_chain,
            dst_addr,
            payload_hash,
            executed: false,
            attested_adapters: Bitmap::new(),
        })
    }

    /// Collapse the message identity tuple into one collision-resistant key
    pub fn compute_message_hash(
        src_chain: u16,
        src_addr: UniversalAddress,
        sequence: u64,
        dst_chain: u16,
        dst_addr: UniversalAddress,
        payload_hash: [u8; 32],
    ) -> [u8; 32] {
        keccak::hashv(&[
            &src_chain.to_be_bytes(),
            src_addr.as_ref(),
            &sequence.to_be_bytes(),
            &dst_chain.to_be_bytes(),
            dst_addr.as_ref(),
            &payload_hash,
        ])
        .to_bytes()
    }

    /// Whether the stored identity matches the supplied tuple exactly
    pub fn matches(
        &self,
        src_chain: u16,
        src_addr: UniversalAddress,
        sequence: u64,
        dst_chain: u16,
        dst_addr: UniversalAddress,
        payload_hash: [u8; 32],
    ) -> bool {
        self.message_hash
            == Self::compute_message_hash(
                src_chain, src_addr, sequence, dst_chain, dst_addr, payload_hash,
            )
    }

    /// Record an adapter's attestation
    pub fn attest(&mut self, adapter_index: u8) -> Result<()> {
        require!(
            !self.attested_adapters.get(adapter_index)?,
            EndpointError::DuplicateMessageAttestation
        );
        self.attested_adapters.set(adapter_index, true)
    }

    /// At-least-one-of-N trust policy: deliverable once any currently
    /// recv-enabled adapter has attested
    pub fn has_quorum(&self, recv_enabled: &Bitmap) -> bool {
        !self.attested_adapters.and(recv_enabled).is_empty()
    }

    /// Flip the replay-protection flag; succeeds at most once per message
    pub fn mark_executed(&mut self) -> Result<()> {
        require!(!self.executed, EndpointError::AlreadyExecuted);
        self.executed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attestation() -> AttestationInfo {
        AttestationInfo::new(
            253,
            2,
            UniversalAddress::from_bytes([1u8; 32]),
            7,
            5,
            UniversalAddress::from_pubkey(&Pubkey::new_unique()),
            [9u8; 32],
        )
        .unwrap()
    }

    #[test]
    fn message_hash_commits_to_every_field() {
        let src_addr = UniversalAddress::from_bytes([1u8; 32]);
        let dst_addr = UniversalAddress::from_bytes([2u8; 32]);
        let base = AttestationInfo::compute_message_hash(2, src_addr, 7, 5, dst_addr, [9u8; 32]);

        assert_ne!(
            base,
            AttestationInfo::compute_message_hash(3, src_addr, 7, 5, dst_addr, [9u8; 32])
        );
        assert_ne!(
            base,
            AttestationInfo::compute_message_hash(2, src_addr, 8, 5, dst_addr, [9u8; 32])
        );
        assert_ne!(
            base,
            AttestationInfo::compute_message_hash(2, src_addr, 7, 5, dst_addr, [0u8; 32])
        );
        assert_eq!(
            base,
            AttestationInfo::compute_message_hash(2, src_addr, 7, 5, dst_addr, [9u8; 32])
        );
    }

    #[test]
    fn zero_chain_ids_are_rejected() {
        let addr = UniversalAddress::from_bytes([1u8; 32]);
        assert_eq!(
            AttestationInfo::new(0, 0, addr, 0, 5, addr, [0u8; 32]).unwrap_err(),
            EndpointError::InvalidChainId.into()
        );
        assert_eq!(
            AttestationInfo::new(0, 2, addr, 0, 0, addr, [0u8; 32]).unwrap_err(),
            EndpointError::InvalidChainId.into()
        );
    }

    #[test]
    fn duplicate_attestation_is_rejected() {
        let mut info = attestation();

        info.attest(1).unwrap();
        let before = info.attested_adapters;
        assert_eq!(
            info.attest(1).unwrap_err(),
            EndpointError::DuplicateMessageAttestation.into()
        );
        assert_eq!(info.attested_adapters, before);
    }

    #[test]
    fn quorum_needs_an_attester_that_is_still_enabled() {
        let mut info = attestation();
        info.attest(1).unwrap();

        // Adapter 1 attested and is enabled
        assert!(info.has_quorum(&Bitmap::from_value(0b0010)));
        // Adapter 1 attested but only adapter 0 is enabled
        assert!(!info.has_quorum(&Bitmap::from_value(0b0001)));
        // Nothing enabled
        assert!(!info.has_quorum(&Bitmap::new()));
        // A superset of enabled adapters still passes
        assert!(info.has_quorum(&Bitmap::from_value(0b0011)));
    }

    #[test]
    fn execution_is_at_most_once() {
        let mut info = attestation();
        assert!(!info.executed);

        info.mark_executed().unwrap();
        assert!(info.executed);
        assert_eq!(
            info.mark_executed().unwrap_err(),
            EndpointError::AlreadyExecuted.into()
        );
        // The flag never resets
        assert!(info.executed);
    }

    #[test]
    fn matches_detects_field_disagreement() {
        let info = attestation();
        assert!(info.matches(
            info.src_chain,
            info.src_addr,
            info.sequence,
            info.dst_chain,
            info.dst_addr,
            info.payload_hash
        ));
        assert!(!info.matches(
            info.src_chain,
            info.src_addr,
            info.sequence,
            info.dst_chain,
            info.dst_addr,
            [0u8; 32]
        ));
    }
}
