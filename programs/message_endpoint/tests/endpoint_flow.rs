//! End-to-end exercise of the endpoint state machine: registration,
//! per-chain adapter enablement, the outbox lifecycle and the attestation
//! ledger, driven through the same state types the instruction handlers
//! mutate.

use anchor_lang::prelude::Pubkey;

use message_endpoint::errors::EndpointError;
use message_endpoint::state::{
    AdminState, AttestationInfo, IntegratorChainConfig, IntegratorConfig, OutboxMessage,
    SequenceTracker,
};
use message_endpoint::utils::universal_address::UniversalAddress;

const CHAIN_ID: u16 = 5;

#[test]
fn full_message_round_trip() {
    let integrator_program_id = Pubkey::new_unique();
    let admin = Pubkey::new_unique();

    // Register: fresh config plus sequence tracker
    let mut config = IntegratorConfig {
        bump: 255,
        integrator_program_id,
        admin_state: AdminState::Active { admin },
        adapters: Vec::new(),
    };
    let mut tracker = SequenceTracker {
        bump: 254,
        integrator_program_id,
        sequence: 0,
    };

    // Two independent adapters, indices assigned in registration order
    config.verify_admin(&admin).unwrap();
    let a1 = config.add_adapter(Pubkey::new_unique()).unwrap();
    let a2 = config.add_adapter(Pubkey::new_unique()).unwrap();
    assert_eq!((a1, a2), (0, 1));

    // Enable both directions on chain 5
    let mut chain_config = IntegratorChainConfig::new(253, integrator_program_id, CHAIN_ID);
    chain_config.enable_send_adapter(a1).unwrap();
    chain_config.enable_send_adapter(a2).unwrap();
    chain_config.enable_recv_adapter(a1).unwrap();
    chain_config.enable_recv_adapter(a2).unwrap();

    // Send: sequence 0, outstanding bitmap snapshots the send bitmap
    let sequence = tracker.next_sequence();
    assert_eq!(sequence, 0);
    let payload_hash = [0xabu8; 32];
    let dst_addr = UniversalAddress::from_bytes([0x11u8; 32]);
    let mut outbox = OutboxMessage {
        src_addr: UniversalAddress::from_pubkey(&integrator_program_id),
        sequence,
        dst_chain: CHAIN_ID,
        dst_addr,
        payload_hash,
        outstanding_adapters: chain_config.send_adapter_bitmap,
        refund_recipient: Pubkey::new_unique(),
    };
    assert_eq!(outbox.outstanding_adapters.count_ones(), 2);

    // Disabling a send adapter after the send does not touch the snapshot
    chain_config.disable_send_adapter(a2).unwrap();
    assert_eq!(outbox.outstanding_adapters.count_ones(), 2);

    // Both adapters pick up; the record drains to empty and retires
    outbox.pick_up(a1).unwrap();
    outbox.pick_up(a2).unwrap();
    assert!(outbox.outstanding_adapters.is_empty());
    assert_eq!(
        outbox.pick_up(a1).unwrap_err(),
        EndpointError::MessageAlreadyPickedUp.into()
    );

    // The message arrives on the peer endpoint: adapter 1 attests
    let src_addr = UniversalAddress::from_pubkey(&integrator_program_id);
    let mut attestation = AttestationInfo::new(
        252,
        CHAIN_ID,
        src_addr,
        sequence,
        CHAIN_ID,
        UniversalAddress::from_pubkey(&integrator_program_id),
        payload_hash,
    )
    .unwrap();
    attestation.attest(a1).unwrap();
    assert_eq!(
        attestation.attest(a1).unwrap_err(),
        EndpointError::DuplicateMessageAttestation.into()
    );

    // Quorum: {a1} intersects the enabled receive set {a1, a2}
    assert!(attestation.has_quorum(&chain_config.recv_adapter_bitmap));

    // Execute once, then replay is rejected
    attestation.mark_executed().unwrap();
    assert_eq!(
        attestation.mark_executed().unwrap_err(),
        EndpointError::AlreadyExecuted.into()
    );
}

#[test]
fn quorum_tracks_the_current_receive_bitmap() {
    let integrator_program_id = Pubkey::new_unique();
    let mut chain_config = IntegratorChainConfig::new(255, integrator_program_id, CHAIN_ID);
    chain_config.enable_recv_adapter(0).unwrap();

    let mut attestation = AttestationInfo::new(
        254,
        CHAIN_ID,
        UniversalAddress::from_bytes([1u8; 32]),
        9,
        CHAIN_ID,
        UniversalAddress::from_pubkey(&integrator_program_id),
        [2u8; 32],
    )
    .unwrap();
    attestation.attest(0).unwrap();
    assert!(attestation.has_quorum(&chain_config.recv_adapter_bitmap));

    // Disabling the only attester afterwards revokes deliverability: the
    // policy counts currently enabled adapters, not historically enabled
    chain_config.disable_recv_adapter(0).unwrap();
    assert!(!attestation.has_quorum(&chain_config.recv_adapter_bitmap));

    // Enabling a different adapter does not help until it attests
    chain_config.enable_recv_adapter(1).unwrap();
    assert!(!attestation.has_quorum(&chain_config.recv_adapter_bitmap));
    attestation.attest(1).unwrap();
    assert!(attestation.has_quorum(&chain_config.recv_adapter_bitmap));
}

#[test]
fn distinct_identity_tuples_are_distinct_messages() {
    let src_addr = UniversalAddress::from_bytes([1u8; 32]);
    let dst_addr = UniversalAddress::from_bytes([2u8; 32]);
    let payload_hash = [3u8; 32];

    let base =
        AttestationInfo::compute_message_hash(CHAIN_ID, src_addr, 0, CHAIN_ID, dst_addr, payload_hash);

    // Any field disagreement yields a different ledger key
    let other_sequence =
        AttestationInfo::compute_message_hash(CHAIN_ID, src_addr, 1, CHAIN_ID, dst_addr, payload_hash);
    let other_src = AttestationInfo::compute_message_hash(
        CHAIN_ID,
        UniversalAddress::from_bytes([9u8; 32]),
        0,
        CHAIN_ID,
        dst_addr,
        payload_hash,
    );
    assert_ne!(base, other_sequence);
    assert_ne!(base, other_src);
    assert_ne!(other_sequence, other_src);
}
