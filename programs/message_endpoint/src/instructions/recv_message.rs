use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::EndpointError;
use crate::events::MessageExecuted;
use crate::state::{AttestationInfo, IntegratorChainConfig};
use crate::utils::universal_address::UniversalAddress;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct RecvMessageArgs {
    /// Bump for the integrator program PDA derivation
    pub integrator_program_pda_bump: u8,

    /// The source chain ID
    pub src_chain: u16,

    /// The source address
    pub src_addr: UniversalAddress,

    /// Sequence number assigned on the source chain
    pub sequence: u64,

    /// The destination chain ID
    pub dst_chain: u16,

    /// The program ID of the destination integrator
    pub integrator_program_id: Pubkey,

    /// keccak256 digest of the payload
    pub payload_hash: [u8; 32],
}

#[derive(Accounts)]
#[instruction(args: RecvMessageArgs)]
pub struct RecvMessage<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The integrator program's endpoint PDA.
    /// Only the destination integrator may execute its own messages.
    #[account(
        seeds = [INTEGRATOR_PROGRAM_SEED],
        bump = args.integrator_program_pda_bump,
        seeds::program = args.integrator_program_id
    )]
    pub integrator_program_pda: Signer<'info>,

    /// Receive-direction config for the source chain
    #[account(
        seeds = [
            INTEGRATOR_CHAIN_CONFIG_SEED,
            args.integrator_program_id.as_ref(),
            args.src_chain.to_be_bytes().as_ref()
        ],
        bump = integrator_chain_config.bump
    )]
    pub integrator_chain_config: Account<'info, IntegratorChainConfig>,

    /// Must have been created by a prior attestation; a record created
    /// here is detected and rejected in the handler
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + AttestationInfo::SIZE,
        seeds = [
            ATTESTATION_INFO_SEED,
            &AttestationInfo::compute_message_hash(
                args.src_chain,
                args.src_addr,
                args.sequence,
                args.dst_chain,
                UniversalAddress::from_pubkey(&args.integrator_program_id),
                args.payload_hash
            )
        ],
        bump
    )]
    pub attestation_info: Account<'info, AttestationInfo>,

    pub system_program: Program<'info, System>,
}

/// Returns the receive-enabled bitmap and the attested bitmap so the
/// integrator can apply additional trust policies of its own.
pub fn handler(ctx: Context<RecvMessage>, args: RecvMessageArgs) -> Result<(u128, u128)> {
    let attestation_info = &mut ctx.accounts.attestation_info;

    // A record only exists once some adapter has attested; the aborted
    // transaction discards the account created by init_if_needed
    require!(
        attestation_info.src_chain != 0,
        EndpointError::UnknownMessageAttestation
    );

    let recv_enabled = ctx.accounts.integrator_chain_config.recv_adapter_bitmap;
    require!(
        attestation_info.has_quorum(&recv_enabled),
        EndpointError::AdapterNotEnabled
    );

    attestation_info.mark_executed()?;

    emit!(MessageExecuted {
        message_hash: attestation_info.message_hash,
        src_chain: args.src_chain,
        sequence: args.sequence,
    });

    msg!(
        "Message executed: src_chain={}, sequence={}",
        args.src_chain,
        args.sequence
    );

    Ok((
        recv_enabled.as_value(),
        attestation_info.attested_adapters.as_value(),
    ))
}
