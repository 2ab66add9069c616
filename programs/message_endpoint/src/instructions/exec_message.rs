use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::EndpointError;
use crate::events::MessageExecuted;
use crate::state::{AttestationInfo, IntegratorChainConfig};
use crate::utils::universal_address::UniversalAddress;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct ExecMessageArgs {
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
#[instruction(args: ExecMessageArgs)]
pub struct ExecMessage<'info> {
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

    /// Unlike recv_message, initialized here if the message was never
    /// attested; the quorum check then fails for lack of attestations
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

pub fn handler(ctx: Context<ExecMessage>, args: ExecMessageArgs) -> Result<()> {
    let dst_addr = UniversalAddress::from_pubkey(&args.integrator_program_id);
    let attestation_info = &mut ctx.accounts.attestation_info;

    if attestation_info.src_chain == 0 {
        attestation_info.set_inner(AttestationInfo::new(
            ctx.bumps.attestation_info,
            args.src_chain,
            args.src_addr,
            args.sequence,
            args.dst_chain,
            dst_addr,
            args.payload_hash,
        )?);
    }

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
    Ok(())
}
