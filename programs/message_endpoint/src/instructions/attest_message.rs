use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::EndpointError;
use crate::events::MessageAttested;
use crate::state::{AdapterInfo, AttestationInfo, IntegratorChainConfig};
use crate::utils::universal_address::UniversalAddress;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AttestMessageArgs {
    /// The program ID of the attesting adapter
    pub adapter_program_id: Pubkey,

    /// Bump for the adapter PDA derivation
    pub adapter_pda_bump: u8,

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
#[instruction(args: AttestMessageArgs)]
pub struct AttestMessage<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [
            ADAPTER_INFO_SEED,
            args.integrator_program_id.as_ref(),
            args.adapter_program_id.as_ref()
        ],
        bump = adapter_info.bump
    )]
    pub adapter_info: Account<'info, AdapterInfo>,

    /// The adapter program's signing PDA.
    /// Only the adapter program itself is authorized to attest.
    #[account(
        seeds = [ADAPTER_PDA_SEED],
        bump = args.adapter_pda_bump,
        seeds::program = args.adapter_program_id
    )]
    pub adapter_pda: Signer<'info>,

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

    /// Created by the first attestation for this message identity
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

pub fn handler(ctx: Context<AttestMessage>, args: AttestMessageArgs) -> Result<()> {
    let adapter_index = ctx.accounts.adapter_info.index;

    // The adapter must be an enabled receive adapter for the source chain
    require!(
        ctx.accounts
            .integrator_chain_config
            .recv_adapter_bitmap
            .get(adapter_index)
            .unwrap_or(false),
        EndpointError::AdapterNotEnabled
    );

    let dst_addr = UniversalAddress::from_pubkey(&args.integrator_program_id);
    let attestation_info = &mut ctx.accounts.attestation_info;

    // src_chain 0 marks a freshly created record; real chain IDs are
    // never 0
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
    } else {
        // An existing record must agree with the supplied identity
        require!(
            attestation_info.matches(
                args.src_chain,
                args.src_addr,
                args.sequence,
                args.dst_chain,
                dst_addr,
                args.payload_hash
            ),
            EndpointError::InvalidMessageHash
        );
    }

    attestation_info.attest(adapter_index)?;

    emit!(MessageAttested {
        message_hash: attestation_info.message_hash,
        adapter: args.adapter_program_id,
        index: adapter_index,
    });

    msg!(
        "Attestation recorded for adapter index {} on chain {}",
        adapter_index,
        args.src_chain
    );
    Ok(())
}
