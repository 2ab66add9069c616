use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::EndpointError;
use crate::events::MessageSent;
use crate::state::{IntegratorChainConfig, OutboxMessage, SequenceTracker};
use crate::utils::universal_address::UniversalAddress;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SendMessageArgs {
    /// The program ID of the sending integrator
    pub integrator_program_id: Pubkey,

    /// Bump for the integrator program PDA derivation
    pub integrator_program_pda_bump: u8,

    /// The destination chain ID
    pub dst_chain: u16,

    /// The destination address
    pub dst_addr: UniversalAddress,

    /// keccak256 digest of the payload
    pub payload_hash: [u8; 32],
}

#[derive(Accounts)]
#[instruction(args: SendMessageArgs)]
pub struct SendMessage<'info> {
    /// Pays for the outbox message account and receives its rent back on
    /// the final pickup
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The integrator program's endpoint PDA.
    /// Only the integrator program itself is authorized to send.
    #[account(
        seeds = [INTEGRATOR_PROGRAM_SEED],
        bump = args.integrator_program_pda_bump,
        seeds::program = args.integrator_program_id
    )]
    pub integrator_program_pda: Signer<'info>,

    #[account(
        seeds = [
            INTEGRATOR_CHAIN_CONFIG_SEED,
            args.integrator_program_id.as_ref(),
            args.dst_chain.to_be_bytes().as_ref()
        ],
        bump = integrator_chain_config.bump
    )]
    pub integrator_chain_config: Account<'info, IntegratorChainConfig>,

    #[account(
        mut,
        seeds = [SEQUENCE_TRACKER_SEED, args.integrator_program_id.as_ref()],
        bump = sequence_tracker.bump
    )]
    pub sequence_tracker: Account<'info, SequenceTracker>,

    /// A fresh keypair account, one per message
    #[account(
        init,
        payer = payer,
        space = 8 + OutboxMessage::SIZE
    )]
    pub outbox_message: Account<'info, OutboxMessage>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SendMessage>, args: SendMessageArgs) -> Result<()> {
    // At least one send adapter must be enabled for the destination chain
    require!(
        !ctx.accounts
            .integrator_chain_config
            .send_adapter_bitmap
            .is_empty(),
        EndpointError::AdapterNotEnabled
    );

    let sequence = ctx.accounts.sequence_tracker.next_sequence();
    let src_addr = UniversalAddress::from_pubkey(&args.integrator_program_id);
    let outstanding_adapters = ctx.accounts.integrator_chain_config.send_adapter_bitmap;

    ctx.accounts.outbox_message.set_inner(OutboxMessage {
        src_addr,
        sequence,
        dst_chain: args.dst_chain,
        dst_addr: args.dst_addr,
        payload_hash: args.payload_hash,
        outstanding_adapters,
        refund_recipient: ctx.accounts.payer.key(),
    });

    emit!(MessageSent {
        src_addr,
        sequence,
        dst_chain: args.dst_chain,
        dst_addr: args.dst_addr,
        payload_hash: args.payload_hash,
        outstanding_adapters: outstanding_adapters.as_value(),
    });

    msg!("Message sent: sequence={}, dst_chain={}", sequence, args.dst_chain);
    Ok(())
}
