use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;

use crate::constants::*;
use crate::events::MessagePickedUp;
use crate::state::{AdapterInfo, OutboxMessage};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct PickUpMessageArgs {
    /// The program ID of the adapter picking up
    pub adapter_program_id: Pubkey,

    /// Bump for the adapter PDA derivation
    pub adapter_pda_bump: u8,
}

#[derive(Accounts)]
#[instruction(args: PickUpMessageArgs)]
pub struct PickUpMessage<'info> {
    #[account(mut)]
    pub outbox_message: Account<'info, OutboxMessage>,

    /// Resolves the adapter to its index for the sending integrator; the
    /// outbox's src_addr is that integrator's program ID
    #[account(
        seeds = [
            ADAPTER_INFO_SEED,
            outbox_message.src_addr.as_ref(),
            args.adapter_program_id.as_ref()
        ],
        bump = adapter_info.bump
    )]
    pub adapter_info: Account<'info, AdapterInfo>,

    /// The adapter program's signing PDA.
    /// Only the adapter program named in adapter_info can pick up.
    #[account(
        seeds = [ADAPTER_PDA_SEED],
        bump = args.adapter_pda_bump,
        seeds::program = args.adapter_program_id
    )]
    pub adapter_pda: Signer<'info>,

    /// Receives the outbox rent once every adapter has picked up
    #[account(mut, address = outbox_message.refund_recipient)]
    pub refund_recipient: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PickUpMessage>, args: PickUpMessageArgs) -> Result<()> {
    let index = ctx.accounts.adapter_info.index;
    ctx.accounts.outbox_message.pick_up(index)?;

    let remaining = ctx.accounts.outbox_message.outstanding_adapters;

    emit!(MessagePickedUp {
        outbox_message: ctx.accounts.outbox_message.key(),
        adapter: args.adapter_program_id,
        remaining_adapters: remaining.as_value(),
    });

    if remaining.is_empty() {
        // Last pickup retires the record and refunds its rent
        ctx.accounts
            .outbox_message
            .close(ctx.accounts.refund_recipient.to_account_info())?;
        msg!("Outbox message drained and closed");
    }

    Ok(())
}
