use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::AdapterAdded;
use crate::state::{AdapterInfo, IntegratorConfig};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AddAdapterArgs {
    /// The program ID of the integrator
    pub integrator_program_id: Pubkey,

    /// The program ID of the adapter to register
    pub adapter_program_id: Pubkey,
}

#[derive(Accounts)]
#[instruction(args: AddAdapterArgs)]
pub struct AddAdapter<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The current admin of the IntegratorConfig account
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [INTEGRATOR_CONFIG_SEED, args.integrator_program_id.as_ref()],
        bump = integrator_config.bump
    )]
    pub integrator_config: Account<'info, IntegratorConfig>,

    /// The `init` fails if this (integrator, adapter) pair was already
    /// registered
    #[account(
        init,
        payer = payer,
        space = 8 + AdapterInfo::SIZE,
        seeds = [
            ADAPTER_INFO_SEED,
            args.integrator_program_id.as_ref(),
            args.adapter_program_id.as_ref()
        ],
        bump
    )]
    pub adapter_info: Account<'info, AdapterInfo>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AddAdapter>, args: AddAdapterArgs) -> Result<()> {
    let integrator_config = &mut ctx.accounts.integrator_config;
    integrator_config.verify_admin(&ctx.accounts.admin.key())?;

    let index = integrator_config.add_adapter(args.adapter_program_id)?;

    ctx.accounts.adapter_info.set_inner(AdapterInfo {
        bump: ctx.bumps.adapter_info,
        integrator_program_id: args.integrator_program_id,
        adapter_program_id: args.adapter_program_id,
        index,
    });

    emit!(AdapterAdded {
        integrator: args.integrator_program_id,
        adapter: args.adapter_program_id,
        index,
    });

    msg!("Adapter {} added at index {}", args.adapter_program_id, index);
    Ok(())
}
