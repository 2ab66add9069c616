use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::AdapterDisabled;
use crate::instructions::enable_adapter::AdapterInfoArgs;
use crate::state::{AdapterInfo, IntegratorChainConfig, IntegratorConfig};

#[derive(Accounts)]
#[instruction(args: AdapterInfoArgs)]
pub struct DisableAdapter<'info> {
    /// The current admin of the IntegratorConfig account
    pub admin: Signer<'info>,

    #[account(
        seeds = [INTEGRATOR_CONFIG_SEED, args.integrator_program_id.as_ref()],
        bump = integrator_config.bump
    )]
    pub integrator_config: Account<'info, IntegratorConfig>,

    #[account(
        seeds = [
            ADAPTER_INFO_SEED,
            args.integrator_program_id.as_ref(),
            args.adapter_program_id.as_ref()
        ],
        bump = adapter_info.bump
    )]
    pub adapter_info: Account<'info, AdapterInfo>,

    /// Must already exist; a chain config is only ever created by an
    /// enable call
    #[account(
        mut,
        seeds = [
            INTEGRATOR_CHAIN_CONFIG_SEED,
            args.integrator_program_id.as_ref(),
            args.chain_id.to_be_bytes().as_ref()
        ],
        bump = integrator_chain_config.bump
    )]
    pub integrator_chain_config: Account<'info, IntegratorChainConfig>,
}

pub fn disable_send_adapter(ctx: Context<DisableAdapter>, args: AdapterInfoArgs) -> Result<()> {
    ctx.accounts
        .integrator_config
        .verify_admin(&ctx.accounts.admin.key())?;

    let index = ctx.accounts.adapter_info.index;
    ctx.accounts.integrator_chain_config.disable_send_adapter(index)?;

    emit!(AdapterDisabled {
        integrator: args.integrator_program_id,
        chain_id: args.chain_id,
        adapter: args.adapter_program_id,
        send: true,
    });

    msg!(
        "Send adapter {} disabled for chain {}",
        args.adapter_program_id,
        args.chain_id
    );
    Ok(())
}

pub fn disable_recv_adapter(ctx: Context<DisableAdapter>, args: AdapterInfoArgs) -> Result<()> {
    ctx.accounts
        .integrator_config
        .verify_admin(&ctx.accounts.admin.key())?;

    let index = ctx.accounts.adapter_info.index;
    ctx.accounts.integrator_chain_config.disable_recv_adapter(index)?;

    emit!(AdapterDisabled {
        integrator: args.integrator_program_id,
        chain_id: args.chain_id,
        adapter: args.adapter_program_id,
        send: false,
    });

    msg!(
        "Receive adapter {} disabled for chain {}",
        args.adapter_program_id,
        args.chain_id
    );
    Ok(())
}
