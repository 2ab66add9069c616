use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::EndpointError;
use crate::events::AdapterEnabled;
use crate::state::{AdapterInfo, IntegratorChainConfig, IntegratorConfig};

/// Common arguments for the per-chain enable/disable instructions
#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AdapterInfoArgs {
    /// The chain whose bitmap is being changed
    pub chain_id: u16,

    /// The program ID of the adapter
    pub adapter_program_id: Pubkey,

    /// The program ID of the integrator
    pub integrator_program_id: Pubkey,
}

#[derive(Accounts)]
#[instruction(args: AdapterInfoArgs)]
pub struct EnableAdapter<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The current admin of the IntegratorConfig account
    pub admin: Signer<'info>,

    #[account(
        seeds = [INTEGRATOR_CONFIG_SEED, args.integrator_program_id.as_ref()],
        bump = integrator_config.bump
    )]
    pub integrator_config: Account<'info, IntegratorConfig>,

    /// Resolves the adapter to its registered index; missing account means
    /// the adapter was never registered
    #[account(
        seeds = [
            ADAPTER_INFO_SEED,
            args.integrator_program_id.as_ref(),
            args.adapter_program_id.as_ref()
        ],
        bump = adapter_info.bump
    )]
    pub adapter_info: Account<'info, AdapterInfo>,

    /// Created lazily by the first enable call for this (integrator,
    /// chain) pair
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + IntegratorChainConfig::SIZE,
        seeds = [
            INTEGRATOR_CHAIN_CONFIG_SEED,
            args.integrator_program_id.as_ref(),
            args.chain_id.to_be_bytes().as_ref()
        ],
        bump
    )]
    pub integrator_chain_config: Account<'info, IntegratorChainConfig>,

    pub system_program: Program<'info, System>,
}

/// Shared preamble: validate the chain, gate on the admin, and initialize
/// the chain config if this is the first enable for the pair.
fn prepare_chain_config(
    accounts: &mut EnableAdapter<'_>,
    chain_config_bump: u8,
    args: &AdapterInfoArgs,
) -> Result<u8> {
    require!(args.chain_id != 0, EndpointError::InvalidChainId);
    accounts.integrator_config.verify_admin(&accounts.admin.key())?;

    // A freshly created account still has the zeroed chain_id sentinel
    if accounts.integrator_chain_config.chain_id == 0 {
        accounts.integrator_chain_config.set_inner(IntegratorChainConfig::new(
            chain_config_bump,
            args.integrator_program_id,
            args.chain_id,
        ));
    }

    Ok(accounts.adapter_info.index)
}

pub fn enable_send_adapter(ctx: Context<EnableAdapter>, args: AdapterInfoArgs) -> Result<()> {
    let bump = ctx.bumps.integrator_chain_config;
    let index = prepare_chain_config(ctx.accounts, bump, &args)?;
    ctx.accounts.integrator_chain_config.enable_send_adapter(index)?;

    emit!(AdapterEnabled {
        integrator: args.integrator_program_id,
        chain_id: args.chain_id,
        adapter: args.adapter_program_id,
        send: true,
    });

    msg!(
        "Send adapter {} enabled for chain {}",
        args.adapter_program_id,
        args.chain_id
    );
    Ok(())
}

pub fn enable_recv_adapter(ctx: Context<EnableAdapter>, args: AdapterInfoArgs) -> Result<()> {
    let bump = ctx.bumps.integrator_chain_config;
    let index = prepare_chain_config(ctx.accounts, bump, &args)?;
    ctx.accounts.integrator_chain_config.enable_recv_adapter(index)?;

    emit!(AdapterEnabled {
        integrator: args.integrator_program_id,
        chain_id: args.chain_id,
        adapter: args.adapter_program_id,
        send: false,
    });

    msg!(
        "Receive adapter {} enabled for chain {}",
        args.adapter_program_id,
        args.chain_id
    );
    Ok(())
}
