use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{AdminClaimed, AdminDiscarded, AdminTransferInitiated, AdminUpdated};
use crate::state::IntegratorConfig;

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct TransferAdminArgs {
    /// The proposed new admin
    pub new_admin: Pubkey,

    /// The program ID of the integrator
    pub integrator_program_id: Pubkey,
}

#[derive(Accounts)]
#[instruction(args: TransferAdminArgs)]
pub struct TransferAdmin<'info> {
    /// The current admin of the IntegratorConfig account
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [INTEGRATOR_CONFIG_SEED, args.integrator_program_id.as_ref()],
        bump = integrator_config.bump
    )]
    pub integrator_config: Account<'info, IntegratorConfig>,
}

/// Begin the two-step admin handshake
pub fn transfer_admin(ctx: Context<TransferAdmin>, args: TransferAdminArgs) -> Result<()> {
    let integrator_config = &mut ctx.accounts.integrator_config;
    integrator_config.transfer_admin(&ctx.accounts.admin.key(), args.new_admin)?;

    emit!(AdminTransferInitiated {
        integrator: integrator_config.integrator_program_id,
        pending_admin: args.new_admin,
    });

    msg!("Admin transfer initiated to {}", args.new_admin);
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimAdmin<'info> {
    /// The pending admin claiming the role
    pub new_admin: Signer<'info>,

    #[account(
        mut,
        seeds = [INTEGRATOR_CONFIG_SEED, integrator_config.integrator_program_id.as_ref()],
        bump = integrator_config.bump
    )]
    pub integrator_config: Account<'info, IntegratorConfig>,
}

/// Complete the handshake; only the pending admin may claim
pub fn claim_admin(ctx: Context<ClaimAdmin>) -> Result<()> {
    let integrator_config = &mut ctx.accounts.integrator_config;
    integrator_config.claim_admin(&ctx.accounts.new_admin.key())?;

    emit!(AdminClaimed {
        integrator: integrator_config.integrator_program_id,
        admin: ctx.accounts.new_admin.key(),
    });

    msg!("Admin claimed by {}", ctx.accounts.new_admin.key());
    Ok(())
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdateAdminArgs {
    /// The new admin
    pub new_admin: Pubkey,

    /// The program ID of the integrator
    pub integrator_program_id: Pubkey,
}

#[derive(Accounts)]
#[instruction(args: UpdateAdminArgs)]
pub struct UpdateAdmin<'info> {
    /// The current admin of the IntegratorConfig account
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [INTEGRATOR_CONFIG_SEED, args.integrator_program_id.as_ref()],
        bump = integrator_config.bump
    )]
    pub integrator_config: Account<'info, IntegratorConfig>,
}

/// Replace the admin in one step, bypassing the claim handshake
pub fn update_admin(ctx: Context<UpdateAdmin>, args: UpdateAdminArgs) -> Result<()> {
    let integrator_config = &mut ctx.accounts.integrator_config;
    integrator_config.update_admin(&ctx.accounts.admin.key(), args.new_admin)?;

    emit!(AdminUpdated {
        integrator: integrator_config.integrator_program_id,
        admin: args.new_admin,
    });

    msg!("Admin updated to {}", args.new_admin);
    Ok(())
}

#[derive(Accounts)]
pub struct DiscardAdmin<'info> {
    /// The current admin of the IntegratorConfig account
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [INTEGRATOR_CONFIG_SEED, integrator_config.integrator_program_id.as_ref()],
        bump = integrator_config.bump
    )]
    pub integrator_config: Account<'info, IntegratorConfig>,
}

/// Make the integrator's config immutable forever
pub fn discard_admin(ctx: Context<DiscardAdmin>) -> Result<()> {
    let integrator_config = &mut ctx.accounts.integrator_config;
    integrator_config.discard_admin(&ctx.accounts.admin.key())?;

    emit!(AdminDiscarded {
        integrator: integrator_config.integrator_program_id,
    });

    msg!("Admin discarded, config is now immutable");
    Ok(())
}
