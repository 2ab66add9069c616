use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::IntegratorRegistered;
use crate::state::{AdminState, IntegratorConfig, SequenceTracker};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct RegisterArgs {
    /// The program ID of the integrator
    pub integrator_program_id: Pubkey,

    /// Bump for the integrator program PDA derivation
    pub integrator_program_pda_bump: u8,

    /// Initial admin of the integrator's config
    pub admin: Pubkey,
}

#[derive(Accounts)]
#[instruction(args: RegisterArgs)]
pub struct Register<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The integrator program's endpoint PDA.
    /// Only the integrator program itself can register; it proves this by
    /// signing with its own PDA via CPI.
    #[account(
        seeds = [INTEGRATOR_PROGRAM_SEED],
        bump = args.integrator_program_pda_bump,
        seeds::program = args.integrator_program_id
    )]
    pub integrator_program_pda: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + IntegratorConfig::SIZE,
        seeds = [INTEGRATOR_CONFIG_SEED, args.integrator_program_id.as_ref()],
        bump
    )]
    pub integrator_config: Account<'info, IntegratorConfig>,

    #[account(
        init,
        payer = payer,
        space = 8 + SequenceTracker::SIZE,
        seeds = [SEQUENCE_TRACKER_SEED, args.integrator_program_id.as_ref()],
        bump
    )]
    pub sequence_tracker: Account<'info, SequenceTracker>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Register>, args: RegisterArgs) -> Result<()> {
    ctx.accounts.integrator_config.set_inner(IntegratorConfig {
        bump: ctx.bumps.integrator_config,
        integrator_program_id: args.integrator_program_id,
        admin_state: AdminState::Active { admin: args.admin },
        adapters: Vec::new(),
    });

    ctx.accounts.sequence_tracker.set_inner(SequenceTracker {
        bump: ctx.bumps.sequence_tracker,
        integrator_program_id: args.integrator_program_id,
        sequence: 0,
    });

    emit!(IntegratorRegistered {
        integrator: args.integrator_program_id,
        admin: args.admin,
    });

    msg!("Integrator registered: {}", args.integrator_program_id);
    Ok(())
}
