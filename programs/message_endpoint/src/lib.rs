use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("9ZuEG12LgDUkTvva677sChVdaHNpBN6EDzRgoTLGJniM");

/// Cross-Chain Message Endpoint
///
/// Integrators register once, enable independent verification adapters per
/// chain, and route message digests through them. Delivery follows an
/// at-least-one-of-N trust policy over the currently enabled receive
/// adapters.
#[program]
pub mod message_endpoint {
    use super::*;

    /// Register an integrator and initialize its config and sequence
    /// tracker. Must be invoked by the integrator program via CPI.
    pub fn register(ctx: Context<Register>, args: RegisterArgs) -> Result<()> {
        instructions::register::handler(ctx, args)
    }

    /// Begin the two-step admin transfer handshake (admin only)
    pub fn transfer_admin(ctx: Context<TransferAdmin>, args: TransferAdminArgs) -> Result<()> {
        instructions::admin::transfer_admin(ctx, args)
    }

    /// Complete a pending admin transfer (pending admin only)
    pub fn claim_admin(ctx: Context<ClaimAdmin>) -> Result<()> {
        instructions::admin::claim_admin(ctx)
    }

    /// Replace the admin in one step (admin only)
    pub fn update_admin(ctx: Context<UpdateAdmin>, args: UpdateAdminArgs) -> Result<()> {
        instructions::admin::update_admin(ctx, args)
    }

    /// Discard the admin role, making the config immutable (admin only)
    pub fn discard_admin(ctx: Context<DiscardAdmin>) -> Result<()> {
        instructions::admin::discard_admin(ctx)
    }

    /// Register a new adapter for an integrator (admin only)
    pub fn add_adapter(ctx: Context<AddAdapter>, args: AddAdapterArgs) -> Result<()> {
        instructions::add_adapter::handler(ctx, args)
    }

    /// Enable an adapter for sending to a chain (admin only)
    pub fn enable_send_adapter(ctx: Context<EnableAdapter>, args: AdapterInfoArgs) -> Result<()> {
        instructions::enable_adapter::enable_send_adapter(ctx, args)
    }

    /// Enable an adapter for receiving from a chain (admin only)
    pub fn enable_recv_adapter(ctx: Context<EnableAdapter>, args: AdapterInfoArgs) -> Result<()> {
        instructions::enable_adapter::enable_recv_adapter(ctx, args)
    }

    /// Disable a send adapter for a chain (admin only)
    pub fn disable_send_adapter(ctx: Context<DisableAdapter>, args: AdapterInfoArgs) -> Result<()> {
        instructions::disable_adapter::disable_send_adapter(ctx, args)
    }

    /// Disable a receive adapter for a chain (admin only)
    pub fn disable_recv_adapter(ctx: Context<DisableAdapter>, args: AdapterInfoArgs) -> Result<()> {
        instructions::disable_adapter::disable_recv_adapter(ctx, args)
    }

    /// Queue an outgoing message for pickup by every send-enabled adapter.
    /// Must be invoked by the integrator program via CPI.
    pub fn send_message(ctx: Context<SendMessage>, args: SendMessageArgs) -> Result<()> {
        instructions::send_message::handler(ctx, args)
    }

    /// Mark an outbox message as picked up by an adapter; the final pickup
    /// closes the record. Must be invoked by the adapter program via CPI.
    pub fn pick_up_message(ctx: Context<PickUpMessage>, args: PickUpMessageArgs) -> Result<()> {
        instructions::pick_up_message::handler(ctx, args)
    }

    /// Record an adapter's attestation for an incoming message. Must be
    /// invoked by the adapter program via CPI.
    pub fn attest_message(ctx: Context<AttestMessage>, args: AttestMessageArgs) -> Result<()> {
        instructions::attest_message::handler(ctx, args)
    }

    /// Execute an attested message; requires a pre-existing attestation
    /// record. Must be invoked by the integrator program via CPI.
    pub fn recv_message(ctx: Context<RecvMessage>, args: RecvMessageArgs) -> Result<(u128, u128)> {
        instructions::recv_message::handler(ctx, args)
    }

    /// Execute an attested message, initializing the attestation record if
    /// it does not exist. Must be invoked by the integrator program via CPI.
    pub fn exec_message(ctx: Context<ExecMessage>, args: ExecMessageArgs) -> Result<()> {
        instructions::exec_message::handler(ctx, args)
    }
}
