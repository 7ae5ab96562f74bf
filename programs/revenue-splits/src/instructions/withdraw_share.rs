use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{BALANCE_SEED, SPLITTER_CONFIG_SEED},
    errors::ErrorCode,
    events::ShareWithdrawn,
    state::{ParticipantBalance, SplitterConfig},
    utils::{balance_address_matches, pay_out},
};

#[derive(Accounts)]
pub struct WithdrawShare<'info> {
    pub participant: Signer<'info>,

    /// CHECK: Compared against the stored authority
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [
            SPLITTER_CONFIG_SEED,
            splitter_config.authority.as_ref(),
            splitter_config.name.as_bytes()
        ],
        bump = splitter_config.bump,
        constraint = splitter_config.authority == authority.key() @ ErrorCode::InvalidAuthority
    )]
    pub splitter_config: Box<Account<'info, SplitterConfig>>,

    #[account(
        mut,
        constraint = participant_balance.participant == participant.key() @ ErrorCode::UnauthorizedWithdrawal,
        constraint = participant_balance.splitter == splitter_config.key() @ ErrorCode::UnauthorizedWithdrawal
    )]
    pub participant_balance: Box<Account<'info, ParticipantBalance>>,

    #[account(
        mut,
        associated_token::mint = treasury_mint,
        associated_token::authority = splitter_config,
        associated_token::token_program = token_program,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    pub treasury_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        constraint = destination.mint == treasury_mint.key() @ ErrorCode::InvalidTokenAccount
    )]
    pub destination: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Pays out the participant's whole credited balance
/// No partial withdrawals: the record is always left at zero
pub fn handler(ctx: Context<WithdrawShare>) -> Result<()> {
    let config_key = ctx.accounts.splitter_config.key();
    let participant_key = ctx.accounts.participant.key();

    require!(
        balance_address_matches(
            &ctx.accounts.participant_balance.key(),
            BALANCE_SEED,
            &config_key,
            &participant_key,
            ctx.accounts.participant_balance.bump,
        ),
        ErrorCode::UnauthorizedWithdrawal
    );

    let amount = ctx.accounts.participant_balance.amount;
    require!(amount > 0, ErrorCode::InsufficientBalance);

    ctx.accounts.participant_balance.debit(amount)?;

    let seeds = ctx.accounts.splitter_config.signer_seeds();
    pay_out(
        &ctx.accounts.treasury,
        ctx.accounts.destination.to_account_info(),
        &ctx.accounts.treasury_mint,
        ctx.accounts.splitter_config.to_account_info(),
        &ctx.accounts.token_program,
        &[&seeds[..]],
        amount,
    )?;

    emit!(ShareWithdrawn {
        config: config_key,
        participant: participant_key,
        destination: ctx.accounts.destination.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
