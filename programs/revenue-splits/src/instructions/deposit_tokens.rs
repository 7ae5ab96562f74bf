use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::{
    constants::SPLITTER_CONFIG_SEED,
    errors::ErrorCode,
    events::TokensDeposited,
    state::SplitterConfig,
};

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    pub depositor: Signer<'info>,

    #[account(
        seeds = [
            SPLITTER_CONFIG_SEED,
            splitter_config.authority.as_ref(),
            splitter_config.name.as_bytes()
        ],
        bump = splitter_config.bump
    )]
    pub splitter_config: Box<Account<'info, SplitterConfig>>,

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
        constraint = depositor_token_account.mint == treasury_mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = depositor_token_account.owner == depositor.key() @ ErrorCode::InvalidTokenAccount
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Moves tokens from the depositor into the treasury
/// Optional: any transfer into the treasury is picked up by the next distribution
pub fn handler(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.depositor_token_account.to_account_info(),
        mint: ctx.accounts.treasury_mint.to_account_info(),
        to: ctx.accounts.treasury.to_account_info(),
        authority: ctx.accounts.depositor.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token_interface::transfer_checked(cpi_ctx, amount, ctx.accounts.treasury_mint.decimals)?;

    emit!(TokensDeposited {
        config: ctx.accounts.splitter_config.key(),
        treasury: ctx.accounts.treasury.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
