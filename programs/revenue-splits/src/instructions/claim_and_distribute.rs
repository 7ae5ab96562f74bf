use anchor_lang::{prelude::*, AccountsExit};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{PARTICIPANT_SLOTS, SPLITTER_CONFIG_SEED},
    distribution::plan_distribution,
    errors::ErrorCode,
    events::FundsDistributed,
    state::SplitterConfig,
    utils::{load_balance_record, pay_out, read_treasury_balance},
};

#[derive(Accounts)]
pub struct ClaimAndDistribute<'info> {
    /// Must be the stored operator wallet
    pub operator: Signer<'info>,

    /// CHECK: Compared against the stored authority
    pub authority: UncheckedAccount<'info>,

    #[account(
        seeds = [
            SPLITTER_CONFIG_SEED,
            splitter_config.authority.as_ref(),
            splitter_config.name.as_bytes()
        ],
        bump = splitter_config.bump,
        constraint = splitter_config.authority == authority.key() @ ErrorCode::InvalidAuthority,
        constraint = splitter_config.operator_wallet == operator.key() @ ErrorCode::InvalidBot
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
        constraint = operator_token_account.mint == treasury_mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = operator_token_account.owner == operator.key() @ ErrorCode::InvalidTokenAccount
    )]
    pub operator_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Splits the current treasury balance
///
/// The operator incentive is transferred immediately; participant shares are
/// credited to their balance records and stay in the treasury until withdrawn.
/// Rounding dust also stays in the treasury and is part of the next round.
///
/// remaining_accounts: participant balance PDAs in slot order (sentinel slots ignored)
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, ClaimAndDistribute<'info>>,
) -> Result<()> {
    let (total, native_resynced) =
        read_treasury_balance(&mut ctx.accounts.treasury, &ctx.accounts.token_program)?;
    require!(total > 0, ErrorCode::NoFundsToDistribute);

    let config_key = ctx.accounts.splitter_config.key();
    let participants = ctx.accounts.splitter_config.participants;
    let plan = plan_distribution(
        total,
        ctx.accounts.splitter_config.operator_fee_bps,
        &participants,
    )?;

    require!(
        ctx.remaining_accounts.len() >= PARTICIPANT_SLOTS,
        ErrorCode::InsufficientRemainingAccounts
    );

    // Phase 1: validate and credit every record in memory
    let mut credited_records = Vec::with_capacity(PARTICIPANT_SLOTS);
    for (i, participant) in participants.iter().enumerate() {
        let share = plan.shares[i];
        if share == 0 {
            continue;
        }

        let mut record =
            load_balance_record(&ctx.remaining_accounts[i], &config_key, &participant.wallet)?;
        record.credit(share)?;
        credited_records.push(record);
    }

    // Phase 2: operator incentive is settled synchronously
    if plan.operator_amount > 0 {
        let seeds = ctx.accounts.splitter_config.signer_seeds();
        pay_out(
            &ctx.accounts.treasury,
            ctx.accounts.operator_token_account.to_account_info(),
            &ctx.accounts.treasury_mint,
            ctx.accounts.splitter_config.to_account_info(),
            &ctx.accounts.token_program,
            &[&seeds[..]],
            plan.operator_amount,
        )?;
    }

    // Phase 3: persist credits
    for record in &credited_records {
        record.exit(&crate::ID)?;
    }

    #[cfg(feature = "verbose")]
    msg!(
        "Distributed {}: operator {}, credited {}, dust {}",
        plan.total,
        plan.operator_amount,
        plan.credited,
        plan.dust
    );

    emit!(FundsDistributed {
        config: config_key,
        treasury: ctx.accounts.treasury.key(),
        mint: ctx.accounts.treasury_mint.key(),
        total_amount: plan.total,
        operator_amount: plan.operator_amount,
        participants_credited: plan.credited,
        dust: plan.dust,
        native_resynced,
        operator: ctx.accounts.operator.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
