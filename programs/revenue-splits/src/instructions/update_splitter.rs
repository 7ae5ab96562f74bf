use anchor_lang::prelude::*;

use crate::{
    constants::{BALANCE_SEED, BOT_BALANCE_SEED, PARTICIPANT_SLOTS, SPLITTER_CONFIG_SEED},
    errors::ErrorCode,
    events::SplitterUpdated,
    state::{Participant, SplitterConfig},
    utils::init_balance_record,
    validation::{check_participant_bindings, validate_splitter},
};

#[derive(Accounts)]
pub struct UpdateSplitter<'info> {
    /// Stored authority; pays for balance records of newly added wallets
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        constraint = splitter_config.authority == authority.key() @ ErrorCode::InvalidAuthority
    )]
    pub splitter_config: Box<Account<'info, SplitterConfig>>,

    pub system_program: Program<'info, System>,
}

/// Replaces the participants and operator wallet
///
/// Name and operator fee are immutable. Balance records of wallets that leave
/// the split are kept so their credit stays withdrawable.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, UpdateSplitter<'info>>,
    name: String,
    participants: [Participant; PARTICIPANT_SLOTS],
    operator_wallet: Pubkey,
) -> Result<()> {
    let config_key = ctx.accounts.splitter_config.key();
    let authority_key = ctx.accounts.authority.key();

    require!(
        ctx.accounts.splitter_config.name == name,
        ErrorCode::NameMismatch
    );

    // Re-derive from the signer rather than trusting the supplied account
    let derived = Pubkey::create_program_address(
        &[
            SPLITTER_CONFIG_SEED,
            authority_key.as_ref(),
            name.as_bytes(),
            &[ctx.accounts.splitter_config.bump],
        ],
        &crate::ID,
    )
    .map_err(|_| ErrorCode::InvalidAuthority)?;
    require_keys_eq!(derived, config_key, ErrorCode::InvalidAuthority);

    require!(
        ctx.remaining_accounts.len() > PARTICIPANT_SLOTS,
        ErrorCode::InsufficientRemainingAccounts
    );

    let balance_keys: Vec<Pubkey> = ctx.remaining_accounts[..PARTICIPANT_SLOTS]
        .iter()
        .map(|info| info.key())
        .collect();
    check_participant_bindings(&config_key, &participants, &balance_keys)?;
    validate_splitter(&name, &participants, &operator_wallet)?;

    let payer = ctx.accounts.authority.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();
    let mut balances_created = 0u8;

    for (participant, record_info) in participants.iter().zip(ctx.remaining_accounts) {
        if participant.is_sentinel() {
            continue;
        }
        if init_balance_record(
            record_info,
            BALANCE_SEED,
            &config_key,
            &participant.wallet,
            &payer,
            &system_program,
        )? {
            balances_created += 1;
        }
    }

    if init_balance_record(
        &ctx.remaining_accounts[PARTICIPANT_SLOTS],
        BOT_BALANCE_SEED,
        &config_key,
        &operator_wallet,
        &payer,
        &system_program,
    )? {
        balances_created += 1;
    }

    let splitter_config = &mut ctx.accounts.splitter_config;
    let old_operator_wallet = splitter_config.operator_wallet;

    splitter_config.participants = participants;
    splitter_config.operator_wallet = operator_wallet;

    emit!(SplitterUpdated {
        config: config_key,
        authority: authority_key,
        old_operator_wallet,
        new_operator_wallet: operator_wallet,
        balances_created,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
