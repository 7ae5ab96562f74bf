use anchor_lang::prelude::*;

use crate::{
    constants::{
        BALANCE_SEED, BOT_BALANCE_SEED, OPERATOR_INCENTIVE_BPS, PARTICIPANT_SLOTS,
        SPLITTER_CONFIG_SEED, SPLITTER_CONFIG_SIZE,
    },
    errors::ErrorCode,
    events::SplitterCreated,
    state::{Participant, SplitterConfig},
    utils::{create_program_account, init_balance_record},
    validation::{check_participant_bindings, validate_splitter},
};

#[derive(Accounts)]
pub struct CreateSplitter<'info> {
    /// Authority that will control this splitter; pays for the config and balance records
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Derived from (authority, name) and allocated in the handler
    #[account(mut)]
    pub splitter_config: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a splitter config and the balance records of every beneficiary
///
/// remaining_accounts: participant balance PDAs in slot order, then the
/// operator balance PDA. Sentinel slots are ignored.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, CreateSplitter<'info>>,
    name: String,
    participants: [Participant; PARTICIPANT_SLOTS],
    operator_wallet: Pubkey,
) -> Result<()> {
    require!(
        ctx.remaining_accounts.len() > PARTICIPANT_SLOTS,
        ErrorCode::InsufficientRemainingAccounts
    );

    let config_key = ctx.accounts.splitter_config.key();
    let authority_key = ctx.accounts.authority.key();

    let balance_keys: Vec<Pubkey> = ctx.remaining_accounts[..PARTICIPANT_SLOTS]
        .iter()
        .map(|info| info.key())
        .collect();
    check_participant_bindings(&config_key, &participants, &balance_keys)?;
    validate_splitter(&name, &participants, &operator_wallet)?;

    let (expected_config, bump) = Pubkey::find_program_address(
        &[SPLITTER_CONFIG_SEED, authority_key.as_ref(), name.as_bytes()],
        &crate::ID,
    );
    require_keys_eq!(config_key, expected_config, ErrorCode::InvalidAuthority);

    let config = SplitterConfig {
        authority: authority_key,
        name,
        participants,
        operator_wallet,
        operator_fee_bps: OPERATOR_INCENTIVE_BPS,
        bump,
    };

    let config_info = ctx.accounts.splitter_config.to_account_info();
    let payer = ctx.accounts.authority.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    let seeds = config.signer_seeds();
    create_program_account(
        &config_info,
        &payer,
        &system_program,
        SPLITTER_CONFIG_SIZE,
        &[&seeds[..]],
    )?;

    {
        let mut data = config_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        config.try_serialize(&mut writer)?;
    }

    let mut balances_created = 0u8;

    for (participant, record_info) in config.participants.iter().zip(ctx.remaining_accounts) {
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
        &config.operator_wallet,
        &payer,
        &system_program,
    )? {
        balances_created += 1;
    }

    #[cfg(feature = "verbose")]
    msg!(
        "Splitter {} created with {} balance records",
        config_key,
        balances_created
    );

    emit!(SplitterCreated {
        config: config_key,
        authority: authority_key,
        name: config.name.clone(),
        operator_wallet: config.operator_wallet,
        operator_fee_bps: config.operator_fee_bps,
        balances_created,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
