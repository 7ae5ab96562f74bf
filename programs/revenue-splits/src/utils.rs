use anchor_lang::{
    prelude::*,
    system_program::{self, Allocate, Assign, CreateAccount, Transfer},
};
use anchor_spl::{
    token, token_2022,
    token_interface::{self, Mint, SyncNative, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::{BALANCE_SEED, PARTICIPANT_BALANCE_SIZE},
    errors::ErrorCode,
    state::ParticipantBalance,
};

/// Wrapped SOL under either token program
pub fn is_native_mint(mint: &Pubkey) -> bool {
    *mint == token::spl_token::native_mint::ID
        || *mint == token_2022::spl_token_2022::native_mint::ID
}

/// Reads the treasury balance.
///
/// Lamports sent to a wrapped SOL account with a plain system transfer are not
/// reflected in its token amount until SyncNative runs, so native treasuries
/// are resynced and reloaded before reading. Returns the amount and whether a
/// resync happened.
pub fn read_treasury_balance<'info>(
    treasury: &mut InterfaceAccount<'info, TokenAccount>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<(u64, bool)> {
    if !is_native_mint(&treasury.mint) {
        return Ok((treasury.amount, false));
    }

    let cpi_ctx = CpiContext::new(
        token_program.to_account_info(),
        SyncNative {
            account: treasury.to_account_info(),
        },
    );
    token_interface::sync_native(cpi_ctx)?;

    // Deserialized state is stale after the CPI
    treasury.reload()?;

    Ok((treasury.amount, true))
}

/// Transfers `amount` out of the treasury, signed by the config PDA
#[allow(clippy::too_many_arguments)]
pub fn pay_out<'info>(
    treasury: &InterfaceAccount<'info, TokenAccount>,
    destination: AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    treasury_authority: AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    require!(
        treasury.amount >= amount,
        ErrorCode::InsufficientTreasuryBalance
    );

    let cpi_accounts = TransferChecked {
        from: treasury.to_account_info(),
        mint: mint.to_account_info(),
        to: destination,
        authority: treasury_authority,
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}

/// Allocates a program-owned PDA, tolerating lamports already sent to the address
pub fn create_program_account<'info>(
    target: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program_info: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required_lamports = Rent::get()?.minimum_balance(space);
    let current_lamports = target.lamports();

    if current_lamports == 0 {
        let cpi_ctx = CpiContext::new_with_signer(
            system_program_info.clone(),
            CreateAccount {
                from: payer.clone(),
                to: target.clone(),
            },
            signer_seeds,
        );
        return system_program::create_account(cpi_ctx, required_lamports, space as u64, &crate::ID);
    }

    if required_lamports > current_lamports {
        let cpi_ctx = CpiContext::new(
            system_program_info.clone(),
            Transfer {
                from: payer.clone(),
                to: target.clone(),
            },
        );
        system_program::transfer(cpi_ctx, required_lamports - current_lamports)?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program_info.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program_info.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}

/// Creates the balance record for `beneficiary` or re-validates an existing one.
/// Returns true when a new account was allocated.
pub fn init_balance_record<'info>(
    record_info: &AccountInfo<'info>,
    seed: &[u8],
    splitter: &Pubkey,
    beneficiary: &Pubkey,
    payer: &AccountInfo<'info>,
    system_program_info: &AccountInfo<'info>,
) -> Result<bool> {
    let (expected, bump) = Pubkey::find_program_address(
        &[seed, splitter.as_ref(), beneficiary.as_ref()],
        &crate::ID,
    );
    require_keys_eq!(record_info.key(), expected, ErrorCode::InvalidBalanceRecord);

    // Kept across updates: a wallet that returns to the split reuses its record
    if record_info.owner == &crate::ID {
        let existing =
            ParticipantBalance::try_deserialize(&mut &record_info.try_borrow_data()?[..])
                .map_err(|_| ErrorCode::InvalidBalanceRecord)?;
        require!(
            existing.splitter == *splitter && existing.participant == *beneficiary,
            ErrorCode::InvalidBalanceRecord
        );
        return Ok(false);
    }

    let bump_seed = [bump];
    let seeds: [&[u8]; 4] = [seed, splitter.as_ref(), beneficiary.as_ref(), &bump_seed];
    create_program_account(
        record_info,
        payer,
        system_program_info,
        PARTICIPANT_BALANCE_SIZE,
        &[&seeds[..]],
    )?;

    let record = ParticipantBalance {
        splitter: *splitter,
        participant: *beneficiary,
        amount: 0,
        bump,
    };
    let mut data = record_info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)?;

    Ok(true)
}

/// Loads a participant balance for crediting and re-derives its address
pub fn load_balance_record<'info>(
    record_info: &'info AccountInfo<'info>,
    splitter: &Pubkey,
    beneficiary: &Pubkey,
) -> Result<Account<'info, ParticipantBalance>> {
    require!(record_info.is_writable, ErrorCode::InvalidBalanceRecord);

    let record = Account::<'info, ParticipantBalance>::try_from(record_info)
        .map_err(|_| ErrorCode::InvalidBalanceRecord)?;

    require!(
        record.splitter == *splitter && record.participant == *beneficiary,
        ErrorCode::InvalidBalanceRecord
    );
    require!(
        balance_address_matches(record_info.key, BALANCE_SEED, splitter, beneficiary, record.bump),
        ErrorCode::InvalidBalanceRecord
    );

    Ok(record)
}

/// Re-derives `[seed, splitter, beneficiary, bump]` and compares with `key`
pub fn balance_address_matches(
    key: &Pubkey,
    seed: &[u8],
    splitter: &Pubkey,
    beneficiary: &Pubkey,
    bump: u8,
) -> bool {
    Pubkey::create_program_address(
        &[seed, splitter.as_ref(), beneficiary.as_ref(), &[bump]],
        &crate::ID,
    )
    .map(|derived| derived == *key)
    .unwrap_or(false)
}
