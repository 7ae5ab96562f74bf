//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::*, not modular crates

use {
    solana_sdk::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program,
    },
    spl_associated_token_account,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("6anbDQNCcVh2f6okexjaX1VGj6tEnizJ1kV5UTBS8Zhi");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
pub const DISCRIMINATOR_CREATE_SPLITTER: [u8; 8] = [0xab, 0x2e, 0xa3, 0x12, 0x1d, 0x14, 0x52, 0x9d];
pub const DISCRIMINATOR_UPDATE_SPLITTER: [u8; 8] = [0x2d, 0x02, 0xc7, 0x07, 0x60, 0xf9, 0x89, 0xff];
pub const DISCRIMINATOR_DEPOSIT_TOKENS: [u8; 8] = [0xb0, 0x53, 0xe5, 0x12, 0xbf, 0x8f, 0xb0, 0x96];
pub const DISCRIMINATOR_CLAIM_AND_DISTRIBUTE: [u8; 8] = [0x6f, 0x93, 0xd2, 0x90, 0xfd, 0x10, 0xbb, 0xee];
pub const DISCRIMINATOR_WITHDRAW_SHARE: [u8; 8] = [0xa9, 0x9f, 0x34, 0x4f, 0x3b, 0xbe, 0x9f, 0x09];

pub const PARTICIPANT_SLOTS: usize = 5;

/// Participant slot as passed in instruction data
#[derive(Clone, Copy, Debug, Default)]
pub struct ParticipantInput {
    pub wallet: Pubkey,
    pub share_bps: u16,
}

impl ParticipantInput {
    pub fn new(wallet: Pubkey, share_bps: u16) -> Self {
        Self { wallet, share_bps }
    }

    /// Unused slot: system program wallet, no share
    pub fn sentinel() -> Self {
        Self::default()
    }
}

/// Derive splitter config PDA
pub fn derive_splitter_config(authority: &Pubkey, name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"splitter_config", authority.as_ref(), name.as_bytes()],
        &PROGRAM_ID,
    )
}

/// Derive participant balance PDA
pub fn derive_participant_balance(splitter_config: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"balance", splitter_config.as_ref(), wallet.as_ref()],
        &PROGRAM_ID,
    )
}

/// Derive operator balance PDA
pub fn derive_operator_balance(splitter_config: &Pubkey, operator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"bot_balance", splitter_config.as_ref(), operator.as_ref()],
        &PROGRAM_ID,
    )
}

/// Balance accounts for each slot, system program for unused ones
pub fn derive_slot_balances(
    splitter_config: &Pubkey,
    participants: &[ParticipantInput; PARTICIPANT_SLOTS],
) -> [Pubkey; PARTICIPANT_SLOTS] {
    let mut keys = [system_program::id(); PARTICIPANT_SLOTS];
    for (i, participant) in participants.iter().enumerate() {
        if participant.wallet != system_program::id() {
            keys[i] = derive_participant_balance(splitter_config, &participant.wallet).0;
        }
    }
    keys
}

/// Derive treasury address (ATA owned by splitter_config)
pub fn derive_treasury(splitter_config: &Pubkey, mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(splitter_config, mint)
}

/// Balance accounts are writable; sentinel placeholders are not
fn balance_metas(balance_accounts: &[Pubkey]) -> Vec<AccountMeta> {
    balance_accounts
        .iter()
        .map(|key| {
            if *key == system_program::id() {
                AccountMeta::new_readonly(*key, false)
            } else {
                AccountMeta::new(*key, false)
            }
        })
        .collect()
}

/// Borsh layout of (name, participants, operator_wallet)
fn splitter_args(
    discriminator: [u8; 8],
    name: &str,
    participants: &[ParticipantInput; PARTICIPANT_SLOTS],
    operator_wallet: Pubkey,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(8 + 4 + name.len() + PARTICIPANT_SLOTS * 34 + 32);
    data.extend_from_slice(&discriminator);

    // String: 4-byte length prefix + bytes
    data.extend_from_slice(&(name.len() as u32).to_le_bytes());
    data.extend_from_slice(name.as_bytes());

    // Fixed array: no length prefix
    for participant in participants {
        data.extend_from_slice(&participant.wallet.to_bytes());
        data.extend_from_slice(&participant.share_bps.to_le_bytes());
    }

    data.extend_from_slice(&operator_wallet.to_bytes());
    data
}

/// Build create_splitter instruction
///
/// Accounts (matching CreateSplitter context order):
/// 0. authority (writable, signer)
/// 1. splitter_config (writable)
/// 2. system_program
/// remaining_accounts: 5 slot balances, then the operator balance
pub fn build_create_splitter(
    authority: Pubkey,
    splitter_config: Pubkey,
    name: &str,
    participants: &[ParticipantInput; PARTICIPANT_SLOTS],
    operator_wallet: Pubkey,
    balance_accounts: &[Pubkey],
    operator_balance: Pubkey,
) -> Instruction {
    let data = splitter_args(DISCRIMINATOR_CREATE_SPLITTER, name, participants, operator_wallet);

    let mut accounts = vec![
        AccountMeta::new(authority, true),
        AccountMeta::new(splitter_config, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    accounts.extend(balance_metas(balance_accounts));
    accounts.push(AccountMeta::new(operator_balance, false));

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

/// Build update_splitter instruction
///
/// Accounts (matching UpdateSplitter context order):
/// 0. authority (writable, signer)
/// 1. splitter_config (writable)
/// 2. system_program
/// remaining_accounts: 5 slot balances, then the operator balance
pub fn build_update_splitter(
    authority: Pubkey,
    splitter_config: Pubkey,
    name: &str,
    participants: &[ParticipantInput; PARTICIPANT_SLOTS],
    operator_wallet: Pubkey,
    balance_accounts: &[Pubkey],
    operator_balance: Pubkey,
) -> Instruction {
    let data = splitter_args(DISCRIMINATOR_UPDATE_SPLITTER, name, participants, operator_wallet);

    let mut accounts = vec![
        AccountMeta::new(authority, true),
        AccountMeta::new(splitter_config, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    accounts.extend(balance_metas(balance_accounts));
    accounts.push(AccountMeta::new(operator_balance, false));

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

/// Build deposit_tokens instruction
///
/// Accounts:
/// 0. depositor (signer)
/// 1. splitter_config
/// 2. treasury (writable)
/// 3. treasury_mint
/// 4. depositor_token_account (writable)
/// 5. token_program
pub fn build_deposit_tokens(
    depositor: Pubkey,
    splitter_config: Pubkey,
    treasury: Pubkey,
    mint: Pubkey,
    depositor_token_account: Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 8);
    data.extend_from_slice(&DISCRIMINATOR_DEPOSIT_TOKENS);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(depositor, true),
            AccountMeta::new_readonly(splitter_config, false),
            AccountMeta::new(treasury, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new(depositor_token_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    }
}

/// Build claim_and_distribute instruction
///
/// Accounts:
/// 0. operator (signer)
/// 1. authority
/// 2. splitter_config
/// 3. treasury (writable)
/// 4. treasury_mint
/// 5. operator_token_account (writable)
/// 6. token_program
/// remaining_accounts: 5 slot balances (writable)
pub fn build_claim_and_distribute(
    operator: Pubkey,
    authority: Pubkey,
    splitter_config: Pubkey,
    treasury: Pubkey,
    mint: Pubkey,
    operator_token_account: Pubkey,
    balance_accounts: &[Pubkey],
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new_readonly(operator, true),
        AccountMeta::new_readonly(authority, false),
        AccountMeta::new_readonly(splitter_config, false),
        AccountMeta::new(treasury, false),
        AccountMeta::new_readonly(mint, false),
        AccountMeta::new(operator_token_account, false),
        AccountMeta::new_readonly(spl_token::id(), false),
    ];
    accounts.extend(balance_metas(balance_accounts));

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data: DISCRIMINATOR_CLAIM_AND_DISTRIBUTE.to_vec(),
    }
}

/// Build withdraw_share instruction
///
/// Accounts:
/// 0. participant (signer)
/// 1. authority
/// 2. splitter_config
/// 3. participant_balance (writable)
/// 4. treasury (writable)
/// 5. treasury_mint
/// 6. destination (writable)
/// 7. token_program
pub fn build_withdraw_share(
    participant: Pubkey,
    authority: Pubkey,
    splitter_config: Pubkey,
    participant_balance: Pubkey,
    treasury: Pubkey,
    mint: Pubkey,
    destination: Pubkey,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(participant, true),
            AccountMeta::new_readonly(authority, false),
            AccountMeta::new_readonly(splitter_config, false),
            AccountMeta::new(participant_balance, false),
            AccountMeta::new(treasury, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data: DISCRIMINATOR_WITHDRAW_SHARE.to_vec(),
    }
}
