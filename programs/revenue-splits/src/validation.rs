//! Consistency rules for a proposed splitter configuration.
//!
//! Everything here is side-effect free so a rejected configuration is never
//! partially applied. Rules run in a fixed order and the first violation wins.

use anchor_lang::prelude::*;

use crate::{
    constants::{BALANCE_SEED, MAX_NAME_LENGTH, PARTICIPANT_SLOTS, TOTAL_SHARE_BPS},
    errors::ErrorCode,
    state::Participant,
};

/// Checks that every used slot is bound to the balance account derived from its wallet.
/// `balance_keys[i]` is the account supplied for slot `i`; sentinel slots are ignored.
pub fn check_participant_bindings(
    config: &Pubkey,
    participants: &[Participant; PARTICIPANT_SLOTS],
    balance_keys: &[Pubkey],
) -> std::result::Result<(), ErrorCode> {
    if balance_keys.len() < PARTICIPANT_SLOTS {
        return Err(ErrorCode::InsufficientRemainingAccounts);
    }

    for (participant, supplied) in participants.iter().zip(balance_keys) {
        if participant.is_sentinel() {
            continue;
        }
        let (expected, _) = derive_balance_address(BALANCE_SEED, config, &participant.wallet);
        if *supplied != expected {
            return Err(ErrorCode::ParticipantWalletMismatch);
        }
    }

    Ok(())
}

/// Runs the share, uniqueness, sentinel, operator and name rules in order.
pub fn validate_splitter(
    name: &str,
    participants: &[Participant; PARTICIPANT_SLOTS],
    operator_wallet: &Pubkey,
) -> std::result::Result<(), ErrorCode> {
    // u16 * 5 cannot overflow u32
    let total_bps: u32 = participants.iter().map(|p| p.share_bps as u32).sum();
    if total_bps != TOTAL_SHARE_BPS {
        return Err(ErrorCode::InvalidShareDistribution);
    }

    for (i, participant) in participants.iter().enumerate() {
        if participant.is_sentinel() {
            continue;
        }
        let duplicate = participants
            .iter()
            .skip(i + 1)
            .any(|other| other.wallet == participant.wallet);
        if duplicate {
            return Err(ErrorCode::DuplicateParticipantWallet);
        }
    }

    // Sentinel may fill several unused slots but never carries a share
    if participants
        .iter()
        .any(|p| p.is_sentinel() && p.share_bps > 0)
    {
        return Err(ErrorCode::SystemProgramParticipant);
    }

    if participants
        .iter()
        .any(|p| p.share_bps > 0 && p.wallet == *operator_wallet)
    {
        return Err(ErrorCode::BotWalletConflict);
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ErrorCode::NameTooLong);
    }

    Ok(())
}

/// Derives a balance record address: `[seed, config, wallet]`
pub fn derive_balance_address(seed: &[u8], config: &Pubkey, wallet: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seed, config.as_ref(), wallet.as_ref()], &crate::ID)
}
