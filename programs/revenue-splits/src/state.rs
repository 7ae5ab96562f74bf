use anchor_lang::{prelude::*, Space};

use crate::{
    constants::{
        MAX_NAME_LENGTH, PARTICIPANT_BALANCE_SIZE, PARTICIPANT_SLOTS, SENTINEL_WALLET,
        SPLITTER_CONFIG_SEED, SPLITTER_CONFIG_SIZE,
    },
    errors::ErrorCode,
};

/// Participant slot in a splitter configuration
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Participant {
    /// Beneficiary wallet (the system program marks an unused slot)
    pub wallet: Pubkey,
    /// Share of the post-incentive pool in basis points (0-10000)
    pub share_bps: u16,
}

impl Participant {
    pub fn is_sentinel(&self) -> bool {
        self.wallet == SENTINEL_WALLET
    }
}

/// Per-splitter configuration, one per (authority, name)
#[account]
#[derive(InitSpace)]
pub struct SplitterConfig {
    /// Principal allowed to update this config
    pub authority: Pubkey,
    /// Part of the PDA seeds, immutable after creation
    #[max_len(32)]
    pub name: String,
    /// Fixed participant slots; shares always sum to 10000
    pub participants: [Participant; PARTICIPANT_SLOTS],
    /// Wallet allowed to trigger distribution and receive the incentive
    pub operator_wallet: Pubkey,
    /// Operator incentive in basis points, fixed at creation
    pub operator_fee_bps: u8,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl SplitterConfig {
    /// Seeds for signing CPIs as the config PDA (treasury authority)
    pub fn signer_seeds(&self) -> [&[u8]; 4] {
        [
            SPLITTER_CONFIG_SEED,
            self.authority.as_ref(),
            self.name.as_bytes(),
            std::slice::from_ref(&self.bump),
        ]
    }
}

/// Withdrawable credit for one beneficiary of one splitter
#[account]
#[derive(InitSpace)]
pub struct ParticipantBalance {
    /// Owning splitter config
    pub splitter: Pubkey,
    /// Beneficiary wallet; the only signer allowed to withdraw
    pub participant: Pubkey,
    /// Accumulated credit in the treasury's currency
    pub amount: u64,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl ParticipantBalance {
    /// Accumulates credit. Overflow is a hard error, never saturated.
    pub fn credit(&mut self, amount: u64) -> std::result::Result<(), ErrorCode> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> std::result::Result<(), ErrorCode> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientBalance)?;
        Ok(())
    }
}

// Compile-time size assertions to catch accidental struct changes
const _: () = assert!(MAX_NAME_LENGTH == 32);
const _: () = assert!(<SplitterConfig as Space>::INIT_SPACE + 8 == SPLITTER_CONFIG_SIZE);
const _: () = assert!(<ParticipantBalance as Space>::INIT_SPACE + 8 == PARTICIPANT_BALANCE_SIZE);
