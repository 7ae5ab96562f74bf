use anchor_lang::prelude::*;

#[event]
pub struct SplitterCreated {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub operator_wallet: Pubkey,
    pub operator_fee_bps: u8,
    pub balances_created: u8,
    pub timestamp: i64,
}

#[event]
pub struct SplitterUpdated {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub old_operator_wallet: Pubkey,
    pub new_operator_wallet: Pubkey,
    pub balances_created: u8,
    pub timestamp: i64,
}

#[event]
pub struct TokensDeposited {
    pub config: Pubkey,
    pub treasury: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct FundsDistributed {
    pub config: Pubkey,
    pub treasury: Pubkey,
    pub mint: Pubkey,
    pub total_amount: u64,
    pub operator_amount: u64,
    pub participants_credited: u64,
    pub dust: u64,
    pub native_resynced: bool,
    pub operator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ShareWithdrawn {
    pub config: Pubkey,
    pub participant: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
