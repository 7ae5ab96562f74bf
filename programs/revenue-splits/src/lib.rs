use anchor_lang::prelude::*;

pub mod constants;
pub mod distribution;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
mod utils;
pub mod validation;

use instructions::*;
use state::Participant;

declare_id!("6anbDQNCcVh2f6okexjaX1VGj6tEnizJ1kV5UTBS8Zhi");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Revenue Splits",
    project_url: "https://github.com/revenue-splits/revenue-splits",
    contacts: "link:https://github.com/revenue-splits/revenue-splits/security",
    policy: "https://github.com/revenue-splits/revenue-splits/blob/main/SECURITY.md",
    source_code: "https://github.com/revenue-splits/revenue-splits",
    source_release: "v0.1.0"
}

#[program]
pub mod revenue_splits {
    use super::*;

    /// Creates a splitter config at ["splitter_config", authority, name]
    /// and the balance records for every used slot plus the operator
    ///
    /// remaining_accounts: 5 participant balance PDAs in slot order, then the operator record
    pub fn create_splitter<'info>(
        ctx: Context<'_, '_, 'info, 'info, CreateSplitter<'info>>,
        name: String,
        participants: [Participant; constants::PARTICIPANT_SLOTS],
        operator_wallet: Pubkey,
    ) -> Result<()> {
        instructions::create_splitter::handler(ctx, name, participants, operator_wallet)
    }

    /// Replaces participants and operator wallet
    /// Only callable by the stored authority; existing balances are kept
    pub fn update_splitter<'info>(
        ctx: Context<'_, '_, 'info, 'info, UpdateSplitter<'info>>,
        name: String,
        participants: [Participant; constants::PARTICIPANT_SLOTS],
        operator_wallet: Pubkey,
    ) -> Result<()> {
        instructions::update_splitter::handler(ctx, name, participants, operator_wallet)
    }

    /// Moves tokens from the depositor into the splitter treasury
    /// Permissionless
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::handler(ctx, amount)
    }

    /// Splits the treasury balance: pays the operator, credits participants
    /// Only callable by the configured operator wallet
    pub fn claim_and_distribute<'info>(
        ctx: Context<'_, '_, 'info, 'info, ClaimAndDistribute<'info>>,
    ) -> Result<()> {
        instructions::claim_and_distribute::handler(ctx)
    }

    /// Withdraws the caller's full credited balance
    pub fn withdraw_share(ctx: Context<WithdrawShare>) -> Result<()> {
        instructions::withdraw_share::handler(ctx)
    }
}
