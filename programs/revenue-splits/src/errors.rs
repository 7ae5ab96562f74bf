use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid share distribution - must sum to 10,000")]
    InvalidShareDistribution,

    #[msg("Duplicate participant wallet detected")]
    DuplicateParticipantWallet,

    #[msg("System program cannot be a participant wallet with a non-zero share")]
    SystemProgramParticipant,

    #[msg("Bot wallet cannot be the same as any participant wallet")]
    BotWalletConflict,

    #[msg("Name too long")]
    NameTooLong,

    #[msg("Provided name does not match splitter config name")]
    NameMismatch,

    #[msg("Participant wallet mismatch - balance account does not match participant wallet")]
    ParticipantWalletMismatch,

    #[msg("Invalid authority provided")]
    InvalidAuthority,

    #[msg("Invalid bot wallet")]
    InvalidBot,

    #[msg("Unauthorized withdrawal attempt")]
    UnauthorizedWithdrawal,

    #[msg("No funds to distribute")]
    NoFundsToDistribute,

    #[msg("Insufficient balance for withdrawal")]
    InsufficientBalance,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Insufficient treasury balance")]
    InsufficientTreasuryBalance,

    #[msg("Invalid participant balance account")]
    InvalidBalanceRecord,

    #[msg("Not enough accounts provided in remaining_accounts")]
    InsufficientRemainingAccounts,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,
}
