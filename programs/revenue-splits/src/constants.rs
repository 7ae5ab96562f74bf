use anchor_lang::prelude::*;

// PDA seeds
pub const SPLITTER_CONFIG_SEED: &[u8] = b"splitter_config";
pub const BALANCE_SEED: &[u8] = b"balance";
pub const BOT_BALANCE_SEED: &[u8] = b"bot_balance";

// Share configuration
pub const PARTICIPANT_SLOTS: usize = 5;
pub const TOTAL_SHARE_BPS: u32 = 10_000;      // Participants must total 100%
pub const BPS_DENOMINATOR: u128 = 10_000;
pub const OPERATOR_INCENTIVE_BPS: u8 = 200;   // 2%, fixed at creation

// A single PDA seed is at most 32 bytes
pub const MAX_NAME_LENGTH: usize = 32;

// Unused participant slots point at the system program (all-zero key)
pub const SENTINEL_WALLET: Pubkey = anchor_lang::system_program::ID;

// Account sizes
// SplitterConfig:
// - discriminator: 8
// - authority: 32
// - name: 4 (length prefix) + 32
// - participants: [Participant; 5] = (32 + 2) * 5 = 170
// - operator_wallet: 32
// - operator_fee_bps: 1
// - bump: 1
// Total: 8 + 32 + 36 + 170 + 32 + 1 + 1 = 280
pub const SPLITTER_CONFIG_SIZE: usize = 280;

// ParticipantBalance: discriminator (8) + splitter (32) + participant (32) + amount (8) + bump (1)
pub const PARTICIPANT_BALANCE_SIZE: usize = 8 + 32 + 32 + 8 + 1; // 81 bytes
