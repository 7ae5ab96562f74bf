//! Arithmetic plan for one claim-and-distribute round.

use crate::{
    constants::{BPS_DENOMINATOR, PARTICIPANT_SLOTS},
    errors::ErrorCode,
    state::Participant,
};

/// Amounts moved by a single distribution call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DistributionPlan {
    /// Treasury balance read at the start of the call
    pub total: u64,
    /// Incentive paid to the operator immediately
    pub operator_amount: u64,
    /// `total - operator_amount`, split between participants
    pub remaining: u64,
    /// Credit per slot, in slot order
    pub shares: [u64; PARTICIPANT_SLOTS],
    /// Sum of `shares`
    pub credited: u64,
    /// Floor-rounding remainder left in the treasury for the next round
    pub dust: u64,
}

impl DistributionPlan {
    /// Amount that leaves the treasury (or becomes owed) in this round
    pub fn distributed(&self) -> u64 {
        self.operator_amount + self.credited
    }
}

/// floor(amount * bps / 10000) with a u128 intermediate
pub fn bps_of(amount: u64, bps: u16) -> std::result::Result<u64, ErrorCode> {
    (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(ErrorCode::ArithmeticOverflow)?
        .checked_div(BPS_DENOMINATOR)
        .ok_or(ErrorCode::ArithmeticOverflow)?
        .try_into()
        .map_err(|_| ErrorCode::ArithmeticOverflow)
}

/// Computes the operator incentive, per-slot credits and dust for `total`.
///
/// Slots are processed in fixed order 0..5. Each share is floored, so
/// `credited <= remaining` always holds and the remainder stays in the
/// treasury. A sentinel slot carrying a share is rejected rather than
/// silently skipped.
pub fn plan_distribution(
    total: u64,
    operator_fee_bps: u8,
    participants: &[Participant; PARTICIPANT_SLOTS],
) -> std::result::Result<DistributionPlan, ErrorCode> {
    if total == 0 {
        return Err(ErrorCode::NoFundsToDistribute);
    }

    let operator_amount = bps_of(total, operator_fee_bps as u16)?;
    let remaining = total
        .checked_sub(operator_amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    let mut shares = [0u64; PARTICIPANT_SLOTS];
    let mut credited = 0u64;

    for (i, participant) in participants.iter().enumerate() {
        if participant.is_sentinel() {
            if participant.share_bps > 0 {
                return Err(ErrorCode::SystemProgramParticipant);
            }
            continue;
        }

        let share = bps_of(remaining, participant.share_bps)?;
        shares[i] = share;
        credited = credited
            .checked_add(share)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
    }

    let dust = remaining
        .checked_sub(credited)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    Ok(DistributionPlan {
        total,
        operator_amount,
        remaining,
        shares,
        credited,
        dust,
    })
}
