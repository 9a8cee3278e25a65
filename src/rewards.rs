multiversx_sc::imports!();

use crate::plans::{Plan, DAYS_PER_YEAR, RATE_DENOMINATOR, SECONDS_PER_YEAR};
use crate::types::Position;

// ============================================================
// Reward accrual engine + reward pool
//
// All formulas use a single truncating division at the end.
// Small principals can legitimately earn zero.
// ============================================================

#[multiversx_sc::module]
pub trait RewardModule {
    /// Reward promised at open for fixed-term plans:
    /// principal * rate * lock_days / (1000 * 365).
    /// Flexible earns through accrual only.
    fn fixed_reward(&self, principal: &BigUint, plan: Plan) -> BigUint {
        if plan.is_flexible() {
            return BigUint::zero();
        }
        (principal * plan.annual_rate_permille() * plan.lock_days())
            / (RATE_DENOMINATOR * DAYS_PER_YEAR)
    }

    /// Time-prorated accrual. Fixed-term plans stop accruing at
    /// maturity; Flexible accrues without bound.
    fn accrued_for(&self, principal: &BigUint, plan: Plan, elapsed_seconds: u64) -> BigUint {
        let effective = if plan.is_flexible() {
            elapsed_seconds
        } else {
            core::cmp::min(elapsed_seconds, plan.lock_seconds())
        };
        (principal * plan.annual_rate_permille() * effective)
            / (RATE_DENOMINATOR * SECONDS_PER_YEAR)
    }

    /// Total claimable for a position: the promised fixed reward plus
    /// carried accrual, plus (Flexible only) live accrual since the
    /// last clock reset, capped to whatever the pool still holds.
    fn settle_amount(&self, position: &Position<Self::Api>, now: u64) -> BigUint {
        let mut total = &position.fixed_reward + &position.accrued_reward;
        if position.plan.is_flexible() {
            let live = self.accrued_for(
                &position.amount,
                position.plan,
                now - position.opened_at,
            );
            let pool = self.reward_pool().get();
            total += if live > pool { pool } else { live };
        }
        total
    }

    /// Runs the claim computation and debits the pool by the settled
    /// amount. The debit happens on every settlement, including ones
    /// whose payout is later forfeited or clamped.
    fn settle_and_debit(&self, position: &Position<Self::Api>, now: u64) -> BigUint {
        let settled = self.settle_amount(position, now);
        self.debit_reward_pool(&settled);
        settled
    }

    /// Pre-check before promising a new fixed reward. Purely advisory:
    /// nothing is earmarked, the pool is only debited at settlement.
    fn reserve_reward(&self, amount: &BigUint) {
        require!(self.reward_pool().get() >= *amount, "insufficient reward pool");
    }

    /// Saturating debit. The pool is allowed to run dry; it is never
    /// pushed below zero.
    fn debit_reward_pool(&self, amount: &BigUint) {
        self.reward_pool().update(|pool| {
            if *pool > *amount {
                *pool -= amount;
            } else {
                *pool = BigUint::zero();
            }
        });
    }

    /// Caps post-claim holding (principal + reward) at the configured
    /// share of the token supply. Aborts if the principal alone is
    /// already above the cap.
    fn clamp_to_holding_cap(&self, principal: &BigUint, reward: BigUint) -> BigUint {
        let cap = self.token_supply().get() * self.max_holding_percent().get() / 100u64;
        require!(*principal <= cap, "position exceeds holding cap");
        let headroom = cap - principal;
        if reward > headroom {
            headroom
        } else {
            reward
        }
    }

    #[storage_mapper("rewardPool")]
    fn reward_pool(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("tokenSupply")]
    fn token_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("maxHoldingPercent")]
    fn max_holding_percent(&self) -> SingleValueMapper<u64>;
}
