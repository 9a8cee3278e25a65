#![no_std]

multiversx_sc::imports!();

pub mod gateway;
pub mod guard;
pub mod ledger;
pub mod ownership;
pub mod plans;
pub mod rewards;
pub mod types;

use plans::{Plan, SECONDS_PER_DAY};
use types::Position;

// ============================================================
// Constants
// ============================================================

/// Seconds a Flexible position must be held before withdrawal
const FLEX_MIN_HOLD_SECONDS: u64 = 7 * SECONDS_PER_DAY;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TimelockStaking:
    gateway::GatewayModule
    + guard::GuardModule
    + ledger::LedgerModule
    + ownership::OwnershipModule
    + rewards::RewardModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `token_supply` is captured here because the ESDT ledger offers
    /// no on-chain supply query; the holding cap is computed from it.
    #[init]
    fn init(
        &self,
        staking_token: EgldOrEsdtTokenIdentifier,
        token_supply: BigUint,
        max_holding_percent: u64,
    ) {
        require!(staking_token.is_valid(), "invalid staking token");
        require!(token_supply > 0u64, "token supply must be positive");
        require!(
            max_holding_percent > 0 && max_holding_percent <= 100,
            "invalid holding cap percent"
        );

        self.staking_token().set(&staking_token);
        self.token_supply().set(&token_supply);
        self.max_holding_percent().set(max_holding_percent);
        self.operator().set(&self.blockchain().get_caller());
        self.guard_status().set(guard::GUARD_IDLE);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: stake
    // Opens the caller's position under the given plan. The pool
    // must already cover the reward promised at open.
    // ========================================================

    #[endpoint(stake)]
    #[payable("*")]
    fn stake(&self, plan: Plan) {
        self.guard_enter();
        self.require_not_operator();

        let caller = self.blockchain().get_caller();
        let amount = self.accept_deposit();

        let promised = self.fixed_reward(&amount, plan);
        self.reserve_reward(&promised);
        self.open_position(&caller, plan, amount.clone(), promised);

        self.stake_event(&caller, plan, &amount);
        self.guard_exit();
    }

    // ========================================================
    // ENDPOINT: stakeMore
    // Tops up an existing position. Accrual earned so far is
    // carried into the accrued field, then the clock restarts
    // and the fixed reward is recomputed on the new principal.
    // ========================================================

    #[endpoint(stakeMore)]
    #[payable("*")]
    fn stake_more(&self, plan: Plan) {
        self.guard_enter();

        let caller = self.blockchain().get_caller();
        let added = self.accept_deposit();

        let lookup = self.position(&caller, plan);
        require!(!lookup.is_empty(), "no balance");
        let mut position = lookup.get();

        let now = self.blockchain().get_block_timestamp();
        let carried = self.accrued_for(&position.amount, plan, now - position.opened_at);
        position.accrued_reward += carried;
        position.amount += &added;
        position.opened_at = now;
        position.fixed_reward = self.fixed_reward(&position.amount, plan);

        self.reserve_reward(&position.fixed_reward);
        self.update_position(&position, &added);

        self.stake_update_event(&caller, plan, &position.amount);
        self.guard_exit();
    }

    // ========================================================
    // ENDPOINT: claimReward
    // Pays out the settled reward of a matured position and
    // restarts its clock. The position itself stays open.
    // ========================================================

    #[endpoint(claimReward)]
    fn claim_reward(&self, plan: Plan) {
        self.guard_enter();

        let caller = self.blockchain().get_caller();
        let lookup = self.position(&caller, plan);
        require!(!lookup.is_empty(), "no balance");
        let mut position = lookup.get();

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= position.opened_at + plan.lock_seconds(),
            "position not matured"
        );

        let settled = self.settle_and_debit(&position, now);
        let reward = self.clamp_to_holding_cap(&position.amount, settled);

        position.accrued_reward = BigUint::zero();
        position.opened_at = now;
        self.store_position(&position);

        self.pay_out(&caller, &reward);

        self.reward_claim_event(&caller, &reward);
        self.guard_exit();
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Closes the position. Fixed plans exited before maturity
    // forfeit the reward; Flexible must have passed its minimum
    // hold window.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, plan: Plan) {
        self.guard_enter();
        self.require_not_operator();

        let caller = self.blockchain().get_caller();
        let lookup = self.position(&caller, plan);
        require!(!lookup.is_empty(), "no balance");
        let position = lookup.get();

        let now = self.blockchain().get_block_timestamp();
        if plan.is_flexible() {
            require!(
                now >= position.opened_at + FLEX_MIN_HOLD_SECONDS,
                "minimum hold not elapsed"
            );
        }

        let settled = self.settle_and_debit(&position, now);
        let reward = if now >= position.opened_at + plan.lock_seconds() {
            self.clamp_to_holding_cap(&position.amount, settled)
        } else {
            // forfeiture: the settlement above already ran
            BigUint::zero()
        };

        self.remove_position(&caller, plan);
        let payout = &position.amount + &reward;
        self.pay_out(&caller, &payout);

        self.withdraw_event(&caller, plan, &position.amount);
        self.guard_exit();
    }

    // ========================================================
    // ENDPOINT: emergencyWithdraw
    // Principal out, nothing else. No settlement runs and the
    // pool is left untouched.
    // ========================================================

    #[endpoint(emergencyWithdraw)]
    fn emergency_withdraw(&self, plan: Plan) {
        self.guard_enter();
        self.require_not_operator();

        let caller = self.blockchain().get_caller();
        require!(!self.position(&caller, plan).is_empty(), "no balance");

        let removed = self.remove_position(&caller, plan);
        self.send()
            .direct(&caller, &self.staking_token().get(), 0, &removed.amount);

        self.emergency_withdraw_event(&caller, plan, &removed.amount);
        self.guard_exit();
    }

    // ========================================================
    // ENDPOINT: fundRewards
    // Operator tops up the reward pool. The credit is the amount
    // actually received with the call.
    // ========================================================

    #[endpoint(fundRewards)]
    #[payable("*")]
    fn fund_rewards(&self) {
        self.guard_enter();
        self.require_operator();

        let caller = self.blockchain().get_caller();
        let amount = self.accept_deposit();
        self.reward_pool().update(|pool| *pool += &amount);

        self.pool_funded_event(&caller, &amount);
        self.guard_exit();
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(isMatured)]
    fn is_matured(&self, owner: ManagedAddress, plan: Plan) -> bool {
        let lookup = self.position(&owner, plan);
        if lookup.is_empty() {
            return false;
        }
        let position = lookup.get();
        self.blockchain().get_block_timestamp() >= position.opened_at + plan.lock_seconds()
    }

    #[view(isActive)]
    fn is_active(&self, owner: ManagedAddress, plan: Plan) -> bool {
        !self.position(&owner, plan).is_empty()
    }

    #[view(getPositionCount)]
    fn get_position_count(&self) -> usize {
        self.position_list().len()
    }

    #[view(getTotalStaked)]
    fn get_total_staked(&self) -> BigUint {
        self.total_staked().get()
    }

    #[view(getStakedBalance)]
    fn get_staked_balance(&self, owner: ManagedAddress, plan: Plan) -> BigUint {
        self.balance_of(&owner, plan)
    }

    /// Settlement preview: what a claim would pay right now. Reads
    /// the pool for the Flexible live term but debits nothing.
    #[view(getPendingReward)]
    fn get_pending_reward(&self, owner: ManagedAddress, plan: Plan) -> BigUint {
        let lookup = self.position(&owner, plan);
        if lookup.is_empty() {
            return BigUint::zero();
        }
        let position = lookup.get();
        let now = self.blockchain().get_block_timestamp();
        let settled = self.settle_amount(&position, now);
        self.clamp_to_holding_cap(&position.amount, settled)
    }

    #[view(getAllBalances)]
    fn get_all_balances(
        &self,
        owner: ManagedAddress,
    ) -> MultiValue5<BigUint, BigUint, BigUint, BigUint, BigUint> {
        (
            self.balance_of(&owner, Plan::Days30),
            self.balance_of(&owner, Plan::Days90),
            self.balance_of(&owner, Plan::Days180),
            self.balance_of(&owner, Plan::Days360),
            self.balance_of(&owner, Plan::Flexible),
        )
            .into()
    }

    #[view(getPositions)]
    fn get_positions(&self, start: usize, end: usize) -> MultiValueEncoded<Position<Self::Api>> {
        self.positions_slice(start, end)
    }

    #[view(getRewardPool)]
    fn get_reward_pool(&self) -> BigUint {
        self.reward_pool().get()
    }

    #[view(getContractConfig)]
    fn get_contract_config(
        &self,
    ) -> MultiValue4<EgldOrEsdtTokenIdentifier, BigUint, u64, BigUint> {
        (
            self.staking_token().get(),
            self.token_supply().get(),
            self.max_holding_percent().get(),
            self.reward_pool().get(),
        )
            .into()
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn balance_of(&self, owner: &ManagedAddress, plan: Plan) -> BigUint {
        let lookup = self.position(owner, plan);
        if lookup.is_empty() {
            BigUint::zero()
        } else {
            lookup.get().amount
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("stake")]
    fn stake_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] plan: Plan,
        amount: &BigUint,
    );

    #[event("stakeUpdate")]
    fn stake_update_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] plan: Plan,
        new_amount: &BigUint,
    );

    #[event("rewardClaim")]
    fn reward_claim_event(&self, #[indexed] owner: &ManagedAddress, reward: &BigUint);

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] plan: Plan,
        amount: &BigUint,
    );

    #[event("emergencyWithdraw")]
    fn emergency_withdraw_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] plan: Plan,
        amount: &BigUint,
    );

    #[event("poolFunded")]
    fn pool_funded_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);
}
