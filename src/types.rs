multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::plans::Plan;

// ============================================================
// Position — one participant's deposit under one plan
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Position<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub plan: Plan,
    pub amount: BigUint<M>,
    /// Block timestamp of the open, reset on every top-up and claim
    pub opened_at: u64,
    /// Reward promised at open for fixed-term plans; zero for Flexible
    pub fixed_reward: BigUint<M>,
    /// Accrual carried forward from intervals before the last top-up
    pub accrued_reward: BigUint<M>,
    /// 1-based slot in the dense position list; the slot must always
    /// hold this exact position
    pub index: usize,
}
