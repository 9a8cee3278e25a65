multiversx_sc::imports!();

use crate::plans::Plan;
use crate::types::Position;

// ============================================================
// Stake ledger — (owner, plan) lookup mirrored by a dense list.
//
// Invariants after every operation:
//   * position_list().get(p.index) == p for every stored position
//   * position_list().len() == number of active positions
//   * sum of stored amounts == total_staked()
// ============================================================

/// Hard ceiling on a single paged read
pub const MAX_PAGE_SIZE: usize = 101;

#[multiversx_sc::module]
pub trait LedgerModule {
    fn open_position(
        &self,
        owner: &ManagedAddress,
        plan: Plan,
        amount: BigUint,
        fixed_reward: BigUint,
    ) {
        let lookup = self.position(owner, plan);
        require!(lookup.is_empty(), "position already exists");

        let mut list = self.position_list();
        let position = Position {
            owner: owner.clone(),
            plan,
            amount,
            opened_at: self.blockchain().get_block_timestamp(),
            fixed_reward,
            accrued_reward: BigUint::zero(),
            index: list.len() + 1,
        };
        list.push(&position);
        lookup.set(&position);
        self.total_staked().update(|total| *total += &position.amount);
    }

    /// Mirrors a top-up into both the lookup and the list slot.
    /// `added` is the principal delta for the total-staked mirror.
    fn update_position(&self, position: &Position<Self::Api>, added: &BigUint) {
        self.store_position(position);
        self.total_staked().update(|total| *total += added);
    }

    /// Rewrites an existing position in place, both copies.
    fn store_position(&self, position: &Position<Self::Api>) {
        self.position(&position.owner, position.plan).set(position);
        self.position_list().set(position.index, position);
    }

    /// Swap-remove: the last list entry is copied into the vacated
    /// slot and its back-pointer and lookup entry are re-aimed at the
    /// new index. Constant cost regardless of ledger size.
    fn remove_position(&self, owner: &ManagedAddress, plan: Plan) -> Position<Self::Api> {
        let lookup = self.position(owner, plan);
        require!(!lookup.is_empty(), "no balance");
        let removed = lookup.get();

        let mut list = self.position_list();
        let last_index = list.len();
        if removed.index != last_index {
            let mut moved = list.get(last_index);
            moved.index = removed.index;
            list.set(removed.index, &moved);
            self.position(&moved.owner, moved.plan).set(&moved);
        }
        list.swap_remove(last_index);
        lookup.clear();
        self.total_staked().update(|total| *total -= &removed.amount);

        removed
    }

    /// Inclusive 0-based slice of the dense sequence. Bounds are
    /// checked before the span so a request past the end reports
    /// out-of-range rather than span-too-large.
    fn positions_slice(&self, start: usize, end: usize) -> MultiValueEncoded<Position<Self::Api>> {
        require!(start <= end, "inverted page bounds");
        let list = self.position_list();
        require!(end < list.len(), "page out of range");
        require!(end - start + 1 <= MAX_PAGE_SIZE, "page span too large");

        let mut result = MultiValueEncoded::new();
        for slot in start..=end {
            result.push(list.get(slot + 1));
        }
        result
    }

    #[storage_mapper("position")]
    fn position(
        &self,
        owner: &ManagedAddress,
        plan: Plan,
    ) -> SingleValueMapper<Position<Self::Api>>;

    #[storage_mapper("positionList")]
    fn position_list(&self) -> VecMapper<Position<Self::Api>>;

    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;
}
