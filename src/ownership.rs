multiversx_sc::imports!();

// ============================================================
// Operator capability — held by the contract, not inherited.
// The deployer becomes the first operator; rights can be handed
// over or renounced entirely.
// ============================================================

#[multiversx_sc::module]
pub trait OwnershipModule {
    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_operator: ManagedAddress) {
        self.require_operator();
        require!(!new_operator.is_zero(), "new operator is the zero address");
        let previous = self.operator().get();
        self.operator().set(&new_operator);
        self.owner_changed_event(&previous, &new_operator);
    }

    /// Leaves the contract without an operator. Funding and ownership
    /// transfer become permanently unreachable.
    #[endpoint(renounceOwnership)]
    fn renounce_ownership(&self) {
        self.require_operator();
        let previous = self.operator().get();
        let zero = ManagedAddress::zero();
        self.operator().set(&zero);
        self.owner_changed_event(&previous, &zero);
    }

    fn require_operator(&self) {
        require!(
            self.blockchain().get_caller() == self.operator().get(),
            "caller is not the operator"
        );
    }

    fn require_not_operator(&self) {
        require!(
            self.blockchain().get_caller() != self.operator().get(),
            "operator cannot participate"
        );
    }

    #[view(getOperator)]
    fn get_operator(&self) -> ManagedAddress {
        self.operator().get()
    }

    #[event("ownerChanged")]
    fn owner_changed_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] next: &ManagedAddress,
    );

    #[storage_mapper("operator")]
    fn operator(&self) -> SingleValueMapper<ManagedAddress>;
}
