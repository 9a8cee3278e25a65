multiversx_sc::imports!();

// ============================================================
// Transfer gateway — the only component that moves balances
// across the contract boundary.
//
// Deposits arrive as attached payments, so the amount credited
// is always the amount the contract actually received. Payouts
// send the nominal amount; the asymmetry is deliberate.
// ============================================================

#[multiversx_sc::module]
pub trait GatewayModule {
    /// Validates the attached payment against the configured staking
    /// token and returns the received amount.
    fn accept_deposit(&self) -> BigUint {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(token == self.staking_token().get(), "wrong payment token");
        require!(amount > 0u64, "amount must be positive");
        amount
    }

    fn pay_out(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount > 0u64 {
            self.send().direct(to, &self.staking_token().get(), 0, amount);
        }
    }

    #[storage_mapper("stakingToken")]
    fn staking_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;
}
