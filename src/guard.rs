multiversx_sc::imports!();

// ============================================================
// Reentrancy guard — serializes nested entry into mutating
// endpoints. Freshly deployed storage reads 0 (unset).
// ============================================================

pub const GUARD_IDLE: u8 = 1;
pub const GUARD_BUSY: u8 = 2;

#[multiversx_sc::module]
pub trait GuardModule {
    /// Idle → Busy. Aborts if already Busy, i.e. the caller arrived
    /// through a nested call from within another guarded endpoint.
    fn guard_enter(&self) {
        require!(self.guard_status().get() != GUARD_BUSY, "reentrant call");
        self.guard_status().set(GUARD_BUSY);
    }

    /// Busy → Idle. Failure paths need no explicit restore: a panic
    /// reverts the whole transaction, flag included.
    fn guard_exit(&self) {
        self.guard_status().set(GUARD_IDLE);
    }

    #[storage_mapper("guardStatus")]
    fn guard_status(&self) -> SingleValueMapper<u8>;
}
