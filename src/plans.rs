multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Plan table — fixed at build time, no mutation surface
// ============================================================

/// Seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Seconds in a 365-day year
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// Rates are expressed in parts per thousand per year
pub const RATE_DENOMINATOR: u64 = 1_000;

/// Days in a year, for the fixed-reward formula
pub const DAYS_PER_YEAR: u64 = 365;

/// Flexible positions have no maturity date; they must only be
/// held for this many days before withdrawal.
pub const FLEX_MIN_HOLD_DAYS: u64 = 7;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Plan {
    /// 30-day lock, 5.0% annual rate
    Days30,
    /// 90-day lock, 7.5% annual rate
    Days90,
    /// 180-day lock, 10.0% annual rate
    Days180,
    /// 360-day lock, 15.0% annual rate
    Days360,
    /// No maturity date, 2.0% annual rate, accrual only
    Flexible,
}

impl Plan {
    pub const ALL: [Plan; 5] = [
        Plan::Days30,
        Plan::Days90,
        Plan::Days180,
        Plan::Days360,
        Plan::Flexible,
    ];

    pub fn annual_rate_permille(&self) -> u64 {
        match self {
            Plan::Days30 => 50,
            Plan::Days90 => 75,
            Plan::Days180 => 100,
            Plan::Days360 => 150,
            Plan::Flexible => 20,
        }
    }

    /// Lock duration in days. For Flexible this is the minimum-hold
    /// window, not a maturity date.
    pub fn lock_days(&self) -> u64 {
        match self {
            Plan::Days30 => 30,
            Plan::Days90 => 90,
            Plan::Days180 => 180,
            Plan::Days360 => 360,
            Plan::Flexible => FLEX_MIN_HOLD_DAYS,
        }
    }

    pub fn lock_seconds(&self) -> u64 {
        self.lock_days() * SECONDS_PER_DAY
    }

    pub fn is_flexible(&self) -> bool {
        matches!(self, Plan::Flexible)
    }
}
