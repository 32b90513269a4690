#![no_std]

/// Basis points for 1 USD which is the base price for all assets
pub const WAD: u128 = 1_000_000_000_000_000_000; // Represents 1 USD
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Liquidation thresholds must be strictly above this floor (80%)
pub const MIN_LIQ_THRESHOLD: usize = 8_000;

/// Upper bound for any liquidation threshold (100%)
pub const MAX_LIQ_THRESHOLD: usize = BPS;

/// Risk reported for a position with debt above its value and no isolated collateral,
/// in bps. Above any ratio a position with isolated collateral can reach.
pub const MAX_RISK: u64 = u64::MAX;

/// Default delay between enabling repayments and the first liquidation (4 hours)
pub const DEFAULT_REPAY_WARM_UP: u64 = 14_400;

/// Default maximum age of an oracle price, in seconds (15 minutes)
pub const DEFAULT_MAX_PRICE_AGE: u64 = 900;

/// Default liquidation discount on seized collateral (5%)
pub const DEFAULT_LIQUIDATION_DISCOUNT: usize = 500;

/// Maximum liquidation discount on seized collateral (50%)
pub const MAX_LIQUIDATION_DISCOUNT: usize = 5_000;

/// Sentinel position id asking `execute` to open a new position
pub const NEW_POSITION_ID: u64 = 0;

// Global status bits
pub const STATUS_BORROW: u8 = 1;
pub const STATUS_REPAY: u8 = 2;
pub const STATUS_LEND: u8 = 4;
pub const STATUS_WITHDRAW_LEND: u8 = 8;
pub const STATUS_ALL: u8 = STATUS_BORROW | STATUS_REPAY | STATUS_LEND | STATUS_WITHDRAW_LEND;
