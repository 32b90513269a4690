pub mod borrow;
pub mod collateral;
pub mod lend;
pub mod liquidation;
pub mod repay;
