#![no_std]

// Invalid arguments
pub static ERROR_ZERO_ADDRESS: &[u8] = b"Zero address provided.";

pub static ERROR_ZERO_AMOUNT: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INPUT_ARRAY_MISMATCH: &[u8] = b"Input arrays have different lengths.";

pub static ERROR_LIQ_THRESHOLD_OUT_OF_RANGE: &[u8] = b"Liquidation threshold out of range.";

pub static ERROR_LIQUIDATION_DISCOUNT_TOO_HIGH: &[u8] = b"Liquidation discount too high.";

pub static ERROR_INVALID_MAX_PRICE_AGE: &[u8] = b"Max price age must be greater than zero.";

pub static ERROR_SHARES_EXCEED_POSITION: &[u8] = b"Amount exceeds the position balance.";

// Authorization
pub static ERROR_SPELL_NOT_WHITELISTED: &[u8] = b"Spell not whitelisted.";

pub static ERROR_TOKEN_NOT_WHITELISTED: &[u8] = b"Token not whitelisted.";

pub static ERROR_NOT_FROM_OWNER: &[u8] = b"Caller is not the position owner.";

pub static ERROR_NOT_IN_EXEC: &[u8] = b"Not in execution.";

pub static ERROR_NOT_FROM_SPELL: &[u8] = b"Caller is not the executing spell.";

pub static ERROR_ORACLE_NOT_SUPPORT: &[u8] = b"Token not supported by the oracle.";

// Missing entities
pub static ERROR_BANK_NOT_EXIST: &[u8] = b"Bank does not exist.";

pub static ERROR_BANK_NOT_LISTED: &[u8] = b"Bank not listed.";

pub static ERROR_BANK_ALREADY_LISTED: &[u8] = b"Bank already listed.";

pub static ERROR_BTOKEN_ALREADY_ADDED: &[u8] = b"Money market already bound to a bank.";

pub static ERROR_BAD_POSITION: &[u8] = b"Position does not exist.";

pub static ERROR_MISSING_MONEY_MARKET: &[u8] = b"Soft vault has no money market.";

pub static ERROR_MONEY_MARKET_MISMATCH: &[u8] = b"Soft vault uses another money market.";

pub static ERROR_BANK_HAS_LENT_ASSETS: &[u8] = b"Bank vaults still hold lent assets.";

// Position invariants
pub static ERROR_INCORRECT_DEBT: &[u8] = b"Incorrect debt token.";

pub static ERROR_DIFF_COLLATERAL_EXISTS: &[u8] = b"Different collateral already exists.";

pub static ERROR_INCORRECT_UNDERLYING: &[u8] = b"Incorrect underlying token.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Insufficient collateral.";

pub static ERROR_ALREADY_IN_EXECUTION: &[u8] = b"Already in execution.";

pub static ERROR_NO_DEBT: &[u8] = b"Position has no debt.";

// Status gates
pub static ERROR_LEND_NOT_ALLOWED: &[u8] = b"Lending not allowed.";

pub static ERROR_WITHDRAW_LEND_NOT_ALLOWED: &[u8] = b"Withdrawing lent assets not allowed.";

pub static ERROR_BORROW_NOT_ALLOWED: &[u8] = b"Borrowing not allowed.";

pub static ERROR_REPAY_NOT_ALLOWED: &[u8] = b"Repaying not allowed.";

pub static ERROR_REPAY_ALLOW_NOT_WARMED_UP: &[u8] = b"Repay allow not warmed up.";


// Oracle
pub static ERROR_PRICE_UNSUPPORTED: &[u8] = b"Price not supported for token.";

pub static ERROR_PRICE_STALE: &[u8] = b"Price is stale.";

pub static ERROR_INVALID_STATUS: &[u8] = b"Invalid status bitmask.";

pub static ERROR_WRAPPER_WITHOUT_TOKEN: &[u8] = b"Wrapper has no wrapped token.";
