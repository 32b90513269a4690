use common_constants::{MAX_LIQ_THRESHOLD, MIN_LIQ_THRESHOLD};
use common_errors::*;
use common_structs::BankConfig;

use crate::storage;

multiversx_sc::imports!();

/// Validation module for input checks shared by configuration and position flows.
#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage + common_math::SharedMathModule {
    /// Ensures an address is not the zero address.
    ///
    /// # Errors
    /// - `ERROR_ZERO_ADDRESS`: If `address` is zero.
    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ZERO_ADDRESS);
    }

    /// Ensures an amount is greater than zero.
    ///
    /// # Errors
    /// - `ERROR_ZERO_AMOUNT`: If `amount` is zero.
    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(*amount > 0, ERROR_ZERO_AMOUNT);
    }

    fn require_same_length(&self, left: usize, right: usize) {
        require!(left == right, ERROR_INPUT_ARRAY_MISMATCH);
    }

    fn require_whitelisted_token(&self, token: &EgldOrEsdtTokenIdentifier) {
        require!(self.whitelisted_tokens(token).get(), ERROR_TOKEN_NOT_WHITELISTED);
    }

    /// Returns the bank of `token`, which must exist and be listed.
    ///
    /// # Errors
    /// - `ERROR_BANK_NOT_LISTED`: If no listed bank exists for `token`.
    fn require_listed_bank(&self, token: &EgldOrEsdtTokenIdentifier) -> BankConfig<Self::Api> {
        require!(self.is_bank_listed(token), ERROR_BANK_NOT_LISTED);
        self.banks(token).get()
    }

    fn is_bank_listed(&self, token: &EgldOrEsdtTokenIdentifier) -> bool {
        let mapper = self.banks(token);
        !mapper.is_empty() && mapper.get().is_listed
    }

    /// Converts and bounds a liquidation threshold given in basis points.
    /// The threshold must be above the floor and at most 100%.
    ///
    /// # Errors
    /// - `ERROR_LIQ_THRESHOLD_OUT_OF_RANGE`: If the threshold is outside `(floor, 100%]`.
    fn validate_liquidation_threshold(
        &self,
        liquidation_threshold_bps: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(
            liquidation_threshold_bps > MIN_LIQ_THRESHOLD as u64
                && liquidation_threshold_bps <= MAX_LIQ_THRESHOLD as u64,
            ERROR_LIQ_THRESHOLD_OUT_OF_RANGE
        );

        self.to_decimal_bps(liquidation_threshold_bps)
    }
}
