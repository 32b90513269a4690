multiversx_sc::imports!();

use common_constants::{MAX_LIQUIDATION_DISCOUNT, STATUS_ALL};
use common_errors::*;
use common_structs::{BankConfig, MarketStatus};

use crate::{oracle, storage, validation};

/// Owner-only configuration of the bank.
///
/// Covers the bank registry, the token, spell and wrapper whitelists, the
/// global status bitmask and the liquidation settings. Every endpoint emits
/// an event describing the new state.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Lists a new bank for a borrowable token.
    ///
    /// The money market the bank borrows from is the one backing the soft vault.
    ///
    /// # Arguments
    /// - `token`: Borrowable token, already whitelisted.
    /// - `soft_vault`: Yield-bearing vault bound to the money market.
    /// - `hard_vault`: Pass-through vault for any other token.
    /// - `liquidation_threshold_bps`: Risk at which positions become liquidatable.
    ///
    /// # Errors
    /// - `ERROR_TOKEN_NOT_WHITELISTED`: If `token` is not whitelisted.
    /// - `ERROR_ZERO_ADDRESS`: If a vault address is zero.
    /// - `ERROR_LIQ_THRESHOLD_OUT_OF_RANGE`: If the threshold is out of bounds.
    /// - `ERROR_BANK_ALREADY_LISTED`: If `token` already has a bank.
    /// - `ERROR_MISSING_MONEY_MARKET`: If the soft vault has no money market.
    /// - `ERROR_BTOKEN_ALREADY_ADDED`: If the money market already backs a bank.
    #[only_owner]
    #[endpoint(addBank)]
    fn add_bank(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        soft_vault: ManagedAddress,
        hard_vault: ManagedAddress,
        liquidation_threshold_bps: BigUint,
    ) {
        self.require_whitelisted_token(&token);
        self.require_non_zero_address(&soft_vault);
        self.require_non_zero_address(&hard_vault);
        let threshold = self.validate_liquidation_threshold(liquidation_threshold_bps);

        let bank_mapper = self.banks(&token);
        require!(bank_mapper.is_empty(), ERROR_BANK_ALREADY_LISTED);

        let market_mapper = self.vault_money_market(soft_vault.clone());
        require!(!market_mapper.is_empty(), ERROR_MISSING_MONEY_MARKET);
        let money_market = market_mapper.get();
        require!(
            self.bound_money_markets().insert(money_market.clone()),
            ERROR_BTOKEN_ALREADY_ADDED
        );

        let bank = BankConfig {
            is_listed: true,
            underlying_token: token.clone(),
            soft_vault,
            hard_vault,
            money_market,
            liquidation_threshold_bps: threshold,
            total_share: BigUint::zero(),
            total_debt: BigUint::zero(),
            total_lend: BigUint::zero(),
        };
        bank_mapper.set(&bank);
        self.all_banks().insert(token.clone());

        self.add_bank_event(
            &token,
            &bank.soft_vault,
            &bank.hard_vault,
            &bank.money_market,
            &bank.liquidation_threshold_bps,
        );
    }

    /// Replaces the vaults and threshold of an existing bank.
    /// Debt bookkeeping and the money market binding are left untouched.
    /// Vaults are only swapped while no isolated collateral is lent to them.
    ///
    /// # Errors
    /// - `ERROR_BANK_NOT_EXIST`: If `token` has no bank.
    /// - `ERROR_ZERO_ADDRESS`: If a vault address is zero.
    /// - `ERROR_LIQ_THRESHOLD_OUT_OF_RANGE`: If the threshold is out of bounds.
    /// - `ERROR_BANK_HAS_LENT_ASSETS`: If the vaults change while `total_lend > 0`.
    /// - `ERROR_MISSING_MONEY_MARKET`, `ERROR_MONEY_MARKET_MISMATCH`: If the new
    ///   soft vault is not backed by the bank's money market.
    #[only_owner]
    #[endpoint(modifyBank)]
    fn modify_bank(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        soft_vault: ManagedAddress,
        hard_vault: ManagedAddress,
        liquidation_threshold_bps: BigUint,
    ) {
        let bank_mapper = self.banks(&token);
        require!(!bank_mapper.is_empty(), ERROR_BANK_NOT_EXIST);
        self.require_non_zero_address(&soft_vault);
        self.require_non_zero_address(&hard_vault);
        let threshold = self.validate_liquidation_threshold(liquidation_threshold_bps);

        let current = bank_mapper.get();
        if current.soft_vault != soft_vault || current.hard_vault != hard_vault {
            require!(current.total_lend == 0, ERROR_BANK_HAS_LENT_ASSETS);

            let market_mapper = self.vault_money_market(soft_vault.clone());
            require!(!market_mapper.is_empty(), ERROR_MISSING_MONEY_MARKET);
            require!(
                market_mapper.get() == current.money_market,
                ERROR_MONEY_MARKET_MISMATCH
            );
        }

        let bank = bank_mapper.update(|bank| {
            bank.soft_vault = soft_vault;
            bank.hard_vault = hard_vault;
            bank.liquidation_threshold_bps = threshold;
            bank.clone()
        });

        self.modify_bank_event(
            &token,
            &bank.soft_vault,
            &bank.hard_vault,
            &bank.liquidation_threshold_bps,
        );
    }

    /// Toggles tokens usable as debt or isolated collateral.
    ///
    /// # Errors
    /// - `ERROR_INPUT_ARRAY_MISMATCH`: If the lists differ in length.
    /// - `ERROR_ORACLE_NOT_SUPPORT`: If a token being enabled has no oracle price.
    #[only_owner]
    #[endpoint(whitelistTokens)]
    fn whitelist_tokens(
        &self,
        tokens: ManagedVec<EgldOrEsdtTokenIdentifier>,
        statuses: ManagedVec<bool>,
    ) {
        self.require_same_length(tokens.len(), statuses.len());

        for (token, status) in tokens.iter().zip(statuses.iter()) {
            let token: &EgldOrEsdtTokenIdentifier = &token;
            if status {
                require!(
                    self.is_token_supported_by_oracle(token),
                    ERROR_ORACLE_NOT_SUPPORT
                );
            }
            self.whitelisted_tokens(token).set(status);
            self.whitelist_token_event(token, status);
        }
    }

    /// # Errors
    /// - `ERROR_INPUT_ARRAY_MISMATCH`: If the lists differ in length.
    /// - `ERROR_ZERO_ADDRESS`: If a spell address is zero.
    #[only_owner]
    #[endpoint(whitelistSpells)]
    fn whitelist_spells(&self, spells: ManagedVec<ManagedAddress>, statuses: ManagedVec<bool>) {
        self.require_same_length(spells.len(), statuses.len());

        for (spell, status) in spells.iter().zip(statuses.iter()) {
            let spell: &ManagedAddress = &spell;
            self.require_non_zero_address(spell);
            self.whitelisted_spells(spell).set(status);
            self.whitelist_spell_event(spell, status);
        }
    }

    /// Toggles wrapper contracts whose SFTs are accepted as collateral.
    /// The SFT collection of each wrapper is read from the wrapper itself.
    ///
    /// # Errors
    /// - `ERROR_INPUT_ARRAY_MISMATCH`: If the lists differ in length.
    /// - `ERROR_ZERO_ADDRESS`: If a wrapper address is zero.
    /// - `ERROR_WRAPPER_WITHOUT_TOKEN`: If a wrapper has no SFT collection.
    #[only_owner]
    #[endpoint(whitelistWrappers)]
    fn whitelist_wrappers(&self, wrappers: ManagedVec<ManagedAddress>, statuses: ManagedVec<bool>) {
        self.require_same_length(wrappers.len(), statuses.len());

        for (wrapper, status) in wrappers.iter().zip(statuses.iter()) {
            let wrapper: &ManagedAddress = &wrapper;
            self.require_non_zero_address(wrapper);

            let token_mapper = self.wrapper_token(wrapper.clone());
            require!(!token_mapper.is_empty(), ERROR_WRAPPER_WITHOUT_TOKEN);
            let wrapper_token = token_mapper.get();

            self.wrapper_by_token(&wrapper_token).set(wrapper);
            self.whitelisted_wrappers(wrapper).set(status);
            self.whitelist_wrapper_event(wrapper, &wrapper_token, status);
        }
    }

    /// Sets the bitmask gating borrow, repay, lend and withdraw-lend.
    /// Switching repay on starts the liquidation warm-up.
    ///
    /// # Errors
    /// - `ERROR_INVALID_STATUS`: If `status` has bits outside the known flags.
    #[only_owner]
    #[endpoint(setStatus)]
    fn set_status(&self, status: u8) {
        require!(status & !STATUS_ALL == 0, ERROR_INVALID_STATUS);

        let next = MarketStatus::new(status);
        let current = self.status().get();
        if current.enables_repay(&next) {
            self.repay_allowed_timestamp()
                .set(self.blockchain().get_block_timestamp());
        }
        self.status().set(next);

        self.set_status_event(status, self.repay_allowed_timestamp().get());
    }

    #[only_owner]
    #[endpoint(setRepayWarmUp)]
    fn set_repay_warm_up(&self, warm_up: u64) {
        self.repay_warm_up().set(warm_up);
    }

    /// # Errors
    /// - `ERROR_LIQUIDATION_DISCOUNT_TOO_HIGH`: If `discount_bps` is above the maximum.
    #[only_owner]
    #[endpoint(setLiquidationDiscount)]
    fn set_liquidation_discount(&self, discount_bps: BigUint) {
        require!(
            discount_bps <= MAX_LIQUIDATION_DISCOUNT as u64,
            ERROR_LIQUIDATION_DISCOUNT_TOO_HIGH
        );
        self.liquidation_discount()
            .set(self.to_decimal_bps(discount_bps));
    }

    /// # Errors
    /// - `ERROR_INVALID_MAX_PRICE_AGE`: If `max_price_age` is zero.
    #[only_owner]
    #[endpoint(setMaxPriceAge)]
    fn set_max_price_age(&self, max_price_age: u64) {
        require!(max_price_age > 0, ERROR_INVALID_MAX_PRICE_AGE);
        self.max_price_age().set(max_price_age);
    }

    #[only_owner]
    #[endpoint(setOracle)]
    fn set_oracle(&self, oracle: ManagedAddress) {
        self.require_non_zero_address(&oracle);
        self.oracle_address().set(oracle);
    }
}
