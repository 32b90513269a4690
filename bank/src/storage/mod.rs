use common_structs::{
    BankConfig, CollateralInfo, ExecutionContext, MarketStatus, Position, PriceFeed,
};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the oracle address
    /// This storage mapper holds the address of the oracle publishing USD prices for every token the bank values.
    #[view(getOracle)]
    #[storage_mapper("oracle")]
    fn oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Get the maximum price age
    /// Prices older than this many seconds are rejected as stale.
    #[view(getMaxPriceAge)]
    #[storage_mapper("maxPriceAge")]
    fn max_price_age(&self) -> SingleValueMapper<u64>;

    /// Get the bank of a borrowable asset
    /// This storage mapper holds the configuration and the pooled debt of each listed bank.
    #[view(getBankInfo)]
    #[storage_mapper("banks")]
    fn banks(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BankConfig<Self::Api>>;

    /// Get all banks
    /// This storage mapper holds the token of every bank ever added.
    #[view(getAllBanks)]
    #[storage_mapper("allBanks")]
    fn all_banks(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Money markets already backing a bank
    #[storage_mapper("boundMoneyMarkets")]
    fn bound_money_markets(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(isTokenWhitelisted)]
    #[storage_mapper("whitelistedTokens")]
    fn whitelisted_tokens(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<bool>;

    #[view(isSpellWhitelisted)]
    #[storage_mapper("whitelistedSpells")]
    fn whitelisted_spells(&self, spell: &ManagedAddress) -> SingleValueMapper<bool>;

    #[view(isWrapperWhitelisted)]
    #[storage_mapper("whitelistedWrappers")]
    fn whitelisted_wrappers(&self, wrapper: &ManagedAddress) -> SingleValueMapper<bool>;

    /// Get the wrapper behind a collateral token
    /// This storage mapper maps each whitelisted wrapper SFT collection to the wrapper contract that mints it.
    #[view(getWrapperByToken)]
    #[storage_mapper("wrapperByToken")]
    fn wrapper_by_token(&self, token: &TokenIdentifier) -> SingleValueMapper<ManagedAddress>;

    /// Get the global status
    /// Bitmask gating borrow, repay, lend and withdraw-lend primitives.
    #[view(getStatus)]
    #[storage_mapper("status")]
    fn status(&self) -> SingleValueMapper<MarketStatus>;

    /// Timestamp of the last time repayments were switched on.
    #[view(getRepayAllowedTimestamp)]
    #[storage_mapper("repayAllowedTimestamp")]
    fn repay_allowed_timestamp(&self) -> SingleValueMapper<u64>;

    #[view(getRepayWarmUp)]
    #[storage_mapper("repayWarmUp")]
    fn repay_warm_up(&self) -> SingleValueMapper<u64>;

    /// Get the liquidation discount
    /// Share of the pro-rata collateral kept on the position when it is liquidated, BPS scaled.
    #[view(getLiquidationDiscount)]
    #[storage_mapper("liquidationDiscount")]
    fn liquidation_discount(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getNextPositionId)]
    #[storage_mapper("nextPositionId")]
    fn next_position_id(&self) -> SingleValueMapper<u64>;

    /// Get a position
    /// This storage mapper holds every position ever opened, including closed ones.
    #[view(getPositionInfo)]
    #[storage_mapper("positions")]
    fn positions(&self, position_id: u64) -> SingleValueMapper<Position<Self::Api>>;

    /// The active execution, empty outside of `execute`.
    #[storage_mapper("executionContext")]
    fn execution_context(&self) -> SingleValueMapper<ExecutionContext<Self::Api>>;

    /// Prices published by the oracle.
    #[storage_mapper_from_address("prices")]
    fn oracle_price_feed(
        &self,
        oracle: ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<PriceFeed<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("underlyingToken")]
    fn vault_underlying_token(
        &self,
        vault: ManagedAddress,
    ) -> SingleValueMapper<EgldOrEsdtTokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("moneyMarket")]
    fn vault_money_market(&self, vault: ManagedAddress) -> SingleValueMapper<ManagedAddress, ManagedAddress>;

    #[storage_mapper_from_address("totalShares")]
    fn vault_total_shares(&self, vault: ManagedAddress) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("totalUnderlying")]
    fn vault_total_underlying(&self, vault: ManagedAddress) -> SingleValueMapper<BigUint, ManagedAddress>;

    /// Borrow index of a money market, WAD scaled.
    #[storage_mapper_from_address("borrowIndex")]
    fn market_borrow_index(&self, market: ManagedAddress) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("ratePerSecond")]
    fn market_rate_per_second(&self, market: ManagedAddress) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("lastAccrual")]
    fn market_last_accrual(&self, market: ManagedAddress) -> SingleValueMapper<u64, ManagedAddress>;

    #[storage_mapper_from_address("scaledDebt")]
    fn market_scaled_debt(
        &self,
        market: ManagedAddress,
        account: &ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("wrappedToken")]
    fn wrapper_token(&self, wrapper: ManagedAddress) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("collateralInfo")]
    fn wrapper_collateral_info(
        &self,
        wrapper: ManagedAddress,
        nonce: u64,
    ) -> SingleValueMapper<CollateralInfo<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("rewardTokens")]
    fn wrapper_reward_tokens(
        &self,
        wrapper: ManagedAddress,
    ) -> SingleValueMapper<ManagedVec<EgldOrEsdtTokenIdentifier>, ManagedAddress>;

    /// Reward paid per wrapped unit, WAD scaled.
    #[storage_mapper_from_address("rewardPerUnit")]
    fn wrapper_reward_per_unit(
        &self,
        wrapper: ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;
}
