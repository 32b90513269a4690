#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod accrue;
pub mod cache;
pub mod config;
pub mod execution;
pub mod oracle;
pub mod positions;
pub mod risk;
pub mod storage;
pub mod validation;
pub mod views;

use cache::Cache;
use common_constants::{
    DEFAULT_LIQUIDATION_DISCOUNT, DEFAULT_MAX_PRICE_AGE, DEFAULT_REPAY_WARM_UP, STATUS_ALL,
};
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait IsolatedBank:
    positions::lend::PositionLendModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + positions::collateral::PositionCollateralModule
    + positions::liquidation::PositionLiquidationModule
    + config::ConfigModule
    + accrue::AccrueModule
    + execution::ExecutionModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + risk::RiskModule
    + validation::ValidationModule
    + views::ViewsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the bank.
    ///
    /// # Arguments
    /// - `oracle`: Address of the USD price oracle.
    /// - `max_price_age`: Seconds after which an oracle price is stale,
    ///   `DEFAULT_MAX_PRICE_AGE` when omitted.
    #[init]
    fn init(&self, oracle: ManagedAddress, max_price_age: OptionalValue<u64>) {
        self.require_non_zero_address(&oracle);
        let max_price_age = max_price_age
            .into_option()
            .unwrap_or(DEFAULT_MAX_PRICE_AGE);
        require!(max_price_age > 0, ERROR_INVALID_MAX_PRICE_AGE);

        self.oracle_address().set(oracle);
        self.max_price_age().set(max_price_age);
        self.next_position_id().set(1);
        self.status().set(MarketStatus::new(STATUS_ALL));
        self.repay_allowed_timestamp()
            .set(self.blockchain().get_block_timestamp());
        self.repay_warm_up().set(DEFAULT_REPAY_WARM_UP);
        self.liquidation_discount()
            .set(self.to_decimal_bps(BigUint::from(DEFAULT_LIQUIDATION_DISCOUNT)));
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Runs a whitelisted spell against a position.
    ///
    /// The spell receives every payment sent with the call and may invoke the
    /// position primitives while the execution is open. Once it returns, the
    /// position must be below its debt bank's liquidation threshold.
    ///
    /// # Arguments
    /// - `position_id`: Position to operate on, `0` to open a new one.
    /// - `spell`: Whitelisted strategy contract.
    /// - `endpoint`: Spell endpoint to call.
    /// - `arguments`: Raw arguments forwarded to the spell.
    ///
    /// # Returns
    /// - The id of the position operated on.
    ///
    /// # Errors
    /// - `ERROR_SPELL_NOT_WHITELISTED`: If `spell` is not whitelisted.
    /// - `ERROR_BAD_POSITION`, `ERROR_NOT_FROM_OWNER`: Unknown or foreign position.
    /// - `ERROR_ALREADY_IN_EXECUTION`: If called from inside another execution.
    /// - `ERROR_INSUFFICIENT_COLLATERAL`: If the position ends up liquidatable.
    #[payable]
    #[endpoint(execute)]
    fn execute(
        &self,
        position_id: u64,
        spell: ManagedAddress,
        endpoint: ManagedBuffer,
        arguments: ManagedArgBuffer<Self::Api>,
    ) -> u64 {
        self.require_not_paused();
        require!(
            self.whitelisted_spells(&spell).get(),
            ERROR_SPELL_NOT_WHITELISTED
        );

        let caller = self.blockchain().get_caller();
        let position_id = self.resolve_position(position_id, &caller);
        let scope = self.begin_execution(position_id, &spell);

        let payments = self.call_value().all_transfers();
        self.tx()
            .to(&scope.context.spell)
            .raw_call(endpoint.clone())
            .arguments_raw(arguments)
            .payment((*payments).clone())
            .sync_call();

        let position = self.positions(position_id).get();
        let mut cache = Cache::new(self, PricingPolicy::Strict);
        self.require_solvent(&position, &mut cache);
        drop(scope);

        self.execute_event(position_id, &caller, &spell, &endpoint);
        position_id
    }

    /// Deposits the isolated collateral of the active position.
    #[payable]
    #[endpoint(lend)]
    fn lend(&self) {
        self.process_lend();
    }

    /// Withdraws lent isolated collateral; all vault shares when `shares` is absent.
    #[endpoint(withdrawLend)]
    fn withdraw_lend(&self, token: EgldOrEsdtTokenIdentifier, shares: OptionalValue<BigUint>) -> BigUint {
        self.process_withdraw_lend(&token, shares.into_option())
    }

    #[endpoint(borrow)]
    fn borrow(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.process_borrow(&token, &amount);
    }

    #[payable]
    #[endpoint(repay)]
    fn repay(&self) {
        self.process_repay();
    }

    #[payable]
    #[endpoint(putCollateral)]
    fn put_collateral(&self) {
        self.process_put_collateral();
    }

    /// Takes wrapper collateral back; the whole collateral when `amount` is absent.
    #[endpoint(takeCollateral)]
    fn take_collateral(&self, amount: OptionalValue<BigUint>) {
        self.process_take_collateral(amount.into_option());
    }

    /// Liquidates an unhealthy position.
    ///
    /// # Arguments
    /// - `position_id`: Position to liquidate.
    ///
    /// # Payment
    /// - The position's debt token; any excess above the outstanding debt is refunded.
    #[payable]
    #[endpoint(liquidate)]
    fn liquidate(&self, position_id: u64) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        self.process_liquidation(position_id, &caller);
    }
}
