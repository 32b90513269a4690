use common_errors::ERROR_BAD_POSITION;
use common_structs::{ExecutionContext, Position, PricingPolicy};

use crate::{cache::Cache, oracle, risk, storage};

multiversx_sc::imports!();

/// Read-only valuation views. Unpriceable reward tokens are skipped.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage + oracle::OracleModule + risk::RiskModule + common_math::SharedMathModule
{
    /// Outstanding debt of a position in raw units of its debt token.
    #[view(getPositionDebt)]
    fn get_position_debt(&self, position_id: u64) -> BigUint {
        let position = self.view_position(position_id);
        let mut cache = Cache::new(self, PricingPolicy::BestEffort);
        self.position_debt(&position, &mut cache)
    }

    #[view(getDebtValue)]
    fn get_debt_value(&self, position_id: u64) -> ManagedDecimal<Self::Api, NumDecimals> {
        let position = self.view_position(position_id);
        let mut cache = Cache::new(self, PricingPolicy::BestEffort);
        self.debt_value(&position, &mut cache)
    }

    #[view(getPositionValue)]
    fn get_position_value(&self, position_id: u64) -> ManagedDecimal<Self::Api, NumDecimals> {
        let position = self.view_position(position_id);
        let mut cache = Cache::new(self, PricingPolicy::BestEffort);
        self.position_value(&position, &mut cache)
    }

    #[view(getIsolatedCollateralValue)]
    fn get_isolated_collateral_value(
        &self,
        position_id: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let position = self.view_position(position_id);
        let mut cache = Cache::new(self, PricingPolicy::BestEffort);
        self.isolated_collateral_value(&position, &mut cache)
    }

    /// Risk ratio of a position, BPS scaled where `10_000` is 100%.
    #[view(getPositionRisk)]
    fn get_position_risk(&self, position_id: u64) -> ManagedDecimal<Self::Api, NumDecimals> {
        let position = self.view_position(position_id);
        let mut cache = Cache::new(self, PricingPolicy::BestEffort);
        self.position_risk(&position, &mut cache)
    }

    #[view(isLiquidatable)]
    fn is_liquidatable(&self, position_id: u64) -> bool {
        let position = self.view_position(position_id);
        let mut cache = Cache::new(self, PricingPolicy::BestEffort);
        self.is_position_liquidatable(&position, &mut cache)
    }

    #[view(getExecutionContext)]
    fn get_execution_context(&self) -> OptionalValue<ExecutionContext<Self::Api>> {
        let mapper = self.execution_context();
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    fn view_position(&self, position_id: u64) -> Position<Self::Api> {
        require!(
            position_id > 0 && position_id < self.next_position_id().get(),
            ERROR_BAD_POSITION
        );
        self.positions(position_id).get()
    }
}
