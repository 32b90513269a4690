use common_constants::BPS;
use common_errors::*;
use common_structs::{LiquidationRecord, Position, PricingPolicy};

use crate::{accrue, cache::Cache, oracle, risk, storage, validation};

use super::{lend, repay};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + validation::ValidationModule
    + crate::execution::ExecutionModule
    + oracle::OracleModule
    + risk::RiskModule
    + accrue::AccrueModule
    + lend::PositionLendModule
    + repay::PositionRepayModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Repays debt of an unhealthy position for a pro-rata part of its collateral.
    ///
    /// The liquidator receives the repaid share of the wrapper collateral and
    /// the underlying of the same share of the lent vault position, both
    /// reduced by the liquidation discount. Payment above the outstanding debt
    /// is refunded.
    ///
    /// # Arguments
    /// - `position_id`: Position to liquidate.
    /// - `liquidator`: Caller receiving the seized collateral.
    ///
    /// # Errors
    /// - `ERROR_ALREADY_IN_EXECUTION`: If called while an execution is open.
    /// - `ERROR_ZERO_AMOUNT`: If nothing is paid.
    /// - `ERROR_REPAY_NOT_ALLOWED`: If repaying is switched off.
    /// - `ERROR_REPAY_ALLOW_NOT_WARMED_UP`: If repaying was switched on too recently.
    /// - `ERROR_BAD_POSITION`: If the position does not exist.
    /// - `Position not liquidatable: <id>`: If the position is healthy.
    /// - `ERROR_INCORRECT_DEBT`: If the payment is not the position's debt token.
    fn process_liquidation(&self, position_id: u64, liquidator: &ManagedAddress) {
        require!(
            self.execution_context().is_empty(),
            ERROR_ALREADY_IN_EXECUTION
        );
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.require_amount_greater_than_zero(&amount);
        require!(self.status().get().allow_repay(), ERROR_REPAY_NOT_ALLOWED);
        self.require_repay_warmed_up();

        require!(
            position_id > 0 && position_id < self.next_position_id().get(),
            ERROR_BAD_POSITION
        );
        let mut position = self.positions(position_id).get();

        let mut cache = Cache::new(self, PricingPolicy::Strict);
        if !self.is_position_liquidatable(&position, &mut cache) {
            sc_panic!("Position not liquidatable: {}", position_id);
        }

        let old_share = position.debt_share.clone();
        let (paid, share) = self.repay_position_debt(&mut position, &token, &amount);

        let seized_collateral = self.seized_part(&position.collateral_size, &share, &old_share);
        let seized_vault_share =
            self.seized_part(&position.underlying_vault_share, &share, &old_share);

        position.collateral_size -= &seized_collateral;
        position.underlying_vault_share -= &seized_vault_share;
        self.positions(position_id).set(&position);

        self.pay_out_seized(&position, &seized_collateral, &seized_vault_share, liquidator);

        let refund = &amount - &paid;
        self.tx()
            .to(liquidator)
            .egld_or_single_esdt(&token, 0, &refund)
            .transfer_if_not_empty();

        let record = LiquidationRecord {
            debt_token: token,
            repaid_amount: paid,
            repaid_share: share,
            seized_collateral,
            seized_vault_share,
            refund,
        };
        self.liquidate_event(position_id, liquidator, &record);
    }

    /// Pro-rata part of `total` for `share` out of `old_share`, minus the discount.
    fn seized_part(&self, total: &BigUint, share: &BigUint, old_share: &BigUint) -> BigUint {
        if *total == 0 || *old_share == 0 {
            return BigUint::zero();
        }

        let discount = self.liquidation_discount().get();
        let kept_bps = BigUint::from(BPS) - discount.into_raw_units();
        total * share / old_share * kept_bps / BigUint::from(BPS)
    }

    fn pay_out_seized(
        &self,
        position: &Position<Self::Api>,
        seized_collateral: &BigUint,
        seized_vault_share: &BigUint,
        liquidator: &ManagedAddress,
    ) {
        if let Some(coll_token) = &position.coll_token {
            if *seized_collateral > 0 {
                self.tx()
                    .to(liquidator)
                    .single_esdt(coll_token, position.coll_id, seized_collateral)
                    .transfer();
            }
        }

        if let Some(underlying) = &position.underlying_token {
            if *seized_vault_share > 0 {
                let mut bank = self.banks(underlying).get();
                let amount = self.withdraw_from_vault(&bank, underlying, seized_vault_share);
                bank.total_lend = if amount >= bank.total_lend {
                    BigUint::zero()
                } else {
                    &bank.total_lend - &amount
                };
                self.banks(underlying).set(&bank);

                self.tx()
                    .to(liquidator)
                    .egld_or_single_esdt(underlying, 0, &amount)
                    .transfer_if_not_empty();
            }
        }
    }

    /// # Errors
    /// - `ERROR_REPAY_ALLOW_NOT_WARMED_UP`: If the warm-up since repayments were enabled has not elapsed.
    fn require_repay_warmed_up(&self) {
        let now = self.blockchain().get_block_timestamp();
        let allowed_at = self.repay_allowed_timestamp().get() + self.repay_warm_up().get();
        require!(now >= allowed_at, ERROR_REPAY_ALLOW_NOT_WARMED_UP);
    }
}
