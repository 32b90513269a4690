use common_errors::*;
use common_structs::Position;

use crate::{accrue, execution, proxy_money_market, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionRepayModule:
    storage::Storage
    + validation::ValidationModule
    + execution::ExecutionModule
    + accrue::AccrueModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Repays debt of the active position with the received payment.
    /// Anything above the outstanding debt is sent back to the spell.
    ///
    /// # Errors
    /// - `ERROR_REPAY_NOT_ALLOWED`: If repaying is switched off.
    /// - `ERROR_INCORRECT_DEBT`: If the payment is not the position's debt token.
    fn process_repay(&self) {
        let context = self.require_in_execution();
        require!(self.status().get().allow_repay(), ERROR_REPAY_NOT_ALLOWED);

        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.require_amount_greater_than_zero(&amount);

        let mut position = self.positions(context.position_id).get();
        let (paid, share) = self.repay_position_debt(&mut position, &token, &amount);
        self.positions(context.position_id).set(&position);

        self.tx()
            .to(&context.spell)
            .egld_or_single_esdt(&token, 0, &(&amount - &paid))
            .transfer_if_not_empty();
        self.repay_event(context.position_id, &context.spell, &token, &paid, &share);
    }

    /// Repays up to `amount` of the position's debt to the money market.
    /// Updates the bank and the given position in memory; the caller stores the position.
    ///
    /// # Returns
    /// - `(paid, share)`: Amount taken from `amount` and debt shares burned.
    ///
    /// # Errors
    /// - `ERROR_INCORRECT_DEBT`: If `token` is not the position's debt token.
    /// - `ERROR_NO_DEBT`: If the position owes nothing.
    fn repay_position_debt(
        &self,
        position: &mut Position<Self::Api>,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> (BigUint, BigUint) {
        require!(
            position.debt_token.as_ref() == Some(token),
            ERROR_INCORRECT_DEBT
        );

        let mut bank = self.accrue_bank(token);
        let owed = self.amount_for_shares(&position.debt_share, &bank.total_share, &bank.total_debt);
        require!(owed > 0, ERROR_NO_DEBT);

        let paid = if *amount > owed { owed.clone() } else { amount.clone() };
        let share = self.shares_for_repayment(
            &paid,
            &owed,
            &position.debt_share,
            &bank.total_share,
            &bank.total_debt,
        );

        self.tx()
            .to(&bank.money_market)
            .typed(proxy_money_market::MoneyMarketMockProxy)
            .repay()
            .egld_or_single_esdt(token, 0, &paid)
            .sync_call();

        bank.total_share -= &share;
        bank.total_debt = if paid >= bank.total_debt {
            BigUint::zero()
        } else {
            &bank.total_debt - &paid
        };
        position.debt_share -= &share;
        self.banks(token).set(&bank);

        (paid, share)
    }
}
