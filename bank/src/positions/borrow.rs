use common_errors::*;

use crate::{accrue, execution, proxy_money_market, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionBorrowModule:
    storage::Storage
    + validation::ValidationModule
    + execution::ExecutionModule
    + accrue::AccrueModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Borrows `amount` of `token` for the active position and sends it to the spell.
    ///
    /// The position receives debt shares proportional to the bank's pool after
    /// a fresh accrue. The first borrow of an empty position pins its debt token.
    ///
    /// # Errors
    /// - `ERROR_BORROW_NOT_ALLOWED`: If borrowing is switched off.
    /// - `ERROR_TOKEN_NOT_WHITELISTED`, `ERROR_BANK_NOT_LISTED`: Unknown token.
    /// - `ERROR_INCORRECT_DEBT`: If the position already owes another token.
    fn process_borrow(&self, token: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        let context = self.require_in_execution();
        require!(self.status().get().allow_borrow(), ERROR_BORROW_NOT_ALLOWED);
        self.require_amount_greater_than_zero(amount);
        self.require_whitelisted_token(token);

        let mut position = self.positions(context.position_id).get();
        if let Some(debt_token) = &position.debt_token {
            require!(
                debt_token == token || position.is_empty(),
                ERROR_INCORRECT_DEBT
            );
        }

        let mut bank = self.accrue_bank(token);
        let share = self.shares_for_amount(amount, &bank.total_share, &bank.total_debt);

        self.tx()
            .to(&bank.money_market)
            .typed(proxy_money_market::MoneyMarketMockProxy)
            .borrow(amount)
            .sync_call();

        bank.total_share += &share;
        bank.total_debt += amount;
        position.debt_token = Some(token.clone());
        position.debt_share += &share;

        self.banks(token).set(&bank);
        self.positions(context.position_id).set(&position);

        self.tx()
            .to(&context.spell)
            .egld_or_single_esdt(token, 0, amount)
            .transfer();
        self.borrow_event(context.position_id, token, amount, &share);
    }
}
