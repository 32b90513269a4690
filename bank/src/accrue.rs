use common_structs::BankConfig;

use crate::{proxy_money_market, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AccrueModule:
    storage::Storage
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Reconciles a bank's total debt with its money market.
    ///
    /// # Arguments
    /// - `token`: Borrowable token of the bank.
    ///
    /// # Errors
    /// - `ERROR_BANK_NOT_LISTED`: If the bank is not listed.
    #[endpoint(accrue)]
    fn accrue(&self, token: EgldOrEsdtTokenIdentifier) {
        self.accrue_bank(&token);
    }

    /// Accrues every listed bank in `tokens`, skipping unlisted ones.
    ///
    /// # Returns
    /// - One `(token, accrued)` pair per input token.
    #[endpoint(accrueAll)]
    fn accrue_all(
        &self,
        tokens: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) -> MultiValueEncoded<MultiValue2<EgldOrEsdtTokenIdentifier, bool>> {
        let mut outcome = MultiValueEncoded::new();
        for token in tokens {
            let accrued = self.is_bank_listed(&token);
            if accrued {
                self.accrue_bank(&token);
            }
            outcome.push((token, accrued).into());
        }
        outcome
    }

    fn accrue_bank(&self, token: &EgldOrEsdtTokenIdentifier) -> BankConfig<Self::Api> {
        let mut bank = self.require_listed_bank(token);

        let new_total_debt = self
            .tx()
            .to(&bank.money_market)
            .typed(proxy_money_market::MoneyMarketMockProxy)
            .borrow_balance_current(self.blockchain().get_sc_address())
            .returns(ReturnsResult)
            .sync_call();

        if new_total_debt != bank.total_debt {
            self.accrue_event(token, &bank.total_debt, &new_total_debt);
            bank.total_debt = new_total_debt;
            self.banks(token).set(&bank);
        }

        bank
    }
}
