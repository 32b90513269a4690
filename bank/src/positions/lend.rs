use common_errors::*;
use common_structs::BankConfig;

use crate::{execution, oracle, proxy_vault, risk, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionLendModule:
    storage::Storage
    + validation::ValidationModule
    + execution::ExecutionModule
    + oracle::OracleModule
    + risk::RiskModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Deposits the isolated collateral of the active position into its bank's vault.
    ///
    /// # Errors
    /// - `ERROR_NOT_IN_EXEC`, `ERROR_NOT_FROM_SPELL`: Outside the active execution.
    /// - `ERROR_LEND_NOT_ALLOWED`: If lending is switched off.
    /// - `ERROR_TOKEN_NOT_WHITELISTED`, `ERROR_BANK_NOT_LISTED`: Unknown token.
    /// - `ERROR_INCORRECT_UNDERLYING`: If the position is pinned to another token.
    ///   A new token is accepted only once the position holds no collateral,
    ///   no debt and no vault share.
    fn process_lend(&self) {
        let context = self.require_in_execution();
        require!(self.status().get().allow_lend(), ERROR_LEND_NOT_ALLOWED);

        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.require_amount_greater_than_zero(&amount);
        self.require_whitelisted_token(&token);
        let mut bank = self.require_listed_bank(&token);

        let mut position = self.positions(context.position_id).get();
        if let Some(underlying) = &position.underlying_token {
            require!(
                *underlying == token || position.is_closed(),
                ERROR_INCORRECT_UNDERLYING
            );
        }

        let vault = self.lend_vault(&bank, &token);
        let vault_share = self
            .tx()
            .to(&vault)
            .typed(proxy_vault::VaultMockProxy)
            .deposit()
            .egld_or_single_esdt(&token, 0, &amount)
            .returns(ReturnsResult)
            .sync_call();

        position.underlying_token = Some(token.clone());
        position.underlying_vault_share += &vault_share;
        bank.total_lend += &amount;

        self.banks(&token).set(&bank);
        self.positions(context.position_id).set(&position);
        self.lend_event(context.position_id, &token, &amount, &vault_share);
    }

    /// Withdraws lent isolated collateral and sends the underlying to the spell.
    /// Without `shares` the whole vault share of the position is withdrawn.
    ///
    /// # Errors
    /// - `ERROR_WITHDRAW_LEND_NOT_ALLOWED`: If withdrawing is switched off.
    /// - `ERROR_INCORRECT_UNDERLYING`: If `token` is not the lent token.
    /// - `ERROR_SHARES_EXCEED_POSITION`: If `shares` is above the position's vault share.
    fn process_withdraw_lend(&self, token: &EgldOrEsdtTokenIdentifier, shares: Option<BigUint>) -> BigUint {
        let context = self.require_in_execution();
        require!(
            self.status().get().allow_withdraw_lend(),
            ERROR_WITHDRAW_LEND_NOT_ALLOWED
        );

        let mut position = self.positions(context.position_id).get();
        require!(
            position.underlying_token.as_ref() == Some(token),
            ERROR_INCORRECT_UNDERLYING
        );

        let shares = shares.unwrap_or_else(|| position.underlying_vault_share.clone());
        self.require_amount_greater_than_zero(&shares);
        require!(
            shares <= position.underlying_vault_share,
            ERROR_SHARES_EXCEED_POSITION
        );

        let mut bank = self.require_listed_bank(token);
        let amount = self.withdraw_from_vault(&bank, token, &shares);

        position.underlying_vault_share -= &shares;
        bank.total_lend = if amount >= bank.total_lend {
            BigUint::zero()
        } else {
            &bank.total_lend - &amount
        };

        self.banks(token).set(&bank);
        self.positions(context.position_id).set(&position);

        self.tx()
            .to(&context.spell)
            .egld_or_single_esdt(token, 0, &amount)
            .transfer_if_not_empty();
        self.withdraw_lend_event(context.position_id, token, &shares, &amount);

        amount
    }

    fn withdraw_from_vault(
        &self,
        bank: &BankConfig<Self::Api>,
        token: &EgldOrEsdtTokenIdentifier,
        shares: &BigUint,
    ) -> BigUint {
        let vault = self.lend_vault(bank, token);
        self.tx()
            .to(&vault)
            .typed(proxy_vault::VaultMockProxy)
            .withdraw(shares)
            .returns(ReturnsResult)
            .sync_call()
    }
}
