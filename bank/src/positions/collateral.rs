use common_errors::*;

use crate::{execution, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionCollateralModule:
    storage::Storage
    + validation::ValidationModule
    + execution::ExecutionModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Adds the received wrapper SFT to the active position's collateral.
    ///
    /// # Errors
    /// - `ERROR_TOKEN_NOT_WHITELISTED`: If the SFT collection or its underlying is not whitelisted.
    /// - `ERROR_DIFF_COLLATERAL_EXISTS`: If the position holds another collateral token or nonce.
    fn process_put_collateral(&self) {
        let context = self.require_in_execution();

        let payment = self.call_value().single_esdt().clone();
        self.require_amount_greater_than_zero(&payment.amount);

        let wrapper_mapper = self.wrapper_by_token(&payment.token_identifier);
        require!(!wrapper_mapper.is_empty(), ERROR_TOKEN_NOT_WHITELISTED);
        let wrapper = wrapper_mapper.get();
        require!(
            self.whitelisted_wrappers(&wrapper).get(),
            ERROR_TOKEN_NOT_WHITELISTED
        );

        let info = self
            .wrapper_collateral_info(wrapper, payment.token_nonce)
            .get();
        self.require_whitelisted_token(&info.underlying_token);

        let mut position = self.positions(context.position_id).get();
        if position.collateral_size > 0 {
            require!(
                position.coll_token.as_ref() == Some(&payment.token_identifier)
                    && position.coll_id == payment.token_nonce,
                ERROR_DIFF_COLLATERAL_EXISTS
            );
        }

        position.coll_token = Some(payment.token_identifier.clone());
        position.coll_id = payment.token_nonce;
        position.collateral_size += &payment.amount;
        self.positions(context.position_id).set(&position);

        self.put_collateral_event(
            context.position_id,
            &payment.token_identifier,
            payment.token_nonce,
            &payment.amount,
        );
    }

    /// Takes wrapper collateral out of the active position and sends it to the spell.
    /// Without `amount` the whole collateral is taken.
    ///
    /// # Errors
    /// - `ERROR_SHARES_EXCEED_POSITION`: If `amount` is above the position's collateral.
    fn process_take_collateral(&self, amount: Option<BigUint>) {
        let context = self.require_in_execution();

        let mut position = self.positions(context.position_id).get();
        let amount = amount.unwrap_or_else(|| position.collateral_size.clone());
        self.require_amount_greater_than_zero(&amount);
        require!(
            amount <= position.collateral_size,
            ERROR_SHARES_EXCEED_POSITION
        );

        let coll_token = match &position.coll_token {
            Some(coll_token) => coll_token.clone(),
            None => sc_panic!(ERROR_SHARES_EXCEED_POSITION),
        };

        position.collateral_size -= &amount;
        self.positions(context.position_id).set(&position);

        self.tx()
            .to(&context.spell)
            .single_esdt(&coll_token, position.coll_id, &amount)
            .transfer();
        self.take_collateral_event(context.position_id, &coll_token, position.coll_id, &amount);
    }
}
