#![no_std]

use common_proxies::{proxy_bank, proxy_wrapper};
use common_structs::{ExecutionContext, Position};

multiversx_sc::imports!();

/// Strategy module driving the bank primitives from inside `execute`.
///
/// The borrowed asset is "swapped" one to one into the farm LP token from the
/// spell's own reserve, then wrapped and posted as collateral.
#[multiversx_sc::contract]
pub trait SpellMock {
    #[init]
    fn init(&self, bank: ManagedAddress, wrapper: ManagedAddress, lp_token: EgldOrEsdtTokenIdentifier) {
        self.bank().set(bank);
        self.wrapper().set(wrapper);
        self.lp_token().set(lp_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Lends every received payment, borrows `borrow_amount` and posts the
    /// wrapped LP obtained for it as collateral.
    #[payable("*")]
    #[endpoint(openPosition)]
    fn open_position(&self, borrow_token: EgldOrEsdtTokenIdentifier, borrow_amount: BigUint, pool_id: u64) {
        self.lend_received();

        let bank = self.bank().get();
        self.tx()
            .to(&bank)
            .typed(proxy_bank::IsolatedBankProxy)
            .borrow(&borrow_token, &borrow_amount)
            .sync_call();

        let (nonce, amount) = self
            .tx()
            .to(self.wrapper().get())
            .typed(proxy_wrapper::WrapperMockProxy)
            .mint(pool_id)
            .egld_or_single_esdt(&self.lp_token().get(), 0, &borrow_amount)
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        let wrapped_token = self.wrapped_token(self.wrapper().get()).get();
        sc_print!("openPosition: wrapped nonce {} amount {}", nonce, amount);
        self.tx()
            .to(&bank)
            .typed(proxy_bank::IsolatedBankProxy)
            .put_collateral()
            .single_esdt(&wrapped_token, nonce, &amount)
            .sync_call();
    }

    // LP reserve the borrowed asset is swapped against
    #[payable("*")]
    #[endpoint(fundReserve)]
    fn fund_reserve(&self) {}

    #[payable("*")]
    #[endpoint(lendOnly)]
    fn lend_only(&self) {
        self.lend_received();
    }

    #[endpoint(increaseDebt)]
    fn increase_debt(&self, borrow_token: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.tx()
            .to(self.bank().get())
            .typed(proxy_bank::IsolatedBankProxy)
            .borrow(&borrow_token, &amount)
            .sync_call();
    }

    #[endpoint(takeAllCollateral)]
    fn take_all_collateral(&self) {
        self.tx()
            .to(self.bank().get())
            .typed(proxy_bank::IsolatedBankProxy)
            .take_collateral(OptionalValue::<BigUint>::None)
            .sync_call();
    }

    /// Withdraws every vault share of `current` and lends the received
    /// payments in its place.
    #[payable("*")]
    #[endpoint(swapIsolated)]
    fn swap_isolated(&self, current: EgldOrEsdtTokenIdentifier) {
        self.tx()
            .to(self.bank().get())
            .typed(proxy_bank::IsolatedBankProxy)
            .withdraw_lend(&current, OptionalValue::<BigUint>::None)
            .sync_call();
        self.lend_received();
    }

    // Liquidates from the spell balance
    #[endpoint(liquidatePosition)]
    fn liquidate_position(&self, position_id: u64, token: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.tx()
            .to(self.bank().get())
            .typed(proxy_bank::IsolatedBankProxy)
            .liquidate(position_id)
            .egld_or_single_esdt(&token, 0, &amount)
            .sync_call();
    }

    /// Unwinds the active position and sends the isolated collateral back
    /// to its owner. Debt is repaid from the spell balance; the bank refunds
    /// anything above the outstanding debt.
    #[endpoint(closePosition)]
    fn close_position(&self) {
        let bank = self.bank().get();
        let context = self.bank_execution_context(bank.clone()).get();
        let position = self.bank_positions(bank.clone(), context.position_id).get();

        if position.collateral_size > 0 {
            self.take_all_collateral();
            if let Some(coll_token) = &position.coll_token {
                self.tx()
                    .to(self.wrapper().get())
                    .typed(proxy_wrapper::WrapperMockProxy)
                    .burn()
                    .single_esdt(coll_token, position.coll_id, &position.collateral_size)
                    .sync_call();
            }
        }

        if let Some(debt_token) = &position.debt_token {
            if position.debt_share > 0 {
                let balance = self.blockchain().get_sc_balance(debt_token, 0);
                self.tx()
                    .to(&bank)
                    .typed(proxy_bank::IsolatedBankProxy)
                    .repay()
                    .egld_or_single_esdt(debt_token, 0, &balance)
                    .sync_call();
            }
        }

        if let Some(underlying) = &position.underlying_token {
            if position.underlying_vault_share > 0 {
                let amount = self
                    .tx()
                    .to(&bank)
                    .typed(proxy_bank::IsolatedBankProxy)
                    .withdraw_lend(underlying, OptionalValue::<BigUint>::None)
                    .returns(ReturnsResult)
                    .sync_call();
                self.tx()
                    .to(&position.owner)
                    .egld_or_single_esdt(underlying, 0, &amount)
                    .transfer_if_not_empty();
            }
        }
    }

    // Opens a second execution from inside the first one
    #[endpoint(reenter)]
    fn reenter(&self) {
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(self.bank().get())
            .typed(proxy_bank::IsolatedBankProxy)
            .execute(
                0u64,
                own_address,
                ManagedBuffer::from(b"doNothing"),
                ManagedArgBuffer::new(),
            )
            .sync_call();
    }

    #[endpoint(doNothing)]
    fn do_nothing(&self) {}

    fn lend_received(&self) {
        let payments = self.call_value().all_transfers();
        let bank = self.bank().get();
        for payment in payments.iter() {
            let payment: &EgldOrEsdtTokenPayment = &payment;
            self.tx()
                .to(&bank)
                .typed(proxy_bank::IsolatedBankProxy)
                .lend()
                .payment(payment.clone())
                .sync_call();
        }
    }

    #[storage_mapper("bank")]
    fn bank(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("wrapper")]
    fn wrapper(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("lpToken")]
    fn lp_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper_from_address("wrappedToken")]
    fn wrapped_token(&self, wrapper: ManagedAddress) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("executionContext")]
    fn bank_execution_context(
        &self,
        bank: ManagedAddress,
    ) -> SingleValueMapper<ExecutionContext<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("positions")]
    fn bank_positions(
        &self,
        bank: ManagedAddress,
        position_id: u64,
    ) -> SingleValueMapper<Position<Self::Api>, ManagedAddress>;
}
