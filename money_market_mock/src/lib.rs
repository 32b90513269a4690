#![no_std]

use common_constants::WAD;

multiversx_sc::imports!();

/// Single-asset money market the bank borrows from.
///
/// Debt is stored scaled by a borrow index that grows linearly with
/// `ratePerSecond` (WAD) between accruals.
#[multiversx_sc::contract]
pub trait MoneyMarketMock {
    #[init]
    fn init(&self, token: EgldOrEsdtTokenIdentifier, rate_per_second: BigUint) {
        self.token().set(token);
        self.rate_per_second().set(rate_per_second);
        self.borrow_index().set(BigUint::from(WAD));
        self.last_accrual()
            .set(self.blockchain().get_block_timestamp());
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setRate)]
    fn set_rate(&self, rate_per_second: BigUint) {
        self.accrue_interest();
        self.rate_per_second().set(rate_per_second);
    }

    /// Adds borrowable liquidity.
    #[payable("*")]
    #[endpoint(supply)]
    fn supply(&self) {
        let (token, _) = self.call_value().egld_or_single_fungible_esdt();
        require!(token == self.token().get(), "Wrong token.");
    }

    #[endpoint(borrow)]
    fn borrow(&self, amount: BigUint) {
        require!(amount > 0, "Zero amount.");
        let index = self.accrue_interest();
        let caller = self.blockchain().get_caller();

        let wad = BigUint::from(WAD);
        let scaled = (&amount * &wad + &index - BigUint::from(1u64)) / &index;
        self.scaled_debt(&caller).update(|debt| *debt += scaled);

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&self.token().get(), 0, &amount)
            .transfer();
    }

    /// Repays the caller's debt; anything above the debt is sent back.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self) -> BigUint {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(token == self.token().get(), "Wrong token.");
        let index = self.accrue_interest();
        let caller = self.blockchain().get_caller();

        let debt = self.debt_of(&caller, &index);
        if amount >= debt {
            self.scaled_debt(&caller).clear();
            let refund = &amount - &debt;
            sc_print!("repay: full, refund {}", refund);
            self.tx()
                .to(&caller)
                .egld_or_single_esdt(&token, 0, &refund)
                .transfer_if_not_empty();
            return BigUint::zero();
        }

        let scaled = &amount * &BigUint::from(WAD) / &index;
        self.scaled_debt(&caller).update(|debt| *debt -= scaled);
        self.debt_of(&caller, &index)
    }

    #[endpoint(borrowBalanceCurrent)]
    fn borrow_balance_current(&self, account: ManagedAddress) -> BigUint {
        let index = self.accrue_interest();
        self.debt_of(&account, &index)
    }

    #[view(getBorrowBalanceStored)]
    fn borrow_balance_stored(&self, account: ManagedAddress) -> BigUint {
        self.debt_of(&account, &self.borrow_index().get())
    }

    fn debt_of(&self, account: &ManagedAddress, index: &BigUint) -> BigUint {
        self.scaled_debt(account).get() * index / &BigUint::from(WAD)
    }

    fn accrue_interest(&self) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        let last = self.last_accrual().get();
        let mut index = self.borrow_index().get();
        if now > last {
            let elapsed = BigUint::from(now - last);
            let growth = &index * &self.rate_per_second().get() * elapsed / BigUint::from(WAD);
            index += growth;
            self.borrow_index().set(&index);
            self.last_accrual().set(now);
        }
        index
    }

    #[view(getToken)]
    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getBorrowIndex)]
    #[storage_mapper("borrowIndex")]
    fn borrow_index(&self) -> SingleValueMapper<BigUint>;

    #[view(getRatePerSecond)]
    #[storage_mapper("ratePerSecond")]
    fn rate_per_second(&self) -> SingleValueMapper<BigUint>;

    #[view(getLastAccrual)]
    #[storage_mapper("lastAccrual")]
    fn last_accrual(&self) -> SingleValueMapper<u64>;

    #[view(getScaledDebt)]
    #[storage_mapper("scaledDebt")]
    fn scaled_debt(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
