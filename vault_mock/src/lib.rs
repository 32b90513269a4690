#![no_std]

multiversx_sc::imports!();

/// Share based deposit adapter for one underlying token.
///
/// Deployed with a money market it acts as the yield-bearing ("soft") vault of
/// a bank; deployed without one it is the pass-through ("hard") vault.
/// Yield is simulated by `donate`, which grows the underlying without minting.
#[multiversx_sc::contract]
pub trait VaultMock {
    #[init]
    fn init(&self, underlying_token: EgldOrEsdtTokenIdentifier, money_market: OptionalValue<ManagedAddress>) {
        self.underlying_token().set(underlying_token);
        if let OptionalValue::Some(money_market) = money_market {
            self.money_market().set(money_market);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) -> BigUint {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(token == self.underlying_token().get(), "Wrong token.");
        require!(amount > 0, "Zero amount.");

        let total_shares = self.total_shares().get();
        let total_underlying = self.total_underlying().get();
        let shares = if total_shares == 0 || total_underlying == 0 {
            amount.clone()
        } else {
            &amount * &total_shares / &total_underlying
        };

        let caller = self.blockchain().get_caller();
        self.shares(&caller).update(|balance| *balance += &shares);
        self.total_shares().update(|total| *total += &shares);
        self.total_underlying().update(|total| *total += &amount);

        shares
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, shares: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        let balance = self.shares(&caller).get();
        require!(shares <= balance, "Not enough shares.");

        let amount = self.convert_to_amount(&shares);
        self.shares(&caller).set(&balance - &shares);
        self.total_shares().update(|total| *total -= &shares);
        self.total_underlying().update(|total| *total -= &amount);

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&self.underlying_token().get(), 0, &amount)
            .transfer_if_not_empty();

        amount
    }

    // Simulated yield
    #[payable("*")]
    #[endpoint(donate)]
    fn donate(&self) {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(token == self.underlying_token().get(), "Wrong token.");
        self.total_underlying().update(|total| *total += &amount);
    }

    #[view(convertToAmount)]
    fn convert_to_amount(&self, shares: &BigUint) -> BigUint {
        let total_shares = self.total_shares().get();
        if total_shares == 0 {
            return BigUint::zero();
        }
        shares * &self.total_underlying().get() / &total_shares
    }

    #[view(getUnderlyingToken)]
    #[storage_mapper("underlyingToken")]
    fn underlying_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getMoneyMarket)]
    #[storage_mapper("moneyMarket")]
    fn money_market(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalUnderlying)]
    #[storage_mapper("totalUnderlying")]
    fn total_underlying(&self) -> SingleValueMapper<BigUint>;

    #[view(getShareBalance)]
    #[storage_mapper("shares")]
    fn shares(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
