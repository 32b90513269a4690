#![no_std]

use common_constants::WAD;
use common_structs::CollateralInfo;

multiversx_sc::imports!();

/// Semi-fungible wrapper over farm deposits.
///
/// Each `mint` creates a new nonce of the wrapped token whose attributes
/// record the deposited underlying and the farm pool. Pending rewards are a
/// fixed amount of each reward token per wrapped unit (WAD).
#[multiversx_sc::contract]
pub trait WrapperMock {
    #[init]
    fn init(&self, wrapped_token: TokenIdentifier) {
        self.wrapped_token().set(wrapped_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("*")]
    #[endpoint(mint)]
    fn mint(&self, pool_id: u64) -> MultiValue2<u64, BigUint> {
        let (underlying_token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(amount > 0, "Zero amount.");

        let info = CollateralInfo {
            underlying_token,
            pool_id,
        };
        let wrapped_token = self.wrapped_token().get();
        let nonce = self
            .send()
            .esdt_nft_create_compact(&wrapped_token, &amount, &info);
        self.collateral_info(nonce).set(&info);

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .single_esdt(&wrapped_token, nonce, &amount)
            .transfer();

        (nonce, amount).into()
    }

    #[payable("*")]
    #[endpoint(burn)]
    fn burn(&self) -> BigUint {
        let payment = self.call_value().single_esdt().clone();
        require!(
            payment.token_identifier == self.wrapped_token().get(),
            "Wrong token."
        );

        let info = self.collateral_info(payment.token_nonce).get();
        self.send().esdt_local_burn(
            &payment.token_identifier,
            payment.token_nonce,
            &payment.amount,
        );

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&info.underlying_token, 0, &payment.amount)
            .transfer();

        payment.amount
    }

    #[endpoint(setReward)]
    fn set_reward(&self, token: EgldOrEsdtTokenIdentifier, reward_per_unit: BigUint) {
        let mut tokens = self.reward_tokens().get();
        if !tokens.contains(&token) {
            tokens.push(token.clone());
            self.reward_tokens().set(&tokens);
        }
        self.reward_per_unit(&token).set(reward_per_unit);
    }

    #[view(underlyingOf)]
    fn underlying_of(&self, nonce: u64) -> EgldOrEsdtTokenIdentifier {
        self.collateral_info(nonce).get().underlying_token
    }

    #[view(pendingRewards)]
    fn pending_rewards(
        &self,
        amount: BigUint,
    ) -> MultiValueEncoded<MultiValue2<EgldOrEsdtTokenIdentifier, BigUint>> {
        let mut rewards = MultiValueEncoded::new();
        for token in self.reward_tokens().get().iter() {
            let token: &EgldOrEsdtTokenIdentifier = &token;
            let pending = &amount * &self.reward_per_unit(token).get() / BigUint::from(WAD);
            rewards.push((token.clone(), pending).into());
        }
        rewards
    }

    #[view(getWrappedToken)]
    #[storage_mapper("wrappedToken")]
    fn wrapped_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getCollateralInfo)]
    #[storage_mapper("collateralInfo")]
    fn collateral_info(&self, nonce: u64) -> SingleValueMapper<CollateralInfo<Self::Api>>;

    #[view(getRewardTokens)]
    #[storage_mapper("rewardTokens")]
    fn reward_tokens(&self) -> SingleValueMapper<ManagedVec<EgldOrEsdtTokenIdentifier>>;

    #[view(getRewardPerUnit)]
    #[storage_mapper("rewardPerUnit")]
    fn reward_per_unit(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;
}
