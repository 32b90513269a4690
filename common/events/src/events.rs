#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("add_bank")]
    fn add_bank_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] soft_vault: &ManagedAddress,
        #[indexed] hard_vault: &ManagedAddress,
        #[indexed] money_market: &ManagedAddress,
        #[indexed] liquidation_threshold_bps: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("modify_bank")]
    fn modify_bank_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] soft_vault: &ManagedAddress,
        #[indexed] hard_vault: &ManagedAddress,
        #[indexed] liquidation_threshold_bps: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("whitelist_token")]
    fn whitelist_token_event(&self, #[indexed] token: &EgldOrEsdtTokenIdentifier, #[indexed] status: bool);

    #[event("whitelist_spell")]
    fn whitelist_spell_event(&self, #[indexed] spell: &ManagedAddress, #[indexed] status: bool);

    #[event("whitelist_wrapper")]
    fn whitelist_wrapper_event(
        &self,
        #[indexed] wrapper: &ManagedAddress,
        #[indexed] wrapper_token: &TokenIdentifier,
        #[indexed] status: bool,
    );

    #[event("set_status")]
    fn set_status_event(&self, #[indexed] status: u8, #[indexed] repay_allowed_timestamp: u64);

    #[event("accrue")]
    fn accrue_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] old_total_debt: &BigUint,
        #[indexed] new_total_debt: &BigUint,
    );

    #[event("execute")]
    fn execute_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] caller: &ManagedAddress,
        #[indexed] spell: &ManagedAddress,
        #[indexed] endpoint: &ManagedBuffer,
    );

    #[event("lend")]
    fn lend_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] vault_share: &BigUint,
    );

    #[event("withdraw_lend")]
    fn withdraw_lend_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] vault_share: &BigUint,
        #[indexed] amount: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] share: &BigUint,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] payer: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] share: &BigUint,
    );

    #[event("put_collateral")]
    fn put_collateral_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] coll_token: &TokenIdentifier,
        #[indexed] coll_id: u64,
        #[indexed] amount: &BigUint,
    );

    #[event("take_collateral")]
    fn take_collateral_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] coll_token: &TokenIdentifier,
        #[indexed] coll_id: u64,
        #[indexed] amount: &BigUint,
    );

    #[event("liquidate")]
    fn liquidate_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] record: &LiquidationRecord<Self::Api>,
    );
}
