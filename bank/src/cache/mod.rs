use common_structs::{BankConfig, PriceFeed, PricingPolicy};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per-call snapshot of oracle prices and bank configs.
///
/// Every price used while valuing one or more positions inside a call comes
/// from the same snapshot. The pricing policy decides whether an unpriceable
/// reward token aborts the call or is skipped.
pub struct Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::storage::Storage,
{
    sc_ref: &'a C,

    pub prices_cache: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, PriceFeed<C::Api>>,
    pub banks_cache: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, BankConfig<C::Api>>,
    pub oracle: ManagedAddress<C::Api>,
    pub max_price_age: u64,
    pub current_timestamp: u64,
    pub policy: PricingPolicy,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C, policy: PricingPolicy) -> Self {
        Cache {
            sc_ref,
            prices_cache: ManagedMapEncoded::new(),
            banks_cache: ManagedMapEncoded::new(),
            oracle: sc_ref.oracle_address().get(),
            max_price_age: sc_ref.max_price_age().get(),
            current_timestamp: sc_ref.blockchain().get_block_timestamp(),
            policy,
        }
    }

    /// Bank config as stored when first requested in this call.
    pub fn get_cached_bank(&mut self, token: &EgldOrEsdtTokenIdentifier<C::Api>) -> BankConfig<C::Api> {
        if self.banks_cache.contains(token) {
            return self.banks_cache.get(token);
        }

        let bank = self.sc_ref.banks(token).get();
        self.banks_cache.put(token, &bank);
        bank
    }

    pub fn is_price_fresh(&self, feed: &PriceFeed<C::Api>) -> bool {
        feed.timestamp >= self.current_timestamp
            || self.current_timestamp - feed.timestamp <= self.max_price_age
    }
}
