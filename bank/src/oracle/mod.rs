use common_errors::{ERROR_PRICE_STALE, ERROR_PRICE_UNSUPPORTED};
use common_structs::PriceFeed;

use crate::{cache::Cache, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait OracleModule: storage::Storage {
    /// Price of a token the valuation cannot do without.
    ///
    /// # Errors
    /// - `ERROR_PRICE_UNSUPPORTED`: The oracle publishes no price for `token`.
    /// - `ERROR_PRICE_STALE`: The published price is older than the max price age.
    fn get_token_price(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> PriceFeed<Self::Api> {
        if cache.prices_cache.contains(token) {
            return cache.prices_cache.get(token);
        }

        let mapper = self.oracle_price_feed(cache.oracle.clone(), token);
        require!(!mapper.is_empty(), ERROR_PRICE_UNSUPPORTED);

        let feed = mapper.get();
        require!(cache.is_price_fresh(&feed), ERROR_PRICE_STALE);

        cache.prices_cache.put(token, &feed);
        feed
    }

    /// Price of a token the valuation may skip; `None` when missing or stale.
    fn find_token_price(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> Option<PriceFeed<Self::Api>> {
        if cache.prices_cache.contains(token) {
            return Some(cache.prices_cache.get(token));
        }

        let mapper = self.oracle_price_feed(cache.oracle.clone(), token);
        if mapper.is_empty() {
            return None;
        }

        let feed = mapper.get();
        if !cache.is_price_fresh(&feed) {
            return None;
        }

        cache.prices_cache.put(token, &feed);
        Some(feed)
    }

    fn is_token_supported_by_oracle(&self, token: &EgldOrEsdtTokenIdentifier) -> bool {
        !self
            .oracle_price_feed(self.oracle_address().get(), token)
            .is_empty()
    }
}
