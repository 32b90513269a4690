#![no_std]

use common_structs::PriceFeed;

multiversx_sc::imports!();

/// USD price feed used by the bank. Prices are WAD scaled per whole token.
#[multiversx_sc::contract]
pub trait OracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setPrice)]
    fn set_price(&self, token: EgldOrEsdtTokenIdentifier, price: BigUint, asset_decimals: u8) {
        let timestamp = self.blockchain().get_block_timestamp();
        self.set_price_at(token, price, asset_decimals, timestamp);
    }

    // Lets tests publish prices that are already stale
    #[endpoint(setPriceAt)]
    fn set_price_at(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        price: BigUint,
        asset_decimals: u8,
        timestamp: u64,
    ) {
        sc_print!("setPrice: price {} timestamp {}", price, timestamp);
        self.prices(&token).set(PriceFeed {
            price,
            asset_decimals,
            timestamp,
        });
    }

    #[endpoint(removePrice)]
    fn remove_price(&self, token: EgldOrEsdtTokenIdentifier) {
        self.prices(&token).clear();
    }

    #[view(isSupported)]
    fn is_supported(&self, token: EgldOrEsdtTokenIdentifier) -> bool {
        !self.prices(&token).is_empty()
    }

    #[view(getPrice)]
    #[storage_mapper("prices")]
    fn prices(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<PriceFeed<Self::Api>>;
}
