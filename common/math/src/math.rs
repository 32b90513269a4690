#![no_std]

use core::cmp::Ordering;

use common_constants::{BPS_PRECISION, WAD_PRECISION};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    fn div_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;
        let denominator = scaled_b.into_raw_units();

        let half_denominator = denominator / &BigUint::from(2u64);
        let rounded_quotient = (numerator + half_denominator) / denominator;

        self.to_decimal(rounded_quotient, precision)
    }

    /// Debt shares minted for borrowing `amount` from a pool.
    /// An empty pool mints shares one to one.
    fn shares_for_amount(
        &self,
        amount: &BigUint,
        total_share: &BigUint,
        total_debt: &BigUint,
    ) -> BigUint {
        if *total_share == 0 || *total_debt == 0 {
            return amount.clone();
        }

        amount * total_share / total_debt
    }

    /// Debt owed for `share`, rounded up so the pool never loses dust.
    fn amount_for_shares(
        &self,
        share: &BigUint,
        total_share: &BigUint,
        total_debt: &BigUint,
    ) -> BigUint {
        if *total_share == 0 {
            return BigUint::zero();
        }

        let numerator = share * total_debt;
        (numerator + total_share - &BigUint::from(1u64)) / total_share
    }

    /// Shares burned when `paid` out of `owed` is repaid.
    /// A full repayment always burns every share of the position.
    fn shares_for_repayment(
        &self,
        paid: &BigUint,
        owed: &BigUint,
        position_share: &BigUint,
        total_share: &BigUint,
        total_debt: &BigUint,
    ) -> BigUint {
        if paid >= owed || *total_debt == 0 {
            return position_share.clone();
        }

        let share = paid * total_share / total_debt;
        if &share > position_share {
            position_share.clone()
        } else {
            share
        }
    }

    /// USD value (WAD) of a raw token amount priced per whole token.
    fn get_token_usd_value(
        &self,
        amount: &BigUint,
        asset_decimals: u8,
        price_wad: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let amount_dec = self.to_decimal(amount.clone(), asset_decimals as usize);
        let price_dec = self.to_decimal_wad(price_wad.clone());
        self.mul_half_up(&amount_dec, &price_dec, WAD_PRECISION)
    }

    fn to_decimal_wad(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn bps_zero(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_bps(BigUint::zero())
    }

    fn wad_zero(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn to_decimal_bps(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, BPS_PRECISION)
    }

    fn to_decimal(
        self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn rescale_half_up(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();
        let raw_value = value.into_raw_units();

        match new_precision.cmp(&old_precision) {
            Ordering::Equal => value.clone(),
            Ordering::Less => {
                let precision_diff = old_precision - new_precision;
                let factor = BigUint::from(10u64).pow(precision_diff as u32);
                let half_factor = &factor / 2u64;

                let rounded_downscaled_value = (raw_value + &half_factor) / factor;
                ManagedDecimal::from_raw_units(rounded_downscaled_value, new_precision)
            },
            Ordering::Greater => value.rescale(new_precision),
        }
    }
}
