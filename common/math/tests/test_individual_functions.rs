// Standalone tests for individual math functions
// Run with: cargo test --test test_individual_functions test_name

use multiversx_sc::types::{BigUint, ManagedDecimal};
use multiversx_sc_scenario::api::StaticApi;

use common_math::SharedMathModule;

pub struct MathTester;

impl multiversx_sc::contract_base::ContractBase for MathTester {
    type Api = StaticApi;
}

impl SharedMathModule for MathTester {}

fn big(value: u128) -> BigUint<StaticApi> {
    BigUint::from(value)
}

#[test]
fn test_to_decimal_wad() {
    let tester = MathTester;

    let value = big(1_000_000_000_000_000_000);
    let result = tester.to_decimal_wad(value.clone());

    assert_eq!(result.into_raw_units(), &value);
    assert_eq!(result.scale(), 18);
}

#[test]
fn test_zero_helpers() {
    let tester = MathTester;

    assert_eq!(tester.wad_zero().into_raw_units(), &big(0));
    assert_eq!(tester.wad_zero().scale(), 18);
    assert_eq!(tester.bps_zero().scale(), 4);
}

#[test]
fn test_mul_half_up_rounds_half_away() {
    let tester = MathTester;

    // 0.15 * 0.5 = 0.075 -> 0.08 at two decimals
    let a = ManagedDecimal::<StaticApi, usize>::from_raw_units(big(15), 2);
    let b = ManagedDecimal::<StaticApi, usize>::from_raw_units(big(50), 2);
    let result = tester.mul_half_up(&a, &b, 2);

    assert_eq!(result.into_raw_units(), &big(8));
}

#[test]
fn test_div_half_up() {
    let tester = MathTester;

    // 2 / 3 = 0.666.. -> 0.67
    let a = ManagedDecimal::<StaticApi, usize>::from_raw_units(big(200), 2);
    let b = ManagedDecimal::<StaticApi, usize>::from_raw_units(big(300), 2);
    let result = tester.div_half_up(&a, &b, 2);

    assert_eq!(result.into_raw_units(), &big(67));
}

#[test]
fn test_rescale_half_up_down_and_up() {
    let tester = MathTester;

    let value = ManagedDecimal::<StaticApi, usize>::from_raw_units(big(12_345), 4);
    assert_eq!(tester.rescale_half_up(&value, 2).into_raw_units(), &big(123));
    assert_eq!(tester.rescale_half_up(&value, 6).into_raw_units(), &big(1_234_500));
    assert_eq!(tester.rescale_half_up(&value, 4).into_raw_units(), &big(12_345));
}

#[test]
fn test_token_usd_value_scales_by_decimals() {
    let tester = MathTester;

    // 10 tokens with 6 decimals at $5
    let amount = big(10_000_000);
    let price = big(5_000_000_000_000_000_000);
    let value = tester.get_token_usd_value(&amount, 6, &price);

    assert_eq!(value.scale(), 18);
    assert_eq!(value.into_raw_units(), &big(50_000_000_000_000_000_000));
}
