use common_proxies::{proxy_bank, proxy_oracle, proxy_vault};
use isolated_bank::{ERROR_BAD_POSITION, ERROR_PRICE_UNSUPPORTED};
use multiversx_sc::types::{ManagedArgBuffer, ReturnsResult};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{BigUint, ExpectMessage, ScenarioTxRun},
};
pub mod constants;
pub mod setup;
use constants::*;
use setup::*;

#[test]
fn views_skip_unpriced_reward() {
    let mut state = BankTestState::new();
    let position_id = state.open_position(&BORROWER_ADDRESS, units(10), units(30));

    // 0.1 RWD per wrapped unit, no oracle price yet
    state.set_reward(REWARD_TOKEN, cents(10));
    assert_eq!(state.get_position_value(position_id).into_raw_units(), &units(30));

    state.execute_error(
        &BORROWER_ADDRESS,
        position_id,
        SPELL_ADDRESS,
        b"doNothing",
        ManagedArgBuffer::new(),
        no_payment(),
        ERROR_PRICE_UNSUPPORTED,
    );
}

#[test]
fn views_count_priced_reward() {
    let mut state = BankTestState::new();
    let position_id = state.open_position(&BORROWER_ADDRESS, units(10), units(30));

    state.set_reward(REWARD_TOKEN, cents(10));
    state.set_price(REWARD_TOKEN, units(2));

    // 30 LP at $1 plus 3 RWD at $2
    assert_eq!(state.get_position_value(position_id).into_raw_units(), &units(36));

    state.execute(
        &BORROWER_ADDRESS,
        position_id,
        SPELL_ADDRESS,
        b"doNothing",
        ManagedArgBuffer::new(),
        no_payment(),
    );
}

#[test]
fn views_project_interest_without_accrue() {
    let mut state = BankTestState::new();
    let position_id = state.open_position(&BORROWER_ADDRESS, units(10), units(30));

    state.set_usdc_rate(BigUint::from(1_000_000_000u64));
    state.advance_time(START_TIMESTAMP + 1_000);
    state.publish_default_prices();

    let expected = units(30) + BigUint::from(30_000_000_000_000u64);
    assert_eq!(state.get_position_debt(position_id), expected);
    // Storage still holds the last reconciled debt
    assert_eq!(state.get_bank(USDC_TOKEN).total_debt, units(30));

    state.accrue(USDC_TOKEN);
    assert_eq!(state.get_bank(USDC_TOKEN).total_debt, expected);
    assert_eq!(state.get_position_debt(position_id), expected);
}

#[test]
fn views_accrue_all_skips_unlisted() {
    let mut state = BankTestState::new();

    let outcome = state.accrue_all(&[USDC_TOKEN, LPT_TOKEN]);
    assert_eq!(
        outcome,
        vec![(token(USDC_TOKEN), true), (token(LPT_TOKEN), false)]
    );
}

#[test]
fn views_vault_yield_raises_isolated_value() {
    let mut state = BankTestState::new();
    let position_id = state.open_position(&BORROWER_ADDRESS, units(10), units(30));

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(ISO_SOFT_VAULT_ADDRESS)
        .typed(proxy_vault::VaultMockProxy)
        .donate()
        .single_esdt(&ISO_TOKEN.to_token_identifier(), 0, &units(10))
        .run();

    // 10 shares now redeem 20 ISO
    assert_eq!(
        state
            .get_isolated_collateral_value(position_id)
            .into_raw_units(),
        &units(100)
    );
}

#[test]
fn views_empty_position() {
    let mut state = BankTestState::new();
    let position_id = state.execute(
        &BORROWER_ADDRESS,
        0,
        SPELL_ADDRESS,
        b"doNothing",
        ManagedArgBuffer::new(),
        no_payment(),
    );

    assert_eq!(state.get_position_debt(position_id), BigUint::zero());
    assert_eq!(state.get_debt_value(position_id).into_raw_units(), &BigUint::zero());
    assert_eq!(
        state.get_position_risk(position_id).into_raw_units(),
        &BigUint::zero()
    );
    assert!(!state.is_liquidatable(position_id));
}

#[test]
fn views_risk_without_isolated_value_is_maximal() {
    let mut state = BankTestState::new();
    let position_id = state.open_position(&BORROWER_ADDRESS, units(10), units(30));

    // Lent ISO is worthless and the LP covers half the debt
    state.set_price(ISO_TOKEN, BigUint::zero());
    state.set_price(LPT_TOKEN, cents(50));

    assert_eq!(
        state
            .get_isolated_collateral_value(position_id)
            .into_raw_units(),
        &BigUint::zero()
    );
    assert_eq!(
        state.get_position_risk(position_id).into_raw_units(),
        &BigUint::from(u64::MAX)
    );
    assert!(state.is_liquidatable(position_id));
}

#[test]
fn views_debt_shares_stay_proportional() {
    let mut state = BankTestState::new();
    let first = state.open_position(&BORROWER_ADDRESS, units(10), units(30));

    state.set_usdc_rate(BigUint::from(1_000_000_000u64));
    state.advance_time(START_TIMESTAMP + 1_000);
    state.publish_default_prices();
    let second = state.open_position(&STRANGER_ADDRESS, units(10), units(30));

    // The later borrower gets fewer shares for the same amount
    let first_share = state.get_position(first).debt_share;
    let second_share = state.get_position(second).debt_share;
    assert_eq!(first_share, units(30));
    assert!(second_share < units(30));

    let second_debt = state.get_position_debt(second);
    assert!(second_debt <= units(30) + BigUint::from(2u64));
    assert!(second_debt + BigUint::from(2u64) >= units(30));

    state.advance_time(START_TIMESTAMP + 2_000);
    state.accrue(USDC_TOKEN);

    let bank = state.get_bank(USDC_TOKEN);
    assert_eq!(bank.total_share, &first_share + &second_share);

    let first_debt = state.get_position_debt(first);
    let second_debt = state.get_position_debt(second);
    assert!(first_debt > second_debt);

    // Each position rounds up by less than one unit
    let owed = first_debt + second_debt;
    assert!(owed >= bank.total_debt);
    assert!(owed <= bank.total_debt + BigUint::from(1u64));
}

#[test]
fn views_unknown_position() {
    let mut state = BankTestState::new();

    state
        .world
        .query()
        .to(BANK_ADDRESS)
        .typed(proxy_bank::IsolatedBankProxy)
        .get_position_risk(3u64)
        .returns(ExpectMessage(core::str::from_utf8(ERROR_BAD_POSITION).unwrap()))
        .run();
}

#[test]
fn views_bank_records() {
    let mut state = BankTestState::new();

    let bank = state.get_bank(USDC_TOKEN);
    assert!(bank.is_listed);
    assert_eq!(bank.soft_vault, USDC_SOFT_VAULT_ADDRESS.to_managed_address());
    assert_eq!(bank.hard_vault, USDC_HARD_VAULT_ADDRESS.to_managed_address());
    assert_eq!(bank.money_market, USDC_MARKET_ADDRESS.to_managed_address());
    assert_eq!(
        bank.liquidation_threshold_bps.into_raw_units(),
        &BigUint::<StaticApi>::from(USDC_LIQ_THRESHOLD_BPS)
    );

    let banks = state
        .world
        .query()
        .to(BANK_ADDRESS)
        .typed(proxy_bank::IsolatedBankProxy)
        .all_banks()
        .returns(ReturnsResult)
        .run();
    assert_eq!(banks.into_iter().count(), 2);
}

#[test]
fn views_require_debt_token_price() {
    let mut state = BankTestState::new();
    let position_id = state.open_position(&BORROWER_ADDRESS, units(10), units(30));

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(ORACLE_ADDRESS)
        .typed(proxy_oracle::OracleMockProxy)
        .remove_price(USDC_TOKEN)
        .run();

    // Only reward tokens are skipped by the views
    state
        .world
        .query()
        .to(BANK_ADDRESS)
        .typed(proxy_bank::IsolatedBankProxy)
        .get_debt_value(position_id)
        .returns(ExpectMessage(
            core::str::from_utf8(ERROR_PRICE_UNSUPPORTED).unwrap(),
        ))
        .run();
}
