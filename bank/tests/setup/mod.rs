#![allow(dead_code)]

use crate::constants::*;

use common_proxies::{
    proxy_bank, proxy_money_market, proxy_oracle, proxy_spell, proxy_vault, proxy_wrapper,
};
use common_structs::{BankConfig, ExecutionContext, Position};
use multiversx_sc::{
    imports::{MultiValue2, OptionalValue},
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, EsdtLocalRole, EsdtTokenPayment, ManagedAddress,
        ManagedArgBuffer, ManagedBuffer, ManagedDecimal, ManagedVec, MultiValueEncoded,
        NumDecimals, ReturnsResult, TestAddress, TestSCAddress, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ScenarioTxRun},
    ScenarioWorld,
};

pub static SFT_ROLES: &[EsdtLocalRole] = &[
    EsdtLocalRole::NftCreate,
    EsdtLocalRole::NftAddQuantity,
    EsdtLocalRole::NftBurn,
];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(BANK_PATH, isolated_bank::ContractBuilder);
    blockchain.register_contract(ORACLE_PATH, oracle_mock::ContractBuilder);
    blockchain.register_contract(VAULT_PATH, vault_mock::ContractBuilder);
    blockchain.register_contract(MONEY_MARKET_PATH, money_market_mock::ContractBuilder);
    blockchain.register_contract(WRAPPER_PATH, wrapper_mock::ContractBuilder);
    blockchain.register_contract(SPELL_PATH, spell_mock::ContractBuilder);

    blockchain
}

/// Whole tokens to raw 18 decimal units.
pub fn units(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(TOKEN_DECIMALS as u32)
}

/// Hundredths of a token to raw 18 decimal units.
pub fn cents(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(TOKEN_DECIMALS as u32 - 2)
}

pub fn token(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

pub fn open_position_args(borrow_amount: &BigUint<StaticApi>) -> ManagedArgBuffer<StaticApi> {
    let mut args = ManagedArgBuffer::new();
    args.push_arg(token(USDC_TOKEN));
    args.push_arg(borrow_amount);
    args.push_arg(POOL_ID);
    args
}

pub fn increase_debt_args(
    borrow_token: TestTokenIdentifier,
    amount: &BigUint<StaticApi>,
) -> ManagedArgBuffer<StaticApi> {
    let mut args = ManagedArgBuffer::new();
    args.push_arg(token(borrow_token));
    args.push_arg(amount);
    args
}

pub fn single_payment(
    token_id: TestTokenIdentifier,
    nonce: u64,
    amount: BigUint<StaticApi>,
) -> ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>> {
    let mut payments = ManagedVec::new();
    payments.push(EsdtTokenPayment::new(
        token_id.to_token_identifier(),
        nonce,
        amount,
    ));
    payments
}

pub fn no_payment() -> ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>> {
    ManagedVec::new()
}

pub struct BankTestState {
    pub world: ScenarioWorld,
}

impl BankTestState {
    /// Deploys the bank with an isolated collateral bank (ISO) and a debt
    /// bank (USDC), both backed by a soft vault and a money market, plus a
    /// whitelisted spell and wrapper over the LPT farm token.
    pub fn new() -> Self {
        let mut world = world();
        world.current_block().block_timestamp(START_TIMESTAMP);
        setup_accounts(&mut world);

        setup_oracle(&mut world);
        setup_money_markets(&mut world);
        setup_vaults(&mut world);
        setup_wrapper(&mut world);
        setup_bank(&mut world);
        setup_spell(&mut world);

        let mut state = Self { world };
        state.publish_default_prices();
        state.configure_bank();
        state.fund_liquidity();
        state
    }

    // Oracle

    pub fn set_price(&mut self, token_id: TestTokenIdentifier, price_wad: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_ADDRESS)
            .typed(proxy_oracle::OracleMockProxy)
            .set_price(token_id, price_wad, TOKEN_DECIMALS as u8)
            .run();
    }

    pub fn set_price_at(
        &mut self,
        token_id: TestTokenIdentifier,
        price_wad: BigUint<StaticApi>,
        timestamp: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_ADDRESS)
            .typed(proxy_oracle::OracleMockProxy)
            .set_price_at(token_id, price_wad, TOKEN_DECIMALS as u8, timestamp)
            .run();
    }

    pub fn publish_default_prices(&mut self) {
        self.set_price(ISO_TOKEN, units(ISO_PRICE_IN_DOLLARS));
        self.set_price(USDC_TOKEN, units(USDC_PRICE_IN_DOLLARS));
        self.set_price(LPT_TOKEN, units(LPT_PRICE_IN_DOLLARS));
    }

    /// Drops the isolated collateral and the farm token to $0.50.
    pub fn crash_collateral_prices(&mut self) {
        self.set_price(ISO_TOKEN, cents(50));
        self.set_price(LPT_TOKEN, cents(50));
        self.set_price(USDC_TOKEN, units(USDC_PRICE_IN_DOLLARS));
    }

    pub fn set_reward(&mut self, reward_token: TestTokenIdentifier, reward_per_unit: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(WRAPPER_ADDRESS)
            .typed(proxy_wrapper::WrapperMockProxy)
            .set_reward(reward_token, reward_per_unit)
            .run();
    }

    pub fn set_usdc_rate(&mut self, rate_per_second: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(USDC_MARKET_ADDRESS)
            .typed(proxy_money_market::MoneyMarketMockProxy)
            .set_rate(rate_per_second)
            .run();
    }

    pub fn advance_time(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Execution

    pub fn execute(
        &mut self,
        from: &TestAddress,
        position_id: u64,
        spell: TestSCAddress,
        endpoint: &[u8],
        arguments: ManagedArgBuffer<StaticApi>,
        payments: ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>>,
    ) -> u64 {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .execute(position_id, spell, ManagedBuffer::<StaticApi>::new_from_bytes(endpoint), arguments)
            .multi_esdt(payments)
            .returns(ReturnsResult)
            .run()
    }

    pub fn execute_error(
        &mut self,
        from: &TestAddress,
        position_id: u64,
        spell: TestSCAddress,
        endpoint: &[u8],
        arguments: ManagedArgBuffer<StaticApi>,
        payments: ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .execute(position_id, spell, ManagedBuffer::<StaticApi>::new_from_bytes(endpoint), arguments)
            .multi_esdt(payments)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Lends `iso_amount` ISO, borrows `borrow_amount` USDC and posts the wrapped LP.
    pub fn open_position(
        &mut self,
        from: &TestAddress,
        iso_amount: BigUint<StaticApi>,
        borrow_amount: BigUint<StaticApi>,
    ) -> u64 {
        self.execute(
            from,
            0,
            SPELL_ADDRESS,
            b"openPosition",
            open_position_args(&borrow_amount),
            single_payment(ISO_TOKEN, 0, iso_amount),
        )
    }

    pub fn open_position_error(
        &mut self,
        from: &TestAddress,
        iso_amount: BigUint<StaticApi>,
        borrow_amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.execute_error(
            from,
            0,
            SPELL_ADDRESS,
            b"openPosition",
            open_position_args(&borrow_amount),
            single_payment(ISO_TOKEN, 0, iso_amount),
            error_message,
        );
    }

    pub fn increase_debt(
        &mut self,
        from: &TestAddress,
        position_id: u64,
        borrow_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.execute(
            from,
            position_id,
            SPELL_ADDRESS,
            b"increaseDebt",
            increase_debt_args(borrow_token, &amount),
            no_payment(),
        );
    }

    pub fn increase_debt_error(
        &mut self,
        from: &TestAddress,
        position_id: u64,
        borrow_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.execute_error(
            from,
            position_id,
            SPELL_ADDRESS,
            b"increaseDebt",
            increase_debt_args(borrow_token, &amount),
            no_payment(),
            error_message,
        );
    }

    pub fn close_position(&mut self, from: &TestAddress, position_id: u64) {
        self.execute(
            from,
            position_id,
            SPELL_ADDRESS,
            b"closePosition",
            ManagedArgBuffer::new(),
            no_payment(),
        );
    }

    // Liquidation

    pub fn liquidate(
        &mut self,
        from: &TestAddress,
        position_id: u64,
        debt_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .liquidate(position_id)
            .single_esdt(&debt_token.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn liquidate_error(
        &mut self,
        from: &TestAddress,
        position_id: u64,
        debt_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .liquidate(position_id)
            .single_esdt(&debt_token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Admin

    pub fn set_status(&mut self, status: u8) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .set_status(status)
            .run();
    }

    pub fn set_status_error(&mut self, status: u8, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .set_status(status)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn add_bank_error(
        &mut self,
        bank_token: TestTokenIdentifier,
        soft_vault: ManagedAddress<StaticApi>,
        hard_vault: ManagedAddress<StaticApi>,
        liquidation_threshold_bps: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .add_bank(
                bank_token,
                soft_vault,
                hard_vault,
                BigUint::<StaticApi>::from(liquidation_threshold_bps),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn modify_bank(&mut self, bank_token: TestTokenIdentifier, liquidation_threshold_bps: u64) {
        let bank = self.get_bank(bank_token);
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .modify_bank(
                bank_token,
                bank.soft_vault,
                bank.hard_vault,
                BigUint::<StaticApi>::from(liquidation_threshold_bps),
            )
            .run();
    }

    pub fn modify_bank_vaults(
        &mut self,
        bank_token: TestTokenIdentifier,
        soft_vault: TestSCAddress,
        hard_vault: TestSCAddress,
    ) {
        let bank = self.get_bank(bank_token);
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .modify_bank(
                bank_token,
                soft_vault,
                hard_vault,
                bank.liquidation_threshold_bps.into_raw_units().clone(),
            )
            .run();
    }

    pub fn modify_bank_vaults_error(
        &mut self,
        bank_token: TestTokenIdentifier,
        soft_vault: TestSCAddress,
        hard_vault: TestSCAddress,
        error_message: &[u8],
    ) {
        let bank = self.get_bank(bank_token);
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .modify_bank(
                bank_token,
                soft_vault,
                hard_vault,
                bank.liquidation_threshold_bps.into_raw_units().clone(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn whitelist_tokens_error(
        &mut self,
        tokens: ManagedVec<StaticApi, EgldOrEsdtTokenIdentifier<StaticApi>>,
        statuses: ManagedVec<StaticApi, bool>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .whitelist_tokens(tokens, statuses)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn whitelist_spell(&mut self, spell: TestSCAddress, status: bool) {
        let mut spells = ManagedVec::new();
        spells.push(spell.to_managed_address());
        let mut statuses = ManagedVec::new();
        statuses.push(status);

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .whitelist_spells(spells, statuses)
            .run();
    }

    pub fn accrue(&mut self, bank_token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .accrue(bank_token)
            .run();
    }

    pub fn accrue_all(
        &mut self,
        tokens: &[TestTokenIdentifier],
    ) -> Vec<(EgldOrEsdtTokenIdentifier<StaticApi>, bool)> {
        let mut args = MultiValueEncoded::new();
        for token_id in tokens {
            args.push(token(*token_id));
        }

        let outcome = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .accrue_all(args)
            .returns(ReturnsResult)
            .run();

        outcome
            .into_iter()
            .map(|entry: MultiValue2<_, _>| entry.into_tuple())
            .collect()
    }

    // Views

    pub fn get_position(&mut self, position_id: u64) -> Position<StaticApi> {
        self.world
            .query()
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .positions(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_bank(&mut self, bank_token: TestTokenIdentifier) -> BankConfig<StaticApi> {
        self.world
            .query()
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .banks(bank_token)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_next_position_id(&mut self) -> u64 {
        self.world
            .query()
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .next_position_id()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_execution_context(&mut self) -> Option<ExecutionContext<StaticApi>> {
        self.world
            .query()
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .get_execution_context()
            .returns(ReturnsResult)
            .run()
            .into_option()
    }

    pub fn get_position_debt(&mut self, position_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .get_position_debt(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_debt_value(&mut self, position_id: u64) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .get_debt_value(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_position_value(&mut self, position_id: u64) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .get_position_value(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_isolated_collateral_value(
        &mut self,
        position_id: u64,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .get_isolated_collateral_value(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_position_risk(&mut self, position_id: u64) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .get_position_risk(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_liquidatable(&mut self, position_id: u64) -> bool {
        self.world
            .query()
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .is_liquidatable(position_id)
            .returns(ReturnsResult)
            .run()
    }

    // Fixture

    fn configure_bank(&mut self) {
        let mut tokens = ManagedVec::new();
        let mut statuses = ManagedVec::new();
        for token_id in [ISO_TOKEN, USDC_TOKEN, LPT_TOKEN] {
            tokens.push(token(token_id));
            statuses.push(true);
        }
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .whitelist_tokens(tokens, statuses)
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .add_bank(
                ISO_TOKEN,
                ISO_SOFT_VAULT_ADDRESS,
                ISO_HARD_VAULT_ADDRESS,
                BigUint::<StaticApi>::from(ISO_LIQ_THRESHOLD_BPS),
            )
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .add_bank(
                USDC_TOKEN,
                USDC_SOFT_VAULT_ADDRESS,
                USDC_HARD_VAULT_ADDRESS,
                BigUint::<StaticApi>::from(USDC_LIQ_THRESHOLD_BPS),
            )
            .run();

        self.whitelist_spell(SPELL_ADDRESS, true);

        let mut wrappers = ManagedVec::new();
        wrappers.push(WRAPPER_ADDRESS.to_managed_address());
        let mut statuses = ManagedVec::new();
        statuses.push(true);
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(BANK_ADDRESS)
            .typed(proxy_bank::IsolatedBankProxy)
            .whitelist_wrappers(wrappers, statuses)
            .run();
    }

    fn fund_liquidity(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(USDC_MARKET_ADDRESS)
            .typed(proxy_money_market::MoneyMarketMockProxy)
            .supply()
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &units(10_000))
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ISO_MARKET_ADDRESS)
            .typed(proxy_money_market::MoneyMarketMockProxy)
            .supply()
            .single_esdt(&ISO_TOKEN.to_token_identifier(), 0, &units(10_000))
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(SPELL_ADDRESS)
            .typed(proxy_spell::SpellMockProxy)
            .fund_reserve()
            .single_esdt(&LPT_TOKEN.to_token_identifier(), 0, &units(10_000))
            .run();
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(ISO_TOKEN, units(100_000))
        .esdt_balance(USDC_TOKEN, units(100_000))
        .esdt_balance(LPT_TOKEN, units(100_000));

    world
        .account(BORROWER_ADDRESS)
        .nonce(1)
        .esdt_balance(ISO_TOKEN, units(100))
        .esdt_balance(USDC_TOKEN, units(100));

    world
        .account(LIQUIDATOR_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, units(100))
        .esdt_balance(ISO_TOKEN, units(100));

    world
        .account(STRANGER_ADDRESS)
        .nonce(1)
        .esdt_balance(ISO_TOKEN, units(100))
        .esdt_balance(USDC_TOKEN, units(100));
}

pub fn setup_oracle(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_oracle::OracleMockProxy)
        .init()
        .code(ORACLE_PATH)
        .new_address(ORACLE_ADDRESS)
        .run();
}

pub fn setup_money_markets(world: &mut ScenarioWorld) {
    for (market, market_token) in [
        (ISO_MARKET_ADDRESS, ISO_TOKEN),
        (USDC_MARKET_ADDRESS, USDC_TOKEN),
    ] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_money_market::MoneyMarketMockProxy)
            .init(market_token, BigUint::<StaticApi>::zero())
            .code(MONEY_MARKET_PATH)
            .new_address(market)
            .run();
    }
}

pub fn setup_vaults(world: &mut ScenarioWorld) {
    for (vault, vault_token, market) in [
        (ISO_SOFT_VAULT_ADDRESS, ISO_TOKEN, Some(ISO_MARKET_ADDRESS)),
        (ISO_HARD_VAULT_ADDRESS, ISO_TOKEN, None),
        (USDC_SOFT_VAULT_ADDRESS, USDC_TOKEN, Some(USDC_MARKET_ADDRESS)),
        (USDC_HARD_VAULT_ADDRESS, USDC_TOKEN, None),
    ] {
        let money_market = match market {
            Some(market) => OptionalValue::Some(market.to_managed_address()),
            None => OptionalValue::None,
        };
        world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_vault::VaultMockProxy)
            .init(vault_token, money_market)
            .code(VAULT_PATH)
            .new_address(vault)
            .run();
    }
}

pub fn setup_wrapper(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_wrapper::WrapperMockProxy)
        .init(WLP_TOKEN.to_token_identifier())
        .code(WRAPPER_PATH)
        .new_address(WRAPPER_ADDRESS)
        .run();

    world.set_esdt_local_roles(WRAPPER_ADDRESS.to_managed_address(), WLP_TOKEN.as_bytes(), SFT_ROLES);
}

pub fn setup_bank(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_bank::IsolatedBankProxy)
        .init(ORACLE_ADDRESS, OptionalValue::<u64>::None)
        .code(BANK_PATH)
        .new_address(BANK_ADDRESS)
        .run();
}

pub fn setup_spell(world: &mut ScenarioWorld) {
    for spell in [SPELL_ADDRESS, ROGUE_SPELL_ADDRESS] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_spell::SpellMockProxy)
            .init(BANK_ADDRESS, WRAPPER_ADDRESS, LPT_TOKEN)
            .code(SPELL_PATH)
            .new_address(spell)
            .run();
    }
}
