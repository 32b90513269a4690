#![allow(dead_code)]

use common_constants::DEFAULT_MAX_PRICE_AGE;
use multiversx_sc::types::{TestAddress, TestSCAddress, TestTokenIdentifier};
use multiversx_sc_scenario::imports::MxscPath;

pub const TOKEN_DECIMALS: usize = 18;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const START_TIMESTAMP: u64 = 1_000;

pub const REPAY_WARM_UP: u64 = 14_400;
pub const MAX_PRICE_AGE: u64 = DEFAULT_MAX_PRICE_AGE;
pub const USDC_LIQ_THRESHOLD_BPS: u64 = 8_500;
pub const ISO_LIQ_THRESHOLD_BPS: u64 = 9_000;
pub const POOL_ID: u64 = 7;

// Prices in whole dollars, WAD scaled by the helpers
pub const ISO_PRICE_IN_DOLLARS: u64 = 5;
pub const USDC_PRICE_IN_DOLLARS: u64 = 1;
pub const LPT_PRICE_IN_DOLLARS: u64 = 1;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const STRANGER_ADDRESS: TestAddress = TestAddress::new("stranger");

pub const BANK_ADDRESS: TestSCAddress = TestSCAddress::new("bank");
pub const ORACLE_ADDRESS: TestSCAddress = TestSCAddress::new("oracle");
pub const ISO_MARKET_ADDRESS: TestSCAddress = TestSCAddress::new("iso-market");
pub const USDC_MARKET_ADDRESS: TestSCAddress = TestSCAddress::new("usdc-market");
pub const ISO_SOFT_VAULT_ADDRESS: TestSCAddress = TestSCAddress::new("iso-soft-vault");
pub const ISO_HARD_VAULT_ADDRESS: TestSCAddress = TestSCAddress::new("iso-hard-vault");
pub const USDC_SOFT_VAULT_ADDRESS: TestSCAddress = TestSCAddress::new("usdc-soft-vault");
pub const USDC_HARD_VAULT_ADDRESS: TestSCAddress = TestSCAddress::new("usdc-hard-vault");
pub const WRAPPER_ADDRESS: TestSCAddress = TestSCAddress::new("wrapper");
pub const SPELL_ADDRESS: TestSCAddress = TestSCAddress::new("spell");
pub const ROGUE_SPELL_ADDRESS: TestSCAddress = TestSCAddress::new("rogue-spell");

pub const ISO_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("ISO-abcdef");
pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const LPT_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("LPT-abcdef");
pub const WLP_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WLP-abcdef");
pub const REWARD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("RWD-abcdef");

pub const BANK_PATH: MxscPath = MxscPath::new("output/isolated-bank.mxsc.json");
pub const ORACLE_PATH: MxscPath = MxscPath::new("../oracle_mock/output/oracle-mock.mxsc.json");
pub const VAULT_PATH: MxscPath = MxscPath::new("../vault_mock/output/vault-mock.mxsc.json");
pub const MONEY_MARKET_PATH: MxscPath =
    MxscPath::new("../money_market_mock/output/money-market-mock.mxsc.json");
pub const WRAPPER_PATH: MxscPath = MxscPath::new("../wrapper_mock/output/wrapper-mock.mxsc.json");
pub const SPELL_PATH: MxscPath = MxscPath::new("../spell_mock/output/spell-mock.mxsc.json");
