#![no_std]

use common_constants::{STATUS_BORROW, STATUS_LEND, STATUS_REPAY, STATUS_WITHDRAW_LEND};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Lending market for one borrowable asset.
///
/// Debt is tracked as shares of the pooled `total_debt`, which is reconciled
/// against the money market every time the bank is accrued.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct BankConfig<M: ManagedTypeApi> {
    pub is_listed: bool,
    pub underlying_token: EgldOrEsdtTokenIdentifier<M>,
    pub soft_vault: ManagedAddress<M>,
    pub hard_vault: ManagedAddress<M>,
    pub money_market: ManagedAddress<M>,
    pub liquidation_threshold_bps: ManagedDecimal<M, NumDecimals>,
    pub total_share: BigUint<M>,
    pub total_debt: BigUint<M>,
    pub total_lend: BigUint<M>,
}

/// A leveraged position linking isolated collateral, a wrapper collateral
/// deposit and a debt claim on one bank.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct Position<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub coll_token: Option<TokenIdentifier<M>>,
    pub coll_id: u64,
    pub collateral_size: BigUint<M>,
    pub underlying_token: Option<EgldOrEsdtTokenIdentifier<M>>,
    pub underlying_vault_share: BigUint<M>,
    pub debt_token: Option<EgldOrEsdtTokenIdentifier<M>>,
    pub debt_share: BigUint<M>,
}

impl<M: ManagedTypeApi> Position<M> {
    pub fn new(owner: ManagedAddress<M>) -> Self {
        Position {
            owner,
            coll_token: None,
            coll_id: 0,
            collateral_size: BigUint::zero(),
            underlying_token: None,
            underlying_vault_share: BigUint::zero(),
            debt_token: None,
            debt_share: BigUint::zero(),
        }
    }

    /// Empty positions accept a fresh token pair.
    pub fn is_empty(&self) -> bool {
        self.debt_share == 0 && self.collateral_size == 0
    }

    pub fn has_debt(&self) -> bool {
        self.debt_share > 0
    }

    pub fn is_closed(&self) -> bool {
        self.is_empty() && self.underlying_vault_share == 0
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct ExecutionContext<M: ManagedTypeApi> {
    pub position_id: u64,
    pub spell: ManagedAddress<M>,
}

/// Global switches gating each category of position primitive.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct MarketStatus {
    pub bits: u8,
}

impl MarketStatus {
    pub fn new(bits: u8) -> Self {
        MarketStatus { bits }
    }

    pub fn allow_borrow(&self) -> bool {
        self.bits & STATUS_BORROW != 0
    }

    pub fn allow_repay(&self) -> bool {
        self.bits & STATUS_REPAY != 0
    }

    pub fn allow_lend(&self) -> bool {
        self.bits & STATUS_LEND != 0
    }

    pub fn allow_withdraw_lend(&self) -> bool {
        self.bits & STATUS_WITHDRAW_LEND != 0
    }

    /// True when moving from `self` to `next` switches repayments on.
    pub fn enables_repay(&self, next: &MarketStatus) -> bool {
        !self.allow_repay() && next.allow_repay()
    }
}

/// USD price of one whole token, WAD scaled, as published by the oracle.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub asset_decimals: u8,
    pub timestamp: u64,
}

/// What a wrapper SFT nonce stands for.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct CollateralInfo<M: ManagedTypeApi> {
    pub underlying_token: EgldOrEsdtTokenIdentifier<M>,
    pub pool_id: u64,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct LiquidationRecord<M: ManagedTypeApi> {
    pub debt_token: EgldOrEsdtTokenIdentifier<M>,
    pub repaid_amount: BigUint<M>,
    pub repaid_share: BigUint<M>,
    pub seized_collateral: BigUint<M>,
    pub seized_vault_share: BigUint<M>,
    pub refund: BigUint<M>,
}

/// How the risk engine treats tokens it cannot price.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PricingPolicy {
    /// Every token must resolve; used by state-changing calls.
    Strict,
    /// Reward tokens without a usable price are skipped; used by views.
    BestEffort,
}

impl PricingPolicy {
    pub fn is_strict(&self) -> bool {
        *self == PricingPolicy::Strict
    }
}
