multiversx_sc::imports!();

use common_constants::{BPS_PRECISION, MAX_RISK, WAD, WAD_PRECISION};
use common_errors::ERROR_INSUFFICIENT_COLLATERAL;
use common_structs::{BankConfig, Position};

use crate::{cache::Cache, oracle, storage};

/// Valuation of positions and the resulting risk ratio.
///
/// All functions are read-only. USD values are WAD scaled; risk and
/// thresholds are BPS scaled decimals where `1.0` is 100%.
///
/// ```text
/// risk = max(0, debt_value - position_value) / isolated_collateral_value
/// ```
///
/// A position without isolated collateral has risk `0` when its value covers
/// the debt and `MAX_RISK` otherwise.
#[multiversx_sc::module]
pub trait RiskModule:
    storage::Storage + oracle::OracleModule + common_math::SharedMathModule
{
    /// Debt of a bank as the money market would report it right now.
    /// Projects the borrow index to the current timestamp without writing.
    fn projected_total_debt(&self, bank: &BankConfig<Self::Api>, cache: &Cache<Self>) -> BigUint {
        let market = bank.money_market.clone();
        let scaled = self
            .market_scaled_debt(market.clone(), &self.blockchain().get_sc_address())
            .get();
        if scaled == 0 {
            return BigUint::zero();
        }

        let mut index = self.market_borrow_index(market.clone()).get();
        let last_accrual = self.market_last_accrual(market.clone()).get();
        if cache.current_timestamp > last_accrual {
            let elapsed = BigUint::from(cache.current_timestamp - last_accrual);
            let growth = &index * &self.market_rate_per_second(market).get() * elapsed
                / BigUint::from(WAD);
            index += growth;
        }

        scaled * index / BigUint::from(WAD)
    }

    /// Debt owed by a position, in raw units of its debt token.
    fn position_debt(&self, position: &Position<Self::Api>, cache: &mut Cache<Self>) -> BigUint {
        match &position.debt_token {
            Some(debt_token) if position.has_debt() => {
                let bank = cache.get_cached_bank(debt_token);
                let total_debt = self.projected_total_debt(&bank, cache);
                self.amount_for_shares(&position.debt_share, &bank.total_share, &total_debt)
            },
            _ => BigUint::zero(),
        }
    }

    fn debt_value(
        &self,
        position: &Position<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let debt_token = match &position.debt_token {
            Some(debt_token) if position.has_debt() => debt_token,
            _ => return self.wad_zero(),
        };

        let amount = self.position_debt(position, cache);
        let feed = self.get_token_price(debt_token, cache);
        self.get_token_usd_value(&amount, feed.asset_decimals, &feed.price)
    }

    /// Value of the wrapper collateral: its underlying plus pending rewards.
    ///
    /// Reward tokens without a usable price abort under the strict policy
    /// and are left out under the best-effort one.
    fn position_value(
        &self,
        position: &Position<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let coll_token = match &position.coll_token {
            Some(coll_token) if position.collateral_size > 0 => coll_token,
            _ => return self.wad_zero(),
        };

        let wrapper = self.wrapper_by_token(coll_token).get();
        let info = self
            .wrapper_collateral_info(wrapper.clone(), position.coll_id)
            .get();
        let feed = self.get_token_price(&info.underlying_token, cache);
        let mut value =
            self.get_token_usd_value(&position.collateral_size, feed.asset_decimals, &feed.price);

        let reward_tokens = self.wrapper_reward_tokens(wrapper.clone()).get();
        for reward_token in reward_tokens.iter() {
            let reward_token: &EgldOrEsdtTokenIdentifier = &reward_token;
            let per_unit = self
                .wrapper_reward_per_unit(wrapper.clone(), reward_token)
                .get();
            let pending = &position.collateral_size * &per_unit / BigUint::from(WAD);
            if pending == 0 {
                continue;
            }

            let reward_feed = if cache.policy.is_strict() {
                self.get_token_price(reward_token, cache)
            } else {
                match self.find_token_price(reward_token, cache) {
                    Some(reward_feed) => reward_feed,
                    None => continue,
                }
            };

            value += self.get_token_usd_value(
                &pending,
                reward_feed.asset_decimals,
                &reward_feed.price,
            );
        }

        value
    }

    /// Value of the lent isolated collateral, converted from vault shares.
    fn isolated_collateral_value(
        &self,
        position: &Position<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let underlying = match &position.underlying_token {
            Some(underlying) if position.underlying_vault_share > 0 => underlying,
            _ => return self.wad_zero(),
        };

        let bank = cache.get_cached_bank(underlying);
        let vault = self.lend_vault(&bank, underlying);
        let total_shares = self.vault_total_shares(vault.clone()).get();
        if total_shares == 0 {
            return self.wad_zero();
        }

        let amount = &position.underlying_vault_share * &self.vault_total_underlying(vault).get()
            / &total_shares;
        let feed = self.get_token_price(underlying, cache);
        self.get_token_usd_value(&amount, feed.asset_decimals, &feed.price)
    }

    fn position_risk(
        &self,
        position: &Position<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let debt_value = self.debt_value(position, cache);
        let position_value = self.position_value(position, cache);

        if debt_value <= position_value {
            return self.bps_zero();
        }

        let isolated_value = self.isolated_collateral_value(position, cache);
        if isolated_value == self.wad_zero() {
            return self.to_decimal_bps(BigUint::from(MAX_RISK));
        }

        let shortfall = debt_value - position_value;
        let ratio = self.div_half_up(&shortfall, &isolated_value, WAD_PRECISION);
        self.rescale_half_up(&ratio, BPS_PRECISION)
    }

    fn is_position_liquidatable(&self, position: &Position<Self::Api>, cache: &mut Cache<Self>) -> bool {
        let debt_token = match &position.debt_token {
            Some(debt_token) if position.has_debt() => debt_token,
            _ => return false,
        };

        let threshold = cache.get_cached_bank(debt_token).liquidation_threshold_bps;
        self.position_risk(position, cache) >= threshold
    }

    /// # Errors
    /// - `ERROR_INSUFFICIENT_COLLATERAL`: If the position's risk reached its debt bank's threshold.
    fn require_solvent(&self, position: &Position<Self::Api>, cache: &mut Cache<Self>) {
        require!(
            !self.is_position_liquidatable(position, cache),
            ERROR_INSUFFICIENT_COLLATERAL
        );
    }

    /// Vault holding lent `token`: the soft vault when it wraps `token`,
    /// otherwise the pass-through vault.
    fn lend_vault(&self, bank: &BankConfig<Self::Api>, token: &EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        let soft_underlying = self.vault_underlying_token(bank.soft_vault.clone());
        if !soft_underlying.is_empty() && soft_underlying.get() == *token {
            bank.soft_vault.clone()
        } else {
            bank.hard_vault.clone()
        }
    }
}
