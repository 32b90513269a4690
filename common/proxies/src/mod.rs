#![no_std]

pub mod proxy_bank;
pub mod proxy_money_market;
pub mod proxy_oracle;
pub mod proxy_spell;
pub mod proxy_vault;
pub mod proxy_wrapper;
