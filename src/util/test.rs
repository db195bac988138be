//! Fixtures shared by the test modules.

use crate::{
    config::Config,
    models::{
        currency::Currency,
        trader::Trader,
    },
};
use rust_decimal::prelude::*;
use std::sync::Arc;

pub(crate) fn make_currency(code: &str, rate: Decimal) -> Currency {
    Currency::new(code, rate).unwrap()
}

/// USD (base, 1) and EUR (0.8)
pub(crate) fn make_currencies() -> Vec<Currency> {
    vec![
        make_currency("usd", num!(1)),
        make_currency("eur", num!(0.8)),
    ]
}

pub(crate) fn make_trader() -> Trader {
    Trader::new(make_currencies(), "usd").unwrap()
}

pub(crate) fn make_shared_trader() -> Arc<Trader> {
    make_trader().into_shared()
}

/// A trader whose rates disagree with `make_trader` (EUR at 0.5) and which
/// also carries GBP.
pub(crate) fn make_other_trader() -> Arc<Trader> {
    let currencies = vec![
        make_currency("usd", num!(1)),
        make_currency("eur", num!(0.5)),
        make_currency("gbp", num!(0.7)),
    ];
    Trader::new(currencies, "usd").unwrap().into_shared()
}

fn world_currencies() -> Vec<Currency> {
    vec![
        make_currency("usd", num!(1)),
        make_currency("eur", num!(0.8)),
        make_currency("jpy", num!(110)),
        make_currency("bhd", num!(0.376)),
        make_currency("gbp", num!(0.75)),
    ]
}

/// USD-based trader with zero- and three-decimal currencies on board.
pub(crate) fn make_world_trader() -> Arc<Trader> {
    make_world_trader_with(Config::default())
}

pub(crate) fn make_world_trader_with(config: Config) -> Arc<Trader> {
    Trader::with_config(world_currencies(), "usd", config).unwrap().into_shared()
}
