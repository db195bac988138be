//! Currency registries, exchange rates, and exact decimal arithmetic on
//! monetary amounts.
//!
//! Working with the core goes like this:
//!
//! ```
//! use currency_trader::{Currency, Trader};
//! use rust_decimal_macros::dec;
//!
//! // first define the currencies we support. USD will be our base currency,
//! // and a dollar buys 0.8 euros.
//! let currencies = vec![
//!     Currency::new("USD", dec!(1)).unwrap(),
//!     Currency::new("eur", dec!(0.8)).unwrap(),
//! ];
//!
//! // create the trader, setting its base currency to the US dollar
//! let trader = Trader::new(currencies, "usd").unwrap().into_shared();
//!
//! // now that we have a trader we can create amounts
//! let amount = trader.new_amount_from_str("42.42", "USD").unwrap();
//!
//! // ...convert them
//! let amount_eur = amount.to_currency("EUR").unwrap();
//! assert_eq!(amount_eur.format(3), "33.936");
//!
//! // ...and combine amounts in different currencies:
//! // USD(42.42) + EUR(33.936) == USD(42.42) + USD(42.42) == USD(84.84)
//! let total = amount.add(&amount_eur).unwrap();
//! assert_eq!(total.format(2), "84.84");
//! ```
//!
//! Rates live in the [Trader], which amounts hold a shared handle to. See the
//! [config] module for the validation, conversion, and cross-trader policies.

#[macro_use]
mod util;
pub mod config;
pub mod error;
pub mod models;

pub use crate::{
    config::{CodeValidation, Config, ConfigBuilder, ConversionStrategy, RegistryPolicy},
    error::{Error, Result},
    models::{
        amount::{Amount, DIVISION_PRECISION},
        currency::{Currency, CurrencyCode},
        reference::{CurrencyInformation, Iso4217, ReferenceTable},
        trader::Trader,
    },
};
pub use rust_decimal::Decimal;
