//! The trader module holds the `Trader`, the registry of currencies and rates
//! that every [Amount][amount] is minted from and converted through.
//!
//! A trader is an ordered list of distinct currencies plus a designated base
//! currency that all rates are expressed against. Amounts keep a shared
//! handle (`Arc<Trader>`) to the trader that minted them, so once a trader is
//! shared, changing it goes through `Arc::make_mut` (copy-on-write) or
//! [with_base_currency](struct.Trader.html#method.with_base_currency), and
//! existing amounts keep the rates they were minted with until they are
//! explicitly [rebound][rebind].
//!
//! [amount]: ../amount/struct.Amount.html
//! [rebind]: ../amount/struct.Amount.html#method.rebind

use crate::{
    config::Config,
    error::{Error, Result},
    models::{
        amount::Amount,
        currency::{Currency, CurrencyCode},
    },
};
use getset::Getters;
use rust_decimal::prelude::*;
use serde_derive::{Serialize, Deserialize};
use std::{
    collections::HashSet,
    convert::TryFrom,
    sync::Arc,
};
use tracing::debug;

/// The serialized shape of a trader. The config is runtime wiring and is not
/// part of it.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TraderData {
    currencies: Vec<Currency>,
    base_currency: Currency,
}

/// Holds the currencies (and their rates) used to handle amount conversions.
#[derive(Clone, Debug, Getters, Serialize, Deserialize)]
#[serde(try_from = "TraderData", into = "TraderData")]
pub struct Trader {
    /// The currencies this trader can convert between, in insertion order
    #[getset(get = "pub")]
    currencies: Vec<Currency>,
    /// Index of the base currency within `currencies`
    base: usize,
    /// How this trader validates, converts, and combines
    #[getset(get = "pub")]
    config: Config,
}

impl Trader {
    /// Create a new trader with the default config, setting the base currency
    /// to the given code. The code must be one of the given currencies.
    pub fn new<T: Into<CurrencyCode>>(currencies: Vec<Currency>, base: T) -> Result<Self> {
        Self::with_config(currencies, base, Config::default())
    }

    /// Create a new trader with the given config.
    pub fn with_config<T: Into<CurrencyCode>>(currencies: Vec<Currency>, base: T, config: Config) -> Result<Self> {
        if currencies.is_empty() {
            Err(Error::EmptyCurrencyList)?;
        }
        {
            let mut seen = HashSet::with_capacity(currencies.len());
            for currency in &currencies {
                if !seen.insert(currency.code()) {
                    Err(Error::DuplicateCurrency(currency.code().clone()))?;
                }
            }
        }
        let base = base.into();
        let idx = currencies.iter()
            .position(|c| c.is(&base))
            .ok_or_else(|| Error::CurrencyNotFound(base.clone()))?;
        debug!(base = %base, currencies = currencies.len(), "trader created");
        Ok(Self {
            currencies,
            base: idx,
            config,
        })
    }

    /// Wrap this trader in the shared handle amounts are minted from.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// The currency all rates are expressed against.
    pub fn base_currency(&self) -> &Currency {
        &self.currencies[self.base]
    }

    fn position(&self, code: &CurrencyCode) -> Option<usize> {
        self.currencies.iter().position(|c| c.is(code))
    }

    /// Find a currency from the given code, or return `CurrencyNotFound`.
    pub fn find<T: Into<CurrencyCode>>(&self, code: T) -> Result<&Currency> {
        let code = code.into();
        match self.position(&code) {
            Some(idx) => Ok(&self.currencies[idx]),
            None => Err(Error::CurrencyNotFound(code)),
        }
    }

    /// Returns whether this trader carries the given currency.
    pub fn contains<T: Into<CurrencyCode>>(&self, code: T) -> bool {
        self.position(&code.into()).is_some()
    }

    /// Set the base currency from the given code. If the code is not one of
    /// the trader's currencies, an error is returned and nothing changes.
    pub fn set_base_currency<T: Into<CurrencyCode>>(&mut self, code: T) -> Result<()> {
        let code = code.into();
        let idx = self.position(&code).ok_or_else(|| Error::CurrencyNotFound(code.clone()))?;
        debug!(from = %self.base_currency().code(), to = %code, "base currency changed");
        self.base = idx;
        Ok(())
    }

    /// Like [set_base_currency](#method.set_base_currency) but leaves this
    /// trader alone and returns the updated copy.
    pub fn with_base_currency<T: Into<CurrencyCode>>(&self, code: T) -> Result<Self> {
        let mut trader = self.clone();
        trader.set_base_currency(code)?;
        Ok(trader)
    }

    /// Returns true if both traders hold the same rate table: same base
    /// currency (code and rate), same number of currencies, and every one of
    /// our currencies found in `other` with an equal rate.
    pub fn is(&self, other: &Trader) -> bool {
        let base = self.base_currency();
        let other_base = other.base_currency();
        if base.code() != other_base.code() || base.rate() != other_base.rate() {
            return false;
        }
        if self.currencies.len() != other.currencies.len() {
            return false;
        }
        self.currencies.iter().all(|currency| {
            match other.find(currency.code()) {
                Ok(found) => found.rate() == currency.rate(),
                Err(_) => false,
            }
        })
    }

    /// Create a new amount from a decimal and a currency code.
    pub fn new_amount<T: Into<CurrencyCode>>(self: &Arc<Self>, value: Decimal, code: T) -> Result<Amount> {
        let currency = self.find(code)?.clone();
        Ok(Amount::mint(self.clone(), value, currency))
    }

    /// Create a new amount from a float and a currency code. The float is
    /// rounded to the closest decimal representation (4.2 stays 4.2).
    pub fn new_amount_from_float<T: Into<CurrencyCode>>(self: &Arc<Self>, value: f64, code: T) -> Result<Amount> {
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| Error::ParseError(format!("{} is not representable as a decimal", value)))?;
        self.new_amount(decimal, code)
    }

    /// Create a new amount from a string and a currency code. Returns an error
    /// if the string could not be parsed.
    pub fn new_amount_from_str<T: Into<CurrencyCode>>(self: &Arc<Self>, value: &str, code: T) -> Result<Amount> {
        let trimmed = value.trim();
        let decimal = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| Error::ParseError(format!("{:?}: {}", value, e)))?;
        self.new_amount(decimal, code)
    }

    /// Create a new amount from a count of the currency's minor units (USD:
    /// 1023 -> 10.23). The inverse of `Amount::to_minor_units`.
    pub fn new_amount_from_minor_units<T: Into<CurrencyCode>>(self: &Arc<Self>, units: i64, code: T) -> Result<Amount> {
        let currency = self.find(code)?.clone();
        let scale = currency.minor_unit_scale_in(self.config.reference().as_ref());
        let value = Decimal::try_new(units, scale).map_err(|_| Error::Overflow)?;
        Ok(Amount::mint(self.clone(), value, currency))
    }
}

impl TryFrom<TraderData> for Trader {
    type Error = Error;

    fn try_from(data: TraderData) -> Result<Self> {
        let TraderData { currencies, base_currency } = data;
        let trader = Self::new(currencies, base_currency.code())?;
        if trader.base_currency().rate() != base_currency.rate() {
            Err(Error::BaseRateMismatch(base_currency.code().clone()))?;
        }
        Ok(trader)
    }
}

impl From<Trader> for TraderData {
    fn from(trader: Trader) -> Self {
        let base_currency = trader.base_currency().clone();
        Self {
            currencies: trader.currencies,
            base_currency,
        }
    }
}
