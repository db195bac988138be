//! The error module holds every failure the trader core can surface. All
//! fallible operations return [Result] and nothing is logged-and-dropped.

use crate::models::currency::CurrencyCode;
use thiserror::Error;

/// Everything that can go wrong while building registries or working with
/// amounts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A serialized trader lists its base currency with a rate that differs
    /// from the one in its currency list.
    #[error("the base currency {0} does not match the rate listed for it")]
    BaseRateMismatch(CurrencyCode),
    /// The options passed to a config builder were rejected.
    #[error("error building object: {0}")]
    BuilderFailed(String),
    /// A code was requested that the trader does not carry.
    #[error("the currency code {0} could not be found")]
    CurrencyNotFound(CurrencyCode),
    /// Dividing by an amount whose value is zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The same currency code was given twice when building a trader.
    #[error("the currency code {0} appears more than once")]
    DuplicateCurrency(CurrencyCode),
    /// A trader was built from an empty list of currencies.
    #[error("a trader needs at least one currency")]
    EmptyCurrencyList,
    /// Two amounts were combined whose traders carry different rate tables.
    #[error("the traders of both amounts are not the same")]
    IncompatibleRegistry,
    /// The code failed validation against the reference table.
    #[error("currency `{0}' does not exist")]
    InvalidCurrencyCode(String),
    /// A result did not fit the decimal (or integer) range.
    #[error("arithmetic overflow")]
    Overflow,
    /// Malformed numeric input.
    #[error("could not parse amount: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
