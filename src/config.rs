//! The config module holds the knobs a [Trader][trader] is built with: how
//! strictly currency codes are validated, which path conversions take, and
//! whether amounts minted by different traders may be combined.
//!
//! Every knob has a default, so `Config::default()` is a complete
//! configuration.
//!
//! [trader]: ../models/trader/struct.Trader.html

use crate::{
    error::Error,
    models::reference::{Iso4217, ReferenceTable},
};
use derive_builder::Builder;
use getset::{CopyGetters, Getters};
use serde_derive::{Serialize, Deserialize};
use std::sync::Arc;

/// How currency codes are checked when a `Currency` is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeValidation {
    /// The code must be known to the reference table.
    Strict,
    /// Any non-empty code is accepted.
    Permissive,
}

impl Default for CodeValidation {
    fn default() -> Self {
        CodeValidation::Strict
    }
}

/// The path an amount takes when converted into another currency. Both are
/// mathematically equivalent and only differ in the intermediate rounding of
/// the decimal operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionStrategy {
    /// Multiply by the rate from the current currency to the target.
    Direct,
    /// Divide into the base currency, then multiply by the target's rate.
    ViaBase,
}

impl Default for ConversionStrategy {
    fn default() -> Self {
        ConversionStrategy::Direct
    }
}

/// Decides whether `add`, `sub`, `mul`, and `div` accept an operand minted by
/// a different trader. Comparison is always strict regardless of this policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryPolicy {
    /// The right operand is converted through its own trader into the left
    /// operand's currency. Fails only if that currency is missing there.
    Permissive,
    /// Both traders must be equivalent (see `Trader::is`), otherwise the
    /// operation fails with `IncompatibleRegistry`.
    Strict,
}

impl Default for RegistryPolicy {
    fn default() -> Self {
        RegistryPolicy::Permissive
    }
}

/// Trader configuration.
#[derive(Clone, Debug, Getters, CopyGetters, Builder)]
#[builder(pattern = "owned", setter(into), build_fn(error = "Error"))]
pub struct Config {
    /// How codes are validated when currencies are built against this config
    #[builder(default)]
    #[getset(get_copy = "pub")]
    validation: CodeValidation,
    /// Which conversion path amounts take
    #[builder(default)]
    #[getset(get_copy = "pub")]
    conversion: ConversionStrategy,
    /// Whether binary operations accept operands from other traders
    #[builder(default)]
    #[getset(get_copy = "pub")]
    policy: RegistryPolicy,
    /// The reference table used for validation and decimal places
    #[builder(setter(custom), default = "Arc::new(Iso4217) as Arc<dyn ReferenceTable>")]
    #[getset(get = "pub")]
    reference: Arc<dyn ReferenceTable>,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl ConfigBuilder {
    /// Swap out the reference table (the built-in ISO 4217 table by default).
    pub fn reference<T: ReferenceTable + 'static>(mut self, table: T) -> Self {
        self.reference = Some(Arc::new(table));
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validation: CodeValidation::default(),
            conversion: ConversionStrategy::default(),
            policy: RegistryPolicy::default(),
            reference: Arc::new(Iso4217),
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Error::BuilderFailed(err.to_string())
    }
}
