//! The currency module holds currency codes and the `Currency` model, which
//! pairs a code with its exchange rate relative to a [Trader's][trader] base
//! currency.
//!
//! Codes are case-insensitive: they are normalized to uppercase when created
//! and compared in that form.
//!
//! [trader]: ../trader/struct.Trader.html

use crate::{
    config::{CodeValidation, Config},
    error::{Error, Result},
    models::reference::{CurrencyInformation, Iso4217, ReferenceTable},
};
use getset::Getters;
use rust_decimal::prelude::*;
use serde_derive::{Serialize, Deserialize};
use std::{
    convert::TryFrom,
    fmt,
};

/// A currency code, normally one of ISO 4217. Always stored in uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new<T: Into<String>>(code: T) -> Self {
        Self(code.into().to_uppercase())
    }

    /// Return a string ref for this code
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns whether the code is known to the given reference table.
    pub fn verify(&self, table: &dyn ReferenceTable) -> bool {
        table.verify(self.as_str())
    }

    /// Look up this code in the given reference table.
    pub fn information(&self, table: &dyn ReferenceTable) -> Option<CurrencyInformation> {
        table.information(self.as_str())
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<&CurrencyCode> for CurrencyCode {
    fn from(code: &CurrencyCode) -> Self {
        code.clone()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        let CurrencyCode(val) = code;
        val
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.to_uppercase()
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A currency and its value relative to the base currency of the trader it
/// belongs to. With a base of USD, EUR at 0.8 means one US dollar buys 0.8
/// euros.
#[derive(Clone, Debug, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "CurrencyData", into = "CurrencyData")]
#[getset(get = "pub")]
pub struct Currency {
    /// The (uppercase) code of the currency
    code: CurrencyCode,
    /// The value of the currency, relative to the base currency
    rate: Decimal,
}

impl Currency {
    /// Create a new `Currency`, returning an error if the code is not part of
    /// ISO 4217.
    pub fn new<T: Into<CurrencyCode>>(code: T, rate: Decimal) -> Result<Self> {
        Self::validated(code.into(), rate, CodeValidation::Strict, &Iso4217)
    }

    /// Create a new `Currency`, validating its code the way the given config
    /// asks for.
    pub fn with_config<T: Into<CurrencyCode>>(code: T, rate: Decimal, config: &Config) -> Result<Self> {
        Self::validated(code.into(), rate, config.validation(), config.reference().as_ref())
    }

    fn validated(code: CurrencyCode, rate: Decimal, validation: CodeValidation, table: &dyn ReferenceTable) -> Result<Self> {
        let valid = match validation {
            CodeValidation::Strict => code.verify(table),
            CodeValidation::Permissive => !code.is_empty(),
        };
        if !valid {
            Err(Error::InvalidCurrencyCode(code.to_string()))?;
        }
        Ok(Self { code, rate })
    }

    /// Returns true if the given code is the code of this currency.
    pub fn is<T: Into<CurrencyCode>>(&self, code: T) -> bool {
        self.code == code.into()
    }

    /// Build a copy of this currency carrying a new rate.
    pub fn with_rate(&self, rate: Decimal) -> Self {
        Self { code: self.code.clone(), rate }
    }

    /// The number of decimal places this currency has (USD has 2 for $12.25,
    /// JPY has 0 for ¥5412), without consulting any reference table.
    pub fn decimal_places(&self) -> i32 {
        // only the currencies that don't have 2 decimal places are listed
        match self.code.as_str() {
            "BIF" | "BYR" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" |
            "XPF" | "XOF" | "XAF" | "VUV" | "VND" | "UYI" | "UGX" | "RWF" | "PYG" => 0,
            "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "TND" | "OMR" => 3,
            "CLF" => 4,
            _ => 2,
        }
    }

    /// The number of decimal places according to the given table, falling
    /// back to [decimal_places](#method.decimal_places) for codes the table
    /// does not know. May be -1 for non-decimal units.
    pub fn decimal_places_in(&self, table: &dyn ReferenceTable) -> i32 {
        match self.code.information(table) {
            Some(info) => i32::from(info.decimal_places()),
            None => self.decimal_places(),
        }
    }

    /// The scale of this currency's minor unit (cents for USD). Non-decimal
    /// units have no canonical scale, so they use the fallback rule.
    pub fn minor_unit_scale_in(&self, table: &dyn ReferenceTable) -> u32 {
        match self.decimal_places_in(table) {
            places if places >= 0 => places as u32,
            _ => self.decimal_places().max(0) as u32,
        }
    }

    /// What the ISO 4217 table knows about this currency.
    pub fn information(&self) -> Option<CurrencyInformation> {
        self.code.information(&Iso4217)
    }

    /// The ISO 4217 display name, empty when the code is not in the table.
    pub fn full_name(&self) -> &'static str {
        self.information().map(|info| info.full_name()).unwrap_or("")
    }
}

/// The serialized shape of a currency. Deserialized codes are held to the
/// ISO 4217 table like any other `Currency::new`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CurrencyData {
    code: CurrencyCode,
    rate: Decimal,
}

impl TryFrom<CurrencyData> for Currency {
    type Error = Error;

    fn try_from(data: CurrencyData) -> Result<Self> {
        Self::new(data.code, data.rate)
    }
}

impl From<Currency> for CurrencyData {
    fn from(currency: Currency) -> Self {
        Self {
            code: currency.code,
            rate: currency.rate,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
