//! The amount module is the arithmetic and conversion engine: an `Amount` is
//! a decimal value tagged with a currency and a handle to the
//! [Trader][trader] that minted it.
//!
//! Amounts can only be minted through a trader, and every operation returns
//! a new amount. Conversions and binary operations resolve rates through the
//! trader of the amount they are called on:
//!
//! ```
//! use currency_trader::{Currency, Trader};
//! use rust_decimal_macros::dec;
//!
//! let usd = Currency::new("usd", dec!(1)).unwrap();
//! let eur = Currency::new("eur", dec!(0.8)).unwrap();
//! let trader = Trader::new(vec![usd, eur], "usd").unwrap().into_shared();
//!
//! let amount = trader.new_amount(dec!(42.42), "usd").unwrap();
//! let in_eur = amount.to_currency("eur").unwrap();
//! assert_eq!(in_eur.value(), &dec!(33.936));
//!
//! // USD(42.42) + EUR(33.936) == USD(42.42) + USD(42.42)
//! let sum = amount.add(&in_eur).unwrap();
//! assert_eq!(sum.format(2), "84.84");
//! ```
//!
//! Which operands `add`, `sub`, `mul`, and `div` accept is decided by the
//! [RegistryPolicy] of the left operand's trader. Comparison always requires
//! both traders to be equivalent.
//!
//! [trader]: ../trader/struct.Trader.html
//! [RegistryPolicy]: ../../config/enum.RegistryPolicy.html

use crate::{
    config::{ConversionStrategy, RegistryPolicy},
    error::{Error, Result},
    models::{
        currency::{Currency, CurrencyCode},
        trader::Trader,
    },
};
use getset::Getters;
use rust_decimal::prelude::*;
use serde_derive::Serialize;
use std::{
    cmp::Ordering,
    fmt,
    sync::Arc,
};
use tracing::trace;

/// The number of fractional digits kept by [Amount::div]. Division is not
/// exact: quotients are rounded (half away from zero) to this many digits.
pub const DIVISION_PRECISION: u32 = 16;

fn checked_mul(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_mul(rhs).ok_or(Error::Overflow)
}

fn checked_div(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    if rhs.is_zero() {
        Err(Error::DivisionByZero)?;
    }
    lhs.checked_div(rhs).ok_or(Error::Overflow)
}

/// An amount in a given currency.
///
/// Equality compares value and currency; which trader an amount is bound to
/// is not part of it.
#[derive(Clone, Debug, Getters, Serialize)]
#[getset(get = "pub")]
pub struct Amount {
    /// The trader this amount was minted from
    #[serde(skip_serializing)]
    trader: Arc<Trader>,
    /// The amount's value, in `currency`
    value: Decimal,
    /// The currency of the amount, as the trader knew it at mint time
    currency: Currency,
}

impl Amount {
    /// Only traders mint amounts, so the currency is always one of theirs.
    pub(crate) fn mint(trader: Arc<Trader>, value: Decimal, currency: Currency) -> Self {
        Self {
            trader,
            value,
            currency,
        }
    }

    fn with_value(&self, value: Decimal) -> Self {
        Self::mint(self.trader.clone(), value, self.currency.clone())
    }

    /// The rate that converts this amount into the given currency. Errors if
    /// the code is not one of the trader's currencies.
    pub fn rate_to<T: Into<CurrencyCode>>(&self, code: T) -> Result<Decimal> {
        let target = self.trader.find(code)?;
        checked_div(*target.rate(), *self.currency.rate())
    }

    /// This amount's value expressed in the trader's base currency, which is
    /// `value / rate` even for amounts already in the base currency.
    pub fn base_currency_value(&self) -> Result<Decimal> {
        checked_div(self.value, *self.currency.rate())
    }

    /// This amount converted into the trader's base currency.
    pub fn base_currency_amount(&self) -> Result<Amount> {
        let base = self.trader.base_currency().code().clone();
        self.to_currency(base)
    }

    /// Convert the amount into the given currency. If the amount is already
    /// in that currency, it is returned as is.
    pub fn to_currency<T: Into<CurrencyCode>>(&self, code: T) -> Result<Amount> {
        let code = code.into();
        if self.currency.is(&code) {
            return Ok(self.clone());
        }
        let target = self.trader.find(&code)?.clone();
        let value = match self.trader.config().conversion() {
            ConversionStrategy::Direct => checked_mul(self.value, self.rate_to(&code)?)?,
            ConversionStrategy::ViaBase => {
                let base_value = self.base_currency_value()?;
                if self.trader.base_currency().is(&code) {
                    base_value
                } else {
                    checked_mul(base_value, *target.rate())?
                }
            }
        };
        trace!(from = %self.currency, to = %code, %value, "converted amount");
        Ok(Self::mint(self.trader.clone(), value, target))
    }

    /// Move this amount onto another trader, picking up that trader's rate
    /// for the amount's currency. The value is not converted.
    pub fn rebind(&self, trader: &Arc<Trader>) -> Result<Amount> {
        trader.new_amount(self.value, self.currency.code())
    }

    /// Bring `other` into our currency, honoring our trader's policy.
    fn counterpart(&self, other: &Amount) -> Result<Amount> {
        if self.trader.config().policy() == RegistryPolicy::Strict && !self.same_trader(other) {
            Err(Error::IncompatibleRegistry)?;
        }
        other.to_currency(self.currency.code())
    }

    fn same_trader(&self, other: &Amount) -> bool {
        Arc::ptr_eq(&self.trader, &other.trader) || self.trader.is(&other.trader)
    }

    fn combine<F>(&self, other: &Amount, op: &str, apply: F) -> Result<Amount>
        where F: FnOnce(Decimal, Decimal) -> Result<Decimal>
    {
        let converted = self.counterpart(other)?;
        let value = apply(self.value, converted.value)?;
        trace!(op, lhs = %self, rhs = %other, %value, "combined amounts");
        Ok(self.with_value(value))
    }

    /// Returns a new amount holding the sum of `self` and `other`. The result
    /// is in our currency and bound to our trader.
    pub fn add(&self, other: &Amount) -> Result<Amount> {
        self.combine(other, "add", |a, b| a.checked_add(b).ok_or(Error::Overflow))
    }

    /// Returns a new amount holding `self` minus `other`. The result is in
    /// our currency and bound to our trader.
    pub fn sub(&self, other: &Amount) -> Result<Amount> {
        self.combine(other, "sub", |a, b| a.checked_sub(b).ok_or(Error::Overflow))
    }

    /// Returns a new amount holding `self` times `other` (converted into our
    /// currency first).
    pub fn mul(&self, other: &Amount) -> Result<Amount> {
        self.combine(other, "mul", checked_mul)
    }

    /// Returns a new amount holding `self` divided by `other` (converted into
    /// our currency first).
    ///
    /// Division is lossy: the quotient keeps at most
    /// [DIVISION_PRECISION](constant.DIVISION_PRECISION.html) fractional
    /// digits, so 10 / 3 is 3.3333333333333333.
    pub fn div(&self, other: &Amount) -> Result<Amount> {
        self.combine(other, "div", |a, b| {
            let quotient = checked_div(a, b)?;
            Ok(quotient.round_dp_with_strategy(DIVISION_PRECISION, RoundingStrategy::MidpointAwayFromZero))
        })
    }

    /// Compare `self` and `other`, converting `other` into our currency
    /// first. Comparing amounts from traders with different rate tables is
    /// meaningless, so it fails with `IncompatibleRegistry`.
    pub fn cmp(&self, other: &Amount) -> Result<Ordering> {
        if !self.same_trader(other) {
            Err(Error::IncompatibleRegistry)?;
        }
        let converted = other.to_currency(self.currency.code())?;
        Ok(self.value.cmp(&converted.value))
    }

    /// Flip the sign of the amount.
    pub fn neg(&self) -> Amount {
        self.with_value(-self.value)
    }

    pub fn abs(&self) -> Amount {
        self.with_value(self.value.abs())
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Translate the amount into an integer count of the currency's minor
    /// units (USD: 10.23 -> 1023, JPY: 1023 -> 1023, BHD: 1.023 -> 1023).
    /// Anything past the minor unit is truncated toward zero.
    pub fn to_minor_units(&self) -> Result<i64> {
        let scale = self.currency.minor_unit_scale_in(self.trader.config().reference().as_ref());
        let mut scaled = self.value;
        for _ in 0..scale {
            scaled = checked_mul(scaled, Decimal::TEN)?;
        }
        scaled.trunc().to_i64().ok_or(Error::Overflow)
    }

    /// The amount's value with exactly the given number of decimals, rounded
    /// half away from zero or padded with zeros. This ignores the currency's
    /// own decimal places.
    pub fn format(&self, decimals: u32) -> String {
        let rounded = self.value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.*}", decimals as usize, rounded)
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.currency == other.currency
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        util::test::*,
    };

    #[test]
    fn rate_to() {
        let trader = make_shared_trader();
        let usd = trader.new_amount(num!(1), "usd").unwrap();
        let eur = trader.new_amount(num!(1), "eur").unwrap();
        assert_eq!(usd.rate_to("eur").unwrap(), num!(0.8));
        assert_eq!(eur.rate_to("usd").unwrap(), num!(1.25));
        assert_eq!(usd.rate_to("usd").unwrap(), num!(1));
        assert_eq!(usd.rate_to("bad"), Err(Error::CurrencyNotFound("BAD".into())));
    }

    #[test]
    fn base_currency_value() {
        let trader = make_shared_trader();
        let usd = trader.new_amount(num!(1), "usd").unwrap();
        assert_eq!(usd.base_currency_value().unwrap(), num!(1));
        let eur = trader.new_amount(num!(1), "eur").unwrap();
        assert_eq!(eur.base_currency_value().unwrap(), num!(1.25));
    }

    #[test]
    fn base_currency_value_divides_by_base_rate() {
        let currencies = vec![
            make_currency("usd", num!(2)),
            make_currency("eur", num!(1.6)),
        ];
        let trader = Trader::new(currencies, "usd").unwrap().into_shared();
        let usd = trader.new_amount(num!(10), "usd").unwrap();
        let eur = trader.new_amount(num!(16), "eur").unwrap();
        assert_eq!(usd.base_currency_value().unwrap(), num!(5));
        assert_eq!(eur.base_currency_value().unwrap(), num!(10));

        // EUR(16) is USD(20), which has the same base value as EUR(16)
        let converted = eur.to_currency("usd").unwrap();
        assert_eq!(converted.value(), &num!(20));
        assert_eq!(converted.base_currency_value().unwrap(), eur.base_currency_value().unwrap());
    }

    #[test]
    fn base_currency_amount() {
        let trader = make_shared_trader();
        let usd = trader.new_amount(num!(1), "usd").unwrap();
        assert_eq!(usd.base_currency_amount().unwrap(), usd);

        let eur = trader.new_amount(num!(1), "eur").unwrap();
        let base = eur.base_currency_amount().unwrap();
        assert_ne!(base, eur);
        assert_eq!(base.value(), &num!(1.25));
        assert_eq!(base.currency().code().as_str(), "USD");
    }

    #[test]
    fn to_currency() {
        let trader = make_shared_trader();
        let usd = trader.new_amount(num!(1), "usd").unwrap();
        assert_eq!(usd.to_currency("bad").unwrap_err(), Error::CurrencyNotFound("BAD".into()));

        let eur = usd.to_currency("eur").unwrap();
        assert_eq!(eur.value(), &num!(0.8));
        assert_eq!(eur.currency().code().as_str(), "EUR");
        assert!(Arc::ptr_eq(eur.trader(), &trader));

        let back = eur.to_currency("usd").unwrap();
        assert_eq!(back.value(), &num!(1));
        assert_eq!(back.currency().code().as_str(), "USD");

        let same = usd.to_currency("USD").unwrap();
        assert_eq!(same, usd);
    }

    #[test]
    fn to_currency_via_base() {
        let config = Config::builder().conversion(ConversionStrategy::ViaBase).build().unwrap();
        let trader = make_world_trader_with(config);
        let usd = trader.new_amount(num!(1), "usd").unwrap();
        let eur = usd.to_currency("eur").unwrap();
        assert_eq!(eur.value(), &num!(0.8));
        let back = eur.to_currency("usd").unwrap();
        assert_eq!(back.value(), &num!(1));

        // EUR -> JPY goes EUR -> USD -> JPY
        let jpy = eur.to_currency("jpy").unwrap();
        assert_eq!(jpy.value(), &num!(110));
        let direct = make_world_trader().new_amount(num!(0.8), "eur").unwrap().to_currency("jpy").unwrap();
        assert_eq!(jpy.value(), direct.value());
    }

    #[test]
    fn rebind() {
        let trader = make_shared_trader();
        let eur = trader.new_amount(num!(2), "eur").unwrap();

        let updated = vec![
            make_currency("usd", num!(1)),
            make_currency("eur", num!(0.9)),
        ];
        let trader2 = Trader::new(updated, "usd").unwrap().into_shared();
        let rebound = eur.rebind(&trader2).unwrap();
        assert_eq!(rebound.value(), &num!(2));
        assert_eq!(rebound.currency().rate(), &num!(0.9));
        assert!(Arc::ptr_eq(rebound.trader(), &trader2));
        assert_eq!(rebound.to_currency("usd").unwrap().value().round_dp(4), num!(2.2222));

        let trader3 = Trader::new(vec![make_currency("usd", num!(1))], "usd").unwrap().into_shared();
        assert_eq!(eur.rebind(&trader3).unwrap_err(), Error::CurrencyNotFound("EUR".into()));
    }

    #[test]
    fn add() {
        let trader = make_shared_trader();
        let a = trader.new_amount(num!(2.3), "usd").unwrap();
        let b = trader.new_amount(num!(3.2), "usd").unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.value(), &num!(5.5));
        assert_eq!(sum.currency().code().as_str(), "USD");

        let eur = trader.new_amount(num!(0.8), "eur").unwrap();
        let sum = a.add(&eur).unwrap();
        assert_eq!(sum.value(), &num!(3.3));
        assert_eq!(sum.currency().code().as_str(), "USD");
        let sum = eur.add(&a).unwrap();
        assert_eq!(sum.value(), &num!(2.64));
        assert_eq!(sum.currency().code().as_str(), "EUR");
    }

    #[test]
    fn add_overflows() {
        let trader = make_shared_trader();
        let a = trader.new_amount(Decimal::MAX, "usd").unwrap();
        let b = trader.new_amount(num!(1), "usd").unwrap();
        assert_eq!(a.add(&b).unwrap_err(), Error::Overflow);
    }

    #[test]
    fn sub() {
        let trader = make_shared_trader();
        let a = trader.new_amount(num!(3.2), "usd").unwrap();
        let b = trader.new_amount(num!(2.3), "usd").unwrap();
        let diff = a.sub(&b).unwrap();
        assert_eq!(diff.value(), &num!(0.9));
        assert_eq!(diff.currency().code().as_str(), "USD");

        let eur = b.to_currency("eur").unwrap();
        assert_eq!(eur.value(), &num!(1.84));
        let diff = eur.sub(&a).unwrap();
        assert_eq!(diff.value(), &num!(-0.72));
        assert_eq!(diff.currency().code().as_str(), "EUR");
    }

    #[test]
    fn mul() {
        let trader = make_shared_trader();
        let a = trader.new_amount(num!(2), "usd").unwrap();
        let b = trader.new_amount(num!(0.8), "eur").unwrap();
        let product = a.mul(&b).unwrap();
        assert_eq!(product.value(), &num!(2));
        assert_eq!(product.currency().code().as_str(), "USD");

        let c = trader.new_amount(num!(1.5), "usd").unwrap();
        assert_eq!(a.mul(&c).unwrap().value(), &num!(3));
    }

    #[test]
    fn div() {
        let trader = make_shared_trader();
        let ten = trader.new_amount(num!(10), "usd").unwrap();
        let three = trader.new_amount(num!(3), "usd").unwrap();
        let quotient = ten.div(&three).unwrap();
        assert_eq!(quotient.value(), &num!(3.3333333333333333));
        assert_eq!(quotient.value().scale(), DIVISION_PRECISION);

        // the lost digits are rounded, not dropped
        let two = trader.new_amount(num!(2), "usd").unwrap();
        assert_eq!(two.div(&three).unwrap().value(), &num!(0.6666666666666667));

        let eur = trader.new_amount(num!(0.8), "eur").unwrap();
        let quotient = ten.div(&eur).unwrap();
        assert_eq!(quotient.value(), &num!(10));
        assert_eq!(quotient.currency().code().as_str(), "USD");

        let zero = trader.new_amount(num!(0), "eur").unwrap();
        assert_eq!(ten.div(&zero).unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn permissive_policy_converts_through_the_other_trader() {
        let trader = make_shared_trader();
        let other = make_other_trader();
        let usd = trader.new_amount(num!(1), "usd").unwrap();
        let eur = other.new_amount(num!(1), "eur").unwrap();

        // EUR(1) at 0.5 is USD(2) according to its own trader
        let sum = usd.add(&eur).unwrap();
        assert_eq!(sum.value(), &num!(3));
        assert_eq!(sum.currency().code().as_str(), "USD");
        assert!(Arc::ptr_eq(sum.trader(), &trader));

        let sum = eur.add(&usd).unwrap();
        assert_eq!(sum.value(), &num!(1.8));
        assert_eq!(sum.currency().code().as_str(), "EUR");
        assert!(Arc::ptr_eq(sum.trader(), &other));

        // our currency must exist in the other amount's trader
        let gbp = other.new_amount(num!(1), "gbp").unwrap();
        assert_eq!(gbp.sub(&usd).unwrap_err(), Error::CurrencyNotFound("GBP".into()));
    }

    #[test]
    fn strict_policy_rejects_other_traders() {
        let config = Config::builder().policy(RegistryPolicy::Strict).build().unwrap();
        let strict = Trader::with_config(make_currencies(), "usd", config).unwrap().into_shared();
        let other = make_other_trader();
        let usd = strict.new_amount(num!(1), "usd").unwrap();
        let eur = other.new_amount(num!(1), "eur").unwrap();

        assert_eq!(usd.add(&eur).unwrap_err(), Error::IncompatibleRegistry);
        assert_eq!(usd.sub(&eur).unwrap_err(), Error::IncompatibleRegistry);
        assert_eq!(usd.mul(&eur).unwrap_err(), Error::IncompatibleRegistry);
        assert_eq!(usd.div(&eur).unwrap_err(), Error::IncompatibleRegistry);

        // an equivalent rate table is fine even as a separate trader
        let twin = make_shared_trader();
        let eur = twin.new_amount(num!(0.8), "eur").unwrap();
        assert_eq!(usd.add(&eur).unwrap().value(), &num!(2));
    }

    #[test]
    fn cmp() {
        let trader = make_shared_trader();
        let usd = trader.new_amount(num!(1), "usd").unwrap();
        let eur = trader.new_amount(num!(0.8), "eur").unwrap();
        let more = trader.new_amount(num!(2), "usd").unwrap();

        assert_eq!(usd.cmp(&eur).unwrap(), Ordering::Equal);
        assert_eq!(usd.cmp(&usd).unwrap(), Ordering::Equal);
        assert_eq!(more.cmp(&eur).unwrap(), Ordering::Greater);
        assert_eq!(eur.cmp(&more).unwrap(), Ordering::Less);

        let twin = make_shared_trader();
        let twin_eur = twin.new_amount(num!(0.8), "eur").unwrap();
        assert_eq!(usd.cmp(&twin_eur).unwrap(), Ordering::Equal);

        // no silent conversion across rate tables, whatever the policy
        let other = make_other_trader();
        let other_eur = other.new_amount(num!(0.8), "eur").unwrap();
        assert_eq!(usd.cmp(&other_eur).unwrap_err(), Error::IncompatibleRegistry);
    }

    #[test]
    fn neg_abs_zero() {
        let trader = make_shared_trader();
        let amount = trader.new_amount(num!(4.2), "eur").unwrap();
        let negated = amount.neg();
        assert_eq!(negated.value(), &num!(-4.2));
        assert_eq!(negated.currency().code().as_str(), "EUR");
        assert_eq!(negated.abs(), amount);
        assert!(!amount.is_zero());
        assert!(amount.sub(&amount).unwrap().is_zero());
    }

    #[test]
    fn to_minor_units() {
        let trader = make_world_trader();
        let minor = |value: Decimal, code: &str| trader.new_amount(value, code).unwrap().to_minor_units().unwrap();
        assert_eq!(minor(num!(10.23), "usd"), 1023);
        assert_eq!(minor(num!(2.34), "usd"), 234);
        assert_eq!(minor(num!(1023), "jpy"), 1023);
        assert_eq!(minor(num!(23.00), "jpy"), 23);
        assert_eq!(minor(num!(1.023), "bhd"), 1023);
        // truncated toward zero
        assert_eq!(minor(num!(2.349), "usd"), 234);
        assert_eq!(minor(num!(-2.349), "usd"), -234);

        let huge = trader.new_amount(Decimal::MAX, "usd").unwrap();
        assert_eq!(huge.to_minor_units().unwrap_err(), Error::Overflow);
    }

    #[test]
    fn format() {
        let trader = make_shared_trader();
        let amount = trader.new_amount_from_float(42.42, "usd").unwrap();
        assert_eq!(amount.format(3), "42.420");
        assert_eq!(amount.format(2), "42.42");
        assert_eq!(amount.format(1), "42.4");
        assert_eq!(amount.format(0), "42");

        let half = trader.new_amount(num!(2.345), "usd").unwrap();
        assert_eq!(half.format(2), "2.35");
        assert_eq!(half.neg().format(2), "-2.35");
        assert_eq!(half.to_string(), "2.345 USD");
    }

    #[test]
    fn equality_ignores_trader() {
        let a = make_shared_trader().new_amount(num!(1.50), "usd").unwrap();
        let b = make_other_trader().new_amount(num!(1.5), "usd").unwrap();
        assert_eq!(a, b);
        let c = make_shared_trader().new_amount(num!(1.5), "eur").unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn serializes() {
        let trader = make_shared_trader();
        let amount = trader.new_amount(num!(42.42), "eur").unwrap();
        let json = serde_json::to_value(&amount).unwrap();
        assert_eq!(json, serde_json::json!({
            "value": "42.42",
            "currency": {"code": "EUR", "rate": "0.8"},
        }));
    }
}
