//! Property-based tests for conversions and amount arithmetic.

use crate::{
    config::{Config, ConversionStrategy},
    models::{
        currency::Currency,
        trader::Trader,
    },
    util::test::*,
};
use proptest::prelude::*;
use rust_decimal::prelude::*;
use std::sync::Arc;

/// Amounts between -1,000,000.00 and 1,000,000.00.
fn amount_value() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Rates between 0.0001 and 10000.0000.
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn strategy() -> impl Strategy<Value = ConversionStrategy> {
    prop_oneof![Just(ConversionStrategy::Direct), Just(ConversionStrategy::ViaBase)]
}

/// A USD-based trader carrying EUR and GBP at the given rates.
fn trader_with(eur: Decimal, gbp: Decimal, conversion: ConversionStrategy) -> Arc<Trader> {
    let config = Config::builder().conversion(conversion).build().unwrap();
    let currencies = vec![
        Currency::new("usd", num!(1)).unwrap(),
        Currency::new("eur", eur).unwrap(),
        Currency::new("gbp", gbp).unwrap(),
    ];
    Trader::with_config(currencies, "usd", config).unwrap().into_shared()
}

fn tolerance() -> Decimal {
    Decimal::new(1, 10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Case variants of a valid code all match the currency built from it.
    #[test]
    fn prop_code_case_insensitive(code in prop::sample::select(vec!["usd", "eur", "jpy", "bhd", "xau", "clf"]), r in rate()) {
        let currency = Currency::new(code, r).unwrap();
        prop_assert!(currency.is(code.to_uppercase()));
        prop_assert!(currency.is(code.to_lowercase()));
        let mixed: String = code.chars().enumerate()
            .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert!(currency.is(mixed));
    }

    /// Converting into the amount's own currency is the identity.
    #[test]
    fn prop_identity_conversion(value in amount_value(), eur in rate(), gbp in rate(), conversion in strategy()) {
        let trader = trader_with(eur, gbp, conversion);
        for code in &["usd", "eur", "gbp"] {
            let amount = trader.new_amount(value, *code).unwrap();
            prop_assert_eq!(amount.to_currency(*code).unwrap(), amount);
        }
    }

    /// X -> Y -> X gives back the original value, within the precision of
    /// the decimal type.
    #[test]
    fn prop_round_trip(value in amount_value(), eur in rate(), gbp in rate(), conversion in strategy()) {
        let trader = trader_with(eur, gbp, conversion);
        for (from, to) in &[("usd", "eur"), ("eur", "usd"), ("eur", "gbp"), ("gbp", "usd")] {
            let amount = trader.new_amount(value, *from).unwrap();
            let back = amount.to_currency(*to).unwrap().to_currency(*from).unwrap();
            prop_assert!((back.value() - value).abs() < tolerance(), "{} -> {} -> {}: {} became {}", from, to, from, value, back.value());
        }
    }

    /// The sum is exactly our value plus the other amount in our currency.
    #[test]
    fn prop_add_matches_conversion(a in amount_value(), b in amount_value(), eur in rate(), gbp in rate()) {
        let trader = trader_with(eur, gbp, ConversionStrategy::Direct);
        let lhs = trader.new_amount(a, "gbp").unwrap();
        let rhs = trader.new_amount(b, "eur").unwrap();
        let sum = lhs.add(&rhs).unwrap();
        let converted = rhs.to_currency("gbp").unwrap();
        prop_assert_eq!(*sum.value(), a + *converted.value());
        prop_assert_eq!(sum.currency().code().as_str(), "GBP");
    }

    /// cmp(a, b) == -cmp(b, a), and cmp(a, a) == 0.
    #[test]
    fn prop_cmp_antisymmetric(a in amount_value(), b in amount_value()) {
        let trader = make_shared_trader();
        let usd = trader.new_amount(a, "usd").unwrap();
        let eur = trader.new_amount(b, "eur").unwrap();
        prop_assert_eq!(usd.cmp(&eur).unwrap(), eur.cmp(&usd).unwrap().reverse());
        prop_assert_eq!(usd.cmp(&usd).unwrap(), std::cmp::Ordering::Equal);
    }

    /// Minor units survive a trip through `new_amount_from_minor_units`.
    #[test]
    fn prop_minor_units(units in -1_000_000_000i64..1_000_000_000i64, code in prop::sample::select(vec!["usd", "jpy", "bhd"])) {
        let trader = make_world_trader();
        let amount = trader.new_amount_from_minor_units(units, code).unwrap();
        prop_assert_eq!(amount.to_minor_units().unwrap(), units);
    }
}
