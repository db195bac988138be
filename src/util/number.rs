//! Helpers for writing decimal values.

/// Create a `Decimal` from a literal.
///
/// A thin wrapper around `rust_decimal_macros::dec!` that keeps rates and
/// amounts readable (`num!(0.8)`) and lets the decimal type be swapped out in
/// one place. Callers of the crate can use it to build rates and values too.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
