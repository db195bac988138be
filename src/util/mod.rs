//! A set of utility macros and test fixtures used throughout the core.

#[macro_use]
pub mod number;

#[cfg(test)]
pub(crate) mod test;
