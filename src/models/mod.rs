//! The models hold the currency data and the engine operating on it.

pub mod reference;
pub mod currency;
pub mod trader;
pub mod amount;

#[cfg(test)]
mod props;
