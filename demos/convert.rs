use currency_trader::{
    error::Result,
    num,
    Amount,
    Currency,
    Trader,
};
use std::sync::Arc;

/// Normally rates would come from a feed, but we're starting from a blank
/// slate so we hard-code a small table against the US dollar.
fn create_trader() -> Result<Arc<Trader>> {
    let currencies = vec![
        Currency::new("USD", num!(1))?,
        Currency::new("eur", num!(0.8))?,
        Currency::new("jpy", num!(110))?,
    ];
    Ok(Trader::new(currencies, "usd")?.into_shared())
}

fn example() -> Result<(Amount, Amount, i64)> {
    let trader = create_trader()?;
    let price = trader.new_amount_from_str("42.42", "USD")?;
    let price_eur = price.to_currency("EUR")?;
    // USD(42.42) + EUR(33.936) == USD(42.42) + USD(42.42) == USD(84.84)
    let total = price.add(&price_eur)?;
    let yen = total.to_currency("jpy")?.to_minor_units()?;
    Ok((price_eur, total, yen))
}

fn main() {
    match example() {
        Ok((price_eur, total, yen)) => {
            println!("price in euros: {}", price_eur.format(3));
            println!("total: {} {}", total.format(2), total.currency());
            println!("total in yen: {}", yen);
        }
        Err(e) => eprintln!("example failed: {}", e),
    }
}
