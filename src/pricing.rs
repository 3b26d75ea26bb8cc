//! Prices

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use thiserror::Error;

/// Errors that can occur while parsing prices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The text is not a valid price.
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// The currency code is not supported.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Parse a price string with currency (e.g. "2.99 USD") into minor units and currency.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), PriceError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(PriceError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(PriceError::UnknownCurrency(other.to_string())),
    };

    Ok((parse_amount(amount)?, currency))
}

/// Parse a bare decimal amount (e.g. "4.50") into minor units.
///
/// # Errors
///
/// Returns [`PriceError::InvalidPrice`] if the amount is not a non-negative decimal.
pub fn parse_amount(s: &str) -> Result<i64, PriceError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| PriceError::InvalidPrice(s.to_string()))?;

    if amount < Decimal::ZERO {
        return Err(PriceError::InvalidPrice(s.to_string()));
    }

    amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| PriceError::InvalidPrice(s.to_string()))
}

/// Sum a sequence of minor-unit amounts into money of the given currency.
pub fn sum_minor<'a>(
    amounts: impl IntoIterator<Item = i64>,
    currency: &'a Currency,
) -> Money<'a, Currency> {
    let total = amounts.into_iter().fold(0i64, i64::saturating_add);

    Money::from_minor(total, currency)
}
