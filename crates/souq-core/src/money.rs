//! Price type for monetary values.
//!
//! Uses fils-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The catalog data
//! files carry prices as plain decimal numbers, so serialization bridges
//! to and from `f64` at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Display metadata for a currency.
///
/// Prices themselves are plain minor-unit integers; the currency only
/// matters when a price is shown to people or emitted as structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    symbol: &'static str,
    decimal_places: u32,
}

/// United Arab Emirates dirham, the storefront's display currency.
pub const AED: Currency = Currency {
    code: "AED",
    symbol: "AED",
    decimal_places: 2,
};

impl Currency {
    /// Get the ISO 4217 currency code (e.g., "AED").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the symbol prepended to formatted amounts.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Get the number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Format a price for display (e.g., "AED 49.99").
    pub fn format(&self, price: Price) -> String {
        let places = self.decimal_places as usize;
        format!("{} {:.places$}", self.symbol, price.to_decimal())
    }
}

impl Default for Currency {
    fn default() -> Self {
        AED
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// A price in minor currency units (hundredths).
///
/// Arithmetic saturates instead of overflowing, so cart totals degrade to
/// the representable maximum rather than panicking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(from = "f64", into = "f64")]
pub struct Price {
    minor: i64,
}

impl Price {
    /// The zero price.
    pub const ZERO: Price = Price { minor: 0 };

    /// Create a price from minor units (e.g., 4999 for 49.99).
    pub fn from_minor(minor: i64) -> Self {
        Self { minor }
    }

    /// Create a price from a decimal amount, rounding to minor units.
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            minor: (amount * 100.0).round() as i64,
        }
    }

    /// Get the amount in minor units.
    pub fn minor(&self) -> i64 {
        self.minor
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.minor as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// Multiply by a quantity, saturating at the representable range.
    pub fn times(&self, quantity: i64) -> Price {
        Price {
            minor: self.minor.saturating_mul(quantity),
        }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price {
            minor: self.minor.saturating_add(other.minor),
        }
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Price::from_decimal(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.to_decimal()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_decimal())
    }
}
