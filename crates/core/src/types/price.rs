//! Price display for product listings.

use rust_decimal::Decimal;

/// A product price in US dollars.
///
/// The services put prices on the wire as bare JSON numbers; this wrapper
/// exists so templates render them consistently as `$9.99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal dollar amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display_two_decimal_places() {
        assert_eq!(Price::new(Decimal::new(999, 2)).to_string(), "$9.99");
        assert_eq!(Price::new(Decimal::new(5, 0)).to_string(), "$5.00");
        assert_eq!(Price::new(Decimal::ZERO).to_string(), "$0.00");
    }

    #[test]
    fn test_price_preserves_amount() {
        let amount = Decimal::new(1250, 2);
        assert_eq!(Price::from(amount).amount(), amount);
    }
}
