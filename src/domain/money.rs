//! Fixed-point monetary values.
//!
//! Amounts are stored as signed 64-bit integers in minor currency units
//! (cents). Arithmetic goes through checked operations, so overflow panics
//! instead of wrapping silently. The floating representation exists for
//! display only and must never be fed back into arithmetic.

use std::fmt;

/// Monetary amount in minor currency units (cents)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Create an amount from minor units
    pub fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Amount in minor units
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Sum of two amounts
    pub fn add(&self, other: Money) -> Money {
        Money(self.0.checked_add(other.0).expect("money addition overflow"))
    }

    /// Difference of two amounts. The result may be negative; callers
    /// decide whether that is acceptable before storing it.
    pub fn subtract(&self, other: Money) -> Money {
        Money(
            self.0
                .checked_sub(other.0)
                .expect("money subtraction overflow"),
        )
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Floating display value (12345 -> 123.45). Presentation only.
    pub fn to_display(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_subtract() {
        let a = Money::new(1000);
        let b = Money::new(300);
        assert_eq!(a.add(b), Money::new(1300));
        assert_eq!(a.subtract(b), Money::new(700));
    }

    #[test]
    fn test_subtract_below_zero_is_negative() {
        let a = Money::new(100);
        let b = Money::new(300);
        let diff = a.subtract(b);
        assert!(diff.is_negative());
        assert_eq!(diff.cents(), -200);
    }

    #[test]
    fn test_zero_is_not_negative() {
        assert!(!Money::ZERO.is_negative());
        assert!(!Money::new(1).subtract(Money::new(1)).is_negative());
    }

    #[test]
    fn test_display_conversion() {
        assert_eq!(Money::new(12345).to_display(), 123.45);
        assert_eq!(Money::new(0).to_display(), 0.0);
        assert_eq!(Money::new(5).to_display(), 0.05);
    }

    #[test]
    fn test_ordering() {
        assert!(Money::new(100) < Money::new(200));
        assert!(Money::new(-1) < Money::ZERO);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Money::new(12345).to_string(), "123.45");
        assert_eq!(Money::new(7).to_string(), "0.07");
    }
}
