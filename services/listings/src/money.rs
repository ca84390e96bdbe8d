//! Minor-unit money values
//!
//! Prices live in the store as integer cents. Callers speak in major units
//! (dollars), so conversion happens exactly once, at the gateway boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An amount in cents, as stored in `properties.cost_per_night`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Cents(i32);

impl Cents {
    pub const fn new(cents: i32) -> Self {
        Self(cents)
    }

    /// Convert a major-unit amount, rounding to the nearest cent.
    ///
    /// Out-of-range amounts saturate at the `i32` bounds and NaN becomes zero.
    pub fn from_major(amount: f64) -> Self {
        Self((amount * 100.0).round() as i32)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    pub fn to_major(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_dollars_are_exact() {
        for dollars in [0, 1, 50, 120, 999, 25_000] {
            let cents = Cents::from_major(f64::from(dollars));
            assert_eq!(cents.get(), dollars * 100);
            assert_eq!(cents.to_major(), f64::from(dollars));
        }
    }

    #[test]
    fn test_fractional_amounts_round_to_nearest_cent() {
        assert_eq!(Cents::from_major(120.00).get(), 12000);
        assert_eq!(Cents::from_major(19.99).get(), 1999);
        assert_eq!(Cents::from_major(0.125).get(), 13);
        assert_eq!(Cents::from_major(0.104).get(), 10);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cents::new(12000).to_string(), "120.00");
        assert_eq!(Cents::new(1999).to_string(), "19.99");
        assert_eq!(Cents::new(5).to_string(), "0.05");
        assert_eq!(Cents::new(-250).to_string(), "-2.50");
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&Cents::new(5000)).unwrap(), "5000");
        let cents: Cents = serde_json::from_str("12000").unwrap();
        assert_eq!(cents, Cents::new(12000));
    }
}
