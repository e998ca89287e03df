//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] of the given `amount` in the given
    /// [`Currency`].
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero [`Money`] in the given [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns a human-readable [`fmt::Display`] of this [`Money`], with
    /// thousands grouped and the [`Currency::sign()`] appended
    /// (`45 000 ₽`).
    #[must_use]
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty(self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        match amount.is_integer().then(|| amount.to_i128()).flatten() {
            Some(int) => write!(f, "{int}{currency}"),
            None => write!(f, "{}{currency}", amount.normalize()),
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 || !s.is_char_boundary(s.len() - 3) {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

/// Human-readable [`fmt::Display`] of [`Money`].
#[derive(Clone, Copy, Debug)]
pub struct Pretty<'m>(&'m Money);

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Money { amount, currency } = self.0;

        let amount = amount.round_dp(2).normalize();
        if amount.is_sign_negative() && !amount.is_zero() {
            f.write_str("-")?;
        }
        let abs = amount.abs().to_string();
        let (int, frac) = abs.split_once('.').unwrap_or((abs.as_str(), ""));

        for (i, digit) in int.chars().enumerate() {
            if i > 0 && (int.len() - i) % 3 == 0 {
                f.write_str(" ")?;
            }
            write!(f, "{digit}")?;
        }
        if !frac.is_empty() {
            write!(f, ",{frac}")?;
        }
        write!(f, " {}", currency.sign())
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "US Dollar."]
        Usd = 1,

        #[doc = "Euro."]
        Eur = 2,

        #[doc = "Russian Ruble."]
        Rub = 3,
    }
}

impl Currency {
    /// Returns the sign of this [`Currency`].
    #[must_use]
    pub const fn sign(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Rub => "₽",
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn rub(s: &str) -> Money {
        Money::new(s.parse::<Decimal>().unwrap(), Currency::Rub)
    }

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("4500RUB").unwrap(), rub("4500"));
        assert_eq!(Money::from_str("2000.50RUB").unwrap(), rub("2000.50"));
        assert_eq!(
            Money::from_str("12EUR").unwrap(),
            Money::new(Decimal::from(12), Currency::Eur),
        );

        assert!(Money::from_str("4500").is_err());
        assert!(Money::from_str("4500Ru").is_err());
        assert!(Money::from_str("4500Rubles").is_err());
        assert!(Money::from_str("₽₽").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(rub("4500").to_string(), "4500RUB");
        assert_eq!(rub("4500.00").to_string(), "4500RUB");
        assert_eq!(rub("4500.50").to_string(), "4500.5RUB");
        assert_eq!(Money::zero(Currency::Usd).to_string(), "0USD");
    }

    #[test]
    fn pretty_groups_thousands() {
        assert_eq!(rub("0").pretty().to_string(), "0 ₽");
        assert_eq!(rub("500").pretty().to_string(), "500 ₽");
        assert_eq!(rub("4500").pretty().to_string(), "4 500 ₽");
        assert_eq!(rub("45000").pretty().to_string(), "45 000 ₽");
        assert_eq!(rub("1234567.5").pretty().to_string(), "1 234 567,5 ₽");
        assert_eq!(rub("-2000").pretty().to_string(), "-2 000 ₽");
        assert_eq!(
            Money::new(Decimal::from(100), Currency::Usd)
                .pretty()
                .to_string(),
            "100 $",
        );
    }
}
