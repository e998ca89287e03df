//! [`TeamMember`] definitions.

use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Member of a team whose work days are tracked.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// ID of this [`TeamMember`].
    pub id: Id,

    /// [`Name`] of this [`TeamMember`].
    #[serde(default)]
    pub name: Name,

    /// Base pay of this [`TeamMember`] for a single work day.
    #[serde(default)]
    pub daily_rate: Decimal,

    /// Flat bonus of this [`TeamMember`] for a work day with a company car.
    #[serde(default)]
    pub car_bonus: Decimal,
}

impl TeamMember {
    /// Returns the [`Rates`] of this [`TeamMember`].
    #[must_use]
    pub fn rates(&self) -> Rates {
        Rates {
            daily: self.daily_rate,
            car_bonus: self.car_bonus,
        }
    }
}

/// ID of a [`TeamMember`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Id(String);

/// Name of a [`TeamMember`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Name(String);

/// Pay rates a salary is calculated with.
///
/// Neither rate is validated: zero and negative values are taken as
/// configured.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rates {
    /// Base pay for a single work day.
    pub daily: Decimal,

    /// Flat bonus for a work day with a company car.
    pub car_bonus: Decimal,
}

impl Rates {
    /// [`Rates`] paying nothing.
    pub const ZERO: Self = Self {
        daily: Decimal::ZERO,
        car_bonus: Decimal::ZERO,
    };

    /// Creates new [`Rates`].
    #[must_use]
    pub const fn new(daily: Decimal, car_bonus: Decimal) -> Self {
        Self { daily, car_bonus }
    }

    /// Replaces each unset (zero) rate of these [`Rates`] with the one of the
    /// `fallback` [`Rates`].
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        let pick = |own: Decimal, other| if own.is_zero() { other } else { own };
        Self {
            daily: pick(self.daily, fallback.daily),
            car_bonus: pick(self.car_bonus, fallback.car_bonus),
        }
    }
}
