//! [`WorkDay`] definitions.

use common::IsoDate;
use derive_more::{AsRef, Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::TeamMember;
use crate::domain::member::{self, Rates};

/// Record of a [`TeamMember`] having worked on a specific day.
///
/// At most one [`WorkDay`] per member and date is meaningful, but duplicates
/// aren't rejected: each of them is paid.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDay {
    /// ID of this [`WorkDay`], if it's persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    /// ID of the [`TeamMember`] who worked.
    pub member_id: member::Id,

    /// Day the [`TeamMember`] worked on.
    pub date: IsoDate,

    /// Whether the company car bonus applies to this [`WorkDay`].
    #[serde(default)]
    pub with_car: bool,

    /// Whether the base pay of this [`WorkDay`] is doubled.
    #[serde(default)]
    pub is_double: bool,
}

impl WorkDay {
    /// Returns the [`Modifiers`] of this [`WorkDay`].
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            with_car: self.with_car,
            is_double: self.is_double,
        }
    }

    /// Calculates the pay for this [`WorkDay`] with the provided [`Rates`].
    #[must_use]
    pub fn pay(&self, rates: Rates) -> Decimal {
        self.modifiers().pay(rates)
    }
}

/// ID of a [`WorkDay`].
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
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
#[serde(transparent)]
pub struct Id(String);

/// Pay modifiers of a [`WorkDay`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Modifiers {
    /// Whether the company car bonus applies.
    pub with_car: bool,

    /// Whether the base pay is doubled.
    pub is_double: bool,
}

impl Modifiers {
    /// Calculates the pay for a day with these [`Modifiers`].
    ///
    /// The car bonus is added after doubling and is never doubled itself.
    #[must_use]
    pub fn pay(self, rates: Rates) -> Decimal {
        let mut pay = rates.daily;
        if self.is_double {
            pay *= Decimal::TWO;
        }
        if self.with_car {
            pay += rates.car_bonus;
        }
        pay
    }

    /// Returns the [`Kind`] of a day with these [`Modifiers`].
    #[must_use]
    pub const fn kind(self) -> Kind {
        if self.is_double {
            Kind::Double
        } else if self.with_car {
            Kind::Car
        } else {
            Kind::Regular
        }
    }
}

/// Kind of a [`WorkDay`], as it's highlighted in a calendar.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Plain work day.
    Regular,

    /// Work day with the company car bonus.
    Car,

    /// Work day with the doubled base pay, whether with the car bonus or not.
    Double,
}
