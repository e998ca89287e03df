//! Business [`Settings`] definitions.

use serde::{Deserialize, Serialize};

use crate::domain::period::{InvalidPayday, Payday};

/// Snapshot of the business settings relevant for salaries.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Configured day of month salaries are paid on.
    ///
    /// [`None`] means the [`Payday::default()`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_payday: Option<i64>,
}

impl Settings {
    /// Returns the configured [`Payday`].
    ///
    /// # Errors
    ///
    /// With an [`InvalidPayday`] if the configured day is out of `1..=31`
    /// range.
    pub fn payday(&self) -> Result<Payday, InvalidPayday> {
        self.salary_payday.map_or(Ok(Payday::default()), Payday::new)
    }
}
