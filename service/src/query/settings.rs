//! [`Query`] collection related to business [`Settings`].

use common::operations::By;

use crate::domain::Settings;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries the current business [`Settings`].
pub type Current = DatabaseQuery<By<Settings, ()>>;
