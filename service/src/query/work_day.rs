//! [`Query`] collection related to [`WorkDay`]s.

use common::operations::By;

use crate::domain::{member, WorkDay};
#[cfg(doc)]
use crate::{domain::TeamMember, Query};

use super::DatabaseQuery;

/// Queries all the [`WorkDay`]s of a [`TeamMember`] by its [`member::Id`].
pub type ByMember<'id> = DatabaseQuery<By<Vec<WorkDay>, &'id member::Id>>;
