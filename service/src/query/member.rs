//! [`Query`] collection related to a single [`TeamMember`].

use common::operations::By;

use crate::domain::{member, TeamMember};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`TeamMember`] by its [`member::Id`].
pub type ById<'id> = DatabaseQuery<By<Option<TeamMember>, &'id member::Id>>;
