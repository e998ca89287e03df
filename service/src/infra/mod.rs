//! Infrastructure layer.

pub mod database;

pub use self::database::Database;
#[cfg(feature = "json")]
pub use self::database::{json, Json};
