//! [`Json`] snapshot [`Database`] implementation.

use std::{fs, io, path::Path, str::FromStr, sync::Arc};

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use serde::{Deserialize, Serialize};
use tracerr::Traced;

use crate::{
    domain::{member, Settings, TeamMember, WorkDay},
    infra::{database, Database},
};

/// Snapshot of the backend API payloads a salary is calculated from.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Business [`Settings`].
    #[serde(default)]
    pub settings: Settings,

    /// [`TeamMember`]s of the team.
    #[serde(default)]
    pub team: Vec<TeamMember>,

    /// [`WorkDay`]s of the whole team.
    #[serde(default)]
    pub work_days: Vec<WorkDay>,
}

/// Read-only [`Database`] over a JSON [`Snapshot`].
#[derive(Clone, Debug, Default)]
pub struct Json {
    /// [`Snapshot`] shared between the clones of this [`Json`].
    snapshot: Arc<Snapshot>,
}

impl Json {
    /// Creates a new [`Json`] database over the provided [`Snapshot`].
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Loads a [`Json`] database from the [`Snapshot`] file at the given
    /// `path`.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or isn't a valid [`Snapshot`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Traced<Error>> {
        let path = path.as_ref();
        tracing::debug!("loading snapshot from `{}`", path.display());

        fs::read_to_string(path)
            .map_err(Error::Io)
            .map_err(tracerr::wrap!())?
            .parse::<Self>()
            .map_err(tracerr::wrap!())
    }

    /// Returns the [`Snapshot`] of this [`Json`] database.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl FromStr for Json {
    type Err = Traced<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
            .map(Self::new)
            .map_err(Error::Parse)
            .map_err(tracerr::wrap!())
    }
}

impl Database<Select<By<Settings, ()>>> for Json {
    type Ok = Settings;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Settings, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot.settings)
    }
}

impl<'id> Database<Select<By<Option<TeamMember>, &'id member::Id>>> for Json {
    type Ok = Option<TeamMember>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<TeamMember>, &'id member::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.snapshot.team.iter().find(|m| m.id == *id).cloned())
    }
}

impl<'id> Database<Select<By<Vec<WorkDay>, &'id member::Id>>> for Json {
    type Ok = Vec<WorkDay>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<WorkDay>, &'id member::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .snapshot
            .work_days
            .iter()
            .filter(|d| d.member_id == *id)
            .cloned()
            .collect())
    }
}

/// [`Json`] database error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read a [`Snapshot`] file.
    #[display("failed to read snapshot: {_0}")]
    Io(io::Error),

    /// Failed to parse a [`Snapshot`].
    #[display("failed to parse snapshot: {_0}")]
    Parse(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        domain::{member, period::Payday, Settings, TeamMember, WorkDay},
        infra::Database as _,
    };

    use super::Json;

    const SNAPSHOT: &str = r#"{
        "settings": {"salaryPayday": 15},
        "team": [
            {"id": "m1", "name": "Ivan", "dailyRate": 2000, "carBonus": 500},
            {"id": "m2", "name": "Olga", "dailyRate": 3000, "carBonus": 0}
        ],
        "workDays": [
            {"id": "1", "memberId": "m1", "date": "2025-06-10", "withCar": true, "isDouble": true},
            {"id": "2", "memberId": "m2", "date": "2025-06-10", "withCar": false, "isDouble": false},
            {"id": "3", "memberId": "m1", "date": "2025-06-11", "withCar": false, "isDouble": false}
        ]
    }"#;

    #[tokio::test]
    async fn selects_settings() {
        let db: Json = SNAPSHOT.parse().unwrap();

        let settings = db
            .execute(Select(By::<Settings, ()>::new(())))
            .await
            .unwrap();

        assert_eq!(settings.payday(), Ok(Payday::new(15).unwrap()));
    }

    #[tokio::test]
    async fn selects_member_by_id() {
        let db: Json = SNAPSHOT.parse().unwrap();
        let id = member::Id::from("m2");

        let member = db
            .execute(Select(By::<Option<TeamMember>, _>::new(&id)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(member.name, member::Name::from("Olga"));

        let missing = member::Id::from("m3");
        assert!(db
            .execute(Select(By::<Option<TeamMember>, _>::new(&missing)))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn selects_work_days_of_member() {
        let db: Json = SNAPSHOT.parse().unwrap();
        let id = member::Id::from("m1");

        let days = db
            .execute(Select(By::<Vec<WorkDay>, _>::new(&id)))
            .await
            .unwrap();

        assert_eq!(days.len(), 2);
        assert!(days.iter().all(|d| d.member_id == id));
    }

    #[test]
    fn empty_snapshot_is_valid() {
        let db: Json = "{}".parse().unwrap();

        assert_eq!(db.snapshot().settings, Settings::default());
        assert!(db.snapshot().team.is_empty());
        assert!(db.snapshot().work_days.is_empty());
    }

    #[test]
    fn rejects_malformed_snapshot() {
        let err = "{\"team\": 1}".parse::<Json>().unwrap_err();

        assert!(
            err.to_string().starts_with("failed to parse snapshot"),
            "{err}",
        );
    }

    #[test]
    fn fails_to_open_missing_file() {
        let err = Json::open("/definitely/missing/snapshot.json").unwrap_err();

        assert!(err.to_string().starts_with("failed to read snapshot"), "{err}");
    }
}
