//! Roles Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{roles::records::RoleAssignmentRecord, users::records::UserUuid};

const LIST_USER_ROLES_SQL: &str = include_str!("sql/list_user_roles.sql");
const LIST_ROLE_ASSIGNMENTS_SQL: &str = include_str!("sql/list_role_assignments.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRolesRepository;

impl PgRolesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_user_roles(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<RoleAssignmentRecord>, sqlx::Error> {
        query_as::<Postgres, RoleAssignmentRecord>(LIST_USER_ROLES_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_role_assignments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<RoleAssignmentRecord>, sqlx::Error> {
        query_as::<Postgres, RoleAssignmentRecord>(LIST_ROLE_ASSIGNMENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RoleAssignmentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            user_uuid: row.try_get::<Uuid, _>("user_uuid")?.into(),
            role: row.try_get("role")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
