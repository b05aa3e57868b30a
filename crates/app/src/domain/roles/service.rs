//! Roles service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        roles::{
            access::{Access, Role},
            errors::RolesServiceError,
            records::RoleAssignmentRecord,
            repository::PgRolesRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgRolesService {
    db: Db,
    repository: PgRolesRepository,
}

impl PgRolesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRolesRepository::new(),
        }
    }
}

#[async_trait]
impl RolesService for PgRolesService {
    async fn access_for(&self, user: UserUuid) -> Result<Access, RolesServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let rows = self.repository.list_user_roles(&mut tx, user).await?;

        tx.commit().await?;

        let roles: Vec<Role> = rows
            .iter()
            .filter_map(|row| match row.role.parse::<Role>() {
                Ok(role) => Some(role),
                Err(unknown) => {
                    debug!(%user, "ignoring role row: {unknown}");

                    None
                }
            })
            .collect();

        Ok(Access::from_roles(&roles))
    }

    async fn list_role_assignments(
        &self,
    ) -> Result<Vec<RoleAssignmentRecord>, RolesServiceError> {
        let mut tx = self.db.begin_staff_transaction().await?;

        let rows = self.repository.list_role_assignments(&mut tx).await?;

        tx.commit().await?;

        Ok(rows)
    }
}

#[automock]
#[async_trait]
pub trait RolesService: Send + Sync {
    /// Classify the access level of `user` from their role rows.
    async fn access_for(&self, user: UserUuid) -> Result<Access, RolesServiceError>;

    /// Every role assignment, for the super-admin roles page.
    async fn list_role_assignments(&self)
    -> Result<Vec<RoleAssignmentRecord>, RolesServiceError>;
}
