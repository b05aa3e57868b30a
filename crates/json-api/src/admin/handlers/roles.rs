//! Admin Roles Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use weshoot_app::domain::roles::records::RoleAssignmentRecord;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RoleAssignmentResponse {
    pub uuid: Uuid,
    pub user_uuid: Uuid,

    /// Stored label, which may be one this service does not recognise.
    pub role: String,

    pub created_at: String,
}

impl From<RoleAssignmentRecord> for RoleAssignmentResponse {
    fn from(assignment: RoleAssignmentRecord) -> Self {
        Self {
            uuid: assignment.uuid.into(),
            user_uuid: assignment.user_uuid.into(),
            role: assignment.role,
            created_at: assignment.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RoleAssignmentsResponse {
    pub role_assignments: Vec<RoleAssignmentResponse>,
}

/// Admin Roles Handler
#[endpoint(tags("admin"), summary = "Role Assignments")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<RoleAssignmentsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let assignments = state
        .app
        .roles
        .list_role_assignments()
        .await
        .or_500("failed to list role assignments")?;

    Ok(Json(RoleAssignmentsResponse {
        role_assignments: assignments.into_iter().map(Into::into).collect(),
    }))
}
