//! Role Records

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Role Assignment UUID
pub type RoleAssignmentUuid = TypedUuid<RoleAssignmentRecord>;

/// One `user_roles` row. `role` stays a raw label so unknown values can be
/// listed and ignored rather than failing the whole query.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleAssignmentRecord {
    pub uuid: RoleAssignmentUuid,
    pub user_uuid: UserUuid,
    pub role: String,
    pub created_at: Timestamp,
}
