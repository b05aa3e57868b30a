//! User Records

use crate::uuids::TypedUuid;

/// User UUID, as issued by the identity provider.
pub type UserUuid = TypedUuid<SessionUser>;

/// The identity resolved for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// Identity-provider user id.
    pub uuid: UserUuid,

    /// Primary email address, when the provider exposes one.
    pub email: Option<String>,
}
