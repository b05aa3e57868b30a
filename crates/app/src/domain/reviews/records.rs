//! Review Records

use jiff::Timestamp;

use crate::{
    domain::{bookings::records::BookingUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Review UUID
pub type ReviewUuid = TypedUuid<ReviewRecord>;

/// Review Record
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub uuid: ReviewUuid,
    pub user_uuid: UserUuid,
    pub booking_uuid: Option<BookingUuid>,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub body: String,
    pub created_at: Timestamp,
}
