//! Dashboard Errors

use salvo::http::StatusError;
use tracing::error;

use weshoot_app::domain::bookings::BookingsServiceError;

pub(crate) fn into_status_error(error: BookingsServiceError) -> StatusError {
    match error {
        BookingsServiceError::NotFound => {
            StatusError::not_found().brief("Prenotazione non trovata")
        }
        BookingsServiceError::Sql(source) => {
            error!("failed to load bookings: {source}");

            StatusError::internal_server_error()
        }
    }
}
