//! Content Errors

use salvo::http::StatusError;
use tracing::error;

use weshoot_app::content::ContentServiceError;

pub(crate) fn into_status_error(error: ContentServiceError) -> StatusError {
    match error {
        ContentServiceError::NotFound => StatusError::not_found().brief("Pagina non trovata"),
        ContentServiceError::Http(source) => {
            error!("CMS request failed: {source}");

            StatusError::bad_gateway()
        }
        ContentServiceError::Upstream(message) => {
            error!("CMS returned an error: {message}");

            StatusError::bad_gateway()
        }
    }
}
