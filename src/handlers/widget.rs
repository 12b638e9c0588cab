//! Widget handlers
//!
//! HTTP handlers for the trending widget fragment. Any inbound method or
//! path produces the same behavior; `/` is wired explicitly and everything
//! else falls through to the same handler via the default service.

use actix_web::{HttpResponse, web};
use tracing::error;

use crate::AppState;
use crate::error::AppError;
use crate::services::SourceError;

/// Header telling the embedding host the body is ready-to-render HTML
pub const WIDGET_CONTENT_TYPE: (&str, &str) = ("Widget-Content-Type", "html");

/// GET /
///
/// Fetch the trending page, extract repository cards, and respond with the
/// rendered HTML fragment. Anti-caching headers force the host to re-fetch
/// fresh content on every embed refresh.
pub async fn get_widget(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let fragment = state
        .widget
        .build_fragment()
        .await
        .map_err(map_source_error)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header(WIDGET_CONTENT_TYPE)
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .insert_header(("Pragma", "no-cache"))
        .insert_header(("Expires", "0"))
        .body(fragment))
}

/// Map source fetch errors to application errors
///
/// The cause is logged here for operator visibility; the response body stays
/// generic.
fn map_source_error(e: SourceError) -> AppError {
    match e {
        SourceError::Request(_) | SourceError::Status(_) => {
            error!(error = %e, "Error fetching source page");
            AppError::Fetch
        }
        SourceError::Body(_) => {
            error!(error = %e, "Error decoding source page body");
            AppError::Parse
        }
    }
}

/// Configure widget routes
///
/// The method is ignored: a guarded GET route would answer other methods on
/// `/` with a 405 instead of serving the widget.
pub fn configure_widget_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::route().to(get_widget)));
}
