use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Permissive cross-origin headers added to every response that does not set its own.
pub fn permissive() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, DELETE"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, API-Key"))
}
