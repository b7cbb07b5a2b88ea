use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::middleware::Next;
use actix_web::{web, Error, HttpResponse, ResponseError};
use constant_time_eq::constant_time_eq;

use crate::errors::BlobServiceErr;
use crate::AppState;

pub const API_KEY_HEADER: &str = "API-Key";

/// Middleware that lets a request through only when its `API-Key` header
/// equals the configured secret. CORS preflights are answered here directly.
pub async fn require_api_key<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    if req.method() == Method::OPTIONS {
        return Ok(req.into_response(HttpResponse::NoContent().finish()).map_into_right_body());
    }

    let authorized = match req.app_data::<web::Data<AppState>>() {
        Some(state) => req
            .headers()
            .get(API_KEY_HEADER)
            .is_some_and(|key| constant_time_eq(key.as_bytes(), state.api_key.as_bytes())),
        None => {
            tracing::error!("no application state registered, refusing request");
            false
        }
    };

    if !authorized {
        tracing::debug!("rejected {} {}", req.method(), req.path());
        let resp = BlobServiceErr::Unauthorized.error_response();
        return Ok(req.into_response(resp).map_into_right_body());
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}
