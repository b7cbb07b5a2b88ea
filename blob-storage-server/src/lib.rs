pub mod auth;
pub mod cors;
pub mod errors;
pub mod params;
pub mod services;

use std::sync::Arc;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, Error};
use blob_store::BlobStore;

pub struct AppState {
    pub(crate) store: Arc<dyn BlobStore>,
    pub(crate) api_key: String,
    pub(crate) max_upload_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn BlobStore>, api_key: impl Into<String>, max_upload_bytes: usize) -> Self {
        Self { store, api_key: api_key.into(), max_upload_bytes }
    }
}

/// Builds the application: CORS headers outermost, then the API key gate, then the routes.
pub fn build_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .configure(services::blob_service::configure)
        .wrap(from_fn(auth::require_api_key))
        .wrap(cors::permissive())
        .wrap(Logger::default())
}
