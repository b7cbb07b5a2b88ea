use std::sync::Arc;
use actix_web::{web, HttpServer};
use blob_storage_server::params::Args;
use blob_storage_server::{build_app, AppState};
use blob_store::LocalFileBlobStore;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = LocalFileBlobStore::open(&args.data_dir)?;
    tracing::info!("serving blobs from {}", store.base_path().display());

    let state = web::Data::new(AppState::new(Arc::new(store), args.api_key, args.max_upload_bytes));

    tracing::info!("listening on http://{}", args.http_addr);
    HttpServer::new(move || build_app(state.clone()))
        .bind(args.http_addr.clone())?
        .run()
        .await
}
