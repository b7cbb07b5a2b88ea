use std::cell::Cell;
use std::rc::Rc;
use actix_multipart::Multipart;
use actix_web::error::PayloadError;
use actix_web::http::header;
use actix_web::web::{Bytes, Data};
use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use blob_store::{BlobName, StoreError, Upserted};
use futures_util::{StreamExt, TryStreamExt};

use crate::errors::{BlobServiceErr, APP_TYPE_TEXT};
use crate::AppState;

pub const APP_TYPE_JSON: &str = "application/json";
pub const APP_TYPE_IMAGE: &str = "image/jpg";
pub const IMAGE_FIELD: &str = "image";

/// The `image` part of a multipart upload.
struct ImageUpload {
    name: BlobName,
    data: Vec<u8>,
}

/// Pulls the `image` file part out of a multipart body. Every raw body byte,
/// boundaries and part headers included, counts against `limit`.
async fn read_image_upload(
    req: &HttpRequest,
    payload: web::Payload,
    limit: usize,
) -> Result<ImageUpload, BlobServiceErr> {
    let declared = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    if declared.is_some_and(|len| len > limit) {
        return Err(BlobServiceErr::PayloadTooLarge(limit));
    }

    let overflowed = Rc::new(Cell::new(false));
    let capped = {
        let overflowed = overflowed.clone();
        let mut seen = 0usize;
        payload.map(move |chunk: Result<Bytes, PayloadError>| {
            let chunk = chunk?;
            seen += chunk.len();
            if seen > limit {
                overflowed.set(true);
                return Err(PayloadError::Overflow);
            }
            Ok(chunk)
        })
    };

    let (filename, data) = match take_image_part(Multipart::new(req.headers(), capped)).await {
        Err(BlobServiceErr::Multipart(_)) if overflowed.get() => {
            return Err(BlobServiceErr::PayloadTooLarge(limit))
        }
        other => other?,
    };
    let name = BlobName::parse(&filename)?;
    Ok(ImageUpload { name, data })
}

/// First `image` part that carries a filename; other parts are drained and dropped.
async fn take_image_part(mut multipart: Multipart) -> Result<(String, Vec<u8>), BlobServiceErr> {
    let mut found: Option<(String, Vec<u8>)> = None;
    while let Some(mut field) = multipart.try_next().await? {
        let filename = if found.is_none() && field.name() == Some(IMAGE_FIELD) {
            field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_owned)
        } else {
            None
        };

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if filename.is_some() {
                data.extend_from_slice(&chunk);
            }
        }
        if let Some(filename) = filename {
            found = Some((filename, data));
        }
    }
    found.ok_or(BlobServiceErr::MissingImage)
}

fn text_ok(message: String) -> HttpResponse {
    HttpResponse::Ok().content_type(APP_TYPE_TEXT).body(message)
}

#[post("/upload")]
async fn upload(
    req: HttpRequest,
    payload: web::Payload,
    shared_state: Data<AppState>,
) -> Result<HttpResponse, BlobServiceErr> {
    let ImageUpload { name, data } =
        read_image_upload(&req, payload, shared_state.max_upload_bytes).await?;

    let store = shared_state.store.clone();
    let target = name.clone();
    web::block(move || store.put(&target, &data))
        .await?
        .inspect_err(|e| tracing::error!("failed to store {}: {}", name, e))?;

    tracing::info!("uploaded {}", name);
    Ok(text_ok(format!("File - {} was uploaded successfully", name)))
}

#[post("/update")]
async fn update(
    req: HttpRequest,
    payload: web::Payload,
    shared_state: Data<AppState>,
) -> Result<HttpResponse, BlobServiceErr> {
    let ImageUpload { name, data } =
        read_image_upload(&req, payload, shared_state.max_upload_bytes).await?;

    let store = shared_state.store.clone();
    let target = name.clone();
    let outcome = web::block(move || store.upsert(&target, &data))
        .await?
        .inspect_err(|e| tracing::error!("failed to update {}: {}", name, e))?;

    tracing::info!("upserted {} ({:?})", name, outcome);
    let message = match outcome {
        Upserted::Created => format!("File - {} - didn't exist, so the file was uploaded successfully", name),
        Upserted::Updated => format!("File - {} was updated successfully", name),
    };
    Ok(text_ok(message))
}

#[delete("/delete/{name}")]
async fn delete_blob(
    from_path: web::Path<String>,
    shared_state: Data<AppState>,
) -> Result<HttpResponse, BlobServiceErr> {
    let name = BlobName::parse(&from_path)?;

    let store = shared_state.store.clone();
    let target = name.clone();
    web::block(move || store.delete(&target))
        .await?
        .map_err(|e| {
            tracing::warn!("failed to delete {}: {}", name, e);
            BlobServiceErr::Removal(e)
        })?;

    tracing::info!("deleted {}", name);
    Ok(HttpResponse::Ok()
        .content_type(APP_TYPE_TEXT)
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "DELETE"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .body(format!("File - {} was deleted successfully", name)))
}

#[get("/fetch/{name}")]
async fn fetch(
    from_path: web::Path<String>,
    shared_state: Data<AppState>,
) -> Result<HttpResponse, BlobServiceErr> {
    let name = BlobName::parse(&from_path)?;

    let store = shared_state.store.clone();
    let target = name.clone();
    let content = match web::block(move || store.get(&target)).await? {
        Ok(content) => content,
        Err(StoreError::NotFound(missing)) => return Err(BlobServiceErr::BlobMissing(missing)),
        Err(e) => {
            tracing::error!("failed to read {}: {}", name, e);
            return Err(e.into());
        }
    };

    Ok(HttpResponse::Ok()
        .content_type(APP_TYPE_IMAGE)
        .insert_header((header::CONTENT_DISPOSITION, format!("attachment;filename=\"{}\"", name)))
        .body(content))
}

#[get("/fetchlist")]
async fn fetch_list(shared_state: Data<AppState>) -> Result<HttpResponse, BlobServiceErr> {
    let store = shared_state.store.clone();
    let names = web::block(move || store.list())
        .await?
        .inspect_err(|e| tracing::error!("failed to list blobs: {}", e))?;

    let body = serde_json::to_vec(&names).map_err(|e| StoreError::Io(e.into()))?;
    Ok(HttpResponse::Ok().content_type(APP_TYPE_JSON).body(body))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(upload)
        .service(update)
        .service(delete_blob)
        .service(fetch)
        .service(fetch_list);
}
