use actix_multipart::MultipartError;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use blob_store::StoreError;
use thiserror::Error;

pub const APP_TYPE_TEXT: &str = "text/plain; charset=utf-8";

#[derive(Debug, Error)]
pub enum BlobServiceErr {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Multipart(#[from] MultipartError),

    #[error("Image can't be fetched. Check if the parameter key is 'image'.")]
    MissingImage,

    #[error("request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    /// A read of a blob that is not there.
    #[error("blob not found: {0}")]
    BlobMissing(String),

    /// Any failed delete, including deleting something absent.
    #[error("{0}")]
    Removal(StoreError),

    #[error("{0}")]
    Storage(#[from] StoreError),

    #[error("storage worker was cancelled")]
    Blocking(#[from] BlockingError),
}

impl ResponseError for BlobServiceErr {
    fn status_code(&self) -> StatusCode {
        match self {
            BlobServiceErr::Unauthorized => StatusCode::UNAUTHORIZED,
            BlobServiceErr::Multipart(_)
            | BlobServiceErr::MissingImage
            | BlobServiceErr::PayloadTooLarge(_)
            | BlobServiceErr::BlobMissing(_) => StatusCode::BAD_REQUEST,
            BlobServiceErr::Storage(StoreError::InvalidName(_)) => StatusCode::BAD_REQUEST,
            BlobServiceErr::Removal(_)
            | BlobServiceErr::Storage(_)
            | BlobServiceErr::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(APP_TYPE_TEXT)
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_status_taxonomy() {
        assert_eq!(BlobServiceErr::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(BlobServiceErr::MissingImage.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BlobServiceErr::PayloadTooLarge(10).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BlobServiceErr::BlobMissing("a".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            BlobServiceErr::Removal(StoreError::NotFound("a".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            BlobServiceErr::Storage(StoreError::InvalidName("..".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BlobServiceErr::Storage(StoreError::Io(io::Error::other("disk"))).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_image_message() {
        assert_eq!(
            BlobServiceErr::MissingImage.to_string(),
            "Image can't be fetched. Check if the parameter key is 'image'."
        );
    }
}
