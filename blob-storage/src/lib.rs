pub mod errors;
pub mod local_store;
pub mod name;
mod name_locks;
pub mod store;

pub use errors::{StoreError, StoreResult};
pub use local_store::LocalFileBlobStore;
pub use name::BlobName;
pub use store::{BlobStore, Upserted};
