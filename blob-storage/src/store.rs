use crate::errors::StoreResult;
use crate::name::BlobName;

/// What an upsert did to the named blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Created,
    Updated,
}

/// Flat name -> bytes storage.
///
/// All calls block on I/O. Implementations must serialize operations on the
/// same name; operations on different names may run concurrently.
pub trait BlobStore: Send + Sync {
    /// Creates the blob or fully replaces an existing one.
    fn put(&self, name: &BlobName, data: &[u8]) -> StoreResult<()>;

    /// Creates the blob if absent, otherwise overwrites it in place starting at
    /// offset 0 without truncating. Old bytes past `data.len()` are kept.
    fn upsert(&self, name: &BlobName, data: &[u8]) -> StoreResult<Upserted>;

    fn exists(&self, name: &BlobName) -> bool;

    fn get(&self, name: &BlobName) -> StoreResult<Vec<u8>>;

    fn delete(&self, name: &BlobName) -> StoreResult<()>;

    /// Every entry in the namespace, in whatever order the backend enumerates them.
    fn list(&self) -> StoreResult<Vec<String>>;
}
