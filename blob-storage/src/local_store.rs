use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use crate::errors::{StoreError, StoreResult};
use crate::name::BlobName;
use crate::name_locks::NameLocks;
use crate::store::{BlobStore, Upserted};

/// A `BlobStore` that keeps one file per blob in a single flat directory.
#[derive(Debug)]
pub struct LocalFileBlobStore {
    base_path: PathBuf,
    locks: NameLocks,
}

impl LocalFileBlobStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into(), locks: NameLocks::new() }
    }

    /// Like `new`, but creates the directory first if it is missing.
    pub fn open(base_path: impl Into<PathBuf>) -> io::Result<Self> {
        let store = Self::new(base_path);
        fs::create_dir_all(&store.base_path)?;
        Ok(store)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_of(&self, name: &BlobName) -> PathBuf {
        self.base_path.join(name.as_str())
    }

    fn write_new(&self, name: &BlobName, data: &[u8]) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path_of(name))?;
        file.write_all(data)?;
        Ok(())
    }
}

impl BlobStore for LocalFileBlobStore {
    fn put(&self, name: &BlobName, data: &[u8]) -> StoreResult<()> {
        self.locks.with_lock(name.as_str(), || self.write_new(name, data))
    }

    fn upsert(&self, name: &BlobName, data: &[u8]) -> StoreResult<Upserted> {
        self.locks.with_lock(name.as_str(), || {
            if !self.exists(name) {
                self.write_new(name, data)?;
                return Ok(Upserted::Created);
            }
            // In place, no truncate: a shorter payload leaves the old tail behind.
            let mut file = OpenOptions::new().read(true).write(true).open(self.path_of(name))?;
            file.write_all(data)?;
            Ok(Upserted::Updated)
        })
    }

    fn exists(&self, name: &BlobName) -> bool {
        self.path_of(name).exists()
    }

    fn get(&self, name: &BlobName) -> StoreResult<Vec<u8>> {
        self.locks.with_lock(name.as_str(), || {
            fs::read(self.path_of(name)).map_err(|e| StoreError::from_io(name.as_str(), e))
        })
    }

    fn delete(&self, name: &BlobName) -> StoreResult<()> {
        self.locks.with_lock(name.as_str(), || {
            fs::remove_file(self.path_of(name)).map_err(|e| StoreError::from_io(name.as_str(), e))
        })
    }

    fn list(&self) -> StoreResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        tracing::debug!("listed {} entries under {}", names.len(), self.base_path.display());
        Ok(names)
    }
}
