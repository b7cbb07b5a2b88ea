use std::fmt;
use crate::errors::{StoreError, StoreResult};

const MAX_NAME_LEN: usize = 255;

/// A blob key that is known to stay inside the flat store directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobName(String);

impl BlobName {
    pub fn parse(raw: &str) -> StoreResult<Self> {
        let escapes = raw.is_empty()
            || raw == "."
            || raw == ".."
            || raw.len() > MAX_NAME_LEN
            || raw.chars().any(|c| c == '/' || c == '\\' || c.is_control());
        if escapes {
            return Err(StoreError::InvalidName(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BlobName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
