//! File Data
//!
//! Owned byte buffer holding the raw contents of a property file.

use std::path::Path;
use tracing::debug;

use crate::avd::AvdError;

/// Raw file contents, either read from disk or copied from memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileData {
    data: Vec<u8>,
}

impl FileData {
    /// Copy a block of memory
    pub fn from_memory(data: impl AsRef<[u8]>) -> Self {
        Self {
            data: data.as_ref().to_vec(),
        }
    }

    /// Read a whole file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, AvdError> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        debug!("Read {} bytes from {:?}", data.len(), path);
        Ok(Self { data })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for FileData {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_memory() {
        let fd = FileData::from_memory("abc=1\n");
        assert_eq!(fd.len(), 6);
        assert_eq!(fd.as_bytes(), b"abc=1\n");
        assert!(FileData::default().is_empty());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.prop");
        std::fs::write(&path, "ro.build.version.sdk=21\n").unwrap();

        let fd = tokio_test::block_on(FileData::from_file(&path)).unwrap();
        assert_eq!(fd.as_bytes(), b"ro.build.version.sdk=21\n");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = tokio_test::block_on(FileData::from_file(dir.path().join("missing.prop")));
        assert!(matches!(result, Err(AvdError::Io(_))));
    }
}
