//! JSON file storage.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{
    domain::products::records::ProductRecord,
    storage::{Storage, StorageError},
};

/// Stores the catalog as a single JSON array.
///
/// Every write replaces the whole file: the collection is written to a
/// temporary file in the same directory which is then renamed over the
/// target, so readers never observe a truncated file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Open storage backed by an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the file cannot be opened.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if let Err(source) = File::open(&path) {
            return Err(StorageError::Unavailable { path, source });
        }

        Ok(Self { path })
    }

    fn directory(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

impl Storage for JsonFileStorage {
    fn read(&self) -> Result<Vec<ProductRecord>, StorageError> {
        let file = File::open(&self.path).map_err(StorageError::Io)?;

        let products: Vec<ProductRecord> =
            serde_json::from_reader(BufReader::new(file)).map_err(StorageError::Decode)?;

        debug!(path = %self.path.display(), count = products.len(), "read products");

        Ok(products)
    }

    fn write(&self, products: &[ProductRecord]) -> Result<(), StorageError> {
        let mut file = NamedTempFile::new_in(self.directory()).map_err(StorageError::Io)?;

        {
            let mut writer = BufWriter::new(file.as_file_mut());

            serde_json::to_writer_pretty(&mut writer, products).map_err(StorageError::Encode)?;

            writer.write_all(b"\n").map_err(StorageError::Io)?;
            writer.flush().map_err(StorageError::Io)?;
        }

        file.as_file().sync_all().map_err(StorageError::Io)?;

        // The temporary file is created owner-only; keep the target's mode.
        let permissions = fs::metadata(&self.path)
            .map_err(StorageError::Io)?
            .permissions();

        fs::set_permissions(file.path(), permissions).map_err(StorageError::Io)?;

        file.persist(&self.path)
            .map_err(|error| StorageError::Io(error.error))?;

        debug!(path = %self.path.display(), count = products.len(), "wrote products");

        Ok(())
    }
}
