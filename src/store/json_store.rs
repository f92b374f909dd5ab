use std::path::{Path, PathBuf};

use tracing::debug;

use super::FarmStore;
use crate::error::HerdError;
use crate::models::FarmRecords;

/// JSON-file-backed record store. Loading a path that does not exist yet
/// yields an empty record set rather than an error.
pub struct JsonFileStore {
    path: PathBuf,
    pub pretty: bool,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FarmStore for JsonFileStore {
    fn load(&self) -> Result<FarmRecords, HerdError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no record file; starting empty");
            return Ok(FarmRecords::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let records: FarmRecords = serde_json::from_str(&content)?;
        records.validate()?;
        debug!(
            path = %self.path.display(),
            batches = records.num_batches(),
            "loaded farm records"
        );
        Ok(records)
    }

    fn save(&self, records: &FarmRecords) -> Result<(), HerdError> {
        let content = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "saved farm records");
        Ok(())
    }
}
