mod activity;
mod csv_store;
mod json_store;

use crate::error::HerdError;
use crate::models::FarmRecords;

pub use activity::{ActivityEntry, ActivityKind, ActivityLog, MAX_LOG_ENTRIES};
pub use csv_store::{export_batches_csv, import_batches_csv};
pub use json_store::JsonFileStore;

/// Persistence seam for farm records. The analysis layer never touches
/// storage; callers load, compute, and save at the edges.
pub trait FarmStore {
    /// Load the record set; a store with no data yields empty records.
    fn load(&self) -> Result<FarmRecords, HerdError>;

    /// Persist the record set.
    fn save(&self, records: &FarmRecords) -> Result<(), HerdError>;
}
