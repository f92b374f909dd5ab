pub mod analysis;
pub mod error;
pub mod models;
pub mod reference;
pub mod report;
pub mod store;

pub use analysis::Analyzer;
pub use error::HerdError;
pub use models::{Batch, FarmRecords, Role, Sex, Shed, Silo};
pub use reference::{AgeBracket, ConsumptionReference, GrowthReference, ReferenceTables};
pub use store::{FarmStore, JsonFileStore};
