mod batch;
mod events;
mod farm;
mod role;
mod shed;
mod silo;

pub use batch::{Batch, Sex};
pub use events::{MortalityEntry, ShipmentEntry};
pub use farm::FarmRecords;
pub use role::{Operation, Role};
pub use shed::Shed;
pub use silo::{distribute_feed, Silo};
