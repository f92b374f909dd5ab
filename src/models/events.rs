use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::HerdError;

/// A mortality log entry for a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortalityEntry {
    pub id: String,
    pub batch_id: String,
    pub date: NaiveDate,
    /// Animals lost
    pub quantity: u32,
    pub cause: Option<String>,
}

impl MortalityEntry {
    pub fn validate(&self) -> Result<(), HerdError> {
        if self.quantity == 0 {
            return Err(HerdError::ValidationError(format!(
                "Mortality entry {}: quantity must be positive",
                self.id
            )));
        }
        Ok(())
    }
}

/// A shipment log entry for a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentEntry {
    pub id: String,
    pub batch_id: String,
    pub date: NaiveDate,
    /// Animals shipped
    pub animal_quantity: u32,
    /// Trucks used
    pub truck_quantity: u32,
}

impl ShipmentEntry {
    pub fn validate(&self) -> Result<(), HerdError> {
        if self.animal_quantity == 0 {
            return Err(HerdError::ValidationError(format!(
                "Shipment entry {}: animal quantity must be positive",
                self.id
            )));
        }
        if self.truck_quantity == 0 {
            return Err(HerdError::ValidationError(format!(
                "Shipment entry {}: truck quantity must be positive",
                self.id
            )));
        }
        Ok(())
    }
}
