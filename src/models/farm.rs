use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Batch, MortalityEntry, Shed, ShipmentEntry, Silo};
use crate::error::HerdError;

/// The complete record set for one farm: housing, feed storage, batches,
/// and the mortality/shipment logs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmRecords {
    /// Name or identifier for this farm
    pub name: String,
    pub sheds: Vec<Shed>,
    pub silos: Vec<Silo>,
    pub batches: Vec<Batch>,
    pub mortality_log: Vec<MortalityEntry>,
    pub shipment_log: Vec<ShipmentEntry>,
}

impl FarmRecords {
    /// Create an empty record set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Batches that still hold animals.
    pub fn active_batches(&self) -> impl Iterator<Item = &Batch> {
        self.batches.iter().filter(|b| b.is_active())
    }

    pub fn num_batches(&self) -> usize {
        self.batches.len()
    }

    /// Current head count across all batches.
    pub fn total_animals(&self) -> u32 {
        self.batches.iter().map(|b| b.current_quantity).sum()
    }

    /// Head count at entry across all batches.
    pub fn initial_animals(&self) -> u32 {
        self.batches.iter().map(|b| b.initial_quantity).sum()
    }

    /// Feed on hand across all silos (kg).
    pub fn total_feed_kg(&self) -> f64 {
        self.silos.iter().map(|s| s.current_feed_kg).sum()
    }

    pub fn batch(&self, batch_id: &str) -> Option<&Batch> {
        self.batches.iter().find(|b| b.id == batch_id)
    }

    fn batch_mut(&mut self, batch_id: &str) -> Result<&mut Batch, HerdError> {
        self.batches
            .iter_mut()
            .find(|b| b.id == batch_id)
            .ok_or_else(|| HerdError::ValidationError(format!("Unknown batch: '{batch_id}'")))
    }

    /// Append a mortality entry and decrement the batch head count.
    pub fn record_mortality(&mut self, entry: MortalityEntry) -> Result<(), HerdError> {
        entry.validate()?;
        let batch = self.batch_mut(&entry.batch_id)?;
        if entry.quantity > batch.current_quantity {
            return Err(HerdError::ValidationError(format!(
                "Batch {}: cannot log {} losses, only {} animals remain",
                batch.id, entry.quantity, batch.current_quantity
            )));
        }
        batch.current_quantity -= entry.quantity;
        debug!(
            batch = %batch.id,
            losses = entry.quantity,
            remaining = batch.current_quantity,
            "recorded mortality"
        );
        self.mortality_log.push(entry);
        Ok(())
    }

    /// Append a shipment entry and decrement the batch head count.
    pub fn record_shipment(&mut self, entry: ShipmentEntry) -> Result<(), HerdError> {
        entry.validate()?;
        let batch = self.batch_mut(&entry.batch_id)?;
        if entry.animal_quantity > batch.current_quantity {
            return Err(HerdError::ValidationError(format!(
                "Batch {}: cannot ship {} animals, only {} remain",
                batch.id, entry.animal_quantity, batch.current_quantity
            )));
        }
        batch.current_quantity -= entry.animal_quantity;
        debug!(
            batch = %batch.id,
            shipped = entry.animal_quantity,
            remaining = batch.current_quantity,
            "recorded shipment"
        );
        self.shipment_log.push(entry);
        Ok(())
    }

    /// Total logged losses for one batch.
    pub fn batch_losses(&self, batch_id: &str) -> u32 {
        self.mortality_log
            .iter()
            .filter(|e| e.batch_id == batch_id)
            .map(|e| e.quantity)
            .sum()
    }

    /// Total logged shipments for one batch.
    pub fn batch_shipped(&self, batch_id: &str) -> u32 {
        self.shipment_log
            .iter()
            .filter(|e| e.batch_id == batch_id)
            .map(|e| e.animal_quantity)
            .sum()
    }

    /// Validate every record in the set.
    pub fn validate(&self) -> Result<(), HerdError> {
        for batch in &self.batches {
            batch.validate()?;
        }
        for silo in &self.silos {
            silo.validate()?;
        }
        for entry in &self.mortality_log {
            entry.validate()?;
        }
        for entry in &self.shipment_log {
            entry.validate()?;
        }
        Ok(())
    }
}
