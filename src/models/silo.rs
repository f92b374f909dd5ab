use serde::{Deserialize, Serialize};

use crate::error::HerdError;

/// A feed storage unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Silo {
    pub id: String,
    /// Maximum holding capacity (kg); 0 means unknown
    pub capacity_kg: f64,
    /// Feed currently stored (kg)
    pub current_feed_kg: f64,
}

impl Silo {
    /// Fill level as a percentage of capacity, `None` when capacity is unknown.
    pub fn fill_percent(&self) -> Option<f64> {
        if self.capacity_kg > 0.0 {
            Some(self.current_feed_kg / self.capacity_kg * 100.0)
        } else {
            None
        }
    }

    /// Validate the record. Returns `HerdError::ValidationError` on failure.
    pub fn validate(&self) -> Result<(), HerdError> {
        if self.capacity_kg < 0.0 {
            return Err(HerdError::ValidationError(format!(
                "Silo {}: capacity must not be negative, got {}",
                self.id, self.capacity_kg
            )));
        }
        if self.current_feed_kg < 0.0 {
            return Err(HerdError::ValidationError(format!(
                "Silo {}: feed quantity must not be negative, got {}",
                self.id, self.current_feed_kg
            )));
        }
        if self.capacity_kg > 0.0 && self.current_feed_kg > self.capacity_kg {
            return Err(HerdError::ValidationError(format!(
                "Silo {}: feed {}kg exceeds capacity {}kg",
                self.id, self.current_feed_kg, self.capacity_kg
            )));
        }
        Ok(())
    }
}

/// Split a received feed delivery evenly across the given silos.
pub fn distribute_feed(silos: &mut [Silo], total_kg: f64) -> Result<(), HerdError> {
    if total_kg <= 0.0 {
        return Err(HerdError::ValidationError(format!(
            "received feed quantity must be positive, got {total_kg}"
        )));
    }
    if silos.is_empty() {
        return Err(HerdError::ValidationError(
            "no silos available for distribution".to_string(),
        ));
    }
    let per_silo = total_kg / silos.len() as f64;
    for silo in silos.iter_mut() {
        silo.current_feed_kg = per_silo;
    }
    Ok(())
}
