use serde::{Deserialize, Serialize};

use crate::models::FarmRecords;

/// Herd-level summary metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HerdMetrics {
    pub num_sheds: usize,
    pub num_silos: usize,
    pub num_batches: usize,
    pub active_batches: usize,
    /// Current head count
    pub total_animals: u32,
    /// Head count at entry
    pub initial_animals: u32,
    /// Losses logged across all batches
    pub total_losses: u32,
    /// Animals shipped across all batches
    pub total_shipped: u32,
    /// Logged losses as a percentage of the initial count
    pub mortality_rate_percent: f64,
    /// Feed on hand across all silos (kg)
    pub total_feed_kg: f64,
}

/// Compute herd-level metrics from a farm record set.
pub fn compute_herd_metrics(records: &FarmRecords) -> HerdMetrics {
    let initial_animals = records.initial_animals();
    let total_losses: u32 = records.mortality_log.iter().map(|e| e.quantity).sum();
    let total_shipped: u32 = records.shipment_log.iter().map(|e| e.animal_quantity).sum();
    let mortality_rate_percent = if initial_animals > 0 {
        total_losses as f64 / initial_animals as f64 * 100.0
    } else {
        0.0
    };

    HerdMetrics {
        num_sheds: records.sheds.len(),
        num_silos: records.silos.len(),
        num_batches: records.num_batches(),
        active_batches: records.active_batches().count(),
        total_animals: records.total_animals(),
        initial_animals,
        total_losses,
        total_shipped,
        mortality_rate_percent,
        total_feed_kg: records.total_feed_kg(),
    }
}
