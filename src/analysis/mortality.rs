use serde::{Deserialize, Serialize};

use crate::error::HerdError;
use crate::models::FarmRecords;

/// Head-count and loss-rate summary for a group of animals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortalitySummary {
    pub initial: u32,
    pub losses: u32,
    pub current: u32,
    /// Losses as a percentage of the initial count
    pub rate_percent: f64,
}

/// Summarize mortality for a group given its starting count and losses.
pub fn summarize_mortality(initial: u32, losses: u32) -> Result<MortalitySummary, HerdError> {
    if initial == 0 {
        return Err(HerdError::ValidationError(
            "initial head count must be positive".to_string(),
        ));
    }
    if losses > initial {
        return Err(HerdError::ValidationError(format!(
            "losses ({losses}) cannot exceed the initial count ({initial})"
        )));
    }
    Ok(MortalitySummary {
        initial,
        losses,
        current: initial - losses,
        rate_percent: losses as f64 / initial as f64 * 100.0,
    })
}

/// Summarize logged mortality for one batch in the records.
pub fn batch_mortality(records: &FarmRecords, batch_id: &str) -> Result<MortalitySummary, HerdError> {
    let batch = records
        .batch(batch_id)
        .ok_or_else(|| HerdError::ValidationError(format!("Unknown batch: '{batch_id}'")))?;
    summarize_mortality(batch.initial_quantity, records.batch_losses(batch_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Batch, MortalityEntry, Sex};
    use assert_approx_eq::assert_approx_eq;
    use chrono::NaiveDate;

    #[test]
    fn test_summarize_basic() {
        let summary = summarize_mortality(200, 5).unwrap();
        assert_eq!(summary.current, 195);
        assert_approx_eq!(summary.rate_percent, 2.5, 1e-9);
    }

    #[test]
    fn test_summarize_no_losses() {
        let summary = summarize_mortality(100, 0).unwrap();
        assert_eq!(summary.current, 100);
        assert_eq!(summary.rate_percent, 0.0);
    }

    #[test]
    fn test_summarize_total_loss() {
        let summary = summarize_mortality(50, 50).unwrap();
        assert_eq!(summary.current, 0);
        assert_approx_eq!(summary.rate_percent, 100.0, 1e-9);
    }

    #[test]
    fn test_summarize_zero_initial_rejected() {
        assert!(summarize_mortality(0, 0).is_err());
    }

    #[test]
    fn test_summarize_losses_exceed_initial_rejected() {
        let err = summarize_mortality(10, 11).unwrap_err();
        assert!(err.to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_batch_mortality_from_log() {
        let mut records = FarmRecords::new("Farm");
        records.batches.push(Batch {
            id: "b1".to_string(),
            shed_id: "shed-1".to_string(),
            name: "Batch A".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            initial_age_days: 21,
            initial_weight_kg: 6.4,
            initial_quantity: 100,
            current_quantity: 100,
            sex: Sex::Mixed,
        });
        records
            .record_mortality(MortalityEntry {
                id: "m1".to_string(),
                batch_id: "b1".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
                quantity: 4,
                cause: None,
            })
            .unwrap();

        let summary = batch_mortality(&records, "b1").unwrap();
        assert_eq!(summary.losses, 4);
        assert_eq!(summary.current, 96);
        assert_approx_eq!(summary.rate_percent, 4.0, 1e-9);
    }

    #[test]
    fn test_batch_mortality_unknown_batch() {
        let records = FarmRecords::new("Farm");
        assert!(batch_mortality(&records, "nope").is_err());
    }
}
