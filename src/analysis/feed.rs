use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Batch;
use crate::reference::{find_reference, ConsumptionReference};

/// Projected feed-stock duration for the active herd.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockEstimate {
    /// Expected herd-wide feed intake (kg/day)
    pub daily_consumption_kg: f64,
    /// Days of supply remaining; infinite when nothing consumes
    pub estimated_days: f64,
    /// Animals contributing to the estimate
    pub total_animals: u32,
    /// Batches that matched a consumption bracket
    pub batches_counted: usize,
    /// Active batches outside table coverage (excluded, not an error)
    pub batches_skipped: usize,
}

impl StockEstimate {
    /// Whether the supply never runs out at current consumption.
    pub fn is_unbounded(&self) -> bool {
        self.estimated_days.is_infinite()
    }
}

/// Estimate how long the feed on hand lasts, given every active batch's
/// expected daily intake on `as_of`.
///
/// Batches with no matching consumption bracket contribute nothing and are
/// skipped silently. With no contributing batch the estimate reports zero
/// consumption and an unbounded duration rather than dividing by zero.
pub fn estimate_stock_duration(
    batches: &[Batch],
    table: &[ConsumptionReference],
    total_feed_kg: f64,
    as_of: NaiveDate,
) -> StockEstimate {
    let mut daily_consumption_kg = 0.0;
    let mut total_animals: u32 = 0;
    let mut batches_counted = 0;
    let mut batches_skipped = 0;

    for batch in batches.iter().filter(|b| b.current_quantity > 0) {
        let age = batch.age_on(as_of);
        match find_reference(table, age) {
            Some(row) => {
                daily_consumption_kg += batch.current_quantity as f64 * row.daily_kg;
                total_animals += batch.current_quantity;
                batches_counted += 1;
            }
            None => {
                debug!(
                    batch = %batch.id,
                    age_days = age,
                    "no consumption bracket for batch; excluded from estimate"
                );
                batches_skipped += 1;
            }
        }
    }

    let estimated_days = if daily_consumption_kg > 0.0 {
        total_feed_kg / daily_consumption_kg
    } else {
        f64::INFINITY
    };

    StockEstimate {
        daily_consumption_kg,
        estimated_days,
        total_animals,
        batches_counted,
        batches_skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;
    use crate::reference::{default_consumption_table, AgeBracket};
    use assert_approx_eq::assert_approx_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_batch(id: &str, entry: NaiveDate, initial_age: i32, quantity: u32) -> Batch {
        Batch {
            id: id.to_string(),
            shed_id: "shed-1".to_string(),
            name: format!("Batch {id}"),
            entry_date: entry,
            initial_age_days: initial_age,
            initial_weight_kg: 6.4,
            initial_quantity: quantity,
            current_quantity: quantity,
            sex: Sex::Mixed,
        }
    }

    #[test]
    fn test_single_batch_reference_case() {
        // 10 head in the 1.2 kg/day bracket (49-56 days), 120kg of feed.
        let entry = date(2024, 7, 1);
        let batch = make_batch("b1", entry, 50, 10);
        let estimate =
            estimate_stock_duration(&[batch], &default_consumption_table(), 120.0, entry);
        assert_approx_eq!(estimate.daily_consumption_kg, 12.0, 1e-9);
        assert_approx_eq!(estimate.estimated_days, 10.0, 1e-9);
        assert_eq!(estimate.total_animals, 10);
        assert_eq!(estimate.batches_counted, 1);
        assert!(!estimate.is_unbounded());
    }

    #[test]
    fn test_age_advances_with_calendar() {
        // Entry at 50 days; 14 days later the batch is 64 days old and
        // consumes from the 63-70 bracket (1.6 kg/day).
        let entry = date(2024, 7, 1);
        let batch = make_batch("b1", entry, 50, 10);
        let estimate = estimate_stock_duration(
            &[batch],
            &default_consumption_table(),
            160.0,
            date(2024, 7, 15),
        );
        assert_approx_eq!(estimate.daily_consumption_kg, 16.0, 1e-9);
        assert_approx_eq!(estimate.estimated_days, 10.0, 1e-9);
    }

    #[test]
    fn test_empty_batch_list_unbounded() {
        let estimate = estimate_stock_duration(
            &[],
            &default_consumption_table(),
            500.0,
            date(2024, 7, 1),
        );
        assert_eq!(estimate.daily_consumption_kg, 0.0);
        assert!(estimate.is_unbounded());
        assert!(!estimate.estimated_days.is_nan());
        assert_eq!(estimate.total_animals, 0);
    }

    #[test]
    fn test_empty_table_unbounded() {
        let entry = date(2024, 7, 1);
        let batch = make_batch("b1", entry, 50, 10);
        let table: Vec<ConsumptionReference> = Vec::new();
        let estimate = estimate_stock_duration(&[batch], &table, 500.0, entry);
        assert!(estimate.is_unbounded());
        assert_eq!(estimate.batches_skipped, 1);
    }

    #[test]
    fn test_depleted_batches_excluded() {
        let entry = date(2024, 7, 1);
        let mut batch = make_batch("b1", entry, 50, 10);
        batch.current_quantity = 0;
        let estimate =
            estimate_stock_duration(&[batch], &default_consumption_table(), 500.0, entry);
        assert_eq!(estimate.total_animals, 0);
        assert!(estimate.is_unbounded());
    }

    #[test]
    fn test_uncovered_batch_skipped_silently() {
        // One batch too young for the table, one in range.
        let entry = date(2024, 7, 1);
        let young = make_batch("young", entry, 5, 20);
        let grown = make_batch("grown", entry, 50, 10);
        let estimate = estimate_stock_duration(
            &[young, grown],
            &default_consumption_table(),
            120.0,
            entry,
        );
        assert_approx_eq!(estimate.daily_consumption_kg, 12.0, 1e-9);
        assert_eq!(estimate.total_animals, 10);
        assert_eq!(estimate.batches_counted, 1);
        assert_eq!(estimate.batches_skipped, 1);
    }

    #[test]
    fn test_old_animals_use_fallback_row() {
        let entry = date(2024, 7, 1);
        let batch = make_batch("b1", entry, 250, 10);
        let estimate =
            estimate_stock_duration(&[batch], &default_consumption_table(), 370.0, entry);
        assert_approx_eq!(estimate.daily_consumption_kg, 37.0, 1e-9);
        assert_approx_eq!(estimate.estimated_days, 10.0, 1e-9);
    }

    #[test]
    fn test_multiple_batches_sum() {
        let entry = date(2024, 7, 1);
        // 50 days -> 1.2 kg/day, 100 days -> 2.5 kg/day.
        let a = make_batch("a", entry, 50, 10);
        let b = make_batch("b", entry, 100, 20);
        let estimate = estimate_stock_duration(
            &[a, b],
            &default_consumption_table(),
            620.0,
            entry,
        );
        assert_approx_eq!(estimate.daily_consumption_kg, 62.0, 1e-9);
        assert_approx_eq!(estimate.estimated_days, 10.0, 1e-9);
        assert_eq!(estimate.total_animals, 30);
    }

    #[test]
    fn test_zero_feed_zero_days() {
        let entry = date(2024, 7, 1);
        let batch = make_batch("b1", entry, 50, 10);
        let estimate =
            estimate_stock_duration(&[batch], &default_consumption_table(), 0.0, entry);
        assert_approx_eq!(estimate.estimated_days, 0.0, 1e-9);
    }

    #[test]
    fn test_custom_table_bracket() {
        let entry = date(2024, 7, 1);
        let batch = make_batch("b1", entry, 30, 5);
        let table = vec![ConsumptionReference {
            bracket: AgeBracket::new(25, 40),
            daily_kg: 2.0,
        }];
        let estimate = estimate_stock_duration(&[batch], &table, 100.0, entry);
        assert_approx_eq!(estimate.daily_consumption_kg, 10.0, 1e-9);
        assert_approx_eq!(estimate.estimated_days, 10.0, 1e-9);
    }

    #[test]
    fn test_estimate_json_roundtrip() {
        let entry = date(2024, 7, 1);
        let batch = make_batch("b1", entry, 50, 10);
        let estimate =
            estimate_stock_duration(&[batch], &default_consumption_table(), 120.0, entry);
        let json = serde_json::to_string(&estimate).unwrap();
        let back: StockEstimate = serde_json::from_str(&json).unwrap();
        assert_approx_eq!(back.daily_consumption_kg, 12.0, 1e-9);
    }
}
