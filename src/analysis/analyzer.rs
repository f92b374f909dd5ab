use chrono::NaiveDate;

use crate::analysis::{
    batch_mortality, compute_herd_metrics, estimate_stock_duration, evaluate_growth,
    GrowthEvaluation, GrowthPolicy, HerdMetrics, MortalitySummary, StockEstimate,
};
use crate::error::HerdError;
use crate::models::FarmRecords;
use crate::reference::ReferenceTables;

/// Unified analysis API that groups the read-side operations over one
/// farm's records.
pub struct Analyzer<'a> {
    records: &'a FarmRecords,
    tables: &'a ReferenceTables,
    policy: GrowthPolicy,
}

impl<'a> Analyzer<'a> {
    /// Create a new Analyzer with the default growth policy.
    pub fn new(records: &'a FarmRecords, tables: &'a ReferenceTables) -> Self {
        Self {
            records,
            tables,
            policy: GrowthPolicy::default(),
        }
    }

    /// Override the growth classification policy.
    pub fn with_policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Herd-level summary metrics.
    pub fn herd_metrics(&self) -> HerdMetrics {
        compute_herd_metrics(self.records)
    }

    /// Evaluate a batch's daily gain from a weighing taken on `as_of`.
    ///
    /// Batches with no animals left, or weighed before their entry date,
    /// yield `InsufficientData`; there is no growth period to evaluate.
    pub fn evaluate_batch(
        &self,
        batch_id: &str,
        current_weight_kg: f64,
        as_of: NaiveDate,
    ) -> Result<GrowthEvaluation, HerdError> {
        let batch = self
            .records
            .batch(batch_id)
            .ok_or_else(|| HerdError::ValidationError(format!("Unknown batch: '{batch_id}'")))?;

        if !batch.is_active() {
            return Ok(GrowthEvaluation::insufficient_data(format!(
                "Batch {} has no animals left to evaluate",
                batch.id
            )));
        }
        if as_of < batch.entry_date {
            return Ok(GrowthEvaluation::insufficient_data(format!(
                "Weighing date precedes the entry date of batch {}",
                batch.id
            )));
        }

        Ok(evaluate_growth(
            &self.tables.growth,
            &self.policy,
            batch.age_on(as_of),
            current_weight_kg,
            None,
        ))
    }

    /// Evaluate a standalone age/weight pair without a batch record.
    pub fn evaluate_measurement(
        &self,
        age_days: i32,
        current_weight_kg: f64,
        start_weight_kg: Option<f64>,
    ) -> GrowthEvaluation {
        evaluate_growth(
            &self.tables.growth,
            &self.policy,
            age_days,
            current_weight_kg,
            start_weight_kg,
        )
    }

    /// Feed-stock duration across the active herd as of the given date.
    pub fn stock_duration(&self, as_of: NaiveDate) -> StockEstimate {
        estimate_stock_duration(
            &self.records.batches,
            &self.tables.consumption,
            self.records.total_feed_kg(),
            as_of,
        )
    }

    /// Mortality summary for one batch from the logged entries.
    pub fn batch_mortality(&self, batch_id: &str) -> Result<MortalitySummary, HerdError> {
        batch_mortality(self.records, batch_id)
    }
}
