mod analyzer;
mod feed;
mod growth;
mod metrics;
mod mortality;
mod revenue;

pub use analyzer::Analyzer;
pub use feed::{estimate_stock_duration, StockEstimate};
pub use growth::{evaluate_growth, GrowthEvaluation, GrowthPolicy, GrowthStatus};
pub use metrics::{compute_herd_metrics, HerdMetrics};
pub use mortality::{batch_mortality, summarize_mortality, MortalitySummary};
pub use revenue::{estimate_revenue, ShipmentRevenue};
