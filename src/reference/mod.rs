mod bracket;
mod tables;

pub use bracket::{
    coverage_span, find_reference, validate_table, AgeBracket, AgeIndexed, ConsumptionReference,
    GrowthReference,
};
pub use tables::{default_consumption_table, default_growth_table, ReferenceTables};
