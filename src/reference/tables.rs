use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HerdError;
use crate::reference::bracket::{validate_table, AgeBracket, ConsumptionReference, GrowthReference};

/// The pair of reference tables the analyzers run against. `Default` gives
/// the built-in tables; custom tables can be loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTables {
    #[serde(default = "default_growth_table")]
    pub growth: Vec<GrowthReference>,
    #[serde(default = "default_consumption_table")]
    pub consumption: Vec<ConsumptionReference>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            growth: default_growth_table(),
            consumption: default_consumption_table(),
        }
    }
}

impl ReferenceTables {
    /// Parse tables from TOML. Omitted tables fall back to the built-ins.
    pub fn from_toml_str(content: &str) -> Result<Self, HerdError> {
        let tables: ReferenceTables = toml::from_str(content)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HerdError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Check bracket ordering of both tables.
    pub fn validate(&self) -> Result<(), HerdError> {
        validate_table(&self.growth, "growth")?;
        validate_table(&self.consumption, "consumption")?;
        Ok(())
    }
}

fn growth_row(
    start: i32,
    end: i32,
    start_kg: f64,
    end_kg: f64,
    gain_g: f64,
    estimated: bool,
) -> GrowthReference {
    GrowthReference {
        bracket: AgeBracket::new(start, end),
        start_weight_kg: start_kg,
        end_weight_kg: end_kg,
        expected_gain_grams: gain_g,
        estimated,
    }
}

/// Built-in daily weight gain table for growing pigs, 15-180 days of age.
/// Rows past day 147 are extrapolated from the measured series.
pub fn default_growth_table() -> Vec<GrowthReference> {
    vec![
        growth_row(15, 21, 5.4, 6.4, 143.0, false),
        growth_row(21, 28, 6.4, 8.4, 250.0, false),
        growth_row(28, 35, 8.4, 11.0, 274.0, false),
        growth_row(35, 42, 11.0, 14.1, 302.0, false),
        growth_row(42, 49, 14.1, 17.6, 330.0, false),
        growth_row(49, 56, 17.6, 21.6, 360.0, false),
        growth_row(56, 63, 21.6, 26.0, 390.0, false),
        growth_row(63, 70, 26.0, 30.7, 418.0, false),
        growth_row(70, 77, 30.7, 35.7, 445.0, false),
        growth_row(77, 84, 35.7, 41.1, 472.0, false),
        growth_row(84, 91, 41.1, 46.8, 498.0, false),
        growth_row(91, 98, 46.8, 52.8, 524.0, false),
        growth_row(98, 105, 52.8, 59.1, 549.0, false),
        growth_row(105, 112, 59.1, 65.7, 574.0, false),
        growth_row(112, 119, 65.7, 72.5, 597.0, false),
        growth_row(119, 126, 72.5, 79.6, 620.0, false),
        growth_row(126, 133, 79.6, 86.8, 642.0, false),
        growth_row(133, 140, 86.8, 94.1, 662.0, false),
        growth_row(140, 147, 94.1, 101.5, 680.0, false),
        growth_row(147, 154, 101.5, 108.9, 700.0, true),
        growth_row(154, 161, 108.9, 116.3, 720.0, true),
        growth_row(161, 168, 116.3, 123.7, 740.0, true),
        growth_row(168, 175, 123.7, 131.0, 760.0, true),
        growth_row(175, 180, 131.0, 135.0, 780.0, true),
    ]
}

fn consumption_row(start: i32, end: i32, daily_kg: f64) -> ConsumptionReference {
    ConsumptionReference {
        bracket: AgeBracket::new(start, end),
        daily_kg,
    }
}

/// Built-in daily feed consumption table, 15-180 days of age plus a
/// fallback row for older animals.
pub fn default_consumption_table() -> Vec<ConsumptionReference> {
    vec![
        consumption_row(15, 21, 0.25),
        consumption_row(21, 28, 0.40),
        consumption_row(28, 35, 0.60),
        consumption_row(35, 42, 0.80),
        consumption_row(42, 49, 1.00),
        consumption_row(49, 56, 1.20),
        consumption_row(56, 63, 1.40),
        consumption_row(63, 70, 1.60),
        consumption_row(70, 77, 1.80),
        consumption_row(77, 84, 2.00),
        consumption_row(84, 91, 2.20),
        consumption_row(91, 98, 2.40),
        consumption_row(98, 105, 2.50),
        consumption_row(105, 112, 2.60),
        consumption_row(112, 119, 2.70),
        consumption_row(119, 126, 2.80),
        consumption_row(126, 133, 2.90),
        consumption_row(133, 140, 3.00),
        consumption_row(140, 147, 3.10),
        consumption_row(147, 154, 3.20),
        consumption_row(154, 161, 3.30),
        consumption_row(161, 168, 3.40),
        consumption_row(168, 175, 3.50),
        consumption_row(175, 180, 3.60),
        consumption_row(181, 999, 3.70),
    ]
}
