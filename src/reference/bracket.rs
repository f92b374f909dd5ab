use serde::{Deserialize, Serialize};

use crate::error::HerdError;

/// An inclusive age range in days. Adjacent table rows may share an
/// endpoint; lookups resolve shared days to the earlier row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBracket {
    pub start_day: i32,
    pub end_day: i32,
}

impl AgeBracket {
    pub fn new(start_day: i32, end_day: i32) -> Self {
        Self { start_day, end_day }
    }

    /// Whether the bracket contains the given age (inclusive both ends).
    pub fn contains(&self, age_days: i32) -> bool {
        age_days >= self.start_day && age_days <= self.end_day
    }
}

impl std::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} days", self.start_day, self.end_day)
    }
}

/// A row in the daily weight gain reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthReference {
    #[serde(flatten)]
    pub bracket: AgeBracket,
    /// Theoretical live weight at the start of the bracket (kg)
    pub start_weight_kg: f64,
    /// Theoretical live weight at the end of the bracket (kg)
    pub end_weight_kg: f64,
    /// Expected daily gain over the bracket (grams/day)
    pub expected_gain_grams: f64,
    /// Extrapolated rather than measured source data
    #[serde(default)]
    pub estimated: bool,
}

/// A row in the daily feed consumption reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionReference {
    #[serde(flatten)]
    pub bracket: AgeBracket,
    /// Expected feed intake per animal (kg/day)
    pub daily_kg: f64,
}

/// Anything indexed by an age bracket, so both reference tables share one
/// lookup path.
pub trait AgeIndexed {
    fn bracket(&self) -> AgeBracket;
}

impl AgeIndexed for GrowthReference {
    fn bracket(&self) -> AgeBracket {
        self.bracket
    }
}

impl AgeIndexed for ConsumptionReference {
    fn bracket(&self) -> AgeBracket {
        self.bracket
    }
}

/// Find the first row whose bracket contains the given age.
///
/// Returns `None` for ages outside all brackets, including negative ages.
///
/// # Examples
///
/// ```
/// use swine_herd_analyzer::reference::{default_growth_table, find_reference};
///
/// let table = default_growth_table();
/// let row = find_reference(&table, 21).unwrap();
/// assert_eq!(row.bracket.start_day, 15);
/// assert!(find_reference(&table, 400).is_none());
/// assert!(find_reference(&table, -3).is_none());
/// ```
pub fn find_reference<T: AgeIndexed>(table: &[T], age_days: i32) -> Option<&T> {
    table.iter().find(|row| row.bracket().contains(age_days))
}

/// The overall span covered by a table, for not-found guidance messages.
pub fn coverage_span<T: AgeIndexed>(table: &[T]) -> Option<AgeBracket> {
    let first = table.first()?.bracket();
    let last = table.last()?.bracket();
    Some(AgeBracket::new(first.start_day, last.end_day))
}

/// Validate table ordering: each bracket well-formed, rows sorted by start
/// day, and no interior overlap (a shared endpoint between neighbors is
/// allowed and resolves to the earlier row).
pub fn validate_table<T: AgeIndexed>(table: &[T], name: &str) -> Result<(), HerdError> {
    if table.is_empty() {
        return Err(HerdError::ValidationError(format!(
            "{name} reference table is empty"
        )));
    }
    let mut prev: Option<AgeBracket> = None;
    for row in table {
        let bracket = row.bracket();
        if bracket.start_day > bracket.end_day {
            return Err(HerdError::ValidationError(format!(
                "{name} table: bracket {} has start after end",
                bracket
            )));
        }
        if let Some(prev) = prev {
            if bracket.start_day < prev.end_day {
                return Err(HerdError::ValidationError(format!(
                    "{name} table: bracket {} overlaps previous bracket {}",
                    bracket, prev
                )));
            }
        }
        prev = Some(bracket);
    }
    Ok(())
}
