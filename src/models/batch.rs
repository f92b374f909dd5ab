use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sex composition of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Mixed,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
            Sex::Mixed => write!(f, "Mixed"),
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = crate::error::HerdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            "mixed" | "x" => Ok(Sex::Mixed),
            _ => Err(crate::error::HerdError::ParseError(format!(
                "Unknown sex: '{s}'"
            ))),
        }
    }
}

/// A cohort of animals tracked together from entry to exit, sharing an
/// entry date, initial age, and initial weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// Unique batch identifier
    pub id: String,
    /// Shed this batch is housed in
    pub shed_id: String,
    /// Display name (e.g. "Batch 2024-07-A")
    pub name: String,
    /// Date the batch entered the shed
    pub entry_date: NaiveDate,
    /// Age in days at entry
    pub initial_age_days: i32,
    /// Mean live weight at entry (kg)
    pub initial_weight_kg: f64,
    /// Head count at entry
    pub initial_quantity: u32,
    /// Head count after mortality and shipments
    pub current_quantity: u32,
    pub sex: Sex,
}

impl Batch {
    /// Age in days on the given date. Dates before entry clamp to the
    /// initial age rather than going backwards.
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        let elapsed = (date - self.entry_date).num_days().max(0);
        self.initial_age_days + elapsed as i32
    }

    /// Whether the batch still holds animals.
    pub fn is_active(&self) -> bool {
        self.current_quantity > 0
    }

    /// Animals lost or shipped since entry.
    pub fn departed(&self) -> u32 {
        self.initial_quantity.saturating_sub(self.current_quantity)
    }

    /// Validate the record. Returns `HerdError::ValidationError` on failure.
    pub fn validate(&self) -> Result<(), crate::error::HerdError> {
        if self.id.trim().is_empty() {
            return Err(crate::error::HerdError::ValidationError(
                "batch id must not be empty".to_string(),
            ));
        }
        if self.initial_age_days <= 0 {
            return Err(crate::error::HerdError::ValidationError(format!(
                "Batch {}: initial age must be positive, got {}",
                self.id, self.initial_age_days
            )));
        }
        if self.initial_weight_kg <= 0.0 {
            return Err(crate::error::HerdError::ValidationError(format!(
                "Batch {}: initial weight must be positive, got {}",
                self.id, self.initial_weight_kg
            )));
        }
        if self.initial_quantity == 0 {
            return Err(crate::error::HerdError::ValidationError(format!(
                "Batch {}: initial quantity must be positive",
                self.id
            )));
        }
        if self.current_quantity > self.initial_quantity {
            return Err(crate::error::HerdError::ValidationError(format!(
                "Batch {}: current quantity {} exceeds initial quantity {}",
                self.id, self.current_quantity, self.initial_quantity
            )));
        }
        Ok(())
    }
}
