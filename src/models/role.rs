use serde::{Deserialize, Serialize};

/// Access profile for an operator of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full access, including record mutations
    Admin,
    /// Read and compute only
    Client,
}

/// The closed set of operations the tool exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    EvaluateGrowth,
    EstimateStock,
    ViewSummary,
    ViewReference,
    CalculateMortality,
    CalculateRevenue,
    LogMortality,
    LogShipment,
    ConvertRecords,
}

impl Role {
    /// Whether this role may perform the given operation.
    pub fn permits(&self, op: Operation) -> bool {
        match self {
            Role::Admin => true,
            Role::Client => match op {
                Operation::EvaluateGrowth
                | Operation::EstimateStock
                | Operation::ViewSummary
                | Operation::ViewReference
                | Operation::CalculateMortality
                | Operation::CalculateRevenue => true,
                Operation::LogMortality | Operation::LogShipment | Operation::ConvertRecords => {
                    false
                }
            },
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Client => write!(f, "client"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::HerdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "client" => Ok(Role::Client),
            _ => Err(crate::error::HerdError::ParseError(format!(
                "Unknown role: '{s}'"
            ))),
        }
    }
}
