use serde::{Deserialize, Serialize};

use crate::reference::{coverage_span, find_reference, AgeBracket, GrowthReference};

/// Tunable constants for growth classification: +/-10% bands by default,
/// with a one-day substitute period when the age sits exactly on a bracket
/// boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPolicy {
    /// Percent above reference beyond which performance is `AboveRange`
    pub above_threshold_percent: f64,
    /// Percent below reference beyond which performance is `BelowRange`
    pub below_threshold_percent: f64,
    /// Substitute elapsed days when the computed period is zero
    pub min_elapsed_days: i32,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            above_threshold_percent: 10.0,
            below_threshold_percent: 10.0,
            min_elapsed_days: 1,
        }
    }
}

/// Outcome category of a growth evaluation. Every failure mode is a
/// variant; evaluation never errors or panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStatus {
    WithinRange,
    AboveRange,
    BelowRange,
    NoReferenceForAge,
    InsufficientData,
    AwaitingInput,
    ComputationError,
}

impl std::fmt::Display for GrowthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthStatus::WithinRange => write!(f, "Within range"),
            GrowthStatus::AboveRange => write!(f, "Above range"),
            GrowthStatus::BelowRange => write!(f, "Below range"),
            GrowthStatus::NoReferenceForAge => write!(f, "No reference for age"),
            GrowthStatus::InsufficientData => write!(f, "Insufficient data"),
            GrowthStatus::AwaitingInput => write!(f, "Awaiting input"),
            GrowthStatus::ComputationError => write!(f, "Computation error"),
        }
    }
}

/// Result of comparing a batch's daily gain against the reference table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthEvaluation {
    pub status: GrowthStatus,
    /// Matched age bracket, when one was found
    pub bracket: Option<AgeBracket>,
    /// Computed daily gain (kg/day)
    pub actual_gain_kg: Option<f64>,
    /// Expected daily gain from the table (kg/day)
    pub reference_gain_kg: Option<f64>,
    /// Days of the bracket the evaluation covers
    pub elapsed_days: Option<i32>,
    /// Actual vs. reference, in percent
    pub percent_diff: Option<f64>,
    pub message: String,
}

impl GrowthEvaluation {
    fn short(status: GrowthStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            bracket: None,
            actual_gain_kg: None,
            reference_gain_kg: None,
            elapsed_days: None,
            percent_diff: None,
            message: message.into(),
        }
    }

    pub(crate) fn insufficient_data(message: impl Into<String>) -> Self {
        Self::short(GrowthStatus::InsufficientData, message)
    }
}

/// Evaluate daily weight gain for an animal of the given age against the
/// reference table.
///
/// `start_weight_kg` is the measured weight at the start of the matched
/// bracket; when `None`, the bracket's theoretical start weight is used.
///
/// # Examples
///
/// ```
/// use swine_herd_analyzer::analysis::{evaluate_growth, GrowthPolicy, GrowthStatus};
/// use swine_herd_analyzer::reference::default_growth_table;
///
/// let table = default_growth_table();
/// let eval = evaluate_growth(&table, &GrowthPolicy::default(), 21, 6.4, Some(5.4));
/// assert_eq!(eval.status, GrowthStatus::AboveRange);
/// assert_eq!(eval.elapsed_days, Some(6));
/// ```
pub fn evaluate_growth(
    table: &[GrowthReference],
    policy: &GrowthPolicy,
    age_days: i32,
    current_weight_kg: f64,
    start_weight_kg: Option<f64>,
) -> GrowthEvaluation {
    if age_days <= 0 || current_weight_kg <= 0.0 {
        return GrowthEvaluation::short(
            GrowthStatus::AwaitingInput,
            "Enter a positive age in days and a positive current weight",
        );
    }
    if let Some(start) = start_weight_kg {
        if start <= 0.0 {
            return GrowthEvaluation::short(
                GrowthStatus::AwaitingInput,
                "Start weight must be positive when provided",
            );
        }
    }

    let Some(row) = find_reference(table, age_days) else {
        let guidance = match coverage_span(table) {
            Some(span) => format!("the reference table covers {span}"),
            None => "the reference table is empty".to_string(),
        };
        return GrowthEvaluation::short(
            GrowthStatus::NoReferenceForAge,
            format!("No reference bracket for age {age_days} days; {guidance}"),
        );
    };

    let bracket = row.bracket;
    let elapsed = age_days - bracket.start_day;
    if elapsed < 0 {
        // Cannot occur after a successful lookup.
        return GrowthEvaluation::short(
            GrowthStatus::ComputationError,
            format!("Age {age_days} days precedes the matched bracket {bracket}"),
        );
    }

    let (elapsed, approximated) = if elapsed == 0 {
        (policy.min_elapsed_days.max(1), true)
    } else {
        (elapsed, false)
    };

    let start = start_weight_kg.unwrap_or(row.start_weight_kg);
    if current_weight_kg < start {
        return GrowthEvaluation {
            status: GrowthStatus::ComputationError,
            bracket: Some(bracket),
            actual_gain_kg: None,
            reference_gain_kg: Some(row.expected_gain_grams / 1000.0),
            elapsed_days: Some(elapsed),
            percent_diff: None,
            message: format!(
                "Current weight {current_weight_kg}kg is below the start weight {start}kg; \
                 check the measurements"
            ),
        };
    }

    let actual = (current_weight_kg - start) / elapsed as f64;
    let reference = row.expected_gain_grams / 1000.0;
    if reference <= 0.0 {
        // Data-quality guard; a well-formed table never hits this.
        return GrowthEvaluation::short(
            GrowthStatus::NoReferenceForAge,
            format!("Reference gain for bracket {bracket} is not positive"),
        );
    }

    let percent_diff = (actual - reference) / reference * 100.0;
    let status = if percent_diff > policy.above_threshold_percent {
        GrowthStatus::AboveRange
    } else if percent_diff < -policy.below_threshold_percent {
        GrowthStatus::BelowRange
    } else {
        GrowthStatus::WithinRange
    };

    let mut message = match status {
        GrowthStatus::AboveRange => format!(
            "Gain of {:.1} g/day is above the {:.1} g/day reference ({:+.1}%)",
            actual * 1000.0,
            reference * 1000.0,
            percent_diff
        ),
        GrowthStatus::BelowRange => format!(
            "Gain of {:.1} g/day is below the {:.1} g/day reference ({:+.1}%)",
            actual * 1000.0,
            reference * 1000.0,
            percent_diff
        ),
        _ => format!(
            "Gain of {:.1} g/day is within range of the {:.1} g/day reference ({:+.1}%)",
            actual * 1000.0,
            reference * 1000.0,
            percent_diff
        ),
    };
    if approximated {
        message.push_str("; period approximated to 1 day at the bracket boundary");
    }

    GrowthEvaluation {
        status,
        bracket: Some(bracket),
        actual_gain_kg: Some(actual),
        reference_gain_kg: Some(reference),
        elapsed_days: Some(elapsed),
        percent_diff: Some(percent_diff),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::default_growth_table;
    use assert_approx_eq::assert_approx_eq;

    fn eval(age: i32, weight: f64, start: Option<f64>) -> GrowthEvaluation {
        evaluate_growth(
            &default_growth_table(),
            &GrowthPolicy::default(),
            age,
            weight,
            start,
        )
    }

    #[test]
    fn test_reference_case_above_range() {
        // Bracket [15,21], start 5.4kg: (6.4-5.4)/6 = 166.7 g/day vs 143.
        let result = eval(21, 6.4, Some(5.4));
        assert_eq!(result.status, GrowthStatus::AboveRange);
        assert_eq!(result.elapsed_days, Some(6));
        assert_approx_eq!(result.actual_gain_kg.unwrap(), 0.16667, 1e-4);
        assert_approx_eq!(result.reference_gain_kg.unwrap(), 0.143, 1e-9);
        assert_approx_eq!(result.percent_diff.unwrap(), 16.55, 0.05);
        assert_eq!(result.bracket.unwrap(), AgeBracket::new(15, 21));
    }

    #[test]
    fn test_theoretical_start_weight_used_when_absent() {
        let explicit = eval(21, 6.4, Some(5.4));
        let theoretical = eval(21, 6.4, None);
        assert_eq!(explicit.status, theoretical.status);
        assert_approx_eq!(
            explicit.actual_gain_kg.unwrap(),
            theoretical.actual_gain_kg.unwrap(),
            1e-9
        );
    }

    #[test]
    fn test_within_range() {
        // (6.3-5.4)/6 = 150 g/day vs 143 -> +4.9%.
        let result = eval(21, 6.3, Some(5.4));
        assert_eq!(result.status, GrowthStatus::WithinRange);
    }

    #[test]
    fn test_below_range() {
        // (5.9-5.4)/6 = 83.3 g/day vs 143 -> -41.7%.
        let result = eval(21, 5.9, Some(5.4));
        assert_eq!(result.status, GrowthStatus::BelowRange);
    }

    #[test]
    fn test_awaiting_input_non_positive_age() {
        assert_eq!(eval(0, 6.4, None).status, GrowthStatus::AwaitingInput);
        assert_eq!(eval(-10, 6.4, None).status, GrowthStatus::AwaitingInput);
    }

    #[test]
    fn test_awaiting_input_non_positive_weight() {
        assert_eq!(eval(21, 0.0, None).status, GrowthStatus::AwaitingInput);
        assert_eq!(eval(21, -1.0, None).status, GrowthStatus::AwaitingInput);
    }

    #[test]
    fn test_awaiting_input_non_positive_start_weight() {
        assert_eq!(eval(21, 6.4, Some(0.0)).status, GrowthStatus::AwaitingInput);
    }

    #[test]
    fn test_no_reference_below_coverage() {
        let result = eval(10, 4.0, None);
        assert_eq!(result.status, GrowthStatus::NoReferenceForAge);
        assert!(result.message.contains("15-180 days"));
    }

    #[test]
    fn test_no_reference_above_coverage() {
        let result = eval(200, 140.0, None);
        assert_eq!(result.status, GrowthStatus::NoReferenceForAge);
    }

    #[test]
    fn test_weight_decrease_is_computation_error() {
        let result = eval(21, 5.0, Some(5.4));
        assert_eq!(result.status, GrowthStatus::ComputationError);
        assert!(result.actual_gain_kg.is_none());
    }

    #[test]
    fn test_zero_elapsed_substitutes_one_day() {
        // Age 15 sits on the bracket start: elapsed would be 0.
        let result = eval(15, 5.4, Some(5.4));
        assert_eq!(result.status, GrowthStatus::BelowRange);
        assert_eq!(result.elapsed_days, Some(1));
        assert_approx_eq!(result.actual_gain_kg.unwrap(), 0.0, 1e-9);
        assert!(result.message.contains("approximated"));
    }

    #[test]
    fn test_zero_elapsed_with_gain() {
        // One day's worth of gain attributed to the substitute day.
        let result = eval(15, 5.55, Some(5.4));
        assert_eq!(result.elapsed_days, Some(1));
        assert_approx_eq!(result.actual_gain_kg.unwrap(), 0.15, 1e-9);
    }

    #[test]
    fn test_custom_thresholds() {
        let policy = GrowthPolicy {
            above_threshold_percent: 20.0,
            below_threshold_percent: 20.0,
            min_elapsed_days: 1,
        };
        // +16.6% is within a 20% band.
        let result = evaluate_growth(&default_growth_table(), &policy, 21, 6.4, Some(5.4));
        assert_eq!(result.status, GrowthStatus::WithinRange);
    }

    #[test]
    fn test_non_positive_reference_guarded() {
        let table = vec![GrowthReference {
            bracket: AgeBracket::new(15, 21),
            start_weight_kg: 5.4,
            end_weight_kg: 6.4,
            expected_gain_grams: 0.0,
            estimated: false,
        }];
        let result = evaluate_growth(&table, &GrowthPolicy::default(), 18, 6.0, None);
        assert_eq!(result.status, GrowthStatus::NoReferenceForAge);
    }

    #[test]
    fn test_empty_table_no_reference() {
        let table: Vec<GrowthReference> = Vec::new();
        let result = evaluate_growth(&table, &GrowthPolicy::default(), 18, 6.0, None);
        assert_eq!(result.status, GrowthStatus::NoReferenceForAge);
        assert!(result.message.contains("empty"));
    }

    #[test]
    fn test_boundary_exactly_plus_ten_percent_is_within() {
        // Reference 143 g/day over 6 days; +10% is 157.3 g/day -> 0.9438kg gain.
        let result = eval(21, 5.4 + 0.9438, Some(5.4));
        assert_eq!(result.status, GrowthStatus::WithinRange);
    }

    #[test]
    fn test_evaluation_json_roundtrip() {
        let result = eval(21, 6.4, Some(5.4));
        let json = serde_json::to_string(&result).unwrap();
        let back: GrowthEvaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, result.status);
        assert_eq!(back.elapsed_days, result.elapsed_days);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GrowthStatus::WithinRange.to_string(), "Within range");
        assert_eq!(GrowthStatus::AwaitingInput.to_string(), "Awaiting input");
    }
}
