use serde::{Deserialize, Serialize};

use crate::error::HerdError;

/// Gross revenue projection for a shipping schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRevenue {
    /// Gross value of one truck load
    pub per_truck: f64,
    /// Gross value shipped per day
    pub per_day: f64,
    /// Gross value over the whole shipping window
    pub total: f64,
}

/// Project gross shipping revenue from mean truck weight, price per kg,
/// trucks per day, and shipping days.
pub fn estimate_revenue(
    truck_weight_kg: f64,
    price_per_kg: f64,
    trucks_per_day: u32,
    shipping_days: u32,
) -> Result<ShipmentRevenue, HerdError> {
    if truck_weight_kg <= 0.0 {
        return Err(HerdError::ValidationError(format!(
            "truck weight must be positive, got {truck_weight_kg}"
        )));
    }
    if price_per_kg <= 0.0 {
        return Err(HerdError::ValidationError(format!(
            "price per kg must be positive, got {price_per_kg}"
        )));
    }
    if trucks_per_day == 0 || shipping_days == 0 {
        return Err(HerdError::ValidationError(
            "trucks per day and shipping days must be positive".to_string(),
        ));
    }

    let per_truck = truck_weight_kg * price_per_kg;
    let per_day = per_truck * trucks_per_day as f64;
    let total = per_day * shipping_days as f64;
    Ok(ShipmentRevenue {
        per_truck,
        per_day,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_basic_projection() {
        let rev = estimate_revenue(12000.0, 7.5, 2, 5).unwrap();
        assert_approx_eq!(rev.per_truck, 90000.0, 1e-6);
        assert_approx_eq!(rev.per_day, 180000.0, 1e-6);
        assert_approx_eq!(rev.total, 900000.0, 1e-6);
    }

    #[test]
    fn test_single_truck_single_day() {
        let rev = estimate_revenue(10000.0, 6.0, 1, 1).unwrap();
        assert_approx_eq!(rev.per_truck, rev.total, 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        assert!(estimate_revenue(0.0, 7.5, 2, 5).is_err());
        assert!(estimate_revenue(-1.0, 7.5, 2, 5).is_err());
    }

    #[test]
    fn test_rejects_non_positive_price() {
        assert!(estimate_revenue(12000.0, 0.0, 2, 5).is_err());
    }

    #[test]
    fn test_rejects_zero_trucks_or_days() {
        assert!(estimate_revenue(12000.0, 7.5, 0, 5).is_err());
        assert!(estimate_revenue(12000.0, 7.5, 2, 0).is_err());
    }
}
