use thiserror::Error;

use crate::{FuelingEdit, NewFueling};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("odometer {odometer} must be greater than the previous reading ({previous})")]
    OdometerNotIncreasing { odometer: f64, previous: f64 },
    #[error("odometer {0} must be a non-negative number")]
    InvalidOdometer(f64),
    #[error("price per unit volume must be positive, got {0}")]
    NonPositivePrice(f64),
    #[error("total cost must be positive, got {0}")]
    NonPositiveCost(f64),
}

/// `latest_odometer` is the owner's highest recorded odometer at submission.
pub fn validate_new(input: &NewFueling, latest_odometer: f64) -> Result<(), ValidationError> {
    validate_fields(input.odometer, input.price_per_unit_volume, input.total_cost)?;
    require_increase(input.odometer, latest_odometer)
}

/// `previous_odometer` comes from [`crate::previous_odometer`] on the set
/// before the edit is applied.
pub fn validate_edit(edit: &FuelingEdit, previous_odometer: f64) -> Result<(), ValidationError> {
    validate_fields(edit.odometer, edit.price_per_unit_volume, edit.total_cost)?;
    require_increase(edit.odometer, previous_odometer)
}

fn validate_fields(odometer: f64, price: f64, total_cost: f64) -> Result<(), ValidationError> {
    if !odometer.is_finite() || odometer < 0.0 {
        return Err(ValidationError::InvalidOdometer(odometer));
    }
    if !(price.is_finite() && price > 0.0) {
        return Err(ValidationError::NonPositivePrice(price));
    }
    if !(total_cost.is_finite() && total_cost > 0.0) {
        return Err(ValidationError::NonPositiveCost(total_cost));
    }
    Ok(())
}

fn require_increase(odometer: f64, previous: f64) -> Result<(), ValidationError> {
    if odometer <= previous {
        return Err(ValidationError::OdometerNotIncreasing { odometer, previous });
    }
    Ok(())
}
