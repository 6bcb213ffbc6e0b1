//! Input validation functions
//!
//! Custom validators used alongside the `validator` derive macros on the
//! wire request types. Validation runs at the client boundary, before a
//! request is ever issued.

/// Validate a nutrition value (non-negative, finite)
pub fn validate_nutrition(value: f64) -> Result<(), String> {
    if value < 0.0 {
        return Err("Nutrition value cannot be negative".to_string());
    }
    if value.is_nan() || value.is_infinite() {
        return Err("Nutrition value must be a valid number".to_string());
    }
    if value > 50000.0 {
        return Err("Nutrition value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a serving size (strictly positive, finite)
pub fn validate_serving_size(value: f64) -> Result<(), String> {
    if value <= 0.0 {
        return Err("Serving size must be positive".to_string());
    }
    if value.is_nan() || value.is_infinite() {
        return Err("Serving size must be a valid number".to_string());
    }
    Ok(())
}

/// Validate an intake quantity (strictly positive, finite)
pub fn validate_intake(value: f64) -> Result<(), String> {
    if value <= 0.0 {
        return Err("Intake must be positive".to_string());
    }
    if value.is_nan() || value.is_infinite() {
        return Err("Intake must be a valid number".to_string());
    }
    Ok(())
}
