use crate::error::ValidationError;
use crate::types::workout::WorkoutKind;

/// Numeric form values after coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutFields {
    pub distance: f64,
    pub duration: f64,
    /// cadence for running, elevation gain for cycling
    pub variant: f64,
}

/// Every input must be finite. Distance and duration must be positive, and so must
/// cadence; elevation gain is only checked for finiteness.
pub fn validate(kind: WorkoutKind, fields: &WorkoutFields) -> Result<(), ValidationError> {
    let variant_name = match kind {
        WorkoutKind::Running => "cadence",
        WorkoutKind::Cycling => "elevation",
    };

    let all = [
        ("distance", fields.distance),
        ("duration", fields.duration),
        (variant_name, fields.variant),
    ];
    all_finite(&all)?;

    match kind {
        WorkoutKind::Running => all_positive(&all),
        WorkoutKind::Cycling => all_positive(&all[..2]),
    }
}

fn all_finite(inputs: &[(&'static str, f64)]) -> Result<(), ValidationError> {
    match inputs.iter().find(|(_, value)| !value.is_finite()) {
        Some(&(field, _)) => Err(ValidationError::NonFinite { field }),
        None => Ok(()),
    }
}

fn all_positive(inputs: &[(&'static str, f64)]) -> Result<(), ValidationError> {
    match inputs.iter().find(|(_, value)| *value <= 0.0) {
        Some(&(field, _)) => Err(ValidationError::NonPositive { field }),
        None => Ok(()),
    }
}
