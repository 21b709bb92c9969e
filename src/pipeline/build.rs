use chrono::{DateTime, Local};

use crate::error::ValidationError;
use crate::pipeline::parse::coerce_number;
use crate::pipeline::validate::{validate, WorkoutFields};
use crate::types::form::FormInput;
use crate::types::geo::Coordinates;
use crate::types::workout::{Workout, WorkoutKind};

pub fn build_workout(
    input: &FormInput,
    coordinates: Coordinates,
    created_at: DateTime<Local>,
) -> Result<Workout, ValidationError> {
    let kind = WorkoutKind::from_tag(&input.kind)
        .ok_or_else(|| ValidationError::UnknownKind(input.kind.clone()))?;

    let variant_text = match kind {
        WorkoutKind::Running => &input.cadence,
        WorkoutKind::Cycling => &input.elevation,
    };
    let fields = WorkoutFields {
        distance: coerce_number(&input.distance),
        duration: coerce_number(&input.duration),
        variant: coerce_number(variant_text),
    };

    validate(kind, &fields)?;

    let workout = match kind {
        WorkoutKind::Running => Workout::running(
            coordinates,
            fields.distance,
            fields.duration,
            fields.variant,
            created_at,
        ),
        WorkoutKind::Cycling => Workout::cycling(
            coordinates,
            fields.distance,
            fields.duration,
            fields.variant,
            created_at,
        ),
    };

    Ok(workout)
}
