use serde::Serialize;
use serde_json::Value;

use crate::config::PopupOptions;
use crate::types::geo::Coordinates;
use crate::types::workout::{Activity, Workout, WorkoutId, WorkoutKind};

pub fn kind_icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃‍♂️",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub content: String,
    pub class_name: String,
    pub options: PopupOptions,
    pub open: bool,
}

impl MarkerPopup {
    pub fn for_workout(workout: &Workout, options: PopupOptions) -> Self {
        let kind = workout.kind();
        Self {
            content: format!("{} {}", kind_icon(kind), workout.description()),
            class_name: format!("{}-popup", kind.as_str()),
            options,
            open: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl DetailRow {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// List entry for one workout. `id` joins the entry back to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutCard {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: Vec<DetailRow>,
}

impl WorkoutCard {
    pub fn for_workout(workout: &Workout) -> Self {
        let kind = workout.kind();
        let mut details = vec![
            DetailRow::new(kind_icon(kind), workout.distance().to_string(), "km"),
            DetailRow::new("⏱", workout.duration().to_string(), "min"),
        ];

        match *workout.activity() {
            Activity::Running { cadence, pace } => {
                details.push(DetailRow::new("⚡️", format!("{pace:.2}"), "min/km"));
                details.push(DetailRow::new("🦶🏼", cadence.to_string(), "spm"));
            }
            Activity::Cycling {
                elevation_gain,
                speed,
            } => {
                details.push(DetailRow::new("⚡️", format!("{speed:.2}"), "km/h"));
                details.push(DetailRow::new("⛰", elevation_gain.to_string(), "m"));
            }
        }

        Self {
            id: workout.id().clone(),
            kind,
            title: workout.description().to_string(),
            details,
        }
    }
}

/// Everything the view layer needs to draw a newly created workout.
#[derive(Debug, Clone, Serialize)]
pub struct RenderRequest<'a> {
    pub workout: &'a Workout,
    pub coordinates: Coordinates,
    pub popup: MarkerPopup,
    pub card: WorkoutCard,
}

impl<'a> RenderRequest<'a> {
    pub fn new(workout: &'a Workout, popup_options: PopupOptions) -> Self {
        Self {
            workout,
            coordinates: workout.coordinates(),
            popup: MarkerPopup::for_workout(workout, popup_options),
            card: WorkoutCard::for_workout(workout),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
