use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::types::geo::Coordinates;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Exact, case-sensitive match on the form's type tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "running" => Some(WorkoutKind::Running),
            "cycling" => Some(WorkoutKind::Cycling),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Variant-specific fields and the metric derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Activity {
    Running {
        /// steps/min
        cadence: f64,
        /// min/km
        pace: f64,
    },
    Cycling {
        /// meters, any sign
        elevation_gain: f64,
        /// km/h
        speed: f64,
    },
}

/// Selection counter. Only ever goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct ClickCounter(u32);

impl ClickCounter {
    fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    fn get(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Local>,
    coordinates: Coordinates,
    /// km
    distance: f64,
    /// minutes
    duration: f64,
    description: String,
    #[serde(flatten)]
    activity: Activity,
    clicks: ClickCounter,
}

impl Workout {
    pub(crate) fn running(
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        cadence: f64,
        created_at: DateTime<Local>,
    ) -> Self {
        let pace = duration / distance;
        Self::assemble(
            coordinates,
            distance,
            duration,
            Activity::Running { cadence, pace },
            created_at,
        )
    }

    pub(crate) fn cycling(
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        created_at: DateTime<Local>,
    ) -> Self {
        let speed = distance / (duration / 60.0);
        Self::assemble(
            coordinates,
            distance,
            duration,
            Activity::Cycling {
                elevation_gain,
                speed,
            },
            created_at,
        )
    }

    fn assemble(
        coordinates: Coordinates,
        distance: f64,
        duration: f64,
        activity: Activity,
        created_at: DateTime<Local>,
    ) -> Self {
        let kind = match activity {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        };
        Self {
            id: WorkoutId::generate(),
            description: describe(kind, &created_at),
            created_at,
            coordinates,
            distance,
            duration,
            activity,
            clicks: ClickCounter::default(),
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.activity {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    /// Pace for running, speed for cycling.
    pub fn derived_metric(&self) -> f64 {
        match self.activity {
            Activity::Running { pace, .. } => pace,
            Activity::Cycling { speed, .. } => speed,
        }
    }

    pub fn clicks(&self) -> u32 {
        self.clicks.get()
    }

    pub fn register_click(&mut self) {
        self.clicks.increment();
    }
}

/// "Running on June 1st, 2026"
pub fn describe(kind: WorkoutKind, date: &DateTime<Local>) -> String {
    format!(
        "{} on {} {}, {}",
        kind.label(),
        MONTHS[date.month0() as usize],
        ordinal_day(date.day()),
        date.year()
    )
}

pub fn ordinal_day(day: u32) -> String {
    let suffix = match (day % 10, day) {
        (1, d) if d != 11 => "st",
        (2, d) if d != 12 => "nd",
        (3, d) if d != 13 => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
