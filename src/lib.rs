pub mod adapters;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod state;
pub mod types;
pub mod view;

pub use controller::{Controller, ListClickOutcome, SessionState, SubmitOutcome};
pub use error::{AdapterError, AppError, GeolocationError, ValidationError};
pub use state::WorkoutStore;
pub use types::{
    form::FormInput,
    geo::Coordinates,
    workout::{Workout, WorkoutId, WorkoutKind},
};
