use crate::types::workout::{Workout, WorkoutId};

/// Append-only list of the session's workouts, in insertion order.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, workout: Workout) {
        self.workouts.push(workout);
        tracing::debug!("Workout store size: {}", self.workouts.len());
    }

    /// Most recently added workout.
    pub fn last(&self) -> Option<&Workout> {
        self.workouts.last()
    }

    pub fn find_by_id(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &WorkoutId) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|workout| workout.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
