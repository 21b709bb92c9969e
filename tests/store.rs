use chrono::Local;
use maplog_rs::pipeline::build::build_workout;
use maplog_rs::{Coordinates, FormInput, WorkoutId, WorkoutStore};

fn workout(distance: &str) -> maplog_rs::Workout {
    build_workout(
        &FormInput::running(distance, "30", "170"),
        Coordinates::new(39.0, -12.0),
        Local::now(),
    )
    .expect("valid workout")
}

#[test]
fn added_workouts_are_found_by_id() {
    let mut store = WorkoutStore::new();
    let first = workout("5");
    let second = workout("7");
    let first_id = first.id().clone();
    let second_id = second.id().clone();

    store.add(first);
    assert_eq!(store.last().expect("just added").id(), &first_id);
    store.add(second);
    assert_eq!(store.last().expect("just added").id(), &second_id);

    assert_eq!(store.len(), 2);
    assert_eq!(store.find_by_id(&first_id).expect("first").distance(), 5.0);
    assert_eq!(store.find_by_id(&second_id).expect("second").distance(), 7.0);
}

#[test]
fn lookup_miss_returns_none() {
    let mut store = WorkoutStore::new();
    store.add(workout("5"));

    assert!(store.find_by_id(&WorkoutId::from("missing")).is_none());
}

#[test]
fn iteration_preserves_insertion_order() {
    let mut store = WorkoutStore::new();
    assert!(store.is_empty());
    for distance in ["1", "2", "3", "4"] {
        store.add(workout(distance));
    }

    let distances: Vec<f64> = store.iter().map(|w| w.distance()).collect();
    assert_eq!(distances, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn click_registration_through_mutable_lookup() {
    let mut store = WorkoutStore::new();
    let added = workout("5");
    let id = added.id().clone();
    store.add(added);

    store
        .find_by_id_mut(&id)
        .expect("stored")
        .register_click();

    assert_eq!(store.find_by_id(&id).expect("stored").clicks(), 1);
}
