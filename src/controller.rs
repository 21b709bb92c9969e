use chrono::{DateTime, Local};

use crate::adapters::{locate, FormView, Geolocation, MapAdapter, SetViewOptions, WorkoutList};
use crate::config::Config;
use crate::error::{
    AdapterError, AppError, GeolocationError, ValidationError, INVALID_INPUT_ALERT, POSITION_ALERT,
};
use crate::pipeline::build::build_workout;
use crate::state::WorkoutStore;
use crate::types::geo::Coordinates;
use crate::types::workout::WorkoutId;
use crate::view::RenderRequest;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    Idle,
    /// A map click was captured and the form is open.
    AwaitingFormInput { pending: Coordinates },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(WorkoutId),
    Rejected(ValidationError),
    /// No pending map click to attach a workout to.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListClickOutcome {
    Centered(WorkoutId),
    NotFound,
    Ignored,
}

enum MapStatus<H> {
    Pending,
    Unavailable(GeolocationError),
    Ready(H),
}

/// Session controller. Every external event has one `handle_*` entry point and
/// runs to completion before the next.
pub struct Controller<M: MapAdapter, L, F> {
    config: Config,
    map: M,
    list: L,
    form: F,
    store: WorkoutStore,
    state: SessionState,
    map_status: MapStatus<M::Handle>,
    markers: Vec<(WorkoutId, M::Marker)>,
    clock: fn() -> DateTime<Local>,
}

impl<M, L, F> Controller<M, L, F>
where
    M: MapAdapter,
    L: WorkoutList,
    F: FormView,
{
    pub fn new(config: Config, map: M, list: L, form: F) -> Self {
        Self {
            config,
            map,
            list,
            form,
            store: WorkoutStore::new(),
            state: SessionState::Idle,
            map_status: MapStatus::Pending,
            markers: Vec::new(),
            clock: Local::now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    /// Request the user's position once and load the map around it.
    ///
    /// `None` means the platform has no geolocation capability.
    pub async fn start<G>(&mut self, geolocation: Option<&G>) -> Result<(), AppError>
    where
        G: Geolocation + ?Sized,
    {
        let position = match geolocation {
            Some(geo) => locate(geo).await,
            None => Err(GeolocationError::Unavailable),
        };
        self.handle_position(position)
    }

    pub fn handle_position(
        &mut self,
        position: Result<Coordinates, GeolocationError>,
    ) -> Result<(), AppError> {
        match position {
            Ok(center) => {
                if matches!(self.map_status, MapStatus::Ready(_)) {
                    tracing::debug!("Map already loaded, ignoring position update");
                    return Ok(());
                }
                self.load_map(center)?;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Could not get position: {}", err);
                self.form.alert(POSITION_ALERT);
                if !matches!(self.map_status, MapStatus::Ready(_)) {
                    self.map_status = MapStatus::Unavailable(err);
                }
                Err(err.into())
            }
        }
    }

    fn load_map(&mut self, center: Coordinates) -> Result<(), AdapterError> {
        let handle = self.map.create_view(center, self.config.zoom_level)?;
        self.map.add_tile_layer(&handle, &self.config.tiles)?;
        self.map.listen_for_clicks(&handle)?;
        self.map_status = MapStatus::Ready(handle);

        tracing::info!(
            "Map loaded at ({:.5}, {:.5}) zoom {}",
            center.lat,
            center.lng,
            self.config.zoom_level
        );
        Ok(())
    }

    /// Returns false when the map is not loaded and the click was dropped.
    pub fn handle_map_click(&mut self, at: Coordinates) -> bool {
        if !matches!(self.map_status, MapStatus::Ready(_)) {
            tracing::debug!("Map click before map load, ignoring");
            return false;
        }

        self.state = SessionState::AwaitingFormInput { pending: at };
        self.form.show();
        self.form.focus_distance();
        true
    }

    /// Close the form without creating a workout. No-op when already idle.
    pub fn handle_cancel(&mut self) {
        if self.state == SessionState::Idle {
            return;
        }

        self.form.clear_fields();
        self.form.hide();
        self.state = SessionState::Idle;
        tracing::debug!("Workout form cancelled");
    }

    pub fn handle_kind_change(&mut self) {
        self.form.toggle_variant_fields();
    }

    /// Validate the form against the pending click, then store and render.
    ///
    /// Side effects run in order: store, marker, list entry, form reset. An adapter
    /// error after the store append leaves the workout stored and the form open.
    pub fn handle_submit(&mut self) -> Result<SubmitOutcome, AdapterError> {
        let SessionState::AwaitingFormInput { pending } = self.state else {
            tracing::debug!("Submit without a pending map click, ignoring");
            return Ok(SubmitOutcome::Ignored);
        };
        let MapStatus::Ready(handle) = &self.map_status else {
            return Ok(SubmitOutcome::Ignored);
        };

        let input = self.form.read_fields();
        let workout = match build_workout(&input, pending, (self.clock)()) {
            Ok(workout) => workout,
            Err(err) => {
                tracing::warn!("Rejected {} workout: {}", input.kind, err);
                self.form.alert(INVALID_INPUT_ALERT);
                return Ok(SubmitOutcome::Rejected(err));
            }
        };

        let id = workout.id().clone();
        self.store.add(workout);
        let Some(stored) = self.store.last() else {
            return Ok(SubmitOutcome::Ignored);
        };
        tracing::info!(
            "Created workout {} ({}, {:.2} km, {:.2})",
            id,
            stored.description(),
            stored.distance(),
            stored.derived_metric()
        );

        let request = RenderRequest::new(stored, self.config.popup);
        let marker = self
            .map
            .add_marker(handle, request.coordinates, &request.popup)?;
        self.markers.push((id.clone(), marker));
        self.list.render_workout(&request.card)?;

        self.form.clear_fields();
        self.form.hide();
        self.state = SessionState::Idle;

        Ok(SubmitOutcome::Created(id))
    }

    /// `entry_id` is the id carried by the clicked list entry, `None` when the
    /// click landed outside any entry.
    pub fn handle_list_click(
        &mut self,
        entry_id: Option<&str>,
    ) -> Result<ListClickOutcome, AdapterError> {
        let Some(entry_id) = entry_id else {
            return Ok(ListClickOutcome::Ignored);
        };
        let MapStatus::Ready(handle) = &self.map_status else {
            return Ok(ListClickOutcome::Ignored);
        };

        let id = WorkoutId::from(entry_id);
        let Some(workout) = self.store.find_by_id_mut(&id) else {
            tracing::debug!("List click for unknown workout {}", id);
            return Ok(ListClickOutcome::NotFound);
        };

        let options = SetViewOptions {
            zoom: self.config.zoom_level,
            animate: true,
            pan_duration: self.config.pan_duration,
        };
        self.map.set_view(handle, workout.coordinates(), &options)?;
        workout.register_click();

        tracing::debug!("Centered on workout {} (clicks: {})", id, workout.clicks());
        Ok(ListClickOutcome::Centered(id))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pending_coordinates(&self) -> Option<Coordinates> {
        match self.state {
            SessionState::Idle => None,
            SessionState::AwaitingFormInput { pending } => Some(pending),
        }
    }

    pub fn is_map_ready(&self) -> bool {
        matches!(self.map_status, MapStatus::Ready(_))
    }

    pub fn geolocation_error(&self) -> Option<GeolocationError> {
        match self.map_status {
            MapStatus::Unavailable(err) => Some(err),
            _ => None,
        }
    }

    pub fn workouts(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn marker_for(&self, id: &WorkoutId) -> Option<&M::Marker> {
        self.markers
            .iter()
            .find(|(marker_id, _)| marker_id == id)
            .map(|(_, marker)| marker)
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }
}
