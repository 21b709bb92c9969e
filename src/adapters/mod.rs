//! Capabilities the controller drives. Implementations live in the view layer.

pub mod geolocation;

pub use geolocation::{locate, Geolocation, PositionReply};

use crate::config::TileLayer;
use crate::error::AdapterError;
use crate::types::form::FormInput;
use crate::types::geo::Coordinates;
use crate::view::{MarkerPopup, WorkoutCard};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetViewOptions {
    pub zoom: u8,
    pub animate: bool,
    pub pan_duration: Duration,
}

pub trait MapAdapter {
    type Handle;
    type Marker;

    fn create_view(&mut self, center: Coordinates, zoom: u8) -> Result<Self::Handle, AdapterError>;

    fn add_tile_layer(&mut self, handle: &Self::Handle, tiles: &TileLayer) -> Result<(), AdapterError>;

    /// Start forwarding clicks on the view to `Controller::handle_map_click`.
    fn listen_for_clicks(&mut self, handle: &Self::Handle) -> Result<(), AdapterError>;

    fn set_view(
        &mut self,
        handle: &Self::Handle,
        center: Coordinates,
        options: &SetViewOptions,
    ) -> Result<(), AdapterError>;

    fn add_marker(
        &mut self,
        handle: &Self::Handle,
        at: Coordinates,
        popup: &MarkerPopup,
    ) -> Result<Self::Marker, AdapterError>;
}

pub trait WorkoutList {
    /// Insert the entry directly after the form, so newest entries come first.
    fn render_workout(&mut self, card: &WorkoutCard) -> Result<(), AdapterError>;
}

pub trait FormView {
    fn read_fields(&self) -> FormInput;
    fn show(&mut self);
    fn hide(&mut self);
    fn focus_distance(&mut self);
    fn clear_fields(&mut self);
    /// Swap which of cadence / elevation is visible.
    fn toggle_variant_fields(&mut self);
    fn alert(&mut self, message: &str);
}
