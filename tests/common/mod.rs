#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use maplog_rs::adapters::{
    FormView, Geolocation, MapAdapter, PositionReply, SetViewOptions, WorkoutList,
};
use maplog_rs::config::{Config, TileLayer};
use maplog_rs::view::{MarkerPopup, WorkoutCard};
use maplog_rs::{AdapterError, Controller, Coordinates, FormInput, GeolocationError};

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    CreateView { center: Coordinates, zoom: u8 },
    AddTileLayer { url_template: String },
    ListenForClicks,
    SetView { center: Coordinates, options: SetViewOptions },
    AddMarker { at: Coordinates, popup: MarkerPopup },
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    pub calls: Vec<MapCall>,
    pub fail_markers: bool,
    pub fail_set_view: bool,
    pub markers: usize,
}

impl RecordingMap {
    pub fn markers(&self) -> Vec<&MarkerPopup> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                MapCall::AddMarker { popup, .. } => Some(popup),
                _ => None,
            })
            .collect()
    }

    pub fn set_views(&self) -> Vec<(Coordinates, SetViewOptions)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                MapCall::SetView { center, options } => Some((*center, *options)),
                _ => None,
            })
            .collect()
    }
}

impl MapAdapter for RecordingMap {
    type Handle = u32;
    type Marker = usize;

    fn create_view(&mut self, center: Coordinates, zoom: u8) -> Result<u32, AdapterError> {
        self.calls.push(MapCall::CreateView { center, zoom });
        Ok(7)
    }

    fn add_tile_layer(&mut self, _handle: &u32, tiles: &TileLayer) -> Result<(), AdapterError> {
        self.calls.push(MapCall::AddTileLayer {
            url_template: tiles.url_template.clone(),
        });
        Ok(())
    }

    fn listen_for_clicks(&mut self, _handle: &u32) -> Result<(), AdapterError> {
        self.calls.push(MapCall::ListenForClicks);
        Ok(())
    }

    fn set_view(
        &mut self,
        _handle: &u32,
        center: Coordinates,
        options: &SetViewOptions,
    ) -> Result<(), AdapterError> {
        if self.fail_set_view {
            return Err(AdapterError::Map("pan failed".to_string()));
        }
        self.calls.push(MapCall::SetView {
            center,
            options: *options,
        });
        Ok(())
    }

    fn add_marker(
        &mut self,
        _handle: &u32,
        at: Coordinates,
        popup: &MarkerPopup,
    ) -> Result<usize, AdapterError> {
        if self.fail_markers {
            return Err(AdapterError::Map("marker layer gone".to_string()));
        }
        self.calls.push(MapCall::AddMarker {
            at,
            popup: popup.clone(),
        });
        self.markers += 1;
        Ok(self.markers)
    }
}

#[derive(Debug, Default)]
pub struct RecordingList {
    pub cards: Vec<WorkoutCard>,
    pub fail_render: bool,
}

impl WorkoutList for RecordingList {
    fn render_workout(&mut self, card: &WorkoutCard) -> Result<(), AdapterError> {
        if self.fail_render {
            return Err(AdapterError::List("list container detached".to_string()));
        }
        self.cards.push(card.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeForm {
    pub input: FormInput,
    pub visible: bool,
    pub focused: bool,
    pub cleared: u32,
    pub toggles: u32,
    pub alerts: Vec<String>,
}

impl FakeForm {
    pub fn fill(&mut self, input: FormInput) {
        self.input = input;
    }
}

impl FormView for FakeForm {
    fn read_fields(&self) -> FormInput {
        self.input.clone()
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.focused = false;
    }

    fn focus_distance(&mut self) {
        self.focused = true;
    }

    fn clear_fields(&mut self) {
        self.input = FormInput {
            kind: self.input.kind.clone(),
            ..FormInput::default()
        };
        self.cleared += 1;
    }

    fn toggle_variant_fields(&mut self) {
        self.toggles += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// Replies immediately with a fixed outcome.
pub struct FixedGeolocation(pub Result<Coordinates, GeolocationError>);

impl Geolocation for FixedGeolocation {
    fn get_current_position(&self, reply: PositionReply) {
        match self.0 {
            Ok(position) => reply.success(position),
            Err(err) => reply.failure(err),
        }
    }
}

/// Replies from a spawned task, like a browser callback firing later.
pub struct DeferredGeolocation(pub Coordinates);

impl Geolocation for DeferredGeolocation {
    fn get_current_position(&self, reply: PositionReply) {
        let position = self.0;
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            reply.success(position);
        });
    }
}

/// Drops the reply without answering.
pub struct SilentGeolocation;

impl Geolocation for SilentGeolocation {
    fn get_current_position(&self, _reply: PositionReply) {}
}

pub type TestController = Controller<RecordingMap, RecordingList, FakeForm>;

pub fn home() -> Coordinates {
    Coordinates::new(38.72, -9.14)
}

pub fn at_noon(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("unambiguous local noon")
}

pub fn june_first() -> DateTime<Local> {
    at_noon(2026, 6, 1)
}

pub fn controller() -> TestController {
    maplog_rs::logging::init();
    Controller::new(
        Config::default(),
        RecordingMap::default(),
        RecordingList::default(),
        FakeForm::default(),
    )
    .with_clock(june_first)
}

pub fn controller_with(map: RecordingMap, list: RecordingList) -> TestController {
    maplog_rs::logging::init();
    let mut controller = Controller::new(Config::default(), map, list, FakeForm::default())
        .with_clock(june_first);
    controller
        .handle_position(Ok(home()))
        .expect("map loads");
    controller
}

pub fn ready_controller() -> TestController {
    let mut controller = controller();
    controller
        .handle_position(Ok(home()))
        .expect("map loads");
    controller
}
