use std::time::Duration;

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub zoom_level: u8,
    pub pan_duration: Duration,
    pub tiles: TileLayer,
    pub popup: PopupOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_level: 14,
            pan_duration: Duration::from_millis(1000),
            tiles: TileLayer {
                url_template: DEFAULT_TILE_URL.to_string(),
                attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            },
            popup: PopupOptions {
                max_width: 250,
                min_width: 100,
                auto_close: false,
                close_on_click: false,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let zoom_level = env_parse("MAP_ZOOM_LEVEL").unwrap_or(defaults.zoom_level);

        let pan_duration_ms = env_parse("MAP_PAN_DURATION_MS")
            .unwrap_or(defaults.pan_duration.as_millis() as u64);

        let url_template = std::env::var("MAP_TILE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.tiles.url_template);

        let attribution = std::env::var("MAP_TILE_ATTRIBUTION")
            .ok()
            .unwrap_or(defaults.tiles.attribution);

        let max_width = env_parse("POPUP_MAX_WIDTH").unwrap_or(defaults.popup.max_width);
        let min_width = env_parse("POPUP_MIN_WIDTH").unwrap_or(defaults.popup.min_width);

        Self {
            zoom_level,
            pan_duration: Duration::from_millis(pan_duration_ms),
            tiles: TileLayer {
                url_template,
                attribution,
            },
            popup: PopupOptions {
                max_width,
                min_width,
                ..defaults.popup
            },
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
