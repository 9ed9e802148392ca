//! Kiko Quest - a side-scrolling space quiz game
//!
//! Core modules:
//! - `sim`: Deterministic session simulation (timers, entities, quiz, progress)
//! - `app`: Top-level screen state machine (menu, rules, game)
//! - `autopilot`: Demo driver that plays the game unattended
//! - `catalog`: Station and question data
//! - `renderer`: Draw-list composition for an external canvas
//! - `platform`: Input event types delivered by the host
//! - `ui`: Hit-region layout and text wrapping

pub mod app;
pub mod audio;
pub mod autopilot;
pub mod catalog;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::{App, AppStatus, Screen};
pub use autopilot::Autopilot;
pub use catalog::{Catalog, CatalogError, Question, StationDescriptor, StationId};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window size in pixels
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Target frame rate of the host loop
    pub const TARGET_FPS: u32 = 60;
    /// Nominal frame length in milliseconds
    pub const FRAME_MS: f64 = 1000.0 / TARGET_FPS as f64;

    /// Player ship
    pub const PLAYER_SIZE: (f32, f32) = (230.0, 150.0);
    pub const PLAYER_START_CENTER: (f32, f32) = (600.0, 400.0);
    /// Hitbox shrink (width, height) relative to the sprite
    pub const PLAYER_HITBOX_INSET: (f32, f32) = (0.0, -100.0);
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PLAYER_MAX_X: f32 = 700.0;
    pub const PLAYER_MIN_Y: f32 = 45.0;
    pub const PLAYER_MAX_Y: f32 = 560.0;
    pub const MAX_HEALTH: i32 = 3;

    /// Asteroids
    pub const HAZARD_SIZE: (f32, f32) = (106.0, 88.0);
    pub const HAZARD_HITBOX_INSET: (f32, f32) = (-15.0, -65.0);
    pub const HAZARD_SPEED_RANGE: (u32, u32) = (4, 6);
    pub const HAZARD_MAX_Y: u32 = 620;
    pub const MAX_LIVE_HAZARDS: usize = 3;

    /// Health keys
    pub const PICKUP_SIZE: (f32, f32) = (106.0, 88.0);
    pub const PICKUP_HITBOX_INSET: (f32, f32) = (-20.0, -20.0);
    pub const PICKUP_SPEED: f32 = 3.0;
    /// Vertical band for the pickup center
    pub const PICKUP_CENTER_Y_RANGE: (u32, u32) = (118, 620);

    /// Department stations
    pub const STATION_SIZE: (f32, f32) = (220.0, 220.0);
    pub const STATION_SPEED: f32 = 2.0;
    /// Departure speed multiplier
    pub const DEPARTURE_SPEED_FACTOR: f32 = 2.0;

    /// Final planet
    pub const GOAL_SIZE: (f32, f32) = (360.0, 360.0);
    pub const GOAL_HITBOX_INSET: (f32, f32) = (-70.0, -70.0);
    pub const GOAL_SPEED: f32 = 2.0;
    pub const GOAL_REST_X: f32 = 750.0;
    pub const GOAL_Y: f32 = 200.0;

    /// Alarm cadences
    pub const PICKUP_PERIOD_MS: u32 = 9_000;
    pub const STATION_DELAY_MS: u32 = 12_000;
    pub const GOAL_DELAY_MS: u32 = 3_000;

    /// Number of pages on the rules screen
    pub const RULES_PAGE_COUNT: u32 = 16;

    /// Background scroll speed (pixels per frame)
    pub const STARFIELD_SPEED: f32 = 1.0;
}

/// Convert a `(x, y)` constant pair to a vector
#[inline]
pub fn vec2(pair: (f32, f32)) -> Vec2 {
    Vec2::new(pair.0, pair.1)
}
