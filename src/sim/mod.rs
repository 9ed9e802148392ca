//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the per-frame elapsed milliseconds
//! - Seeded RNG only
//! - Stable iteration order (spawn order, catalog order)
//! - No rendering dependencies; input arrives as plain event values

pub mod collision;
pub mod entities;
pub mod progress;
pub mod quiz;
pub mod rect;
pub mod state;
pub mod tick;
pub mod timers;
pub mod world;

pub use collision::{resolve_goal, resolve_hazards, resolve_pickups, station_at};
pub use entities::{
    DockingMotion, Facing, GoalObject, Hazard, Movable, Pickup, Player, Station, StationPhase,
};
pub use progress::{Outcome, ProgressRecord, SessionPhase};
pub use quiz::{Quiz, QuizClick, QuizError, QuizPhase, QuizResult, QuizSession};
pub use rect::Rect;
pub use state::{GameEvent, GameState};
pub use tick::tick;
pub use timers::{Alarm, TimerService};
pub use world::World;
