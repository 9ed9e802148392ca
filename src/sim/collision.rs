//! Contact resolution between the ship and everything else
//!
//! All tests are axis-aligned rectangle overlaps on collision bounds
//! (the inset hitboxes), except station clicks which use the full sprite.

use glam::Vec2;

use super::entities::{GoalObject, Hazard, Movable, Pickup, Player, Station};
use crate::catalog::StationId;
use crate::consts::MAX_HEALTH;

/// Every overlapping asteroid is destroyed and costs one health point.
/// Health is not clamped here.
pub fn resolve_hazards(player: &mut Player, hazards: &mut Vec<Hazard>) -> u32 {
    let ship = player.hitbox();
    let before = hazards.len();
    hazards.retain(|h| !h.hitbox().overlaps(&ship));
    let hits = (before - hazards.len()) as u32;
    player.health -= hits as i32;
    hits
}

/// Every overlapping key is consumed. Each one heals a point unless the
/// ship is already at full health. Returns `(heals, wasted)`.
pub fn resolve_pickups(player: &mut Player, pickups: &mut Vec<Pickup>) -> (u32, u32) {
    let ship = player.hitbox();
    let mut heals = 0;
    let mut wasted = 0;
    pickups.retain(|p| {
        if !p.hitbox().overlaps(&ship) {
            return true;
        }
        if player.health < MAX_HEALTH {
            player.health += 1;
            heals += 1;
        } else {
            wasted += 1;
        }
        false
    });
    (heals, wasted)
}

/// Touching the final planet consumes it. Only armed once every station is
/// done.
pub fn resolve_goal(player: &Player, goal: &mut Option<GoalObject>, all_done: bool) -> bool {
    if !all_done {
        return false;
    }
    let touched = goal
        .as_ref()
        .is_some_and(|g| g.hitbox().overlaps(&player.hitbox()));
    if touched {
        *goal = None;
    }
    touched
}

/// First station under the cursor, in live order. Departing stations cannot
/// be targeted.
pub fn station_at(stations: &[Station], point: Vec2) -> Option<StationId> {
    stations
        .iter()
        .find(|s| !s.is_departing() && s.bounds().contains(point))
        .map(|s| s.id)
}
