//! Live entity collections and their spawn rules

use rand::Rng;
use rand_pcg::Pcg32;

use super::entities::{GoalObject, Hazard, Movable, Pickup, Station, advance_and_cull};
use super::progress::ProgressRecord;
use crate::catalog::{Catalog, StationId};
use crate::consts::*;

/// Everything that scrolls past the ship, partitioned by kind
#[derive(Debug, Clone, Default)]
pub struct World {
    pub hazards: Vec<Hazard>,
    pub pickups: Vec<Pickup>,
    pub stations: Vec<Station>,
    pub goal: Option<GoalObject>,
}

impl World {
    pub fn clear(&mut self) {
        self.hazards.clear();
        self.pickups.clear();
        self.stations.clear();
        self.goal = None;
    }

    /// Top the asteroid field up by one if it is below the cap
    pub fn replenish_hazards(&mut self, rng: &mut Pcg32) -> bool {
        if self.hazards.len() >= MAX_LIVE_HAZARDS {
            return false;
        }
        let speed = rng.random_range(HAZARD_SPEED_RANGE.0..=HAZARD_SPEED_RANGE.1) as f32;
        let y = rng.random_range(0..=HAZARD_MAX_Y) as f32;
        let variant = rng.random_range(0..=1u8);
        self.hazards.push(Hazard::new(y, speed, variant));
        true
    }

    pub fn spawn_pickup(&mut self, rng: &mut Pcg32) {
        let center_y = rng.random_range(PICKUP_CENTER_Y_RANGE.0..=PICKUP_CENTER_Y_RANGE.1) as f32;
        self.pickups.push(Pickup::new(center_y));
    }

    /// A station is flying in or waiting at its rest position
    pub fn has_approaching_station(&self) -> bool {
        self.stations.iter().any(|s| !s.is_departing())
    }

    /// Fly in the first incomplete station in catalog order, unless one is
    /// already approaching
    pub fn try_spawn_station(
        &mut self,
        catalog: &Catalog,
        progress: &ProgressRecord,
    ) -> Option<StationId> {
        if self.has_approaching_station() {
            return None;
        }
        let next = catalog.stations().iter().find(|d| {
            !progress.is_complete(d.id) && !self.stations.iter().any(|s| s.id == d.id)
        })?;
        self.stations.push(Station::new(next));
        log::info!("Station {} ({}) flying in", next.title, next.id);
        Some(next.id)
    }

    /// Fly in the final planet once every station is done
    pub fn try_spawn_goal(&mut self, all_done: bool) -> bool {
        if !all_done || self.goal.is_some() {
            return false;
        }
        self.goal = Some(GoalObject::default());
        log::info!("Final planet flying in");
        true
    }

    pub fn station_mut(&mut self, id: StationId) -> Option<&mut Station> {
        self.stations.iter_mut().find(|s| s.id == id)
    }

    pub fn advance_stations(&mut self) {
        advance_and_cull(&mut self.stations);
    }

    pub fn advance_goal(&mut self) {
        if let Some(goal) = self.goal.as_mut() {
            goal.advance();
            if goal.is_expired() {
                self.goal = None;
            }
        }
    }

    /// Move the free-flight entities (asteroids and keys) one tick
    pub fn advance_drifters(&mut self) {
        advance_and_cull(&mut self.hazards);
        advance_and_cull(&mut self.pickups);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::catalog;
    use rand::SeedableRng;

    #[test]
    fn test_hazard_cap() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut world = World::default();
        for _ in 0..10 {
            world.replenish_hazards(&mut rng);
            assert!(world.hazards.len() <= MAX_LIVE_HAZARDS);
        }
        assert_eq!(world.hazards.len(), MAX_LIVE_HAZARDS);
        for h in &world.hazards {
            assert!((4.0..=6.0).contains(&h.speed));
            assert!(h.variant <= 1);
        }
    }

    #[test]
    fn test_pickup_band() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut world = World::default();
        for _ in 0..50 {
            world.spawn_pickup(&mut rng);
        }
        for p in &world.pickups {
            let c = p.bounds().center();
            assert_eq!(c.x, SCREEN_WIDTH);
            assert!((118.0..=620.0).contains(&c.y));
        }
    }

    #[test]
    fn test_one_station_at_a_time_in_order() {
        let catalog = catalog(3);
        let mut progress = ProgressRecord::new(3);
        let mut world = World::default();

        assert_eq!(world.try_spawn_station(&catalog, &progress), Some(StationId(1)));
        assert_eq!(world.try_spawn_station(&catalog, &progress), None);

        progress.complete_station(StationId(1), 0);
        world.station_mut(StationId(1)).unwrap().start_departure();
        assert_eq!(world.try_spawn_station(&catalog, &progress), Some(StationId(2)));
        assert_eq!(world.stations.len(), 2);
    }

    #[test]
    fn test_skips_completed_stations() {
        let catalog = catalog(3);
        let mut progress = ProgressRecord::new(3);
        progress.complete_station(StationId(1), 0);
        progress.complete_station(StationId(2), 0);
        let mut world = World::default();
        assert_eq!(world.try_spawn_station(&catalog, &progress), Some(StationId(3)));

        progress.complete_station(StationId(3), 0);
        world.clear();
        assert_eq!(world.try_spawn_station(&catalog, &progress), None);
    }

    #[test]
    fn test_goal_spawns_once() {
        let mut world = World::default();
        assert!(!world.try_spawn_goal(false));
        assert!(world.try_spawn_goal(true));
        assert!(!world.try_spawn_goal(true));
    }
}
