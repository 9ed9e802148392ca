//! Session state
//!
//! Everything a run needs lives in [`GameState`]: the ship, the live
//! entities, the timers, the quiz overlay and the progress record.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entities::Player;
use super::progress::{ProgressRecord, SessionPhase};
use super::quiz::Quiz;
use super::timers::TimerService;
use super::world::World;
use crate::catalog::{Catalog, StationId};

/// Side effects of a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    SessionStarted,
    Restarted,
    StationSpawned(StationId),
    StationClicked(StationId),
    QuizOpened(StationId),
    /// A station could not be quizzed (no questions)
    QuizRejected(StationId),
    AnswerGiven { correct: bool },
    StationCompleted { station: StationId, correct: u32, total: u32 },
    AllStationsComplete,
    PickupSpawned,
    HazardHit,
    PlayerHealed,
    GoalSpawned,
    GoalReached,
    Paused,
    Resumed,
    Won,
    Lost,
}

/// One play session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub catalog: Catalog,
    pub player: Player,
    pub world: World,
    pub progress: ProgressRecord,
    pub quiz: Quiz,
    pub timers: TimerService,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session over a station catalog. Nothing is scheduled until
    /// [`GameState::start_new_session`] is called.
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        let progress = ProgressRecord::new(catalog.len());
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            catalog,
            player: Player::default(),
            world: World::default(),
            progress,
            quiz: Quiz::new(),
            timers: TimerService::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.progress.phase()
    }

    /// Running with no quiz open
    pub fn is_free_flight(&self) -> bool {
        self.phase() == SessionPhase::Running && !self.quiz.is_active()
    }

    /// Fresh game: progress wiped, schedules armed
    pub fn start_new_session(&mut self) {
        self.reset_world();
        self.progress.reset_for_new_session();
        self.timers.start_session();
        self.events.push(GameEvent::SessionStarted);
        log::info!(
            "New session: {} stations, seed {}",
            self.catalog.len(),
            self.seed
        );
    }

    /// Fly again after a loss, keeping completed stations and score
    pub fn restart_keep_progress(&mut self) {
        self.reset_world();
        self.progress.reset_for_restart();
        self.timers.start_session();
        if self.progress.is_all_complete() {
            self.timers.schedule_goal();
        }
        self.events.push(GameEvent::Restarted);
        log::info!(
            "Restarted with {}/{} stations complete",
            self.progress.completed_count(),
            self.progress.station_count()
        );
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn reset_world(&mut self) {
        self.world.clear();
        self.player.reset();
        self.quiz.close();
    }
}
