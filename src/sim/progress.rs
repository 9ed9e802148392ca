//! Session progress: completed stations, quiz score and the run outcome

use std::collections::BTreeSet;

use crate::catalog::StationId;

/// Where the current run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Free flight or quiz
    #[default]
    Running,
    /// Frozen until the player unpauses
    Paused,
    /// The ship reached the final planet
    Won,
    /// The ship ran out of health
    Lost,
}

impl SessionPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionPhase::Won | SessionPhase::Lost)
    }
}

/// Terminal result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Progress tracked across a session (survives a restart after losing)
#[derive(Debug, Clone)]
pub struct ProgressRecord {
    completed: BTreeSet<StationId>,
    total_correct: u32,
    station_count: usize,
    all_done: bool,
    goal_reached: bool,
    phase: SessionPhase,
}

impl ProgressRecord {
    pub fn new(station_count: usize) -> Self {
        Self {
            completed: BTreeSet::new(),
            total_correct: 0,
            station_count,
            all_done: false,
            goal_reached: false,
            phase: SessionPhase::Running,
        }
    }

    /// Record a finished quiz. Returns true if this completion finished the
    /// last remaining station.
    pub fn complete_station(&mut self, id: StationId, correct: u32) -> bool {
        if !self.completed.insert(id) {
            log::warn!("Station {} completed twice, keeping the first result", id);
            return false;
        }
        self.total_correct += correct;

        if !self.all_done && self.completed.len() >= self.station_count {
            self.all_done = true;
            return true;
        }
        false
    }

    pub fn is_complete(&self, id: StationId) -> bool {
        self.completed.contains(&id)
    }

    pub fn is_all_complete(&self) -> bool {
        self.all_done
    }

    pub fn completed(&self) -> &BTreeSet<StationId> {
        &self.completed
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    pub fn station_count(&self) -> usize {
        self.station_count
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    pub fn mark_goal_reached(&mut self) {
        self.goal_reached = true;
    }

    /// Toggle between Running and Paused. Returns the new phase.
    pub fn toggle_pause(&mut self) -> SessionPhase {
        self.phase = match self.phase {
            SessionPhase::Running => SessionPhase::Paused,
            SessionPhase::Paused => SessionPhase::Running,
            other => other,
        };
        self.phase
    }

    /// Check for a win or a loss. Reports each terminal transition once.
    pub fn evaluate_end_conditions(&mut self, health: i32) -> Option<Outcome> {
        if self.phase.is_terminal() {
            return None;
        }

        let outcome = if self.goal_reached {
            Outcome::Won
        } else if health <= 0 {
            Outcome::Lost
        } else {
            return None;
        };

        self.phase = match outcome {
            Outcome::Won => SessionPhase::Won,
            Outcome::Lost => SessionPhase::Lost,
        };
        debug_assert!(!(self.phase == SessionPhase::Lost && self.goal_reached));
        Some(outcome)
    }

    /// Wipe everything for a brand new game
    pub fn reset_for_new_session(&mut self) {
        *self = Self::new(self.station_count);
    }

    /// Restart after a loss, keeping completed stations and score
    pub fn reset_for_restart(&mut self) {
        self.goal_reached = false;
        self.phase = SessionPhase::Running;
        self.all_done = self.completed.len() >= self.station_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::RangeInclusive<u32>) -> Vec<StationId> {
        range.map(StationId).collect()
    }

    #[test]
    fn test_complete_station_idempotent() {
        let mut p = ProgressRecord::new(5);
        assert!(!p.complete_station(StationId(1), 4));
        assert!(!p.complete_station(StationId(1), 4));
        assert_eq!(p.completed_count(), 1);
        assert_eq!(p.total_correct(), 4);
    }

    #[test]
    fn test_all_complete_flips_once() {
        let mut p = ProgressRecord::new(5);
        let mut flips = 0;
        for id in ids(1..=5).into_iter().rev() {
            assert!(!p.is_all_complete());
            if p.complete_station(id, 1) {
                flips += 1;
            }
        }
        assert_eq!(flips, 1);
        assert!(p.is_all_complete());
        p.complete_station(StationId(3), 5);
        assert!(p.is_all_complete());
        assert_eq!(p.total_correct(), 5);
    }

    #[test]
    fn test_loss_reported_once() {
        let mut p = ProgressRecord::new(5);
        assert_eq!(p.evaluate_end_conditions(1), None);
        assert_eq!(p.evaluate_end_conditions(0), Some(Outcome::Lost));
        assert_eq!(p.phase(), SessionPhase::Lost);
        assert_eq!(p.evaluate_end_conditions(-1), None);
        assert_eq!(p.phase(), SessionPhase::Lost);
    }

    #[test]
    fn test_win_takes_priority_over_loss() {
        let mut p = ProgressRecord::new(1);
        p.mark_goal_reached();
        assert_eq!(p.evaluate_end_conditions(0), Some(Outcome::Won));
        assert_eq!(p.phase(), SessionPhase::Won);
        assert_eq!(p.evaluate_end_conditions(0), None);
    }

    #[test]
    fn test_pause_only_from_running() {
        let mut p = ProgressRecord::new(1);
        assert_eq!(p.toggle_pause(), SessionPhase::Paused);
        assert_eq!(p.evaluate_end_conditions(0), Some(Outcome::Lost));
        assert_eq!(p.toggle_pause(), SessionPhase::Lost);
    }

    #[test]
    fn test_restart_keeps_progress() {
        let mut p = ProgressRecord::new(5);
        p.complete_station(StationId(1), 3);
        p.complete_station(StationId(2), 5);
        p.evaluate_end_conditions(0);

        p.reset_for_restart();
        assert_eq!(p.phase(), SessionPhase::Running);
        assert_eq!(p.completed().iter().copied().collect::<Vec<_>>(), ids(1..=2));
        assert_eq!(p.total_correct(), 8);
        assert!(!p.is_all_complete());
        assert!(!p.goal_reached());
    }

    #[test]
    fn test_restart_recomputes_all_done() {
        let mut p = ProgressRecord::new(2);
        p.complete_station(StationId(1), 1);
        p.complete_station(StationId(2), 1);
        p.evaluate_end_conditions(0);
        p.reset_for_restart();
        assert!(p.is_all_complete());
    }

    #[test]
    fn test_new_session_clears_everything() {
        let mut p = ProgressRecord::new(2);
        p.complete_station(StationId(1), 1);
        p.complete_station(StationId(2), 1);
        p.mark_goal_reached();
        p.evaluate_end_conditions(3);
        p.reset_for_new_session();
        assert_eq!(p.completed_count(), 0);
        assert_eq!(p.total_correct(), 0);
        assert!(!p.is_all_complete());
        assert!(!p.goal_reached());
        assert_eq!(p.phase(), SessionPhase::Running);
        assert_eq!(p.station_count(), 2);
    }
}
