//! Spawn alarms
//!
//! Three named alarms drive the timed spawns. Time only moves when the
//! session calls [`TimerService::advance`], so a paused or modal session
//! simply stops advancing it.

use std::collections::VecDeque;

use crate::consts::{GOAL_DELAY_MS, PICKUP_PERIOD_MS, STATION_DELAY_MS};

/// The alarms owned by the timer service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alarm {
    /// Health key spawn (repeating)
    Pickup,
    /// Next department fly-in (one-shot)
    Station,
    /// Final planet fly-in (one-shot)
    Goal,
}

impl Alarm {
    pub const ALL: [Alarm; 3] = [Alarm::Pickup, Alarm::Station, Alarm::Goal];

    fn slot(self) -> usize {
        match self {
            Alarm::Pickup => 0,
            Alarm::Station => 1,
            Alarm::Goal => 2,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ArmedAlarm {
    remaining_ms: u32,
    interval_ms: u32,
    repeating: bool,
}

/// Alarm clock plus the queue of fired-but-unconsumed signals
#[derive(Debug, Clone, Default)]
pub struct TimerService {
    slots: [Option<ArmedAlarm>; 3],
    pending: VecDeque<Alarm>,
}

impl TimerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) an alarm. A zero interval disarms it.
    pub fn arm(&mut self, alarm: Alarm, interval_ms: u32, repeating: bool) {
        if interval_ms == 0 {
            self.disarm(alarm);
            return;
        }
        self.slots[alarm.slot()] = Some(ArmedAlarm {
            remaining_ms: interval_ms,
            interval_ms,
            repeating,
        });
        log::debug!("Armed {:?} for {} ms (repeating: {})", alarm, interval_ms, repeating);
    }

    /// Cancel one alarm and drop its queued signals
    pub fn disarm(&mut self, alarm: Alarm) {
        self.slots[alarm.slot()] = None;
        self.pending.retain(|a| *a != alarm);
    }

    /// Cancel every alarm and drop every queued signal
    pub fn disarm_all(&mut self) {
        self.slots = [None; 3];
        self.pending.clear();
    }

    /// Arm the schedules a fresh run starts with
    pub fn start_session(&mut self) {
        self.disarm_all();
        self.arm(Alarm::Pickup, PICKUP_PERIOD_MS, true);
        self.arm(Alarm::Station, STATION_DELAY_MS, false);
    }

    /// Re-arm after a quiz closes. The station schedule only comes back while
    /// departments remain.
    pub fn resume_after_modal(&mut self, all_stations_done: bool) {
        self.pending.clear();
        self.arm(Alarm::Pickup, PICKUP_PERIOD_MS, true);
        if !all_stations_done {
            self.arm(Alarm::Station, STATION_DELAY_MS, false);
        }
    }

    /// Schedule the final planet
    pub fn schedule_goal(&mut self) {
        self.disarm(Alarm::Station);
        self.arm(Alarm::Goal, GOAL_DELAY_MS, false);
    }

    pub fn is_armed(&self, alarm: Alarm) -> bool {
        self.slots[alarm.slot()].is_some()
    }

    /// Milliseconds until the alarm next fires
    pub fn remaining_ms(&self, alarm: Alarm) -> Option<u32> {
        self.slots[alarm.slot()].map(|a| a.remaining_ms)
    }

    /// Let `elapsed_ms` pass, queueing one signal per fire
    pub fn advance(&mut self, elapsed_ms: u32) {
        for alarm in Alarm::ALL {
            let slot = &mut self.slots[alarm.slot()];
            let Some(armed) = slot.as_mut() else {
                continue;
            };

            let mut budget = elapsed_ms;
            loop {
                if budget < armed.remaining_ms {
                    armed.remaining_ms -= budget;
                    break;
                }
                budget -= armed.remaining_ms;
                self.pending.push_back(alarm);
                if armed.repeating {
                    armed.remaining_ms = armed.interval_ms;
                } else {
                    *slot = None;
                    break;
                }
            }
        }
    }

    /// Take the oldest queued signal
    pub fn poll(&mut self) -> Option<Alarm> {
        self.pending.pop_front()
    }

    /// Number of queued signals
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(timers: &mut TimerService) -> Vec<Alarm> {
        std::iter::from_fn(|| timers.poll()).collect()
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut timers = TimerService::new();
        timers.arm(Alarm::Goal, 3_000, false);
        timers.advance(2_999);
        assert!(drain(&mut timers).is_empty());
        timers.advance(1);
        assert_eq!(drain(&mut timers), vec![Alarm::Goal]);
        assert!(!timers.is_armed(Alarm::Goal));
        timers.advance(10_000);
        assert!(drain(&mut timers).is_empty());
    }

    #[test]
    fn test_repeating_fires_per_period() {
        let mut timers = TimerService::new();
        timers.arm(Alarm::Pickup, 9_000, true);
        timers.advance(9_000 * 3 + 500);
        assert_eq!(drain(&mut timers).len(), 3);
        assert_eq!(timers.remaining_ms(Alarm::Pickup), Some(8_500));
    }

    #[test]
    fn test_disarm_all_drops_queued_signals() {
        let mut timers = TimerService::new();
        timers.start_session();
        timers.advance(12_000);
        assert_eq!(timers.pending_len(), 2);
        timers.disarm_all();
        assert_eq!(timers.pending_len(), 0);
        assert!(Alarm::ALL.iter().all(|a| !timers.is_armed(*a)));
        timers.advance(100_000);
        assert!(drain(&mut timers).is_empty());
    }

    #[test]
    fn test_resume_after_modal() {
        let mut timers = TimerService::new();
        timers.resume_after_modal(false);
        assert!(timers.is_armed(Alarm::Pickup));
        assert!(timers.is_armed(Alarm::Station));

        timers.disarm_all();
        timers.resume_after_modal(true);
        assert!(timers.is_armed(Alarm::Pickup));
        assert!(!timers.is_armed(Alarm::Station));
    }

    #[test]
    fn test_zero_interval_disarms() {
        let mut timers = TimerService::new();
        timers.arm(Alarm::Station, 100, false);
        timers.arm(Alarm::Station, 0, false);
        assert!(!timers.is_armed(Alarm::Station));
    }
}
