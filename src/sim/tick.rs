//! Per-frame coordinator
//!
//! One call to [`tick`] is one frame: due timer signals are handled, input
//! events are routed to whatever owns them in the current phase, and then
//! the world is stepped.

use glam::Vec2;

use super::collision::{resolve_goal, resolve_hazards, resolve_pickups, station_at};
use super::progress::{Outcome, SessionPhase};
use super::quiz::{QuizClick, QuizResult};
use super::state::{GameEvent, GameState};
use super::timers::Alarm;
use crate::catalog::StationId;
use crate::platform::{FrameInput, HeldKeys, InputEvent, Key};
use crate::ui::layout;

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &FrameInput) {
    state.time_ticks += 1;

    // Schedules only run in free flight
    if state.is_free_flight() {
        state.timers.advance(input.elapsed_ms);
    }
    while let Some(alarm) = state.timers.poll() {
        handle_alarm(state, alarm);
    }

    for event in &input.events {
        handle_event(state, event);
    }

    match state.phase() {
        SessionPhase::Running if !state.quiz.is_active() => free_flight(state, input.held),
        // Stations keep docking or leaving behind the overlay
        SessionPhase::Running => state.world.advance_stations(),
        SessionPhase::Paused => {}
        SessionPhase::Won | SessionPhase::Lost => {
            state.world.advance_stations();
            state.world.advance_goal();
        }
    }
}

fn handle_alarm(state: &mut GameState, alarm: Alarm) {
    if !state.is_free_flight() {
        log::debug!("Dropping {alarm:?} signal outside free flight");
        return;
    }

    match alarm {
        Alarm::Pickup => {
            state.world.spawn_pickup(&mut state.rng);
            state.events.push(GameEvent::PickupSpawned);
        }
        Alarm::Station => {
            if state.progress.is_all_complete() {
                return;
            }
            if let Some(id) = state.world.try_spawn_station(&state.catalog, &state.progress) {
                state.events.push(GameEvent::StationSpawned(id));
            }
        }
        Alarm::Goal => {
            if state.world.try_spawn_goal(state.progress.is_all_complete()) {
                state.events.push(GameEvent::GoalSpawned);
            }
        }
    }
}

fn handle_event(state: &mut GameState, event: &InputEvent) {
    match state.phase() {
        SessionPhase::Running => match event {
            InputEvent::KeyDown(Key::Space) => {
                state.progress.toggle_pause();
                state.events.push(GameEvent::Paused);
            }
            _ => {
                if let Some(pos) = event.left_click() {
                    handle_click(state, pos);
                }
            }
        },
        SessionPhase::Paused => {
            if *event == InputEvent::KeyDown(Key::Space) {
                state.progress.toggle_pause();
                state.events.push(GameEvent::Resumed);
            }
        }
        SessionPhase::Lost => {
            if event
                .left_click()
                .is_some_and(|pos| layout::restart_button().contains(pos))
            {
                state.restart_keep_progress();
            }
        }
        SessionPhase::Won => {}
    }
}

fn handle_click(state: &mut GameState, pos: Vec2) {
    if state.quiz.is_active() {
        match state.quiz.click(pos) {
            QuizClick::Ignored => {}
            QuizClick::Answered { correct } => {
                state.events.push(GameEvent::AnswerGiven { correct });
            }
            QuizClick::Finished(result) => finish_station(state, result),
        }
        return;
    }

    if state.progress.is_all_complete() {
        return;
    }
    if let Some(id) = station_at(&state.world.stations, pos) {
        open_quiz(state, id);
    }
}

fn open_quiz(state: &mut GameState, id: StationId) {
    let Some(desc) = state.catalog.get(id) else {
        log::warn!("Clicked station {id} is not in the catalog");
        return;
    };
    state.events.push(GameEvent::StationClicked(id));

    // Nothing may spawn under the overlay
    state.timers.disarm_all();

    match state.quiz.open(desc) {
        Ok(()) => state.events.push(GameEvent::QuizOpened(id)),
        Err(err) => {
            log::warn!("Cannot open quiz: {err}");
            state
                .timers
                .resume_after_modal(state.progress.is_all_complete());
            state.events.push(GameEvent::QuizRejected(id));
        }
    }
}

fn finish_station(state: &mut GameState, result: QuizResult) {
    let just_finished_all = state
        .progress
        .complete_station(result.station, result.correct);

    if let Some(station) = state.world.station_mut(result.station) {
        station.start_departure();
    }
    state
        .timers
        .resume_after_modal(state.progress.is_all_complete());
    state.events.push(GameEvent::StationCompleted {
        station: result.station,
        correct: result.correct,
        total: result.total,
    });

    if just_finished_all {
        state.timers.schedule_goal();
        state.events.push(GameEvent::AllStationsComplete);
        log::info!(
            "All stations complete with {} correct answers",
            state.progress.total_correct()
        );
    }
}

fn free_flight(state: &mut GameState, held: HeldKeys) {
    state.world.advance_stations();
    state.player.steer(held);

    state.world.advance_drifters();
    state.world.replenish_hazards(&mut state.rng);

    let hits = resolve_hazards(&mut state.player, &mut state.world.hazards);
    for _ in 0..hits {
        state.events.push(GameEvent::HazardHit);
    }
    let (heals, wasted) = resolve_pickups(&mut state.player, &mut state.world.pickups);
    for _ in 0..heals {
        state.events.push(GameEvent::PlayerHealed);
    }
    if hits > 0 || heals > 0 || wasted > 0 {
        log::debug!(
            "Contacts: {hits} hits, {heals} heals, {wasted} wasted keys, health {}",
            state.player.health
        );
    }

    state.world.advance_goal();
    let all_done = state.progress.is_all_complete();
    if resolve_goal(&state.player, &mut state.world.goal, all_done) {
        state.progress.mark_goal_reached();
        state.events.push(GameEvent::GoalReached);
    }

    match state.progress.evaluate_end_conditions(state.player.health) {
        Some(Outcome::Won) => {
            state.timers.disarm_all();
            state.events.push(GameEvent::Won);
        }
        Some(Outcome::Lost) => {
            state.timers.disarm_all();
            state.quiz.close();
            state.events.push(GameEvent::Lost);
        }
        None => {}
    }
}
