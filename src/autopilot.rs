//! Demo driver
//!
//! Plays through the same input events a person would produce: reads the
//! rules, starts, dodges asteroids, grabs keys when hurt, docks at stations
//! and answers their quizzes. Used for the headless demo run.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::app::{App, Screen};
use crate::consts::*;
use crate::platform::{FrameInput, HeldKeys, InputEvent, Key};
use crate::sim::{GameState, Movable, SessionPhase};
use crate::ui::layout;
use crate::vec2;

/// Frames between two deliberate clicks or key presses
pub const THINK_FRAMES: u32 = 20;
/// How far ahead of the ship asteroids are watched
const DODGE_LOOKAHEAD: f32 = 320.0;
/// Extra vertical clearance kept from asteroids
const DODGE_MARGIN: f32 = 30.0;

pub struct Autopilot {
    rng: Pcg32,
    /// Chance of picking the right answer
    accuracy: f64,
    cooldown: u32,
    frame: u64,
}

impl Autopilot {
    pub fn new(seed: u64, accuracy: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            accuracy: accuracy.clamp(0.0, 1.0),
            cooldown: 0,
            frame: 0,
        }
    }

    /// Input for the next frame
    pub fn drive(&mut self, app: &App) -> FrameInput {
        let mut input = FrameInput::idle(self.next_elapsed_ms());
        self.cooldown = self.cooldown.saturating_sub(1);

        match app.screen() {
            Screen::Menu => {
                let button = if app.rules_read() {
                    layout::start_button()
                } else {
                    layout::rules_button()
                };
                self.click(&mut input, button.center());
            }
            Screen::Rules { .. } => self.click(&mut input, layout::rules_next_center()),
            Screen::Game => self.play(app.game(), &mut input),
        }
        input
    }

    /// Frame length at the target rate, alternating 16 and 17 ms
    fn next_elapsed_ms(&mut self) -> u32 {
        let start = (self.frame as f64 * FRAME_MS) as u32;
        self.frame += 1;
        let end = (self.frame as f64 * FRAME_MS) as u32;
        end - start
    }

    fn ready(&self) -> bool {
        self.cooldown == 0
    }

    fn click(&mut self, input: &mut FrameInput, pos: Vec2) {
        self.press(input, InputEvent::click(pos));
    }

    fn press(&mut self, input: &mut FrameInput, event: InputEvent) {
        if self.ready() {
            input.events.push(event);
            self.cooldown = THINK_FRAMES;
        }
    }

    fn play(&mut self, game: &GameState, input: &mut FrameInput) {
        match game.phase() {
            SessionPhase::Lost => self.click(input, layout::restart_button().center()),
            SessionPhase::Won => {}
            SessionPhase::Paused => self.press(input, InputEvent::KeyDown(Key::Space)),
            SessionPhase::Running => {
                if let Some(session) = game.quiz.session() {
                    if !self.ready() {
                        return;
                    }
                    let target = match session.current() {
                        Some(question) => {
                            let choice = if self.rng.random_bool(self.accuracy) {
                                question.correct
                            } else {
                                (question.correct + 1) % question.answers.len()
                            };
                            layout::answer_rect(choice)
                        }
                        None => layout::continue_button(),
                    };
                    self.click(input, target.center());
                    return;
                }

                input.held = steer(game);
                if game.progress.is_all_complete() {
                    return;
                }
                if let Some(station) = game.world.stations.iter().find(|s| s.is_docked()) {
                    self.click(input, station.bounds().center());
                }
            }
        }
    }
}

/// Arrow keys for free flight
fn steer(game: &GameState) -> HeldKeys {
    let player = &game.player;
    let ship = player.hitbox();

    if let Some(threat_y) = nearest_threat(game) {
        let mut up = threat_y >= ship.center().y;
        if up && player.pos.y <= PLAYER_MIN_Y {
            up = false;
        } else if !up && player.pos.y >= PLAYER_MAX_Y {
            up = true;
        }
        return HeldKeys {
            up,
            down: !up,
            ..Default::default()
        };
    }

    let wanted_key = game
        .world
        .pickups
        .iter()
        .map(|p| p.hitbox().center())
        .filter(|c| c.x > ship.left())
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .filter(|_| player.health < MAX_HEALTH);

    let target = match (&game.world.goal, wanted_key) {
        (Some(goal), _) => Vec2::new(PLAYER_MAX_X + ship.size.x / 2.0, goal.hitbox().center().y),
        (None, Some(key)) => Vec2::new(ship.center().x, key.y),
        (None, None) => vec2(PLAYER_START_CENTER),
    };

    let delta = target - ship.center();
    HeldKeys {
        left: delta.x < -PLAYER_SPEED,
        right: delta.x > PLAYER_SPEED,
        up: delta.y < -PLAYER_SPEED,
        down: delta.y > PLAYER_SPEED,
    }
}

/// Vertical center of the closest asteroid on a collision course
fn nearest_threat(game: &GameState) -> Option<f32> {
    let ship = game.player.hitbox();
    game.world
        .hazards
        .iter()
        .map(|h| h.hitbox())
        .filter(|h| h.right() > ship.left() && h.left() < ship.right() + DODGE_LOOKAHEAD)
        .filter(|h| h.bottom() + DODGE_MARGIN > ship.top() && h.top() - DODGE_MARGIN < ship.bottom())
        .min_by(|a, b| a.left().total_cmp(&b.left()))
        .map(|h| h.center().y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::catalog;
    use crate::sim::Hazard;

    #[test]
    fn test_frame_cadence() {
        let mut pilot = Autopilot::new(1, 1.0);
        let total: u32 = (0..60).map(|_| pilot.next_elapsed_ms()).sum();
        assert_eq!(total, 1_000);
    }

    #[test]
    fn test_reads_rules_then_starts() {
        let mut app = App::new(catalog(2), 3);
        let mut pilot = Autopilot::new(3, 1.0);
        for _ in 0..1_000 {
            if app.screen() == Screen::Game {
                break;
            }
            let input = pilot.drive(&app);
            app.frame(&input);
        }
        assert_eq!(app.screen(), Screen::Game);
        assert!(app.rules_read());
    }

    #[test]
    fn test_dodges_incoming_asteroid() {
        let mut game = GameState::new(catalog(1), 1);
        game.start_new_session();
        let ship = game.player.hitbox();

        // Slightly below the ship's center line, so the ship climbs
        let mut hazard = Hazard::new(0.0, 5.0, 0);
        hazard.pos = Vec2::new(ship.right() + 100.0, ship.center().y + 5.0) - vec2(HAZARD_SIZE) / 2.0;
        game.world.hazards.push(hazard);

        let held = steer(&game);
        assert!(held.up);
        assert!(!held.down);
    }

    #[test]
    fn test_answers_and_continues_quiz() {
        let mut app = App::new(catalog(1), 9);
        let mut pilot = Autopilot::new(9, 1.0);
        let mut completed = false;
        for _ in 0..20_000 {
            let input = pilot.drive(&app);
            app.frame(&input);
            if app.game().progress.completed_count() == 1 {
                completed = true;
                break;
            }
        }
        assert!(completed);
        assert_eq!(app.game().progress.total_correct(), 5);
    }

    #[test]
    fn test_restarts_after_loss() {
        let mut app = App::new(catalog(1), 4);
        let mut pilot = Autopilot::new(4, 1.0);
        while app.screen() != Screen::Game {
            let input = pilot.drive(&app);
            app.frame(&input);
        }
        app.game_mut().player.health = 0;
        app.frame(&FrameInput::idle(16));
        assert_eq!(app.game().phase(), SessionPhase::Lost);

        for _ in 0..=THINK_FRAMES {
            let input = pilot.drive(&app);
            app.frame(&input);
        }
        assert_eq!(app.game().phase(), SessionPhase::Running);
        assert_eq!(app.game().player.health, MAX_HEALTH);
    }
}
