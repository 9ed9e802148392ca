//! Frame composition
//!
//! Builds the full draw list for whichever screen the app is on. Layout
//! rectangles come from `ui::layout`, so the buttons drawn here are the
//! same ones clicks are tested against.

use glam::Vec2;

use super::palette::*;
use super::{DrawCmd, FontSize, Sprite, Starfield};
use crate::app::{App, Screen};
use crate::consts::*;
use crate::sim::{GameState, Movable, QuizPhase, QuizSession, Rect, SessionPhase};
use crate::ui::{FixedWidthFont, TextMeasure, layout, wrap_lines};

const HALF_W: f32 = SCREEN_WIDTH / 2.0;
const HALF_H: f32 = SCREEN_HEIGHT / 2.0;

const LOGO_SIZE: Vec2 = Vec2::new(950.0, 300.0);
const HEALTH_ICON: Vec2 = Vec2::new(70.0, 70.0);
const PROGRESS_ICON: Vec2 = Vec2::new(132.0, 90.0);

const QUESTION_MAX_WIDTH: f32 = 1150.0;
const QUESTION_LINES: usize = 3;
const QUESTION_TOP: f32 = 145.0;
const QUESTION_LINE_HEIGHT: f32 = 30.0;
const ANSWER_MAX_WIDTH: f32 = 1000.0;
const ANSWER_LINES: usize = 2;
/// Vertical offsets of one- and two-line answers from the box center
const ONE_LINE: [f32; 1] = [0.0];
const TWO_LINES: [f32; 2] = [-13.0, 13.0];

const BUTTON_RADIUS: f32 = 12.0;
const MENU_BUTTON_RADIUS: f32 = 18.0;

/// Text metrics for the two wrapped text styles
#[derive(Debug, Clone)]
pub struct Fonts<F: TextMeasure> {
    /// Question lines
    pub big: F,
    /// Answer lines
    pub small: F,
}

impl Fonts<FixedWidthFont> {
    /// Approximate metrics for runs without a real font
    pub fn headless() -> Self {
        Self {
            big: FixedWidthFont { char_width: 18.0 },
            small: FixedWidthFont { char_width: 11.0 },
        }
    }
}

/// Draw list for the current frame
pub fn compose<F: TextMeasure>(app: &App, starfield: &Starfield, fonts: &Fonts<F>) -> Vec<DrawCmd> {
    let mut out = Vec::new();
    match app.screen() {
        Screen::Menu => {
            starfield.draw(&mut out);
            draw_menu(&mut out, app.rules_read());
        }
        Screen::Rules { page } => draw_rules(&mut out, page),
        Screen::Game => {
            starfield.draw(&mut out);
            draw_game(&mut out, app.game(), fonts);
        }
    }
    out
}

fn dim(out: &mut Vec<DrawCmd>) {
    out.push(DrawCmd::Fill {
        rect: Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        color: DIM,
    });
}

fn button(out: &mut Vec<DrawCmd>, rect: Rect, fill: [f32; 4], radius: f32) {
    out.push(DrawCmd::Panel {
        rect,
        fill,
        border: Some(WHITE),
        radius,
    });
}

fn draw_menu(out: &mut Vec<DrawCmd>, start_allowed: bool) {
    dim(out);
    out.push(DrawCmd::image(
        Sprite::Logo,
        Rect::centered(Vec2::new(HALF_W, 170.0), LOGO_SIZE),
    ));

    let start = layout::start_button();
    if start_allowed {
        button(out, start, BUTTON, MENU_BUTTON_RADIUS);
        out.push(DrawCmd::text("Start", start.center(), FontSize::Button, WHITE));
    } else {
        button(out, start, LOCKED, MENU_BUTTON_RADIUS);
        let c = start.center();
        out.push(DrawCmd::text(
            "Start",
            c - Vec2::new(0.0, 18.0),
            FontSize::Button,
            LOCKED_TEXT,
        ));
        out.push(DrawCmd::text(
            "(Read the rules first)",
            c + Vec2::new(0.0, 18.0),
            FontSize::ButtonSmall,
            LOCKED_TEXT,
        ));
    }

    let rules = layout::rules_button();
    button(out, rules, BUTTON, MENU_BUTTON_RADIUS);
    out.push(DrawCmd::text(
        "Assessment rules",
        rules.center(),
        FontSize::Button,
        WHITE,
    ));
}

fn draw_rules(out: &mut Vec<DrawCmd>, page: u32) {
    out.push(DrawCmd::image(
        Sprite::RulesPage(page),
        Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
    ));
    let center = layout::rules_next_center();
    out.push(DrawCmd::Circle {
        center,
        radius: layout::RULES_NEXT_RADIUS,
        fill: BUTTON,
        border: Some(BORDER),
    });
    out.push(DrawCmd::text(">", center, FontSize::Big, WHITE));
}

fn draw_game<F: TextMeasure>(out: &mut Vec<DrawCmd>, game: &GameState, fonts: &Fonts<F>) {
    for station in &game.world.stations {
        out.push(DrawCmd::image(
            Sprite::Station(station.image.clone()),
            station.bounds(),
        ));
    }

    match game.phase() {
        SessionPhase::Running => {
            if let Some(session) = game.quiz.session() {
                draw_hud(out, game);
                draw_quiz(out, session, game.quiz.phase(), fonts);
                return;
            }
            draw_flight(out, game);
            draw_hud(out, game);
        }
        SessionPhase::Paused => {
            match game.quiz.session() {
                Some(session) => {
                    draw_hud(out, game);
                    draw_quiz(out, session, game.quiz.phase(), fonts);
                }
                None => {
                    draw_flight(out, game);
                    draw_hud(out, game);
                }
            }
            dim(out);
            out.push(DrawCmd::text(
                "Pause! Press SPACE to continue",
                Vec2::new(HALF_W, HALF_H),
                FontSize::Big,
                WHITE,
            ));
        }
        SessionPhase::Won => {
            draw_goal(out, game);
            draw_hud(out, game);
            out.push(DrawCmd::text_at(
                "Mission completed! You successfully reached AIity",
                Vec2::new(225.0, 330.0),
                FontSize::Big,
                WHITE,
            ));
            out.push(DrawCmd::text_at(
                format!(
                    "with a score of: {} / {}",
                    game.progress.total_correct(),
                    game.catalog.total_questions()
                ),
                Vec2::new(225.0, 400.0),
                FontSize::Medium,
                WHITE,
            ));
        }
        SessionPhase::Lost => {
            draw_goal(out, game);
            draw_hud(out, game);
            out.push(DrawCmd::text_at(
                "You were not cautious enough",
                Vec2::new(275.0, 330.0),
                FontSize::Big,
                WHITE,
            ));
            let restart = layout::restart_button();
            button(out, restart, BUTTON, BUTTON_RADIUS);
            out.push(DrawCmd::text(
                "Start from beginning",
                restart.center(),
                FontSize::Medium,
                WHITE,
            ));
        }
    }
}

fn draw_goal(out: &mut Vec<DrawCmd>, game: &GameState) {
    if let Some(goal) = &game.world.goal {
        out.push(DrawCmd::image(Sprite::Goal, goal.bounds()));
    }
}

fn draw_flight(out: &mut Vec<DrawCmd>, game: &GameState) {
    let player = &game.player;
    out.push(DrawCmd::image(
        Sprite::Player {
            facing: player.facing,
            frame: player.anim_frame(),
        },
        player.bounds(),
    ));
    for hazard in &game.world.hazards {
        out.push(DrawCmd::image(
            Sprite::Hazard {
                variant: hazard.variant,
            },
            hazard.bounds(),
        ));
    }
    for pickup in &game.world.pickups {
        out.push(DrawCmd::image(Sprite::Pickup, pickup.bounds()));
    }
    draw_goal(out, game);
}

/// Health gears and the completed-station counter
fn draw_hud(out: &mut Vec<DrawCmd>, game: &GameState) {
    for i in 0..game.player.display_health() {
        out.push(DrawCmd::image(
            Sprite::HealthIcon,
            Rect::from_pos_size(Vec2::new(10.0 + i as f32 * HEALTH_ICON.x, 20.0), HEALTH_ICON),
        ));
    }
    out.push(DrawCmd::image(
        Sprite::ProgressIcon,
        Rect::from_pos_size(Vec2::new(1000.0, 20.0), PROGRESS_ICON),
    ));
    out.push(DrawCmd::text_at(
        game.progress.completed_count().to_string(),
        Vec2::new(1110.0, 10.0),
        FontSize::Big,
        WHITE,
    ));
}

fn draw_quiz<F: TextMeasure>(
    out: &mut Vec<DrawCmd>,
    session: &QuizSession,
    phase: QuizPhase,
    fonts: &Fonts<F>,
) {
    dim(out);

    if phase == QuizPhase::Results {
        out.push(DrawCmd::text(
            session.results_title(),
            Vec2::new(HALF_W, HALF_H - 60.0),
            FontSize::Big,
            WHITE,
        ));
        out.push(DrawCmd::text(
            session.results_label(),
            Vec2::new(HALF_W, HALF_H + 10.0),
            FontSize::Medium,
            WHITE,
        ));
        let cont = layout::continue_button();
        out.push(DrawCmd::Panel {
            rect: cont,
            fill: PANEL,
            border: Some(BORDER),
            radius: BUTTON_RADIUS,
        });
        out.push(DrawCmd::text("Continue", cont.center(), FontSize::Medium, WHITE));
        return;
    }

    let (Some(question), Some(label)) = (session.current(), session.question_label()) else {
        return;
    };

    out.push(DrawCmd::text(
        session.title.clone(),
        Vec2::new(HALF_W, 110.0),
        FontSize::Small,
        WHITE,
    ));
    let lines = wrap_lines(&label, &fonts.big, QUESTION_MAX_WIDTH, QUESTION_LINES);
    for (i, line) in lines.into_iter().enumerate() {
        out.push(DrawCmd::text(
            line,
            Vec2::new(HALF_W, QUESTION_TOP + i as f32 * QUESTION_LINE_HEIGHT),
            FontSize::Big,
            WHITE,
        ));
    }

    for (i, answer) in question.answers.iter().enumerate() {
        let rect = layout::answer_rect(i);
        out.push(DrawCmd::Panel {
            rect,
            fill: WHITE,
            border: Some(BORDER),
            radius: BUTTON_RADIUS,
        });

        let center = rect.center();
        let lines = wrap_lines(answer, &fonts.small, ANSWER_MAX_WIDTH, ANSWER_LINES);
        let offsets: &[f32] = if lines.len() == 1 { &ONE_LINE } else { &TWO_LINES };
        for (line, dy) in lines.into_iter().zip(offsets) {
            out.push(DrawCmd::text(
                line,
                center + Vec2::new(0.0, *dy),
                FontSize::Small,
                BLACK,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::catalog;
    use crate::platform::{FrameInput, InputEvent};

    fn texts(cmds: &[DrawCmd]) -> Vec<&str> {
        cmds.iter().filter_map(DrawCmd::as_text).collect()
    }

    fn images(cmds: &[DrawCmd], wanted: &Sprite) -> usize {
        cmds.iter()
            .filter(|c| matches!(c, DrawCmd::Image { sprite, .. } if sprite == wanted))
            .count()
    }

    fn click(app: &mut App, pos: Vec2) {
        app.frame(&FrameInput::idle(16).with_event(InputEvent::click(pos)));
    }

    fn started_app() -> App {
        let mut app = App::new(catalog(2), 1);
        click(&mut app, layout::rules_button().center());
        for _ in 0..RULES_PAGE_COUNT {
            click(&mut app, layout::rules_next_center());
        }
        click(&mut app, layout::start_button().center());
        app
    }

    fn draw(app: &App) -> Vec<DrawCmd> {
        compose(app, &Starfield::default(), &Fonts::headless())
    }

    #[test]
    fn test_menu_shows_locked_start() {
        let app = App::new(catalog(2), 1);
        let cmds = draw(&app);
        let t = texts(&cmds);
        assert!(t.contains(&"(Read the rules first)"));
        assert!(t.contains(&"Assessment rules"));
        assert_eq!(images(&cmds, &Sprite::Background), 2);
    }

    #[test]
    fn test_rules_page_image() {
        let mut app = App::new(catalog(2), 1);
        click(&mut app, layout::rules_button().center());
        click(&mut app, layout::rules_next_center());
        let cmds = draw(&app);
        assert_eq!(images(&cmds, &Sprite::RulesPage(1)), 1);
        assert_eq!(images(&cmds, &Sprite::Background), 0);
    }

    #[test]
    fn test_hud_health_icons() {
        let mut app = started_app();
        assert_eq!(images(&draw(&app), &Sprite::HealthIcon), 3);

        app.game_mut().player.health = -1;
        assert_eq!(images(&draw(&app), &Sprite::HealthIcon), 0);
    }

    #[test]
    fn test_lost_screen() {
        let mut app = started_app();
        app.game_mut().player.health = 0;
        app.frame(&FrameInput::idle(16));
        let cmds = draw(&app);
        let t = texts(&cmds);
        assert!(t.contains(&"You were not cautious enough"));
        assert!(t.contains(&"Start from beginning"));
    }

    #[test]
    fn test_won_screen_score() {
        let mut app = started_app();
        let game = app.game_mut();
        game.progress.complete_station(crate::StationId(1), 4);
        game.progress.complete_station(crate::StationId(2), 3);
        game.progress.mark_goal_reached();
        game.progress.evaluate_end_conditions(3);
        let cmds = draw(&app);
        assert!(texts(&cmds).contains(&"with a score of: 7 / 10"));
    }

    #[test]
    fn test_pause_overlay() {
        let mut app = started_app();
        app.frame(&FrameInput::idle(16).with_event(InputEvent::KeyDown(crate::platform::Key::Space)));
        assert!(texts(&draw(&app)).contains(&"Pause! Press SPACE to continue"));
    }

    #[test]
    fn test_pause_inside_quiz_keeps_overlay() {
        let mut app = started_app();
        let desc = app.game().catalog.stations()[0].clone();
        app.game_mut().quiz.open(&desc).unwrap();
        app.frame(&FrameInput::idle(16).with_event(InputEvent::KeyDown(crate::platform::Key::Space)));
        assert_eq!(app.game().phase(), SessionPhase::Paused);

        let cmds = draw(&app);
        let t = texts(&cmds);
        assert!(t.contains(&"Q1/5: question 0"));
        assert!(t.contains(&"Pause! Press SPACE to continue"));
        assert!(!cmds.iter().any(|c| matches!(c, DrawCmd::Image { sprite: Sprite::Player { .. }, .. })));
    }

    #[test]
    fn test_quiz_question_screen() {
        let mut app = started_app();
        let desc = app.game().catalog.stations()[0].clone();
        app.game_mut().quiz.open(&desc).unwrap();
        let cmds = draw(&app);
        let t = texts(&cmds);
        assert!(t.contains(&"Q1/5: question 0"));
        assert!(t.contains(&"answer 3"));
        let panels = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Panel { fill, .. } if *fill == WHITE))
            .count();
        assert_eq!(panels, 4);
        // The ship is hidden behind the overlay
        assert!(!cmds.iter().any(|c| matches!(c, DrawCmd::Image { sprite: Sprite::Player { .. }, .. })));
    }

    #[test]
    fn test_long_question_is_wrapped() {
        let mut app = started_app();
        let mut desc = app.game().catalog.stations()[0].clone();
        desc.questions[0].text = "word ".repeat(200);
        app.game_mut().quiz.open(&desc).unwrap();
        let cmds = draw(&app);
        let question_lines: Vec<_> = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Text { size: FontSize::Big, .. }))
            .filter_map(DrawCmd::as_text)
            .filter(|t| t.starts_with("Q1/5") || t.starts_with("word"))
            .collect();
        assert_eq!(question_lines.len(), 3);
        assert!(question_lines[2].ends_with(crate::ui::ELLIPSIS));
    }

    #[test]
    fn test_quiz_results_screen() {
        let mut app = started_app();
        let desc = app.game().catalog.stations()[0].clone();
        let game = app.game_mut();
        game.quiz.open(&desc).unwrap();
        for q in &desc.questions {
            game.quiz.click(layout::answer_rect(q.correct).center());
        }
        let t = draw(&app).iter().filter_map(|c| c.as_text().map(str::to_owned)).collect::<Vec<_>>();
        assert!(t.contains(&"Station 1 - RESULTS".to_owned()));
        assert!(t.contains(&"Correct: 5 / 5".to_owned()));
        assert!(t.contains(&"Continue".to_owned()));
    }
}
