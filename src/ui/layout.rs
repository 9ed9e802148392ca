//! Button and hit-region placement
//!
//! The same rectangles are used to draw the buttons and to test clicks, so
//! what the player sees is exactly what they can hit.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

const HALF_W: f32 = SCREEN_WIDTH / 2.0;
const HALF_H: f32 = SCREEN_HEIGHT / 2.0;

const MENU_BUTTON_SIZE: Vec2 = Vec2::new(560.0, 110.0);

const ANSWER_TOP: f32 = 260.0;
const ANSWER_PITCH: f32 = 95.0;
const ANSWER_SIZE: Vec2 = Vec2::new(1100.0, 75.0);

/// Radius of the rules "next page" button
pub const RULES_NEXT_RADIUS: f32 = 30.0;

/// Clickable menu buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Rules,
}

pub fn start_button() -> Rect {
    Rect::from_pos_size(
        Vec2::new(HALF_W - MENU_BUTTON_SIZE.x / 2.0, HALF_H - 15.0),
        MENU_BUTTON_SIZE,
    )
}

pub fn rules_button() -> Rect {
    Rect::from_pos_size(
        Vec2::new(HALF_W - MENU_BUTTON_SIZE.x / 2.0, HALF_H + 120.0),
        MENU_BUTTON_SIZE,
    )
}

/// Resolve a menu click. Start only responds once the rules were read.
pub fn menu_action(pos: Vec2, start_allowed: bool) -> Option<MenuAction> {
    if start_button().contains(pos) {
        return start_allowed.then_some(MenuAction::Start);
    }
    if rules_button().contains(pos) {
        return Some(MenuAction::Rules);
    }
    None
}

/// Center of the round "next page" button on the rules screen
pub fn rules_next_center() -> Vec2 {
    Vec2::new(SCREEN_WIDTH - 90.0, SCREEN_HEIGHT - 90.0)
}

pub fn rules_next_hit(pos: Vec2) -> bool {
    pos.distance_squared(rules_next_center()) <= RULES_NEXT_RADIUS * RULES_NEXT_RADIUS
}

/// Box of answer `index` on the quiz question screen
pub fn answer_rect(index: usize) -> Rect {
    Rect::from_pos_size(
        Vec2::new(HALF_W - ANSWER_SIZE.x / 2.0, ANSWER_TOP + index as f32 * ANSWER_PITCH),
        ANSWER_SIZE,
    )
}

/// "Continue" button on the quiz results screen
pub fn continue_button() -> Rect {
    Rect::new(HALF_W - 200.0, HALF_H + 120.0, 400.0, 70.0)
}

/// "Start from beginning" button shown after a loss
pub fn restart_button() -> Rect {
    Rect::new(HALF_W - 220.0, HALF_H + 120.0, 440.0, 80.0)
}
