//! Player ship and the scrolling entities
//!
//! Everything except the player drifts leftward each tick and leaves the
//! game once it has fully crossed the left edge of the screen.

use glam::Vec2;

use super::rect::Rect;
use crate::catalog::{StationDescriptor, StationId};
use crate::consts::*;
use crate::platform::HeldKeys;
use crate::vec2;

/// Shared per-tick motion of scrolling entities
pub trait Movable {
    /// Visual bounds
    fn bounds(&self) -> Rect;

    /// Collision bounds (inset from the visual bounds)
    fn hitbox(&self) -> Rect {
        self.bounds()
    }

    /// Advance by one tick
    fn advance(&mut self);

    /// True once the entity should be removed from its collection
    fn is_expired(&self) -> bool {
        self.bounds().right() < 0.0
    }
}

/// Advance every entity once, then drop the expired ones
pub fn advance_and_cull<T: Movable>(items: &mut Vec<T>) {
    for item in items.iter_mut() {
        item.advance();
    }
    items.retain(|item| !item.is_expired());
}

/// Which way the ship sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Number of animation frames per facing
pub const PLAYER_ANIM_FRAMES: u32 = 6;
const ANIM_COUNTER_MAX: u32 = 30;
const ANIM_TICKS_PER_FRAME: u32 = 6;

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the sprite
    pub pos: Vec2,
    /// Remaining health. Can dip below zero for the rest of the frame a
    /// lethal hit lands in.
    pub health: i32,
    pub facing: Facing,
    anim_counter: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Rect::centered(vec2(PLAYER_START_CENTER), vec2(PLAYER_SIZE)).pos,
            health: MAX_HEALTH,
            facing: Facing::Right,
            anim_counter: 0,
        }
    }
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, vec2(PLAYER_SIZE))
    }

    pub fn hitbox(&self) -> Rect {
        self.bounds()
            .inflate(PLAYER_HITBOX_INSET.0, PLAYER_HITBOX_INSET.1)
    }

    /// Put the ship back at its starting spot with full health
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply held arrow keys and step the animation
    pub fn steer(&mut self, held: HeldKeys) {
        self.facing = Facing::Right;

        if held.right && self.pos.x < PLAYER_MAX_X {
            self.facing = Facing::Right;
            self.pos.x += PLAYER_SPEED;
        }
        if held.left && self.pos.x > 0.0 {
            self.facing = Facing::Left;
            self.pos.x -= PLAYER_SPEED;
        }
        if held.up && self.pos.y > PLAYER_MIN_Y {
            self.pos.y -= PLAYER_SPEED;
        }
        if held.down && self.pos.y < PLAYER_MAX_Y {
            self.pos.y += PLAYER_SPEED;
        }

        self.anim_counter = if self.anim_counter < ANIM_COUNTER_MAX {
            self.anim_counter + 1
        } else {
            0
        };
    }

    /// Sprite frame for the current animation step
    pub fn anim_frame(&self) -> u32 {
        (self.anim_counter / ANIM_TICKS_PER_FRAME).min(PLAYER_ANIM_FRAMES - 1)
    }

    /// Health clamped for display
    pub fn display_health(&self) -> u32 {
        self.health.max(0) as u32
    }
}

/// An asteroid
#[derive(Debug, Clone)]
pub struct Hazard {
    pub pos: Vec2,
    /// Leftward pixels per tick
    pub speed: f32,
    /// Which of the two asteroid sprites to draw
    pub variant: u8,
}

impl Hazard {
    /// New asteroid just beyond the right edge
    pub fn new(y: f32, speed: f32, variant: u8) -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH, y),
            speed,
            variant,
        }
    }
}

impl Movable for Hazard {
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, vec2(HAZARD_SIZE))
    }

    fn hitbox(&self) -> Rect {
        self.bounds()
            .inflate(HAZARD_HITBOX_INSET.0, HAZARD_HITBOX_INSET.1)
    }

    fn advance(&mut self) {
        self.pos.x -= self.speed;
    }
}

/// A health key
#[derive(Debug, Clone)]
pub struct Pickup {
    pub pos: Vec2,
}

impl Pickup {
    /// New key centered on the right edge at `center_y`
    pub fn new(center_y: f32) -> Self {
        Self {
            pos: Rect::centered(Vec2::new(SCREEN_WIDTH, center_y), vec2(PICKUP_SIZE)).pos,
        }
    }
}

impl Movable for Pickup {
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, vec2(PICKUP_SIZE))
    }

    fn hitbox(&self) -> Rect {
        self.bounds()
            .inflate(PICKUP_HITBOX_INSET.0, PICKUP_HITBOX_INSET.1)
    }

    fn advance(&mut self) {
        self.pos.x -= PICKUP_SPEED;
    }
}

/// Fly in, hold at a rest position, then (optionally) fly out fast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockingMotion {
    pub rest_x: f32,
    pub speed: f32,
    pub departing: bool,
}

impl DockingMotion {
    pub fn new(rest_x: f32, speed: f32) -> Self {
        Self {
            rest_x,
            speed,
            departing: false,
        }
    }

    /// Next x coordinate from the current one
    pub fn step(&self, x: f32) -> f32 {
        if self.departing {
            x - self.speed * DEPARTURE_SPEED_FACTOR
        } else if x > self.rest_x {
            (x - self.speed).max(self.rest_x)
        } else {
            self.rest_x
        }
    }
}

/// Lifecycle of a department station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationPhase {
    /// Flying in or waiting at its rest position
    Approaching,
    /// Quiz done, leaving the screen
    Departing,
}

/// A department station
#[derive(Debug, Clone)]
pub struct Station {
    pub id: StationId,
    pub title: String,
    pub image: String,
    pub pos: Vec2,
    motion: DockingMotion,
}

impl Station {
    /// New station just beyond the right edge
    pub fn new(desc: &StationDescriptor) -> Self {
        Self {
            id: desc.id,
            title: desc.title.clone(),
            image: desc.image.clone(),
            pos: Vec2::new(SCREEN_WIDTH, desc.y),
            motion: DockingMotion::new(desc.rest_x, STATION_SPEED),
        }
    }

    pub fn phase(&self) -> StationPhase {
        if self.motion.departing {
            StationPhase::Departing
        } else {
            StationPhase::Approaching
        }
    }

    pub fn is_departing(&self) -> bool {
        self.motion.departing
    }

    /// Waiting at its rest position
    pub fn is_docked(&self) -> bool {
        !self.motion.departing && self.pos.x <= self.motion.rest_x
    }

    pub fn start_departure(&mut self) {
        self.motion.departing = true;
    }
}

impl Movable for Station {
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, vec2(STATION_SIZE))
    }

    fn advance(&mut self) {
        self.pos.x = self.motion.step(self.pos.x);
    }

    fn is_expired(&self) -> bool {
        self.motion.departing && self.bounds().right() < 0.0
    }
}

/// The final planet
#[derive(Debug, Clone)]
pub struct GoalObject {
    pub pos: Vec2,
    motion: DockingMotion,
}

impl Default for GoalObject {
    fn default() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH, GOAL_Y),
            motion: DockingMotion::new(GOAL_REST_X, GOAL_SPEED),
        }
    }
}

impl GoalObject {
    pub fn is_docked(&self) -> bool {
        self.pos.x <= self.motion.rest_x
    }
}

impl Movable for GoalObject {
    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, vec2(GOAL_SIZE))
    }

    fn hitbox(&self) -> Rect {
        self.bounds().inflate(GOAL_HITBOX_INSET.0, GOAL_HITBOX_INSET.1)
    }

    fn advance(&mut self) {
        self.pos.x = self.motion.step(self.pos.x);
    }

    fn is_expired(&self) -> bool {
        self.motion.departing && self.bounds().right() < 0.0
    }
}
