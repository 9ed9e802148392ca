//! Scrolling background
//!
//! Two copies of the backdrop sit side by side and slide left; a copy that
//! has fully left the screen jumps behind the other one.

use glam::Vec2;

use super::{DrawCmd, Sprite};
use crate::consts::STARFIELD_SPEED;
use crate::sim::Rect;
use crate::vec2;

/// Backdrop image size, slightly larger than the screen
pub const BACKGROUND_SIZE: (f32, f32) = (1365.0, 763.0);

#[derive(Debug, Clone)]
pub struct Starfield {
    offsets: [f32; 2],
    speed: f32,
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new(STARFIELD_SPEED)
    }
}

impl Starfield {
    pub fn new(speed: f32) -> Self {
        Self {
            offsets: [0.0, BACKGROUND_SIZE.0],
            speed,
        }
    }

    /// Still backdrop
    pub fn frozen() -> Self {
        Self::new(0.0)
    }

    pub fn update(&mut self) {
        let width = BACKGROUND_SIZE.0;
        for x in &mut self.offsets {
            *x -= self.speed;
            if *x <= -width {
                *x += 2.0 * width;
            }
        }
    }

    pub fn offsets(&self) -> [f32; 2] {
        self.offsets
    }

    pub fn draw(&self, out: &mut Vec<DrawCmd>) {
        for x in self.offsets {
            out.push(DrawCmd::image(
                Sprite::Background,
                Rect::from_pos_size(Vec2::new(x, 0.0), vec2(BACKGROUND_SIZE)),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_stay_adjacent() {
        let mut field = Starfield::default();
        for _ in 0..5_000 {
            field.update();
            let [a, b] = field.offsets();
            assert_eq!((a - b).abs(), BACKGROUND_SIZE.0);
            assert!(a > -BACKGROUND_SIZE.0 && b > -BACKGROUND_SIZE.0);
        }
    }

    #[test]
    fn test_wraps_after_one_width() {
        let mut field = Starfield::default();
        for _ in 0..1365 {
            field.update();
        }
        assert_eq!(field.offsets(), [BACKGROUND_SIZE.0, 0.0]);
    }

    #[test]
    fn test_frozen_does_not_move() {
        let mut field = Starfield::frozen();
        field.update();
        assert_eq!(field.offsets(), [0.0, BACKGROUND_SIZE.0]);
    }
}
