//! Axis-aligned rectangles in screen space
//!
//! Screen space has the origin at the top-left corner, x to the right and
//! y downward. Edges follow the half-open convention: a rectangle covers
//! `[left, right) x [top, bottom)`, so two rectangles that merely touch do
//! not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Grow (or shrink, with negative deltas) around the same center
    pub fn inflate(&self, dw: f32, dh: f32) -> Self {
        let size = (self.size + Vec2::new(dw, dh)).max(Vec2::ZERO);
        Self::centered(self.center(), size)
    }

    /// Point-in-rectangle test
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Overlap test (touching edges and empty rectangles do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True when the rectangle has no area
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate_keeps_center() {
        let r = Rect::new(100.0, 100.0, 230.0, 150.0);
        let hit = r.inflate(0.0, -100.0);
        assert_eq!(hit.center(), r.center());
        assert_eq!(hit.size, Vec2::new(230.0, 50.0));
    }

    #[test]
    fn test_inflate_never_negative() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inflate(-40.0, -40.0);
        assert!(r.is_empty());
        assert!(!r.overlaps(&Rect::new(-100.0, -100.0, 200.0, 200.0)));
    }

    #[test]
    fn test_contains_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(9.9, 9.9)));
        assert!(!r.contains(Vec2::new(10.0, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_empty_never_overlaps() {
        let big = Rect::new(-100.0, -100.0, 200.0, 200.0);
        let flat = Rect::new(0.0, 0.0, 10.0, 0.0);
        assert!(!flat.overlaps(&big));
        assert!(!big.overlaps(&flat));
        assert!(!big.overlaps(&Rect::centered(Vec2::ZERO, Vec2::ZERO)));
    }
}
