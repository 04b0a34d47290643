//! Axis-aligned integer rectangle geometry
//!
//! Everything in the world lives on whole-pixel coordinates:
//! - `pos` is the top-left corner (y grows downward)
//! - `size` is width/height, never negative

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// One of the two movement axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Pick this axis' component out of a vector
    #[inline]
    pub fn of(self, v: IVec2) -> i32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Vector of length `amount` along this axis
    #[inline]
    pub fn vector(self, amount: i32) -> IVec2 {
        match self {
            Axis::Horizontal => IVec2::new(amount, 0),
            Axis::Vertical => IVec2::new(0, amount),
        }
    }
}

/// An axis-aligned rectangle in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Center point (rounded toward the top-left like integer division)
    #[inline]
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// Move so the center lands on `center`
    pub fn with_center(self, center: IVec2) -> Self {
        Self {
            pos: center - self.size / 2,
            ..self
        }
    }

    /// Copy shifted by `offset`
    #[inline]
    pub fn translated(self, offset: IVec2) -> Self {
        Self {
            pos: self.pos + offset,
            ..self
        }
    }

    /// Strict overlap test; rectangles that merely share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.size.x > 0
            && self.size.y > 0
            && other.size.x > 0
            && other.size.y > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True when `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Clamp inside `bounds`, one axis at a time.
    ///
    /// If this rectangle is larger than `bounds` on an axis, it takes the
    /// bounds' full range on that axis instead.
    pub fn clamped_within(self, bounds: &Rect) -> Self {
        let (x, w) = clamp_span(self.pos.x, self.size.x, bounds.pos.x, bounds.size.x);
        let (y, h) = clamp_span(self.pos.y, self.size.y, bounds.pos.y, bounds.size.y);
        Self::new(x, y, w, h)
    }
}

/// Clamp the span `[start, start + len)` into `[lo, lo + range)`
fn clamp_span(start: i32, len: i32, lo: i32, range: i32) -> (i32, i32) {
    if len >= range {
        (lo, range)
    } else {
        (start.clamp(lo, lo + range - len), len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let floor = Rect::new(0, 100, 200, 20);
        let standing = Rect::new(10, 45, 30, 55);
        assert_eq!(standing.bottom(), floor.top());
        assert!(!standing.intersects(&floor));
        assert!(standing.translated(IVec2::new(0, 1)).intersects(&floor));
    }

    #[test]
    fn test_side_by_side_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 0, 10);
        assert!(!a.intersects(&Rect::new(-5, -5, 20, 20)));
    }

    #[test]
    fn test_axis_helpers() {
        let v = IVec2::new(3, -7);
        assert_eq!(Axis::Horizontal.of(v), 3);
        assert_eq!(Axis::Vertical.of(v), -7);
        assert_eq!(Axis::Vertical.vector(4), IVec2::new(0, 4));
    }

    #[test]
    fn test_clamped_within_small_bounds_takes_full_range() {
        let bounds = Rect::new(0, 0, 400, 1000);
        let view = Rect::new(100, 900, 700, 500).clamped_within(&bounds);
        assert_eq!(view, Rect::new(0, 500, 400, 500));
    }

    #[test]
    fn test_with_center() {
        let r = Rect::new(0, 0, 30, 55).with_center(IVec2::new(100, 100));
        assert_eq!(r.center(), IVec2::new(100, 100));
        assert_eq!(r.pos, IVec2::new(85, 73));
    }
}
