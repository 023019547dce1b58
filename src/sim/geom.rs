//! Axis-aligned rectangles and triangle containment
//!
//! The one piece of real geometry in the game: deciding whether the player's
//! bottom corners sit inside a spike triangle, done by barycentric area
//! decomposition. Areas are computed in f64 so the 0.1 tolerance stays
//! meaningful at screen coordinates.

use glam::Vec2;

use crate::consts::AREA_EPSILON;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test - rectangles that only touch edges do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Triangle vertices for a ground spike filling `rect`: base along the
/// rectangle bottom, apex centered at the top.
pub fn triangle_verts(rect: &Rect) -> [Vec2; 3] {
    [
        Vec2::new(rect.left(), rect.bottom()),
        Vec2::new(rect.right(), rect.bottom()),
        Vec2::new(rect.x + rect.w / 2.0, rect.top()),
    ]
}

/// Twice-signed-area-based triangle area, in f64
fn area(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    let (x1, y1) = (a.x as f64, a.y as f64);
    let (x2, y2) = (b.x as f64, b.y as f64);
    let (x3, y3) = (c.x as f64, c.y as f64);
    ((x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2)) / 2.0).abs()
}

/// Point-in-triangle containment via barycentric area decomposition.
///
/// The point is inside iff the three sub-triangles it forms with each side
/// sum to the full triangle's area, within [`AREA_EPSILON`].
pub fn point_in_triangle(point: Vec2, verts: &[Vec2; 3]) -> bool {
    let [a, b, c] = *verts;
    let full = area(a, b, c);
    let sum = area(point, b, c) + area(a, point, c) + area(a, b, point);
    (full - sum).abs() < AREA_EPSILON
}
