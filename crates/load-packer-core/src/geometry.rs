use serde::{Deserialize, Serialize};

/// Default tolerance used by every geometric comparison.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Position inside the container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in container units. `x,y` is the corner nearest the
/// container origin; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w,h` anchored at the origin.
    pub fn sized(w: f64, h: f64) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Exclusive right edge (`x + w`).
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Exclusive far edge along the height axis (`y + h`).
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// True if the rectangle has a usable (strictly positive) extent on both axes.
    pub fn is_proper(&self, eps: f64) -> bool {
        self.w > eps && self.h > eps
    }
}

/// True iff a rectangle of `a`'s size fits inside `b` without rotation.
pub fn fits(a: &Rect, b: &Rect, eps: f64) -> bool {
    a.w <= b.w + eps && a.h <= b.h + eps
}

/// True iff the interiors of `a` and `b` intersect. Touching edges do not overlap.
pub fn overlaps(a: &Rect, b: &Rect, eps: f64) -> bool {
    !(a.x >= b.right() - eps
        || b.x >= a.right() - eps
        || a.y >= b.bottom() - eps
        || b.y >= a.bottom() - eps)
}

/// True iff `b` lies entirely within `a` (shared edges allowed).
pub fn contains(a: &Rect, b: &Rect, eps: f64) -> bool {
    b.x >= a.x - eps
        && b.y >= a.y - eps
        && b.right() <= a.right() + eps
        && b.bottom() <= a.bottom() + eps
}

/// Tolerant three-way comparison: values closer than `eps` compare equal.
pub fn cmp_eps(a: f64, b: f64, eps: f64) -> std::cmp::Ordering {
    if (a - b).abs() <= eps {
        std::cmp::Ordering::Equal
    } else if a < b {
        std::cmp::Ordering::Less
    } else {
        std::cmp::Ordering::Greater
    }
}
