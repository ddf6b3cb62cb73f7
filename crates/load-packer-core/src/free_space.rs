//! Maximal-rectangles free space.
//!
//! The free list is over-complete: rectangles may overlap each other, but never the
//! interior of a placed item, and no rectangle is contained in another.

use crate::geometry::{Rect, contains, fits, overlaps};
use crate::model::Container;
use tracing::trace;

pub struct FreeSpace {
    free: Vec<Rect>,
    eps: f64,
}

impl FreeSpace {
    /// Starts with a single free rectangle covering the whole container.
    pub fn new(container: &Container, eps: f64) -> Self {
        Self {
            free: vec![container.bounds()],
            eps,
        }
    }

    /// Free rectangles that can hold a rectangle of `size`'s dimensions.
    pub fn candidates<'a>(&'a self, size: &'a Rect) -> impl Iterator<Item = &'a Rect> + 'a {
        self.free.iter().filter(move |fr| fits(size, fr, self.eps))
    }

    /// Carves `used` out of every free rectangle whose interior it intersects, then
    /// prunes. The intersection test is exact so that items thinner than the
    /// tolerance still claim their footprint; the tolerance only drops slivers.
    pub fn apply(&mut self, used: &Rect) {
        let mut next: Vec<Rect> = Vec::with_capacity(self.free.len() + 4);
        for fr in &self.free {
            if overlaps(fr, used, 0.0) {
                split_free_rect(fr, used, self.eps, &mut next);
            } else {
                next.push(*fr);
            }
        }
        prune_contained(&mut next, self.eps);
        trace!(free_rects = next.len(), "free space updated");
        self.free = next;
    }

    pub fn free_rects(&self) -> &[Rect] {
        &self.free
    }

    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }
}

/// Pushes the maximal parts of `fr` left, right, before and after `used`.
/// Each part spans `fr`'s full extent on the other axis; slivers thinner than `eps`
/// are dropped.
pub fn split_free_rect(fr: &Rect, used: &Rect, eps: f64, out: &mut Vec<Rect>) {
    // left
    if used.x > fr.x {
        push_proper(out, Rect::new(fr.x, fr.y, used.x - fr.x, fr.h), eps);
    }
    // right
    if used.right() < fr.right() {
        push_proper(
            out,
            Rect::new(used.right(), fr.y, fr.right() - used.right(), fr.h),
            eps,
        );
    }
    // top (towards y = 0)
    if used.y > fr.y {
        push_proper(out, Rect::new(fr.x, fr.y, fr.w, used.y - fr.y), eps);
    }
    // bottom
    if used.bottom() < fr.bottom() {
        push_proper(
            out,
            Rect::new(fr.x, used.bottom(), fr.w, fr.bottom() - used.bottom()),
            eps,
        );
    }
}

fn push_proper(out: &mut Vec<Rect>, r: Rect, eps: f64) {
    if r.is_proper(eps) {
        out.push(r);
    }
}

/// Removes every rectangle contained in another one. Of two equal rectangles the
/// later one survives; relative order of the survivors is preserved.
pub fn prune_contained(rects: &mut Vec<Rect>, eps: f64) {
    let mut i = 0;
    while i < rects.len() {
        let a = rects[i];
        let mut remove_i = false;
        let mut j = i + 1;
        while j < rects.len() {
            let b = rects[j];
            if contains(&b, &a, eps) {
                remove_i = true;
                break;
            }
            if contains(&a, &b, eps) {
                rects.remove(j);
                continue;
            }
            j += 1;
        }
        if remove_i {
            rects.remove(i);
        } else {
            i += 1;
        }
    }
}
