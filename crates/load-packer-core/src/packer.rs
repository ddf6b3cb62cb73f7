use crate::config::{PackerConfig, PlacementHeuristic};
use crate::free_space::FreeSpace;
use crate::geometry::{Point, Rect, cmp_eps};
use crate::model::{Container, Item};
use std::cmp::Ordering;

/// Places items one at a time into a single container using a maximal-rectangles
/// free list. Items that do not fit are left to the caller.
pub struct MaxRectsPacker {
    free: FreeSpace,
    bounds: Rect,
    heuristic: PlacementHeuristic,
    eps: f64,
}

/// Ranking of one candidate position; lower is better.
#[derive(Debug, Clone, Copy)]
struct Score {
    primary: f64,
    secondary: f64,
    y: f64,
    x: f64,
}

impl Score {
    fn cmp_with(&self, other: &Score, eps: f64) -> Ordering {
        cmp_eps(self.primary, other.primary, eps)
            .then_with(|| cmp_eps(self.secondary, other.secondary, eps))
            .then_with(|| cmp_eps(self.y, other.y, eps))
            .then_with(|| cmp_eps(self.x, other.x, eps))
    }
}

impl MaxRectsPacker {
    pub fn new(container: &Container, cfg: &PackerConfig) -> Self {
        Self {
            free: FreeSpace::new(container, cfg.epsilon),
            bounds: container.bounds(),
            heuristic: cfg.heuristic,
            eps: cfg.epsilon,
        }
    }

    fn score(&self, fr: &Rect, w: f64, h: f64) -> Score {
        let leftover_h = (fr.w - w).max(0.0);
        let leftover_v = (fr.h - h).max(0.0);
        let short_fit = leftover_h.min(leftover_v);
        let long_fit = leftover_h.max(leftover_v);
        let (primary, secondary) = match self.heuristic {
            PlacementHeuristic::BestShortSideFit => (short_fit, long_fit),
            PlacementHeuristic::BestLongSideFit => (long_fit, short_fit),
            PlacementHeuristic::BestAreaFit => ((fr.area() - w * h).max(0.0), short_fit),
            PlacementHeuristic::BottomLeft => (fr.y, fr.x),
        };
        Score {
            primary,
            secondary,
            y: fr.y,
            x: fr.x,
        }
    }

    /// Origin of the best free rectangle for an item of size `w x h`, if any fits.
    ///
    /// Free rectangles accept sizes up to the tolerance larger than themselves, but
    /// an item larger than the container itself is never placed.
    pub fn find_position(&self, w: f64, h: f64) -> Option<Point> {
        if w > self.bounds.w || h > self.bounds.h {
            return None;
        }
        let size = Rect::sized(w, h);
        let mut best: Option<(Score, Point)> = None;
        for fr in self.free.candidates(&size) {
            let s = self.score(fr, w, h);
            let better = match &best {
                None => true,
                Some((bs, _)) => s.cmp_with(bs, self.eps) == Ordering::Less,
            };
            if better {
                best = Some((s, fr.origin()));
            }
        }
        best.map(|(_, p)| p)
    }

    pub fn can_place(&self, item: &Item) -> bool {
        self.find_position(item.width, item.height).is_some()
    }

    /// Places `item` at the best position and carves its footprint out of free space.
    pub fn place(&mut self, item: &Item) -> Option<Point> {
        let origin = self.find_position(item.width, item.height)?;
        self.free.apply(&Rect::new(origin.x, origin.y, item.width, item.height));
        Some(origin)
    }

    pub fn free_space(&self) -> &FreeSpace {
        &self.free
    }
}
