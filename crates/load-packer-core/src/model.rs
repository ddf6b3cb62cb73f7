use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// The single bin of a packing run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Full container extent as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::sized(self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A load to be packed. `id` is only used for correlation; `label` is carried through
/// untouched for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: usize,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

impl Item {
    pub fn new(id: usize, width: f64, height: f64, label: impl Into<String>) -> Self {
        Self {
            id,
            width,
            height,
            label: label.into(),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn size(&self) -> Rect {
        Rect::sized(self.width, self.height)
    }
}

/// An item placed at an absolute position inside the container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedItem {
    pub item: Item,
    pub x: f64,
    pub y: f64,
}

impl PlacedItem {
    /// Footprint occupied inside the container.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.item.width, self.item.height)
    }
}

/// Outcome of one packing run. Both sequences follow the caller's input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PackingResult {
    pub placed: Vec<PlacedItem>,
    pub unpacked: Vec<Item>,
}

impl PackingResult {
    /// True when every input item was placed.
    pub fn is_complete(&self) -> bool {
        self.unpacked.is_empty()
    }

    /// Computes occupancy statistics for this result against `container`.
    pub fn stats(&self, container: &Container) -> PackStats {
        let used_area: f64 = self.placed.iter().map(|p| p.item.area()).sum();
        let container_area = container.area();
        let occupancy = if container_area > 0.0 {
            used_area / container_area
        } else {
            0.0
        };
        PackStats {
            num_items: self.placed.len() + self.unpacked.len(),
            num_placed: self.placed.len(),
            num_unpacked: self.unpacked.len(),
            container_area,
            used_area,
            occupancy,
        }
    }
}

/// Statistics about how well a container was filled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PackStats {
    /// Number of items submitted.
    pub num_items: usize,
    pub num_placed: usize,
    pub num_unpacked: usize,
    /// Container area (width * height).
    pub container_area: f64,
    /// Sum of placed item areas.
    pub used_area: f64,
    /// Occupancy ratio: used_area / container_area (0.0 to 1.0).
    pub occupancy: f64,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Items: {}, Placed: {}, Unpacked: {}, Occupancy: {:.2}%, Container Area: {:.3}, Used Area: {:.3}",
            self.num_items,
            self.num_placed,
            self.num_unpacked,
            self.occupancy * 100.0,
            self.container_area,
            self.used_area,
        )
    }

    /// Returns the free area left in the container.
    pub fn wasted_area(&self) -> f64 {
        (self.container_area - self.used_area).max(0.0)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.container_area > 0.0 {
            (self.wasted_area() / self.container_area) * 100.0
        } else {
            0.0
        }
    }
}
