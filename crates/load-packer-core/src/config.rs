use crate::geometry::DEFAULT_EPSILON;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Scoring rules for choosing among free rectangles that fit an item.
/// Every rule breaks remaining ties by the smallest `y`, then the smallest `x`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlacementHeuristic {
    /// Minimize the smaller leftover side, then the larger one.
    BestShortSideFit,
    /// Minimize the larger leftover side, then the smaller one.
    BestLongSideFit,
    /// Minimize leftover area, then the smaller leftover side.
    BestAreaFit,
    /// Lowest `y` (then `x`) wins.
    BottomLeft,
}

impl FromStr for PlacementHeuristic {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bssf" | "bestshortsidefit" => Ok(Self::BestShortSideFit),
            "blsf" | "bestlongsidefit" => Ok(Self::BestLongSideFit),
            "baf" | "bestareafit" => Ok(Self::BestAreaFit),
            "bl" | "bottomleft" => Ok(Self::BottomLeft),
            _ => Err(()),
        }
    }
}

/// Processing orders. All of them fall back to input order, so the order is total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Area descending, then larger side descending.
    AreaDesc,
    MaxSideDesc,
    HeightDesc,
    WidthDesc,
    None,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "area_desc" => Ok(Self::AreaDesc),
            "max_side_desc" => Ok(Self::MaxSideDesc),
            "height_desc" => Ok(Self::HeightDesc),
            "width_desc" => Ok(Self::WidthDesc),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackerConfig {
    #[serde(default = "default_heuristic")]
    pub heuristic: PlacementHeuristic,
    #[serde(default = "default_sort_order")]
    pub sort_order: SortOrder,
    /// Tolerance for all geometric comparisons (container units).
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            heuristic: default_heuristic(),
            sort_order: default_sort_order(),
            epsilon: default_epsilon(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if `epsilon` is negative, NaN or infinite.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::PackError;

        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(PackError::InvalidConfig(format!(
                "epsilon must be a finite non-negative number, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_heuristic() -> PlacementHeuristic {
    PlacementHeuristic::BestShortSideFit
}
fn default_sort_order() -> SortOrder {
    SortOrder::AreaDesc
}
fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn heuristic(mut self, v: PlacementHeuristic) -> Self {
        self.cfg.heuristic = v;
        self
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    pub fn epsilon(mut self, v: f64) -> Self {
        self.cfg.epsilon = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
