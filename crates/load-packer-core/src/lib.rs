//! Core engine for packing rectangular loads into a single container.
//!
//! - Free space: maximal rectangles (overlapping, pruned of contained rectangles)
//! - Placement: best-short-side-fit by default, items offered largest area first, no rotation
//! - Result: placed items with absolute positions plus the unpacked items, both in input order
//! - Document: the persisted `{ container, loads }` JSON format and its lenient coercion rules
//!
//! Quick example:
//! ```
//! use load_packer_core::{Container, Item, pack};
//! # fn main() -> load_packer_core::Result<()> {
//! let container = Container::new(2.44, 6.06);
//! let items = vec![Item::new(0, 1.2, 1.0, "Load 1"), Item::new(1, 3.0, 3.0, "Too wide")];
//! let result = pack(&container, &items)?;
//! assert_eq!(result.placed.len(), 1);
//! assert_eq!(result.unpacked[0].label, "Too wide");
//! # Ok(()) }
//! ```

pub mod assemble;
pub mod batch;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod free_space;
pub mod geometry;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `load_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::batch::{PackRequest, pack_many};
    pub use crate::config::{PackerConfig, PackerConfigBuilder, PlacementHeuristic, SortOrder};
    pub use crate::document::{Color, ContainerEntry, Document, LoadEntry};
    pub use crate::error::{PackError, Result};
    pub use crate::geometry::{Point, Rect};
    pub use crate::model::{Container, Item, PackStats, PackingResult, PlacedItem};
    pub use crate::{pack, pack_with_config, to_json};
}
