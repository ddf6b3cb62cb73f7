use crate::assemble::assemble;
use crate::config::{PackerConfig, SortOrder};
use crate::error::{PackError, Result};
use crate::geometry::Point;
use crate::model::{Container, Item, PackingResult};
use crate::packer::MaxRectsPacker;
use tracing::{debug, instrument, trace};

/// Packs `items` into `container` with the default configuration
/// (best-short-side-fit, area-descending order).
pub fn pack(container: &Container, items: &[Item]) -> Result<PackingResult> {
    pack_with_config(container, items, &PackerConfig::default())
}

#[instrument(skip_all, fields(items = items.len()))]
/// Packs `items` into `container` using `cfg`.
///
/// Notes:
/// - Non-positive or non-finite dimensions are rejected before any placement happens;
///   the error names the container or the offending item.
/// - Items that fit nowhere are reported in `unpacked`, never as errors.
/// - Identical inputs always produce identical results.
pub fn pack_with_config(
    container: &Container,
    items: &[Item],
    cfg: &PackerConfig,
) -> Result<PackingResult> {
    cfg.validate()?;
    validate_inputs(container, items)?;

    let mut packer = MaxRectsPacker::new(container, cfg);
    let mut slots: Vec<Option<Point>> = vec![None; items.len()];

    for idx in processing_order(items, cfg.sort_order) {
        let item = &items[idx];
        match packer.place(item) {
            Some(origin) => {
                trace!(item = %item.label, x = origin.x, y = origin.y, "placed");
                slots[idx] = Some(origin);
            }
            None => trace!(item = %item.label, "no free rectangle fits"),
        }
    }

    let result = assemble(items, &slots);
    debug!(
        placed = result.placed.len(),
        unpacked = result.unpacked.len(),
        free_rects = packer.free_space().len(),
        "packing finished"
    );
    Ok(result)
}

fn valid_dim(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Checks the engine's preconditions on the container and every item.
pub fn validate_inputs(container: &Container, items: &[Item]) -> Result<()> {
    if !valid_dim(container.width) || !valid_dim(container.height) {
        return Err(PackError::InvalidContainer {
            width: container.width,
            height: container.height,
        });
    }
    for (index, item) in items.iter().enumerate() {
        if !valid_dim(item.width) || !valid_dim(item.height) {
            return Err(PackError::InvalidItem {
                index,
                label: item.label.clone(),
                width: item.width,
                height: item.height,
            });
        }
    }
    Ok(())
}

/// Indices of `items` in the order they are offered to the packer.
/// Every order ends with the input index, so it is total and stable.
pub fn processing_order(items: &[Item], order: SortOrder) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..items.len()).collect();
    let desc = |a: f64, b: f64| b.total_cmp(&a);
    match order {
        SortOrder::None => {}
        SortOrder::AreaDesc => idx.sort_by(|&a, &b| {
            let (ia, ib) = (&items[a], &items[b]);
            desc(ia.area(), ib.area())
                .then_with(|| desc(max_side(ia), max_side(ib)))
                .then_with(|| a.cmp(&b))
        }),
        SortOrder::MaxSideDesc => idx.sort_by(|&a, &b| {
            desc(max_side(&items[a]), max_side(&items[b])).then_with(|| a.cmp(&b))
        }),
        SortOrder::HeightDesc => idx.sort_by(|&a, &b| {
            desc(items[a].height, items[b].height).then_with(|| a.cmp(&b))
        }),
        SortOrder::WidthDesc => idx.sort_by(|&a, &b| {
            desc(items[a].width, items[b].width).then_with(|| a.cmp(&b))
        }),
    }
    idx
}

fn max_side(item: &Item) -> f64 {
    item.width.max(item.height)
}
