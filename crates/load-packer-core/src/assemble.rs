use crate::geometry::Point;
use crate::model::{Item, PackingResult, PlacedItem};

/// Builds the externally visible result. `slots[i]` is the placement of `items[i]`,
/// or `None` if it was rejected; both output sequences keep input order.
pub fn assemble(items: &[Item], slots: &[Option<Point>]) -> PackingResult {
    debug_assert_eq!(items.len(), slots.len());
    let mut result = PackingResult::default();
    for (item, slot) in items.iter().zip(slots) {
        match slot {
            Some(p) => result.placed.push(PlacedItem {
                item: item.clone(),
                x: p.x,
                y: p.y,
            }),
            None => result.unpacked.push(item.clone()),
        }
    }
    result
}
