use crate::model::{Container, PackingResult};
use serde_json::{Value, json};

/// Serialize a packing run as `{ container, placed, unpacked, stats }`.
/// Placed and unpacked entries keep the caller's input order.
pub fn to_json(container: &Container, result: &PackingResult) -> Value {
    let placed: Vec<Value> = result
        .placed
        .iter()
        .map(|p| {
            json!({
                "id": p.item.id,
                "label": p.item.label,
                "x": p.x,
                "y": p.y,
                "width": p.item.width,
                "height": p.item.height,
            })
        })
        .collect();
    let unpacked: Vec<Value> = result
        .unpacked
        .iter()
        .map(|i| {
            json!({
                "id": i.id,
                "label": i.label,
                "width": i.width,
                "height": i.height,
            })
        })
        .collect();
    json!({
        "container": {"width": container.width, "height": container.height},
        "placed": placed,
        "unpacked": unpacked,
        "stats": result.stats(container),
    })
}
