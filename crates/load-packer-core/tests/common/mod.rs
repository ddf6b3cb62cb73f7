#![allow(dead_code)]

use load_packer_core::geometry::{DEFAULT_EPSILON, Rect, contains, overlaps};
use load_packer_core::{Container, Item, PackingResult};

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Checks no-overlap, containment, partition completeness and the area bound.
pub fn assert_valid(container: &Container, items: &[Item], result: &PackingResult) {
    let bounds = container.bounds();
    let rects: Vec<Rect> = result.placed.iter().map(|p| p.rect()).collect();
    for (i, r) in rects.iter().enumerate() {
        assert!(
            contains(&bounds, r, DEFAULT_EPSILON),
            "{:?} ({}) leaves the container {:?}",
            r,
            result.placed[i].item.label,
            bounds
        );
        for (j, s) in rects.iter().enumerate().skip(i + 1) {
            assert!(
                !overlaps(r, s, DEFAULT_EPSILON),
                "{} {:?} overlaps {} {:?}",
                result.placed[i].item.label,
                r,
                result.placed[j].item.label,
                s
            );
        }
    }

    assert_eq!(result.placed.len() + result.unpacked.len(), items.len());
    let mut ids: Vec<usize> = result
        .placed
        .iter()
        .map(|p| p.item.id)
        .chain(result.unpacked.iter().map(|i| i.id))
        .collect();
    ids.sort_unstable();
    let mut expected: Vec<usize> = items.iter().map(|i| i.id).collect();
    expected.sort_unstable();
    assert_eq!(ids, expected);

    // both sequences follow input order
    let pos = |id: usize| items.iter().position(|i| i.id == id).unwrap();
    assert!(result.placed.windows(2).all(|w| pos(w[0].item.id) < pos(w[1].item.id)));
    assert!(result.unpacked.windows(2).all(|w| pos(w[0].id) < pos(w[1].id)));

    let used: f64 = result.placed.iter().map(|p| p.item.area()).sum();
    assert!(used <= container.area() + 1e-6);
}
