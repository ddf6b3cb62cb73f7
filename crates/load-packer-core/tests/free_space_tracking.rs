use load_packer_core::Container;
use load_packer_core::free_space::{FreeSpace, prune_contained, split_free_rect};
use load_packer_core::geometry::{DEFAULT_EPSILON, Rect, contains, overlaps};

const EPS: f64 = DEFAULT_EPSILON;

fn approx_rect(a: &Rect, b: &Rect) -> bool {
    (a.x - b.x).abs() < 1e-9
        && (a.y - b.y).abs() < 1e-9
        && (a.w - b.w).abs() < 1e-9
        && (a.h - b.h).abs() < 1e-9
}

fn assert_consistent(fs: &FreeSpace, used: &[Rect]) {
    let free = fs.free_rects();
    for fr in free {
        for u in used {
            assert!(!overlaps(fr, u, EPS), "free {:?} overlaps used {:?}", fr, u);
        }
    }
    for i in 0..free.len() {
        for j in 0..free.len() {
            if i != j {
                assert!(
                    !contains(&free[j], &free[i], EPS),
                    "{:?} is redundant next to {:?}",
                    free[i],
                    free[j]
                );
            }
        }
    }
}

#[test]
fn starts_with_whole_container() {
    let fs = FreeSpace::new(&Container::new(2.44, 6.06), EPS);
    assert_eq!(fs.len(), 1);
    assert_eq!(fs.free_rects()[0], Rect::new(0.0, 0.0, 2.44, 6.06));
}

#[test]
fn corner_placement_leaves_two_maximal_strips() {
    let mut fs = FreeSpace::new(&Container::new(2.44, 6.06), EPS);
    let used = Rect::new(0.0, 0.0, 1.2, 1.0);
    fs.apply(&used);
    let free = fs.free_rects();
    assert_eq!(free.len(), 2);
    assert!(approx_rect(&free[0], &Rect::new(1.2, 0.0, 1.24, 6.06)));
    assert!(approx_rect(&free[1], &Rect::new(0.0, 1.0, 2.44, 5.06)));
    assert_consistent(&fs, &[used]);
}

#[test]
fn candidates_only_return_rects_that_fit() {
    let mut fs = FreeSpace::new(&Container::new(2.44, 6.06), EPS);
    fs.apply(&Rect::new(0.0, 0.0, 1.2, 1.0));
    let item = Rect::sized(2.0, 2.0);
    let c: Vec<&Rect> = fs.candidates(&item).collect();
    assert_eq!(c.len(), 1);
    assert!(approx_rect(c[0], &Rect::new(0.0, 1.0, 2.44, 5.06)));

    let too_big = Rect::sized(3.0, 1.0);
    assert_eq!(fs.candidates(&too_big).count(), 0);
}

#[test]
fn placement_splits_every_overlapping_free_rect() {
    let mut fs = FreeSpace::new(&Container::new(10.0, 10.0), EPS);
    let first = Rect::new(0.0, 0.0, 4.0, 4.0);
    fs.apply(&first);
    assert_eq!(fs.len(), 2);

    // overlaps both the right strip and the bottom strip
    let second = Rect::new(5.0, 5.0, 2.0, 2.0);
    fs.apply(&second);
    assert_eq!(fs.len(), 6);
    assert_consistent(&fs, &[first, second]);
    for expected in [
        Rect::new(4.0, 0.0, 1.0, 10.0),
        Rect::new(7.0, 0.0, 3.0, 10.0),
        Rect::new(4.0, 0.0, 6.0, 5.0),
        Rect::new(0.0, 4.0, 5.0, 6.0),
        Rect::new(0.0, 4.0, 10.0, 1.0),
        Rect::new(0.0, 7.0, 10.0, 3.0),
    ] {
        assert!(
            fs.free_rects().iter().any(|r| approx_rect(r, &expected)),
            "missing {:?} in {:?}",
            expected,
            fs.free_rects()
        );
    }
}

#[test]
fn filling_the_container_exhausts_free_space() {
    let mut fs = FreeSpace::new(&Container::new(4.0, 4.0), EPS);
    fs.apply(&Rect::new(0.0, 0.0, 4.0, 4.0));
    assert!(fs.is_empty());
}

#[test]
fn split_drops_slivers_below_tolerance() {
    let fr = Rect::new(0.0, 0.0, 10.0, 10.0);
    let used = Rect::new(0.0, 0.0, 10.0, 10.0 - 1e-12);
    let mut out = Vec::new();
    split_free_rect(&fr, &used, EPS, &mut out);
    assert!(out.is_empty());
}

#[test]
fn split_of_centered_item_yields_four_parts() {
    let fr = Rect::new(0.0, 0.0, 10.0, 10.0);
    let used = Rect::new(3.0, 3.0, 2.0, 2.0);
    let mut out = Vec::new();
    split_free_rect(&fr, &used, EPS, &mut out);
    assert_eq!(
        out,
        vec![
            Rect::new(0.0, 0.0, 3.0, 10.0),
            Rect::new(5.0, 0.0, 5.0, 10.0),
            Rect::new(0.0, 0.0, 10.0, 3.0),
            Rect::new(0.0, 5.0, 10.0, 5.0),
        ]
    );
}

#[test]
fn prune_removes_contained_and_duplicate_rects() {
    let mut rects = vec![
        Rect::new(1.0, 1.0, 2.0, 2.0),
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(20.0, 0.0, 1.0, 1.0),
    ];
    prune_contained(&mut rects, EPS);
    assert_eq!(
        rects,
        vec![Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(20.0, 0.0, 1.0, 1.0)]
    );
}

#[test]
fn prune_keeps_overlapping_but_non_redundant_rects() {
    let mut rects = vec![Rect::new(0.0, 0.0, 6.0, 10.0), Rect::new(0.0, 0.0, 10.0, 6.0)];
    prune_contained(&mut rects, EPS);
    assert_eq!(rects.len(), 2);
}
