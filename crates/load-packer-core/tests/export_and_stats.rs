use load_packer_core::prelude::*;

fn half_full() -> (Container, Vec<Item>, PackingResult) {
    let container = Container::new(10.0, 10.0);
    let items = vec![
        Item::new(0, 5.0, 5.0, "a"),
        Item::new(1, 5.0, 5.0, "b"),
        Item::new(2, 11.0, 1.0, "too long"),
    ];
    let result = pack(&container, &items).expect("packing should succeed");
    (container, items, result)
}

#[test]
fn stats_report_occupancy_and_waste() {
    let (container, _, result) = half_full();
    let stats = result.stats(&container);
    assert_eq!(stats.num_items, 3);
    assert_eq!(stats.num_placed, 2);
    assert_eq!(stats.num_unpacked, 1);
    assert_eq!(stats.container_area, 100.0);
    assert_eq!(stats.used_area, 50.0);
    assert_eq!(stats.occupancy, 0.5);
    assert_eq!(stats.wasted_area(), 50.0);
    assert_eq!(stats.waste_percentage(), 50.0);
    let summary = stats.summary();
    assert!(summary.contains("Placed: 2"), "{summary}");
    assert!(summary.contains("Occupancy: 50.00%"), "{summary}");
}

#[test]
fn empty_result_has_zero_occupancy() {
    let container = Container::new(3.0, 2.0);
    let stats = PackingResult::default().stats(&container);
    assert_eq!(stats.num_items, 0);
    assert_eq!(stats.occupancy, 0.0);
    assert_eq!(stats.wasted_area(), 6.0);
}

#[test]
fn json_export_lists_placed_and_unpacked_in_input_order() {
    let (container, _, result) = half_full();
    let v = to_json(&container, &result);
    assert_eq!(v["container"]["width"], 10.0);
    assert_eq!(v["container"]["height"], 10.0);

    let placed = v["placed"].as_array().unwrap();
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0]["id"], 0);
    assert_eq!(placed[0]["label"], "a");
    assert_eq!(placed[0]["x"], 0.0);
    assert_eq!(placed[0]["y"], 0.0);
    assert_eq!(placed[1]["label"], "b");
    assert_eq!(placed[1]["width"], 5.0);

    let unpacked = v["unpacked"].as_array().unwrap();
    assert_eq!(unpacked.len(), 1);
    assert_eq!(unpacked[0]["label"], "too long");
    assert_eq!(unpacked[0]["width"], 11.0);

    assert_eq!(v["stats"]["num_placed"], 2);
    assert_eq!(v["stats"]["occupancy"], 0.5);
}

#[test]
fn placed_item_rect_matches_position_and_size() {
    let (_, _, result) = half_full();
    let r = result.placed[1].rect();
    assert_eq!(r, Rect::new(result.placed[1].x, result.placed[1].y, 5.0, 5.0));
}
