use raymaze::core::DistanceTable;
use raymaze::types::{DISTANCE_SENTINEL, INIT_WALL_HEIGHT, MAX_DISTANCE};

fn h(i: usize) -> i32 {
    if i == 0 {
        INIT_WALL_HEIGHT
    } else {
        INIT_WALL_HEIGHT / i as i32
    }
}

#[test]
fn deltas_follow_inverse_distance() {
    let table = DistanceTable::standard();
    assert_eq!(table.len(), MAX_DISTANCE);
    assert_eq!(table.delta(0), 0);
    for i in 1..MAX_DISTANCE - 1 {
        assert_eq!(table.delta(i), h(i - 1) - h(i), "delta[{i}]");
    }
}

#[test]
fn sentinel_exceeds_any_reachable_accumulator() {
    let table = DistanceTable::standard();
    assert_eq!(table.delta(MAX_DISTANCE - 1), DISTANCE_SENTINEL);
    for steps in 0..MAX_DISTANCE {
        assert!(table.height_after(steps) < table.delta(MAX_DISTANCE - 1));
    }
}

#[test]
fn accumulator_walks_through_h0_over_distance() {
    let table = DistanceTable::standard();
    assert_eq!(table.height_after(0), INIT_WALL_HEIGHT);
    assert_eq!(table.height_after(1), INIT_WALL_HEIGHT);
    for d in 2..MAX_DISTANCE {
        assert_eq!(table.height_after(d), INIT_WALL_HEIGHT / (d as i32 - 1), "d={d}");
    }
}

#[test]
fn deltas_are_non_negative_and_shrinking() {
    let table = DistanceTable::standard();
    let body = &table.deltas()[2..MAX_DISTANCE - 1];
    assert!(body.iter().all(|&d| d >= 0));
    assert!(body.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn custom_initial_height() {
    let table = DistanceTable::new(64 << 8);
    assert_eq!(table.initial_height(), 64 << 8);
    assert_eq!(table.delta(2), (64 << 8) - (64 << 8) / 2);
    assert_eq!(table, DistanceTable::new(64 << 8));
    assert_ne!(table, DistanceTable::default());
}
