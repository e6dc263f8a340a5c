use raymaze::core::{apply_motion, assets, trace, DistanceTable, Engine, ScreenMemory};
use raymaze::types::{Angle, MotionAction, SCREEN_COLUMNS};

#[test]
fn standing_still_redraws_nothing() {
    let world = assets::standard_world().unwrap();
    let mut engine = Engine::new();
    let mut screen = ScreenMemory::default();
    let pose = assets::START_POSE;

    let first = engine.render_frame(&world, &pose, &mut screen);
    assert_eq!(first.frame, 1);
    assert!(first.visible_columns > 0);
    assert_eq!(first.dirty_columns, first.visible_columns);

    let picture = screen.clone();
    let second = engine.render_frame(&world, &pose, &mut screen);
    assert_eq!(second.frame, 2);
    assert_eq!(second.dirty_columns, 0);
    assert_eq!(screen, picture);
}

#[test]
fn walking_toward_a_wall_makes_it_taller_until_blocked() {
    let world = assets::standard_world().unwrap();
    let table = DistanceTable::standard();
    let mut pose = assets::START_POSE;
    let centre = SCREEN_COLUMNS / 2;

    let mut last = trace(centre, &pose, &world, &table);
    let mut steps = 0;
    while apply_motion(&mut pose, MotionAction::Forward, &world) {
        let h = trace(centre, &pose, &world, &table);
        assert!(h >= last, "wall shrank from {last} to {h} after {steps} steps");
        last = h;
        steps += 1;
        assert!(steps < 64, "never reached the wall");
    }
    assert!(steps > 0);
    assert!(world.grid().is_solid_at(pose.x + world.trig().step(pose.heading).0, pose.y));
}

#[test]
fn full_turn_returns_to_the_same_frame() {
    let world = assets::standard_world().unwrap();
    let mut pose = assets::START_POSE;
    let mut engine = Engine::new();
    let start = *engine.compute_heights(&world, &pose);

    for _ in 0..256 / 2 {
        apply_motion(&mut pose, MotionAction::TurnRight, &world);
    }
    assert_eq!(pose.heading, Angle::ZERO);
    assert_eq!(*engine.compute_heights(&world, &pose), start);
}

#[test]
fn turning_changes_the_view_and_turning_back_restores_it() {
    let world = assets::standard_world().unwrap();
    let mut engine = Engine::new();
    let mut screen = ScreenMemory::default();
    let mut pose = assets::START_POSE;

    engine.render_frame(&world, &pose, &mut screen);
    let picture = screen.clone();

    for _ in 0..8 {
        apply_motion(&mut pose, MotionAction::TurnLeft, &world);
    }
    let turned = engine.render_frame(&world, &pose, &mut screen);
    assert!(turned.dirty_columns > 0);

    for _ in 0..8 {
        apply_motion(&mut pose, MotionAction::TurnRight, &world);
    }
    engine.render_frame(&world, &pose, &mut screen);
    assert_eq!(screen, picture);
}
