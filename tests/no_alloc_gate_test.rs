use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use raymaze::core::{apply_motion, assets, Engine, ScreenMemory};
use raymaze::term::{Density, FrameBuffer, HudStatus, ScreenView, Viewport};
use raymaze::types::MotionAction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// One test per binary: the counter is global, so a second test running in
// parallel would be counted too.
#[test]
fn frame_pipeline_does_not_allocate_after_setup() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let world = assets::standard_world().unwrap();
    let mut engine = Engine::new();
    let mut screen = ScreenMemory::default();
    let mut pose = assets::START_POSE;

    let viewport = Viewport::new(140, 40);
    let view = ScreenView::new(Density::fit(viewport));
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    // Warm-up.
    let stats = engine.render_frame(&world, &pose, &mut screen);
    view.render_into(&screen, Some(&HudStatus { pose, stats }), viewport, &mut fb);

    let moves = [
        MotionAction::TurnRight,
        MotionAction::Forward,
        MotionAction::TurnLeft,
        MotionAction::Backward,
    ];

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            apply_motion(&mut pose, moves[i % moves.len()], &world);
            let stats = engine.render_frame(&world, &pose, &mut screen);
            view.render_into(&screen, Some(&HudStatus { pose, stats }), viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0, "expected no allocations in the frame loop");
}
