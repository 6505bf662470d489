use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_2048::core::GameState;
use tui_2048::term::{encode_diff_into, encode_full_into, FrameBuffer, GameView, Viewport};
use tui_2048::types::Direction;

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

// Single test in this binary: the counter is global.
#[test]
fn diff_encode_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut gs = GameState::new(3);
    let mut snap = gs.snapshot();

    let mut prev = FrameBuffer::new(viewport.width, viewport.height);
    let mut next = FrameBuffer::new(viewport.width, viewport.height);
    view.render_into(&snap, viewport, &mut prev);

    // Warm-up: a full redraw is the largest frame, so its capacity covers every diff.
    let mut out = Vec::with_capacity(64 * 1024);
    encode_full_into(&prev, &mut out).unwrap();

    let mut dirty_frames = 0;
    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            let _ = gs.update(Direction::ALL[i % 4]);
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut next);

            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
            if prev != next {
                dirty_frames += 1;
            }
            std::mem::swap(&mut prev, &mut next);
        }
    });

    assert!(dirty_frames > 0);
    assert_eq!(allocs, 0, "diff encoding allocated {} times", allocs);
}
