//! Browser tests for the window scroll listener.
//!
//! Run with `wasm-pack test --headless --firefox -- --features hydrate`.
#![cfg(all(target_arch = "wasm32", feature = "hydrate"))]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use leptos::{prelude::*, task::Executor};
use portfolio_site::{
    app::use_scroll_tracking,
    nav::{NavState, Section, SectionBounds, Viewport},
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Reports the work section under the probe line and counts every query.
#[derive(Clone, Default)]
struct CountingViewport {
    queries: Arc<AtomicUsize>,
}

impl Viewport for CountingViewport {
    fn scroll_offset(&self) -> f64 {
        self.queries.fetch_add(1, Ordering::SeqCst);
        400.0
    }

    fn section_bounds(&self, section: Section) -> Option<SectionBounds> {
        (section == Section::Work).then(|| SectionBounds::new(0.0, 800.0))
    }

    fn scroll_into_view(&self, _section: Section) -> bool {
        false
    }
}

fn dispatch_scroll() {
    let event = web_sys::Event::new("scroll").expect("should be able to create a scroll event");
    window()
        .dispatch_event(&event)
        .expect("should be able to dispatch on window");
}

#[wasm_bindgen_test]
async fn test_scroll_updates_nav_state() {
    let _ = Executor::init_wasm_bindgen();
    let root = Owner::new();
    root.set();

    let nav = RwSignal::new(NavState::default());
    let viewport = CountingViewport::default();
    use_scroll_tracking(nav, viewport.clone());
    leptos::task::tick().await;

    dispatch_scroll();
    assert_eq!(viewport.queries.load(Ordering::SeqCst), 1);
    let state = nav.get_untracked();
    assert!(state.scrolled());
    assert_eq!(state.active_section(), Section::Work);

    root.cleanup();
}

#[wasm_bindgen_test]
async fn test_listener_is_removed_with_its_owner() {
    let _ = Executor::init_wasm_bindgen();
    let root = Owner::new();
    root.set();

    // The signal outlives the page owner so it can be inspected afterwards
    let nav = RwSignal::new(NavState::default());
    let viewport = CountingViewport::default();

    let page = root.child();
    page.with(|| use_scroll_tracking(nav, viewport.clone()));
    leptos::task::tick().await;

    dispatch_scroll();
    assert_eq!(viewport.queries.load(Ordering::SeqCst), 1);

    page.cleanup();
    nav.set(NavState::default());

    dispatch_scroll();
    dispatch_scroll();
    assert_eq!(viewport.queries.load(Ordering::SeqCst), 1);
    assert_eq!(nav.get_untracked(), NavState::default());

    root.cleanup();
}
