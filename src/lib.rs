#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod nav;
pub mod site;
pub mod sitemap;

/// Browser console verbosity: navigation debug events only in debug builds.
pub fn console_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // Route `log` output from the shared modules to the browser console
    _ = console_log::init_with_level(console_log_level());
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(debug_assertions)]
    #[test]
    fn test_debug_builds_log_navigation_events() {
        assert_eq!(console_log_level(), log::Level::Debug);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_release_builds_stop_at_info() {
        assert_eq!(console_log_level(), log::Level::Info);
        assert!(!log::Level::Debug.le(&console_log_level()));
    }
}
