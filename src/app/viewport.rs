use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::nav::{Section, SectionBounds, Viewport};

/// [`Viewport`] backed by the live document. Only usable in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_bounds(&self, section: Section) -> Option<SectionBounds> {
        let rect = document()
            .get_element_by_id(section.id())?
            .get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }

    fn scroll_into_view(&self, section: Section) -> bool {
        let Some(el) = document().get_element_by_id(section.id()) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
