use std::{fmt, str::FromStr};

use thiserror::Error;

/// Scroll offset past which the nav bar switches to its "scrolled" style.
pub const SCROLLED_THRESHOLD: f64 = 20.0;
/// Distance from the top of the viewport used to decide which section is in view.
pub const PROBE_LINE: f64 = 150.0;

/// Page sections, in the order they are declared on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Work,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Work,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section in the page body.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Work => "work",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        self.id()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct ParseSectionError(String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// Vertical extent of a section relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Layout queries the navigation state needs from whatever renders the page.
pub trait Viewport {
    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;

    /// Bounds of the section's element, or `None` if it is not mounted.
    fn section_bounds(&self, section: Section) -> Option<SectionBounds>;

    /// Smooth-scrolls the section into view. Returns `false` if the section
    /// is not mounted, in which case nothing happens.
    fn scroll_into_view(&self, section: Section) -> bool;
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

/// First section, in declared order, crossing the probe line.
pub fn section_at_probe<V: Viewport + ?Sized>(viewport: &V) -> Option<Section> {
    Section::ALL.into_iter().find(|section| {
        viewport
            .section_bounds(*section)
            .is_some_and(|bounds| bounds.contains(PROBE_LINE))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    scrolled: bool,
    active_section: Section,
    mobile_menu_open: bool,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Recomputes the scroll-derived state. Returns whether anything changed.
    ///
    /// When no section crosses the probe line the active section is left as it
    /// was, so fast scrolls over a gap between sections don't clear the nav
    /// highlight.
    pub fn on_scroll<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        let before = *self;
        self.scrolled = is_scrolled(viewport.scroll_offset());
        if let Some(section) = section_at_probe(viewport) {
            if section != self.active_section {
                log::debug!("active section {} -> {}", self.active_section, section);
            }
            self.active_section = section;
        }
        before != *self
    }

    /// Jumps to a section, closing the mobile menu if the jump happened.
    /// Returns whether anything changed.
    pub fn scroll_to_section<V: Viewport + ?Sized>(
        &mut self,
        viewport: &V,
        section: Section,
    ) -> bool {
        if !viewport.scroll_into_view(section) {
            log::debug!("section {section} is not mounted, skipping scroll");
            return false;
        }
        let was_open = self.mobile_menu_open;
        self.mobile_menu_open = false;
        was_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}
