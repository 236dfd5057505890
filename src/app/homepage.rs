use std::sync::Arc;

use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::{load_portfolio, Portfolio, DEFAULT_PORTFOLIO};
use crate::nav::{NavState, Section, Viewport};

use super::{
    contact::ContactSection, hero::Hero, navbar::NavBar, projects::SideProjectsSection,
    skills::SkillsSection, viewport::DomViewport, work::WorkSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    match load_portfolio(DEFAULT_PORTFOLIO) {
        Ok(portfolio) => Either::Left(view! { <PortfolioPage portfolio /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <div class="min-h-screen flex items-center justify-center text-gray-600">
                    "This page is temporarily unavailable."
                </div>
            })
        }
    }
}

/// The whole single-page portfolio, with scroll-tracking navigation.
#[component]
pub fn PortfolioPage(portfolio: Arc<Portfolio>) -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    use_scroll_tracking(nav, DomViewport);

    let scrolled = Memo::new(move |_| nav.with(NavState::scrolled));
    let active = Memo::new(move |_| nav.with(NavState::active_section));
    let menu_open = Memo::new(move |_| nav.with(NavState::mobile_menu_open));

    let navigate = Callback::new(move |section: Section| {
        nav.maybe_update(|state| state.scroll_to_section(&DomViewport, section));
    });
    let toggle_menu = Callback::new(move |()| nav.update(NavState::toggle_mobile_menu));

    let Portfolio {
        personal,
        principles,
        stats,
        highlights,
        experience,
        skills,
        projects,
        fun_facts,
    } = (*portfolio).clone();
    let brand = brand_handle(&personal.name);
    let identity = personal.clone();

    view! {
        <div class="min-h-screen bg-white text-gray-900">
            <NavBar
                brand
                scrolled
                active
                menu_open
                navigate
                toggle_menu
            />
            <Hero personal=identity stats principles highlights navigate />
            <WorkSection experience />
            <SkillsSection skills fun_facts />
            <SideProjectsSection projects />
            <ContactSection personal />
        </div>
    }
}

/// Recomputes `nav` from `viewport` on every window scroll.
///
/// The listener belongs to the current reactive owner: `use_event_listener`
/// registers its removal with `on_cleanup`, so it is detached when the owner
/// is cleaned up (the page unmounting) and the returned cleanup handle is not
/// needed. Scrolls that change nothing leave `nav` unnotified.
pub fn use_scroll_tracking<V>(nav: RwSignal<NavState>, viewport: V)
where
    V: Viewport + Send + Sync + 'static,
{
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        nav.maybe_update(|state| state.on_scroll(&viewport));
    });
}

/// Terminal-prompt style handle for the nav bar: "Ada B. Lovelace" -> "ada@lovelace".
fn brand_handle(name: &str) -> String {
    let mut words = name.split_whitespace();
    match (words.next(), words.next_back()) {
        (Some(first), Some(last)) => {
            format!("{}@{}", first.to_lowercase(), last.to_lowercase())
        }
        (Some(only), None) => only.to_lowercase(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_handle() {
        assert_eq!(brand_handle("Thierno Ibrahima LO"), "thierno@lo");
        assert_eq!(brand_handle("Ada Lovelace"), "ada@lovelace");
        assert_eq!(brand_handle("  Prince  "), "prince");
        assert_eq!(brand_handle(""), "");
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use crate::content::tests::sample;

    fn render(portfolio: Portfolio) -> String {
        let owner = Owner::new();
        owner.set();
        view! { <PortfolioPage portfolio=Arc::new(portfolio) /> }.to_html()
    }

    fn count(html: &str, block: &str) -> usize {
        html.matches(&format!("data-block=\"{block}\"")).count()
    }

    fn in_order(html: &str, needles: &[&str]) -> bool {
        let positions = needles
            .iter()
            .map(|n| html.find(n).unwrap_or_else(|| panic!("{n} not rendered")))
            .collect::<Vec<_>>();
        positions.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_renders_blocks_in_supplied_order() {
        let html = render(sample());

        assert_eq!(count(&html, "stat"), 3);
        assert!(in_order(&html, &["Years", "Services", "Uptime"]));

        assert_eq!(count(&html, "experience"), 2);
        assert!(in_order(&html, &["Acme", "Initech"]));

        assert_eq!(count(&html, "skill-category"), 4);
        assert!(in_order(
            &html,
            &["Languages", "Infrastructure", "Data", "Tooling"]
        ));
    }

    #[test]
    fn test_experience_without_projects_renders_none() {
        let html = render(sample());
        let marker = "data-block=\"experience\"";
        let first = html.find(marker).unwrap();
        let second = first + 1 + html[first + 1..].find(marker).unwrap();
        let skills = html.find("id=\"skills\"").unwrap();

        assert_eq!(count(&html[first..second], "project"), 2);
        assert_eq!(count(&html[second..skills], "project"), 0);
    }

    #[test]
    fn test_every_nav_target_is_mounted() {
        let html = render(sample());
        for section in Section::ALL {
            assert!(
                html.contains(&format!("id=\"{}\"", section.id())),
                "missing section {section}"
            );
        }
    }

    #[test]
    fn test_absent_optional_fields_are_omitted() {
        let html = render(sample());
        // Only the first project has a problem/solution/impact narrative
        assert_eq!(html.matches("data-narrative=\"problem\"").count(), 1);
        assert_eq!(html.matches("data-narrative=\"impact\"").count(), 1);
        // Only one side project has a link
        assert_eq!(count(&html, "side-project"), 2);
        assert_eq!(count(&html, "side-project-link"), 1);
        assert!(html.contains("https://github.com/ada/dotfiles"));
    }

    #[test]
    fn test_mobile_menu_starts_closed() {
        let html = render(sample());
        assert_eq!(count(&html, "mobile-menu"), 0);
        assert!(html.contains("ada@example"));
    }

    #[test]
    fn test_home_page_renders_embedded_portfolio() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <HomePage /> }.to_html();
        let portfolio = load_portfolio(DEFAULT_PORTFOLIO).unwrap();
        assert!(html.contains(&portfolio.personal.name));
        assert_eq!(count(&html, "experience"), portfolio.experience.len());
    }
}
