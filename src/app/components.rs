use leptos::prelude::*;

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-4xl font-bold mb-4">{title}</h2>
        <p class="text-gray-600 mb-16 text-lg">{subtitle}</p>
    }
}

/// Monospace technology tags, as used on work and side projects.
#[component]
pub fn TechTags(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .into_iter()
                .map(|tech| {
                    view! {
                        <span class="text-xs px-2 py-1 bg-white border border-gray-200 text-gray-700 font-mono">
                            {tech}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Link that opens in a new tab without leaking the opener.
#[component]
pub fn ExternalLink(
    href: String,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class=class aria-label=aria_label>
            {children()}
        </a>
    }
}
