use leptos::prelude::*;

use crate::nav::Section;

const NAV_BASE: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-200 bg-white";

#[component]
pub fn NavBar(
    brand: String,
    #[prop(into)] scrolled: Signal<bool>,
    #[prop(into)] active: Signal<Section>,
    #[prop(into)] menu_open: Signal<bool>,
    navigate: Callback<Section>,
    toggle_menu: Callback<()>,
) -> impl IntoView {
    let nav_class = move || {
        if scrolled.get() {
            format!("{NAV_BASE} border-b border-gray-200")
        } else {
            NAV_BASE.to_string()
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-4xl mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <button
                        on:click=move |_| navigate.run(Section::Home)
                        class="font-mono text-sm font-semibold flex items-center gap-2"
                    >
                        <i class="extra-terminal" />
                        {brand}
                    </button>

                    <div class="hidden md:flex items-center gap-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| navigate.run(section)
                                        class=move || {
                                            if active.get() == section {
                                                "font-mono text-sm transition-colors text-gray-900 font-semibold"
                                            } else {
                                                "font-mono text-sm transition-colors text-gray-500 hover:text-gray-900"
                                            }
                                        }
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        on:click=move |_| toggle_menu.run(())
                        class="md:hidden text-gray-600"
                        aria-label="Toggle navigation menu"
                    >
                        <i class=move || {
                            if menu_open.get() { "extra-close" } else { "extra-menu" }
                        } />
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <div
                        data-block="mobile-menu"
                        class="md:hidden mt-4 pb-4 space-y-3 border-t border-gray-200 pt-4"
                    >
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| navigate.run(section)
                                        class="block w-full text-left font-mono text-sm text-gray-600 hover:text-gray-900"
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
