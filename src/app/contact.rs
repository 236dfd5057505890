use chrono::Datelike;
use leptos::prelude::*;

use crate::content::Personal;
use crate::nav::Section;
use crate::site::build_time;

use super::components::ExternalLink;

#[component]
pub fn ContactSection(personal: Personal) -> impl IntoView {
    let Personal {
        name,
        email,
        github,
        linkedin,
        upwork,
        ..
    } = personal;
    let year = build_time().year();

    view! {
        <section id=Section::Contact.id() class="py-24 px-6">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold mb-4">"Let's Talk"</h2>
                <p class="text-gray-600 mb-12 text-lg">
                    "I'm always open to interesting projects and opportunities. If you have a problem that needs solving, let's chat."
                </p>
                <div class="space-y-4 mb-12">
                    <div class="flex items-center gap-3 text-gray-700">
                        <i class="extra-email" />
                        <a
                            href=format!("mailto:{email}")
                            class="text-lg hover:text-gray-900 transition-colors"
                        >
                            {email.clone()}
                        </a>
                    </div>
                    <div class="flex items-center gap-3 text-gray-700">
                        <i class="devicon-linkedin-plain" />
                        <ExternalLink href=linkedin class="hover:text-gray-900 transition-colors">
                            "LinkedIn"
                        </ExternalLink>
                    </div>
                    <div class="flex items-center gap-3 text-gray-700">
                        <i class="devicon-github-plain" />
                        <ExternalLink href=github class="hover:text-gray-900 transition-colors">
                            "GitHub"
                        </ExternalLink>
                    </div>
                    <div class="flex items-center gap-3 text-gray-700">
                        <i class="extra-link" />
                        <ExternalLink href=upwork class="hover:text-gray-900 transition-colors">
                            "Upwork Profile"
                        </ExternalLink>
                    </div>
                </div>
                <footer class="pt-12 border-t border-gray-200">
                    <p class="text-sm text-gray-500 font-mono">
                        {format!("© {year} {name} · Built with Rust, Leptos & too much coffee")}
                    </p>
                </footer>
            </div>
        </section>
    }
}
