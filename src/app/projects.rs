use leptos::prelude::*;

use crate::content::SideProject;
use crate::nav::Section;

use super::components::{ExternalLink, SectionHeading, TechTags};

#[component]
pub fn SideProjectsSection(projects: Vec<SideProject>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-24 px-6 bg-gray-50">
            <div class="max-w-4xl mx-auto">
                <SectionHeading
                    title="Side Projects"
                    subtitle="Things I built when I wasn't being paid to build things"
                />
                <div class="space-y-10">
                    {projects
                        .into_iter()
                        .map(|project| view! { <SideProjectEntry project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SideProjectEntry(project: SideProject) -> impl IntoView {
    let SideProject {
        name,
        tagline,
        description,
        tech,
        status,
        link,
    } = project;
    let link_label = format!("Open {name}");

    view! {
        <div data-block="side-project" class="border-l-2 border-gray-400 pl-8">
            <div class="flex items-start justify-between mb-3">
                <div>
                    <h3 class="text-2xl font-bold mb-1">{name}</h3>
                    <p class="text-sm text-gray-600 italic">{tagline}</p>
                </div>
                {link
                    .map(|href| {
                        view! {
                            <span data-block="side-project-link">
                                <ExternalLink
                                    href
                                    class="text-gray-600 hover:text-gray-900"
                                    aria_label=link_label
                                >
                                    <i class="extra-link" />
                                </ExternalLink>
                            </span>
                        }
                    })}
            </div>
            <p class="text-gray-700 mb-4">{description}</p>
            <div class="flex items-center gap-4 mb-4">
                <span class="text-xs px-2 py-1 bg-green-100 text-green-800 font-mono">
                    {status}
                </span>
            </div>
            <TechTags tags=tech />
        </div>
    }
}
