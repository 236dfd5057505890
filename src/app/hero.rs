use leptos::prelude::*;

use crate::content::{Highlight, Personal, Stat};
use crate::nav::Section;

use super::components::ExternalLink;

#[component]
pub fn Hero(
    personal: Personal,
    stats: Vec<Stat>,
    principles: Vec<String>,
    highlights: Vec<Highlight>,
    navigate: Callback<Section>,
) -> impl IntoView {
    let Personal {
        name,
        tagline,
        bio,
        location,
        email,
        github,
        linkedin,
        status,
        ..
    } = personal;

    view! {
        <section id=Section::Home.id() class="min-h-screen flex items-center px-6 pt-20">
            <div class="max-w-4xl mx-auto w-full">
                <div class="mb-12">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">{name}</h1>
                    <p class="text-2xl md:text-3xl text-gray-700 mb-6">{tagline}</p>
                    <p class="text-lg text-gray-600 leading-relaxed max-w-3xl mb-4">{bio}</p>
                    <div class="flex items-center gap-6 text-sm text-gray-500">
                        <span>{location}</span>
                        <span>"•"</span>
                        <span class="text-green-600 font-medium">{status}</span>
                    </div>
                </div>
                <StatsGrid stats />
                <Principles principles />
                <Highlights highlights />
                <div class="flex flex-wrap items-center gap-4">
                    <ExternalLink
                        href=github
                        class="flex items-center gap-2 px-4 py-2 border border-gray-300 hover:border-gray-900 transition-colors text-sm"
                    >
                        <i class="devicon-github-plain" />
                        "GitHub"
                    </ExternalLink>
                    <ExternalLink
                        href=linkedin
                        class="flex items-center gap-2 px-4 py-2 border border-gray-300 hover:border-gray-900 transition-colors text-sm"
                    >
                        <i class="devicon-linkedin-plain" />
                        "LinkedIn"
                    </ExternalLink>
                    <a
                        href=format!("mailto:{email}")
                        class="flex items-center gap-2 px-4 py-2 bg-gray-900 text-white hover:bg-gray-800 transition-colors text-sm"
                    >
                        <i class="extra-email" />
                        "Get in Touch"
                    </a>
                </div>
                <button
                    on:click=move |_| navigate.run(Section::Work)
                    class="mt-12 flex items-center gap-2 text-sm text-gray-600 hover:text-gray-900 transition-colors"
                >
                    "See what I've built "
                    <i class="extra-chevron-down" />
                </button>
            </div>
        </section>
    }
}

#[component]
fn StatsGrid(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-6 py-8 mb-8 border-y border-gray-200">
            {stats
                .into_iter()
                .map(|stat| {
                    view! {
                        <div data-block="stat">
                            <div class="text-3xl font-bold mb-1">{stat.value}</div>
                            <div class="text-sm text-gray-600 mb-1">{stat.label}</div>
                            <div class="text-xs text-gray-400">{stat.subtext}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Principles(principles: Vec<String>) -> impl IntoView {
    view! {
        <div class="mb-12 p-6 bg-gray-50 border-l-4 border-gray-900">
            <div class="text-sm font-semibold mb-3 text-gray-900">"ENGINEERING PRINCIPLES"</div>
            <div class="space-y-2">
                {principles
                    .into_iter()
                    .map(|principle| {
                        view! {
                            <div class="text-sm text-gray-700 flex items-start">
                                <span class="mr-2 text-gray-400">"→"</span>
                                <span>{principle}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Highlights(highlights: Vec<Highlight>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8 mb-12">
            {highlights
                .into_iter()
                .map(|group| {
                    view! {
                        <div data-block="highlight">
                            <h3 class="text-sm font-bold mb-4 uppercase tracking-wide">
                                {group.title}
                            </h3>
                            <ul class="space-y-2">
                                {group
                                    .items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <li class="text-sm text-gray-700 flex items-start">
                                                <span class="mr-2">"•"</span>
                                                <span>{item}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
