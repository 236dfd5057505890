use leptos::prelude::*;

use crate::content::{Experience, Project};
use crate::nav::Section;

use super::components::{SectionHeading, TechTags};

#[component]
pub fn WorkSection(experience: Vec<Experience>) -> impl IntoView {
    view! {
        <section id=Section::Work.id() class="py-24 px-6 bg-gray-50">
            <div class="max-w-4xl mx-auto">
                <SectionHeading
                    title="Work"
                    subtitle="Problems I've solved for real companies with real users"
                />
                <div class="space-y-16">
                    {experience
                        .into_iter()
                        .map(|job| view! { <ExperienceBlock job /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceBlock(job: Experience) -> impl IntoView {
    view! {
        <div data-block="experience">
            <div class="mb-8">
                <div class="flex items-baseline gap-4 mb-2">
                    <h3 class="text-2xl font-bold">{job.title}</h3>
                    <span class="text-sm text-gray-500 font-mono">{job.period}</span>
                </div>
                <div class="text-gray-600 mb-2">{job.company}</div>
                <p class="text-gray-600 italic">{job.summary}</p>
            </div>
            <div class="space-y-10">
                {job
                    .projects
                    .into_iter()
                    .map(|project| view! { <ProjectEntry project /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectEntry(project: Project) -> impl IntoView {
    let Project {
        name,
        client,
        period,
        description,
        problem,
        solution,
        impact,
        achievements,
        tech,
    } = project;

    let achievements = (!achievements.is_empty()).then(|| {
        view! {
            <ul class="space-y-1">
                {achievements
                    .into_iter()
                    .map(|a| {
                        view! {
                            <li class="text-sm text-gray-700 flex items-start">
                                <span class="mr-2">"•"</span>
                                <span>{a}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
    });

    view! {
        <div data-block="project" class="border-l-2 border-gray-300 pl-8 pb-8">
            <div class="mb-4">
                <div class="flex items-baseline gap-4 mb-1">
                    <h4 class="text-xl font-bold">{name}</h4>
                    {period
                        .map(|p| view! { <span class="text-xs text-gray-500 font-mono">{p}</span> })}
                </div>
                {client.map(|c| view! { <div class="text-sm text-gray-500 font-mono">{c}</div> })}
            </div>
            <div class="space-y-4 mb-6">
                {description.map(|d| view! { <p class="text-gray-700">{d}</p> })}
                {problem.map(|text| view! { <Narrative kind="problem" label="Problem" text /> })}
                {solution.map(|text| view! { <Narrative kind="solution" label="Solution" text /> })}
                {impact.map(|text| view! { <Narrative kind="impact" label="Impact" text emphasis=true /> })}
                {achievements}
            </div>
            <TechTags tags=tech />
        </div>
    }
}

#[component]
fn Narrative(
    kind: &'static str,
    label: &'static str,
    text: String,
    #[prop(optional)] emphasis: bool,
) -> impl IntoView {
    view! {
        <div data-narrative=kind>
            <div class="text-xs font-bold text-gray-500 uppercase mb-1">{label}</div>
            <p class=if emphasis { "text-gray-700 font-medium" } else { "text-gray-700" }>{text}</p>
        </div>
    }
}
