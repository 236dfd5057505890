use leptos::prelude::*;

use crate::content::Skills;
use crate::nav::Section;

use super::components::SectionHeading;

#[component]
pub fn SkillsSection(skills: Skills, fun_facts: Vec<String>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-24 px-6">
            <div class="max-w-4xl mx-auto">
                <SectionHeading
                    title="Skills"
                    subtitle="Technologies I actually use, not just buzzwords from tutorials"
                />
                <div class="space-y-10">
                    {skills
                        .0
                        .into_iter()
                        .map(|category| {
                            view! {
                                <div data-block="skill-category">
                                    <div class="mb-4">
                                        <h3 class="text-xl font-bold mb-1">{category.name}</h3>
                                        <p class="text-sm text-gray-600">{category.description}</p>
                                    </div>
                                    <div class="flex flex-wrap gap-2">
                                        {category
                                            .items
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="text-sm px-3 py-2 bg-gray-100 text-gray-800 font-mono hover:bg-gray-200 transition-colors">
                                                        {skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <FunFacts fun_facts />
            </div>
        </section>
    }
}

#[component]
fn FunFacts(fun_facts: Vec<String>) -> impl IntoView {
    (!fun_facts.is_empty()).then(|| {
        view! {
            <div class="mt-16 p-6 bg-gray-50 border-l-4 border-gray-300">
                <div class="text-sm font-semibold mb-3">"FUN FACTS"</div>
                <div class="space-y-2">
                    {fun_facts
                        .into_iter()
                        .map(|fact| view! { <div class="text-sm text-gray-700">"→ " {fact}</div> })
                        .collect_view()}
                </div>
            </div>
        }
    })
}
