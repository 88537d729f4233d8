use leptos::prelude::*;

use crate::content::{site, Icon, Project, SectionHeading};
use crate::state::Section;

use super::icon::Glyph;
use super::progress::ProgressRing;

#[component]
pub fn SectionTitle(heading: &'static SectionHeading) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold text-white mb-4">
                {format!("{} ", heading.lead)}
                <span class="text-blue-500">{heading.accent.clone()}</span>
            </h2>
            <p class="text-gray-400 max-w-2xl mx-auto">{heading.subtitle.clone()}</p>
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let skills = &site().skills;

    view! {
        <section id=Section::Skills.anchor() class="py-20 bg-gray-900/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle heading=&skills.heading />
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-8">
                    {skills
                        .items
                        .iter()
                        .map(|skill| {
                            view! {
                                <ProgressRing
                                    percent=skill.percent
                                    label=skill.label.clone()
                                    icon=skill.icon
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    let services = &site().services;

    view! {
        <section id=Section::Services.anchor() class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle heading=&services.heading />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {services
                        .items
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="group bg-gray-800/50 border border-gray-700 rounded-2xl p-6 hover:border-blue-500/50 transition-all duration-300 hover:-translate-y-2">
                                    <div class="w-14 h-14 rounded-xl bg-blue-500/10 flex items-center justify-center mb-4 group-hover:bg-blue-500/20 transition-colors">
                                        <Glyph icon=service.icon classes="text-2xl text-blue-500" />
                                    </div>
                                    <h3 class="text-xl font-semibold text-white mb-3">
                                        {service.title.clone()}
                                    </h3>
                                    <p class="text-gray-400 leading-relaxed">
                                        {service.description.clone()}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = &site().projects;

    view! {
        <section id=Section::Projects.anchor() class="py-20 bg-gray-900/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle heading=&projects.heading />
                <div class="space-y-12">
                    {projects
                        .items
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let flipped = i % 2 == 1;
                            view! { <ProjectRow project flipped /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Image and description side by side; every other row swaps sides on desktop.
#[component]
fn ProjectRow(project: &'static Project, flipped: bool) -> impl IntoView {
    let (image_order, text_order) = if flipped {
        ("md:order-2", "md:order-1")
    } else {
        ("", "")
    };

    view! {
        <div class="grid md:grid-cols-2 gap-8 items-center">
            <div class=format!("relative {image_order}")>
                <div class=format!("relative rounded-3xl overflow-hidden p-8 {}", project.background)>
                    <div class="absolute top-4 left-4">
                        <Glyph icon=project.icon classes="text-3xl text-white/80" />
                    </div>
                    <img
                        src=project.image.clone()
                        alt=project.title.clone()
                        class="w-full max-w-xs mx-auto rounded-2xl shadow-2xl"
                    />
                </div>
            </div>

            <div class=text_order>
                <h3 class=format!(
                    "text-2xl md:text-3xl font-bold mb-4 bg-gradient-to-r bg-clip-text text-transparent {}",
                    project.gradient,
                )>{project.title.clone()}</h3>
                <p class="text-gray-400 text-lg leading-relaxed mb-6">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-4 py-2 bg-gray-800 text-gray-300 rounded-full text-sm">
                                    {tag.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.link.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class=format!(
                        "inline-flex items-center border-2 border-gray-600 bg-transparent px-4 py-2 rounded-md font-medium hover:bg-gradient-to-r hover:border-transparent hover:text-white transition-all {}",
                        project.gradient,
                    )
                >
                    "View Project"
                    <Glyph icon=Icon::ExternalLink classes="ml-2 text-sm" />
                </a>
            </div>
        </div>
    }
}
