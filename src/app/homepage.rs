use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{site, Icon};
use crate::state::Section;

use super::contact::{ContactSection, SocialLinks};
use super::icon::Glyph;
use super::showcase::{ProjectsSection, ServicesSection, SkillsSection};
use super::toaster::use_toasts;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <HeroSection />
        <AboutSection />
        <SkillsSection />
        <ServicesSection />
        <ProjectsSection />
        <ContactSection />
    }
}

/// Placeholder until a real CV is hosted: every click only shows a notice.
#[component]
fn DownloadCvButton(classes: &'static str) -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <button
            class=format!("inline-flex items-center justify-center font-medium transition-colors {classes}")
            on:click=move |_| {
                toasts.cv_download();
            }
        >
            <Glyph icon=Icon::Download classes="mr-2" />
            "Download CV"
        </button>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let hero = &site().hero;

    view! {
        <section
            id=Section::Home.anchor()
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-16"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-black via-gray-900 to-black" />
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-blue-500/10 rounded-full blur-3xl animate-pulse" />
                <div
                    class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-blue-500/5 rounded-full blur-3xl animate-pulse"
                    style="animation-delay: 1s"
                />
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="text-center">
                    <p class="text-gray-400 text-lg mb-2 animate-fade-in-up">
                        {hero.greeting.clone()}
                    </p>
                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-white mb-4 animate-fade-in-up stagger-1">
                        {hero.name.clone()}
                    </h1>
                    <h2 class="text-3xl md:text-5xl lg:text-6xl font-bold text-blue-500 mb-8 animate-fade-in-up stagger-2">
                        {hero.role.clone()}
                    </h2>

                    <div class="flex justify-center gap-4 mb-10 animate-fade-in-up stagger-3">
                        <SocialLinks large=false />
                    </div>

                    <div class="flex flex-col sm:flex-row justify-center gap-4 mb-16 animate-fade-in-up stagger-4">
                        <a
                            href=Section::Contact.href()
                            class="bg-blue-500 hover:bg-blue-600 text-white px-8 py-4 text-lg rounded-full font-medium transition-colors"
                        >
                            "Contact Me"
                        </a>
                        <DownloadCvButton classes="border-2 border-gray-600 text-white hover:border-blue-500 hover:text-blue-500 px-8 py-4 text-lg rounded-full bg-transparent" />
                    </div>

                    <div class="flex flex-wrap justify-center gap-8 md:gap-16 animate-fade-in-up stagger-5">
                        {hero
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center">
                                        <p class="text-3xl md:text-4xl font-bold text-blue-500">
                                            {stat.value.clone()}
                                        </p>
                                        <p class="text-gray-400 text-sm mt-1">{stat.label.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let about = &site().about;

    view! {
        <section id=Section::About.anchor() class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="flex justify-center">
                        <div class="relative">
                            <div class="absolute inset-0 bg-blue-500 rounded-full blur-3xl opacity-30 scale-110" />
                            <div class="relative w-72 h-72 md:w-96 md:h-96 rounded-full bg-gradient-to-br from-blue-400 to-blue-600 p-1">
                                <div class="w-full h-full rounded-full overflow-hidden bg-gray-900">
                                    <img
                                        src=about.image.clone()
                                        alt=about.image_alt.clone()
                                        class="w-full h-full object-cover"
                                    />
                                </div>
                            </div>
                        </div>
                    </div>

                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold text-white mb-6">
                            "About " <span class="text-blue-500">"Me"</span>
                        </h2>
                        {about
                            .paragraphs
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-gray-400 text-lg leading-relaxed mb-6">
                                        {p.clone()}
                                    </p>
                                }
                            })
                            .collect_view()}

                        <div class="grid grid-cols-2 gap-4 mb-8">
                            {about
                                .facts
                                .iter()
                                .map(|fact| {
                                    view! {
                                        <div>
                                            <p class="text-gray-500 text-sm">{fact.label.clone()}</p>
                                            <p class="text-white font-medium">{fact.value.clone()}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <DownloadCvButton classes="bg-blue-500 hover:bg-blue-600 text-white px-8 py-2 rounded-md" />
                    </div>
                </div>
            </div>
        </section>
    }
}
