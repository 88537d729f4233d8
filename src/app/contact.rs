use leptos::prelude::*;

use crate::content::{site, Icon};
use crate::state::Section;

use super::icon::Glyph;
use super::nav::Wordmark;
use super::showcase::SectionTitle;

#[component]
pub fn SocialLinks(large: bool) -> impl IntoView {
    let (size, glyph) = if large {
        ("w-14 h-14", "text-2xl text-white")
    } else {
        ("w-12 h-12", "text-xl text-white")
    };

    site()
        .socials
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=social.label.clone()
                    class=format!(
                        "{size} rounded-full bg-gray-800 flex items-center justify-center hover:bg-blue-500 transition-all duration-300 hover:scale-110",
                    )
                >
                    <Glyph icon=social.icon classes=glyph />
                </a>
            }
        })
        .collect_view()
}

#[component]
fn ContactCard(icon: Icon, title: &'static str, value: String, href: Option<String>) -> impl IntoView {
    let body = view! {
        <div class="w-14 h-14 rounded-full bg-blue-500/10 flex items-center justify-center mx-auto mb-4 group-hover:bg-blue-500/20 transition-colors">
            <Glyph icon classes="text-2xl text-blue-500" />
        </div>
        <h3 class="text-white font-semibold mb-2">{title}</h3>
        <p class="text-gray-400">{value}</p>
    };
    let class = "bg-gray-800/50 border border-gray-700 rounded-2xl p-6 text-center hover:border-blue-500/50 transition-all group";

    match href {
        Some(href) => view! { <a href=href class=class>{body}</a> }.into_any(),
        None => view! { <div class=class>{body}</div> }.into_any(),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = &site().contact;

    view! {
        <section id=Section::Contact.anchor() class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle heading=&contact.heading />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <ContactCard
                        icon=Icon::Mail
                        title="Email"
                        value=contact.email.clone()
                        href=Some(contact.mailto())
                    />
                    <ContactCard
                        icon=Icon::Phone
                        title="Phone"
                        value=contact.phone.clone()
                        href=Some(contact.tel())
                    />
                    <ContactCard
                        icon=Icon::MapPin
                        title="Location"
                        value=contact.location.clone()
                        href=None
                    />
                </div>

                <div class="mt-12 text-center">
                    <p class="text-gray-400 mb-6">{contact.social_prompt.clone()}</p>
                    <div class="flex justify-center gap-4">
                        <SocialLinks large=true />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let footer = &site().footer;

    view! {
        <footer class="py-8 border-t border-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center gap-4">
                    <div class="text-2xl font-bold">
                        <Wordmark />
                    </div>
                    <p class="text-gray-500 text-sm">{footer.copyright.clone()}</p>
                    <div class="flex gap-6">
                        {footer
                            .links()
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href()
                                        class="text-gray-400 hover:text-blue-500 transition-colors text-sm"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
