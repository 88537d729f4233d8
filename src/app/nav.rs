use leptos::prelude::*;

use crate::content::{site, Icon};
use crate::state::{MenuState, Section, NAV_LINKS};

use super::hooks::use_nav_appearance;
use super::icon::Glyph;

#[component]
pub fn Wordmark() -> impl IntoView {
    let brand = &site().brand;
    view! {
        <span class="text-blue-500">{brand.accent.clone()}</span>
        <span class="text-white">{brand.plain.clone()}</span>
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let appearance = use_nav_appearance();
    let (menu, set_menu) = signal(MenuState::default());

    let toggle_menu = move |_| set_menu.update(|m| *m = m.toggled());
    let close_menu = move |_| set_menu.update(|m| *m = m.after_link_selected());

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                appearance.get().class(),
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href=Section::Home.href() class="text-2xl font-bold tracking-wider">
                        <Wordmark />
                    </a>

                    <div class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href()
                                        class="text-gray-300 hover:text-blue-500 transition-colors text-sm font-medium"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <a
                        href=Section::Contact.href()
                        class="hidden md:block bg-blue-500 hover:bg-blue-600 text-white text-sm font-medium px-6 py-2 rounded-md transition-colors"
                    >
                        "Contact Me"
                    </a>

                    <button
                        class="md:hidden text-white"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=toggle_menu
                    >
                        {move || {
                            let icon = if menu.get().is_open() { Icon::X } else { Icon::Menu };
                            view! { <Glyph icon classes="text-2xl" /> }
                        }}
                    </button>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div class="md:hidden bg-black/95 backdrop-blur-md border-t border-gray-800">
                        <div class="px-4 py-4 space-y-3">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href()
                                            class="block text-gray-300 hover:text-blue-500 transition-colors py-2"
                                            on:click=close_menu
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=Section::Contact.href()
                                class="block w-full text-center bg-blue-500 hover:bg-blue-600 text-white font-medium py-2 mt-4 rounded-md transition-colors"
                                on:click=close_menu
                            >
                                "Contact Me"
                            </a>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
