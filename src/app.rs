mod contact;
mod homepage;
mod hooks;
mod icon;
mod nav;
mod progress;
mod showcase;
pub mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::site;

use contact::Footer;
use homepage::HomePage;
use nav::Navigation;
use toaster::Toaster;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css"
                />
                <MetaTags />
            </head>
            <body class="bg-black text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let owner = site().hero.name.clone();
    let description = site().about.paragraphs.first().cloned().unwrap_or_default();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Meta name="description" content=description />

        <Router>
            <Toaster>
                <div class="min-h-screen bg-black text-white">
                    <Navigation />
                    <main>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </Toaster>
        </Router>
    }
}
