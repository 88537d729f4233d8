use leptos::prelude::*;

use crate::content::Icon;

#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] classes: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {classes}", icon.class()) aria-hidden="true"></i> }
}
