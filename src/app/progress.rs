use leptos::{html, prelude::*};

use crate::content::Icon;
use crate::state::{Percent, RingGeometry, RING_TRANSITION, VISIBILITY_THRESHOLD};

use super::hooks::use_reveal;
use super::icon::Glyph;

/// Circular skill indicator that fills up once, the first time it scrolls into view.
#[component]
pub fn ProgressRing(percent: Percent, #[prop(into)] label: String, icon: Icon) -> impl IntoView {
    let geometry = RingGeometry::DEFAULT;
    let target = NodeRef::<html::Div>::new();
    let reveal = use_reveal(target, VISIBILITY_THRESHOLD);

    let center = geometry.center().to_string();
    let radius = geometry.radius.to_string();
    let stroke_width = geometry.stroke_width.to_string();
    let dash_offset = move || geometry.dash_offset(percent, reveal.get()).to_string();

    view! {
        <div node_ref=target class="flex flex-col items-center gap-3">
            <div class="relative w-32 h-32">
                <svg
                    class="w-full h-full -rotate-90"
                    viewBox=format!("0 0 {0} {0}", geometry.view_box)
                >
                    <circle
                        cx=center.clone()
                        cy=center.clone()
                        r=radius.clone()
                        fill="none"
                        stroke="#2a2a2a"
                        stroke-width=stroke_width.clone()
                    />
                    <circle
                        cx=center.clone()
                        cy=center
                        r=radius
                        fill="none"
                        stroke="#3b82f6"
                        stroke-width=stroke_width
                        stroke-linecap="round"
                        stroke-dasharray=geometry.circumference().to_string()
                        stroke-dashoffset=dash_offset
                        style:transition=RING_TRANSITION
                    />
                </svg>
                <div class="absolute inset-0 flex items-center justify-center">
                    <Glyph icon classes="text-3xl text-gray-400" />
                </div>
            </div>
            <span class="text-blue-500 font-bold text-xl">{percent.to_string()}</span>
            <span class="text-gray-400 text-sm">{label}</span>
        </div>
    }
}
