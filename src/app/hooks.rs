use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::state::{NavAppearance, Reveal};

/// Tracks the window's vertical offset and maps it onto the nav bar appearance.
///
/// The scroll listener lives as long as the calling component. Going through a
/// `Memo` means offsets that stay on one side of the threshold don't notify.
pub fn use_nav_appearance() -> Memo<NavAppearance> {
    let (_, y) = use_window_scroll();
    Memo::new(move |_| NavAppearance::from_offset(y.get()))
}

/// One-shot visibility of `target`: flips to `Revealed` the first time at least
/// `threshold` of its area intersects the viewport, then stops observing.
pub fn use_reveal(target: NodeRef<html::Div>, threshold: f64) -> ReadSignal<Reveal> {
    let (reveal, set_reveal) = signal(Reveal::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let current = reveal.get_untracked();
            let next = entries
                .iter()
                .filter(|entry| entry.is_intersecting())
                .fold(current, |state, entry| {
                    state.observe(entry.intersection_ratio(), threshold)
                });
            if next != current {
                log::debug!("element revealed at {threshold} visibility");
                set_reveal.set(next);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        if reveal.get().is_revealed() {
            stop();
        }
    });

    reveal
}
