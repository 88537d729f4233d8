use std::time::Duration;

use chrono::Utc;
use leptos::prelude::*;

use crate::content::Icon;
use crate::state::{
    Toast, ToastId, ToastKind, ToastQueue, CV_NOTICE_BODY, CV_NOTICE_TITLE,
    DEFAULT_TOAST_DURATION,
};

use super::icon::Glyph;

// timers can fire a hair early relative to the wall clock
const EXPIRY_SLACK: Duration = Duration::from_millis(50);

/// Handle to the page's notification queue, provided by [`Toaster`].
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub fn enqueue(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        body: Option<String>,
    ) -> Option<ToastId> {
        let title = title.into();
        let id = self
            .queue
            .try_update(move |q| q.push(kind, title, body, Utc::now()))?;
        log::debug!("toast {id:?} enqueued");

        let queue = self.queue;
        set_timeout(
            move || {
                queue.try_update(|q| q.expire(Utc::now()));
            },
            DEFAULT_TOAST_DURATION + EXPIRY_SLACK,
        );
        Some(id)
    }

    /// The placeholder shown by every "Download CV" button.
    pub fn cv_download(&self) -> Option<ToastId> {
        self.enqueue(
            ToastKind::Info,
            CV_NOTICE_TITLE,
            Some(CV_NOTICE_BODY.to_string()),
        )
    }

    pub fn dismiss(&self, id: ToastId) {
        if self.queue.try_update(|q| q.dismiss(id)).unwrap_or(false) {
            log::debug!("toast {id:?} dismissed");
        }
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Owns the notification queue for everything rendered inside it and shows the
/// visible toasts pinned to the top centre of the screen, newest on top.
#[component]
pub fn Toaster(children: Children) -> impl IntoView {
    let toasts = Toasts {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(toasts);

    view! {
        {children()}
        <ol
            class="fixed top-4 left-1/2 -translate-x-1/2 z-[100] flex flex-col gap-2 w-[356px] max-w-[calc(100vw-2rem)]"
            aria-live="polite"
        >
            <For
                each=move || {
                    toasts.queue.with(|q| q.iter_newest_first().cloned().collect::<Vec<_>>())
                }
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast toasts /> }
            />
        </ol>
    }
}

#[component]
fn ToastCard(toast: Toast, toasts: Toasts) -> impl IntoView {
    let Toast {
        id,
        kind,
        title,
        body,
        ..
    } = toast;

    view! {
        <li
            role="status"
            class="animate-fade-in-up flex items-start gap-3 rounded-lg p-4 shadow-lg text-sm"
            style="background: #1a1a1a; color: #fff; border: 1px solid #333;"
        >
            <div class="flex-1">
                <p class=format!("font-semibold {}", kind.accent_class())>{title}</p>
                {body.map(|body| view! { <p class="mt-1 text-gray-400">{body}</p> })}
            </div>
            <button
                class="text-gray-500 hover:text-white transition-colors"
                aria-label="Close notification"
                on:click=move |_| toasts.dismiss(id)
            >
                <Glyph icon=Icon::X classes="text-sm" />
            </button>
        </li>
    }
}
