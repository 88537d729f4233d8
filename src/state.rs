//! Framework-free UI state for the page.
//!
//! Every piece of behaviour the page has (nav bar appearance, one-shot reveal,
//! ring geometry, mobile menu, toasts) is modelled here as plain data so the
//! Leptos components in `app` only wire signals to it.

pub mod menu;
pub mod reveal;
pub mod ring;
pub mod scroll;
pub mod toast;

pub use menu::{MenuState, NavLink, Section, NAV_LINKS};
pub use reveal::{Reveal, VISIBILITY_THRESHOLD};
pub use ring::{Percent, RingError, RingGeometry, RING_TRANSITION};
pub use scroll::{NavAppearance, SCROLL_THRESHOLD_PX};
pub use toast::{
    Toast, ToastId, ToastKind, ToastQueue, CV_NOTICE_BODY, CV_NOTICE_TITLE, DEFAULT_TOAST_DURATION,
    DEFAULT_VISIBLE_TOASTS,
};
