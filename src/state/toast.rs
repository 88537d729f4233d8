use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Utc};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);
pub const DEFAULT_VISIBLE_TOASTS: usize = 3;

pub const CV_NOTICE_TITLE: &str = "CV download coming soon!";
pub const CV_NOTICE_BODY: &str = "Please contact me via email for my CV.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn accent_class(self) -> &'static str {
        match self {
            Self::Info => "text-blue-500",
            Self::Success => "text-green-500",
            Self::Warning => "text-yellow-500",
            Self::Error => "text-red-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub duration: Duration,
}

impl Toast {
    pub fn is_elapsed(&self, now: DateTime<Utc>) -> bool {
        // a clock that went backwards yields a negative delta, which is never elapsed
        now.signed_duration_since(self.created_at)
            .to_std()
            .map(|elapsed| elapsed >= self.duration)
            .unwrap_or(false)
    }
}

/// Bounded list of visible notifications, oldest at the front.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    capacity: usize,
    next_id: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_TOASTS)
    }
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            toasts: VecDeque::new(),
            capacity,
            next_id: 0,
        }
    }

    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        body: Option<String>,
        now: DateTime<Utc>,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            kind,
            title: title.into(),
            body,
            created_at: now,
            duration: DEFAULT_TOAST_DURATION,
        });
        while self.toasts.len() > self.capacity {
            self.toasts.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose display time has run out, returning how many went.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_elapsed(now));
        before - self.toasts.len()
    }

    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_cv_notice_every_time() {
        let mut queue = ToastQueue::new(10);
        let notice = |q: &mut ToastQueue, now: DateTime<Utc>| {
            q.push(ToastKind::Info, CV_NOTICE_TITLE, Some(CV_NOTICE_BODY.into()), now)
        };
        let first = notice(&mut queue, at(0));
        let second = notice(&mut queue, at(1));
        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);
        for toast in queue.iter_newest_first() {
            assert_eq!(toast.kind, ToastKind::Info);
            assert_eq!(toast.title, "CV download coming soon!");
            assert_eq!(
                toast.body.as_deref(),
                Some("Please contact me via email for my CV.")
            );
        }
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut queue = ToastQueue::default();
        assert_eq!(queue.capacity(), 3);
        let ids = (0..5)
            .map(|i| queue.push(ToastKind::Info, format!("toast {i}"), None, at(i)))
            .collect::<Vec<_>>();
        assert_eq!(queue.len(), 3);
        let shown = queue.iter_newest_first().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(shown, vec![ids[4], ids[3], ids[2]]);
    }

    #[test]
    fn test_zero_capacity_still_shows_one() {
        let mut queue = ToastQueue::new(0);
        queue.push(ToastKind::Warning, "a", None, at(0));
        queue.push(ToastKind::Warning, "b", None, at(0));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter_newest_first().next().map(|t| t.title.as_str()), Some("b"));
    }

    #[test]
    fn test_unbounded_capacity_does_not_preallocate() {
        let mut queue = ToastQueue::new(usize::MAX);
        assert_eq!(queue.capacity(), usize::MAX);
        queue.push(ToastKind::Info, "only", None, at(0));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "a", None, at(0));
        let b = queue.push(ToastKind::Error, "b", None, at(0));
        assert!(queue.dismiss(a));
        // second dismiss of the same toast is a no-op
        assert!(!queue.dismiss(a));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter_newest_first().next().map(|t| t.id), Some(b));
    }

    #[test]
    fn test_expire() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Info, "early", None, at(0));
        queue.push(ToastKind::Info, "late", None, at(2_000));

        assert_eq!(queue.expire(at(3_999)), 0);
        assert_eq!(queue.expire(at(4_000)), 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.expire(at(5_999)), 0);
        assert_eq!(queue.expire(at(6_000)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_expire_with_clock_skew() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Info, "future", None, at(10_000));
        assert_eq!(queue.expire(at(0)), 0);
        assert_eq!(queue.len(), 1);
    }
}
