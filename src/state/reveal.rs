/// Fraction of an element's area that must be in the viewport to reveal it.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

// observers report single-precision ratios, so a crossing can land just under the threshold
const RATIO_TOLERANCE: f64 = 1e-6;

/// One-shot visibility flag. Moves from `Pending` to `Revealed` once and
/// never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Pending,
    Revealed,
}

impl Reveal {
    /// Fold one intersection observation into the state.
    pub fn observe(self, ratio: f64, threshold: f64) -> Self {
        match self {
            Self::Revealed => Self::Revealed,
            Self::Pending if ratio + RATIO_TOLERANCE >= threshold => Self::Revealed,
            Self::Pending => Self::Pending,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_at_threshold() {
        let state = Reveal::default();
        assert!(!state.is_revealed());
        assert_eq!(state.observe(0.1, VISIBILITY_THRESHOLD), Reveal::Pending);
        assert_eq!(state.observe(0.29, VISIBILITY_THRESHOLD), Reveal::Pending);
        assert_eq!(state.observe(0.3, VISIBILITY_THRESHOLD), Reveal::Revealed);
        assert_eq!(state.observe(1.0, VISIBILITY_THRESHOLD), Reveal::Revealed);
    }

    #[test]
    fn test_reveals_on_rounded_crossing() {
        // 0.3 rounded through f32 reports slightly low
        let ratio = f64::from(0.3_f32) - 2e-7;
        assert!(ratio < VISIBILITY_THRESHOLD);
        assert_eq!(
            Reveal::Pending.observe(ratio, VISIBILITY_THRESHOLD),
            Reveal::Revealed
        );
        assert_eq!(
            Reveal::Pending.observe(0.2999, VISIBILITY_THRESHOLD),
            Reveal::Pending
        );
    }

    #[test]
    fn test_never_reverts() {
        let ratios = [0.0, 0.2, 0.45, 0.0, 0.1, 1.0, 0.0];
        let mut state = Reveal::Pending;
        let mut transitions = 0;
        for ratio in ratios {
            let next = state.observe(ratio, VISIBILITY_THRESHOLD);
            if next != state {
                transitions += 1;
            }
            state = next;
        }
        assert_eq!(transitions, 1);
        assert!(state.is_revealed());
    }

    #[test]
    fn test_stays_pending_when_never_visible() {
        let state = [0.0, 0.05, 0.29]
            .into_iter()
            .fold(Reveal::Pending, |s, r| s.observe(r, VISIBILITY_THRESHOLD));
        assert_eq!(state, Reveal::Pending);
    }
}
