/// Vertical offset past which the navigation bar turns solid.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavAppearance {
    #[default]
    Transparent,
    Solid,
}

impl NavAppearance {
    /// Derive the appearance from the window's vertical scroll offset.
    ///
    /// Strictly greater than the threshold is solid, there is no hysteresis.
    pub fn from_offset(y: f64) -> Self {
        if y.is_finite() && y > SCROLL_THRESHOLD_PX {
            Self::Solid
        } else {
            Self::Transparent
        }
    }

    pub fn is_solid(self) -> bool {
        matches!(self, Self::Solid)
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Solid => "bg-black/90 backdrop-blur-md shadow-lg",
            Self::Transparent => "bg-transparent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(NavAppearance::from_offset(0.0), NavAppearance::Transparent);
        assert_eq!(NavAppearance::from_offset(49.9), NavAppearance::Transparent);
        // exactly at the threshold is still transparent
        assert_eq!(NavAppearance::from_offset(50.0), NavAppearance::Transparent);
        assert_eq!(NavAppearance::from_offset(50.5), NavAppearance::Solid);
        assert_eq!(NavAppearance::from_offset(4000.0), NavAppearance::Solid);
    }

    #[test]
    fn test_repeated_transitions() {
        let offsets = [0.0, 120.0, 10.0, 51.0, 50.0, 300.0, 0.0];
        let expected = [false, true, false, true, false, true, false];
        for (y, solid) in offsets.iter().zip(expected) {
            assert_eq!(NavAppearance::from_offset(*y).is_solid(), solid, "offset {y}");
        }
    }

    #[test]
    fn test_same_side_is_idempotent() {
        // scroll events that stay below the threshold never change the appearance
        let below = [0.0, 3.0, 25.0, 49.0, 50.0];
        assert!(below
            .iter()
            .all(|y| NavAppearance::from_offset(*y) == NavAppearance::default()));

        let above = [51.0, 80.0, 1200.0];
        assert!(above
            .iter()
            .all(|y| NavAppearance::from_offset(*y) == NavAppearance::Solid));
    }

    #[test]
    fn test_odd_offsets() {
        // elastic overscroll on some browsers reports negative offsets
        assert_eq!(NavAppearance::from_offset(-30.0), NavAppearance::Transparent);
        assert_eq!(NavAppearance::from_offset(f64::NAN), NavAppearance::Transparent);
    }

    #[test]
    fn test_classes_differ() {
        assert_eq!(NavAppearance::Transparent.class(), "bg-transparent");
        assert!(NavAppearance::Solid.class().contains("backdrop-blur-md"));
    }
}
