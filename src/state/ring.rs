use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::reveal::Reveal;

/// CSS transition applied to the indicator's dash offset.
pub const RING_TRANSITION: &str = "stroke-dashoffset 1.5s ease-out";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("percentage {0} is out of range (0-100)")]
    OutOfRange(u8),
}

/// Whole-number percentage, inclusive 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub fn new(value: u8) -> Result<Self, RingError> {
        if value > 100 {
            return Err(RingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<u8> for Percent {
    type Error = RingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// SVG geometry of a progress ring, in view box units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub stroke_width: f64,
    pub view_box: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RingGeometry {
    pub const DEFAULT: Self = Self {
        radius: 50.0,
        stroke_width: 8.0,
        view_box: 120.0,
    };

    pub fn center(&self) -> f64 {
        self.view_box / 2.0
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn arc_length(&self, percent: Percent) -> f64 {
        self.circumference() * percent.fraction()
    }

    /// Dash offset for the indicator circle: the whole circumference hides the
    /// arc until the ring is revealed, then only the complement stays hidden.
    pub fn dash_offset(&self, percent: Percent, reveal: Reveal) -> f64 {
        match reveal {
            Reveal::Pending => self.circumference(),
            Reveal::Revealed => self.circumference() - self.arc_length(percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_percent_bounds() {
        assert_eq!(Percent::new(0).map(Percent::get), Ok(0));
        assert_eq!(Percent::new(100).map(Percent::get), Ok(100));
        assert_eq!(Percent::new(101), Err(RingError::OutOfRange(101)));
        assert_eq!(Percent::new(255), Err(RingError::OutOfRange(255)));
        assert_eq!(Percent::new(95).unwrap().to_string(), "95%");
    }

    #[test]
    fn test_percent_from_json() {
        let p: Percent = serde_json::from_str("80").unwrap();
        assert_eq!(p.get(), 80);
        assert!(serde_json::from_str::<Percent>("120").is_err());
        assert!(serde_json::from_str::<Percent>("-1").is_err());
        assert_eq!(serde_json::to_string(&p).unwrap(), "80");
    }

    #[test]
    fn test_geometry() {
        let g = RingGeometry::default();
        assert_eq!(g.center(), 60.0);
        assert!((g.circumference() - 100.0 * PI).abs() < EPS);
    }

    #[test]
    fn test_arc_only_after_reveal() {
        let g = RingGeometry::DEFAULT;
        let p = Percent::new(95).unwrap();
        let full = g.circumference();

        assert!((g.arc_length(p) - 0.95 * full).abs() < EPS);
        // before reveal the whole arc is hidden
        assert!((g.dash_offset(p, Reveal::Pending) - full).abs() < EPS);
        // after reveal only the unfilled 5% stays hidden
        assert!((g.dash_offset(p, Reveal::Revealed) - 0.05 * full).abs() < 1e-6);
    }

    #[test]
    fn test_extremes() {
        let g = RingGeometry::DEFAULT;
        let zero = Percent::new(0).unwrap();
        let full = Percent::new(100).unwrap();
        assert!((g.dash_offset(zero, Reveal::Revealed) - g.circumference()).abs() < EPS);
        assert!(g.dash_offset(full, Reveal::Revealed).abs() < EPS);
    }
}
