//! One-shot reveal latch fed by viewport visibility reports.

use serde::Deserialize;

/// A visibility notification for one observed element.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityReport {
    /// Fraction of the element inside the (margin-adjusted) viewport.
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Fires once, the first time an element is visible enough. No reset path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    fired: bool,
}

impl RevealLatch {
    /// `threshold` is the minimum visible fraction, clamped to `0.0..=1.0`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feeds one report; returns `true` only on the report that fires the latch.
    pub fn observe(&mut self, report: VisibilityReport) -> bool {
        if self.fired || !report.is_intersecting || report.ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(ratio: f64) -> VisibilityReport {
        VisibilityReport {
            ratio,
            is_intersecting: true,
        }
    }

    #[test]
    fn test_fires_at_threshold() {
        let mut latch = RevealLatch::new(0.1);
        assert!(!latch.observe(visible(0.05)));
        assert!(!latch.has_fired());
        assert!(latch.observe(visible(0.1)));
        assert!(latch.has_fired());
    }

    #[test]
    fn test_fires_only_once() {
        let mut latch = RevealLatch::new(0.1);
        assert!(latch.observe(visible(0.5)));
        assert!(!latch.observe(visible(0.9)));
        assert!(!latch.observe(VisibilityReport {
            ratio: 0.0,
            is_intersecting: false,
        }));
        assert!(!latch.observe(visible(1.0)));
        assert!(latch.has_fired());
    }

    #[test]
    fn test_ignores_non_intersecting_reports() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(VisibilityReport {
            ratio: 0.0,
            is_intersecting: false,
        }));
        assert!(latch.observe(visible(0.0)));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealLatch::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealLatch::new(3.0).threshold(), 1.0);
    }

    #[test]
    fn test_report_parses_from_observer_payload() {
        let report: VisibilityReport =
            serde_json::from_str(r#"{"ratio":0.25,"isIntersecting":true}"#).unwrap();
        assert_eq!(report, visible(0.25));
    }
}
