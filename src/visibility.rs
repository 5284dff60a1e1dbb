/// Fraction of an element that has to be on screen before it counts as seen.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

// IntersectionObserver reports ratios like 0.0999 for a 0.1 threshold crossing
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-shot "has been seen" flag.
///
/// Starts hidden and flips to visible the first time an observation meets the
/// threshold. It never goes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records one intersection observation. Returns true only for the
    /// observation that latched the flag.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        if ratio + RATIO_TOLERANCE >= self.threshold {
            self.visible = true;
            return true;
        }
        false
    }

    /// Latches without an observation, for runtimes that can't observe.
    pub fn open(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Picks how to start watching. Returns true when an observer should be
    /// created; without observer support the latch opens right away instead.
    pub fn start(&mut self, observer_supported: bool) -> bool {
        if !observer_supported {
            self.open();
            return false;
        }
        !self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let latch = VisibilityLatch::default();
        assert!(!latch.is_visible());
        assert_eq!(latch.threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.observe(true, 0.05));
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_latches_at_threshold() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.observe(true, 0.1));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_latches_on_rounded_ratio() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.observe(true, 0.0999));
    }

    #[test]
    fn test_not_intersecting_never_latches() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.observe(false, 0.5));
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_never_reverts() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.observe(true, 0.4));
        // scrolled fully out of view, then back in
        assert!(!latch.observe(false, 0.0));
        assert!(latch.is_visible());
        assert!(!latch.observe(true, 1.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_open_fails_visible() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.open());
        assert!(latch.is_visible());
        assert!(!latch.open());
        assert!(!latch.observe(true, 1.0));
    }

    #[test]
    fn test_start_with_observer_waits() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.start(true));
        assert!(!latch.is_visible());
        assert!(latch.observe(true, 0.2));
    }

    #[test]
    fn test_start_without_observer_shows_content() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.start(false));
        assert!(latch.is_visible());
        // nothing left to latch
        assert!(!latch.open());
        assert!(!latch.observe(true, 1.0));
    }

    #[test]
    fn test_start_after_latch_skips_observer() {
        let mut latch = VisibilityLatch::default();
        latch.open();
        assert!(!latch.start(true));
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(VisibilityLatch::new(3.0).threshold(), 1.0);
        assert_eq!(VisibilityLatch::new(-1.0).threshold(), 0.0);
    }
}
