//! Scroll-derived UI state.
//!
//! [`ScrollTracker`] turns raw window scroll samples into the two booleans the
//! page shell renders from: whether the fixed header is shown and whether the
//! floating "back to top" button is shown. It holds no browser types so the
//! rules can be exercised without a DOM.

/// Tunables for [`ScrollTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Movement (in px) that must be exceeded before the header reacts.
    /// Zero reacts to every pixel.
    pub header_deadband: f64,
    /// Fraction of the viewport height past which the top button appears.
    pub scroll_top_fraction: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_deadband: 0.0,
            scroll_top_fraction: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub header_visible: bool,
    pub scroll_top_visible: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: ScrollConfig,
    last_offset: f64,
    header_visible: bool,
    scroll_top_visible: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            last_offset: 0.0,
            header_visible: true,
            scroll_top_visible: false,
        }
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_top_visible
    }

    /// Feeds one scroll sample and returns the recomputed state.
    ///
    /// `offset` is the window's vertical scroll position and
    /// `viewport_height` its inner height, both in CSS pixels. Negative
    /// offsets (overscroll bounce) count as 0.
    pub fn sample(&mut self, offset: f64, viewport_height: f64) -> ScrollUpdate {
        let offset = offset.max(0.0);
        let delta = offset - self.last_offset;
        let deadband = self.config.header_deadband;

        // inside the band the reference offset stays put so slow drift still
        // accumulates into a real direction change
        if !(deadband > 0.0 && delta.abs() <= deadband) {
            self.header_visible = delta <= 0.0;
            self.last_offset = offset;
        }

        self.scroll_top_visible = offset > viewport_height * self.config.scroll_top_fraction;

        ScrollUpdate {
            header_visible: self.header_visible,
            scroll_top_visible: self.scroll_top_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn header_sequence(tracker: &mut ScrollTracker, samples: &[f64]) -> Vec<bool> {
        let mut out = vec![tracker.header_visible()];
        for s in samples {
            out.push(tracker.sample(*s, VIEWPORT).header_visible);
        }
        out
    }

    #[test]
    fn test_initial_state() {
        let tracker = ScrollTracker::default();
        assert!(tracker.header_visible());
        assert!(!tracker.scroll_top_visible());
    }

    #[test]
    fn test_header_follows_direction() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(
            header_sequence(&mut tracker, &[50.0, 30.0]),
            vec![true, false, true]
        );
    }

    #[test]
    fn test_header_single_pixel_moves() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(
            header_sequence(&mut tracker, &[100.0, 101.0, 100.0, 100.0, 101.0]),
            vec![true, false, false, true, true, false]
        );
    }

    #[test]
    fn test_stationary_sample_shows_header() {
        let mut tracker = ScrollTracker::default();
        tracker.sample(200.0, VIEWPORT);
        assert!(!tracker.header_visible());
        assert!(tracker.sample(200.0, VIEWPORT).header_visible);
    }

    #[test]
    fn test_scroll_top_threshold() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.sample(0.0, VIEWPORT).scroll_top_visible);
        // exactly half the viewport is not past the threshold
        assert!(!tracker.sample(400.0, VIEWPORT).scroll_top_visible);
        assert!(tracker.sample(400.5, VIEWPORT).scroll_top_visible);
        assert!(tracker.sample(3000.0, VIEWPORT).scroll_top_visible);
        // no hysteresis on the way back
        assert!(!tracker.sample(399.0, VIEWPORT).scroll_top_visible);
    }

    #[test]
    fn test_scroll_top_uses_current_viewport() {
        let mut tracker = ScrollTracker::default();
        assert!(tracker.sample(500.0, 800.0).scroll_top_visible);
        assert!(!tracker.sample(500.0, 1200.0).scroll_top_visible);
    }

    #[test]
    fn test_negative_offset_clamped() {
        let mut tracker = ScrollTracker::default();
        let update = tracker.sample(-40.0, VIEWPORT);
        assert!(update.header_visible);
        assert!(!update.scroll_top_visible);
        // coming back from the bounce to 0 is not a downward scroll
        assert!(tracker.sample(0.0, VIEWPORT).header_visible);
    }

    #[test]
    fn test_deadband_ignores_jitter() {
        let mut tracker = ScrollTracker::new(ScrollConfig {
            header_deadband: 5.0,
            ..ScrollConfig::default()
        });
        tracker.sample(100.0, VIEWPORT);
        assert!(!tracker.header_visible());

        // trackpad jitter around 100 leaves the header hidden
        for s in [98.0, 103.0, 96.0, 101.0] {
            assert!(!tracker.sample(s, VIEWPORT).header_visible);
        }

        // a real upward move reveals it
        assert!(tracker.sample(90.0, VIEWPORT).header_visible);
    }

    #[test]
    fn test_deadband_accumulates_slow_drift() {
        let mut tracker = ScrollTracker::new(ScrollConfig {
            header_deadband: 5.0,
            ..ScrollConfig::default()
        });
        tracker.sample(100.0, VIEWPORT);
        tracker.sample(97.0, VIEWPORT);
        assert!(!tracker.header_visible());
        tracker.sample(94.0, VIEWPORT);
        assert!(tracker.header_visible());
    }

    #[test]
    fn test_deadband_does_not_delay_scroll_top() {
        let mut tracker = ScrollTracker::new(ScrollConfig {
            header_deadband: 50.0,
            ..ScrollConfig::default()
        });
        tracker.sample(390.0, VIEWPORT);
        assert!(tracker.sample(410.0, VIEWPORT).scroll_top_visible);
    }
}
