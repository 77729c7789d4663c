/// Scroll position of a container, in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top
    pub offset: f64,
    /// Full scrollable height of the content
    pub extent: f64,
    /// Visible height of the container
    pub viewport: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, extent: f64, viewport: f64) -> Self {
        Self { offset, extent, viewport }
    }

    /// Metrics of one scrolling element: its `scrollHeight` against its
    /// `clientHeight`, which leaves out a horizontal scrollbar.
    pub fn of_element(offset: f64, scroll_height: i32, client_height: i32) -> Self {
        Self::new(offset, scroll_height as f64, client_height as f64)
    }

    /// `offset / (extent - viewport)` clamped to [0, 1].
    /// Content that does not overflow reads as 0.
    pub fn progress(&self) -> f64 {
        let range = self.extent - self.viewport;
        if !(range > 0.0) || !self.offset.is_finite() || !range.is_finite() {
            return 0.0;
        }
        (self.offset / range).clamp(0.0, 1.0)
    }
}

/// Last seen metrics of the observed container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgressState {
    metrics: ScrollMetrics,
}

impl ScrollProgressState {
    pub fn update(&mut self, metrics: ScrollMetrics) -> f64 {
        self.metrics = metrics;
        self.current_progress()
    }

    pub fn current_progress(&self) -> f64 {
        self.metrics.progress()
    }

    pub fn reset(&mut self) {
        self.metrics = ScrollMetrics::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_and_bottom_are_exact() {
        assert_eq!(ScrollMetrics::new(0.0, 5000.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(4200.0, 5000.0, 800.0).progress(), 1.0);
    }

    #[test]
    fn test_monotonic_in_offset() {
        let mut previous = 0.0;
        for offset in (0..=4200).step_by(7) {
            let progress = ScrollMetrics::new(offset as f64, 5000.0, 800.0).progress();
            assert!(progress >= previous);
            assert!((0.0..=1.0).contains(&progress));
            previous = progress;
        }
    }

    #[test]
    fn test_full_only_at_real_bottom_with_scrollbar() {
        // 800 px window with a 15 px horizontal scrollbar: max scrollY is 1215
        assert!(ScrollMetrics::of_element(1200.0, 2000, 785).progress() < 1.0);
        assert_eq!(ScrollMetrics::of_element(1215.0, 2000, 785).progress(), 1.0);
    }

    #[test]
    fn test_no_overflow_is_zero() {
        assert_eq!(ScrollMetrics::new(0.0, 600.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(10.0, 800.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::default().progress(), 0.0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        // rubber-band scrolling reports offsets past either end
        assert_eq!(ScrollMetrics::new(-40.0, 5000.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(4300.0, 5000.0, 800.0).progress(), 1.0);
        assert_eq!(ScrollMetrics::new(f64::NAN, 5000.0, 800.0).progress(), 0.0);
    }

    #[test]
    fn test_state_tracks_latest_metrics() {
        let mut state = ScrollProgressState::default();
        assert_eq!(state.current_progress(), 0.0);
        assert_eq!(state.update(ScrollMetrics::new(2100.0, 5000.0, 800.0)), 0.5);
        assert_eq!(state.current_progress(), 0.5);
        state.reset();
        assert_eq!(state.current_progress(), 0.0);
    }
}
