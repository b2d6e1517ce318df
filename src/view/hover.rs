use crate::chart::MetricSnapshot;

/// Which value a summary card is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    /// No explicit selection; the card tracks the latest snapshot.
    FollowingLatest,
    /// The user hovered a chart point; the card is pinned to it.
    ExplicitHover,
}

/// Per-metric holder for the value a summary card displays.
///
/// Two events drive it: a hover from the chart pins the displayed value,
/// and a data refresh (new snapshot after a fetch or a network switch)
/// updates the fallback. While no hover is pinned, a refresh resets the
/// displayed value to the new snapshot's current — once per refresh, since
/// the transition only fires when the event arrives. No timers, no
/// background work.
#[derive(Debug, Clone)]
pub struct HoverController {
    state: HoverState,
    hovered: f64,
    latest: f64,
}

impl HoverController {
    pub fn new() -> Self {
        Self {
            state: HoverState::FollowingLatest,
            hovered: 0.0,
            latest: 0.0,
        }
    }

    /// The user hovered a chart point. Any state -> `ExplicitHover`.
    pub fn hover(&mut self, value: f64) {
        self.state = HoverState::ExplicitHover;
        self.hovered = value;
    }

    /// The pointer left the chart; resume following the latest snapshot.
    pub fn clear_hover(&mut self) {
        self.state = HoverState::FollowingLatest;
    }

    /// A new snapshot arrived. Updates the fallback value; an explicit
    /// hover stays pinned until cleared.
    pub fn on_data_refresh(&mut self, snapshot: &MetricSnapshot) {
        self.latest = snapshot.current;
    }

    pub fn displayed(&self) -> f64 {
        match self.state {
            HoverState::ExplicitHover => self.hovered,
            HoverState::FollowingLatest => self.latest,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }
}

impl Default for HoverController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(current: f64) -> MetricSnapshot {
        MetricSnapshot {
            current,
            change_percent: 0.0,
            window_label: "24h",
        }
    }

    #[test]
    fn follows_latest_until_hovered() {
        let mut hover = HoverController::new();
        assert_eq!(hover.displayed(), 0.0);

        hover.on_data_refresh(&snapshot(100.0));
        assert_eq!(hover.state(), HoverState::FollowingLatest);
        assert_eq!(hover.displayed(), 100.0);
    }

    #[test]
    fn hover_pins_the_displayed_value_across_refreshes() {
        let mut hover = HoverController::new();
        hover.on_data_refresh(&snapshot(100.0));

        hover.hover(55.0);
        assert_eq!(hover.state(), HoverState::ExplicitHover);
        assert_eq!(hover.displayed(), 55.0);

        // A refresh while hovered must not clobber the pinned value
        hover.on_data_refresh(&snapshot(200.0));
        assert_eq!(hover.displayed(), 55.0);
    }

    #[test]
    fn clearing_the_hover_resumes_following_the_newest_snapshot() {
        let mut hover = HoverController::new();
        hover.on_data_refresh(&snapshot(100.0));
        hover.hover(55.0);
        hover.on_data_refresh(&snapshot(200.0));

        hover.clear_hover();
        assert_eq!(hover.state(), HoverState::FollowingLatest);
        assert_eq!(hover.displayed(), 200.0);
    }

    #[test]
    fn refresh_applies_the_new_current_exactly_once() {
        let mut hover = HoverController::new();
        hover.on_data_refresh(&snapshot(100.0));
        let after_refresh = hover.displayed();

        // No further events: repeated reads observe the same value, nothing
        // re-triggers.
        assert_eq!(hover.displayed(), after_refresh);
        assert_eq!(hover.displayed(), 100.0);
    }
}
