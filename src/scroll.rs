use std::time::Duration;

/// Space left between the navbar and a scrolled-to section
pub const SCROLL_MARGIN: f64 = 20.0;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(10);
/// Debounce applied to active-section tracking
pub const ACTIVE_NAV_DEBOUNCE: Duration = Duration::from_millis(50);

/// Where a smooth scroll to `#fragment` should land
pub fn smooth_scroll_target(target_top: f64, nav_height: f64) -> f64 {
    (target_top - nav_height - SCROLL_MARGIN).max(0.0)
}

/// Resolve an in-page link to a scroll position; `None` when nothing matches
pub fn scroll_target_for<'a, I>(href: &str, sections: I, nav_height: f64) -> Option<f64>
where
    I: IntoIterator<Item = &'a crate::navbar::SectionBox>,
{
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    sections
        .into_iter()
        .find(|section| section.id == id)
        .map(|section| smooth_scroll_target(section.top, nav_height))
}

/// Handle for one pending debounced call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// Trailing-edge debounce driven by an external timer.
///
/// Each `trigger` supersedes the previous one; the caller arms a timer for
/// `wait()` and calls `fire` when it elapses. Only the latest token fires.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    latest: u64,
    fired: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            latest: 0,
            fired: true,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn trigger(&mut self) -> DebounceToken {
        self.latest += 1;
        self.fired = false;
        DebounceToken(self.latest)
    }

    /// True exactly once, for the most recent token
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        if self.fired || token.0 != self.latest {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        !self.fired
    }
}
