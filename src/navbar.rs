use serde::{Deserialize, Serialize};

pub const SOLID_BACKGROUND: &str = "rgba(13, 17, 23, 0.95)";
pub const TRANSLUCENT_BACKGROUND: &str = "rgba(13, 17, 23, 0.85)";
pub const ACTIVE_LINK_COLOR: &str = "#58a6ff";

/// Past this offset the navbar turns solid
const SOLID_AFTER: f64 = 100.0;
/// Past this offset scrolling down hides the navbar
const HIDE_AFTER: f64 = 300.0;
/// A section counts as current this far before its top reaches the viewport
const SECTION_LEAD: f64 = 150.0;

/// Visual state of the navbar for one scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarStyle {
    pub solid: bool,
    pub hidden: bool,
}

impl Default for NavbarStyle {
    fn default() -> Self {
        navbar_style(0.0, 0.0)
    }
}

impl NavbarStyle {
    pub fn background_color(&self) -> &'static str {
        if self.solid {
            SOLID_BACKGROUND
        } else {
            TRANSLUCENT_BACKGROUND
        }
    }

    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Map the previous and current scroll offsets to the navbar's look
pub fn navbar_style(previous_y: f64, current_y: f64) -> NavbarStyle {
    NavbarStyle {
        solid: current_y > SOLID_AFTER,
        hidden: current_y > previous_y && current_y > HIDE_AFTER,
    }
}

/// Open/closed state shared by the menu toggle and the menu itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a nav link always closes the menu
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Position of a page section with an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let top = self.top - SECTION_LEAD;
        scroll_y > top && scroll_y <= top + self.height
    }
}

/// The section whose nav link should be highlighted, if any matches.
///
/// When ranges overlap the later section wins. `None` means the current
/// highlight should be left alone.
pub fn active_section(sections: &[SectionBox], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.contains(scroll_y))
        .last()
        .map(|section| section.id.as_str())
}

/// Colour for a nav link given the active section
pub fn link_color(href: &str, active: Option<&str>) -> Option<&'static str> {
    match (href.strip_prefix('#'), active) {
        (Some(target), Some(active)) if target == active => Some(ACTIVE_LINK_COLOR),
        _ => None,
    }
}
