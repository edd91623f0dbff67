//! The parts of the page the project feed writes to.

use crate::animation::{FadeGroup, FadeInPlan, RevealSchedule};
use crate::models::RepositorySummary;
use crate::navbar::SectionBox;
use crate::render::{self, FALLBACK_SUBTITLE};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBTITLE: &str = "Some of the things I've been building lately.";

/// Content of the projects grid element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridContainer {
    pub html: String,
    pub card_count: usize,
}

/// The descriptive line under the projects heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtitle {
    pub text: String,
    pub visible: bool,
}

impl Default for Subtitle {
    fn default() -> Self {
        Self {
            text: DEFAULT_SUBTITLE.to_string(),
            visible: true,
        }
    }
}

/// Projects section. Either element may be missing from a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsSection {
    pub grid: Option<GridContainer>,
    pub subtitle: Option<Subtitle>,
}

impl Default for ProjectsSection {
    fn default() -> Self {
        Self {
            grid: Some(GridContainer::default()),
            subtitle: Some(Subtitle::default()),
        }
    }
}

impl ProjectsSection {
    pub fn new(grid: Option<GridContainer>, subtitle: Option<Subtitle>) -> Self {
        Self { grid, subtitle }
    }

    /// Replace the grid with one card per repository.
    ///
    /// Returns the reveal schedule for the new cards, or `None` when the
    /// page has no grid.
    pub fn render_projects(&mut self, repos: &[RepositorySummary]) -> Option<RevealSchedule> {
        let grid = self.grid.as_mut()?;
        grid.html = render::project_cards_html(repos);
        grid.card_count = repos.len();
        Some(RevealSchedule::staggered(repos.len()))
    }

    /// Replace the grid with the profile link card and explain why
    pub fn render_fallback_projects(&mut self, profile_url: &str) {
        let Some(grid) = self.grid.as_mut() else {
            return;
        };

        if let Some(subtitle) = self.subtitle.as_mut() {
            subtitle.text = FALLBACK_SUBTITLE.to_string();
        }

        grid.html = render::fallback_card_html(profile_url);
        grid.card_count = 1;
    }

    pub fn hide_subtitle(&mut self) {
        if let Some(subtitle) = self.subtitle.as_mut() {
            subtitle.visible = false;
        }
    }

    pub fn grid_html(&self) -> Option<&str> {
        self.grid.as_ref().map(|grid| grid.html.as_str())
    }
}

/// Static layout facts about the page, measured once at load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub sections: Vec<SectionBox>,
    pub nav_height: f64,
    pub fade_in: Vec<String>,
    pub timeline_items: Vec<String>,
    pub skill_categories: Vec<String>,
    pub highlight_cards: Vec<String>,
}

impl PageLayout {
    /// Layout of the stock portfolio page
    pub fn portfolio() -> Self {
        let sections = [
            ("about", 0.0, 800.0),
            ("experience", 800.0, 1200.0),
            ("skills", 2000.0, 700.0),
            ("projects", 2700.0, 1100.0),
            ("contact", 3800.0, 500.0),
        ]
        .into_iter()
        .map(|(id, top, height)| SectionBox::new(id, top, height))
        .collect();

        Self {
            sections,
            nav_height: 70.0,
            fade_in: vec!["hero".to_string()],
            timeline_items: (1..=3).map(|i| format!("timeline-{i}")).collect(),
            skill_categories: (1..=4).map(|i| format!("skills-{i}")).collect(),
            highlight_cards: (1..=3).map(|i| format!("highlight-{i}")).collect(),
        }
    }

    /// Fade-in assignments for every animated element on the page
    pub fn fade_in_plan(&self) -> FadeInPlan {
        FadeInPlan::new()
            .with_group(FadeGroup::Marked, self.fade_in.iter().cloned())
            .with_group(FadeGroup::Section, self.sections.iter().map(|s| s.id.clone()))
            .with_group(FadeGroup::TimelineItem, self.timeline_items.iter().cloned())
            .with_group(FadeGroup::SkillCategory, self.skill_categories.iter().cloned())
            .with_group(FadeGroup::HighlightCard, self.highlight_cards.iter().cloned())
    }
}
