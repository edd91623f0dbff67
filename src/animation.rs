//! Reveal and fade-in animation plans.
//!
//! Timed visual changes are expressed as finite schedules so they can be
//! inspected before anything runs them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// Delay before the first card is revealed after a render.
pub const REVEAL_INITIAL_DELAY: Duration = Duration::from_millis(100);
/// Gap between consecutive card reveals.
pub const REVEAL_STEP: Duration = Duration::from_millis(100);
/// Share of an element that must be on screen before it fades in.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealStep {
    pub card_index: usize,
    pub delay: Duration,
}

/// When each rendered card gains its `visible` class, measured from render time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSchedule {
    steps: Vec<RevealStep>,
}

impl RevealSchedule {
    pub fn staggered(card_count: usize) -> Self {
        let steps = (0..card_count)
            .map(|card_index| RevealStep {
                card_index,
                delay: REVEAL_INITIAL_DELAY + REVEAL_STEP * card_index as u32,
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Element groups that fade in as they scroll into view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeGroup {
    /// Elements already carrying the fade-in marker
    Marked,
    Section,
    TimelineItem,
    SkillCategory,
    HighlightCard,
}

impl FadeGroup {
    /// Per-index increment of the transition delay
    pub fn stagger(self) -> Duration {
        match self {
            FadeGroup::Marked | FadeGroup::Section => Duration::ZERO,
            FadeGroup::TimelineItem | FadeGroup::HighlightCard => Duration::from_millis(100),
            FadeGroup::SkillCategory => Duration::from_millis(50),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeIn {
    pub element: String,
    pub group: FadeGroup,
    pub transition_delay: Duration,
}

impl FadeIn {
    /// CSS value for the element's `transition-delay`, e.g. `0.15s`
    pub fn css_delay(&self) -> String {
        format!("{}s", self.transition_delay.as_secs_f64())
    }
}

/// Every element that fades in, with its transition delay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeInPlan {
    entries: Vec<FadeIn>,
}

impl FadeInPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group of elements; delays restart from zero for each group
    pub fn with_group<I, S>(mut self, group: FadeGroup, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stagger = group.stagger();
        self.entries
            .extend(elements.into_iter().enumerate().map(|(index, element)| FadeIn {
                element: element.into(),
                group,
                transition_delay: stagger * index as u32,
            }));
        self
    }

    pub fn entries(&self) -> &[FadeIn] {
        &self.entries
    }

    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.element.as_str())
    }
}

/// One observation reported by the viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportEntry {
    pub element: String,
    pub intersection_ratio: f64,
}

impl ViewportEntry {
    pub fn new(element: impl Into<String>, intersection_ratio: f64) -> Self {
        Self {
            element: element.into(),
            intersection_ratio,
        }
    }
}

/// One-shot visibility: an element stops being observed once it has shown.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    threshold: f64,
    observed: BTreeSet<String>,
    visible: BTreeSet<String>,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl VisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: BTreeSet::new(),
            visible: BTreeSet::new(),
        }
    }

    pub fn observe(&mut self, element: impl Into<String>) {
        let element = element.into();
        if !self.visible.contains(&element) {
            self.observed.insert(element);
        }
    }

    /// Apply viewport entries; returns the elements that just became visible
    pub fn update(&mut self, entries: &[ViewportEntry]) -> Vec<String> {
        let mut shown = Vec::new();
        for entry in entries {
            if entry.intersection_ratio > 0.0
                && entry.intersection_ratio >= self.threshold
                && self.observed.remove(&entry.element)
            {
                self.visible.insert(entry.element.clone());
                shown.push(entry.element.clone());
            }
        }
        shown
    }

    pub fn is_visible(&self, element: &str) -> bool {
        self.visible.contains(element)
    }

    pub fn is_observed(&self, element: &str) -> bool {
        self.observed.contains(element)
    }

    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.visible.iter().map(String::as_str)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }
}
