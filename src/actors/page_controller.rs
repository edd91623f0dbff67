use crate::animation::{FadeIn, FadeInPlan, ViewportEntry, VisibilityTracker};
use crate::error::Result as FeedResult;
use crate::feed::{apply_fetch_result, RepositoryFeed};
use crate::models::{FeedOutcome, RepositorySummary};
use crate::navbar::{active_section, navbar_style, NavMenu, NavbarStyle};
use crate::page::{PageLayout, ProjectsSection};
use crate::scroll::{scroll_target_for, DebounceToken, Debouncer, ACTIVE_NAV_DEBOUNCE};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort, SpawnErr};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Owns all page state; every page event goes through this actor
pub struct PageController;

/// State for the page controller
pub struct PageState {
    feed: Arc<RepositoryFeed>,
    layout: PageLayout,
    projects: ProjectsSection,
    navbar: NavbarStyle,
    last_scroll_y: f64,
    menu: NavMenu,
    active_section: Option<String>,
    active_nav: Debouncer,
    fade_in: FadeInPlan,
    visibility: VisibilityTracker,
    feed_requested: bool,
    outcome: Option<FeedOutcome>,
    render_generation: u64,
    revealed_cards: BTreeSet<usize>,
}

/// Messages the page controller can handle
#[derive(Debug)]
pub enum PageControllerMessage {
    /// Start the one repository fetch; repeats are ignored
    LoadFeed,
    /// The fetch task finished
    FeedSettled(FeedResult<Vec<RepositorySummary>>),
    /// Window scrolled to this offset
    Scroll(f64),
    ToggleMenu,
    /// A nav link was followed; replies with the smooth-scroll target
    NavLinkClicked {
        href: String,
        reply: RpcReplyPort<Option<f64>>,
    },
    ActiveNavTick(DebounceToken),
    RevealCard { generation: u64, index: usize },
    /// Intersection changes reported by the viewport
    Viewport(Vec<ViewportEntry>),
    GetSnapshot(RpcReplyPort<PageSnapshot>),
    GetFeedOutcome(RpcReplyPort<Option<FeedOutcome>>),
}

/// Read-only copy of the page state
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub navbar: NavbarStyle,
    pub navbar_background: &'static str,
    pub navbar_transform: &'static str,
    pub menu_open: bool,
    pub active_section: Option<String>,
    pub projects: ProjectsSection,
    pub feed: Option<FeedOutcome>,
    pub revealed_cards: Vec<usize>,
    pub fade_in: Vec<FadeIn>,
    pub visible_elements: Vec<String>,
}

/// Arguments for starting the controller
pub struct PageControllerArgs {
    pub feed: Arc<RepositoryFeed>,
    pub layout: PageLayout,
    pub projects: ProjectsSection,
}

impl PageController {
    /// Spawn the controller; it requests the repository feed immediately
    pub async fn spawn_for_page(
        args: PageControllerArgs,
    ) -> std::result::Result<ActorRef<PageControllerMessage>, SpawnErr> {
        let (actor_ref, _handle) = Actor::spawn(None, PageController, args).await?;
        info!("Page controller started");
        Ok(actor_ref)
    }
}

impl PageState {
    fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            navbar: self.navbar,
            navbar_background: self.navbar.background_color(),
            navbar_transform: self.navbar.transform(),
            menu_open: self.menu.is_open(),
            active_section: self.active_section.clone(),
            projects: self.projects.clone(),
            feed: self.outcome.clone(),
            revealed_cards: self.revealed_cards.iter().copied().collect(),
            fade_in: self.fade_in.entries().to_vec(),
            visible_elements: self.visibility.visible().map(str::to_string).collect(),
        }
    }

    fn refresh_active_section(&mut self) {
        // No match keeps the current highlight
        if let Some(id) = active_section(&self.layout.sections, self.last_scroll_y) {
            self.active_section = Some(id.to_string());
        }
    }
}

#[ractor::async_trait]
impl Actor for PageController {
    type Msg = PageControllerMessage;
    type State = PageState;
    type Arguments = PageControllerArgs;

    async fn pre_start(
        &self,
        myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> std::result::Result<Self::State, ActorProcessingErr> {
        let fade_in = args.layout.fade_in_plan();
        let mut visibility = VisibilityTracker::default();
        for element in fade_in.elements() {
            visibility.observe(element);
        }

        let mut state = PageState {
            feed: args.feed,
            layout: args.layout,
            projects: args.projects,
            navbar: NavbarStyle::default(),
            last_scroll_y: 0.0,
            menu: NavMenu::default(),
            active_section: None,
            active_nav: Debouncer::new(ACTIVE_NAV_DEBOUNCE),
            fade_in,
            visibility,
            feed_requested: false,
            outcome: None,
            render_generation: 0,
            revealed_cards: BTreeSet::new(),
        };
        state.refresh_active_section();

        debug!(
            observed = state.visibility.pending(),
            "Fade-in elements registered"
        );

        myself
            .send_message(PageControllerMessage::LoadFeed)
            .map_err(|e| ActorProcessingErr::from(format!("Failed to request feed: {:?}", e)))?;

        Ok(state)
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        match message {
            PageControllerMessage::LoadFeed => {
                if state.feed_requested {
                    debug!("Repository feed already requested");
                    return Ok(());
                }
                state.feed_requested = true;

                let feed = state.feed.clone();
                let myself_clone = myself.clone();
                tokio::spawn(async move {
                    let result = feed.fetch_curated().await;
                    if let Err(e) =
                        myself_clone.send_message(PageControllerMessage::FeedSettled(result))
                    {
                        error!("Failed to deliver feed result: {:?}", e);
                    }
                });
            }
            PageControllerMessage::FeedSettled(result) => {
                let render = apply_fetch_result(&mut state.projects, state.feed.config(), result);

                state.render_generation += 1;
                state.revealed_cards.clear();
                let generation = state.render_generation;
                for step in render.reveal.steps() {
                    let index = step.card_index;
                    myself.send_after(step.delay, move || PageControllerMessage::RevealCard {
                        generation,
                        index,
                    });
                }

                info!(
                    loaded = render.outcome.is_loaded(),
                    cards = render.reveal.len(),
                    "Projects section rendered"
                );
                state.outcome = Some(render.outcome);
            }
            PageControllerMessage::Scroll(y) => {
                state.navbar = navbar_style(state.last_scroll_y, y);
                state.last_scroll_y = y;

                let token = state.active_nav.trigger();
                myself.send_after(state.active_nav.wait(), move || {
                    PageControllerMessage::ActiveNavTick(token)
                });
            }
            PageControllerMessage::ToggleMenu => {
                state.menu.toggle();
            }
            PageControllerMessage::NavLinkClicked { href, reply } => {
                state.menu.close();
                let target = scroll_target_for(&href, &state.layout.sections, state.layout.nav_height);
                if reply.send(target).is_err() {
                    debug!("Nav link caller went away before the reply");
                }
            }
            PageControllerMessage::ActiveNavTick(token) => {
                if state.active_nav.fire(token) {
                    state.refresh_active_section();
                }
            }
            PageControllerMessage::RevealCard { generation, index } => {
                // Cards from an earlier render are gone
                if generation == state.render_generation {
                    state.revealed_cards.insert(index);
                }
            }
            PageControllerMessage::Viewport(entries) => {
                let shown = state.visibility.update(&entries);
                if !shown.is_empty() {
                    debug!(?shown, "Elements faded in");
                }
            }
            PageControllerMessage::GetSnapshot(reply) => {
                if reply.send(state.snapshot()).is_err() {
                    debug!("Snapshot caller went away before the reply");
                }
            }
            PageControllerMessage::GetFeedOutcome(reply) => {
                if reply.send(state.outcome.clone()).is_err() {
                    debug!("Feed outcome caller went away before the reply");
                }
            }
        }

        Ok(())
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        info!(
            feed_loaded = ?state.outcome.as_ref().map(FeedOutcome::is_loaded),
            "Page controller stopped"
        );
        Ok(())
    }
}
