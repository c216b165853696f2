//! Game session - drives the walk from the start node to a terminal node.
//!
//! Each tick handles one node:
//! 1. **Entry**: show the node's title, intro and event text
//! 2. **Prompt**: wait for the player to advance
//! 3. **Selection**: ask the traversal policy for the next edge
//! 4. **Outro**: show feedback and outro text for the chosen edge
//! 5. **Log**: record the transition and move on, or end the session

mod console;

pub use console::*;

use rand::Rng;
use serde::{Deserialize, Serialize};
use story_content::{ContentStore, EdgeSelector, NodeId};
use uuid::Uuid;

use crate::error::EngineError;
use crate::journey::{JourneyLog, JourneyStep};
use crate::policy::TraversalPolicy;
use crate::render::NarrativeRenderer;
use crate::wrap::{wrap, LINE_WIDTH};

/// Node every game starts from unless configured otherwise.
pub const DEFAULT_START_NODE: &str = "start_game";

/// Unique identifier for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub start_node: NodeId,

    /// Column width for all rendered text.
    pub line_width: usize,

    /// Show per-tick debug blocks and a verbose summary.
    pub developer_mode: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_node: NodeId::from(DEFAULT_START_NODE),
            line_width: LINE_WIDTH,
            developer_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Running,
    Ended,
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub node: NodeId,
    pub selector: EdgeSelector,
    pub connections: Vec<NodeId>,

    /// `None` when the node was terminal.
    pub next: Option<NodeId>,

    /// Feedback and outro for the chosen edge, unwrapped.
    pub outro: Option<String>,
    pub desired: Option<bool>,
}

impl TickReport {
    /// Developer-facing description of the tick.
    pub fn debug_block(&self) -> String {
        let rule = "=".repeat(60);
        let connections: Vec<&str> = self.connections.iter().map(NodeId::as_str).collect();

        let mut out = format!("{rule}\nDEVELOPER MODE - DEBUG INFO\n{rule}\n");
        out.push_str(&format!("Current node: {}\n", self.node));
        out.push_str(&format!("Edge selector: {}\n", self.selector));
        out.push_str(&format!("Available connections: [{}]\n", connections.join(", ")));
        match &self.next {
            Some(next) => {
                out.push_str(&format!("Next node: {next}\n"));
                if let Some(desired) = self.desired {
                    out.push_str(&format!("Edge desired: {desired}\n"));
                }
            }
            None => out.push_str("Game end: no more connections\n"),
        }
        out.push_str(&rule);
        out
    }
}

/// One play-through of the story.
///
/// A session starts `Running` at the configured start node and moves to
/// `Ended` once a node yields no next node. Ended sessions cannot resume.
pub struct GameSession<'a, R> {
    id: SessionId,
    store: &'a ContentStore,
    renderer: NarrativeRenderer<'a>,
    policy: TraversalPolicy<R>,
    config: SessionConfig,
    current: NodeId,
    state: SessionState,
    journey: JourneyLog,
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Create a session over `store`, drawing random selections from `rng`.
    pub fn new(store: &'a ContentStore, config: SessionConfig, rng: R) -> Self {
        let id = SessionId::new();
        let start = config.start_node.clone();

        if store.node(start.as_str()).is_none() && store.outgoing_edges(start.as_str()).is_empty() {
            tracing::warn!(session = %id, node = %start, "start node has no content and no edges");
        }
        tracing::info!(session = %id, node = %start, "session started");

        Self {
            id,
            store,
            renderer: NarrativeRenderer::with_width(store, config.line_width),
            policy: TraversalPolicy::new(rng),
            journey: JourneyLog::starting_at(start.clone()),
            current: start,
            state: SessionState::Running,
            config,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn current_node(&self) -> &NodeId {
        &self.current
    }

    pub fn journey(&self) -> &JourneyLog {
        &self.journey
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Every node id in the story, sorted.
    pub fn available_nodes(&self) -> Vec<&'a str> {
        self.store.all_node_ids().into_iter().collect()
    }

    /// Play the current node and advance.
    pub fn tick(&mut self, console: &mut impl Console) -> Result<TickReport, EngineError> {
        if self.state == SessionState::Ended {
            return Err(EngineError::SessionEnded);
        }

        tracing::debug!(session = %self.id, node = %self.current, "tick");

        let report = play_node(
            self.store,
            &self.renderer,
            &mut self.policy,
            self.current.as_str(),
            self.config.developer_mode,
            console,
        )?;

        match &report.next {
            Some(next) => {
                self.journey.append(JourneyStep {
                    from: Some(self.current.clone()),
                    to: next.clone(),
                    edge_selector: report.selector.clone(),
                    outro_text: report.outro.clone(),
                    is_desired: report.desired,
                });
                self.current = next.clone();
            }
            None => {
                self.state = SessionState::Ended;
                tracing::info!(
                    session = %self.id,
                    visited = self.journey.len(),
                    "session ended"
                );
            }
        }

        Ok(report)
    }

    /// Tick until the session ends, then show the journey summary.
    pub fn run(&mut self, console: &mut impl Console) -> Result<&JourneyLog, EngineError> {
        while self.is_running() {
            self.tick(console)?;
        }
        console.show(&self.summary())?;
        Ok(&self.journey)
    }

    /// Transcript of the journey so far.
    pub fn summary(&self) -> String {
        self.journey
            .summarize(self.config.line_width, self.config.developer_mode)
    }

    pub fn into_journey(self) -> JourneyLog {
        self.journey
    }
}

/// Play a single node in isolation, with developer output.
///
/// Nothing is logged and no session state is touched; the report says where
/// the node would lead.
pub fn play_single_node<R: Rng>(
    store: &ContentStore,
    node: &str,
    config: &SessionConfig,
    rng: R,
    console: &mut impl Console,
) -> Result<TickReport, EngineError> {
    let renderer = NarrativeRenderer::with_width(store, config.line_width);
    let mut policy = TraversalPolicy::new(rng);
    play_node(store, &renderer, &mut policy, node, true, console)
}

fn play_node<R: Rng>(
    store: &ContentStore,
    renderer: &NarrativeRenderer<'_>,
    policy: &mut TraversalPolicy<R>,
    node: &str,
    developer_mode: bool,
    console: &mut impl Console,
) -> Result<TickReport, EngineError> {
    let entry = renderer.render_node_entry(node);
    if !entry.is_empty() {
        console.show(&entry.to_string())?;
    }

    let prompt = renderer.render_prompt(node)?;
    console.acknowledge(&prompt)?;

    let chosen = policy.next_from(store, node);
    let (next, outro, desired) = match chosen {
        Some(edge) => {
            let outro = renderer.transition_text(node, edge)?;
            if let Some(text) = &outro {
                console.show(&wrap(text, renderer.width()))?;
            }
            (Some(edge.target.clone()), outro, edge.desired)
        }
        None => (None, None, None),
    };

    let report = TickReport {
        node: NodeId::from(node),
        selector: store.selector_of(node),
        connections: store.connections(node).into_iter().cloned().collect(),
        next,
        outro,
        desired,
    };

    if developer_mode {
        console.show(&report.debug_block())?;
    }
    Ok(report)
}
