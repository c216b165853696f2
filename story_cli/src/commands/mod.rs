pub mod node;
pub mod nodes;
pub mod play;
pub mod validate;

use std::io::{self, StdinLock, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use story_content::{BundleFile, ContentStore, NodeId};
use story_engine::{IoConsole, SessionConfig, DEFAULT_START_NODE};

use crate::output::OutputFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Play the full game
    Play(play::PlayArgs),
    /// Run a single node in isolation
    Node(node::NodeArgs),
    /// List every node in the story
    Nodes,
    /// Check the story data for problems
    Validate,
}

/// Where the story comes from and how it starts.
#[derive(Args)]
pub struct StoryArgs {
    /// Story bundle (.toml or .json)
    #[arg(long, global = true, env = "BUTTON_STORY", default_value = "demos/press_a_button.toml")]
    pub story: PathBuf,

    /// Node the game starts from
    #[arg(long, global = true, default_value = DEFAULT_START_NODE)]
    pub start: String,

    /// Seed for random transitions (fresh entropy when omitted)
    #[arg(long, global = true, env = "BUTTON_SEED")]
    pub seed: Option<u64>,
}

impl StoryArgs {
    pub fn load_store(&self) -> Result<ContentStore> {
        let store = ContentStore::load(&BundleFile::new(&self.story))
            .with_context(|| format!("Failed to load story from {}", self.story.display()))?;

        let report = store.validate();
        if !report.is_clean() {
            tracing::warn!(issues = report.len(), "story data has problems, run `validate` for details");
        }
        Ok(store)
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }

    pub fn session_config(&self, developer_mode: bool) -> SessionConfig {
        SessionConfig {
            start_node: NodeId::from(self.start.as_str()),
            developer_mode,
            ..SessionConfig::default()
        }
    }
}

/// Terminal console for play. JSON output keeps stdout for the document,
/// so the narrative goes to stderr instead.
pub fn console(format: OutputFormat) -> IoConsole<StdinLock<'static>, Box<dyn Write>> {
    let output: Box<dyn Write> = match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    IoConsole::new(io::stdin().lock(), output)
}
