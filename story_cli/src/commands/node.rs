use anyhow::{Context, Result};
use clap::Args;
use story_engine::play_single_node;

use super::StoryArgs;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct NodeArgs {
    /// Node to run (defaults to the start node)
    pub node: Option<String>,
}

pub fn run(story: &StoryArgs, args: &NodeArgs, format: OutputFormat) -> Result<()> {
    let store = story.load_store()?;
    let node = args.node.as_deref().unwrap_or(&story.start);

    if !store.all_node_ids().contains(node) {
        anyhow::bail!("Unknown node '{node}'. Run `press-a-button nodes` to list them.");
    }

    let mut console = super::console(format);
    let report = play_single_node(
        &store,
        node,
        &story.session_config(true),
        story.rng(),
        &mut console,
    )
    .with_context(|| format!("Node '{node}' failed"))?;

    match format {
        OutputFormat::Text => match &report.next {
            Some(next) => println!("\nResult: next node would be '{next}'"),
            None => println!("\nResult: '{node}' ends the game"),
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
