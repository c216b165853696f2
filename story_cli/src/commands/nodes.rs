use anyhow::Result;

use super::StoryArgs;
use crate::output::OutputFormat;

pub fn run(story: &StoryArgs, format: OutputFormat) -> Result<()> {
    let store = story.load_store()?;
    let nodes = store.all_node_ids();

    match format {
        OutputFormat::Text => {
            println!("All available nodes ({}):", nodes.len());
            for (i, node) in nodes.iter().enumerate() {
                let selector = store.selector_of(node);
                println!("{:>3}. {node} [{selector}]", i + 1);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&nodes)?),
    }
    Ok(())
}
