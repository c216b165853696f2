use anyhow::Result;

use super::StoryArgs;
use crate::output::OutputFormat;

pub fn run(story: &StoryArgs, format: OutputFormat) -> Result<()> {
    let store = story.load_store()?;
    let report = store.validate();

    match format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.messages())?),
    }
    if !report.is_clean() {
        println!();
        anyhow::bail!("{} data issue(s) found", report.len());
    }
    Ok(())
}
