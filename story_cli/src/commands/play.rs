use anyhow::{Context, Result};
use clap::Args;
use story_engine::{wrap, Employee, GameSession, LINE_WIDTH};

use super::StoryArgs;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct PlayArgs {
    /// Developer mode: debug info after every node and a verbose summary
    #[arg(long)]
    pub dev: bool,
}

pub fn run(story: &StoryArgs, args: &PlayArgs, format: OutputFormat) -> Result<()> {
    let store = story.load_store()?;
    let mut rng = story.rng();

    if let Some(mut employee) = Employee::from_store(&store) {
        if employee.maybe_reorg(&mut rng) {
            tracing::info!(department = %employee.department, "reorg");
        }
        if format == OutputFormat::Text {
            println!("{}", wrap(&employee.introduction(), LINE_WIDTH));
        }
    }

    let mut session = GameSession::new(&store, story.session_config(args.dev), rng);
    let mut console = super::console(format);

    match format {
        OutputFormat::Text => {
            session.run(&mut console).context("Game stopped")?;
        }
        OutputFormat::Json => {
            while session.is_running() {
                session.tick(&mut console).context("Game stopped")?;
            }
            println!("{}", session.journey().to_json()?);
        }
    }
    Ok(())
}
