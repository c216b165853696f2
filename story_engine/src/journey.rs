//! Journey log - the ordered record of every transition in a session.

use serde::{Deserialize, Serialize};
use story_content::{EdgeSelector, NodeId};

use crate::render::display_name;
use crate::wrap::fill;

const SUMMARY_RULE_WIDTH: usize = 60;
const OUTRO_MARKER: &str = "   » ";
const OUTRO_INDENT: &str = "   ";

/// One transition taken during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyStep {
    /// `None` only for the synthetic first step that marks the game start.
    pub from: Option<NodeId>,
    pub to: NodeId,
    pub edge_selector: EdgeSelector,
    /// Feedback and outro text exactly as shown, unwrapped.
    pub outro_text: Option<String>,
    pub is_desired: Option<bool>,
}

impl JourneyStep {
    /// The marker step recorded when a session begins at `node`.
    pub fn start(node: impl Into<NodeId>) -> Self {
        Self {
            from: None,
            to: node.into(),
            edge_selector: EdgeSelector::Start,
            outro_text: None,
            is_desired: None,
        }
    }

    /// Short label for the desired flag, `unknown` when the edge did not say.
    pub fn desirability(&self) -> &'static str {
        match self.is_desired {
            Some(true) => "desired",
            Some(false) => "not desired",
            None => "unknown",
        }
    }
}

/// Append-only, chronologically ordered list of journey steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JourneyLog {
    steps: Vec<JourneyStep>,
}

impl JourneyLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log holding only the start marker for `node`.
    pub fn starting_at(node: impl Into<NodeId>) -> Self {
        let mut log = Self::new();
        log.append(JourneyStep::start(node));
        log
    }

    pub fn append(&mut self, step: JourneyStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[JourneyStep] {
        &self.steps
    }

    /// Real transitions, i.e. everything after the start marker.
    pub fn transitions(&self) -> impl Iterator<Item = &JourneyStep> {
        self.steps.iter().skip(1)
    }

    pub fn last(&self) -> Option<&JourneyStep> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Machine-readable transcript.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable transcript of the walk.
    ///
    /// `verbose` adds the selector kind and desirability of every transition.
    pub fn summarize(&self, width: usize, verbose: bool) -> String {
        let rule = "=".repeat(SUMMARY_RULE_WIDTH);
        let mut out = format!("{rule}\nYour Journey\n{rule}\n");

        for (i, step) in self.steps.iter().enumerate().skip(1) {
            let from = step.from.as_ref().map(|id| display_name(id.as_str())).unwrap_or_default();
            out.push_str(&format!("\n{i}. {from} → {}\n", display_name(step.to.as_str())));

            if let Some(outro) = &step.outro_text {
                out.push_str(&fill(outro, width, OUTRO_MARKER, OUTRO_INDENT));
                out.push('\n');
            }

            if verbose {
                out.push_str(&format!(
                    "{OUTRO_INDENT}[{}] {}\n",
                    step.edge_selector,
                    step.desirability()
                ));
            }
        }

        out.push_str(&format!("\nTotal nodes visited: {}\n", self.steps.len()));
        out.push_str("Thanks for playing!");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::LINE_WIDTH;

    fn sample_log() -> JourneyLog {
        let mut log = JourneyLog::starting_at("start_game");
        log.append(JourneyStep {
            from: Some("start_game".into()),
            to: "welcome".into(),
            edge_selector: EdgeSelector::Start,
            outro_text: Some("You arrive.".to_string()),
            is_desired: Some(true),
        });
        log.append(JourneyStep {
            from: Some("welcome".into()),
            to: "data_cleaning".into(),
            edge_selector: EdgeSelector::Random,
            outro_text: None,
            is_desired: Some(false),
        });
        log
    }

    #[test]
    fn test_start_marker() {
        let log = JourneyLog::starting_at("start_game");
        assert_eq!(log.len(), 1);
        assert!(log.steps()[0].from.is_none());
        assert_eq!(log.steps()[0].edge_selector, EdgeSelector::Start);
        assert_eq!(log.transitions().count(), 0);
    }

    #[test]
    fn test_append_preserves_order() {
        let log = sample_log();
        let targets: Vec<&str> = log.steps().iter().map(|s| s.to.as_str()).collect();
        assert_eq!(targets, vec!["start_game", "welcome", "data_cleaning"]);
        assert_eq!(log.last().unwrap().to.as_str(), "data_cleaning");
    }

    #[test]
    fn test_summary_skips_start_marker() {
        let summary = sample_log().summarize(LINE_WIDTH, false);

        assert!(summary.contains("1. Start Game → Welcome"));
        assert!(summary.contains("2. Welcome → Data Cleaning"));
        assert!(!summary.contains("0."));
        assert!(summary.contains("   » You arrive."));
        assert!(summary.contains("Total nodes visited: 3"));
        assert!(!summary.contains("[random]"));
    }

    #[test]
    fn test_verbose_summary_shows_selector_and_desirability() {
        let summary = sample_log().summarize(LINE_WIDTH, true);

        assert!(summary.contains("   [start] desired"));
        assert!(summary.contains("   [random] not desired"));
    }

    #[test]
    fn test_summary_wraps_long_outro() {
        let mut log = JourneyLog::starting_at("a");
        log.append(JourneyStep {
            from: Some("a".into()),
            to: "b".into(),
            edge_selector: EdgeSelector::Random,
            outro_text: Some("This is a very long outro text that should definitely be wrapped when displayed in the game summary because it exceeds the standard console width of eighty characters.".to_string()),
            is_desired: None,
        });

        let summary = log.summarize(LINE_WIDTH, true);
        assert!(summary.lines().all(|line| line.chars().count() <= LINE_WIDTH));
        assert!(summary.contains("[random] unknown"));
        let outro_lines: Vec<&str> = summary
            .lines()
            .skip_while(|line| !line.starts_with(OUTRO_MARKER))
            .take_while(|line| line.starts_with(OUTRO_INDENT) && !line.contains('['))
            .collect();
        assert!(outro_lines.len() > 1);
    }

    #[test]
    fn test_journey_serializes() {
        let json = serde_json::to_value(sample_log()).unwrap();
        let steps = json["steps"].as_array().unwrap();

        assert_eq!(steps.len(), 3);
        assert!(steps[0]["from"].is_null());
        assert_eq!(steps[2]["edge_selector"], "random");
        assert_eq!(steps[2]["is_desired"], false);
    }

    #[test]
    fn test_json_transcript_grows_only_through_append() {
        let mut log = JourneyLog::starting_at("start_game");
        let before: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        assert_eq!(before["steps"].as_array().unwrap().len(), 1);

        log.append(JourneyStep {
            from: Some("start_game".into()),
            to: "welcome".into(),
            edge_selector: EdgeSelector::Start,
            outro_text: None,
            is_desired: None,
        });
        let after: serde_json::Value = serde_json::from_str(&log.to_json().unwrap()).unwrap();
        let steps = after["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1]["from"], "start_game");
        assert_eq!(steps[1]["to"], "welcome");
    }
}
