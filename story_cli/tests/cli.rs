use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const DEMO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/press_a_button.toml");

const BROKEN: &str = r#"
[[nodes]]
node = "start_game"
edge_selector = "start"

[[nodes]]
node = "finale"
edge_selector = "end"

[[edges]]
source = "start_game"
target = "finale"

[[edges]]
source = "finale"
target = "nowhere"

[[text]]
id_text = "pbn"
text_type = "prompt"
text = "Press"
"#;

fn press_a_button(story: &str) -> Command {
    let mut cmd = Command::cargo_bin("press-a-button").unwrap();
    cmd.env_remove("BUTTON_STORY")
        .env_remove("BUTTON_SEED")
        .env_remove("RUST_LOG")
        .args(["--story", story]);
    cmd
}

fn broken_bundle() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(BROKEN.as_bytes()).unwrap();
    file
}

#[test]
fn test_validate_demo_is_clean() {
    press_a_button(DEMO)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("all good"));
}

#[test]
fn test_validate_broken_bundle_fails() {
    let file = broken_bundle();
    press_a_button(file.path().to_str().unwrap())
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("nowhere"))
        .stderr(predicate::str::contains("issue(s) found"));
}

#[test]
fn test_node_rejects_unknown_id() {
    press_a_button(DEMO)
        .args(["node", "no_such_node"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown node 'no_such_node'"));
}

#[test]
fn test_node_reports_next_node() {
    press_a_button(DEMO)
        .args(["node", "welcome"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEVELOPER MODE - DEBUG INFO"))
        .stdout(predicate::str::contains("next node would be 'first_ticket'"));
}

#[test]
fn test_nodes_lists_every_node() {
    press_a_button(DEMO)
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("All available nodes (6)"))
        .stdout(predicate::str::contains("performance_review [end]"));
}

#[test]
fn test_seeded_play_is_reproducible() {
    let run = |seed: &str| {
        let output = press_a_button(DEMO)
            .args(["--seed", seed, "play"])
            .write_stdin("\n".repeat(20))
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(output).unwrap()
    };

    let first = run("42");
    assert!(first.contains("Thanks for playing!"));
    assert!(first.contains("Performance Review"));
    assert_eq!(first, run("42"));
}

#[test]
fn test_json_play_keeps_stdout_parseable() {
    let output = press_a_button(DEMO)
        .args(["--seed", "7", "--format", "json", "play"])
        .write_stdin("\n".repeat(20))
        .assert()
        .success()
        .stderr(predicate::str::contains("(press Enter)"))
        .get_output()
        .stdout
        .clone();

    let journey: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let steps = journey["steps"].as_array().unwrap();
    assert_eq!(steps.first().unwrap()["to"], "start_game");
    assert_eq!(steps.last().unwrap()["to"], "performance_review");
}

#[test]
fn test_closed_input_stops_play() {
    press_a_button(DEMO)
        .args(["--seed", "1", "play"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Game stopped"));
}
