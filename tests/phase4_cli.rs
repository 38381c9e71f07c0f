//! Phase 4 tests: the `sgraph` binary end to end.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use social_graph::config::SEED_ENV_VAR;
use social_graph::types::GraphData;

const SEED_JSON: &str = r#"{
    "users": [
        {"id": 1, "name": "Alice"},
        {"id": 2, "name": "Bob"},
        {"id": 3, "name": "Carol"},
        {"id": 4, "name": "Dan"},
        {"id": 5, "name": "Eve"}
    ],
    "relations": [[1, 2], [2, 3], [1, 4], [4, 3], [2, 1], [5, 99]]
}"#;

// ==================== CLI Helpers ====================

/// The `sgraph` binary built for this test run.
fn sgraph_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sgraph"))
}

/// Run `sgraph` with a clean environment and return the output.
fn run_sgraph(args: &[&str]) -> Output {
    Command::new(sgraph_bin())
        .args(args)
        .env_remove(SEED_ENV_VAR)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run sgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "sgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: assert a specific exit code.
fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected status\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper: parse stdout as JSON.
fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

/// Write `contents` to a fresh temp file.
fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn path_str(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

/// Color of a rendered node, `None` when uncolored.
fn node_color(render: &serde_json::Value, id: u64) -> Option<String> {
    let node = render["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["id"] == id)
        .unwrap_or_else(|| panic!("node {} missing from render", id));
    node.get("color").and_then(|c| c.as_str()).map(String::from)
}

/// Color of a rendered link in either orientation.
fn link_color(render: &serde_json::Value, a: u64, b: u64) -> Option<String> {
    let link = render["links"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| {
            (l["source"] == a && l["target"] == b) || (l["source"] == b && l["target"] == a)
        })
        .unwrap_or_else(|| panic!("link {}-{} missing from render", a, b));
    link.get("color").and_then(|c| c.as_str()).map(String::from)
}

// ==================== Exit codes ====================

#[test]
fn test_cli_info() {
    let seed = temp_file(SEED_JSON);

    let output = run_sgraph(&["info", "--file", path_str(&seed)]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Users: 5"), "unexpected info output: {}", out);
    assert!(out.contains("Relations: 4"), "unexpected info output: {}", out);

    let output = run_sgraph(&["--format", "json", "info", "--file", path_str(&seed)]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim().lines().count(), 1);
    let info = stdout_json(&output);
    assert_eq!(info["nodes"], 5);
    assert_eq!(info["edges"], 4);
    assert_eq!(info["isolated"], 1);
}

#[test]
fn test_cli_missing_seed_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let output = run_sgraph(&["info", "--file", missing.to_str().unwrap()]);
    assert_exit(&output, 1);
}

#[test]
fn test_cli_malformed_seed_is_parse_error() {
    let seed = temp_file("{ not json");
    let output = run_sgraph(&["info", "--file", path_str(&seed)]);
    assert_exit(&output, 2);
}

#[test]
fn test_cli_unknown_user_exits_not_found() {
    let seed = temp_file(SEED_JSON);
    let output = run_sgraph(&["find", "42", "--file", path_str(&seed)]);
    assert_exit(&output, 4);
}

#[test]
fn test_cli_missing_relation_exits_not_found() {
    let seed = temp_file(SEED_JSON);

    let output = run_sgraph(&["edge", "1", "3", "--file", path_str(&seed)]);
    assert_exit(&output, 4);

    let output = run_sgraph(&["edge", "2", "1", "--file", path_str(&seed)]);
    assert_success(&output);
}

#[test]
fn test_cli_unreachable_path_exits_not_found() {
    let seed = temp_file(SEED_JSON);
    let output = run_sgraph(&["path", "1", "5", "--file", path_str(&seed)]);
    assert_exit(&output, 4);
}

#[test]
fn test_cli_no_suggestions_exits_not_found() {
    let seed = temp_file(SEED_JSON);
    let output = run_sgraph(&["suggest", "5", "--file", path_str(&seed)]);
    assert_exit(&output, 4);
}

#[test]
fn test_cli_no_seed_source_exits_usage() {
    let output = run_sgraph(&["info"]);
    assert_exit(&output, 3);
}

// ==================== JSON output ====================

#[test]
fn test_cli_find_json_sorted_neighbors() {
    let seed = temp_file(SEED_JSON);
    let output = run_sgraph(&["--format", "json", "find", "1", "--file", path_str(&seed)]);
    assert_success(&output);

    let user = stdout_json(&output);
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["neighbors"], serde_json::json!([2, 4]));
}

#[test]
fn test_cli_path_json() {
    let seed = temp_file(SEED_JSON);
    let output = run_sgraph(&["--format", "json", "path", "1", "3", "--file", path_str(&seed)]);
    assert_success(&output);

    let value = stdout_json(&output);
    assert_eq!(value["source"], 1);
    assert_eq!(value["target"], 3);
    assert_eq!(value["hops"], 2);

    let path = value["path"].as_array().unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path[0]["id"], 1);
    assert_eq!(path[0]["name"], "Alice");
    assert_eq!(path[2]["id"], 3);
    let middle = path[1]["id"].as_u64().unwrap();
    assert!(middle == 2 || middle == 4, "unexpected middle hop {}", middle);
}

#[test]
fn test_cli_suggest_json() {
    let seed = temp_file(SEED_JSON);
    let output = run_sgraph(&["--format", "json", "suggest", "1", "--file", path_str(&seed)]);
    assert_success(&output);

    let value = stdout_json(&output);
    assert_eq!(value["id"], 1);
    assert_eq!(
        value["suggestions"],
        serde_json::json!([{"id": 3, "name": "Carol"}])
    );
}

#[test]
fn test_cli_clean_run_logs_nothing() {
    let seed = temp_file(
        r#"{"nodes": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}], "relations": [[1, 2]]}"#,
    );
    let output = run_sgraph(&["find", "1", "--file", path_str(&seed)]);
    assert_success(&output);
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

// ==================== Export and generate ====================

#[test]
fn test_cli_export_round_trip() {
    let seed = temp_file(SEED_JSON);
    let output = run_sgraph(&["export", "--file", path_str(&seed)]);
    assert_success(&output);

    let exported = stdout_str(&output);
    let data = GraphData::from_json(&exported).unwrap();
    assert_eq!(data.nodes.len(), 5);
    assert_eq!(data.relations.len(), 4);

    let reseeded = temp_file(&exported);
    let output = run_sgraph(&["--format", "json", "info", "--file", path_str(&reseeded)]);
    assert_success(&output);
    let info = stdout_json(&output);
    assert_eq!(info["nodes"], 5);
    assert_eq!(info["edges"], 4);

    let output = run_sgraph(&["export", "--file", path_str(&reseeded)]);
    assert_success(&output);
    let again = GraphData::from_json(&stdout_str(&output)).unwrap();
    let mut before = data.relations.clone();
    let mut after = again.relations.clone();
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn test_cli_generate_caps_edges() {
    let output = run_sgraph(&["generate", "--nodes", "5", "--edges", "100", "--seed", "1"]);
    assert_success(&output);

    let data = GraphData::from_json(&stdout_str(&output)).unwrap();
    assert_eq!(data.nodes.len(), 5);
    assert_eq!(data.relations.len(), 10);
}

#[test]
fn test_cli_generate_seed_is_reproducible() {
    let args = ["generate", "--nodes", "8", "--edges", "12", "--seed", "7"];
    let relations = |output: &Output| {
        assert_success(output);
        let data = GraphData::from_json(&stdout_str(output)).unwrap();
        let mut pairs: Vec<(u64, u64)> = data
            .relations
            .iter()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect();
        pairs.sort_unstable();
        pairs
    };
    let first = relations(&run_sgraph(&args));
    assert_eq!(first.len(), 12);
    assert_eq!(first, relations(&run_sgraph(&args)));
}

// ==================== Render ====================

#[test]
fn test_cli_render_path_colors() {
    let seed = temp_file(SEED_JSON);
    let output = run_sgraph(&["render", "--file", path_str(&seed), "--path", "1", "3"]);
    assert_success(&output);
    let render = stdout_json(&output);

    assert_eq!(node_color(&render, 1).as_deref(), Some("red"));
    assert_eq!(node_color(&render, 3).as_deref(), Some("red"));
    assert_eq!(node_color(&render, 5), None);

    // The interior hop is either Bob or Dan.
    let middle = if node_color(&render, 2).is_some() { 2 } else { 4 };
    let other = if middle == 2 { 4 } else { 2 };
    assert_eq!(node_color(&render, middle).as_deref(), Some("orange"));
    assert_eq!(node_color(&render, other), None);

    assert_eq!(link_color(&render, 1, middle).as_deref(), Some("orange"));
    assert_eq!(link_color(&render, middle, 3).as_deref(), Some("orange"));
    assert_eq!(link_color(&render, 1, other), None);
    assert_eq!(link_color(&render, other, 3), None);
}

#[test]
fn test_cli_render_edge_colors() {
    let seed = temp_file(SEED_JSON);
    let output = run_sgraph(&["render", "--file", path_str(&seed), "--edge", "4", "3"]);
    assert_success(&output);
    let render = stdout_json(&output);

    assert_eq!(link_color(&render, 3, 4).as_deref(), Some("orange"));
    assert_eq!(link_color(&render, 1, 2), None);
    assert_eq!(node_color(&render, 3).as_deref(), Some("red"));
    assert_eq!(node_color(&render, 4).as_deref(), Some("red"));
    assert_eq!(node_color(&render, 1), None);
}

#[test]
fn test_cli_render_unknown_highlight_exits_not_found() {
    let seed = temp_file(SEED_JSON);
    let output = run_sgraph(&["render", "--file", path_str(&seed), "--edge", "1", "3"]);
    assert_exit(&output, 4);
}

// ==================== Configuration ====================

#[test]
fn test_cli_config_supplies_seed_path() {
    let seed = temp_file(SEED_JSON);
    let config = temp_file(&format!("seed_path = {:?}\n", path_str(&seed)));

    let output = run_sgraph(&["--config", path_str(&config), "find", "2"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("Bob"));
}

#[test]
fn test_cli_env_supplies_seed_path() {
    let seed = temp_file(SEED_JSON);
    let output = Command::new(sgraph_bin())
        .args(["find", "3"])
        .env(SEED_ENV_VAR, path_str(&seed))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run sgraph");
    assert_success(&output);
    assert!(stdout_str(&output).contains("Carol"));
}

#[test]
fn test_cli_invalid_config_exits_parse_error() {
    let config = temp_file("random_nodes = \"many\"\n");
    let output = run_sgraph(&["--config", path_str(&config), "generate"]);
    assert_exit(&output, 2);
}
