#[allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let dir = TempDir::new().expect("create tempdir");
        Self { dir }
    }

    fn home(&self) -> std::path::PathBuf {
        self.dir.path().join("data")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskloop").expect("binary");
        cmd.current_dir(self.dir.path())
            .env("TASKLOOP_HOME", self.home())
            .env("TASKLOOP_REMOTE_LATENCY_MS", "0")
            .env_remove("RUST_LOG");
        cmd
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).output().expect("run");
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn run_ok(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], true, "expected success=true: {v}");
        v
    }

    fn run_err(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], false, "expected success=false: {v}");
        v
    }
}

fn listed(v: &Value) -> Vec<(String, String, bool)> {
    v["data"]["view"]["view_state"]["tasks"]
        .as_array()
        .map(|tasks| {
            tasks
                .iter()
                .map(|t| {
                    (
                        t["id"].as_str().unwrap().to_string(),
                        t["title"].as_str().unwrap().to_string(),
                        t["completed"].as_bool().unwrap(),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

fn notice_kinds(v: &Value) -> Vec<String> {
    v["data"]["notices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["kind"].as_str().unwrap().to_string())
        .collect()
}

fn setup(env: &TestEnv) -> Value {
    env.run_ok(&["init"]);
    env.run_ok(&["list"])
}

// ─── 1. init ───────────────────────────────────────────────────────

#[test]
fn test_init_creates_data_dir() {
    let env = TestEnv::new();
    let v = env.run_ok(&["init"]);
    assert!(v["data"]["path"].as_str().unwrap().ends_with("data"));
    assert!(env.home().join("tasks.db").exists());
    assert!(env.home().join("config.json").exists());
}

#[test]
fn test_init_idempotent() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.run_ok(&["init"]);
}

#[test]
fn test_init_required_before_commands() {
    let env = TestEnv::new();
    let v = env.run_err(&["list"]);
    assert_eq!(v["error"]["code"], "NOT_INITIALIZED");
}

// ─── 2. list / refresh ─────────────────────────────────────────────

#[test]
fn test_first_list_pulls_remote_tasks() {
    let env = TestEnv::new();
    let v = setup(&env);
    assert_eq!(v["data"]["view"]["loading"], false);
    assert_eq!(
        listed(&v),
        vec![
            ("1234".into(), "Build tower in Pisa".into(), false),
            ("4321".into(), "Finish bridge in Tacoma".into(), false),
        ]
    );
    assert!(env.home().join("state.json").exists());
}

#[test]
fn test_list_without_remote_seed_is_empty() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    fs::write(env.home().join("config.json"), r#"{"seed_remote": false}"#).unwrap();
    let v = env.run_ok(&["list"]);
    assert_eq!(v["data"]["view"]["view_state"]["state"], "empty_tasks");
    assert_eq!(
        v["data"]["view"]["view_state"]["message"],
        "You have no TO-DOs!"
    );
}

#[test]
fn test_filter_is_remembered() {
    let env = TestEnv::new();
    setup(&env);
    env.run_ok(&["complete", "1234"]);

    let v = env.run_ok(&["list", "--filter", "completed"]);
    assert_eq!(v["data"]["view"]["filter_label"], "Completed");
    assert_eq!(listed(&v).len(), 1);

    let v = env.run_ok(&["list"]);
    assert_eq!(v["data"]["view"]["filter_label"], "Completed");

    let v = env.run_ok(&["list", "--filter", "active"]);
    assert_eq!(listed(&v), vec![("4321".into(), "Finish bridge in Tacoma".into(), false)]);
}

#[test]
fn test_refresh_keeps_local_tasks() {
    let env = TestEnv::new();
    setup(&env);
    env.run_ok(&["add", "Local only"]);
    let v = env.run_ok(&["refresh"]);
    assert_eq!(listed(&v).len(), 3);
}

// ─── 3. complete / activate / clear-completed ─────────────────────

#[test]
fn test_complete_and_activate() {
    let env = TestEnv::new();
    setup(&env);

    let v = env.run_ok(&["complete", "1234"]);
    assert_eq!(notice_kinds(&v), vec!["MARKED_COMPLETE"]);
    assert!(listed(&v)[0].2);

    let v = env.run_ok(&["activate", "1234"]);
    assert_eq!(notice_kinds(&v), vec!["MARKED_ACTIVE"]);
    assert!(!listed(&v)[0].2);
}

#[test]
fn test_complete_unknown_task() {
    let env = TestEnv::new();
    setup(&env);
    let v = env.run_err(&["complete", "nope"]);
    assert_eq!(v["error"]["code"], "TASK_NOT_FOUND");
}

#[test]
fn test_clear_completed() {
    let env = TestEnv::new();
    setup(&env);
    env.run_ok(&["complete", "1234"]);

    let v = env.run_ok(&["clear-completed"]);
    assert_eq!(notice_kinds(&v), vec!["CLEARED_COMPLETED"]);
    assert_eq!(listed(&v), vec![("4321".into(), "Finish bridge in Tacoma".into(), false)]);

    // Cleared from the remote too, so a refresh does not bring it back.
    let v = env.run_ok(&["refresh"]);
    assert_eq!(listed(&v).len(), 1);

    // Nothing left to clear: no feedback.
    let v = env.run_ok(&["clear-completed"]);
    assert!(notice_kinds(&v).is_empty());
}

// ─── 4. add / edit ─────────────────────────────────────────────────

#[test]
fn test_add_trims_and_confirms() {
    let env = TestEnv::new();
    setup(&env);
    let v = env.run_ok(&["add", "  Buy milk ", "--description", " 2 litres "]);
    assert_eq!(notice_kinds(&v), vec!["SAVED_SUCCESSFULLY"]);

    let tasks = listed(&v);
    assert_eq!(tasks.len(), 3);
    let (id, title, completed) = &tasks[2];
    assert_eq!(title, "Buy milk");
    assert!(!completed);

    let v = env.run_ok(&["show", id]);
    assert_eq!(v["data"]["task"]["description"], "2 litres");
}

#[test]
fn test_add_empty_is_rejected() {
    let env = TestEnv::new();
    setup(&env);
    let v = env.run_err(&["add", "   "]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(v["error"]["message"], "TO-DOs cannot be empty");

    let v = env.run_ok(&["list"]);
    assert_eq!(listed(&v).len(), 2);
}

#[test]
fn test_add_description_only_uses_description_as_title() {
    let env = TestEnv::new();
    setup(&env);
    let v = env.run_ok(&["add", "", "--description", "just words"]);
    assert_eq!(listed(&v)[2].1, "just words");
}

#[test]
fn test_edit_keeps_completion() {
    let env = TestEnv::new();
    setup(&env);
    env.run_ok(&["complete", "1234"]);

    let v = env.run_ok(&["edit", "1234", "--title", " Leaning tower "]);
    assert_eq!(v["data"]["task"]["title"], "Leaning tower");
    assert_eq!(
        v["data"]["task"]["description"],
        "Ground looks good, no foundation work required."
    );
    assert_eq!(v["data"]["task"]["completed"], true);
}

#[test]
fn test_edit_unknown_task() {
    let env = TestEnv::new();
    setup(&env);
    let v = env.run_err(&["edit", "nope", "--title", "x"]);
    assert_eq!(v["error"]["code"], "TASK_NOT_FOUND");
}

// ─── 5. show / toggle / delete ─────────────────────────────────────

#[test]
fn test_show() {
    let env = TestEnv::new();
    setup(&env);
    let v = env.run_ok(&["show", "4321"]);
    assert_eq!(v["data"]["task"]["title"], "Finish bridge in Tacoma");
    assert_eq!(v["data"]["deleted"], false);
    assert!(notice_kinds(&v).is_empty());
}

#[test]
fn test_toggle_flips_completion() {
    let env = TestEnv::new();
    setup(&env);

    let v = env.run_ok(&["toggle", "4321"]);
    assert_eq!(notice_kinds(&v), vec!["MARKED_COMPLETE"]);
    assert_eq!(v["data"]["task"]["completed"], true);

    let v = env.run_ok(&["toggle", "4321"]);
    assert_eq!(notice_kinds(&v), vec!["MARKED_ACTIVE"]);
    assert_eq!(v["data"]["task"]["completed"], false);
}

#[test]
fn test_toggle_is_seen_by_the_list() {
    let env = TestEnv::new();
    setup(&env);
    env.run_ok(&["toggle", "4321"]);
    let v = env.run_ok(&["list"]);
    assert!(listed(&v)[1].2);
}

#[test]
fn test_delete() {
    let env = TestEnv::new();
    setup(&env);
    let v = env.run_ok(&["delete", "1234"]);
    assert_eq!(v["data"]["deleted"], true);
    assert_eq!(v["data"]["navigation"][0]["to"], "back");

    let v = env.run_err(&["show", "1234"]);
    assert_eq!(v["error"]["code"], "TASK_NOT_FOUND");

    let v = env.run_ok(&["list"]);
    assert_eq!(listed(&v).len(), 1);
}

// ─── 6. stats ──────────────────────────────────────────────────────

#[test]
fn test_stats() {
    let env = TestEnv::new();
    setup(&env);
    env.run_ok(&["complete", "1234"]);
    let v = env.run_ok(&["stats"]);
    assert_eq!(v["data"]["state"], "loaded");
    assert_eq!(v["data"]["active_count"], 1);
    assert_eq!(v["data"]["completed_count"], 1);
}

#[test]
fn test_stats_before_any_list_is_empty() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.cmd()
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks."));
}

// ─── 7. text output / exit codes ───────────────────────────────────

#[test]
fn test_text_list_output() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env.cmd()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All tasks"))
        .stdout(predicate::str::contains("[ ] Build tower in Pisa (1234)"));
}

#[test]
fn test_text_show_untitled_task_uses_description() {
    let env = TestEnv::new();
    setup(&env);
    let v = env.run_ok(&["add", "", "--description", "just words"]);
    let (id, _, _) = listed(&v)[2].clone();

    env.cmd()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Task: just words ({id})")))
        .stdout(predicate::str::contains("Task:  (").not());
}

#[test]
fn test_text_error_goes_to_stderr() {
    let env = TestEnv::new();
    env.cmd()
        .args(["list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("taskloop init"));
}

#[test]
fn test_text_feedback_is_printed() {
    let env = TestEnv::new();
    setup(&env);
    env.cmd()
        .args(["complete", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task marked complete"))
        .stdout(predicate::str::contains("[x] Build tower in Pisa"));
}

#[test]
fn test_corrupt_state_is_ignored() {
    let env = TestEnv::new();
    setup(&env);
    fs::write(env.home().join("state.json"), "{oops").unwrap();
    let v = env.run_ok(&["list"]);
    assert_eq!(listed(&v).len(), 2);
}

#[test]
fn test_bad_latency_env_is_a_config_error() {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    let output = env
        .cmd()
        .env("TASKLOOP_REMOTE_LATENCY_MS", "soon")
        .args(["list", "--json"])
        .output()
        .expect("run");
    let v: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["error"]["code"], "CONFIG_ERROR");
    assert_eq!(output.status.code(), Some(1));
}
