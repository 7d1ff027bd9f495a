#![cfg(unix)]

// End-to-end runs of the boom binary against a temporary JSON store.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn store_path(&self) -> PathBuf {
        self.dir.path().join("boom.json")
    }

    fn seed(&self, json: &str) {
        fs::write(self.store_path(), json).unwrap();
    }

    fn stored(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.store_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    fn boom(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("boom").unwrap();
        cmd.args(args)
            .env("BOOM_FILE", self.store_path())
            .env("BOOM_CONFIG", self.dir.path().join("missing-config.toml"))
            .env("BOOM_CLIPBOARD", "cat")
            .env("BOOM_BROWSER", "test -n")
            .env_remove("BOOM_BACKEND")
            .env_remove("BOOM_LOG");
        cmd
    }
}

fn modified(path: &Path) -> std::time::SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

#[test]
fn empty_store_shows_onboarding() {
    let sandbox = Sandbox::new();
    sandbox
        .boom(&[])
        .assert()
        .success()
        .stdout(predicate::str::contains("You don't have anything yet!"));
    assert!(!sandbox.store_path().exists());
}

#[test]
fn single_word_creates_list() {
    let sandbox = Sandbox::new();
    sandbox
        .boom(&["mylist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created a new list called mylist"));

    assert_eq!(sandbox.stored(), serde_json::json!({ "mylist": {} }));
}

#[test]
fn add_item_overwrites_value() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"mylist":{"a":"1"}}"#);

    sandbox
        .boom(&["mylist", "a", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a in mylist is 2"));

    assert_eq!(sandbox.stored()["mylist"]["a"], "2");
}

#[test]
fn delete_item_keeps_list() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"mylist":{"a":"1"}}"#);

    sandbox
        .boom(&["mylist", "a", "delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a is gone forever"));

    assert_eq!(sandbox.stored(), serde_json::json!({ "mylist": {} }));
}

#[test]
fn declined_list_delete_leaves_file_untouched() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"mylist":{"a":"1"}}"#);
    let before = modified(&sandbox.store_path());

    sandbox
        .boom(&["mylist", "delete"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You sure you want to delete everything in mylist?"));

    assert_eq!(
        fs::read_to_string(sandbox.store_path()).unwrap(),
        r#"{"mylist":{"a":"1"}}"#
    );
    assert_eq!(modified(&sandbox.store_path()), before);
}

#[test]
fn confirmed_list_delete_removes_list() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"mylist":{"a":"1"},"other":{}}"#);

    sandbox
        .boom(&["mylist", "delete"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted all your mylist"));

    assert_eq!(sandbox.stored(), serde_json::json!({ "other": {} }));
}

#[test]
fn echo_prints_value_only() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"mylist":{"a":"1"}}"#);

    sandbox
        .boom(&["echo", "a"])
        .assert()
        .success()
        .stdout("1\n");

    sandbox
        .boom(&["echo", "mylist", "a"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn item_name_copies_value() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"urls":{"gh":"https://github.com"}}"#);

    sandbox
        .boom(&["gh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("We just copied gh to your clipboard"))
        .stdout(predicate::str::contains("https://github.com").not());
}

#[cfg(target_os = "linux")]
#[test]
fn echo_into_full_device_exits_non_zero() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"mylist":{"a":"1"}}"#);
    let full = fs::OpenOptions::new().write(true).open("/dev/full").unwrap();

    let status = std::process::Command::new(assert_cmd::cargo::cargo_bin("boom"))
        .args(["echo", "a"])
        .env("BOOM_FILE", sandbox.store_path())
        .env("BOOM_CONFIG", sandbox.dir.path().join("missing-config.toml"))
        .env_remove("BOOM_BACKEND")
        .env_remove("BOOM_LOG")
        .stdout(full)
        .stderr(std::process::Stdio::null())
        .status()
        .unwrap();

    assert!(!status.success());
}

#[test]
fn open_uses_browser_command() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"urls":{"gh":"https://github.com"}}"#);

    sandbox
        .boom(&["open", "gh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("We just opened https://github.com"));
}

#[test]
fn failing_clipboard_exits_non_zero() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"urls":{"gh":"https://github.com"}}"#);

    sandbox
        .boom(&["gh"])
        .env("BOOM_CLIPBOARD", "false")
        .assert()
        .failure();
}

#[test]
fn unknown_key_in_list_fails() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"mylist":{"a":"1"}}"#);

    sandbox
        .boom(&["mylist", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key missing in list mylist"));
}

#[test]
fn missing_global_key_fails() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"mylist":{"a":"1"}}"#);

    sandbox
        .boom(&["echo", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Couldn't find key: nope"));
}

#[test]
fn corrupt_store_fails_without_writing() {
    let sandbox = Sandbox::new();
    sandbox.seed("{ definitely not json");

    sandbox.boom(&["newlist"]).assert().failure();

    assert_eq!(
        fs::read_to_string(sandbox.store_path()).unwrap(),
        "{ definitely not json"
    );
}

#[test]
fn help_keyword_beats_list_named_help() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"help":{"k":"v"}}"#);

    sandbox
        .boom(&["help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("boom: help"))
        .stdout(predicate::str::contains("k: v").not());
}

#[test]
fn all_and_overview_list_items() {
    let sandbox = Sandbox::new();
    sandbox.seed(r#"{"urls":{"gh":"https://github.com","docs":"https://docs.rs"}}"#);

    sandbox
        .boom(&[])
        .assert()
        .success()
        .stdout("  urls (2)\n");

    sandbox
        .boom(&["all"])
        .assert()
        .success()
        .stdout("  urls\n    docs: https://docs.rs\n    gh: https://github.com\n");
}

#[test]
fn storage_reports_json_file() {
    let sandbox = Sandbox::new();
    sandbox
        .boom(&["storage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You're currently using JSON"));
}

#[test]
fn version_prints_crate_version() {
    let sandbox = Sandbox::new();
    sandbox
        .boom(&["version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn invalid_backend_is_config_error() {
    let sandbox = Sandbox::new();
    sandbox
        .boom(&[])
        .env("BOOM_BACKEND", "redis")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid storage backend"));
}
