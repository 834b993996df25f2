//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"
env:
  SRC_LOG_LEVEL: info
commands:
  frontend:
    cmd: ./dev/frontend.sh
  gitserver:
    cmd: ./dev/gitserver.sh
commandsets:
  oss: [frontend, gitserver]
  enterprise:
    commands: [frontend, executor]
    checks: [docker]
tests:
  backend:
    cmd: go test ./...
checks:
  docker:
    cmd: docker info
"#;

fn repo() -> TempDir {
    let tmp = TempDir::new().expect("temp repo");
    fs::create_dir(tmp.path().join(".git")).expect("mkdir .git");
    fs::write(tmp.path().join("devtask.yaml"), CONFIG).expect("write config");
    tmp
}

fn devtask(repo: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("devtask"));
    cmd.current_dir(repo.path())
        .env_remove("DEVTASK_CONFIG")
        .env_remove("DEVTASK_OVERWRITE")
        .env_remove("DEVTASK_REPO_ROOT");
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("devtask"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("devtask"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("devtask"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("db"));
}

#[test]
fn test_list_commands_discovers_repo_root() {
    let repo = repo();
    let sub = repo.path().join("dev");
    fs::create_dir(&sub).expect("mkdir dev");

    let mut cmd = devtask(&repo);
    cmd.current_dir(&sub).args(["list", "commands"]);
    cmd.assert().success().stdout("frontend\ngitserver\n");
}

#[test]
fn test_list_env_applies_overwrite() {
    let repo = repo();
    fs::write(repo.path().join("devtask.overwrite.yaml"), "env:\n  SRC_LOG_LEVEL: debug\n")
        .expect("write overwrite");

    let mut cmd = devtask(&repo);
    cmd.args(["list", "env"]);
    cmd.assert().success().stdout("SRC_LOG_LEVEL=debug\n");
}

#[test]
fn test_show_commandset_flags_undefined_members() {
    let repo = repo();
    let mut cmd = devtask(&repo);
    cmd.args(["show", "enterprise"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  frontend\n"))
        .stdout(predicate::str::contains("  executor (undefined)\n"))
        .stdout(predicate::str::contains("Checks:\n  docker\n"));
}

#[test]
fn test_show_unknown_commandset_fails() {
    let repo = repo();
    let mut cmd = devtask(&repo);
    cmd.args(["show", "nope"]);
    cmd.assert().failure().stderr(predicate::str::contains("Unknown commandset 'nope'"));
}

#[test]
fn test_config_json_output() {
    let repo = repo();
    let mut cmd = devtask(&repo);
    cmd.args(["config", "--format", "json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"commandsets\""))
        .stdout(predicate::str::contains("\"checks\": [\n        \"docker\""));
}

#[test]
fn test_broken_config_reports_file() {
    let repo = repo();
    fs::write(repo.path().join("devtask.yaml"), "commandsets:\n  oss: 42\n").expect("write");

    let mut cmd = devtask(&repo);
    cmd.args(["list"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load task configuration"))
        .stderr(predicate::str::contains("devtask.yaml"));
}

#[test]
fn test_db_list_marks_default() {
    let repo = repo();
    let mut cmd = devtask(&repo);
    cmd.args(["db", "list"]);
    cmd.assert().success().stdout("codeinsights\ncodeintel\nfrontend (default)\n");
}

#[test]
fn test_db_info_reads_migrations_directory() {
    let repo = repo();
    let dir = repo.path().join("migrations").join("codeintel");
    fs::create_dir_all(dir.join("1000000000_init")).expect("mkdir");

    let mut cmd = devtask(&repo);
    cmd.args(["db", "info", "codeintel"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Migrations table: codeintel_schema_migrations"))
        .stdout(predicate::str::contains("  1000000000_init"));
}

#[test]
fn test_db_info_unknown_name_fails() {
    let repo = repo();
    let mut cmd = devtask(&repo);
    cmd.args(["--root", repo.path().to_str().expect("utf8 path"), "db", "info", "Frontend"]);
    cmd.assert().failure().stderr(predicate::str::contains("Unknown database 'Frontend'"));
}

#[test]
fn test_db_list_without_repository_root_aborts() {
    let dir = TempDir::new().expect("temp dir");
    // The temp dir could live under a checkout; then there is a root to find.
    if devtask::root::find_repository_root(dir.path()).is_ok() {
        return;
    }

    let mut cmd = devtask(&dir);
    cmd.args(["db", "list"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not resolve the migrations directory"));
}

#[test]
fn test_repo_root_env_pins_registry() {
    let pinned = TempDir::new().expect("pinned root");
    let dir = pinned.path().join("migrations").join("frontend").join("1000000000_init");
    fs::create_dir_all(dir).expect("mkdir migrations");

    let elsewhere = TempDir::new().expect("cwd");
    let mut cmd = devtask(&elsewhere);
    cmd.env("DEVTASK_REPO_ROOT", pinned.path()).args(["db", "info"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database: frontend"))
        .stdout(predicate::str::contains("  1000000000_init"));
}

#[test]
fn test_show_commandset_with_numeric_members() {
    let repo = repo();
    fs::write(repo.path().join("devtask.yaml"), "commandsets:\n  ports: [frontend, 3080]\n")
        .expect("write config");

    let mut cmd = devtask(&repo);
    cmd.args(["show", "ports"]);
    cmd.assert().success().stdout(predicate::str::contains("  3080 (undefined)\n"));
}
