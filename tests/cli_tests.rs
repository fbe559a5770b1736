//! CLI integration tests

mod support;

use support::{Fixture, git, run_cli, run_cli_with_env};
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["--help"], temp_dir.path());

    assert_eq!(output.status, 0);
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("Commands:"));
    assert!(output.stdout.contains("--no-rebase"));
}

#[test]
fn test_sync_with_message_prints_commit_reference() {
    let fixture = Fixture::new();
    fixture.write("README.md", "# Test Repository\n\ntypo fixed\n");

    let output = run_cli(&["fix typo"], &fixture.work);

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    let short_id = git(&fixture.work, &["rev-parse", "--short", "HEAD"]);
    assert!(output.stdout.contains(&format!("{short_id} fix typo")));
    assert_eq!(fixture.remote_subjects("main")[0], "fix typo");
}

#[test]
fn test_message_matching_subcommand_name_after_double_dash() {
    let fixture = Fixture::new();
    fixture.write("app.py", "print('hello')\n");

    let output = run_cli(&["--", "init"], &fixture.work);

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    assert_eq!(fixture.remote_subjects("main")[0], "init");
    assert!(!fixture.work.join("reposync.yaml").exists());
    assert_eq!(fixture.porcelain(), "");
}

#[test]
fn test_message_matching_subcommand_name_via_sync() {
    let fixture = Fixture::new();
    fixture.write("app.py", "print('hello')\n");

    let output = run_cli(&["sync", "status"], &fixture.work);

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    assert_eq!(fixture.remote_subjects("main")[0], "status");
}

#[test]
fn test_help_documents_double_dash_for_messages() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["--help"], temp_dir.path());

    assert_eq!(output.status, 0);
    assert!(output.stdout.contains("reposync -- <MESSAGE>"));
}

#[test]
fn test_sync_subcommand_with_directory_flag() {
    let fixture = Fixture::new();
    fixture.write("notes.txt", "hello\n");
    let elsewhere = TempDir::new().unwrap();

    let output = run_cli(
        &["sync", "-C", fixture.work.to_str().unwrap(), "add notes"],
        elsewhere.path(),
    );

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    assert_eq!(fixture.remote_subjects("main")[0], "add notes");
}

#[test]
fn test_sync_without_arguments_uses_generated_message() {
    let fixture = Fixture::new();
    fixture.write("notes.txt", "hello\n");

    let output = run_cli(&[], &fixture.work);

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    assert!(fixture.remote_subjects("main")[0].starts_with("auto update "));
}

#[test]
fn test_sync_prints_redeploy_hint_from_config() {
    let fixture = Fixture::new();
    fixture.write(
        "reposync.yaml",
        "redeploy_hint: Reboot the screening app now\n",
    );

    let output = run_cli(&["add config"], &fixture.work);

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Reboot the screening app now"));
}

#[test]
fn test_nothing_to_publish_exits_zero() {
    let fixture = Fixture::new();

    let output = run_cli(&[], &fixture.work);

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Nothing to publish"));
    assert!(output.stdout.contains("Initial commit"));
}

#[test]
fn test_conflict_exits_nonzero_with_instructions() {
    let fixture = Fixture::new();
    let peer = fixture.clone_peer("peer");
    fixture.push_from(&peer, "README.md", "# Peer heading\n", "peer edit");
    fixture.write("README.md", "# Local heading\n");

    let output = run_cli(&["local edit"], &fixture.work);

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("git rebase --continue"));
    assert!(output.stderr.contains("git rebase --abort"));
    assert_eq!(fixture.remote_subjects("main")[0], "peer edit");
}

#[test]
fn test_push_rejected_exits_nonzero() {
    let fixture = Fixture::new();
    let peer = fixture.clone_peer("peer");
    fixture.push_from(&peer, "peer.txt", "from peer\n", "peer change");
    fixture.write("local.txt", "from work\n");

    let output = run_cli(&["--no-rebase", "local change"], &fixture.work);

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("rejected"));
}

#[test]
fn test_not_a_repository_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(&["message"], temp_dir.path());

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("not inside a git repository"));
}

#[test]
fn test_missing_git_binary_exits_nonzero() {
    let fixture = Fixture::new();
    fixture.write("README.md", "# changed\n");

    let output = run_cli_with_env(
        &["never committed"],
        &fixture.work,
        &[("REPOSYNC_GIT", "reposync-test-no-such-git")],
    );

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("git is not available"));
    assert_eq!(fixture.porcelain(), "M README.md");
}

#[test]
fn test_invalid_remote_argument() {
    let fixture = Fixture::new();

    let output = run_cli(&["--remote", "bad remote"], &fixture.work);

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("Invalid value 'bad remote' for remote"));
}

#[test]
fn test_missing_explicit_config() {
    let fixture = Fixture::new();

    let output = run_cli(&["--config", "missing.yaml"], &fixture.work);

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("Failed to read config file"));
}

#[test]
fn test_status_json() {
    let fixture = Fixture::new();
    fixture.write("untracked.txt", "new\n");

    let output = run_cli(&["status", "--json"], &fixture.work);

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    let json: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(json["branch"], "main");
    assert_eq!(json["remote"], "origin");
    assert_eq!(json["untracked"], 1);
    assert_eq!(json["staged"], 0);
    assert_eq!(json["unpublished"], 0);
    assert_eq!(json["head"]["subject"], "Initial commit");
    assert_eq!(json["rebase"], true);
}

#[test]
fn test_status_human_readable() {
    let fixture = Fixture::new();

    let output = run_cli(&["status"], &fixture.work);

    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Branch: main"));
    assert!(output.stdout.contains("Nothing to publish"));
}

#[test]
fn test_init_writes_config_once() {
    let fixture = Fixture::new();

    let first = run_cli(&["init"], &fixture.work);
    assert_eq!(first.status, 0, "stderr: {}", first.stderr);
    let content = std::fs::read_to_string(fixture.work.join("reposync.yaml")).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("remote: origin"));

    let second = run_cli(&["init"], &fixture.work);
    assert_eq!(second.status, 1);
    assert!(second.stderr.contains("already exists"));

    let forced = run_cli(&["init", "--overwrite"], &fixture.work);
    assert_eq!(forced.status, 0);
}
