//! Tests for the git CLI transport against real repositories

use std::fs;

use notes_git::{
    EnumerateMode, Enumerator, GitCli, Transport, TransportConfig, TransportResult, WorkItem,
};
use notes_test_utils::SyncFixture;
use notes_test_utils::git::{commit_subjects, git};

fn transport_for(fixture: &SyncFixture) -> GitCli {
    GitCli::new(TransportConfig::new(fixture.work()))
}

fn items(paths: &[String]) -> Vec<WorkItem> {
    paths.iter().map(|p| WorkItem::from(p.as_str())).collect()
}

#[test]
fn test_stage_twice_is_ok_both_times() {
    let fixture = SyncFixture::new();
    let batch = items(&fixture.write_files("data", 3));
    let mut git = transport_for(&fixture);

    let first = git.stage(&batch);
    let second = git.stage(&batch);

    assert!(first.is_ok(), "{first:?}");
    assert_eq!(first, second);
}

#[test]
fn test_stage_unknown_path_fails_without_panicking() {
    let fixture = SyncFixture::new();
    let mut git = transport_for(&fixture);

    let result = git.stage(&[WorkItem::from("does/not/exist.json")]);

    assert!(result.is_failed());
    assert!(!result.diagnostic().unwrap().is_empty());
}

#[test]
fn test_commit_with_nothing_staged_is_ok_noop() {
    let fixture = SyncFixture::new();
    let mut git = transport_for(&fixture);
    let before = fixture.local_commit_count();

    let result = git.commit("Sync notes batch 1 of 1");

    assert_eq!(result, TransportResult::Ok(String::new()));
    assert_eq!(fixture.local_commit_count(), before);
}

#[test]
fn test_stage_commit_push_reaches_remote() {
    let fixture = SyncFixture::new();
    let batch = items(&fixture.write_files("data/notes", 2));
    let mut git = transport_for(&fixture);

    assert!(git.stage(&batch).is_ok());
    assert!(git.commit("Sync notes batch 1 of 1").is_ok());
    let pushed = git.push();

    assert!(pushed.is_ok(), "{pushed:?}");
    assert_eq!(fixture.remote_commit_count(), 2);
    assert_eq!(
        commit_subjects(fixture.remote(), "main").last().unwrap(),
        "Sync notes batch 1 of 1"
    );
}

#[test]
fn test_push_to_unknown_remote_fails() {
    let fixture = SyncFixture::new();
    let mut git = GitCli::new(TransportConfig::new(fixture.work()).with_remote("nowhere"));

    let result = git.push();

    assert!(result.is_failed());
}

#[test]
fn test_missing_git_binary_is_a_failed_result() {
    let fixture = SyncFixture::new();
    let mut git = GitCli::new(
        TransportConfig::new(fixture.work()).with_git_path("/nonexistent/bin/git-missing"),
    );

    let result = git.push();

    let diagnostic = result.diagnostic().expect("should fail");
    assert!(diagnostic.contains("failed to launch"), "{diagnostic}");
}

#[test]
fn test_empty_stage_is_ok() {
    let fixture = SyncFixture::new();
    let mut git = transport_for(&fixture);

    assert!(git.stage(&[]).is_ok());
}

#[test]
fn test_changed_items_with_pending_removal_stage_and_push() {
    let fixture = SyncFixture::new();
    let work = fixture.work();
    fixture.write_files("data", 2);
    git(work, &["add", "."]);
    git(work, &["commit", "-m", "seed"]);
    git(work, &["push", "-q", "origin", "main"]);

    git(work, &["rm", "-q", "data/item-000.json"]);
    fs::write(work.join("data/item-002.json"), "{}").unwrap();
    let batch = Enumerator::new(work, "data", EnumerateMode::Changed)
        .enumerate()
        .unwrap();
    let mut git_cli = transport_for(&fixture);

    let staged = git_cli.stage(&batch);

    assert!(staged.is_ok(), "{staged:?}");
    assert!(git_cli.commit("Sync notes batch 1 of 1").is_ok());
    assert!(git_cli.push().is_ok());
    assert!(!work.join("data/item-000.json").exists());
    let tree = git(fixture.remote(), &["ls-tree", "-r", "--name-only", "main"]);
    assert!(tree.contains("data/item-002.json"), "{tree}");
    assert!(!tree.contains("data/item-000.json"), "{tree}");
}
