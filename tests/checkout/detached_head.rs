use crate::common::command::{
    committed_repository_dir, get_head_commit_id, pit_commit, run_pit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn checkout_commit_detaches_head(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let first = get_head_commit_id(dir);
    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    pit_commit(dir, "Second commit").assert().success();

    run_pit_command(dir, &["checkout", &first])
        .assert()
        .success()
        .stderr(predicate::str::contains("detached HEAD"))
        .stderr(predicate::str::contains(format!(
            "HEAD is now at {} Initial commit",
            &first[..7]
        )));

    committed_repository_dir.child("1.txt").assert("one");
    committed_repository_dir
        .child(".pit")
        .child("current-branch")
        .assert("");
    run_pit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "HEAD detached at {}\n",
            &first[..7]
        )));
}

#[rstest]
fn commit_in_detached_head_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let head = get_head_commit_id(dir);
    run_pit_command(dir, &["checkout", &head])
        .assert()
        .success();

    pit_commit(dir, "Detached commit")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("detached HEAD"));

    assert_eq!(get_head_commit_id(dir), head);
}

#[rstest]
fn moving_between_detached_commits_reports_previous_position(
    committed_repository_dir: TempDir,
) {
    let dir = committed_repository_dir.path();
    let first = get_head_commit_id(dir);
    pit_commit(dir, "Second commit").assert().success();
    let second = get_head_commit_id(dir);

    run_pit_command(dir, &["checkout", &second])
        .assert()
        .success();
    run_pit_command(dir, &["checkout", &first])
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "Previous HEAD position was {} Second commit",
            &second[..7]
        )));
}

#[rstest]
fn checkout_unknown_commit_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let head = get_head_commit_id(dir);

    run_pit_command(dir, &["checkout", &"f".repeat(40)])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));

    assert_eq!(get_head_commit_id(dir), head);
    committed_repository_dir
        .child(".pit")
        .child("current-branch")
        .assert("master\n");
}

#[rstest]
fn checkout_id_length_argument_must_be_hex(committed_repository_dir: TempDir) {
    run_pit_command(committed_repository_dir.path(), &["checkout", &"z".repeat(40)])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid commit id"));
}
