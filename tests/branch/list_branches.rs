use crate::common::command::{init_repository_dir, run_pit_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_default_branch(init_repository_dir: TempDir) {
    run_pit_command(init_repository_dir.path(), &["branch"])
        .assert()
        .success()
        .stdout("* master\n");
}

#[rstest]
fn list_branches_in_creation_order(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    for name in ["zeta", "alpha"] {
        run_pit_command(dir, &["checkout", "-b", name])
            .assert()
            .success();
    }

    run_pit_command(dir, &["branch"])
        .assert()
        .success()
        .stdout("  master\n  zeta\n* alpha\n");
}

#[rstest]
fn list_branches_while_detached(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_pit_command(dir, &["checkout", &"0".repeat(40)])
        .assert()
        .success();

    run_pit_command(dir, &["branch"])
        .assert()
        .success()
        .stdout("  master\n");
}
