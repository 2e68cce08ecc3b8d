use crate::common::repository::{TestRepository, repository};
use pit::artifacts::branch::HeadState;
use pit::artifacts::branch::branch_name::BranchName;
use pit::{ErrorKind, PitError};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn branch(name: &str) -> BranchName {
    BranchName::try_parse(name).expect("valid branch name")
}

fn listing(repository: &TestRepository) -> Vec<(String, bool)> {
    repository
        .repository
        .list_branches()
        .unwrap()
        .into_iter()
        .map(|listing| (listing.name.to_string(), listing.active))
        .collect()
}

#[rstest]
fn init_registers_master_at_sentinel(repository: TestRepository) {
    assert_eq!(listing(&repository), vec![("master".to_string(), true)]);
    assert_eq!(
        repository.repository.refs().head_state().unwrap(),
        HeadState::Attached(branch("master"))
    );
    assert!(repository.head().is_sentinel());
    assert!(repository.tracked().is_empty());
}

#[rstest]
fn init_twice_fails(repository: TestRepository) {
    let err = repository.repository.init().unwrap_err();

    assert!(matches!(err, PitError::AlreadyInitialized { .. }));
    assert_eq!(err.kind(), ErrorKind::State);
}

#[rstest]
fn open_uninitialized_directory_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    let err = pit::Repository::open(dir.path(), Box::new(std::io::sink()))
        .err()
        .expect("opening must fail");

    assert!(matches!(err, PitError::NotARepository { .. }));
}

#[rstest]
fn open_missing_directory_creates_nothing() {
    let dir = assert_fs::TempDir::new().unwrap();
    let missing = dir.path().join("nowhere");

    let err = pit::Repository::open(&missing, Box::new(std::io::sink()))
        .err()
        .expect("opening must fail");

    assert!(matches!(err, PitError::NotARepository { .. }));
    assert!(!missing.exists());
}

#[rstest]
fn init_creates_missing_directory() {
    let dir = assert_fs::TempDir::new().unwrap();
    let target = dir.path().join("project");

    let repository = pit::Repository::new(&target, Box::new(std::io::sink())).unwrap();
    repository.init().unwrap();

    assert!(target.join(".pit").is_dir());
    assert!(pit::Repository::open(&target, Box::new(std::io::sink())).is_ok());
}

#[rstest]
fn branches_are_listed_in_creation_order(repository: TestRepository) {
    repository.repository.create_branch("zeta").unwrap();
    repository.repository.create_branch("alpha").unwrap();
    repository.repository.switch_to("master").unwrap();

    assert_eq!(
        listing(&repository),
        vec![
            ("master".to_string(), true),
            ("zeta".to_string(), false),
            ("alpha".to_string(), false),
        ]
    );
    assert_eq!(repository.repository.lookup_branch("master").unwrap(), Some(0));
    assert_eq!(repository.repository.lookup_branch("alpha").unwrap(), Some(2));
    assert_eq!(repository.repository.lookup_branch("beta").unwrap(), None);
}

#[rstest]
fn create_existing_branch_fails(repository: TestRepository) {
    repository.repository.create_branch("feature").unwrap();

    let err = repository.repository.create_branch("feature").unwrap_err();

    assert!(matches!(err, PitError::BranchExists { .. }));
    assert_eq!(listing(&repository).len(), 2);
}

#[rstest]
#[case::empty("")]
#[case::too_long("abcdefghijk")]
#[case::with_space("my branch")]
#[case::with_slash("a/b")]
#[case::double_dot("a..b")]
fn create_branch_with_invalid_name_fails(repository: TestRepository, #[case] name: &str) {
    let err = repository.repository.create_branch(name).unwrap_err();

    assert!(matches!(err, PitError::InvalidBranchName { .. }));
    assert_eq!(listing(&repository).len(), 1);
}

#[rstest]
fn create_branch_attaches_at_current_head(repository: TestRepository) {
    repository.track("a.txt", "a");
    let id = repository.repository.commit("first").unwrap();

    repository.repository.create_branch("feature").unwrap();

    assert_eq!(
        repository.repository.refs().head_state().unwrap(),
        HeadState::Attached(branch("feature"))
    );
    assert_eq!(repository.head(), id);
    assert_eq!(
        repository
            .repository
            .refs()
            .read_branch_head(&branch("feature"))
            .unwrap(),
        id
    );
}

#[rstest]
fn create_branch_keeps_uncommitted_state(repository: TestRepository) {
    repository.track("a.txt", "staged only");

    repository.repository.create_branch("feature").unwrap();

    assert_eq!(repository.tracked(), vec!["a.txt"]);
    assert_eq!(repository.read("a.txt"), "staged only");
}

#[rstest]
fn switch_to_unknown_branch_fails(repository: TestRepository) {
    let err = repository.repository.switch_to("ghost").unwrap_err();

    assert!(matches!(err, PitError::BranchNotFound { .. }));
    assert_eq!(
        repository.repository.refs().head_state().unwrap(),
        HeadState::Attached(branch("master"))
    );
}

#[rstest]
fn branches_are_isolated(repository: TestRepository) {
    repository.track("shared.txt", "base");
    let base = repository.repository.commit("base").unwrap();

    repository.repository.create_branch("b").unwrap();
    repository.track("only-b.txt", "b");
    let on_b = repository.repository.commit("work on b").unwrap();

    repository.repository.switch_to("master").unwrap();

    assert_eq!(repository.head(), base);
    assert_eq!(repository.tracked(), vec!["shared.txt"]);
    assert!(!repository.exists("only-b.txt"));

    repository.write("shared.txt", "changed on master");
    let on_master = repository.repository.commit("work on master").unwrap();
    assert_eq!(
        repository.repository.database().load(&on_master).unwrap().parent(),
        &base
    );

    repository.repository.switch_to("b").unwrap();

    assert_eq!(repository.head(), on_b);
    assert_eq!(repository.tracked(), vec!["shared.txt", "only-b.txt"]);
    assert_eq!(repository.read("shared.txt"), "base");
    assert_eq!(repository.read("only-b.txt"), "b");
}

#[rstest]
fn switch_to_current_branch_restores_committed_files(repository: TestRepository) {
    repository.track("a.txt", "committed");
    let id = repository.repository.commit("first").unwrap();
    repository.write("a.txt", "edited");
    repository.track("x.txt", "staged");

    repository.repository.switch_to("master").unwrap();

    assert_eq!(repository.head(), id);
    assert_eq!(repository.read("a.txt"), "committed");
    assert_eq!(repository.tracked(), vec!["a.txt"]);
    assert!(!repository.exists("x.txt"));
}

#[rstest]
fn switch_to_branch_at_same_commit_reconciles(repository: TestRepository) {
    repository.track("a.txt", "committed");
    let id = repository.repository.commit("first").unwrap();
    repository.repository.create_branch("other").unwrap();
    repository.write("a.txt", "edited");
    repository.track("x.txt", "staged");

    repository.repository.switch_to("master").unwrap();

    assert_eq!(repository.head(), id);
    assert_eq!(
        repository.repository.refs().head_state().unwrap(),
        HeadState::Attached(branch("master"))
    );
    assert_eq!(repository.tracked(), vec!["a.txt"]);
    assert_eq!(repository.read("a.txt"), "committed");
    assert!(!repository.exists("x.txt"));
}
