use crate::common::repository::{TestRepository, file_name, repository};
use pit::{ErrorKind, PitError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn add_keeps_first_add_order(repository: TestRepository) {
    repository.track("b.txt", "b");
    repository.track("a.txt", "a");
    repository.track("c.txt", "c");

    assert_eq!(repository.tracked(), vec!["b.txt", "a.txt", "c.txt"]);
}

#[rstest]
fn add_already_tracked_file_leaves_index_untouched(repository: TestRepository) {
    repository.track("a.txt", "a");
    let index_before = repository.index_bytes();

    let err = repository.repository.add("a.txt").unwrap_err();

    assert!(matches!(err, PitError::AlreadyTracked { .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(repository.index_bytes(), index_before);
    assert_eq!(repository.tracked(), vec!["a.txt"]);
}

#[rstest]
#[case::missing("nothing.txt")]
#[case::directory("folder")]
fn add_non_regular_file_fails(repository: TestRepository, #[case] name: &str) {
    std::fs::create_dir(repository.dir.path().join("folder")).unwrap();

    let err = repository.repository.add(name).unwrap_err();

    assert!(matches!(err, PitError::MissingFile { .. }));
    assert!(repository.tracked().is_empty());
}

#[rstest]
#[case::hidden(".hidden")]
#[case::nested("dir/a.txt")]
#[case::empty("")]
fn add_invalid_name_fails(repository: TestRepository, #[case] name: &str) {
    let err = repository.repository.add(name).unwrap_err();

    assert!(matches!(err, PitError::InvalidFileName { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[rstest]
fn add_name_longer_than_limit_fails(repository: TestRepository) {
    let name = "a".repeat(512);

    let err = repository.repository.add(&name).unwrap_err();

    assert!(matches!(err, PitError::InvalidFileName { .. }));
}

#[rstest]
fn rm_excises_entry_and_keeps_working_copy(repository: TestRepository) {
    repository.track("a.txt", "a");
    repository.track("b.txt", "b");
    repository.track("c.txt", "c");

    repository.repository.rm("b.txt").unwrap();

    assert_eq!(repository.tracked(), vec!["a.txt", "c.txt"]);
    assert!(repository.exists("b.txt"));
}

#[rstest]
fn rm_untracked_file_leaves_index_untouched(repository: TestRepository) {
    repository.track("a.txt", "a");
    repository.write("b.txt", "b");
    let index_before = repository.index_bytes();

    let err = repository.repository.rm("b.txt").unwrap_err();

    assert!(matches!(err, PitError::NotTracked { .. }));
    assert_eq!(repository.index_bytes(), index_before);
}

#[rstest]
fn rm_works_after_working_copy_is_gone(repository: TestRepository) {
    repository.track("a.txt", "a");
    repository.delete("a.txt");

    repository.repository.rm("a.txt").unwrap();

    assert!(repository.tracked().is_empty());
}

#[rstest]
fn tracked_files_round_trip_through_disk(repository: TestRepository) {
    repository.track("a.txt", "a");
    repository.track("b.txt", "b");

    let reopened = pit::Repository::open(repository.dir.path(), Box::new(std::io::sink())).unwrap();
    let tracked = reopened.tracked_files().unwrap();

    assert_eq!(tracked, vec![file_name("a.txt"), file_name("b.txt")]);
}

#[rstest]
fn index_contains_no_scratch_leftovers(repository: TestRepository) {
    repository.track("a.txt", "a");
    repository.repository.rm("a.txt").unwrap();

    assert!(
        repository
            .pit_entries()
            .iter()
            .all(|entry| !entry.starts_with("tmp-"))
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn add_sequence_tracks_each_name_once(names in prop::collection::vec("[a-e]\\.txt", 1..12)) {
        let repository = repository();
        let mut expected: Vec<String> = Vec::new();

        for name in &names {
            if !repository.exists(name) {
                repository.write(name, name);
            }

            let result = repository.repository.add(name);
            if expected.contains(name) {
                let is_already_tracked = matches!(result, Err(PitError::AlreadyTracked { .. }));
                prop_assert!(is_already_tracked);
            } else {
                prop_assert!(result.is_ok());
                expected.push(name.clone());
            }
        }

        prop_assert_eq!(repository.tracked(), expected);
    }
}
