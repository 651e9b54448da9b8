//! Name resolution through the public registry API.

use sortscope::observer::{Recorder, Silent};
use sortscope::primitives::{Assigner, LessThan, SimpleAssigner, SimpleSwapper, Swapper};
use sortscope::registry::{self, Algorithm, NAMES};
use sortscope::{Error, Sorter};

#[test]
fn unknown_name_is_not_found() {
    let comparator = LessThan::new();
    let assigner = SimpleAssigner::new();
    let swapper = SimpleSwapper::new();
    let recorder = Recorder::new();

    let result = registry::resolve("bogus", &comparator, &assigner, &swapper, &recorder);

    match result {
        Err(Error::UnknownAlgorithm { name }) => assert_eq!(name, "bogus"),
        Ok(_) => panic!("bogus should not resolve"),
    }
    assert!(recorder.is_empty(), "nothing was sorted");
}

#[test]
fn validity_matches_fixed_set() {
    assert!(registry::is_valid_name("merge"));
    assert!(!registry::is_valid_name("bogus"));
    for name in NAMES {
        assert!(registry::is_valid_name(name), "{}", name);
    }
    for name in ["Quick", "parallel-merge", "parallelmerge", "bubble", ""] {
        assert!(!registry::is_valid_name(name), "{}", name);
    }
}

#[test]
fn every_name_resolves_to_a_working_sorter() {
    for name in NAMES {
        let comparator = LessThan::new();
        let assigner = SimpleAssigner::new();
        let swapper = SimpleSwapper::new();
        let mut list = vec![8, 3, 5, 1, 9, 2];

        let sorter = registry::resolve(name, &comparator, &assigner, &swapper, &Silent).unwrap();
        sorter.sort(&mut list);

        assert_eq!(list, vec![1, 2, 3, 5, 8, 9], "{}", name);

        let algorithm: Algorithm = name.parse().unwrap();
        if algorithm.uses_assigner() {
            assert_eq!(swapper.count(), 0, "{}", name);
            assert!(assigner.count() > 0, "{}", name);
        } else {
            assert_eq!(assigner.count(), 0, "{}", name);
            assert!(swapper.count() > 0, "{}", name);
        }
    }
}

#[test]
fn sorter_is_reusable() {
    let comparator = LessThan::new();
    let assigner = SimpleAssigner::new();
    let swapper = SimpleSwapper::new();
    let sorter = registry::resolve("quick", &comparator, &assigner, &swapper, &Silent).unwrap();

    let mut first = vec![2, 1];
    let mut second = vec![3, 1, 2];
    sorter.sort(&mut first);
    sorter.sort(&mut second);

    assert_eq!(first, vec![1, 2]);
    assert_eq!(second, vec![1, 2, 3]);
}
