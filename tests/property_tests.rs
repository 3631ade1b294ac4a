//! Property-based tests for the failure counter
//!
//! These tests use proptest to verify the counting invariant across many
//! randomly generated pass/fail patterns: after a full run, the failure
//! count equals exactly the number of failing cases, independent of which
//! specific cases fail or where they sit in the order.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use proptest::prelude::*;

use alltests::exec::{CommandRunner, CommandSpec, ExecError};
use alltests::runner::{verdict, TestRunner, ALL_PASSED, SOME_FAILED};

// The working directory is process-global; serialize the tests that change it.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// A runner scripted by case index: `./case<i>_test` passes iff
/// `outcomes[i]` is true. No real process is spawned.
struct PatternRunner {
    outcomes: Vec<bool>,
}

impl CommandRunner for PatternRunner {
    fn run(&self, command: &CommandSpec) -> Result<bool, ExecError> {
        let index: usize = command
            .program
            .trim_start_matches("./case")
            .trim_end_matches("_test")
            .parse()
            .unwrap();
        Ok(self.outcomes[index])
    }
}

fn scratch_root(case_count: usize) -> PathBuf {
    let root = env::temp_dir().join(format!("alltests_prop_{}", std::process::id()));
    let _ = fs::remove_dir_all(&root);
    for i in 0..case_count {
        fs::create_dir_all(root.join(format!("case{i}"))).unwrap();
    }
    if case_count == 0 {
        fs::create_dir_all(&root).unwrap();
    }
    root
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: fail_count() == number of failing cases, for any pattern.
    #[test]
    fn fail_count_equals_number_of_failures(outcomes in prop::collection::vec(any::<bool>(), 0..8)) {
        let _lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let root = scratch_root(outcomes.len());
        let before = env::current_dir().unwrap();
        env::set_current_dir(&root).unwrap();
        let run_root = env::current_dir().unwrap();

        let exec = PatternRunner { outcomes: outcomes.clone() };
        let mut runner = TestRunner::new(&exec);
        for i in 0..outcomes.len() {
            runner.run_test_case(&format!("case{i}"));
        }

        let expected = outcomes.iter().filter(|passed| !**passed).count() as u32;
        prop_assert_eq!(runner.fail_count(), expected);
        prop_assert_eq!(runner.all_passed(), expected == 0);

        // The verdict is derived from the counter alone
        let expected_verdict = if expected == 0 { ALL_PASSED } else { SOME_FAILED };
        prop_assert_eq!(verdict(runner.fail_count()), expected_verdict);

        // Net-zero working-directory effect
        prop_assert_eq!(env::current_dir().unwrap(), run_root);

        env::set_current_dir(&before).unwrap();
        let _ = fs::remove_dir_all(&root);
    }
}
