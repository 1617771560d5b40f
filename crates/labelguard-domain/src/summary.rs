use labelguard_types::{ConstraintSet, Outcome};

/// Group-level outcome counts across a whole annotated document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: u32,
    pub failed: u32,
}

impl Tally {
    pub fn evaluated(&self) -> u32 {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Unevaluated => {}
        }
    }
}

/// Tally the four group-level results of every constraint. Sub-results are
/// deliberately not counted; they roll up into their group already.
pub fn tally(set: &ConstraintSet) -> Tally {
    let mut tally = Tally::default();
    for entry in set.images.values() {
        for constraint in entry.label_constraints.values() {
            tally.record(constraint.exists_result);
            tally.record(constraint.compare_semver_result);
            tally.record(constraint.compare_string_result);
            tally.record(constraint.count_result);
        }
    }
    tally
}
