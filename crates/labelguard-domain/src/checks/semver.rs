use labelguard_types::{LabelConstraint, LabelMapping, Outcome, messages};
use semver::Version;
use std::cmp::Ordering;

/// Compare the label value against the configured version targets.
///
/// Preconditions are group-level: a missing label or an unparseable value
/// fails the whole group and leaves the per-target sub-results untouched.
/// Targets are independent: an unparseable target records its parse error
/// without a result, and the siblings still run.
pub fn run(key: &str, constraint: &mut LabelConstraint, labels: &LabelMapping) {
    let Some(spec) = constraint.compare_semver.as_mut() else {
        return;
    };

    let Some(raw) = labels.get(key) else {
        constraint.compare_semver_result = Outcome::Failed;
        constraint.compare_semver_result_message = messages::LABEL_NOT_FOUND.to_string();
        return;
    };

    let observed = match Version::parse(raw) {
        Ok(version) => version,
        Err(err) => {
            constraint.compare_semver_result = Outcome::Failed;
            constraint.compare_semver_result_message = err.to_string();
            return;
        }
    };

    if let Some(target) = spec.equal.as_deref() {
        match Version::parse(target) {
            Err(err) => spec.equal_result_message = err.to_string(),
            Ok(target) => {
                let passed = observed.cmp_precedence(&target) == Ordering::Equal;
                spec.equal_result = passed.into();
                spec.equal_result_message = if passed {
                    format!("Version {observed} is equal to {target}")
                } else {
                    format!("Version {observed} is not equal to {target}")
                };
            }
        }
    }

    if let Some(target) = spec.greater_than.as_deref() {
        match Version::parse(target) {
            Err(err) => spec.greater_than_result_message = err.to_string(),
            Ok(target) => {
                let passed = observed.cmp_precedence(&target) == Ordering::Greater;
                spec.greater_than_result = passed.into();
                spec.greater_than_result_message = if passed {
                    format!("Version {observed} is greater than {target}")
                } else {
                    format!("Version {observed} is not greater than {target}")
                };
            }
        }
    }

    if let Some(target) = spec.less_than.as_deref() {
        match Version::parse(target) {
            Err(err) => spec.less_than_result_message = err.to_string(),
            Ok(target) => {
                let passed = observed.cmp_precedence(&target) == Ordering::Less;
                spec.less_than_result = passed.into();
                spec.less_than_result_message = if passed {
                    format!("Version {observed} is lower than {target}")
                } else {
                    format!("Version {observed} is not lower than {target}")
                };
            }
        }
    }

    constraint.compare_semver_result = spec
        .equal_result
        .and(spec.greater_than_result)
        .and(spec.less_than_result);
}
