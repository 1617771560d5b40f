use crate::pattern::KeyPattern;
use labelguard_types::{LabelConstraint, LabelMapping, Outcome};

/// Count the label keys matching the derived pattern and evaluate the first
/// configured condition against that count.
///
/// Conditions are checked in the order `equal`, `lessThan`, `greaterThan`;
/// later ones are ignored when an earlier one is set. `lessThan` passes iff
/// count < target, `greaterThan` iff count > target.
pub fn run(pattern: &KeyPattern<'_>, constraint: &mut LabelConstraint, labels: &LabelMapping) {
    let Some(counter) = constraint.count.as_mut() else {
        return;
    };

    let matcher = match pattern.matcher() {
        Ok(matcher) => matcher,
        Err(err) => {
            constraint.count_result_message = err.to_string();
            return;
        }
    };

    let observed = labels.keys().filter(|key| matcher.is_match(key)).count() as u64;

    let outcome = if let Some(target) = counter.equal {
        let passed = observed == target;
        counter.equal_result = passed.into();
        counter.equal_result_message = if passed {
            format!("{observed} is equal to {target}")
        } else {
            format!("{observed} is not equal to {target}")
        };
        counter.equal_result
    } else if let Some(target) = counter.less_than {
        let passed = observed < target;
        counter.less_than_result = passed.into();
        counter.less_than_result_message = if passed {
            format!("{observed} is less than {target}")
        } else {
            format!("{observed} is not less than {target}")
        };
        counter.less_than_result
    } else if let Some(target) = counter.greater_than {
        let passed = observed > target;
        counter.greater_than_result = passed.into();
        counter.greater_than_result_message = if passed {
            format!("{observed} is greater than {target}")
        } else {
            format!("{observed} is not greater than {target}")
        };
        counter.greater_than_result
    } else {
        Outcome::Unevaluated
    };

    constraint.count_result = outcome;
}
