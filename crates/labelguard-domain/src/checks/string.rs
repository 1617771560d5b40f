use labelguard_types::{LabelConstraint, LabelMapping};

/// Literal comparisons against the label value.
///
/// A missing label compares as the empty string, so `equal: ""` on an
/// absent label passes; the existence check is the tool for presence.
pub fn run(key: &str, constraint: &mut LabelConstraint, labels: &LabelMapping) {
    let Some(spec) = constraint.compare_string.as_mut() else {
        return;
    };

    let value = labels.get(key).map(String::as_str).unwrap_or_default();

    if let Some(target) = spec.equal.as_deref() {
        let passed = value == target;
        spec.equal_result = passed.into();
        spec.equal_result_message = if passed {
            format!("{value} and {target} are equal")
        } else {
            format!("{value} and {target} are not equal")
        };
    }

    if let Some(target) = spec.has_prefix.as_deref() {
        let passed = value.starts_with(target);
        spec.has_prefix_result = passed.into();
        spec.has_prefix_result_message = if passed {
            format!("{value} has prefix {target}")
        } else {
            format!("{value} does not have prefix {target}")
        };
    }

    if let Some(target) = spec.has_suffix.as_deref() {
        let passed = value.ends_with(target);
        spec.has_suffix_result = passed.into();
        spec.has_suffix_result_message = if passed {
            format!("{value} has suffix {target}")
        } else {
            format!("{value} does not have suffix {target}")
        };
    }

    constraint.compare_string_result = spec
        .equal_result
        .and(spec.has_prefix_result)
        .and(spec.has_suffix_result);
}
