use crate::checks;
use crate::pattern::KeyPattern;
use labelguard_types::{ImageEntry, LabelConstraint, LabelMapping};

/// Evaluate every constraint of one image against its fetched labels.
///
/// Constraints within an image run sequentially; callers may evaluate
/// distinct images concurrently because each call mutates only the entry it
/// was handed.
pub fn evaluate_image(entry: &mut ImageEntry, labels: &LabelMapping) {
    for (key, constraint) in entry.label_constraints.iter_mut() {
        evaluate_constraint(key, constraint, labels);
    }
}

/// Evaluate one constraint, dispatching on the matching mode its key encodes.
///
/// Count mode and literal mode are exclusive: a `%`-pattern key only ever
/// drives the count check, a bare key runs the up-to-three literal checks.
pub fn evaluate_constraint(key: &str, constraint: &mut LabelConstraint, labels: &LabelMapping) {
    let pattern = KeyPattern::parse(key);
    log::debug!("evaluate {key:?} as {pattern:?}");

    match pattern {
        KeyPattern::Literal(label_key) => {
            if constraint.exists.is_some() {
                checks::exists::run(label_key, constraint, labels);
            }
            if constraint.compare_semver.is_some() {
                checks::semver::run(label_key, constraint, labels);
            }
            if constraint.compare_string.is_some() {
                checks::string::run(label_key, constraint, labels);
            }
        }
        pattern => {
            if constraint.count.is_some() {
                checks::count::run(&pattern, constraint, labels);
            }
        }
    }
}
