use labelguard_types::{LabelConstraint, LabelMapping, messages};

pub fn run(key: &str, constraint: &mut LabelConstraint, labels: &LabelMapping) {
    let present = labels.contains_key(key);
    constraint.exists_result = present.into();
    constraint.exists_result_message = if present {
        messages::LABEL_FOUND.to_string()
    } else {
        messages::LABEL_NOT_FOUND.to_string()
    };
}
