use labelguard_types::{
    CountConstraint, ImageEntry, LabelConstraint, LabelMapping, SemverConstraint, StringConstraint,
};
use std::collections::BTreeMap;

pub fn labels(pairs: &[(&str, &str)]) -> LabelMapping {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

pub fn exists_constraint() -> LabelConstraint {
    LabelConstraint {
        exists: Some(true),
        ..LabelConstraint::default()
    }
}

pub fn semver_constraint(
    equal: Option<&str>,
    greater_than: Option<&str>,
    less_than: Option<&str>,
) -> LabelConstraint {
    LabelConstraint {
        compare_semver: Some(SemverConstraint {
            equal: equal.map(str::to_string),
            greater_than: greater_than.map(str::to_string),
            less_than: less_than.map(str::to_string),
            ..SemverConstraint::default()
        }),
        ..LabelConstraint::default()
    }
}

pub fn string_constraint(
    equal: Option<&str>,
    has_prefix: Option<&str>,
    has_suffix: Option<&str>,
) -> LabelConstraint {
    LabelConstraint {
        compare_string: Some(StringConstraint {
            equal: equal.map(str::to_string),
            has_prefix: has_prefix.map(str::to_string),
            has_suffix: has_suffix.map(str::to_string),
            ..StringConstraint::default()
        }),
        ..LabelConstraint::default()
    }
}

pub fn count_constraint(
    equal: Option<u64>,
    less_than: Option<u64>,
    greater_than: Option<u64>,
) -> LabelConstraint {
    LabelConstraint {
        count: Some(CountConstraint {
            equal,
            less_than,
            greater_than,
            ..CountConstraint::default()
        }),
        ..LabelConstraint::default()
    }
}

pub fn entry(constraints: Vec<(&str, LabelConstraint)>) -> ImageEntry {
    ImageEntry {
        label_constraints: constraints
            .into_iter()
            .map(|(k, c)| (k.to_string(), c))
            .collect::<BTreeMap<_, _>>(),
    }
}
