use crate::outcome::Outcome;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The labels physically present on one image, as fetched at runtime.
pub type LabelMapping = BTreeMap<String, String>;

/// The whole constraint document: image reference -> its label constraints.
///
/// The engine mutates result fields in place but never adds or removes
/// images or label keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConstraintSet {
    #[serde(default)]
    pub images: BTreeMap<String, ImageEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    /// Label key (or `%`-pattern) -> constraint. See [`LabelConstraint`].
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub label_constraints: BTreeMap<String, LabelConstraint>,
}

/// Up to four independent constraint kinds attached to one label key.
///
/// A key wrapped in `%` markers selects count mode (`%x%` contains, `%x`
/// suffix, `x%` prefix); a bare key selects the literal checks. The kinds
/// are not mutually exclusive: every configured kind gets its own result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabelConstraint {
    /// Setting this (to any value) activates the existence check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub exists_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub exists_result_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_semver: Option<SemverConstraint>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub compare_semver_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub compare_semver_result_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_string: Option<StringConstraint>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub compare_string_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub compare_string_result_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<CountConstraint>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub count_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub count_result_message: String,
}

/// Semantic-version comparisons against the label value.
///
/// Targets are kept as strings so an unparseable target surfaces as a
/// recorded message instead of a document parse failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SemverConstraint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equal: Option<String>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub equal_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub equal_result_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<String>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub greater_than_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub greater_than_result_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than: Option<String>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub less_than_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub less_than_result_message: String,
}

/// Literal string comparisons against the label value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StringConstraint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equal: Option<String>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub equal_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub equal_result_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub has_prefix_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub has_prefix_result_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub has_suffix_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub has_suffix_result_message: String,
}

/// Conditions on the number of label keys matching a `%`-pattern.
///
/// Only the first configured condition is evaluated, in the order
/// `equal`, `lessThan`, `greaterThan`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountConstraint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equal: Option<u64>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub equal_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub equal_result_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than: Option<u64>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub less_than_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub less_than_result_message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<u64>,
    #[serde(default, skip_serializing_if = "Outcome::is_unevaluated")]
    pub greater_than_result: Outcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub greater_than_result_message: String,
}

impl ConstraintSet {
    /// Image references in the document, in stable order.
    pub fn image_refs(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }
}
