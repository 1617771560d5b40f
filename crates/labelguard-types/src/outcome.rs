use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Cow;

/// Tri-state result of one check.
///
/// `Unevaluated` is distinct from `Failed`: a check that was never configured
/// (or whose precondition kept it from running) must not read as a failure in
/// the annotated document. On the wire an outcome is a bare boolean and
/// `Unevaluated` is omitted entirely, which keeps documents produced by older
/// tool versions parseable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Unevaluated,
    Passed,
    Failed,
}

impl Outcome {
    pub fn is_unevaluated(&self) -> bool {
        matches!(self, Outcome::Unevaluated)
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Conjunction used for group-level results: `Unevaluated` is the
    /// identity, any `Failed` operand wins.
    pub fn and(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::Unevaluated, o) | (o, Outcome::Unevaluated) => o,
            (Outcome::Passed, Outcome::Passed) => Outcome::Passed,
            _ => Outcome::Failed,
        }
    }
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed { Outcome::Passed } else { Outcome::Failed }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Unevaluated => serializer.serialize_none(),
            Outcome::Passed => serializer.serialize_bool(true),
            Outcome::Failed => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<bool>::deserialize(deserializer)? {
            None => Outcome::Unevaluated,
            Some(true) => Outcome::Passed,
            Some(false) => Outcome::Failed,
        })
    }
}

impl JsonSchema for Outcome {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("Outcome")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        // Serialized shape is an optional boolean.
        <Option<bool>>::json_schema(generator)
    }
}
