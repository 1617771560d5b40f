//! Constraint document parsing and serialization.
//!
//! This crate is intentionally IO-free: it converts between strings and the
//! typed document. The CLI owns file handling and picks the format from the
//! file extension (`.json` is JSON, anything else is YAML).

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::Utf8Path;
use labelguard_types::ConstraintSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Utf8Path) -> Format {
        match path.extension() {
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Parse a constraint document. Unknown fields are ignored for forward
/// compatibility; result fields already present (a previously annotated
/// document) parse back losslessly.
pub fn parse_str(format: Format, input: &str) -> anyhow::Result<ConstraintSet> {
    match format {
        Format::Yaml => serde_yaml::from_str(input).context("parse YAML constraint document"),
        Format::Json => serde_json::from_str(input).context("parse JSON constraint document"),
    }
}

/// Serialize the (annotated) document back out.
pub fn to_string(format: Format, set: &ConstraintSet) -> anyhow::Result<String> {
    match format {
        Format::Yaml => serde_yaml::to_string(set).context("serialize YAML constraint document"),
        Format::Json => {
            let mut rendered = serde_json::to_string_pretty(set)
                .context("serialize JSON constraint document")?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelguard_types::Outcome;

    const YAML_DOC: &str = "\
images:
  docker.io/library/alpine:latest:
    labelConstraints:
      maintainer:
        exists: true
        compareString:
          hasPrefix: team-
";

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            Format::from_path(Utf8Path::new("checks.json")),
            Format::Json
        );
        assert_eq!(
            Format::from_path(Utf8Path::new("checks.yaml")),
            Format::Yaml
        );
        assert_eq!(Format::from_path(Utf8Path::new("checks.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Utf8Path::new("checks")), Format::Yaml);
    }

    #[test]
    fn yaml_parses_and_round_trips() {
        let set = parse_str(Format::Yaml, YAML_DOC).expect("parse");
        let entry = &set.images["docker.io/library/alpine:latest"];
        let constraint = &entry.label_constraints["maintainer"];
        assert_eq!(constraint.exists, Some(true));

        let rendered = to_string(Format::Yaml, &set).expect("render");
        let reparsed = parse_str(Format::Yaml, &rendered).expect("reparse");
        assert_eq!(set, reparsed);
    }

    #[test]
    fn json_round_trips_annotations() {
        let mut set = parse_str(Format::Yaml, YAML_DOC).expect("parse");
        let constraint = set
            .images
            .get_mut("docker.io/library/alpine:latest")
            .expect("image")
            .label_constraints
            .get_mut("maintainer")
            .expect("constraint");
        constraint.exists_result = Outcome::Passed;
        constraint.exists_result_message = "Label found".to_string();

        let rendered = to_string(Format::Json, &set).expect("render json");
        assert!(rendered.contains("\"existsResult\": true"));
        let reparsed = parse_str(Format::Json, &rendered).expect("reparse json");
        assert_eq!(set, reparsed);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let doc = "\
images:
  img:
    labelConstraints:
      key:
        exists: true
        futureKnob: 7
";
        let set = parse_str(Format::Yaml, doc).expect("parse");
        assert!(set.images.contains_key("img"));
    }

    #[test]
    fn malformed_document_reports_context() {
        let err = parse_str(Format::Yaml, "images: [not, a, mapping]").unwrap_err();
        assert!(format!("{err:#}").contains("parse YAML constraint document"));
    }
}
