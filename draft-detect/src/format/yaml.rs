//! YAML syntax probe.
//!
//! Documents are deserialized into `serde_json::Value` so JSON and YAML share
//! a single classifier.

use serde_json::Value;
use tracing::trace;

use crate::format::dialect::classify_document;
use crate::model::{DetectionResult, SyntaxFamily};

/// Probe content as a single YAML document.
///
/// Succeeds only when the document is a mapping. A bare scalar such as
/// `hello`, a sequence, or an empty document parses as YAML but is not
/// treated as YAML draft content.
#[must_use]
pub fn probe_yaml(content: &str) -> Option<DetectionResult> {
    let value: Value = match serde_saphyr::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            trace!(error = %e, "content is not YAML");
            return None;
        }
    };

    let Value::Object(doc) = value else {
        trace!("YAML content is not a mapping");
        return None;
    };

    Some(classify_document(&doc, SyntaxFamily::Yaml))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentType, Dialect};

    #[test]
    fn test_probe_yaml_swagger() {
        let content = r"
swagger: '2.0'
info:
  title: Petstore
  description: Sample pets API
  version: 1.0.0
paths: {}
";
        let result = probe_yaml(content).unwrap();
        assert_eq!(result.syntax_family, SyntaxFamily::Yaml);
        assert_eq!(result.dialect, Some(Dialect::OpenApi));
        assert_eq!(result.version.as_deref(), Some("2.0"));
        assert_eq!(result.content_type, Some(ContentType::ApplicationYaml));
        assert_eq!(result.name.as_deref(), Some("Petstore"));
        assert_eq!(result.summary.as_deref(), Some("Sample pets API"));
    }

    #[test]
    fn test_probe_yaml_asyncapi() {
        let content = r"
asyncapi: 2.6.0
info:
  title: Account Service
channels: {}
";
        let result = probe_yaml(content).unwrap();
        assert_eq!(result.dialect, Some(Dialect::AsyncApi));
        assert_eq!(result.name.as_deref(), Some("Account Service"));
        assert_eq!(result.summary, None);
    }

    #[test]
    fn test_probe_yaml_json_schema() {
        let content = r"
$schema: http://json-schema.org/draft-07/schema#
title: Person
type: object
";
        let result = probe_yaml(content).unwrap();
        assert_eq!(result.dialect, Some(Dialect::JsonSchema));
        assert_eq!(result.name.as_deref(), Some("Person"));
    }

    #[test]
    fn test_probe_yaml_unmarked_mapping_is_avro() {
        let result = probe_yaml("type: record\nname: User\n").unwrap();
        assert_eq!(result.dialect, Some(Dialect::Avro));
        assert_eq!(result.name.as_deref(), Some("User"));
    }

    #[test]
    fn test_probe_yaml_scalar_is_rejected() {
        assert!(probe_yaml("hello").is_none());
        assert!(probe_yaml("42").is_none());
    }

    #[test]
    fn test_probe_yaml_sequence_is_rejected() {
        assert!(probe_yaml("- one\n- two\n").is_none());
    }

    #[test]
    fn test_probe_yaml_null_is_rejected() {
        assert!(probe_yaml("~").is_none());
        assert!(probe_yaml("null").is_none());
    }

    #[test]
    fn test_probe_yaml_malformed() {
        assert!(probe_yaml(": : :\n  - [unclosed\n").is_none());
    }
}
