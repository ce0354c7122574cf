//! Content type detection.
//!
//! Syntax families overlap (a JSON object is also valid YAML, a bare word is a
//! YAML scalar), so probes run in a fixed order and the first one that
//! recognizes the content wins.

use tracing::debug;

use crate::format::{json, proto, xml, yaml};
use crate::model::{DetectionResult, SyntaxFamily};

/// One entry of the probe pipeline.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxProbe {
    pub family: SyntaxFamily,
    pub probe: fn(&str) -> Option<DetectionResult>,
}

/// Probes in evaluation order.
pub const SYNTAX_PROBES: [SyntaxProbe; 4] = [
    SyntaxProbe {
        family: SyntaxFamily::Json,
        probe: json::probe_json,
    },
    SyntaxProbe {
        family: SyntaxFamily::Yaml,
        probe: yaml::probe_yaml,
    },
    SyntaxProbe {
        family: SyntaxFamily::Xml,
        probe: xml::probe_xml,
    },
    SyntaxProbe {
        family: SyntaxFamily::Protobuf,
        probe: proto::probe_protobuf,
    },
];

/// Detect the syntax family, dialect and metadata of raw draft content.
///
/// Total and pure: parse failures only mean "this probe did not match", and
/// content no probe recognizes yields [`DetectionResult::unknown`].
#[must_use]
pub fn detect(content: &str) -> DetectionResult {
    for probe in &SYNTAX_PROBES {
        if let Some(result) = (probe.probe)(content) {
            debug!(
                syntax_family = %result.syntax_family,
                dialect = ?result.dialect,
                version = ?result.version,
                "content detected"
            );
            return result;
        }
    }

    debug!(bytes = content.len(), "failed to detect the type of the content");
    DetectionResult::unknown()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentType, Dialect};

    #[test]
    fn test_probe_order() {
        let order: Vec<SyntaxFamily> = SYNTAX_PROBES.iter().map(|p| p.family).collect();
        assert_eq!(
            order,
            vec![
                SyntaxFamily::Json,
                SyntaxFamily::Yaml,
                SyntaxFamily::Xml,
                SyntaxFamily::Protobuf
            ]
        );
    }

    #[test]
    fn test_probe_families_match_results() {
        let samples = [
            r#"{"openapi": "3.0.0"}"#,
            "openapi: 3.0.0\n",
            "<note/>",
            "syntax = \"proto3\";\nmessage A {}\n",
        ];
        for (probe, sample) in SYNTAX_PROBES.iter().zip(samples) {
            let result = (probe.probe)(sample).unwrap();
            assert_eq!(result.syntax_family, probe.family, "sample: {sample}");
        }
    }

    #[test]
    fn test_json_object_is_detected_as_json_not_yaml() {
        let result = detect(r#"{"asyncapi": "2.0.0", "info": {"title": "Events"}}"#);
        assert_eq!(result.syntax_family, SyntaxFamily::Json);
        assert_eq!(result.dialect, Some(Dialect::AsyncApi));
        assert_eq!(result.content_type, Some(ContentType::ApplicationJson));
        assert_eq!(result.name.as_deref(), Some("Events"));
    }

    #[test]
    fn test_yaml_openapi() {
        let result = detect("openapi: 3.1.0\ninfo:\n  title: Petstore\n");
        assert_eq!(result.syntax_family, SyntaxFamily::Yaml);
        assert_eq!(result.dialect, Some(Dialect::OpenApi));
        assert_eq!(result.version.as_deref(), Some("3.0.2"));
        assert_eq!(result.content_type, Some(ContentType::ApplicationYaml));
    }

    #[test]
    fn test_bare_yaml_scalar_is_unknown() {
        assert_eq!(detect("hello"), DetectionResult::unknown());
        assert_eq!(detect("- a\n- b\n"), DetectionResult::unknown());
    }

    #[test]
    fn test_json_non_objects_fall_back_to_avro() {
        for content in ["[1, 2, 3]", "\"hello\"", "42", "true", "null"] {
            let result = detect(content);
            assert_eq!(result.syntax_family, SyntaxFamily::Json, "content: {content}");
            assert_eq!(result.dialect, Some(Dialect::Avro), "content: {content}");
            assert_eq!(result.name, None);
        }
    }

    #[test]
    fn test_wsdl() {
        let result =
            detect(r#"<definitions xmlns="http://schemas.xmlsoap.org/wsdl/"><types/></definitions>"#);
        assert_eq!(result.syntax_family, SyntaxFamily::Xml);
        assert_eq!(result.dialect, Some(Dialect::Wsdl));
        assert_eq!(result.content_type, Some(ContentType::TextXml));
    }

    #[test]
    fn test_protobuf() {
        let result = detect("syntax = \"proto3\";\n\nmessage Ping {\n  string id = 1;\n}\n");
        assert_eq!(result.syntax_family, SyntaxFamily::Protobuf);
        assert_eq!(result.dialect, Some(Dialect::Protobuf));
        assert_eq!(result.content_type, Some(ContentType::ApplicationProtobuf));
    }

    #[test]
    fn test_garbage_is_unknown() {
        let result = detect("not any known format {{{");
        assert!(result.is_unknown());
        assert_eq!(result, DetectionResult::unknown());
    }

    #[test]
    fn test_empty_and_blank_are_unknown() {
        assert!(detect("").is_unknown());
        assert!(detect("   \n\n").is_unknown());
    }
}
