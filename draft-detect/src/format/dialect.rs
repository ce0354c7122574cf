//! Key-based dialect classification for JSON and YAML documents.
//!
//! Rules are evaluated in table order and the first rule whose marker key is
//! present wins. A mapping that matches no rule is treated as an Avro schema.

use serde_json::{Map, Value};

use crate::model::{DetectionResult, Dialect, SyntaxFamily};

/// Where a rule reads the draft name and summary from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataSource {
    /// `info.title` / `info.description`
    Info,
    /// top-level `title` / `description`
    Root,
    /// top-level `name`, no summary
    RootName,
}

impl MetadataSource {
    fn extract(self, doc: &Map<String, Value>) -> (Option<String>, Option<String>) {
        match self {
            Self::Info => {
                let info = doc.get("info").and_then(Value::as_object);
                (
                    info.and_then(|i| string_field(i, "title")),
                    info.and_then(|i| string_field(i, "description")),
                )
            }
            Self::Root => (
                string_field(doc, "title"),
                string_field(doc, "description"),
            ),
            Self::RootName => (string_field(doc, "name"), None),
        }
    }
}

/// A single (predicate, classifier) pair.
#[derive(Debug, Clone, Copy)]
pub struct DialectRule {
    /// Top-level key whose presence selects this rule. `None` always matches.
    pub marker: Option<&'static str>,
    pub dialect: Dialect,
    /// Fixed version reported for the dialect. Never read from the document.
    pub version: Option<&'static str>,
    pub metadata: MetadataSource,
}

impl DialectRule {
    #[must_use]
    pub fn matches(&self, doc: &Map<String, Value>) -> bool {
        self.marker.is_none_or(|key| doc.contains_key(key))
    }

    #[must_use]
    pub fn classify(&self, doc: &Map<String, Value>, syntax_family: SyntaxFamily) -> DetectionResult {
        let (name, summary) = self.metadata.extract(doc);
        DetectionResult {
            version: self.version.map(str::to_owned),
            name,
            summary,
            ..DetectionResult::parsed(syntax_family, self.dialect)
        }
    }
}

/// Keyed rules in priority order. A document with both `openapi` and
/// `swagger` resolves to the first.
pub const DIALECT_RULES: [DialectRule; 4] = [
    DialectRule {
        marker: Some("openapi"),
        dialect: Dialect::OpenApi,
        version: Some("3.0.2"),
        metadata: MetadataSource::Info,
    },
    DialectRule {
        marker: Some("swagger"),
        dialect: Dialect::OpenApi,
        version: Some("2.0"),
        metadata: MetadataSource::Info,
    },
    DialectRule {
        marker: Some("asyncapi"),
        dialect: Dialect::AsyncApi,
        version: None,
        metadata: MetadataSource::Info,
    },
    DialectRule {
        marker: Some("$schema"),
        dialect: Dialect::JsonSchema,
        version: None,
        metadata: MetadataSource::Root,
    },
];

/// Applied when no keyed rule matches.
pub const AVRO_FALLBACK: DialectRule = DialectRule {
    marker: None,
    dialect: Dialect::Avro,
    version: None,
    metadata: MetadataSource::RootName,
};

/// Classify a parsed JSON or YAML mapping.
#[must_use]
pub fn classify_document(doc: &Map<String, Value>, syntax_family: SyntaxFamily) -> DetectionResult {
    let rule = DIALECT_RULES
        .iter()
        .find(|rule| rule.matches(doc))
        .unwrap_or(&AVRO_FALLBACK);
    rule.classify(doc, syntax_family)
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}
