//! Value types produced by content detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// The outer textual encoding of a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxFamily {
    Json,
    Yaml,
    Xml,
    Protobuf,
    Unknown,
}

impl SyntaxFamily {
    /// MIME type implied by this syntax family, if any.
    #[must_use]
    pub fn content_type(self) -> Option<ContentType> {
        match self {
            Self::Json => Some(ContentType::ApplicationJson),
            Self::Yaml => Some(ContentType::ApplicationYaml),
            Self::Xml => Some(ContentType::TextXml),
            Self::Protobuf => Some(ContentType::ApplicationProtobuf),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
            Self::Protobuf => "protobuf",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SyntaxFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The schema or API specification family a document conforms to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    OpenApi,
    AsyncApi,
    Avro,
    JsonSchema,
    Wsdl,
    Xsd,
    Xml,
    Protobuf,
}

impl Dialect {
    pub const ALL: [Self; 8] = [
        Self::OpenApi,
        Self::AsyncApi,
        Self::Avro,
        Self::JsonSchema,
        Self::Wsdl,
        Self::Xsd,
        Self::Xml,
        Self::Protobuf,
    ];

    /// Lowercase identifier used in detection output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenApi => "openapi",
            Self::AsyncApi => "asyncapi",
            Self::Avro => "avro",
            Self::JsonSchema => "jsonschema",
            Self::Wsdl => "wsdl",
            Self::Xsd => "xsd",
            Self::Xml => "xml",
            Self::Protobuf => "protobuf",
        }
    }

    /// Artifact type name understood by the registry.
    #[must_use]
    pub fn registry_type(self) -> &'static str {
        match self {
            Self::OpenApi => "OPENAPI",
            Self::AsyncApi => "ASYNCAPI",
            Self::Avro => "AVRO",
            Self::JsonSchema => "JSON",
            Self::Wsdl => "WSDL",
            Self::Xsd => "XSD",
            Self::Xml => "XML",
            Self::Protobuf => "PROTOBUF",
        }
    }

    /// Content type to submit when nothing was detected for a user-chosen type.
    #[must_use]
    pub fn default_content_type(self) -> ContentType {
        match self {
            Self::Protobuf => ContentType::ApplicationProtobuf,
            Self::Wsdl | Self::Xsd | Self::Xml => ContentType::TextXml,
            Self::OpenApi | Self::AsyncApi | Self::Avro | Self::JsonSchema => {
                ContentType::ApplicationJson
            }
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the detection identifier (`jsonschema`) or the registry
/// type name (`JSON`), case-insensitively.
impl FromStr for Dialect {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| {
                d.as_str().eq_ignore_ascii_case(wanted)
                    || d.registry_type().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DraftError::UnknownType(wanted.to_owned()))
    }
}

/// MIME type of draft content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "application/json")]
    ApplicationJson,
    #[serde(rename = "application/x-yaml")]
    ApplicationYaml,
    #[serde(rename = "text/xml")]
    TextXml,
    #[serde(rename = "application/x-protobuf")]
    ApplicationProtobuf,
}

impl ContentType {
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            Self::ApplicationJson => "application/json",
            Self::ApplicationYaml => "application/x-yaml",
            Self::TextXml => "text/xml",
            Self::ApplicationProtobuf => "application/x-protobuf",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Outcome of running the detector over a piece of content.
///
/// `dialect` is only set when the syntax family parsed, and `version` only
/// when the dialect is OpenAPI. Every field other than `syntax_family` is
/// absent for [`SyntaxFamily::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub syntax_family: SyntaxFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl DetectionResult {
    /// Result for content that none of the probes recognized.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            syntax_family: SyntaxFamily::Unknown,
            dialect: None,
            version: None,
            content_type: None,
            name: None,
            summary: None,
        }
    }

    /// Result for a parsed document of the given family and dialect, without metadata.
    #[must_use]
    pub fn parsed(syntax_family: SyntaxFamily, dialect: Dialect) -> Self {
        Self {
            syntax_family,
            dialect: Some(dialect),
            version: None,
            content_type: syntax_family.content_type(),
            name: None,
            summary: None,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.syntax_family == SyntaxFamily::Unknown
    }

    /// One-line description, e.g. `yaml openapi 3.0.2 "Petstore"`.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = vec![self.syntax_family.as_str().to_owned()];
        if let Some(dialect) = self.dialect {
            parts.push(dialect.as_str().to_owned());
        }
        if let Some(version) = &self.version {
            parts.push(version.clone());
        }
        if let Some(name) = &self.name {
            parts.push(format!("{name:?}"));
        }
        parts.join(" ")
    }
}
