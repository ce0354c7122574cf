//! Template set selection for new drafts.

use std::fmt;

use crate::error::DraftError;
use crate::model::Dialect;

/// A family of starter templates offered when creating a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateSet {
    OpenApi3,
    OpenApi2,
    AsyncApi2,
    Avro,
    JsonSchema,
    Protobuf,
}

impl TemplateSet {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OpenApi3 => "OpenAPI 3",
            Self::OpenApi2 => "OpenAPI 2",
            Self::AsyncApi2 => "AsyncAPI 2",
            Self::Avro => "Apache Avro",
            Self::JsonSchema => "JSON Schema",
            Self::Protobuf => "Google Protocol Buffers",
        }
    }
}

impl fmt::Display for TemplateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick the template set for a draft type.
///
/// OpenAPI uses the 3.x templates when the version starts with `3` and the
/// 2.0 templates otherwise, including when no version is given.
///
/// # Errors
///
/// Returns `DraftError::NoTemplates` for WSDL, XSD and generic XML.
pub fn template_set_for(dialect: Dialect, version: Option<&str>) -> Result<TemplateSet, DraftError> {
    match dialect {
        Dialect::Avro => Ok(TemplateSet::Avro),
        Dialect::Protobuf => Ok(TemplateSet::Protobuf),
        Dialect::JsonSchema => Ok(TemplateSet::JsonSchema),
        Dialect::AsyncApi => Ok(TemplateSet::AsyncApi2),
        Dialect::OpenApi if version.is_some_and(|v| v.starts_with('3')) => {
            Ok(TemplateSet::OpenApi3)
        }
        Dialect::OpenApi => Ok(TemplateSet::OpenApi2),
        Dialect::Wsdl | Dialect::Xsd | Dialect::Xml => Err(DraftError::NoTemplates {
            dialect,
            version: version.map(str::to_owned),
        }),
    }
}
