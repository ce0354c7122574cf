//! Import form model: detection pre-fills the fields, the user may override
//! them, and a valid form is packaged into a create-draft request.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detector::detect;
use crate::error::DraftError;
use crate::model::{ContentType, DetectionResult, Dialect};
use crate::templates::{TemplateSet, template_set_for};

/// OpenAPI versions offered for selection, newest first.
pub const OPENAPI_VERSIONS: [&str; 2] = ["3.0.2", "2.0"];

/// Version assumed when OpenAPI is chosen without one.
pub const DEFAULT_OPENAPI_VERSION: &str = OPENAPI_VERSIONS[0];

/// A type the user can pick when detection failed or guessed wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeOption {
    pub dialect: Dialect,
    pub label: &'static str,
}

pub const TYPE_OPTIONS: [TypeOption; 5] = [
    TypeOption {
        dialect: Dialect::OpenApi,
        label: "OpenAPI",
    },
    TypeOption {
        dialect: Dialect::AsyncApi,
        label: "AsyncAPI",
    },
    TypeOption {
        dialect: Dialect::Avro,
        label: "Apache Avro",
    },
    TypeOption {
        dialect: Dialect::JsonSchema,
        label: "JSON Schema",
    },
    TypeOption {
        dialect: Dialect::Protobuf,
        label: "Google Protocol Buffers",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContext {
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlContext {
    pub url: String,
}

/// Where the draft content came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DraftContext {
    File { file: FileContext },
    Url { url: UrlContext },
}

impl DraftContext {
    #[must_use]
    pub fn file(file_name: impl Into<String>) -> Self {
        Self::File {
            file: FileContext {
                file_name: file_name.into(),
            },
        }
    }

    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url {
            url: UrlContext { url: url.into() },
        }
    }
}

/// Draft metadata half of a create-draft request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDraft {
    /// Registry artifact type, e.g. `OPENAPI`.
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub name: String,
    pub summary: String,
    pub context: DraftContext,
}

/// Content half of a create-draft request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftContent {
    pub content_type: String,
    pub data: String,
}

/// Everything handed to the draft store on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRequest {
    pub draft: CreateDraft,
    pub content: CreateDraftContent,
}

/// State of the import form.
#[derive(Debug, Clone)]
pub struct ImportForm {
    context: DraftContext,
    content: Option<String>,
    detection: Option<DetectionResult>,
    dialect: Option<Dialect>,
    version: String,
    name: String,
    summary: String,
    content_type: Option<ContentType>,
}

impl ImportForm {
    /// An empty form for content coming from `context`.
    #[must_use]
    pub fn new(context: DraftContext) -> Self {
        Self {
            context,
            content: None,
            detection: None,
            dialect: None,
            version: String::new(),
            name: String::new(),
            summary: String::new(),
            content_type: None,
        }
    }

    /// Replace the content and re-run detection.
    ///
    /// Non-blank content overwrites every detected field, discarding earlier
    /// user edits. Blank content clears name, summary, type and content type.
    pub fn set_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        if content.trim().is_empty() {
            debug!("content empty, resetting form fields");
            self.detection = None;
            self.dialect = None;
            self.name.clear();
            self.summary.clear();
            self.content_type = None;
        } else {
            let info = detect(&content);
            self.dialect = info.dialect;
            self.version = info.version.clone().unwrap_or_default();
            self.name = info.name.clone().unwrap_or_default();
            self.summary = info.summary.clone().unwrap_or_default();
            self.content_type = info.content_type;
            self.detection = Some(info);
        }
        self.content = Some(content);
    }

    /// Choose the draft type. Picking OpenAPI without a version selects
    /// [`DEFAULT_OPENAPI_VERSION`].
    pub fn set_dialect(&mut self, dialect: Option<Dialect>) {
        self.dialect = dialect;
        if dialect == Some(Dialect::OpenApi) && self.version.is_empty() {
            DEFAULT_OPENAPI_VERSION.clone_into(&mut self.version);
        }
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    #[must_use]
    pub fn context(&self) -> &DraftContext {
        &self.context
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// The detection behind the current field values, if content was set.
    #[must_use]
    pub fn detection(&self) -> Option<&DetectionResult> {
        self.detection.as_ref()
    }

    #[must_use]
    pub fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type
    }

    /// The version selector only applies to OpenAPI drafts.
    #[must_use]
    pub fn shows_version(&self) -> bool {
        self.dialect == Some(Dialect::OpenApi)
    }

    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.trim().is_empty())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.has_content() && !self.name.is_empty() && self.dialect.is_some()
    }

    /// Template set matching the chosen type and version.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::MissingType` if no type is chosen, or
    /// `DraftError::NoTemplates` for types without templates.
    pub fn template_set(&self) -> Result<TemplateSet, DraftError> {
        let dialect = self.dialect.ok_or(DraftError::MissingType)?;
        let version = (!self.version.is_empty()).then_some(self.version.as_str());
        template_set_for(dialect, version)
    }

    /// Package the form into a create-draft request.
    ///
    /// When detection produced no content type, the default for the chosen
    /// type is used.
    ///
    /// # Errors
    ///
    /// Returns `MissingContent`, `MissingName` or `MissingType` for the first
    /// required field that is not filled in.
    pub fn build(&self) -> Result<ImportRequest, DraftError> {
        let data = self
            .content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or(DraftError::MissingContent)?;
        if self.name.is_empty() {
            return Err(DraftError::MissingName);
        }
        let dialect = self.dialect.ok_or(DraftError::MissingType)?;
        let content_type = self
            .content_type
            .unwrap_or_else(|| dialect.default_content_type());

        let request = ImportRequest {
            draft: CreateDraft {
                artifact_type: dialect.registry_type().to_owned(),
                name: self.name.clone(),
                summary: self.summary.clone(),
                context: self.context.clone(),
            },
            content: CreateDraftContent {
                content_type: content_type.mime().to_owned(),
                data: data.to_owned(),
            },
        };
        debug!(
            artifact_type = %request.draft.artifact_type,
            content_type = %request.content.content_type,
            "importing draft"
        );
        Ok(request)
    }
}
