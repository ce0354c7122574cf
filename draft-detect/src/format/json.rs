//! JSON syntax probe.

use serde_json::{Map, Value};
use tracing::trace;

use crate::format::dialect::{AVRO_FALLBACK, classify_document};
use crate::model::{DetectionResult, SyntaxFamily};

/// Probe content as strict JSON.
///
/// Any value that parses is JSON. Scalars, arrays and `null` carry no keys
/// to classify by and always take the Avro fallback without a name.
#[must_use]
pub fn probe_json(content: &str) -> Option<DetectionResult> {
    let value: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            trace!(error = %e, "content is not JSON");
            return None;
        }
    };

    let result = match value {
        Value::Object(doc) => classify_document(&doc, SyntaxFamily::Json),
        _ => AVRO_FALLBACK.classify(&Map::new(), SyntaxFamily::Json),
    };
    Some(result)
}
