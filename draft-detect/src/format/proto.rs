//! Protocol Buffers IDL syntax probe.

use tracing::trace;

use crate::format::nesting::{MAX_NESTING_DEPTH, bracket_depth_exceeds};
use crate::model::{DetectionResult, Dialect, SyntaxFamily};

/// File name reported by the parser in diagnostics.
const SOURCE_NAME: &str = "draft.proto";

/// Probe content as `.proto` source.
///
/// Only syntax is checked; imports and type references are not resolved.
/// Blank content is not a proto definition even though the grammar accepts
/// an empty file.
#[must_use]
pub fn probe_protobuf(content: &str) -> Option<DetectionResult> {
    if content.trim().is_empty() {
        return None;
    }
    if bracket_depth_exceeds(content, MAX_NESTING_DEPTH) {
        trace!(limit = MAX_NESTING_DEPTH, "protobuf nesting too deep");
        return None;
    }

    match protox_parse::parse(SOURCE_NAME, content) {
        Ok(_) => Some(DetectionResult::parsed(SyntaxFamily::Protobuf, Dialect::Protobuf)),
        Err(e) => {
            trace!(error = %e, "content is not protobuf source");
            None
        }
    }
}
