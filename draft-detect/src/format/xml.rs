//! XML syntax probe.
//!
//! Any well-formed document is XML; WSDL and XSD are told apart by the
//! namespace and local name of the root element.

use roxmltree::{Document, ParsingOptions};
use tracing::trace;

use crate::format::nesting::{MAX_NESTING_DEPTH, xml_depth_exceeds};
use crate::model::{DetectionResult, Dialect, SyntaxFamily};

pub const WSDL_NAMESPACE: &str = "http://schemas.xmlsoap.org/wsdl/";
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Root element that identifies an XML dialect.
#[derive(Debug, Clone, Copy)]
pub struct RootElementRule {
    pub namespace: &'static str,
    pub local_name: &'static str,
    pub dialect: Dialect,
}

pub const ROOT_ELEMENT_RULES: [RootElementRule; 2] = [
    RootElementRule {
        namespace: WSDL_NAMESPACE,
        local_name: "definitions",
        dialect: Dialect::Wsdl,
    },
    RootElementRule {
        namespace: XSD_NAMESPACE,
        local_name: "schema",
        dialect: Dialect::Xsd,
    },
];

fn parsing_options() -> ParsingOptions {
    let mut options = ParsingOptions::default();
    // Documents with a DOCTYPE are still well-formed XML.
    options.allow_dtd = true;
    options
}

/// Probe content as an XML document.
#[must_use]
pub fn probe_xml(content: &str) -> Option<DetectionResult> {
    if xml_depth_exceeds(content, MAX_NESTING_DEPTH) {
        trace!(limit = MAX_NESTING_DEPTH, "XML nesting too deep");
        return None;
    }

    let doc = match Document::parse_with_options(content, parsing_options()) {
        Ok(doc) => doc,
        Err(e) => {
            trace!(error = %e, "content is not XML");
            return None;
        }
    };

    let root = doc.root_element().tag_name();
    let dialect = ROOT_ELEMENT_RULES
        .iter()
        .find(|rule| root.namespace() == Some(rule.namespace) && root.name() == rule.local_name)
        .map_or(Dialect::Xml, |rule| rule.dialect);

    Some(DetectionResult::parsed(SyntaxFamily::Xml, dialect))
}
