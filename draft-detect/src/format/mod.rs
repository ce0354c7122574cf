//! Syntax probes used by the detector.
//!
//! Each sub-module recognizes one syntax family:
//! - `json`: strict JSON, any value
//! - `yaml`: YAML mappings (deserialized into `serde_json::Value`)
//! - `xml`: well-formed XML, classified by root element
//! - `proto`: Protocol Buffers IDL source
//!
//! JSON and YAML documents share the key-based classifier in `dialect`.
//! `nesting` bounds the input handed to the recursive XML and Protobuf parsers.

pub mod dialect;
pub mod json;
pub mod nesting;
pub mod proto;
pub mod xml;
pub mod yaml;
