//! Content sources for detection.
//!
//! Only the filesystem source lives here. URL downloads are left to the
//! caller, which hands the detector an already materialized string.

pub mod fs;
