//! Rendering of result types.
//!
//! The core exposes plain data; this module renders it in several formats
//! with a configurable numeric precision:
//! - Terminal: human-readable text with a colored verdict line
//! - CSV: `Section,Name,Value` rows
//! - XML: element-per-field documents
//! - JSON: serde serialization

mod csv;
mod json;
mod terminal;
mod xml;

pub use csv::{descriptive_csv, performance_csv, reliability_csv};
pub use json::{to_json, to_json_pretty};
pub use terminal::{
    format_comparison, format_descriptive, format_performance, format_reliability,
};
pub use xml::{descriptive_xml, performance_xml, reliability_xml};
