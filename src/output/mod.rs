//! Result output
//!
//! - `text`: console tables for interactive use
//! - `json`: machine-readable reports for downstream search drivers

pub mod json;
pub mod text;
