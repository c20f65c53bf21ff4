//! Output module for discovery reports and compiled documents
//!
//! This module handles:
//! - Building the categorized discovery report
//! - Assembling the merged markdown document with its table of contents

mod document;
mod report;

pub use document::{
    anchor_slug, assemble_document, format_compiled_at, section_title, CompiledDocument,
};
pub use report::{build_report, DiscoveryReport};
