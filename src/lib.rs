//! Release Process-O-Tron: hierarchical release work items as data.
//!
//! Two flows share the document model in [`models`]:
//!
//! - **Generate**: [`checklist::build_document`] fills a fixed task-hierarchy
//!   template with release metadata, producing a [`models::TaskDocument`]
//!   that is written to disk as JSON.
//! - **Publish**: a previously generated document is parsed back and
//!   [`publish::publish_document`] walks it, creating one GitHub issue per
//!   task through the client boundary in [`github`].

pub mod checklist;
pub mod github;
pub mod models;
pub mod publish;
