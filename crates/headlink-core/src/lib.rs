//! Headlink Core Library
//!
//! Core logic for locating Markdown section headings and rendering
//! cross-reference links from a user-configurable template.
//! No IO dependencies beyond the vault provider, pure logic only.
//!

pub mod compose;
pub mod controller;
pub mod error;
pub mod heading;
pub mod host;
pub mod model;
pub mod resolve;
pub mod search;
pub mod settings;
pub mod template;
pub mod vfs;

#[cfg(test)]
mod controller_tests;

pub use compose::{compose_from_cursor, compose_from_match};
pub use controller::LinkController;
pub use error::LinkError;
pub use heading::{extract_headings, extract_headings_up_to};
pub use model::{ActiveDocument, DocumentContent, Heading, MatchResult, PathParts};
pub use resolve::nearest_heading;
pub use search::{search_headings, SearchSession};
pub use settings::{Settings, SettingsStore};
pub use template::{render, LinkValues, DEFAULT_LINK_FORMAT};
