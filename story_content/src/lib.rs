//! # Story Content
//!
//! The authored side of the game: nodes (story beats), edges (transitions) and
//! reusable text snippets. This crate holds no traversal logic; it turns a
//! tabular snapshot into an immutable, id-addressed [`ContentStore`] that the
//! engine reads from for the whole session.
//!
//! How the tables were obtained (spreadsheet export, bundle file, test
//! fixture) is irrelevant past [`StoryTables`], which is the only thing a
//! data provider has to produce.

pub mod auxiliary;
pub mod error;
pub mod loader;
pub mod records;
pub mod store;
pub mod tables;

pub use auxiliary::*;
pub use error::*;
pub use loader::*;
pub use records::*;
pub use store::*;
pub use tables::*;
