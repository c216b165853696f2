//! Engine errors. Only problems the player cannot recover from end up here;
//! soft data issues are reported by `ContentStore::validate` instead.

use story_content::{ContentError, NodeId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A reserved snippet the story needs right now was never authored.
    #[error("missing '{key}' text snippet, required at node '{node}'")]
    MissingSnippet { node: NodeId, key: &'static str },

    #[error("the session has already ended")]
    SessionEnded,

    #[error("input closed while waiting for the player")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Content(#[from] ContentError),
}
