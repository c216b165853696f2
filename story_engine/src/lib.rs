//! # Story Engine
//!
//! Walks the narrative graph held by a [`story_content::ContentStore`]: it
//! decides which edge to follow from each node, renders the text the player
//! sees along the way, and keeps a record of every transition taken.
//!
//! ## Core Components
//!
//! - **policy**: Edge selection per node kind (`auto`, `random`, `end`, ...)
//! - **render**: Node entry text, advance prompts and transition outros
//! - **journey**: Append-only log of the walk and its end-of-game transcript
//! - **session**: The game loop, one tick per node
//! - **employee**: Companion text generator fed from an auxiliary table
//!
//! The engine reads content, it never mutates it. The only randomness is the
//! RNG handed to a session, so a seeded generator replays a game exactly.

pub mod employee;
pub mod error;
pub mod journey;
pub mod policy;
pub mod render;
pub mod session;
pub mod wrap;

pub use employee::*;
pub use error::*;
pub use journey::*;
pub use policy::*;
pub use render::*;
pub use session::*;
pub use wrap::*;
