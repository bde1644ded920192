//! Flipbook is a script-driven animation document authoring backend.
//!
//! An author writes an imperative script; running it produces a structured
//! animation document (clips of pixel frames plus placed sub-clip
//! references), persisted as a single JSON file. Flipbook is an
//! authoring-tool backend, not a renderer or player.
//!
//! # Pipeline overview
//!
//! 1. **Host**: [`ScriptHost`] embeds a Rhai engine and registers the six
//!    authoring commands as global script functions
//! 2. **Execute**: the script runs top to bottom; each command call is
//!    decoded into a typed [`Command`] and dispatched synchronously
//! 3. **Build**: [`DocumentBuilder`] accumulates clips, frames, and embeds
//!    in invocation order, tracking the clip currently being authored
//! 4. **Serialize**: on full success the finished [`Document`] is written
//!    as compact JSON; after any failure no output is produced
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Order-preserving**: clips, frames, and embeds are stored strictly in
//!   script invocation order; nothing reorders or sorts them.
//! - **Explicit context**: commands that need an initialized document or an
//!   open clip fail with a state error instead of inventing context.
//! - **Permissive content**: argument shapes are checked at the script
//!   boundary, but semantic content (dimensions, pixel counts, referenced
//!   clip names) is stored as supplied.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod foundation;
mod script;

pub use document::builder::DocumentBuilder;
pub use document::model::{Clip, Document, Embed, Frame, Meta};
pub use foundation::error::{FlipbookError, FlipbookResult};
pub use script::command::{Command, dispatch};
pub use script::host::ScriptHost;
