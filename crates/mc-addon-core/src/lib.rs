//! Core building blocks for Bedrock add-on documents.
//!
//! Every component builder in the workspace is a thin wrapper around
//! [`Component`], which accumulates JSON fields under a vendor identifier
//! such as `minecraft:health`. [`Filter`] builds the predicate objects that
//! gate components, events and AI goals.

pub mod component;
pub mod error;
pub mod filter;
pub mod identifier;
pub mod value;
pub mod version;

pub use component::{AsComponent, Component};
pub use error::{AddonError, Result};
pub use filter::{Filter, Operator, Subject};
pub use identifier::Identifier;
pub use value::Range;
pub use version::{EngineVersion, FormatVersion};

/// Re-exported so builder crates can name JSON values without their own
/// `serde_json` import.
pub use serde_json::{json, Value};
