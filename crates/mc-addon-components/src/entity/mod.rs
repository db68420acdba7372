//! Server entity components.

mod attributes;
mod lifecycle;
mod movement;
mod triggers;

pub use attributes::*;
pub use lifecycle::*;
pub use movement::*;
pub use triggers::*;
