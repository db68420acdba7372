//! Typed builders for vanilla Bedrock components.
//!
//! - [`entity`]: `minecraft:*` components of server entity definitions
//! - [`ai`]: `minecraft:behavior.*` goals
//! - [`item`]: components of `minecraft:item` definitions
//! - [`block`]: components of `minecraft:block` definitions
//!
//! Every builder starts from the values that are required and exposes a
//! chained setter per optional field. Setters compare against the game's
//! default and leave the field out when they match.

pub mod ai;
pub mod block;
pub mod entity;
pub mod item;

pub use mc_addon_core::{AsComponent, Component, Filter};

/// `{"event": .., "target": ..}` trigger object; `target` defaults to `self`.
pub fn event_trigger(event: &str, target: Option<&str>) -> Component {
    let mut t = Component::object();
    t.add_field("event", event);
    t.add_optional("target", target);
    t
}

/// Trigger object with optional filters, as used by `on_damage`,
/// `on_interact` and sensor entries.
pub fn filtered_trigger(event: Option<&str>, target: Option<&str>, filters: Option<Filter>) -> Component {
    let mut t = Component::object();
    t.add_optional("filters", filters);
    t.add_optional("event", event);
    t.add_optional("target", target);
    t
}
