//! AI goals (`minecraft:behavior.*`).
//!
//! Every goal carries a `priority`; lower numbers win when two goals want
//! the same control. The remaining fields are optional and default-omitted.

use mc_addon_core::{AsComponent, Value};

/// Declare a goal type. `new(priority)` writes the mandatory priority.
macro_rules! goal {
    ($(#[$meta:meta])* $name:ident, $id:literal) => {
        mc_addon_core::component!($(#[$meta])* $name, $id);

        impl $name {
            pub fn new(priority: u32) -> Self {
                let mut c = mc_addon_core::Component::new(Self::IDENTIFIER);
                c.add_field("priority", priority);
                Self(c)
            }
        }

        impl $crate::ai::Goal for $name {}
    };
}

/// Shared `speed_multiplier` setter; the game default is `1.0`.
macro_rules! speed_multiplier {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub fn speed_multiplier(mut self, value: f64) -> Self {
                    self.0.add_field_if_ne("speed_multiplier", value, 1.0);
                    self
                }
            }
        )*
    };
}

pub(crate) use goal;
pub(crate) use speed_multiplier;

mod combat;
mod wander;

pub use combat::*;
pub use wander::*;

/// Common read access for goals.
pub trait Goal: AsComponent {
    fn priority(&self) -> Option<u32> {
        self.component()
            .get_field("priority")
            .and_then(Value::as_u64)
            .and_then(|p| u32::try_from(p).ok())
    }
}
