//! Vanilla Bedrock identifier catalogs.
//!
//! Each module exposes one constant per vanilla identifier plus an `ALL`
//! slice, so builders can reference `item_types::DIAMOND_SWORD` instead of a
//! hand-typed string.

use std::borrow::Cow;

// Helper macro to reduce boilerplate in the data lists.
macro_rules! catalog {
    ($($konst:ident => $name:literal),* $(,)?) => {
        $(pub const $konst: &str = concat!("minecraft:", $name);)*

        /// Every identifier in this catalog, in declaration order.
        pub static ALL: &[&str] = &[$($konst),*];

        /// Whether `id` is a known vanilla identifier. A bare name without
        /// namespace is matched against the `minecraft` namespace.
        pub fn contains(id: &str) -> bool {
            $crate::contains_id(ALL, id)
        }

        /// Identifiers containing `fragment`.
        pub fn search(fragment: &str) -> Vec<&'static str> {
            $crate::search_ids(ALL, fragment)
        }
    };
}

pub mod block_types;
pub mod effects;
pub mod entity_types;
pub mod item_types;

/// Catalog selector used by callers that pick a catalog at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Items,
    Blocks,
    Entities,
    Effects,
}

impl Catalog {
    pub fn ids(self) -> &'static [&'static str] {
        match self {
            Catalog::Items => item_types::ALL,
            Catalog::Blocks => block_types::ALL,
            Catalog::Entities => entity_types::ALL,
            Catalog::Effects => effects::ALL,
        }
    }
}

/// `id` with the `minecraft` namespace added when it has none.
fn namespaced(id: &str) -> Cow<'_, str> {
    if id.contains(':') {
        Cow::Borrowed(id)
    } else {
        Cow::Owned(format!("minecraft:{id}"))
    }
}

fn contains_id(all: &[&str], id: &str) -> bool {
    if id.contains(':') {
        all.contains(&id)
    } else {
        all.iter()
            .any(|full| full.strip_prefix("minecraft:") == Some(id))
    }
}

fn search_ids(all: &[&'static str], fragment: &str) -> Vec<&'static str> {
    all.iter()
        .copied()
        .filter(|id| id.contains(fragment))
        .collect()
}
