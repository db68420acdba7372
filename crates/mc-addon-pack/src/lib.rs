//! Bedrock add-on documents and pack layout.
//!
//! Definitions (entities, items, blocks, recipes, loot tables) aggregate
//! component builders into the JSON documents the game loads. [`Addon`]
//! writes them into a behavior/resource pack pair and can package both as a
//! `.mcaddon`; [`loader`] reads packs back from disk.

pub mod addon;
pub mod block;
pub mod client_entity;
pub mod entity;
pub mod item;
pub mod language;
pub mod loader;
pub mod loot_table;
pub mod manifest;
pub mod recipe;

pub use addon::{Addon, ExportSummary, OnExisting};
pub use block::BlockDefinition;
pub use client_entity::ClientEntityDefinition;
pub use entity::{ComponentGroup, EntityDefinition, EntityEvent, EntityProperty};
pub use item::{ItemDefinition, MenuCategory};
pub use language::LanguageFile;
pub use loader::{load_all_packs, load_pack, LoadedPack};
pub use loot_table::LootTable;
pub use manifest::{PackKind, PackManifest};
pub use recipe::{FurnaceRecipe, Recipe, RecipeItem, ShapedRecipe, ShapelessRecipe};
