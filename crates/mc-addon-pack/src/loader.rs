//! Pack loader: scans exported or hand-written packs back into summaries.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use mc_addon_core::{AddonError, Result, Value};
use tracing::{debug, info, warn};

use crate::block::{BlockFile, BlockSummary};
use crate::entity::{EntityFile, EntitySummary};
use crate::item::{ItemFile, ItemSummary};
use crate::language::{LanguageFile, DEFAULT_LANGUAGE};
use crate::loot_table::LootTable;
use crate::manifest::{PackKind, PackManifest};
use crate::recipe::RecipeFile;

/// A pack read from disk.
#[derive(Debug, Clone)]
pub struct LoadedPack {
    pub manifest: PackManifest,
    /// `None` for module types this crate does not generate (skins, worlds).
    pub kind: Option<PackKind>,
    pub entities: Vec<EntitySummary>,
    pub items: Vec<ItemSummary>,
    pub blocks: Vec<BlockSummary>,
    pub recipes: Vec<RecipeFile>,
    /// Keyed by path below `loot_tables/` without extension, e.g.
    /// `entities/ghoul`.
    pub loot_tables: HashMap<String, LootTable>,
    /// Identifiers of `entity/*.entity.json` files in a resource pack.
    pub client_entities: Vec<String>,
    pub language: Option<LanguageFile>,
}

/// Load a single pack from a directory containing `manifest.json`.
pub fn load_pack(path: &Path) -> Result<LoadedPack> {
    let manifest_path = path.join("manifest.json");
    let manifest_str = fs::read_to_string(&manifest_path).map_err(|e| AddonError::io(&manifest_path, e))?;
    let manifest = PackManifest::parse(&manifest_str)?;
    let kind = manifest.kind();

    let entities: Vec<EntitySummary> = load_and_parse::<EntityFile>(path, "entities")
        .iter()
        .map(EntityFile::summarize)
        .collect();

    let items: Vec<ItemSummary> = load_and_parse::<ItemFile>(path, "items")
        .iter()
        .map(ItemFile::summarize)
        .collect();

    let blocks: Vec<BlockSummary> = load_and_parse::<BlockFile>(path, "blocks")
        .iter()
        .map(BlockFile::summarize)
        .collect();

    let recipes = load_and_parse::<RecipeFile>(path, "recipes");

    let mut loot_tables = HashMap::new();
    load_loot_tables(&path.join("loot_tables"), "", &mut loot_tables);

    let client_entities: Vec<String> = load_and_parse::<Value>(path, "entity")
        .iter()
        .filter_map(|v| {
            v.pointer("/minecraft:client_entity/description/identifier")
                .and_then(Value::as_str)
                .map(String::from)
        })
        .collect();

    let lang_path = path.join("texts").join(format!("{DEFAULT_LANGUAGE}.lang"));
    let language = match fs::read_to_string(&lang_path) {
        Ok(text) => Some(LanguageFile::parse(&text)),
        Err(_) => None,
    };

    info!(
        "Loaded {} '{}' v{} ({} entities, {} items, {} blocks, {} recipes, {} loot tables, {} client entities)",
        kind.map(PackKind::suffix).unwrap_or("pack"),
        manifest.header.name,
        manifest.version_string(),
        entities.len(),
        items.len(),
        blocks.len(),
        recipes.len(),
        loot_tables.len(),
        client_entities.len(),
    );

    Ok(LoadedPack {
        manifest,
        kind,
        entities,
        items,
        blocks,
        recipes,
        loot_tables,
        client_entities,
        language,
    })
}

/// Scan a directory for packs and load all of them. Packs that fail to
/// load are logged and skipped.
pub fn load_all_packs(packs_dir: &Path) -> Vec<LoadedPack> {
    let mut packs = Vec::new();

    let entries = match fs::read_dir(packs_dir) {
        Ok(e) => e,
        Err(_) => return packs,
    };

    let mut dirs: Vec<_> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir() && p.join("manifest.json").exists())
        .collect();
    dirs.sort();

    for path in dirs {
        match load_pack(&path) {
            Ok(pack) => packs.push(pack),
            Err(e) => warn!("Failed to load pack at {}: {e}", path.display()),
        }
    }

    if !packs.is_empty() {
        info!("Loaded {} pack(s) from {}", packs.len(), packs_dir.display());
    }

    packs
}

/// Load all JSON files from a subdirectory and deserialize them.
fn load_and_parse<T: serde::de::DeserializeOwned>(pack_root: &Path, subdir: &str) -> Vec<T> {
    let dir = pack_root.join(subdir);
    let entries = match fs::read_dir(&dir) {
        Ok(e) => e,
        Err(_) => return Vec::new(),
    };

    let mut paths: Vec<_> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "json"))
        .collect();
    paths.sort();

    let mut results = Vec::new();
    for path in paths {
        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<T>(&content) {
                Ok(parsed) => results.push(parsed),
                Err(e) => warn!("Failed to parse {}: {e}", path.display()),
            },
            Err(e) => warn!("Failed to read {}: {e}", path.display()),
        }
    }
    results
}

/// Load loot tables recursively, keyed by their relative path.
fn load_loot_tables(dir: &Path, prefix: &str, tables: &mut HashMap<String, LootTable>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        if path.is_dir() {
            load_loot_tables(&path, &format!("{prefix}{name}/"), tables);
            continue;
        }
        let Some(stem) = name.strip_suffix(".json") else {
            continue;
        };
        let key = format!("{prefix}{stem}");
        match fs::read_to_string(&path) {
            Ok(content) => match LootTable::parse_json(&content) {
                Ok(table) => {
                    debug!("loot table {key}");
                    tables.insert(key, table);
                }
                Err(e) => warn!("Failed to parse loot table {}: {e}", path.display()),
            },
            Err(e) => warn!("Failed to read {}: {e}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addon::{Addon, OnExisting};
    use crate::client_entity::ClientEntityDefinition;
    use crate::entity::EntityDefinition;
    use crate::loot_table::{LootEntry, LootNumber, LootPool};
    use crate::recipe::FurnaceRecipe;
    use mc_addon_components::entity::Health;
    use mc_addon_core::{EngineVersion, Identifier};

    #[test]
    fn load_empty_directory() {
        let dir = std::env::temp_dir().join("mc_addon_load_empty");
        let _ = fs::create_dir_all(&dir);
        let packs = load_all_packs(&dir);
        assert!(packs.is_empty());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = std::env::temp_dir().join("mc_addon_load_no_manifest");
        let _ = fs::create_dir_all(&dir);
        assert!(matches!(load_pack(&dir), Err(AddonError::Io { .. })));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_hand_written_pack() {
        let dir = std::env::temp_dir().join("mc_addon_load_hand_written");
        let pack_dir = dir.join("test_pack");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(pack_dir.join("entities")).unwrap();

        fs::write(
            pack_dir.join("manifest.json"),
            r#"{
                "format_version": 2,
                "header": {
                    "name": "Test",
                    "uuid": "00000000-0000-0000-0000-000000000001",
                    "version": [1, 0, 0]
                },
                "modules": [{"type": "data", "uuid": "00000000-0000-0000-0000-000000000002", "version": [1, 0, 0]}]
            }"#,
        )
        .unwrap();
        fs::write(
            pack_dir.join("entities").join("guard.json"),
            r#"{
                "format_version": "1.20.0",
                "minecraft:entity": {
                    "description": { "identifier": "custom:guard", "is_summonable": true },
                    "components": {
                        "minecraft:health": { "value": 40, "max": 40 },
                        "minecraft:movement": { "value": 0.3 }
                    }
                }
            }"#,
        )
        .unwrap();
        fs::write(pack_dir.join("entities").join("broken.json"), "{ not json").unwrap();

        let packs = load_all_packs(&dir);
        assert_eq!(packs.len(), 1);
        let pack = &packs[0];
        assert_eq!(pack.manifest.header.name, "Test");
        assert_eq!(pack.kind, Some(PackKind::Behavior));
        assert_eq!(pack.entities.len(), 1);
        assert_eq!(pack.entities[0].identifier, "custom:guard");
        assert_eq!(pack.entities[0].max_health, 40.0);
        assert!(pack.language.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn exported_addon_loads_back() {
        let dir = std::env::temp_dir().join("mc_addon_load_round_trip");
        let _ = fs::remove_dir_all(&dir);

        let ghoul = Identifier::custom("custom:ghoul").unwrap();
        let mut addon = Addon::new("Ghouls", "Night mobs", EngineVersion::new(1, 2, 0), EngineVersion::default());
        addon
            .add_entity(
                EntityDefinition::new(ghoul.clone())
                    .display_name("Ghoul")
                    .component(Health::new(30)),
            )
            .unwrap()
            .add_client_entity(ClientEntityDefinition::simple(ghoul, "textures/entity/ghoul", "geometry.ghoul"))
            .unwrap()
            .add_recipe(FurnaceRecipe::new("custom:cook_flesh", "minecraft:rotten_flesh", "minecraft:leather"))
            .unwrap()
            .add_loot_table(
                "entities/ghoul",
                LootTable::new().pool(LootPool::new(LootNumber::Fixed(1)).entry(LootEntry::item("minecraft:bone"))),
            )
            .unwrap();
        addon.export(&dir, OnExisting::Refuse).unwrap();

        let packs = load_all_packs(&dir);
        assert_eq!(packs.len(), 2);
        let bp = packs.iter().find(|p| p.kind == Some(PackKind::Behavior)).unwrap();
        let rp = packs.iter().find(|p| p.kind == Some(PackKind::Resource)).unwrap();

        assert_eq!(bp.manifest.version_string(), "1.2.0");
        assert_eq!(bp.manifest.dependencies[0].uuid, rp.manifest.header.uuid);
        assert_eq!(bp.entities[0].max_health, 30.0);
        assert_eq!(bp.recipes[0].recipe().unwrap().identifier(), "custom:cook_flesh");
        assert!(bp.loot_tables.contains_key("entities/ghoul"));
        assert_eq!(rp.client_entities, vec!["custom:ghoul"]);
        assert_eq!(
            rp.language.as_ref().and_then(|l| l.get("entity.custom:ghoul.name")),
            Some("Ghoul")
        );

        let _ = fs::remove_dir_all(&dir);
    }
}
