//! The behavior/resource pack pair and its on-disk layout.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mc_addon_core::{AddonError, EngineVersion, Identifier, Result, Value};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::block::BlockDefinition;
use crate::client_entity::ClientEntityDefinition;
use crate::entity::EntityDefinition;
use crate::item::ItemDefinition;
use crate::language::{languages_json, LanguageFile, DEFAULT_LANGUAGE};
use crate::loot_table::LootTable;
use crate::manifest::{PackKind, PackManifest};
use crate::recipe::Recipe;

/// Where an export wrote its packs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub behavior_dir: PathBuf,
    pub resource_dir: PathBuf,
    /// Every file written, relative to the output directory.
    pub files: Vec<PathBuf>,
}

/// What an export does when its pack directories or archive already exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnExisting {
    /// Fail with an `AlreadyExists` I/O error before writing anything.
    #[default]
    Refuse,
    /// Delete the earlier export first. Directories without a
    /// `manifest.json` are still refused.
    Replace,
}

/// A complete add-on: two manifests plus every document they ship.
#[derive(Debug, Clone)]
pub struct Addon {
    name: String,
    behavior: PackManifest,
    resource: PackManifest,
    entities: Vec<EntityDefinition>,
    client_entities: Vec<ClientEntityDefinition>,
    items: Vec<ItemDefinition>,
    blocks: Vec<BlockDefinition>,
    recipes: Vec<Recipe>,
    loot_tables: Vec<(String, LootTable)>,
    behavior_lang: LanguageFile,
    resource_lang: LanguageFile,
    /// Output file (pack suffix plus lowercased relative path) to the
    /// document that writes it.
    outputs: HashMap<String, String>,
}

impl Addon {
    /// Fresh manifests for both packs; the behavior pack depends on the
    /// resource pack.
    pub fn new(name: &str, description: &str, version: EngineVersion, min_engine_version: EngineVersion) -> Self {
        let resource = PackManifest::new(
            PackKind::Resource,
            &format!("{name} RP"),
            description,
            version,
            min_engine_version,
        );
        let mut behavior = PackManifest::new(
            PackKind::Behavior,
            &format!("{name} BP"),
            description,
            version,
            min_engine_version,
        );
        behavior.depends_on(&resource);

        let mut behavior_lang = LanguageFile::new();
        behavior_lang.pack(&format!("{name} BP"), description);
        let mut resource_lang = LanguageFile::new();
        resource_lang.pack(&format!("{name} RP"), description);

        Self {
            name: name.to_string(),
            behavior,
            resource,
            entities: Vec::new(),
            client_entities: Vec::new(),
            items: Vec::new(),
            blocks: Vec::new(),
            recipes: Vec::new(),
            loot_tables: Vec::new(),
            behavior_lang,
            resource_lang,
            outputs: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manifest(&self, kind: PackKind) -> &PackManifest {
        match kind {
            PackKind::Behavior => &self.behavior,
            PackKind::Resource => &self.resource,
        }
    }

    pub fn language(&self, kind: PackKind) -> &LanguageFile {
        match kind {
            PackKind::Behavior => &self.behavior_lang,
            PackKind::Resource => &self.resource_lang,
        }
    }

    /// Extra language entry for the resource pack, e.g. an action text.
    pub fn translate(&mut self, key: &str, value: &str) -> &mut Self {
        self.resource_lang.set(key, value);
        self
    }

    /// The name with everything but ASCII letters, digits and `-` replaced
    /// by `_`.
    fn slug(&self) -> String {
        self.name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect()
    }

    /// Directory name of one pack, e.g. `Ruby_Tools_BP`.
    pub fn pack_dir_name(&self, kind: PackKind) -> String {
        format!("{}_{}", self.slug(), kind.suffix())
    }

    /// File name of the packaged add-on, e.g. `Ruby_Tools.mcaddon`.
    pub fn archive_name(&self) -> String {
        format!("{}.mcaddon", self.slug())
    }

    /// Reserve the file `owner` exports to. Two documents writing the same
    /// file (same identifier, or identifiers whose file names collide) are
    /// rejected.
    fn claim(&mut self, pack: PackKind, rel: &Path, owner: String) -> Result<()> {
        let key = format!("{}/{}", pack.suffix(), slash_path(rel).to_lowercase());
        match self.outputs.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(owner);
                Ok(())
            }
            Entry::Occupied(slot) if *slot.get() == owner => Err(AddonError::DuplicateIdentifier(owner)),
            Entry::Occupied(slot) => Err(AddonError::DuplicateIdentifier(format!(
                "{owner} clashes with {} at {}",
                slot.get(),
                slash_path(rel)
            ))),
        }
    }

    pub fn add_entity(&mut self, entity: EntityDefinition) -> Result<&mut Self> {
        self.claim(
            PackKind::Behavior,
            &entity_path(entity.identifier()),
            format!("entity {}", entity.identifier()),
        )?;
        if let Some(name) = entity.name() {
            self.resource_lang.entity_name(entity.identifier(), name);
            let has_egg = self
                .client_entities
                .iter()
                .any(|c| c.identifier() == entity.identifier() && c.has_spawn_egg());
            if has_egg {
                self.resource_lang.spawn_egg_name(entity.identifier(), name);
            }
        }
        self.entities.push(entity);
        Ok(self)
    }

    pub fn add_client_entity(&mut self, entity: ClientEntityDefinition) -> Result<&mut Self> {
        self.claim(
            PackKind::Resource,
            &client_entity_path(entity.identifier()),
            format!("client_entity {}", entity.identifier()),
        )?;
        if entity.has_spawn_egg() {
            let name = self
                .entities
                .iter()
                .find(|e| e.identifier() == entity.identifier())
                .and_then(|e| e.name())
                .map(String::from);
            if let Some(name) = name {
                self.resource_lang.spawn_egg_name(entity.identifier(), &name);
            }
        }
        self.client_entities.push(entity);
        Ok(self)
    }

    pub fn add_item(&mut self, item: ItemDefinition) -> Result<&mut Self> {
        self.claim(
            PackKind::Behavior,
            &item_path(item.identifier()),
            format!("item {}", item.identifier()),
        )?;
        if let Some(name) = item.name() {
            self.resource_lang.item_name(item.identifier(), name);
        }
        self.items.push(item);
        Ok(self)
    }

    pub fn add_block(&mut self, block: BlockDefinition) -> Result<&mut Self> {
        self.claim(
            PackKind::Behavior,
            &block_path(block.identifier()),
            format!("block {}", block.identifier()),
        )?;
        if let Some(name) = block.name() {
            self.resource_lang.block_name(block.identifier(), name);
        }
        self.blocks.push(block);
        Ok(self)
    }

    /// Invalid recipes are rejected here rather than at export.
    pub fn add_recipe(&mut self, recipe: impl Into<Recipe>) -> Result<&mut Self> {
        let recipe = recipe.into();
        recipe.validate()?;
        self.claim(
            PackKind::Behavior,
            &recipe_path(recipe.identifier()),
            format!("recipe {}", recipe.identifier()),
        )?;
        self.recipes.push(recipe);
        Ok(self)
    }

    /// `path` is relative to `loot_tables/`, e.g. `entities/ghoul`; a
    /// leading `loot_tables/` or trailing `.json` is dropped. Empty, `.`
    /// and `..` segments are rejected.
    pub fn add_loot_table(&mut self, path: &str, table: LootTable) -> Result<&mut Self> {
        let path = normalize_loot_path(path)?;
        self.claim(PackKind::Behavior, &loot_table_path(&path), format!("loot_table {path}"))?;
        self.loot_tables.push((path, table));
        Ok(self)
    }

    /// Pack-relative path to reference a registered loot table from a
    /// component.
    pub fn loot_table_ref(path: &str) -> Result<String> {
        Ok(slash_path(&loot_table_path(&normalize_loot_path(path)?)))
    }

    /// Write both packs under `out_dir`. Existing pack directories are
    /// handled per `on_existing`; nothing is written when they are refused.
    pub fn export(&self, out_dir: &Path, on_existing: OnExisting) -> Result<ExportSummary> {
        let bp_name = self.pack_dir_name(PackKind::Behavior);
        let rp_name = self.pack_dir_name(PackKind::Resource);
        let mut files = Vec::new();

        let dirs = [out_dir.join(&bp_name), out_dir.join(&rp_name)];
        for dir in &dirs {
            check_existing(dir, on_existing)?;
        }
        for dir in dirs.iter().filter(|d| d.exists()) {
            debug!("removing previous export at {}", dir.display());
            fs::remove_dir_all(dir).map_err(|e| AddonError::io(dir, e))?;
        }

        let mut out = PackWriter {
            root: out_dir,
            files: &mut files,
        };

        let bp = Path::new(&bp_name);
        out.write(&bp.join("manifest.json"), self.behavior.to_json_pretty()?.as_bytes())?;
        for e in &self.entities {
            out.json(&bp.join(entity_path(e.identifier())), &e.to_json())?;
        }
        for i in &self.items {
            out.json(&bp.join(item_path(i.identifier())), &i.to_json())?;
        }
        for b in &self.blocks {
            out.json(&bp.join(block_path(b.identifier())), &b.to_json())?;
        }
        for r in &self.recipes {
            out.json(&bp.join(recipe_path(r.identifier())), &r.to_json()?)?;
        }
        for (path, table) in &self.loot_tables {
            out.json(&bp.join(loot_table_path(path)), &table.to_json()?)?;
        }
        out.texts(bp, &self.behavior_lang)?;
        info!(
            "exported {bp_name}: {} entities, {} items, {} blocks, {} recipes, {} loot tables",
            self.entities.len(),
            self.items.len(),
            self.blocks.len(),
            self.recipes.len(),
            self.loot_tables.len()
        );

        let rp = Path::new(&rp_name);
        out.write(&rp.join("manifest.json"), self.resource.to_json_pretty()?.as_bytes())?;
        for c in &self.client_entities {
            out.json(&rp.join(client_entity_path(c.identifier())), &c.to_json())?;
        }
        out.texts(rp, &self.resource_lang)?;
        info!(
            "exported {rp_name}: {} client entities, {} lang entries",
            self.client_entities.len(),
            self.resource_lang.len()
        );

        Ok(ExportSummary {
            behavior_dir: out_dir.join(&bp_name),
            resource_dir: out_dir.join(&rp_name),
            files,
        })
    }

    /// Export, then zip both packs into `<out_dir>/<name>.mcaddon`. An
    /// existing archive follows `on_existing` like the pack directories.
    pub fn package(&self, out_dir: &Path, on_existing: OnExisting) -> Result<PathBuf> {
        let archive = out_dir.join(self.archive_name());
        if on_existing == OnExisting::Refuse && archive.exists() {
            return Err(already_exists(&archive, "archive already exists"));
        }
        let summary = self.export(out_dir, on_existing)?;
        let file = fs::File::create(&archive).map_err(|e| AddonError::io(&archive, e))?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for rel in &summary.files {
            let path = out_dir.join(rel);
            let bytes = fs::read(&path).map_err(|e| AddonError::io(&path, e))?;
            zip.start_file(slash_path(rel), options)
                .map_err(|e| AddonError::Package(e.to_string()))?;
            zip.write_all(&bytes).map_err(|e| AddonError::io(&archive, e))?;
        }
        zip.finish().map_err(|e| AddonError::Package(e.to_string()))?;

        info!("packaged {} ({} files)", archive.display(), summary.files.len());
        Ok(archive)
    }
}

/// Writes files below an output root and records their relative paths.
struct PackWriter<'a> {
    root: &'a Path,
    files: &'a mut Vec<PathBuf>,
}

impl PackWriter<'_> {
    fn write(&mut self, rel: &Path, contents: &[u8]) -> Result<()> {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AddonError::io(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| AddonError::io(&path, e))?;
        self.files.push(rel.to_path_buf());
        Ok(())
    }

    fn json(&mut self, rel: &Path, value: &Value) -> Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.write(rel, text.as_bytes())
    }

    fn texts(&mut self, pack: &Path, lang: &LanguageFile) -> Result<()> {
        let texts = pack.join("texts");
        self.write(
            &texts.join(format!("{DEFAULT_LANGUAGE}.lang")),
            lang.render().as_bytes(),
        )?;
        self.json(&texts.join("languages.json"), &languages_json())
    }
}

fn already_exists(path: &Path, message: &str) -> AddonError {
    AddonError::io(path, io::Error::new(io::ErrorKind::AlreadyExists, message.to_string()))
}

fn check_existing(dir: &Path, on_existing: OnExisting) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    match on_existing {
        OnExisting::Refuse => Err(already_exists(dir, "pack directory already exists")),
        OnExisting::Replace if dir.join("manifest.json").is_file() => Ok(()),
        OnExisting::Replace => Err(already_exists(dir, "not a pack directory, refusing to replace")),
    }
}

// Pack-relative output paths. Registration and export both go through
// these so duplicate detection sees the real file names.

fn entity_path(id: &Identifier) -> PathBuf {
    Path::new("entities").join(format!("{}.json", id.file_stem()))
}

fn item_path(id: &Identifier) -> PathBuf {
    Path::new("items").join(format!("{}.json", id.file_stem()))
}

fn block_path(id: &Identifier) -> PathBuf {
    Path::new("blocks").join(format!("{}.json", id.file_stem()))
}

fn client_entity_path(id: &Identifier) -> PathBuf {
    Path::new("entity").join(format!("{}.entity.json", id.file_stem()))
}

fn recipe_path(identifier: &str) -> PathBuf {
    let path = identifier.split_once(':').map_or(identifier, |(_, p)| p);
    Path::new("recipes").join(format!("{}.json", path.replace('/', "_")))
}

fn loot_table_path(path: &str) -> PathBuf {
    Path::new("loot_tables").join(format!("{path}.json"))
}

/// `rel` joined with forward slashes, as zip entries and pack references
/// spell it.
fn slash_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn normalize_loot_path(raw: &str) -> Result<String> {
    let path = raw.trim_matches('/');
    let path = path.strip_prefix("loot_tables/").unwrap_or(path);
    let path = path.strip_suffix(".json").unwrap_or(path);
    let invalid = |reason| AddonError::InvalidIdentifier {
        id: raw.to_string(),
        reason,
    };
    if path.contains('\\') {
        return Err(invalid("loot table paths use '/' separators"));
    }
    if path.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..") {
        return Err(invalid("loot table path has an empty, '.' or '..' segment"));
    }
    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Category, MenuCategory};
    use crate::loot_table::{LootEntry, LootNumber, LootPool};
    use crate::recipe::{RecipeItem, ShapedRecipe};
    use mc_addon_components::entity::{Health, Loot};
    use mc_addon_components::item::Icon;
    use mc_addon_core::{json, Identifier};
    use std::io::Read;

    fn id(s: &str) -> Identifier {
        Identifier::custom(s).unwrap()
    }

    fn sample() -> Addon {
        let mut addon = Addon::new(
            "Ruby Tools",
            "Rubies and a ghoul",
            EngineVersion::new(1, 0, 0),
            EngineVersion::default(),
        );
        addon
            .add_entity(
                EntityDefinition::new(id("custom:ghoul"))
                    .display_name("Ghoul")
                    .component(Health::new(20))
                    .component(Loot::new(&Addon::loot_table_ref("entities/ghoul").unwrap())),
            )
            .unwrap()
            .add_client_entity(
                ClientEntityDefinition::simple(id("custom:ghoul"), "textures/entity/ghoul", "geometry.ghoul")
                    .spawn_egg_colors("#223322", "#889988"),
            )
            .unwrap()
            .add_item(
                ItemDefinition::new(id("custom:ruby"))
                    .display_name("Ruby")
                    .menu_category(MenuCategory::new(Category::Items))
                    .component(Icon::new("ruby")),
            )
            .unwrap()
            .add_block(BlockDefinition::new(id("custom:ruby_block")).display_name("Block of Ruby"))
            .unwrap()
            .add_recipe(
                ShapedRecipe::new("custom:ruby_block", &["RRR", "RRR", "RRR"], RecipeItem::item("custom:ruby_block"))
                    .unwrap()
                    .key('R', RecipeItem::item("custom:ruby")),
            )
            .unwrap()
            .add_loot_table(
                "loot_tables/entities/ghoul.json",
                LootTable::new().pool(LootPool::new(LootNumber::Fixed(1)).entry(LootEntry::item("custom:ruby"))),
            )
            .unwrap();
        addon
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn manifests_are_linked() {
        let addon = sample();
        let bp = addon.manifest(PackKind::Behavior);
        let rp = addon.manifest(PackKind::Resource);
        assert_eq!(bp.dependencies[0].uuid, rp.header.uuid);
        assert!(rp.dependencies.is_empty());
        assert_eq!(bp.header.name, "Ruby Tools BP");
    }

    #[test]
    fn language_registration() {
        let addon = sample();
        let lang = addon.language(PackKind::Resource);
        assert_eq!(lang.get("entity.custom:ghoul.name"), Some("Ghoul"));
        assert_eq!(lang.get("item.spawn_egg.entity.custom:ghoul.name"), Some("Spawn Ghoul"));
        assert_eq!(lang.get("item.custom:ruby"), Some("Ruby"));
        assert_eq!(lang.get("tile.custom:ruby_block.name"), Some("Block of Ruby"));
        assert_eq!(addon.language(PackKind::Behavior).get("pack.name"), Some("Ruby Tools BP"));
    }

    #[test]
    fn duplicates_rejected() {
        let mut addon = sample();
        let err = addon.add_item(ItemDefinition::new(id("custom:ruby"))).unwrap_err();
        assert!(matches!(err, AddonError::DuplicateIdentifier(ref s) if s == "item custom:ruby"));
        assert!(addon.add_loot_table("entities/ghoul", LootTable::new()).is_err());
        // Same identifier in a different document kind is fine.
        assert!(addon.add_entity(EntityDefinition::new(id("custom:ruby"))).is_ok());
    }

    #[test]
    fn colliding_file_names_rejected() {
        let mut addon = sample();
        // Namespaces are dropped from file names.
        let err = addon.add_entity(EntityDefinition::new(id("other:ghoul"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate identifier: entity other:ghoul clashes with entity custom:ghoul at entities/ghoul.json"
        );
        // `/` in a path becomes `_`.
        addon.add_item(ItemDefinition::new(id("custom:gems/ruby"))).unwrap();
        let err = addon.add_item(ItemDefinition::new(id("custom:gems_ruby"))).unwrap_err();
        assert!(matches!(err, AddonError::DuplicateIdentifier(ref s) if s.ends_with("at items/gems_ruby.json")));
        let err = addon
            .add_recipe(
                ShapedRecipe::new("other:ruby_block", &["R"], RecipeItem::item("custom:ruby"))
                    .unwrap()
                    .key('R', RecipeItem::item("custom:ruby")),
            )
            .unwrap_err();
        assert!(matches!(err, AddonError::DuplicateIdentifier(_)));
        let err = addon
            .add_client_entity(ClientEntityDefinition::simple(id("other:ghoul"), "t", "geometry.g"))
            .unwrap_err();
        assert!(matches!(err, AddonError::DuplicateIdentifier(_)));
        // Nothing rejected was registered.
        assert_eq!(addon.entities.len(), 1);
        assert_eq!(addon.items.len(), 2);
    }

    #[test]
    fn loot_paths_stay_inside_the_pack() {
        let mut addon = sample();
        for bad in ["../escape", "entities/../../x", "entities//ghoul", "./ghoul", "", "/", "a\\b"] {
            assert!(
                matches!(addon.add_loot_table(bad, LootTable::new()), Err(AddonError::InvalidIdentifier { .. })),
                "accepted {bad:?}"
            );
            assert!(Addon::loot_table_ref(bad).is_err());
        }
        assert_eq!(
            Addon::loot_table_ref("/loot_tables/chests/ruby.json/").unwrap(),
            "loot_tables/chests/ruby.json"
        );
        assert!(addon.add_loot_table("chests/ruby", LootTable::new()).is_ok());
        assert_eq!(addon.loot_tables.len(), 2);
    }

    #[test]
    fn names_ending_in_pack_suffix() {
        let addon = Addon::new("Tools_BP", "", EngineVersion::new(1, 0, 0), EngineVersion::default());
        assert_eq!(addon.pack_dir_name(PackKind::Behavior), "Tools_BP_BP");
        assert_eq!(addon.pack_dir_name(PackKind::Resource), "Tools_BP_RP");
        assert_eq!(addon.archive_name(), "Tools_BP.mcaddon");
        let addon = Addon::new("Ruby Tools!", "", EngineVersion::new(1, 0, 0), EngineVersion::default());
        assert_eq!(addon.archive_name(), "Ruby_Tools_.mcaddon");
    }

    #[test]
    fn existing_output_refused_unless_replacing() {
        let out = temp_dir("mc_addon_existing_output");
        let addon = sample();
        addon.export(&out, OnExisting::Refuse).unwrap();
        let marker = out.join("Ruby_Tools_BP").join("keep.txt");
        fs::write(&marker, "mine").unwrap();

        let err = addon.export(&out, OnExisting::Refuse).unwrap_err();
        assert!(matches!(err, AddonError::Io { ref source, .. } if source.kind() == io::ErrorKind::AlreadyExists));
        assert!(marker.is_file());

        addon.export(&out, OnExisting::Replace).unwrap();
        assert!(!marker.exists());

        // A directory that is not a pack is never deleted.
        fs::remove_file(out.join("Ruby_Tools_RP").join("manifest.json")).unwrap();
        let err = addon.export(&out, OnExisting::Replace).unwrap_err();
        assert!(matches!(err, AddonError::Io { ref source, .. } if source.kind() == io::ErrorKind::AlreadyExists));
        assert!(out.join("Ruby_Tools_RP").join("texts").is_dir());
        assert!(out.join("Ruby_Tools_BP").join("manifest.json").is_file());

        let _ = fs::remove_dir_all(&out);
    }

    #[test]
    fn existing_archive_refused() {
        let out = temp_dir("mc_addon_existing_archive");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("Ruby_Tools.mcaddon"), "old").unwrap();
        assert!(sample().package(&out, OnExisting::Refuse).is_err());
        assert!(!out.join("Ruby_Tools_BP").exists());
        let archive = sample().package(&out, OnExisting::Replace).unwrap();
        assert!(zip::ZipArchive::new(fs::File::open(&archive).unwrap()).is_ok());
        let _ = fs::remove_dir_all(&out);
    }

    #[test]
    fn invalid_recipe_rejected() {
        let mut addon = sample();
        let bad = ShapedRecipe::new("custom:bad", &["AB"], RecipeItem::item("custom:ruby")).unwrap();
        assert!(addon.add_recipe(bad).is_err());
    }

    #[test]
    fn export_layout() {
        let out = temp_dir("mc_addon_export_layout");
        let summary = sample().export(&out, OnExisting::Refuse).unwrap();
        let bp = &summary.behavior_dir;
        let rp = &summary.resource_dir;
        assert!(bp.ends_with("Ruby_Tools_BP"));
        for rel in [
            "manifest.json",
            "entities/ghoul.json",
            "items/ruby.json",
            "blocks/ruby_block.json",
            "recipes/ruby_block.json",
            "loot_tables/entities/ghoul.json",
            "texts/en_US.lang",
            "texts/languages.json",
        ] {
            assert!(bp.join(rel).is_file(), "missing BP file {rel}");
        }
        for rel in ["manifest.json", "entity/ghoul.entity.json", "texts/en_US.lang", "texts/languages.json"] {
            assert!(rp.join(rel).is_file(), "missing RP file {rel}");
        }

        let entity: Value = serde_json::from_str(&fs::read_to_string(bp.join("entities/ghoul.json")).unwrap()).unwrap();
        assert_eq!(
            entity["minecraft:entity"]["components"]["minecraft:loot"],
            json!({ "table": "loot_tables/entities/ghoul.json" })
        );
        let lang = fs::read_to_string(rp.join("texts/en_US.lang")).unwrap();
        assert!(lang.contains("entity.custom:ghoul.name=Ghoul\n"));
        assert_eq!(summary.files.len(), 12);

        let _ = fs::remove_dir_all(&out);
    }

    #[test]
    fn package_zips_both_packs() {
        let out = temp_dir("mc_addon_package");
        let archive = sample().package(&out, OnExisting::Refuse).unwrap();
        assert_eq!(archive.file_name().unwrap(), "Ruby_Tools.mcaddon");

        let mut zip = zip::ZipArchive::new(fs::File::open(&archive).unwrap()).unwrap();
        assert_eq!(zip.len(), 12);
        let mut manifest = String::new();
        zip.by_name("Ruby_Tools_RP/manifest.json")
            .unwrap()
            .read_to_string(&mut manifest)
            .unwrap();
        assert!(manifest.contains("\"resources\""));
        assert!(zip.by_name("Ruby_Tools_BP/entities/ghoul.json").is_ok());

        let _ = fs::remove_dir_all(&out);
    }
}
