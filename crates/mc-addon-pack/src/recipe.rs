//! Crafting and smelting recipes (`recipes/*.json`).
//!
//! The same types build new recipes and read existing ones back.

use std::collections::BTreeMap;

use mc_addon_catalog::item_types;
use mc_addon_core::{AddonError, FormatVersion, Result, Value};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Pattern grids are at most this many rows and columns.
pub const MAX_GRID: usize = 3;

fn default_count() -> u8 {
    1
}

fn is_one(n: &u8) -> bool {
    *n == 1
}

fn is_zero(n: &i16) -> bool {
    *n == 0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDescription {
    pub identifier: String,
}

/// An ingredient or result: an item, or an item tag for ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeItem {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub data: i16,
    #[serde(default = "default_count", skip_serializing_if = "is_one")]
    pub count: u8,
}

impl RecipeItem {
    pub fn item(id: &str) -> Self {
        Self {
            item: id.to_string(),
            tag: None,
            data: 0,
            count: 1,
        }
    }

    /// Any item carrying `tag`, e.g. `minecraft:planks`.
    pub fn tag(tag: &str) -> Self {
        Self {
            item: String::new(),
            tag: Some(tag.to_string()),
            data: 0,
            count: 1,
        }
    }

    pub fn count(mut self, count: u8) -> Self {
        self.count = count.max(1);
        self
    }

    pub fn data(mut self, data: i16) -> Self {
        self.data = data;
        self
    }

    fn note_unknown_vanilla(&self, recipe: &str) {
        if self.item.starts_with("minecraft:") && !item_types::contains(&self.item) {
            debug!("{recipe}: {} is not in the vanilla item catalog", self.item);
        }
    }
}

fn crafting_table() -> Vec<String> {
    vec!["crafting_table".to_string()]
}

fn furnace() -> Vec<String> {
    vec!["furnace".to_string()]
}

/// `minecraft:recipe_shaped`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedRecipe {
    pub description: RecipeDescription,
    #[serde(default = "crafting_table")]
    pub tags: Vec<String>,
    /// Rows such as `["ABA", " C ", " C "]`; spaces are empty slots.
    pub pattern: Vec<String>,
    pub key: BTreeMap<String, RecipeItem>,
    pub result: RecipeItem,
}

impl ShapedRecipe {
    /// Fails when the pattern is empty or larger than 3x3.
    pub fn new(identifier: &str, pattern: &[&str], result: RecipeItem) -> Result<Self> {
        let width = pattern.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        if pattern.is_empty() || width == 0 {
            return Err(AddonError::MissingField(format!("{identifier}: pattern")));
        }
        if pattern.len() > MAX_GRID || width > MAX_GRID {
            return Err(AddonError::OutOfRange {
                field: format!("{identifier}: pattern size"),
                value: format!("{}x{}", width, pattern.len()),
                min: "1x1".into(),
                max: "3x3".into(),
            });
        }
        Ok(Self {
            description: RecipeDescription {
                identifier: identifier.to_string(),
            },
            tags: crafting_table(),
            pattern: pattern.iter().map(|r| r.to_string()).collect(),
            key: BTreeMap::new(),
            result,
        })
    }

    pub fn key(mut self, symbol: char, item: RecipeItem) -> Self {
        self.key.insert(symbol.to_string(), item);
        self
    }

    /// Replace the default `crafting_table` tag.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// `(width, height)` of the pattern.
    pub fn size(&self) -> (usize, usize) {
        let width = self.pattern.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        (width, self.pattern.len())
    }

    /// Every symbol used by the pattern must be defined in `key`.
    pub fn validate(&self) -> Result<()> {
        let id = &self.description.identifier;
        for symbol in self.pattern.iter().flat_map(|r| r.chars()).filter(|c| *c != ' ') {
            if !self.key.contains_key(&symbol.to_string()) {
                return Err(AddonError::MissingField(format!("{id}: key '{symbol}'")));
            }
        }
        for symbol in self.key.keys() {
            if !self.pattern.iter().any(|r| r.contains(symbol.as_str())) {
                warn!("{id}: key '{symbol}' is not used by the pattern");
            }
        }
        Ok(())
    }
}

/// `minecraft:recipe_shapeless`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapelessRecipe {
    pub description: RecipeDescription,
    #[serde(default = "crafting_table")]
    pub tags: Vec<String>,
    pub ingredients: Vec<RecipeItem>,
    pub result: RecipeItem,
}

impl ShapelessRecipe {
    pub fn new(identifier: &str, result: RecipeItem) -> Self {
        Self {
            description: RecipeDescription {
                identifier: identifier.to_string(),
            },
            tags: crafting_table(),
            ingredients: Vec::new(),
            result,
        }
    }

    pub fn ingredient(mut self, item: RecipeItem) -> Self {
        self.ingredients.push(item);
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// One to nine ingredient slots.
    pub fn validate(&self) -> Result<()> {
        let id = &self.description.identifier;
        if self.ingredients.is_empty() {
            return Err(AddonError::MissingField(format!("{id}: ingredients")));
        }
        let slots: usize = self.ingredients.iter().map(|i| i.count as usize).sum();
        if slots > MAX_GRID * MAX_GRID {
            return Err(AddonError::OutOfRange {
                field: format!("{id}: ingredient slots"),
                value: slots.to_string(),
                min: "1".into(),
                max: (MAX_GRID * MAX_GRID).to_string(),
            });
        }
        Ok(())
    }
}

/// `minecraft:recipe_furnace`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnaceRecipe {
    pub description: RecipeDescription,
    #[serde(default = "furnace")]
    pub tags: Vec<String>,
    pub input: String,
    pub output: String,
}

impl FurnaceRecipe {
    pub fn new(identifier: &str, input: &str, output: &str) -> Self {
        Self {
            description: RecipeDescription {
                identifier: identifier.to_string(),
            },
            tags: furnace(),
            input: input.to_string(),
            output: output.to_string(),
        }
    }

    /// e.g. `["furnace", "blast_furnace"]`.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// A recipe file holds exactly one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Recipe {
    Shaped(ShapedRecipe),
    Shapeless(ShapelessRecipe),
    Furnace(FurnaceRecipe),
}

impl Recipe {
    pub fn identifier(&self) -> &str {
        match self {
            Recipe::Shaped(r) => &r.description.identifier,
            Recipe::Shapeless(r) => &r.description.identifier,
            Recipe::Furnace(r) => &r.description.identifier,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Recipe::Shaped(r) => r.validate()?,
            Recipe::Shapeless(r) => r.validate()?,
            Recipe::Furnace(_) => {}
        }
        self.note_unknown_vanilla();
        Ok(())
    }

    fn note_unknown_vanilla(&self) {
        let id = self.identifier();
        match self {
            Recipe::Shaped(r) => r
                .key
                .values()
                .chain(std::iter::once(&r.result))
                .for_each(|i| i.note_unknown_vanilla(id)),
            Recipe::Shapeless(r) => r
                .ingredients
                .iter()
                .chain(std::iter::once(&r.result))
                .for_each(|i| i.note_unknown_vanilla(id)),
            Recipe::Furnace(r) => {
                RecipeItem::item(&r.input).note_unknown_vanilla(id);
                RecipeItem::item(&r.output).note_unknown_vanilla(id);
            }
        }
    }

    /// The full recipe document; fails on an invalid recipe.
    pub fn to_json(&self) -> Result<Value> {
        self.validate()?;
        let file = RecipeFile {
            format_version: FormatVersion::RECIPE.to_string(),
            shaped: None,
            shapeless: None,
            furnace: None,
        };
        let file = match self.clone() {
            Recipe::Shaped(r) => RecipeFile { shaped: Some(r), ..file },
            Recipe::Shapeless(r) => RecipeFile { shapeless: Some(r), ..file },
            Recipe::Furnace(r) => RecipeFile { furnace: Some(r), ..file },
        };
        Ok(serde_json::to_value(file)?)
    }
}

impl From<ShapedRecipe> for Recipe {
    fn from(r: ShapedRecipe) -> Self {
        Recipe::Shaped(r)
    }
}

impl From<ShapelessRecipe> for Recipe {
    fn from(r: ShapelessRecipe) -> Self {
        Recipe::Shapeless(r)
    }
}

impl From<FurnaceRecipe> for Recipe {
    fn from(r: FurnaceRecipe) -> Self {
        Recipe::Furnace(r)
    }
}

/// Recipe file as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeFile {
    pub format_version: String,
    #[serde(rename = "minecraft:recipe_shaped", default, skip_serializing_if = "Option::is_none")]
    pub shaped: Option<ShapedRecipe>,
    #[serde(rename = "minecraft:recipe_shapeless", default, skip_serializing_if = "Option::is_none")]
    pub shapeless: Option<ShapelessRecipe>,
    #[serde(rename = "minecraft:recipe_furnace", default, skip_serializing_if = "Option::is_none")]
    pub furnace: Option<FurnaceRecipe>,
}

impl RecipeFile {
    /// Parse from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The recipe in this file, if it is of a supported kind.
    pub fn recipe(&self) -> Option<Recipe> {
        if let Some(r) = &self.shaped {
            Some(Recipe::Shaped(r.clone()))
        } else if let Some(r) = &self.shapeless {
            Some(Recipe::Shapeless(r.clone()))
        } else {
            self.furnace.clone().map(Recipe::Furnace)
        }
    }
}
