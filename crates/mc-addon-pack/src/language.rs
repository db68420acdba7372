//! `texts/*.lang` files.

use mc_addon_core::{json, Identifier, Value};
use tracing::warn;

/// Language code every generated pack ships.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Ordered `key=value` entries of one language file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageFile {
    entries: Vec<(String, String)>,
}

impl LanguageFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an earlier value in place. Line breaks and tabs
    /// become spaces; a tab would start a trailing comment.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        let value = if value.contains(['\n', '\r', '\t']) {
            warn!("lang value for {key} contains a line break or tab, replaced with spaces");
            value
                .split(['\n', '\r', '\t'])
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            value.to_string()
        };
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key.to_string(), value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pack(&mut self, name: &str, description: &str) -> &mut Self {
        self.set("pack.name", name).set("pack.description", description)
    }

    /// `item.<id>` key, used by items without a display name component.
    pub fn item_name(&mut self, id: &Identifier, name: &str) -> &mut Self {
        self.set(&format!("item.{id}"), name)
    }

    pub fn entity_name(&mut self, id: &Identifier, name: &str) -> &mut Self {
        self.set(&format!("entity.{id}.name"), name)
    }

    /// Spawn egg label, e.g. "Spawn Ghoul".
    pub fn spawn_egg_name(&mut self, id: &Identifier, name: &str) -> &mut Self {
        self.set(&format!("item.spawn_egg.entity.{id}.name"), &format!("Spawn {name}"))
    }

    pub fn block_name(&mut self, id: &Identifier, name: &str) -> &mut Self {
        self.set(&format!("tile.{id}.name"), name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// File contents, one `key=value` per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.entries {
            out.push_str(k);
            out.push('=');
            out.push_str(v);
            out.push('\n');
        }
        out
    }

    /// Read a lang file. `##` at the start of a line or after a tab starts
    /// a comment, so values may contain `##`; lines without `=` are skipped.
    pub fn parse(text: &str) -> Self {
        let mut file = Self::new();
        for line in text.lines() {
            if line.trim_start().starts_with("##") {
                continue;
            }
            let line = match line.find("\t##") {
                Some(i) => &line[..i],
                None => line,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.split_once('=') {
                Some((k, v)) => {
                    file.set(k.trim(), v.trim());
                }
                None => warn!("lang line without '=': {line}"),
            }
        }
        file
    }
}

/// `texts/languages.json` contents.
pub fn languages_json() -> Value {
    json!([DEFAULT_LANGUAGE])
}
