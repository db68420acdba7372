//! Namespaced identifiers (`namespace:path`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AddonError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    pub fn new(namespace: &str, path: &str) -> Result<Self> {
        let raw = format!("{namespace}:{path}");
        validate_part(&raw, namespace, "empty namespace")?;
        validate_part(&raw, path, "empty path")?;
        if namespace.contains('/') {
            return Err(AddonError::InvalidIdentifier {
                id: raw,
                reason: "namespace cannot contain '/'",
            });
        }
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Parse `namespace:path`. A missing namespace is an error.
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((ns, path)) => Self::new(ns, path),
            None => Err(AddonError::InvalidIdentifier {
                id: s.to_string(),
                reason: "missing namespace",
            }),
        }
    }

    /// Identifier for custom content; the `minecraft` namespace is reserved.
    pub fn custom(s: &str) -> Result<Self> {
        let id = Self::parse(s)?;
        if id.is_vanilla() {
            return Err(AddonError::InvalidIdentifier {
                id: s.to_string(),
                reason: "the minecraft namespace is reserved",
            });
        }
        Ok(id)
    }

    pub fn minecraft(path: &str) -> Result<Self> {
        Self::new("minecraft", path)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_vanilla(&self) -> bool {
        self.namespace == "minecraft"
    }

    /// File name stem for this identifier, e.g. `mobs/ghoul` -> `mobs_ghoul`.
    pub fn file_stem(&self) -> String {
        self.path.replace('/', "_")
    }
}

fn validate_part(raw: &str, part: &str, empty_reason: &'static str) -> Result<()> {
    if part.is_empty() {
        return Err(AddonError::InvalidIdentifier {
            id: raw.to_string(),
            reason: empty_reason,
        });
    }
    let valid = part
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-' | '/'));
    if !valid {
        return Err(AddonError::InvalidIdentifier {
            id: raw.to_string(),
            reason: "only lowercase letters, digits and _ . - / are allowed",
        });
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = AddonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Identifier::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let id = Identifier::parse("custom:mobs/ghoul").unwrap();
        assert_eq!(id.namespace(), "custom");
        assert_eq!(id.path(), "mobs/ghoul");
        assert_eq!(id.to_string(), "custom:mobs/ghoul");
        assert_eq!(id.file_stem(), "mobs_ghoul");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Identifier::parse("ghoul").is_err());
        assert!(Identifier::parse(":ghoul").is_err());
        assert!(Identifier::parse("custom:").is_err());
        assert!(Identifier::parse("Custom:Ghoul").is_err());
        assert!(Identifier::parse("a/b:c").is_err());
    }

    #[test]
    fn custom_rejects_vanilla_namespace() {
        assert!(Identifier::custom("minecraft:zombie").is_err());
        assert!(Identifier::custom("custom:zombie").is_ok());
        assert!(Identifier::minecraft("zombie").unwrap().is_vanilla());
    }

    #[test]
    fn serde_as_string() {
        let id: Identifier = serde_json::from_str("\"custom:ruby\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"custom:ruby\"");
        assert!(serde_json::from_str::<Identifier>("\"ruby\"").is_err());
    }
}
