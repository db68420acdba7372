//! Pack manifest.json generation and parsing.

use mc_addon_core::{EngineVersion, FormatVersion, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which half of an add-on a manifest describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackKind {
    Behavior,
    Resource,
}

impl PackKind {
    /// `modules[].type` value.
    pub fn module_type(self) -> &'static str {
        match self {
            PackKind::Behavior => "data",
            PackKind::Resource => "resources",
        }
    }

    /// Directory suffix, `BP` or `RP`.
    pub fn suffix(self) -> &'static str {
        match self {
            PackKind::Behavior => "BP",
            PackKind::Resource => "RP",
        }
    }
}

/// Top-level manifest.json structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackManifest {
    /// Integer (`2`) in generated manifests; older packs use a string.
    pub format_version: serde_json::Value,
    pub header: ManifestHeader,
    #[serde(default)]
    pub modules: Vec<ManifestModule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ManifestDependency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub uuid: String,
    pub version: EngineVersion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_engine_version: Option<EngineVersion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestModule {
    #[serde(rename = "type")]
    pub module_type: String,
    pub uuid: String,
    pub version: EngineVersion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestDependency {
    pub uuid: String,
    pub version: EngineVersion,
}

impl PackManifest {
    /// A fresh manifest with random header and module UUIDs.
    pub fn new(
        kind: PackKind,
        name: &str,
        description: &str,
        version: EngineVersion,
        min_engine_version: EngineVersion,
    ) -> Self {
        Self {
            format_version: FormatVersion::MANIFEST.into(),
            header: ManifestHeader {
                name: name.to_string(),
                description: description.to_string(),
                uuid: uuid_v4(),
                version,
                min_engine_version: Some(min_engine_version),
            },
            modules: vec![ManifestModule {
                module_type: kind.module_type().to_string(),
                uuid: uuid_v4(),
                version,
            }],
            dependencies: Vec::new(),
        }
    }

    /// Parse a manifest from a JSON string.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Make this pack require `other`. Adding the same pack twice is a no-op.
    pub fn depends_on(&mut self, other: &PackManifest) -> &mut Self {
        if !self
            .dependencies
            .iter()
            .any(|d| d.uuid == other.header.uuid)
        {
            self.dependencies.push(ManifestDependency {
                uuid: other.header.uuid.clone(),
                version: other.header.version,
            });
        }
        self
    }

    /// Pack kind derived from the first recognized module.
    pub fn kind(&self) -> Option<PackKind> {
        self.modules.iter().find_map(|m| match m.module_type.as_str() {
            "data" | "script" => Some(PackKind::Behavior),
            "resources" => Some(PackKind::Resource),
            _ => None,
        })
    }

    /// Version as a dot-separated string, e.g. "1.0.0".
    pub fn version_string(&self) -> String {
        self.header.version.to_string()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Random (version 4) UUID in the usual 8-4-4-4-12 form.
pub fn uuid_v4() -> String {
    let mut bytes: [u8; 16] = rand::thread_rng().gen();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_manifest() {
        let json = r#"{
            "format_version": 2,
            "header": {
                "name": "Test Pack",
                "description": "A test behavior pack",
                "uuid": "12345678-1234-1234-1234-123456789012",
                "version": [1, 2, 3],
                "min_engine_version": [1, 21, 0]
            },
            "modules": [
                {
                    "type": "data",
                    "uuid": "87654321-4321-4321-4321-210987654321",
                    "version": [1, 0, 0]
                }
            ],
            "dependencies": []
        }"#;
        let m = PackManifest::parse(json).unwrap();
        assert_eq!(m.header.name, "Test Pack");
        assert_eq!(m.header.uuid, "12345678-1234-1234-1234-123456789012");
        assert_eq!(m.version_string(), "1.2.3");
        assert_eq!(m.kind(), Some(PackKind::Behavior));
        assert_eq!(m.header.min_engine_version, Some(EngineVersion::new(1, 21, 0)));
    }

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "format_version": "2",
            "header": {
                "name": "Minimal",
                "uuid": "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee",
                "version": [1, 0, 0]
            }
        }"#;
        let m = PackManifest::parse(json).unwrap();
        assert_eq!(m.header.description, "");
        assert!(m.modules.is_empty());
        assert!(m.dependencies.is_empty());
        assert_eq!(m.kind(), None);
    }

    #[test]
    fn parse_invalid_json() {
        assert!(PackManifest::parse("not json {{{").is_err());
        assert!(PackManifest::parse(r#"{"format_version": 2}"#).is_err());
    }

    #[test]
    fn new_manifest_layout() {
        let v = EngineVersion::new(1, 0, 0);
        let m = PackManifest::new(PackKind::Resource, "Ruby RP", "Rubies", v, EngineVersion::default());
        let json: serde_json::Value = serde_json::from_str(&m.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["format_version"], 2);
        assert_eq!(json["header"]["version"], serde_json::json!([1, 0, 0]));
        assert_eq!(json["header"]["min_engine_version"], serde_json::json!([1, 21, 0]));
        assert_eq!(json["modules"][0]["type"], "resources");
        assert!(json.get("dependencies").is_none());
        assert_ne!(m.header.uuid, m.modules[0].uuid);
    }

    #[test]
    fn dependency_added_once() {
        let v = EngineVersion::new(1, 0, 0);
        let rp = PackManifest::new(PackKind::Resource, "RP", "", v, v);
        let mut bp = PackManifest::new(PackKind::Behavior, "BP", "", v, v);
        bp.depends_on(&rp).depends_on(&rp);
        assert_eq!(bp.dependencies.len(), 1);
        assert_eq!(bp.dependencies[0].uuid, rp.header.uuid);
    }

    #[test]
    fn uuid_is_version_4() {
        let id = uuid_v4();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.iter().map(|p| p.len()).collect::<Vec<_>>(), vec![8, 4, 4, 4, 12]);
        assert!(parts[2].starts_with('4'));
        assert!(matches!(parts[3].chars().next(), Some('8' | '9' | 'a' | 'b')));
    }
}
