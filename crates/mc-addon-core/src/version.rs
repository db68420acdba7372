//! Format and engine versions written into generated documents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `format_version` strings per document kind.
pub struct FormatVersion;

impl FormatVersion {
    pub const ENTITY: &'static str = "1.21.0";
    pub const CLIENT_ENTITY: &'static str = "1.10.0";
    pub const ITEM: &'static str = "1.21.0";
    pub const BLOCK: &'static str = "1.21.0";
    pub const RECIPE: &'static str = "1.20.10";
    pub const MANIFEST: u32 = 2;
}

/// A `[major, minor, patch]` triple, as used by manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 3]", into = "[u32; 3]")]
pub struct EngineVersion(pub [u32; 3]);

impl EngineVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self([major, minor, patch])
    }
}

impl Default for EngineVersion {
    fn default() -> Self {
        Self::new(1, 21, 0)
    }
}

impl From<[u32; 3]> for EngineVersion {
    fn from(v: [u32; 3]) -> Self {
        Self(v)
    }
}

impl From<EngineVersion> for [u32; 3] {
    fn from(v: EngineVersion) -> Self {
        v.0
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0[0], self.0[1], self.0[2])
    }
}
