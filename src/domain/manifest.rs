use std::collections::BTreeMap;

use serde::Deserialize;

/// Package manifest fields the command reads during ejection.
///
/// Unknown fields are ignored; a missing `dependencies` object is treated as
/// empty.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<PackageManifest, serde_json::Error> {
        serde_json::from_str(text)
    }
}
