use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Instructions produced by `eject`, describing how a caller takes ownership
/// of the command's dependency and configuration footprint.
#[derive(Debug, Clone, Serialize)]
pub struct EjectDescriptor {
    pub npm: NpmInstructions,
    pub copy: CopyInstructions,
}

/// npm dependencies the ejecting project must adopt.
#[derive(Debug, Clone, Serialize)]
pub struct NpmInstructions {
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Files the ejecting project must copy verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct CopyInstructions {
    /// Directory the files are copied from.
    pub path: PathBuf,
    /// File names within `path`, copied as-is.
    pub files: Vec<String>,
}
