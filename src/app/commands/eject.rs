//! Eject command implementation: describe the dependency and configuration
//! footprint a project adopts when leaving this command.

use crate::domain::paths::{PACKAGE_MANIFEST_FILE, RUNNER_CONFIG_FILE};
use crate::domain::{
    AppError, CopyInstructions, EjectDescriptor, NpmInstructions, PackageManifest,
};
use crate::ports::ProjectFilesystem;
use crate::services::RunnerAssets;

/// Execute the eject command.
///
/// Reads the command's own package manifest and describes what the caller
/// must install and copy; nothing is written.
pub fn execute<F: ProjectFilesystem>(
    filesystem: &F,
    assets: &RunnerAssets,
) -> Result<EjectDescriptor, AppError> {
    let manifest = read_own_manifest(filesystem, assets)?;

    Ok(EjectDescriptor {
        npm: NpmInstructions { dev_dependencies: manifest.dependencies },
        copy: CopyInstructions {
            path: assets.resource_dir(),
            files: vec![RUNNER_CONFIG_FILE.to_string()],
        },
    })
}

fn read_own_manifest<F: ProjectFilesystem>(
    filesystem: &F,
    assets: &RunnerAssets,
) -> Result<PackageManifest, AppError> {
    let path = assets.resource_dir().join(PACKAGE_MANIFEST_FILE);
    let text = filesystem
        .read_text(&path)
        .map_err(|e| AppError::PackageJsonRead(e.to_string()))?;

    PackageManifest::from_json(&text).map_err(|e| AppError::PackageJsonRead(e.to_string()))
}
