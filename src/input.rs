use crate::error::{ParkgateError, Result};
use crate::types::input::ProjectInput;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LoadedProject {
    pub input: ProjectInput,
    pub sha256: String,
}

pub fn load_project(path: &Path) -> Result<LoadedProject> {
    if !path.exists() {
        return Err(ParkgateError::ProjectNotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let input: ProjectInput = toml::from_str(&content)
        .map_err(|e| ParkgateError::InputParse(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), project = %input.project_name, "loaded project file");
    Ok(LoadedProject {
        input,
        sha256: sha256_hex(&bytes),
    })
}

pub fn write_sample(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ParkgateError::AlreadyExists(path.display().to_string()));
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let rendered = toml::to_string_pretty(&ProjectInput::sample())?;
    fs::write(path, rendered)?;
    Ok(())
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
