use std::path::Path;

use airforge_core::BuildRequest;

/// Write a rendered Dockerfile into a build-context directory.
///
/// When the request carries a non-empty custom airflow.cfg, its content is
/// written beside the Dockerfile so the `COPY airflow.cfg` instruction has
/// a source to resolve against.
pub fn write_context(
    dir: &Path,
    dockerfile_content: &str,
    request: &BuildRequest,
) -> Result<(), ContextError> {
    std::fs::create_dir_all(dir).map_err(|e| ContextError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let dockerfile_path = dir.join("Dockerfile");
    std::fs::write(&dockerfile_path, dockerfile_content).map_err(|e| ContextError::Write {
        path: dockerfile_path,
        source: e,
    })?;

    if request.has_custom_config() {
        let cfg_path = dir.join("airflow.cfg");
        // has_custom_config guarantees the option is populated
        let cfg = request.custom_config.as_deref().unwrap_or_default();
        std::fs::write(&cfg_path, cfg).map_err(|e| ContextError::Write {
            path: cfg_path,
            source: e,
        })?;
    }

    tracing::debug!(dir = %dir.display(), "build context written");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("failed to create context directory at {path}")]
    CreateDir {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
