mod build;
mod extras;
mod generate;

use std::path::{Path, PathBuf};

use airforge_core::{
    BaseImage, BuildRequest, ExtrasCatalog, ForgeConfig, PythonVersion, parse_dep_lines,
};
use anyhow::Context;

pub use build::build;
pub use extras::extras;
pub use generate::generate;

/// Request fields shared by `generate` and `build`. Anything not given on
/// the command line falls back to the `[defaults]` section of airforge.toml.
#[derive(Debug, clap::Args)]
pub struct RequestArgs {
    /// Airflow version to pin, e.g. 2.9.3
    #[arg(long, value_name = "VERSION")]
    pub airflow_version: Option<String>,

    /// Python version: 3.8, 3.9, 3.10 or 3.11
    #[arg(long, value_name = "VERSION")]
    pub python_version: Option<PythonVersion>,

    /// Debian base image variant: slim, bookworm or bullseye
    #[arg(long, value_name = "VARIANT")]
    pub base_image: Option<BaseImage>,

    /// Airflow extra to enable (repeatable)
    #[arg(long = "extra", value_name = "EXTRA")]
    pub extras: Vec<String>,

    /// APT package to install (repeatable)
    #[arg(long = "apt-dep", value_name = "PKG")]
    pub apt_deps: Vec<String>,

    /// File listing APT packages, one per line
    #[arg(long, value_name = "FILE")]
    pub apt_deps_file: Option<PathBuf>,

    /// pip requirement to install (repeatable)
    #[arg(long = "pip-dep", value_name = "SPEC")]
    pub pip_deps: Vec<String>,

    /// File listing pip requirements, one per line
    #[arg(long, value_name = "FILE")]
    pub pip_deps_file: Option<PathBuf>,

    /// Custom airflow.cfg to ship in the image
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Assemble and validate a [`BuildRequest`] from flags and config defaults.
pub(crate) fn assemble_request(
    args: RequestArgs,
    config: &ForgeConfig,
    catalog: &ExtrasCatalog,
) -> anyhow::Result<BuildRequest> {
    let mut apt_deps = args.apt_deps;
    if let Some(path) = &args.apt_deps_file {
        apt_deps.extend(read_dep_file(path)?);
    }

    let mut pip_deps = args.pip_deps;
    if let Some(path) = &args.pip_deps_file {
        pip_deps.extend(read_dep_file(path)?);
    }

    let custom_config = match &args.config {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
        ),
        None => None,
    };

    let request = BuildRequest {
        airflow_version: args
            .airflow_version
            .unwrap_or_else(|| config.defaults.airflow_version.clone()),
        python_version: args
            .python_version
            .unwrap_or(config.defaults.python_version),
        base_image: args.base_image.unwrap_or(config.defaults.base_image),
        extras: args.extras,
        apt_deps,
        pip_deps,
        custom_config,
    };

    request.validate(catalog)?;
    Ok(request)
}

fn read_dep_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse_dep_lines(&content))
}
