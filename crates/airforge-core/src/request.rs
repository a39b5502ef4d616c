use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::ExtrasCatalog;
use crate::error::Error;

/// Python interpreter versions with published `apache/airflow` image tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PythonVersion {
    #[serde(rename = "3.8")]
    Py38,
    #[serde(rename = "3.9")]
    Py39,
    #[serde(rename = "3.10")]
    Py310,
    #[serde(rename = "3.11")]
    Py311,
}

impl PythonVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Py38 => "3.8",
            Self::Py39 => "3.9",
            Self::Py310 => "3.10",
            Self::Py311 => "3.11",
        }
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PythonVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3.8" => Ok(Self::Py38),
            "3.9" => Ok(Self::Py39),
            "3.10" => Ok(Self::Py310),
            "3.11" => Ok(Self::Py311),
            other => Err(Error::UnknownPythonVersion(other.to_owned())),
        }
    }
}

/// Debian base image variants offered by the form.
///
/// The variant is carried in the request and on the wire, but the upstream
/// `apache/airflow` tags are keyed by python version only, so it never
/// reaches the rendered `FROM` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseImage {
    Slim,
    Bookworm,
    Bullseye,
}

impl BaseImage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slim => "slim",
            Self::Bookworm => "bookworm",
            Self::Bullseye => "bullseye",
        }
    }
}

impl fmt::Display for BaseImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseImage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slim" => Ok(Self::Slim),
            "bookworm" => Ok(Self::Bookworm),
            "bullseye" => Ok(Self::Bullseye),
            other => Err(Error::UnknownBaseImage(other.to_owned())),
        }
    }
}

/// One Airflow image build, as entered by the user.
///
/// A request is assembled once per action and passed by value to the
/// renderer or the dispatcher; nothing mutates it afterwards.
///
/// The serialized form is the wire body of the remote build endpoint:
/// six snake_case fields. `custom_config` stays local — the endpoint's
/// schema does not include it.
#[derive(Debug, Clone, Serialize)]
pub struct BuildRequest {
    /// Airflow release to pin, e.g. "2.9.3". Free-form.
    pub airflow_version: String,
    pub python_version: PythonVersion,
    pub base_image: BaseImage,
    /// Airflow extras, in selection order.
    pub extras: Vec<String>,
    /// APT packages, one specifier per entry, in input order.
    pub apt_deps: Vec<String>,
    /// Additional pip requirements, one specifier per entry, in input order.
    pub pip_deps: Vec<String>,
    /// Optional airflow.cfg text. Non-empty content enables the
    /// config-copy instruction in the rendered Dockerfile.
    #[serde(skip)]
    pub custom_config: Option<String>,
}

impl BuildRequest {
    /// Eager validation at assembly time. `render` itself trusts its input;
    /// dependency specifiers are deliberately not checked against any
    /// package index.
    pub fn validate(&self, catalog: &ExtrasCatalog) -> Result<(), Error> {
        if self.airflow_version.trim().is_empty() {
            return Err(Error::EmptyAirflowVersion);
        }
        for extra in &self.extras {
            if !catalog.contains(extra) {
                return Err(Error::UnknownExtra {
                    name: extra.clone(),
                });
            }
        }
        Ok(())
    }

    /// True when a non-empty airflow.cfg was supplied.
    pub fn has_custom_config(&self) -> bool {
        self.custom_config
            .as_deref()
            .is_some_and(|cfg| !cfg.is_empty())
    }
}

/// Split a one-dependency-per-line text block into entries,
/// trimming whitespace and dropping blank lines.
pub fn parse_dep_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
