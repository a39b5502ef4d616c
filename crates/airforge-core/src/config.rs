use serde::{Deserialize, Serialize};

use crate::request::{BaseImage, PythonVersion};

/// Environment variable overriding `[api].endpoint`, for container
/// deployments where the build service address differs from the default.
pub const ENDPOINT_ENV: &str = "AIRFORGE_ENDPOINT";

/// airforge.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Remote build-and-push endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds. The upstream service streams no
    /// progress, so a bounded timeout is the only cancellation point.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Airflow version preselected for new requests
    #[serde(default = "default_airflow_version")]
    pub airflow_version: String,
    #[serde(default = "default_python_version")]
    pub python_version: PythonVersion,
    #[serde(default = "default_base_image")]
    pub base_image: BaseImage,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            airflow_version: default_airflow_version(),
            python_version: default_python_version(),
            base_image: default_base_image(),
        }
    }
}

impl ForgeConfig {
    /// Load from airforge.toml at the given path, or return defaults if not
    /// found. `AIRFORGE_ENDPOINT` overrides the configured endpoint either way.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("airforge.toml");
        let mut config: Self = if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })?
        } else {
            Self::default()
        };

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            tracing::debug!(%endpoint, "endpoint overridden from environment");
            config.api.endpoint = endpoint;
        }

        Ok(config)
    }
}

fn default_endpoint() -> String {
    "http://172.17.0.1:8081/build-and-push".to_owned()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_airflow_version() -> String {
    "2.9.3".to_owned()
}

fn default_python_version() -> PythonVersion {
    PythonVersion::Py310
}

fn default_base_image() -> BaseImage {
    BaseImage::Slim
}
