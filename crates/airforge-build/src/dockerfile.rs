use airforge_core::BuildRequest;

/// Renders a Dockerfile for a customized Apache Airflow image.
pub struct DockerfileGenerator<'a> {
    request: &'a BuildRequest,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(request: &'a BuildRequest) -> Self {
        Self { request }
    }

    /// Produce the Dockerfile text. Pure and deterministic.
    ///
    /// Interpolated values pass through unescaped; the request is trusted
    /// as entered. The apt install step is emitted even with no packages,
    /// so the cleanup commands always run in the same layer.
    ///
    /// The upstream `apache/airflow` tags are keyed by airflow and python
    /// version only, so `base_image` does not appear in the `FROM` line.
    pub fn render(&self) -> String {
        let mut dockerfile = format!(
            r#"FROM apache/airflow:{version}-python{python}

USER root

# Install apt dependencies
RUN apt-get update && apt-get install -y --no-install-recommends {apt} && \
    apt-get autoremove -yqq --purge && \
    apt-get clean && \
    rm -rf /var/lib/apt/lists/*

USER airflow

# Install Airflow with extras and additional pip dependencies
RUN pip install --no-cache-dir "apache-airflow[{extras}]=={version}" {pip}
"#,
            version = self.request.airflow_version,
            python = self.request.python_version,
            apt = self.request.apt_deps.join(" "),
            extras = self.request.extras.join(","),
            pip = self.request.pip_deps.join(" "),
        );

        if self.request.has_custom_config() {
            dockerfile.push_str(
                "\n# Copy custom airflow.cfg\nCOPY airflow.cfg /opt/airflow/airflow.cfg\n",
            );
        }

        dockerfile.push_str("\nCMD [\"airflow\"]\n");
        dockerfile
    }
}
