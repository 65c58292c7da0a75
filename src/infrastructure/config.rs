use crate::domain::binding::Binding;
use crate::domain::section::Section;
use anyhow::Context;
use serde::Deserialize;

/// Defaults compiled into the crate; the browser build has no filesystem.
pub const DEFAULT_CONFIG: &str = include_str!("../../config/dashboard.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    #[serde(default = "default_sections")]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub base_url: String,
}

/// An ad-hoc endpoint bound with a declared list of bindings rather than one
/// of the built-in sections.
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    pub path: String,
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

fn default_sections() -> Vec<Section> {
    Section::ALL.to_vec()
}

impl DashboardConfig {
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.server.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Load `config/dashboard.toml`, with `DASHBOARD__SERVER__BASE_URL` style
/// environment overrides on top.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()
        .context("Failed to read dashboard configuration")?;

    settings
        .try_deserialize()
        .context("Invalid dashboard configuration")
}

/// The compiled-in defaults only.
pub fn embedded_dashboard_config() -> anyhow::Result<DashboardConfig> {
    parse_dashboard_config(DEFAULT_CONFIG)
}

pub fn parse_dashboard_config(toml: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}
