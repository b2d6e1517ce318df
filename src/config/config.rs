use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::registry::{ChainId, NetworkInfo, NetworkRegistry, TrackedAssets};

/// HTTP transport configuration for subgraph requests.
#[derive(Debug, Deserialize, Clone)]
pub struct HttpSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Dashboard behavior configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    /// The network whose snapshots and prices drive the summary cards
    pub active_network: String,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    /// Maximum day-granular rows requested per network per metric query
    #[serde(default = "default_max_series_rows")]
    pub max_series_rows: u32,
}

fn default_refresh_interval_secs() -> u64 {
    300
}

fn default_max_series_rows() -> u32 {
    1000
}

/// One supported network as declared in `config.yaml`.
///
/// Contains the subgraph endpoint, branding, genesis timestamp, and the
/// tracked asset-address table used for price resolution.
#[derive(Debug, Deserialize, Clone)]
pub struct NetworkSettings {
    pub id: String,
    pub name: String,
    pub endpoint: String,
    pub start_timestamp: i64,
    #[serde(default = "default_brand_color")]
    pub brand_color: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub assets: TrackedAssets,
}

fn default_brand_color() -> String {
    "#888888".to_string()
}

fn default_enabled() -> bool {
    true
}

/// Root application configuration.
///
/// Loaded from `config.yaml` at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub http: HttpSettings,
    pub dashboard: DashboardSettings,
    pub networks: Vec<NetworkSettings>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("config"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }

    /// Build the immutable network registry from the enabled networks,
    /// preserving configuration order.
    pub fn build_registry(&self) -> NetworkRegistry {
        let networks = self
            .networks
            .iter()
            .filter(|n| n.enabled)
            .map(|n| NetworkInfo {
                id: ChainId::new(&n.id),
                name: n.name.clone(),
                endpoint: n.endpoint.clone(),
                start_timestamp: n.start_timestamp,
                brand_color: n.brand_color.clone(),
                assets: n.assets.clone(),
            })
            .collect();

        NetworkRegistry::new(networks)
    }

    pub fn active_network(&self) -> ChainId {
        ChainId::new(&self.dashboard.active_network)
    }
}
