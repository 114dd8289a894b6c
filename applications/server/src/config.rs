/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Prefix of environment variable overrides, e.g. `MIXTAPE_SERVER__PORT`
pub const ENV_PREFIX: &str = "MIXTAPE";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default)]
    pub playlists: PlaylistSettings,

    #[serde(default)]
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlaylistSettings {
    /// Fill the store with the demo catalogue at startup
    #[serde(default)]
    pub seed_demo: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Answer every core failure with an error-class status.
    ///
    /// Off by default: duplicate playlist creation, adding to or sorting a
    /// missing playlist, unknown sort keys and popping an empty playlist are
    /// then reported as success-class responses carrying a message.
    #[serde(default)]
    pub strict_status: bool,
}

impl ServerConfig {
    /// Load configuration from an explicit file (or `config.toml` if present)
    /// and environment
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Load configuration with a custom environment variable prefix
    ///
    /// An explicit `path` must exist; the default `config.toml` is optional.
    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (MIXTAPE_SECTION__KEY)
        settings = settings.add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr().map(|_| ())
    }

    /// Socket address the HTTP listener binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let host = self.server.host.parse::<IpAddr>().map_err(|_| {
            ServerError::Config(format!(
                "Invalid host {:?}: expected an IP address",
                self.server.host
            ))
        })?;

        Ok(SocketAddr::from((host, self.server.port)))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            playlists: PlaylistSettings::default(),
            api: ApiSettings::default(),
        }
    }
}
