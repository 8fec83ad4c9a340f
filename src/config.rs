use anyhow::Context;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: usize = 1024;

/// Fixed static-assets subdirectory under the base directory.
pub const STATIC_SUBDIR: &str = "static";

/// Everything the static file pipeline needs to know; cloned into each
/// connection worker so no worker ever consults the environment.
#[derive(Debug, Clone)]
pub struct StaticFilesConfig {
    /// Document root that request paths are appended to.
    pub root: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub static_files: StaticFilesConfig,
    pub max_connections: usize,
}

impl Config {
    /// Reads the configuration from the environment, once, at startup.
    ///
    /// `LISTEN` is the bind address, `BASE_DIR` the directory whose
    /// `static/` subdirectory becomes the document root (default: the
    /// current directory), and `MAX_CONNECTIONS` the admission limit.
    /// A malformed or zero `MAX_CONNECTIONS` is a fatal startup error.
    pub fn load() -> anyhow::Result<Self> {
        let listen_addr =
            std::env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        let base_dir = std::env::var("BASE_DIR").unwrap_or_else(|_| ".".to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .map(|v| {
                v.parse::<usize>()
                    .with_context(|| format!("invalid MAX_CONNECTIONS value: {}", v))
            })
            .transpose()?
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        anyhow::ensure!(max_connections > 0, "MAX_CONNECTIONS must be at least 1");

        Ok(Self {
            listen_addr,
            static_files: StaticFilesConfig {
                root: format!("{}/{}", base_dir, STATIC_SUBDIR),
            },
            max_connections,
        })
    }
}
