use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Каталог со сборкой фронтенда (index.html + wasm)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/dental_admin.db"

[server]
port = 3000
static_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Relative paths resolve against the executable directory
fn resolve_path(raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(path)))
        .unwrap_or_else(|| PathBuf::from(raw))
}

/// Get the database file path from configuration
pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_path(&config.database.path)
}

/// Get the static files directory from configuration
pub fn get_static_dir(config: &Config) -> PathBuf {
    resolve_path(&config.server.static_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/dental_admin.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
    }

    #[test]
    fn test_server_section_is_optional() {
        let config = parse_config("[database]\npath = \"/tmp/x.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
    }

    #[test]
    fn test_partial_server_section() {
        let config = parse_config("[database]\npath = \"a.db\"\n[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, "dist");
    }

    #[test]
    fn test_missing_database_section_is_error() {
        assert!(parse_config("[server]\nport = 1\n").is_err());
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let config = parse_config("[database]\npath = \"/var/lib/dental.db\"\n").unwrap();
        assert_eq!(get_database_path(&config), PathBuf::from("/var/lib/dental.db"));
    }

    #[test]
    fn test_relative_paths_resolve_to_absolute() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let path = get_static_dir(&config);
        assert!(path.ends_with("dist"));
    }
}
