use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub case_id: CaseIdConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where sequence counters live
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AllocatorKind {
    /// Durable counters in the SQLite database
    Sqlite,
    /// Process-local counters, lost on restart
    Memory,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CaseIdConfig {
    #[serde(default = "default_allocator")]
    pub allocator: AllocatorKind,
    #[serde(default = "default_short_url_host")]
    pub short_url_host: String,
}

fn default_port() -> u16 {
    3000
}

fn default_allocator() -> AllocatorKind {
    AllocatorKind::Sqlite
}

fn default_short_url_host() -> String {
    "portal.ap.gov.in".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for CaseIdConfig {
    fn default() -> Self {
        Self {
            allocator: default_allocator(),
            short_url_host: default_short_url_host(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: "target/db/app.db".to_string(),
            },
            server: ServerConfig::default(),
            case_id: CaseIdConfig::default(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[server]
port = 3000

[case_id]
allocator = "sqlite"
short_url_host = "portal.ap.gov.in"
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
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Make the loaded configuration visible to handlers
pub fn install(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("configuration already installed"))
}

/// Installed configuration, or the defaults when nothing was installed
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.case_id.allocator, AllocatorKind::Sqlite);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_optional_sections_default() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = "/var/lib/portal/app.db"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.case_id.short_url_host, "portal.ap.gov.in");
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/var/lib/portal/app.db")
        );
    }

    #[test]
    fn test_memory_allocator_selectable() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = "app.db"

            [case_id]
            allocator = "memory"
            "#,
        )
        .unwrap();
        assert_eq!(config.case_id.allocator, AllocatorKind::Memory);
    }

    #[test]
    fn test_unknown_allocator_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [database]
            path = "app.db"

            [case_id]
            allocator = "redis"
            "#,
        );
        assert!(result.is_err());
    }
}
