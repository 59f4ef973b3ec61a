use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per storage key under `data_dir`.
    #[default]
    File,
    /// Process-local map; nothing survives a restart.
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: StorageBackend::File, data_dir: default_data_dir() }
    }
}

/// How new item ids are produced.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Millisecond wall-clock rendered as a decimal string, bumped past the
    /// last issued value when the clock has not advanced.
    #[default]
    Timestamp,
    /// Random v4 UUID.
    Uuid,
}

/// What a load does when the list was mutated while the read was in flight.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadConflictPolicy {
    /// The stored list replaces the in-memory list wholesale.
    #[default]
    Replace,
    /// The in-memory list wins and is written back to storage.
    KeepLocal,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub id_strategy: IdStrategy,
    #[serde(default)]
    pub on_load_conflict: LoadConflictPolicy,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_data_dir() -> String { "data".to_string() }

/// Load from `CONFIG_PATH` (default `config.toml`). A missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !std::path::Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize_from_env();
        self.storage.validate()?;
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        // 若 TOML 中未提供目录，则尝试从环境变量填充
        if self.data_dir.trim().is_empty() {
            if let Ok(dir) = std::env::var("CATALOG_DATA_DIR") {
                self.data_dir = dir;
            }
        }
        self.data_dir = self.data_dir.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == StorageBackend::File && self.data_dir.is_empty() {
            return Err(anyhow!("storage.data_dir is empty; set it in config.toml or CATALOG_DATA_DIR"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = load_from_str("").expect("parse");
        assert_eq!(cfg.storage.backend, StorageBackend::File);
        assert_eq!(cfg.storage.data_dir, "data");
        assert_eq!(cfg.catalog.id_strategy, IdStrategy::Timestamp);
        assert_eq!(cfg.catalog.on_load_conflict, LoadConflictPolicy::Replace);
        assert_eq!(cfg.logging.format, LogFormat::Compact);
    }

    #[test]
    fn parses_all_sections() {
        let cfg = load_from_str(
            r#"
            [storage]
            backend = "memory"
            data_dir = "/tmp/catalog"

            [catalog]
            id_strategy = "uuid"
            on_load_conflict = "keep_local"

            [logging]
            format = "json"
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.storage.data_dir, "/tmp/catalog");
        assert_eq!(cfg.catalog.id_strategy, IdStrategy::Uuid);
        assert_eq!(cfg.catalog.on_load_conflict, LoadConflictPolicy::KeepLocal);
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(load_from_str("[storage]\nbackend = \"sqlite\"").is_err());
    }

    #[test]
    fn blank_data_dir_falls_back_to_env_or_fails() {
        // only test touching CATALOG_DATA_DIR; both cases stay in one fn
        let blank = || AppConfig {
            storage: StorageConfig { backend: StorageBackend::File, data_dir: "   ".into() },
            ..AppConfig::default()
        };

        std::env::remove_var("CATALOG_DATA_DIR");
        assert!(blank().normalize_and_validate().is_err());

        std::env::set_var("CATALOG_DATA_DIR", "  /var/lib/catalog ");
        let mut cfg = blank();
        cfg.normalize_and_validate().expect("env fallback");
        assert_eq!(cfg.storage.data_dir, "/var/lib/catalog");

        // an explicit dir wins over the env var
        let mut explicit = AppConfig::default();
        explicit.normalize_and_validate().expect("default dir");
        assert_eq!(explicit.storage.data_dir, "data");
        std::env::remove_var("CATALOG_DATA_DIR");

        let mut memory = AppConfig {
            storage: StorageConfig { backend: StorageBackend::Memory, data_dir: String::new() },
            ..AppConfig::default()
        };
        assert!(memory.normalize_and_validate().is_ok());
    }
}
