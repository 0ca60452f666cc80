use crate::error::{GameReviewsError, Result};
use crate::model::SeedData;
use crate::storage::{DEFAULT_ID_LENGTH, GameStore};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".game-reviews.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameReviewsConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,

    /// Directory of the config file, used to resolve relative paths.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| GameReviewsError::Config(format!("Invalid listen address: {}", e)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// YAML seed file replacing the built-in data set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,

    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

fn default_id_length() -> usize {
    DEFAULT_ID_LENGTH
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: None,
            id_length: default_id_length(),
        }
    }
}

impl GameReviewsConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let mut config: GameReviewsConfig = serde_yaml::from_str(&content)?;
        config.base_dir = config_path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Load the nearest config file above `start_path`, or fall back to defaults.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn seed_path(&self) -> Option<PathBuf> {
        let seed = self.store.seed.as_ref()?;
        match &self.base_dir {
            Some(base) if seed.is_relative() => Some(base.join(seed)),
            _ => Some(seed.clone()),
        }
    }

    pub fn seed_data(&self) -> Result<SeedData> {
        match self.seed_path() {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading seed data");
                SeedData::load(&path)
            }
            None => Ok(SeedData::builtin()),
        }
    }

    pub fn build_store(&self) -> Result<GameStore> {
        Ok(GameStore::new(self.seed_data()?).with_id_length(self.store.id_length))
    }
}
