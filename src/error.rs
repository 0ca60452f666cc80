use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameReviewsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not generate a free game ID after {attempts} attempts")]
    IdSpaceExhausted { attempts: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameReviewsError>;
