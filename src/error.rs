use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkgateError {
    #[error("project file not found: {0}")]
    ProjectNotFound(String),

    #[error("project file parse error: {0}")]
    InputParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("refusing to overwrite existing file: {0}")]
    AlreadyExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ParkgateError>;
