use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamaritanError {
    #[error("Invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("Invalid config field {field}: {error}")]
    InvalidConfig { field: String, error: String },

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SamaritanError {
    pub fn invalid_config(field: &str, error: impl Into<String>) -> Self {
        SamaritanError::InvalidConfig {
            field: field.to_string(),
            error: error.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SamaritanError>;
