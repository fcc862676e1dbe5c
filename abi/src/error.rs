use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("rows count must be one of 10, 15, 20 or 25, got {0}")]
    InvalidRowsCount(u32),

    #[error("no view matches path: {0}")]
    InvalidRoute(String),

    #[error("unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}
