mod config;
mod error;
mod types;
mod utils;

pub use config::{ApiConfig, Config, UiConfig, API_URL_ENV, DEFAULT_API_URL};
pub use error::Error;
pub use types::*;
pub use utils::*;
