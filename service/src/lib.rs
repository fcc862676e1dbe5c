pub mod form;
pub mod pager;
pub mod route;
pub mod views;

#[cfg(test)]
mod test_utils;

use abi::{Config, Error, Zone};
use booking::{BookingManager, FetchGateway};

pub use form::{BookingForm, FormMode, Room, RoomField, SaveOutcome};
pub use pager::{PageButton, Pager};
pub use route::Route;
pub use views::{BookingRow, DetailView, ListView};

/// Reads the config file when one is given, then applies environment
/// overrides.
pub fn load_config(path: Option<&str>) -> Result<Config, Error> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Ok(config.with_env_overrides())
}

/// Booking client for the configured API.
pub fn connect(config: &Config) -> BookingManager {
    BookingManager::new(FetchGateway::from_config(&config.api))
}

/// Zone from the command line if given, else from config.
pub fn resolve_zone(config: &Config, name: Option<&str>) -> Result<Zone, Error> {
    match name {
        Some(name) => name.parse(),
        None => config.ui.zone(),
    }
}
