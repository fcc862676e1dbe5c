use std::{fmt, str::FromStr};

use abi::{BookingId, Error};

/// Browser paths the app answers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, the booking list
    Home,
    /// `/rooms/:id`, a single booking
    Room(BookingId),
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "/" {
            return Ok(Route::Home);
        }
        match s.strip_prefix("/rooms/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Ok(Route::Room(id.to_string())),
            _ => Err(Error::InvalidRoute(s.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Room(id) => write!(f, "/rooms/{}", id),
        }
    }
}
