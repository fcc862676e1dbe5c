mod gateway;
mod manager;

use abi::{Booking, BookingPayload, Error};
use async_trait::async_trait;
use serde_json::Value;

pub use gateway::{FetchGateway, RequestOptions, RequestOptionsBuilder};

/// Booking API client backed by [`FetchGateway`].
#[derive(Debug, Clone)]
pub struct BookingManager {
    gateway: FetchGateway,
}

#[async_trait]
pub trait Bookings {
    /// fetch the full booking set, in server order
    async fn list(&self) -> Result<Vec<Booking>, Error>;
    /// fetch a booking by id
    async fn get(&self, id: &str) -> Result<Booking, Error>;
    /// replace an existing booking, returns whatever the server answers
    async fn update(&self, id: &str, payload: &BookingPayload) -> Result<Value, Error>;
    /// create a booking
    async fn create(&self, payload: &BookingPayload) -> Result<Value, Error>;
}

pub fn booking_endpoint(id: &str) -> String {
    format!("bookings/{}", id)
}
