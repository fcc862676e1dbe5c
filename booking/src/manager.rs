use abi::{Booking, BookingPayload, Error};
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::{booking_endpoint, BookingManager, Bookings, FetchGateway, RequestOptions};

const BOOKINGS: &str = "bookings";

#[async_trait]
impl Bookings for BookingManager {
    async fn list(&self) -> Result<Vec<Booking>, Error> {
        let value = self.gateway.request(BOOKINGS, RequestOptions::get()).await?;
        decode(BOOKINGS, value)
    }

    async fn get(&self, id: &str) -> Result<Booking, Error> {
        let endpoint = booking_endpoint(id);
        let value = self.gateway.request(&endpoint, RequestOptions::get()).await?;
        decode(&endpoint, value)
    }

    async fn update(&self, id: &str, payload: &BookingPayload) -> Result<Value, Error> {
        let endpoint = booking_endpoint(id);
        let options = RequestOptions::json(Method::PUT, payload)?;
        self.gateway.request(&endpoint, options).await
    }

    async fn create(&self, payload: &BookingPayload) -> Result<Value, Error> {
        let options = RequestOptions::json(Method::POST, payload)?;
        self.gateway.request(BOOKINGS, options).await
    }
}

impl BookingManager {
    pub fn new(gateway: FetchGateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &FetchGateway {
        &self.gateway
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| {
        error!(endpoint, "unexpected response shape: {}", e);
        Error::Json(e)
    })
}
