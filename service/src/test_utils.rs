#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use abi::{Booking, BookingPayload, Error, Zone};
use async_trait::async_trait;
use booking::Bookings;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(String),
    Update(String, BookingPayload),
    Create(BookingPayload),
}

/// In-memory stand-in for the booking API that records every call.
#[derive(Debug, Clone, Default)]
pub struct FakeBookings {
    pub bookings: Vec<Booking>,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeBookings {
    pub fn with_count(n: usize) -> Self {
        Self {
            bookings: (1..=n).map(|i| sample_booking(&i.to_string())).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bookings for FakeBookings {
    async fn list(&self) -> Result<Vec<Booking>, Error> {
        self.record(Call::List);
        Ok(self.bookings.clone())
    }

    async fn get(&self, id: &str) -> Result<Booking, Error> {
        self.record(Call::Get(id.to_string()));
        match self.bookings.iter().find(|b| b.id == id) {
            Some(b) => Ok(b.clone()),
            None => Err(serde_json::from_value::<Booking>(json!({ "message": "not found" }))
                .unwrap_err()
                .into()),
        }
    }

    async fn update(&self, id: &str, payload: &BookingPayload) -> Result<Value, Error> {
        self.record(Call::Update(id.to_string(), payload.clone()));
        Ok(serde_json::to_value(payload)?)
    }

    async fn create(&self, payload: &BookingPayload) -> Result<Value, Error> {
        self.record(Call::Create(payload.clone()));
        Ok(serde_json::to_value(payload)?)
    }
}

/// A booking starting 2022-12-26 15:00 in Denver (22:00 UTC).
pub fn sample_booking(id: &str) -> Booking {
    Booking::new(
        id,
        format!("ocean-view-room-{}", id),
        "tyr",
        &["alice", "bob"],
        Utc.with_ymd_and_hms(2022, 12, 26, 22, 0, 0).unwrap(),
        2,
    )
}

pub fn denver() -> Zone {
    "America/Denver".parse().unwrap()
}
