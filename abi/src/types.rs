use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

pub type BookingId = String;

/// A booking as the API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub room_name: String,
    pub host_name: String,
    pub guests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<DateTime<Utc>>,
    pub booking_time_start: DateTime<Utc>,
    pub duration: u32,
}

impl Booking {
    pub fn new(
        id: impl Into<String>,
        room_name: impl Into<String>,
        host_name: impl Into<String>,
        guests: &[&str],
        start: DateTime<Utc>,
        duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            room_name: room_name.into(),
            host_name: host_name.into(),
            guests: guests.iter().map(|g| g.to_string()).collect(),
            booking_date: Some(start),
            booking_time_start: start,
            duration,
        }
    }
}

/// Duration as the form holds it: the server's number until the user types
/// into the field, then whatever text the input produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Number(i64),
    Text(String),
}

impl Default for DurationValue {
    fn default() -> Self {
        DurationValue::Number(1)
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationValue::Number(n) => write!(f, "{}", n),
            DurationValue::Text(s) => f.write_str(s),
        }
    }
}

/// Body of `PUT /bookings/:id` and `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookingId>,
    pub room_name: String,
    pub host_name: String,
    pub guests: Vec<String>,
    pub duration: DurationValue,
    pub booking_time_start: String,
}

/// Page sizes offered by the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RowsCount {
    #[default]
    Ten,
    Fifteen,
    Twenty,
    TwentyFive,
}

impl RowsCount {
    pub const ALL: [RowsCount; 4] = [
        RowsCount::Ten,
        RowsCount::Fifteen,
        RowsCount::Twenty,
        RowsCount::TwentyFive,
    ];

    pub fn get(self) -> usize {
        match self {
            RowsCount::Ten => 10,
            RowsCount::Fifteen => 15,
            RowsCount::Twenty => 20,
            RowsCount::TwentyFive => 25,
        }
    }
}

impl TryFrom<u32> for RowsCount {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(RowsCount::Ten),
            15 => Ok(RowsCount::Fifteen),
            20 => Ok(RowsCount::Twenty),
            25 => Ok(RowsCount::TwentyFive),
            other => Err(Error::InvalidRowsCount(other)),
        }
    }
}

impl From<RowsCount> for u32 {
    fn from(rows: RowsCount) -> Self {
        rows.get() as u32
    }
}

impl fmt::Display for RowsCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn booking_should_deserialize_from_api_shape() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "7",
            "roomName": "Ocean View",
            "hostName": "tyr",
            "guests": ["alice", "bob"],
            "bookingDate": "2022-12-26T22:00:00.000Z",
            "bookingTimeStart": "2022-12-26T22:00:00.000Z",
            "duration": 2
        }))
        .unwrap();

        assert_eq!(booking.id, "7");
        assert_eq!(booking.guests, vec!["alice", "bob"]);
        assert_eq!(booking.booking_time_start.to_rfc3339(), "2022-12-26T22:00:00+00:00");
        assert_eq!(booking.duration, 2);
    }

    #[test]
    fn booking_date_is_optional() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "7",
            "roomName": "Ocean View",
            "hostName": "tyr",
            "guests": [],
            "bookingTimeStart": "2022-12-26T22:00:00Z",
            "duration": 1
        }))
        .unwrap();
        assert!(booking.booking_date.is_none());
    }

    #[test]
    fn payload_should_keep_duration_as_entered() {
        let payload = BookingPayload {
            id: None,
            room_name: "Ocean View".into(),
            host_name: "tyr".into(),
            guests: vec!["alice".into()],
            duration: DurationValue::Text("3".into()),
            booking_time_start: "2022-12-26T22:00:00.000Z".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "roomName": "Ocean View",
                "hostName": "tyr",
                "guests": ["alice"],
                "duration": "3",
                "bookingTimeStart": "2022-12-26T22:00:00.000Z"
            })
        );

        let numeric = BookingPayload {
            id: Some("7".into()),
            duration: DurationValue::Number(2),
            ..payload
        };
        let value = serde_json::to_value(&numeric).unwrap();
        assert_eq!(value["id"], "7");
        assert_eq!(value["duration"], 2);
    }

    #[test]
    fn rows_count_should_only_accept_offered_sizes() {
        assert_eq!(RowsCount::default().get(), 10);
        assert_eq!(RowsCount::try_from(25).unwrap(), RowsCount::TwentyFive);
        assert!(matches!(
            RowsCount::try_from(12),
            Err(Error::InvalidRowsCount(12))
        ));
        let sizes: Vec<usize> = RowsCount::ALL.iter().map(|r| r.get()).collect();
        assert_eq!(sizes, vec![10, 15, 20, 25]);
    }
}
