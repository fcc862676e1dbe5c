//! Editable state behind the booking detail view.

use std::{fmt, str::FromStr};

use abi::{Booking, BookingId, BookingPayload, DurationValue, Error, Zone};
use booking::Bookings;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::route::Route;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    View,
    Add,
    Edit,
}

impl FormMode {
    pub fn is_editing(self) -> bool {
        self != FormMode::View
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormMode::View => "",
            FormMode::Add => "add",
            FormMode::Edit => "edit",
        })
    }
}

/// Form inputs, addressed by their input name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomField {
    RoomName,
    HostName,
    Guests,
    StartDate,
    StartTime,
    Duration,
}

impl RoomField {
    pub const ALL: [RoomField; 6] = [
        RoomField::RoomName,
        RoomField::HostName,
        RoomField::Guests,
        RoomField::StartDate,
        RoomField::StartTime,
        RoomField::Duration,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoomField::RoomName => "roomName",
            RoomField::HostName => "hostName",
            RoomField::Guests => "guests",
            RoomField::StartDate => "startDate",
            RoomField::StartTime => "startTime",
            RoomField::Duration => "duration",
        }
    }
}

impl FromStr for RoomField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Values shown in the form. Everything is text except `duration`, which
/// keeps the server's number until the user types into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Option<BookingId>,
    pub room_name: String,
    pub host_name: String,
    pub guests: String,
    pub start_date: String,
    pub start_time: String,
    pub duration: DurationValue,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            id: None,
            room_name: String::new(),
            host_name: String::new(),
            guests: String::new(),
            start_date: String::new(),
            start_time: String::new(),
            duration: DurationValue::Number(1),
        }
    }
}

impl Room {
    pub fn from_booking(booking: &Booking, zone: Zone) -> Self {
        let start = &booking.booking_time_start;
        Self {
            id: Some(booking.id.clone()),
            room_name: booking.room_name.clone(),
            host_name: booking.host_name.clone(),
            guests: booking.guests.join(","),
            start_date: zone.start_date(start),
            start_time: zone.start_time(start),
            duration: DurationValue::Number(booking.duration as i64),
        }
    }

    pub fn get(&self, field: RoomField) -> String {
        match field {
            RoomField::RoomName => self.room_name.clone(),
            RoomField::HostName => self.host_name.clone(),
            RoomField::Guests => self.guests.clone(),
            RoomField::StartDate => self.start_date.clone(),
            RoomField::StartTime => self.start_time.clone(),
            RoomField::Duration => self.duration.to_string(),
        }
    }

    pub fn set(&mut self, field: RoomField, value: String) {
        match field {
            RoomField::RoomName => self.room_name = value,
            RoomField::HostName => self.host_name = value,
            RoomField::Guests => self.guests = value,
            RoomField::StartDate => self.start_date = value,
            RoomField::StartTime => self.start_time = value,
            RoomField::Duration => self.duration = DurationValue::Text(value),
        }
    }

    /// Plain comma split: no trimming, empty entries kept.
    pub fn guest_list(&self) -> Vec<String> {
        self.guests.split(',').map(str::to_string).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The update was sent; holds the server's reply.
    Edited(Value),
    /// Add mode: acknowledged locally, nothing sent.
    Added,
    /// Save outside add/edit mode.
    Unchanged,
}

impl SaveOutcome {
    pub fn acknowledgement(&self) -> Option<&'static str> {
        match self {
            SaveOutcome::Edited(_) => Some("Edited!"),
            SaveOutcome::Added => Some("Added!"),
            SaveOutcome::Unchanged => None,
        }
    }

    pub fn navigate_to(&self) -> Option<Route> {
        match self {
            SaveOutcome::Added => Some(Route::Home),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingForm {
    room: Room,
    prev_room: Room,
    mode: FormMode,
    zone: Zone,
}

impl BookingForm {
    pub fn new(zone: Zone) -> Self {
        Self {
            room: Room::default(),
            prev_room: Room::default(),
            mode: FormMode::View,
            zone,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn prev_room(&self) -> &Room {
        &self.prev_room
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Fills the form from a fetched booking; the result is also the snapshot
    /// that cancel returns to.
    pub fn load(&mut self, booking: &Booking) {
        let room = Room::from_booking(booking, self.zone);
        self.prev_room = room.clone();
        self.room = room;
    }

    /// Keeps room and host names from the snapshot and clears the rest.
    pub fn enter_add_mode(&mut self) {
        let initial = Room::default();
        self.mode = FormMode::Add;
        self.room = Room {
            guests: initial.guests,
            start_time: initial.start_time,
            start_date: initial.start_date,
            duration: initial.duration,
            ..self.prev_room.clone()
        };
    }

    pub fn enter_edit_mode(&mut self) {
        self.mode = FormMode::Edit;
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::View;
        self.room = self.prev_room.clone();
    }

    pub fn handle_change(&mut self, field: RoomField, value: impl Into<String>) {
        self.room.set(field, value.into());
    }

    /// Same as [`handle_change`](Self::handle_change), keyed by input name.
    pub fn handle_named_change(&mut self, name: &str, value: impl Into<String>) -> Result<(), Error> {
        let field = name.parse()?;
        self.handle_change(field, value);
        Ok(())
    }

    pub fn payload(&self, id: Option<&str>) -> Result<BookingPayload, Error> {
        let booking_time_start = self
            .zone
            .booking_time_start(&self.room.start_date, &self.room.start_time)?;
        Ok(BookingPayload {
            id: id.map(str::to_string),
            room_name: self.room.room_name.clone(),
            host_name: self.room.host_name.clone(),
            guests: self.room.guest_list(),
            duration: self.room.duration.clone(),
            booking_time_start,
        })
    }

    /// Submits the form. Edit mode sends `PUT bookings/{id}`; add mode only
    /// acknowledges, since creating bookings is switched off. The form is
    /// back in view mode once the request goes out, whatever its result, and
    /// the snapshot is not refreshed.
    pub async fn save<B>(&mut self, api: &B, id: &str) -> Result<SaveOutcome, Error>
    where
        B: Bookings + Sync + ?Sized,
    {
        match self.mode {
            FormMode::Edit => {
                let payload = self.payload(Some(id))?;
                self.mode = FormMode::View;
                let ret = api.update(id, &payload).await?;
                info!(id, "booking updated");
                Ok(SaveOutcome::Edited(ret))
            }
            FormMode::Add => {
                match self.payload(None) {
                    Ok(payload) => debug!(?payload, "add submission disabled, not sent"),
                    Err(e) => warn!("add submission disabled, payload invalid: {}", e),
                }
                self.mode = FormMode::View;
                Ok(SaveOutcome::Added)
            }
            FormMode::View => Ok(SaveOutcome::Unchanged),
        }
    }
}
