use std::str::FromStr;

use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::Error;

/// Zone used to split a booking's start instant into wall-clock date and time
/// fields, and to put them back together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Zone {
    /// The host's local zone.
    #[default]
    Local,
    Named(Tz),
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        s.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| Error::InvalidTimezone(s.to_string()))
    }
}

impl Zone {
    /// `YYYY-MM-DD` of `at` in this zone.
    pub fn start_date(&self, at: &DateTime<Utc>) -> String {
        self.format(at, "%Y-%m-%d")
    }

    /// 24-hour `HH:MM:SS` of `at` in this zone, without the zone name.
    pub fn start_time(&self, at: &DateTime<Utc>) -> String {
        self.format(at, "%H:%M:%S")
    }

    /// Short human date, e.g. `Mon Dec 26 2022`.
    pub fn date_label(&self, at: &DateTime<Utc>) -> String {
        self.format(at, "%a %b %d %Y")
    }

    /// Reads `date` and `time` as wall-clock time in this zone and returns the
    /// instant as an ISO-8601 UTC string with millisecond precision.
    ///
    /// `time` may be `HH:MM:SS` or `HH:MM`. An ambiguous local time (clocks
    /// going back) resolves to the earlier instant; a time skipped by a DST
    /// jump is an error.
    pub fn booking_time_start(&self, date: &str, time: &str) -> Result<String, Error> {
        let naive = parse_wall_clock(date, time)?;
        let utc = match self {
            Zone::Local => to_utc(&Local, &naive),
            Zone::Named(tz) => to_utc(tz, &naive),
        }
        .ok_or_else(|| Error::InvalidDateTime(format!("{} {}", date, time)))?;
        Ok(utc.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    fn format(&self, at: &DateTime<Utc>, fmt: &str) -> String {
        match self {
            Zone::Local => at.with_timezone(&Local).format(fmt).to_string(),
            Zone::Named(tz) => at.with_timezone(tz).format(fmt).to_string(),
        }
    }
}

fn parse_wall_clock(date: &str, time: &str) -> Result<NaiveDateTime, Error> {
    let invalid = || Error::InvalidDateTime(format!("{} {}", date, time));
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
    let time = time.trim();
    let clock = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| invalid())?;
    Ok(day.and_time(clock))
}

fn to_utc<Z: TimeZone>(tz: &Z, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::{America, Asia};

    fn denver() -> Zone {
        Zone::Named(America::Denver)
    }

    #[test]
    fn zone_should_parse_names() {
        assert_eq!("local".parse::<Zone>().unwrap(), Zone::Local);
        assert_eq!("Asia/Tokyo".parse::<Zone>().unwrap(), Zone::Named(Asia::Tokyo));
        assert!(matches!(
            "Mars/Olympus".parse::<Zone>(),
            Err(Error::InvalidTimezone(_))
        ));
    }

    #[test]
    fn start_fields_should_use_zone_wall_clock() {
        let at = Utc.with_ymd_and_hms(2022, 12, 27, 2, 5, 9).unwrap();
        // 2022-12-26 19:05:09 MST
        assert_eq!(denver().start_date(&at), "2022-12-26");
        assert_eq!(denver().start_time(&at), "19:05:09");
        assert_eq!(denver().date_label(&at), "Mon Dec 26 2022");

        let tokyo = Zone::Named(Asia::Tokyo);
        assert_eq!(tokyo.start_date(&at), "2022-12-27");
        assert_eq!(tokyo.start_time(&at), "11:05:09");
    }

    #[test]
    fn booking_time_start_should_emit_utc_iso() {
        assert_eq!(
            denver().booking_time_start("2022-12-26", "15:00:00").unwrap(),
            "2022-12-26T22:00:00.000Z"
        );
        assert_eq!(
            denver().booking_time_start("2022-12-26", "15:00").unwrap(),
            "2022-12-26T22:00:00.000Z"
        );
    }

    #[test]
    fn start_fields_should_round_trip() {
        let instants = [
            Utc.with_ymd_and_hms(2022, 12, 27, 2, 5, 9).unwrap(),
            Utc.with_ymd_and_hms(2023, 7, 4, 16, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap(),
        ];
        for zone in [denver(), Zone::Named(Asia::Tokyo), Zone::Named(chrono_tz::UTC)] {
            for at in instants {
                let iso = zone
                    .booking_time_start(&zone.start_date(&at), &zone.start_time(&at))
                    .unwrap();
                let back: DateTime<Utc> = iso.parse().unwrap();
                assert_eq!(back, at);
            }
        }
    }

    #[test]
    fn ambiguous_local_time_should_pick_earlier_instant() {
        // clocks go back at 02:00 MDT on 2022-11-06
        assert_eq!(
            denver().booking_time_start("2022-11-06", "01:30:00").unwrap(),
            "2022-11-06T07:30:00.000Z"
        );
    }

    #[test]
    fn skipped_local_time_should_be_rejected() {
        // clocks jump forward at 02:00 MST on 2023-03-12
        assert!(matches!(
            denver().booking_time_start("2023-03-12", "02:30:00"),
            Err(Error::InvalidDateTime(_))
        ));
    }

    #[test]
    fn empty_or_garbled_input_should_be_rejected() {
        for (date, time) in [("", ""), ("2022-12-26", ""), ("", "10:00"), ("12/26/2022", "10:00")] {
            assert!(matches!(
                denver().booking_time_start(date, time),
                Err(Error::InvalidDateTime(_))
            ));
        }
    }
}
