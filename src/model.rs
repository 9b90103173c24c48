use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timeutil::{minutes_to_time, time_to_minutes, TimeFormatError};

/// Minute-of-day offset — the only intra-day time unit.
pub type Minutes = i32;

/// Monotonically assigned booking id; never reclaimed after deletion.
pub type BookingId = u64;

pub type RoomId = u32;

/// Half-open interval `[start, end)` in minutes of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Minutes,
    pub end: Minutes,
}

impl Span {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Wall-clock time of day at minute resolution; `HH:MM` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(Minutes);

impl TimeOfDay {
    /// Defined for `0 <= minutes < 1440`.
    pub fn from_minutes(minutes: Minutes) -> Self {
        debug_assert!((0..1440).contains(&minutes), "minute offset out of range");
        Self(minutes)
    }

    pub fn minutes(&self) -> Minutes {
        self.0
    }

    /// Bookable times fall on 15-minute steps.
    pub fn on_quarter_step(&self) -> bool {
        self.0 % 15 == 0
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time_to_minutes(s).map(Self)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&minutes_to_time(self.0))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingType {
    Internal,
    External,
}

/// A meeting room. Statically configured; not created or destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub has_tv: bool,
}

/// A single reservation. `room_name` is denormalized from the room roster
/// for display and persisted with the rest of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub room_name: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub meeting_type: MeetingType,
    pub job_name: String,
    pub booker: String,
    pub people_count: Option<u32>,
}

impl Booking {
    pub fn span(&self) -> Span {
        Span::new(self.start_time.minutes(), self.end_time.minutes())
    }
}

/// The persisted unit: every booking plus the id counter, replaced as a
/// whole on each command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub last_id: BookingId,
    pub bookings: Vec<Booking>,
}

/// Create input. Required fields stay `Option` so the service itself rejects
/// incomplete submissions rather than trusting the client form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub room_id: Option<RoomId>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
    pub meeting_type: Option<MeetingType>,
    pub job_name: Option<String>,
    pub booker: Option<String>,
    #[serde(deserialize_with = "de_people_count")]
    pub people_count: Option<u32>,
}

/// Partial update. An omitted field keeps the prior value; `people_count`
/// distinguishes omitted (outer `None`) from an explicit null or empty
/// string (inner `None`), which clears the field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingPatch {
    pub room_id: Option<RoomId>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
    pub meeting_type: Option<MeetingType>,
    pub job_name: Option<String>,
    pub booker: Option<String>,
    #[serde(deserialize_with = "de_people_count_patch")]
    pub people_count: Option<Option<u32>>,
}

impl BookingPatch {
    /// The drag-move patch: only the calendar position changes.
    pub fn move_to(date: NaiveDate, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            date: Some(date),
            start_time: Some(start),
            end_time: Some(end),
            ..Self::default()
        }
    }
}

/// Head counts arrive from forms as a number, a numeric string, an empty
/// string, or null; the empty forms collapse to "absent".
fn de_people_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Count(u32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Count(n)) if n > 0 => Ok(Some(n)),
        Some(Raw::Count(_)) => Err(serde::de::Error::custom(
            "peopleCount must be a positive integer",
        )),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => match s.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(serde::de::Error::custom(
                "peopleCount must be a positive integer",
            )),
        },
    }
}

fn de_people_count_patch<'de, D>(deserializer: D) -> Result<Option<Option<u32>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    de_people_count(deserializer).map(Some)
}
