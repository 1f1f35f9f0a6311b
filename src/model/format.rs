//! Serde helpers for wire formats that differ from the serde defaults.

use std::fmt;

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const TIME_WITH_SECONDS: &str = "%H:%M:%S";
const TIME_WITHOUT_SECONDS: &str = "%H:%M";

/// Time of day that serializes as `HH:mm:ss` and accepts `HH:mm:ss` or `HH:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(pub NaiveTime);

impl TimeOfDay {
    /// Parses `HH:mm:ss`, falling back to `HH:mm`.
    pub fn parse(value: &str) -> Option<Self> {
        NaiveTime::parse_from_str(value, TIME_WITH_SECONDS)
            .or_else(|_| NaiveTime::parse_from_str(value, TIME_WITHOUT_SECONDS))
            .ok()
            .map(Self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_WITH_SECONDS))
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value)
            .ok_or_else(|| de::Error::custom(format!("Could not parse time: {}", value)))
    }
}

/// Deserializes a string field, treating `null` like a missing field.
///
/// Keeps `{"name": null}` a validation failure rather than a parse failure.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
