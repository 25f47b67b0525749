//! Timestamp value object for immutable points in time.

use chrono::{DateTime, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Immutable point in time, always UTC.
///
/// Serialized as integer milliseconds since the Unix epoch, which is the
/// shape the report board exchanges with its clients. Precision is held at
/// milliseconds so a stored timestamp reads back equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(3))
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(3))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Returns `None` when the value is outside chrono's representable range.
    pub fn from_unix_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns the timestamp as Unix milliseconds.
    pub fn as_unix_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_unix_millis())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        Self::from_unix_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", millis)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now().trunc_subsecs(3);
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_now_survives_serde_round_trip() {
        let ts = Timestamp::now();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn from_datetime_drops_sub_millisecond_precision() {
        let dt = Utc.timestamp_nanos(1_705_276_800_123_456_789);
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts, Timestamp::from_unix_millis(1_705_276_800_123).unwrap());
    }

    #[test]
    fn timestamp_from_unix_millis_works() {
        // 2024-01-15T00:00:00Z
        let ts = Timestamp::from_unix_millis(1_705_276_800_000).unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
        assert_eq!(ts.as_datetime().month(), 1);
        assert_eq!(ts.as_datetime().day(), 15);
    }

    #[test]
    fn timestamp_millis_roundtrip() {
        let ts = Timestamp::from_unix_millis(1_705_276_800_123).unwrap();
        assert_eq!(ts.as_unix_millis(), 1_705_276_800_123);
    }

    #[test]
    fn timestamp_out_of_range_is_none() {
        assert!(Timestamp::from_unix_millis(i64::MAX).is_none());
    }

    #[test]
    fn timestamp_serializes_as_millis() {
        let ts = Timestamp::from_unix_millis(1_705_276_800_000).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1705276800000");
    }

    #[test]
    fn timestamp_deserializes_from_millis() {
        let ts: Timestamp = serde_json::from_str("1705276800000").unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
    }

    #[test]
    fn timestamp_ordering_works() {
        let ts1 = Timestamp::from_unix_millis(1000).unwrap();
        let ts2 = Timestamp::from_unix_millis(2000).unwrap();

        assert!(ts1 < ts2);
        assert!(ts1.is_before(&ts2));
    }
}
