//! Community traffic reports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{ReportId, Timestamp, ValidationError};
use crate::domain::navigation::{
    coerce_integer, optional_integer, optional_text, require_label, require_object,
    require_text, Rejection,
};

/// Maximum length of free-text fields accepted from visitors.
pub const MAX_REPORT_TEXT_LENGTH: usize = 1_000;

/// How bad the reported situation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSeverity {
    Light,
    Moderate,
    Heavy,
    Accident,
    Closure,
}

impl ReportSeverity {
    /// Exact match against the wire names.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ReportSeverity::Light),
            "moderate" => Some(ReportSeverity::Moderate),
            "heavy" => Some(ReportSeverity::Heavy),
            "accident" => Some(ReportSeverity::Accident),
            "closure" => Some(ReportSeverity::Closure),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSeverity::Light => "light",
            ReportSeverity::Moderate => "moderate",
            ReportSeverity::Heavy => "heavy",
            ReportSeverity::Accident => "accident",
            ReportSeverity::Closure => "closure",
        }
    }
}

/// A visitor's confirmation or dispute of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationVote {
    Up,
    Down,
}

impl VerificationVote {
    pub fn delta(&self) -> i64 {
        match self {
            VerificationVote::Up => 1,
            VerificationVote::Down => -1,
        }
    }
}

/// A report as stored on the community board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTrafficReport {
    pub id: ReportId,
    pub timestamp: Timestamp,
    pub severity: ReportSeverity,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_name: Option<String>,
    /// Net up/down votes. May go negative.
    #[serde(default)]
    pub verification_count: i64,
}

impl UserTrafficReport {
    /// Validates a record read back from the report store.
    pub fn parse(value: &Value) -> Result<Self, Rejection> {
        let obj = require_object(value, "report")?;

        let id = ReportId::new(require_label(obj, "id")?)
            .map_err(|_| Rejection::new("id", "blank"))?;
        let timestamp = obj
            .get("timestamp")
            .and_then(coerce_integer)
            .and_then(Timestamp::from_unix_millis)
            .ok_or(Rejection::new("timestamp", "not epoch milliseconds"))?;
        let severity = ReportSeverity::parse(require_text(obj, "severity")?)
            .ok_or(Rejection::new("severity", "unknown severity"))?;

        Ok(Self {
            id,
            timestamp,
            severity,
            location: require_text(obj, "location")?.to_string(),
            description: require_text(obj, "description")?.to_string(),
            original_text: optional_text(obj, "originalText")?,
            reporter_name: optional_text(obj, "reporterName")?,
            verification_count: optional_integer(obj, "verificationCount")?.unwrap_or(0),
        })
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        Self::parse(value).ok()
    }

    /// Applies an up or down vote.
    pub fn apply_vote(&mut self, vote: VerificationVote) {
        self.verification_count = self.verification_count.saturating_add(vote.delta());
    }
}

/// A report about to be created; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrafficReport {
    pub severity: ReportSeverity,
    pub location: String,
    pub description: String,
    pub original_text: Option<String>,
    pub reporter_name: Option<String>,
}

impl NewTrafficReport {
    pub fn new(
        severity: ReportSeverity,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let location = location.into();
        let description = description.into();
        if location.trim().is_empty() {
            return Err(ValidationError::empty_field("location"));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        check_length("location", &location)?;
        check_length("description", &description)?;

        Ok(Self {
            severity,
            location,
            description,
            original_text: None,
            reporter_name: None,
        })
    }

    pub fn with_original_text(mut self, text: impl Into<String>) -> Self {
        self.original_text = Some(text.into());
        self
    }

    /// Sets the reporter name; blank names are treated as anonymous.
    pub fn with_reporter_name(mut self, name: Option<String>) -> Self {
        self.reporter_name = name.filter(|n| !n.trim().is_empty());
        self
    }

    /// Materializes the stored record.
    pub fn into_report(self, id: ReportId, timestamp: Timestamp) -> UserTrafficReport {
        UserTrafficReport {
            id,
            timestamp,
            severity: self.severity,
            location: self.location,
            description: self.description,
            original_text: self.original_text,
            reporter_name: self.reporter_name,
            verification_count: 0,
        }
    }
}

fn check_length(field: &str, text: &str) -> Result<(), ValidationError> {
    let len = text.chars().count();
    if len > MAX_REPORT_TEXT_LENGTH {
        return Err(ValidationError::out_of_range(
            field,
            1,
            MAX_REPORT_TEXT_LENGTH as i64,
            len as i64,
        ));
    }
    Ok(())
}

/// Structured reading of a visitor's free-text report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportClassification {
    pub severity: ReportSeverity,
    pub location: String,
    pub description: String,
}

/// Location used when the model could not name one.
pub const UNSPECIFIED_LOCATION: &str = "Unspecified location";

impl ReportClassification {
    /// Reads `{severity, location, description}` from a model payload.
    ///
    /// Each field falls back independently: severity to `moderate`,
    /// location to [`UNSPECIFIED_LOCATION`], description to the visitor's
    /// own words. Severity is matched case-insensitively here because the
    /// model, not a client, wrote it. A field longer than
    /// [`MAX_REPORT_TEXT_LENGTH`] counts as missing.
    pub fn from_payload(payload: Option<&Value>, original_text: &str) -> Self {
        let obj = payload.and_then(Value::as_object);
        let text_field = |key: &'static str| {
            obj.and_then(|o| require_label(o, key).ok())
                .map(str::trim)
                .filter(|s| s.chars().count() <= MAX_REPORT_TEXT_LENGTH)
                .map(str::to_string)
        };

        let severity = text_field("severity")
            .and_then(|s| ReportSeverity::parse(&s.to_ascii_lowercase()))
            .unwrap_or(ReportSeverity::Moderate);

        Self {
            severity,
            location: text_field("location").unwrap_or_else(|| UNSPECIFIED_LOCATION.to_string()),
            description: text_field("description")
                .unwrap_or_else(|| original_text.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored_record() -> Value {
        json!({
            "id": "rep-1",
            "timestamp": 1_705_276_800_000i64,
            "severity": "accident",
            "location": "Emergency gate",
            "description": "Two cars collided near the ramp",
            "originalText": "crash at emergency gate!!",
            "reporterName": "Asha",
            "verificationCount": 3
        })
    }

    #[test]
    fn parses_stored_record() {
        let report = UserTrafficReport::from_value(&stored_record()).unwrap();
        assert_eq!(report.id.as_str(), "rep-1");
        assert_eq!(report.severity, ReportSeverity::Accident);
        assert_eq!(report.timestamp.as_unix_millis(), 1_705_276_800_000);
        assert_eq!(report.verification_count, 3);
        assert_eq!(report.reporter_name.as_deref(), Some("Asha"));
    }

    #[test]
    fn optional_fields_default() {
        let mut record = stored_record();
        let obj = record.as_object_mut().unwrap();
        obj.remove("originalText");
        obj.remove("reporterName");
        obj.remove("verificationCount");
        let report = UserTrafficReport::from_value(&record).unwrap();
        assert_eq!(report.original_text, None);
        assert_eq!(report.verification_count, 0);
    }

    #[test]
    fn unknown_severity_is_refused() {
        let mut record = stored_record();
        record["severity"] = json!("catastrophic");
        assert_eq!(
            UserTrafficReport::parse(&record),
            Err(Rejection::new("severity", "unknown severity"))
        );
    }

    #[test]
    fn fractional_timestamp_is_refused() {
        let mut record = stored_record();
        record["timestamp"] = json!(1.5);
        assert!(UserTrafficReport::from_value(&record).is_none());
    }

    #[test]
    fn stored_record_round_trips_through_serde() {
        let report = UserTrafficReport::from_value(&stored_record()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value, stored_record());
    }

    #[test]
    fn votes_adjust_count_and_may_go_negative() {
        let mut report = UserTrafficReport::from_value(&stored_record()).unwrap();
        report.verification_count = 0;
        report.apply_vote(VerificationVote::Down);
        report.apply_vote(VerificationVote::Down);
        assert_eq!(report.verification_count, -2);
        report.apply_vote(VerificationVote::Up);
        assert_eq!(report.verification_count, -1);
    }

    #[test]
    fn new_report_requires_location_and_description() {
        assert!(NewTrafficReport::new(ReportSeverity::Light, " ", "slow").is_err());
        assert!(NewTrafficReport::new(ReportSeverity::Light, "Gate 2", "").is_err());
        let long = "x".repeat(MAX_REPORT_TEXT_LENGTH + 1);
        assert!(matches!(
            NewTrafficReport::new(ReportSeverity::Light, "Gate 2", long),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn blank_reporter_name_is_anonymous() {
        let report = NewTrafficReport::new(ReportSeverity::Heavy, "Gate 2", "Queue")
            .unwrap()
            .with_reporter_name(Some("  ".to_string()));
        assert_eq!(report.reporter_name, None);
    }

    #[test]
    fn classification_reads_model_payload() {
        let payload = json!({"severity": "Closure", "location": " Gate 3 ", "description": "Barricaded"});
        let c = ReportClassification::from_payload(Some(&payload), "gate 3 shut");
        assert_eq!(c.severity, ReportSeverity::Closure);
        assert_eq!(c.location, "Gate 3");
        assert_eq!(c.description, "Barricaded");
    }

    #[test]
    fn classification_falls_back_per_field() {
        let payload = json!({"severity": "apocalyptic", "location": ""});
        let c = ReportClassification::from_payload(Some(&payload), " long queue at pharmacy ");
        assert_eq!(c.severity, ReportSeverity::Moderate);
        assert_eq!(c.location, UNSPECIFIED_LOCATION);
        assert_eq!(c.description, "long queue at pharmacy");

        let c = ReportClassification::from_payload(None, "jam");
        assert_eq!(c.severity, ReportSeverity::Moderate);
    }

    #[test]
    fn overlong_model_fields_fall_back() {
        let long = "x".repeat(MAX_REPORT_TEXT_LENGTH + 1);
        let payload = json!({"severity": "heavy", "location": long, "description": long});
        let c = ReportClassification::from_payload(Some(&payload), "queue at gate 2");
        assert_eq!(c.severity, ReportSeverity::Heavy);
        assert_eq!(c.location, UNSPECIFIED_LOCATION);
        assert_eq!(c.description, "queue at gate 2");
    }
}
