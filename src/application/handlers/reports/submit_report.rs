//! SubmitReportHandler - Classifies and stores a visitor's traffic report.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::planning::{CampusContext, Language, PromptBuilder};
use crate::domain::reports::{
    NewTrafficReport, ReportClassification, ReportError, UserTrafficReport, MAX_REPORT_TEXT_LENGTH,
};
use crate::domain::response::ResponseExtractor;
use crate::ports::{AIProvider, CompletionRequest, MessageRole, RequestMetadata, TrafficReportStore};

/// Command to submit a free-text report.
#[derive(Debug, Clone)]
pub struct SubmitReportCommand {
    pub text: String,
    pub reporter_name: Option<String>,
}

/// Result of a submitted report.
#[derive(Debug, Clone)]
pub struct SubmitReportResult {
    pub report: UserTrafficReport,
    /// True when the model could not classify the text and defaults were used.
    pub classification_fallback: bool,
}

pub struct SubmitReportHandler {
    ai_provider: Arc<dyn AIProvider>,
    store: Arc<dyn TrafficReportStore>,
    campus: CampusContext,
    extractor: ResponseExtractor,
}

impl SubmitReportHandler {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        store: Arc<dyn TrafficReportStore>,
        campus: CampusContext,
    ) -> Self {
        Self {
            ai_provider,
            store,
            campus,
            extractor: ResponseExtractor::new(),
        }
    }

    pub async fn handle(&self, cmd: SubmitReportCommand) -> Result<SubmitReportResult, ReportError> {
        let text = cmd.text.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("text").into());
        }
        let len = text.chars().count();
        if len > MAX_REPORT_TEXT_LENGTH {
            return Err(ValidationError::out_of_range(
                "text",
                1,
                MAX_REPORT_TEXT_LENGTH as i64,
                len as i64,
            )
            .into());
        }

        let (classification, classification_fallback) = self.classify(text).await;

        let new_report = NewTrafficReport::new(
            classification.severity,
            classification.location,
            classification.description,
        )?
        .with_original_text(text)
        .with_reporter_name(cmd.reporter_name);

        let report = self.store.create(new_report).await?;

        Ok(SubmitReportResult {
            report,
            classification_fallback,
        })
    }

    /// Asks the model to classify the text; falls back field by field.
    async fn classify(&self, text: &str) -> (ReportClassification, bool) {
        // Classifications are stored in English whatever the visitor wrote.
        let prompt = PromptBuilder::new(&self.campus, Language::English)
            .report_classification_prompt(text);
        let request = CompletionRequest::new(RequestMetadata::new("report_classification"))
            .with_message(MessageRole::User, prompt)
            .with_temperature(0.0);

        match self.ai_provider.complete(request).await {
            Ok(response) => {
                let payload = self.extractor.extract(&response.content).payload;
                if payload.is_none() {
                    tracing::debug!("Report classification had no JSON block, using defaults");
                }
                (
                    ReportClassification::from_payload(payload.as_ref(), text),
                    payload.is_none(),
                )
            }
            Err(err) => {
                tracing::warn!(error = %err, "Report classification failed, using defaults");
                (ReportClassification::from_payload(None, text), true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::reports::InMemoryTrafficReportStore;
    use crate::domain::navigation::Coordinate;
    use crate::domain::reports::{ReportSeverity, UNSPECIFIED_LOCATION};
    use serde_json::json;

    fn campus() -> CampusContext {
        CampusContext::new("City Hospital", Coordinate::new(20.48, 85.87).unwrap()).unwrap()
    }

    fn command(text: &str) -> SubmitReportCommand {
        SubmitReportCommand {
            text: text.to_string(),
            reporter_name: Some("Ravi".to_string()),
        }
    }

    #[tokio::test]
    async fn stores_classified_report() {
        let provider = MockAIProvider::new().with_fenced_json(
            "",
            &json!({"severity": "accident", "location": "Emergency ramp", "description": "Ambulance blocked by a stalled car"}),
        );
        let store = Arc::new(InMemoryTrafficReportStore::new());
        let handler = SubmitReportHandler::new(Arc::new(provider), store.clone(), campus());

        let result = handler.handle(command("car stuck on the emergency ramp")).await.unwrap();

        assert!(!result.classification_fallback);
        assert_eq!(result.report.severity, ReportSeverity::Accident);
        assert_eq!(result.report.location, "Emergency ramp");
        assert_eq!(
            result.report.original_text.as_deref(),
            Some("car stuck on the emergency ramp")
        );
        assert_eq!(result.report.reporter_name.as_deref(), Some("Ravi"));
        assert_eq!(store.list_recent(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn provider_failure_uses_defaults() {
        let provider = MockAIProvider::new().with_error(MockError::Network {
            message: "reset".into(),
        });
        let store = Arc::new(InMemoryTrafficReportStore::new());
        let handler = SubmitReportHandler::new(Arc::new(provider), store, campus());

        let result = handler.handle(command("  long queue at pharmacy ")).await.unwrap();

        assert!(result.classification_fallback);
        assert_eq!(result.report.severity, ReportSeverity::Moderate);
        assert_eq!(result.report.location, UNSPECIFIED_LOCATION);
        assert_eq!(result.report.description, "long queue at pharmacy");
    }

    #[tokio::test]
    async fn verbose_classification_still_stores_report() {
        let provider = MockAIProvider::new().with_fenced_json(
            "",
            &json!({"severity": "heavy", "location": "Gate 2", "description": "x".repeat(1200)}),
        );
        let store = Arc::new(InMemoryTrafficReportStore::new());
        let handler = SubmitReportHandler::new(Arc::new(provider), store, campus());

        let result = handler.handle(command("queue at gate 2")).await.unwrap();

        assert_eq!(result.report.severity, ReportSeverity::Heavy);
        assert_eq!(result.report.location, "Gate 2");
        assert_eq!(result.report.description, "queue at gate 2");
    }

    #[tokio::test]
    async fn blank_text_is_refused() {
        let provider = Arc::new(MockAIProvider::new());
        let store = Arc::new(InMemoryTrafficReportStore::new());
        let handler = SubmitReportHandler::new(provider.clone(), store, campus());

        let err = handler.handle(command("   ")).await.unwrap_err();

        assert!(matches!(err, ReportError::Validation(ValidationError::EmptyField { .. })));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn classification_request_quotes_report() {
        let provider = Arc::new(MockAIProvider::new());
        let store = Arc::new(InMemoryTrafficReportStore::new());
        let handler = SubmitReportHandler::new(provider.clone(), store, campus());

        handler.handle(command("gate 4 closed")).await.unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls[0].metadata.purpose, "report_classification");
        assert!(calls[0].last_user_message().unwrap().contains("gate 4 closed"));
        assert_eq!(calls[0].temperature, Some(0.0));
    }
}
