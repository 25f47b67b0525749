//! Prompt templates for the campus guide.
//!
//! Every structured prompt asks for prose followed by exactly one
//! ```` ```json ```` block, which is what the response extractor looks for.

use crate::domain::navigation::Coordinate;

use super::{CampusContext, Language};

const SYSTEM_TEMPLATE: &str = r#"You are the wayfinding assistant for {campus}, a hospital campus centred at latitude {lat}, longitude {lng}.
Help patients, visitors and staff find buildings, wards, entrances and services.
Be brief, calm and precise. Never invent medical advice."#;

const ROUTE_FORMAT: &str = r#"Answer with a short walking explanation, then exactly one fenced block that starts with ```json and ends with ```.
The block must be a single object:
{
  "steps": [{"description": "text", "path": [{"lat": number, "lng": number}]}],
  "landmarks": [{"name": "text", "position": {"lat": number, "lng": number}, "floor": integer, "internalLandmark": "text"}],
  "traffic": [{"path": [{"lat": number, "lng": number}], "level": "light" | "moderate" | "heavy", "description": "text"}]
}
Use real coordinates on the campus. Never use 0 for an unknown coordinate; leave the entry out instead.
Use floor 0 for outdoor points. For indoor landmarks give the floor and describe the inside location in internalLandmark."#;

const ITINERARY_FORMAT: &str = r#"Answer with a short summary, then exactly one fenced block that starts with ```json and ends with ```.
The block must be a single object:
{
  "locations": [{"name": "text", "description": "text", "lat": number, "lng": number, "time": "HH:MM", "duration": "text", "sequence": integer, "floor": integer, "internalLandmark": "text"}],
  "lines": [{"name": "text", "start": {"lat": number, "lng": number}, "end": {"lat": number, "lng": number}, "transport": "text", "travelTime": "text"}]
}
Number stops with sequence starting at 1 in visiting order. Never use 0 for an unknown coordinate."#;

const NEWS_TEMPLATE: &str = r#"Give a short bulletin of what a visitor to {campus} should know today: visiting hours, closed entrances, parking, construction, events.
Plain prose only, no JSON, at most five bullet points."#;

const CLASSIFY_TEMPLATE: &str = r#"A visitor to {campus} reported the following about traffic or access on campus:
"""{report}"""
Classify it. Reply with exactly one fenced block that starts with ```json and ends with ```, containing:
{"severity": "light" | "moderate" | "heavy" | "accident" | "closure", "location": "short place name on campus", "description": "one clear sentence"}
Write location and description in English."#;

/// Builds prompts for one campus and language.
#[derive(Debug, Clone)]
pub struct PromptBuilder<'a> {
    campus: &'a CampusContext,
    language: Language,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(campus: &'a CampusContext, language: Language) -> Self {
        Self { campus, language }
    }

    /// Standing instructions sent as the system prompt.
    pub fn system_prompt(&self) -> String {
        let center = self.campus.center();
        let base = SYSTEM_TEMPLATE
            .replace("{campus}", self.campus.name())
            .replace("{lat}", &center.lat.to_string())
            .replace("{lng}", &center.lng.to_string());
        format!("{}\n{}", base, self.language.response_instruction())
    }

    /// Wraps a routing request with the expected output format.
    pub fn route_prompt(&self, request: &str, origin: Option<Coordinate>) -> String {
        format!(
            "{}\n\nVisitor request: {}\n\n{}",
            self.origin_line(origin),
            request.trim(),
            ROUTE_FORMAT
        )
    }

    /// Wraps an itinerary request with the expected output format.
    pub fn itinerary_prompt(&self, request: &str, origin: Option<Coordinate>) -> String {
        format!(
            "{}\n\nVisitor request: {}\n\n{}",
            self.origin_line(origin),
            request.trim(),
            ITINERARY_FORMAT
        )
    }

    pub fn news_prompt(&self) -> String {
        NEWS_TEMPLATE.replace("{campus}", self.campus.name())
    }

    /// Asks for a `{severity, location, description}` reading of a report.
    pub fn report_classification_prompt(&self, report_text: &str) -> String {
        CLASSIFY_TEMPLATE
            .replace("{campus}", self.campus.name())
            .replace("{report}", report_text.trim())
    }

    fn origin_line(&self, origin: Option<Coordinate>) -> String {
        match origin {
            Some(at) => format!(
                "The visitor is currently at latitude {}, longitude {}.",
                at.lat, at.lng
            ),
            None => format!(
                "The visitor's location is unknown; start from the main entrance of {}.",
                self.campus.name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> CampusContext {
        CampusContext::new("City Hospital", Coordinate::new(20.48, 85.87).unwrap()).unwrap()
    }

    #[test]
    fn system_prompt_names_campus_and_language() {
        let campus = campus();
        let prompt = PromptBuilder::new(&campus, Language::Odia).system_prompt();
        assert!(prompt.contains("City Hospital"));
        assert!(prompt.contains("20.48"));
        assert!(prompt.contains("Odia"));
        assert!(!prompt.contains("{campus}"));
    }

    #[test]
    fn route_prompt_asks_for_fenced_json() {
        let campus = campus();
        let builder = PromptBuilder::new(&campus, Language::English);
        let prompt = builder.route_prompt("  way to radiology ", None);
        assert!(prompt.contains("Visitor request: way to radiology\n"));
        assert!(prompt.contains("```json"));
        assert!(prompt.contains("\"traffic\""));
        assert!(prompt.contains("main entrance of City Hospital"));
    }

    #[test]
    fn known_origin_is_included() {
        let campus = campus();
        let builder = PromptBuilder::new(&campus, Language::English);
        let at = Coordinate::new(20.4812, 85.8701).unwrap();
        let prompt = builder.itinerary_prompt("tour", Some(at));
        assert!(prompt.contains("latitude 20.4812, longitude 85.8701"));
        assert!(prompt.contains("\"sequence\""));
    }

    #[test]
    fn classification_prompt_quotes_the_report() {
        let campus = campus();
        let builder = PromptBuilder::new(&campus, Language::Hindi);
        let prompt = builder.report_classification_prompt(" gate 2 blocked ");
        assert!(prompt.contains("\"\"\"gate 2 blocked\"\"\""));
        assert!(prompt.contains("closure"));
    }

    #[test]
    fn news_prompt_is_prose_only() {
        let campus = campus();
        let prompt = PromptBuilder::new(&campus, Language::English).news_prompt();
        assert!(prompt.contains("City Hospital"));
        assert!(prompt.contains("no JSON"));
    }
}
