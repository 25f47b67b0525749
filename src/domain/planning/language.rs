//! Response language for planning conversations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Language the model must answer in.
///
/// Fixed when a planning session is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "or")]
    Odia,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Odia => "or",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Odia => "Odia",
        }
    }

    /// Sentence appended to every prompt so prose comes back in this
    /// language. JSON keys stay in English regardless.
    pub fn response_instruction(&self) -> String {
        format!(
            "Write all prose for the visitor in {}. Keep JSON keys and enum values in English.",
            self.display_name()
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            "or" | "odia" | "oriya" => Ok(Language::Odia),
            other => Err(ValidationError::invalid_format(
                "language",
                format!("unsupported language '{}'", other),
            )),
        }
    }
}
