use http::HeaderMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Languages the gateway can answer in. Serialized as the two-letter codes
/// the gateway expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,

    #[serde(rename = "hi")]
    Hindi,

    #[serde(rename = "te")]
    Telugu,

    #[serde(rename = "kn")]
    Kannada,

    #[serde(rename = "ta")]
    Tamil,

    #[serde(rename = "bn")]
    Bengali,

    #[serde(rename = "es")]
    Spanish,

    #[serde(rename = "fr")]
    French,

    #[serde(rename = "pt")]
    Portuguese,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Telugu => "te",
            Language::Kannada => "kn",
            Language::Tamil => "ta",
            Language::Bengali => "bn",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Portuguese => "pt",
        }
    }

    /// English name of the language, as shown to the model in prompts.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Telugu => "Telugu",
            Language::Kannada => "Kannada",
            Language::Tamil => "Tamil",
            Language::Bengali => "Bengali",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Portuguese => "Portuguese",
        }
    }

    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Hindi,
            Language::Telugu,
            Language::Kannada,
            Language::Tamil,
            Language::Bengali,
            Language::Spanish,
            Language::French,
            Language::Portuguese,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::all()
            .iter()
            .copied()
            .find(|l| l.code() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language code: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

/// Per-request overrides for API calls.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub headers: Option<HeaderMap>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}
