pub mod chat;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Ollama,
    Azura,
}

impl BackendKind {
    /// Maps the client-supplied backend tag to an upstream target.
    /// "ollama" selects the local Ollama daemon; every other value falls
    /// through to the Azura completion service, which the deployed
    /// clients treat as the default.
    pub fn from_tag(tag: &str) -> BackendKind {
        match tag.to_lowercase().as_str() {
            "ollama" => BackendKind::Ollama,
            _ => BackendKind::Azura,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Ollama => write!(f, "ollama"),
            BackendKind::Azura => write!(f, "azura"),
        }
    }
}

#[derive(Debug)]
pub enum UpstreamError {
    /// Network failure, timeout, non-success status, or an unparseable body.
    Http(reqwest::Error),
    /// The upstream answered 2xx but the completion field was absent.
    MissingCompletion {
        service: &'static str,
        field: &'static str,
    },
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Http(e) => write!(f, "upstream request failed: {}", e),
            UpstreamError::MissingCompletion { service, field } => {
                write!(f, "upstream response from {} had no '{}' field", service, field)
            }
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Http(e) => Some(e),
            UpstreamError::MissingCompletion { .. } => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_recognizes_ollama_case_insensitively() {
        assert_eq!(BackendKind::from_tag("ollama"), BackendKind::Ollama);
        assert_eq!(BackendKind::from_tag("Ollama"), BackendKind::Ollama);
    }

    #[test]
    fn from_tag_defaults_to_azura() {
        assert_eq!(BackendKind::from_tag("azura"), BackendKind::Azura);
        assert_eq!(BackendKind::from_tag("openai"), BackendKind::Azura);
        assert_eq!(BackendKind::from_tag(""), BackendKind::Azura);
    }

    #[test]
    fn missing_completion_display_names_service_and_field() {
        let err = UpstreamError::MissingCompletion {
            service: "ollama",
            field: "response",
        };
        assert_eq!(
            err.to_string(),
            "upstream response from ollama had no 'response' field"
        );
    }
}
