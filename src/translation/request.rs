use super::Language;
use crate::error::WidgetError;

/// One translation attempt, stamped with the session's sequence number.
///
/// Requests are never cancelled. A newer request supersedes an older one and
/// the older response is dropped when it arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub seq: u64,
    pub text: String,
    pub source_language: Language,
    pub target_language: Language,
}

impl TranslationRequest {
    /// The `langpair` query value, e.g. `en|fr`.
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.source_language, self.target_language)
    }

    /// Pairs this request with what the service returned for it.
    pub fn respond(&self, outcome: Result<String, WidgetError>) -> TranslationResponse {
        TranslationResponse {
            seq: self.seq,
            outcome,
        }
    }
}

/// The settled result of a [`TranslationRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResponse {
    pub seq: u64,
    pub outcome: Result<String, WidgetError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_langpair() {
        let request = TranslationRequest {
            seq: 1,
            text: "Hola".to_string(),
            source_language: Language::Spanish,
            target_language: Language::English,
        };
        assert_eq!(request.langpair(), "es|en");
    }

    #[test]
    fn test_respond_keeps_seq() {
        let request = TranslationRequest {
            seq: 7,
            text: "Hi".to_string(),
            source_language: Language::English,
            target_language: Language::French,
        };
        let response = request.respond(Ok("Salut".to_string()));
        assert_eq!(response.seq, 7);
        assert_eq!(response.outcome, Ok("Salut".to_string()));
    }
}
