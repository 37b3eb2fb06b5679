use async_trait::async_trait;
use regex::Regex;

use super::interface::LanguageDetector;

/// Languages checked in priority order; the first stopword hit wins.
const STOPWORD_PATTERNS: &[(&str, &str)] = &[
    ("en", r"\b(the|is|and|in|to|have)\b"),
    ("es", r"\b(el|la|los|las|es|y|en|de)\b"),
    ("fr", r"\b(le|la|les|et|en|dans|je|tu|il)\b"),
    ("de", r"\b(der|die|das|und|in|zu|ich|du|er)\b"),
];

const DEFAULT_LANGUAGE: &str = "en";

/// Placeholder detector that matches common stopwords per language.
/// The interface is the contract; the heuristic is intentionally crude.
pub struct KeywordDetector {
    patterns: Vec<(&'static str, Regex)>,
}

impl KeywordDetector {
    pub fn new() -> Self {
        let patterns = STOPWORD_PATTERNS
            .iter()
            .map(|(lang, pattern)| {
                (*lang, Regex::new(pattern).expect("stopword pattern is valid"))
            })
            .collect();
        Self { patterns }
    }

    /// Match against each stopword list in priority order.
    /// Total function: unknown text falls back to English.
    pub fn best_guess(&self, text: &str) -> &'static str {
        let lowered = text.to_lowercase();
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(&lowered))
            .map(|(lang, _)| *lang)
            .unwrap_or(DEFAULT_LANGUAGE)
    }
}

impl Default for KeywordDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LanguageDetector for KeywordDetector {
    async fn detect(&self, text: &str) -> Result<String, anyhow::Error> {
        Ok(self.best_guess(text).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_spanish_stopwords() {
        let detector = KeywordDetector::new();
        assert_eq!(detector.best_guess("Hola el mundo"), "es");
    }

    #[test]
    fn detects_each_language() {
        let detector = KeywordDetector::new();
        assert_eq!(detector.best_guess("where is the station"), "en");
        assert_eq!(detector.best_guess("los gatos y perros"), "es");
        assert_eq!(detector.best_guess("je suis dans le jardin"), "fr");
        assert_eq!(detector.best_guess("ich und du"), "de");
    }

    #[test]
    fn english_wins_priority_ties() {
        // "en" appears in the Spanish and French lists too, but English
        // is checked first.
        let detector = KeywordDetector::new();
        assert_eq!(detector.best_guess("the el le der"), "en");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let detector = KeywordDetector::new();
        assert_eq!(detector.best_guess("LOS GATOS"), "es");
    }

    #[test]
    fn unknown_text_defaults_to_english() {
        let detector = KeywordDetector::new();
        assert_eq!(detector.best_guess("xyzzy plugh"), "en");
        assert_eq!(detector.best_guess(""), "en");
    }

    #[tokio::test]
    async fn detect_is_deterministic() {
        let detector = KeywordDetector::new();
        let first = detector.detect("le chat est dans le jardin").await.unwrap();
        let second = detector.detect("le chat est dans le jardin").await.unwrap();
        assert_eq!(first, second);
    }
}
