use async_trait::async_trait;

use super::interface::TranslationProvider;

/// Per-pair prefixes covering the language pairs the demo UI offers.
/// Unmapped pairs pass the text through unprefixed.
const PAIR_PREFIXES: &[(&str, &str, &str)] = &[
    ("en", "es", "Traducción al español: "),
    ("en", "fr", "Traduction en français: "),
    ("en", "de", "Deutsche Übersetzung: "),
    ("es", "en", "English translation: "),
    ("es", "fr", "Traduction en français: "),
    ("es", "de", "Deutsche Übersetzung: "),
    ("fr", "en", "English translation: "),
    ("fr", "es", "Traducción al español: "),
    ("fr", "de", "Deutsche Übersetzung: "),
    ("de", "en", "English translation: "),
    ("de", "es", "Traducción al español: "),
    ("de", "fr", "Traduction en français: "),
];

fn pair_prefix(source: &str, target: &str) -> &'static str {
    PAIR_PREFIXES
        .iter()
        .find(|(from, to, _)| *from == source && *to == target)
        .map(|(_, _, prefix)| *prefix)
        .unwrap_or("")
}

/// Placeholder provider that marks text with a per-pair prefix instead
/// of translating it.
pub struct MockTranslator;

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, anyhow::Error> {
        if source == target {
            return Ok(text.to_string());
        }
        Ok(format!("{}{}", pair_prefix(source, target), text))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prefixes_known_pairs() {
        let translator = MockTranslator;
        let result = translator.translate("Hello world", "en", "es").await.unwrap();
        assert_eq!(result, "Traducción al español: Hello world");

        let result = translator.translate("Hola", "es", "en").await.unwrap();
        assert_eq!(result, "English translation: Hola");
    }

    #[tokio::test]
    async fn identity_pair_returns_text_unchanged() {
        let translator = MockTranslator;
        let result = translator.translate("Hello world", "en", "en").await.unwrap();
        assert_eq!(result, "Hello world");
    }

    #[tokio::test]
    async fn unmapped_pair_passes_through_unprefixed() {
        let translator = MockTranslator;
        let result = translator.translate("Ciao", "it", "en").await.unwrap();
        assert_eq!(result, "Ciao");
    }
}
