use crate::translate::interface::TranslationResponse;

/// Input length cap enforced by the input layer; longer changes never
/// reach the gateway.
pub const MAX_INPUT_CHARS: usize = 5000;

/// What the result pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Placeholder,
    Loading,
    Result,
    Error,
}

/// What the input layer must do after a text change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Schedule a translation once input has been quiet.
    Schedule,
    /// Clear the result pane immediately; no request is issued.
    Clear,
    /// Change exceeds the input cap; ignore it entirely.
    Reject,
}

/// Outcome of a swap attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Source is "auto"; the swap is disabled.
    Ignored,
    /// Languages swapped; no translation was showing.
    Swapped,
    /// Languages swapped and the previous translation became the new
    /// source text, which should be re-translated.
    Retranslate,
}

/// Transient per-connection UI state.
///
/// Rebuilt from scratch for every session and mutated only through the
/// transition methods below. Every dispatched request carries a
/// sequence number; responses for anything but the latest sequence are
/// discarded, so a slow superseded request can never overwrite a newer
/// result.
#[derive(Debug)]
pub struct SessionState {
    source_text: String,
    source_language: String,
    target_language: String,
    detected_language: Option<String>,
    translated_text: Option<String>,
    error: Option<String>,
    view: View,
    latest_seq: u64,
}

impl SessionState {
    pub fn new(source_language: &str, target_language: &str) -> Self {
        Self {
            source_text: String::new(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            detected_language: None,
            translated_text: None,
            error: None,
            view: View::Placeholder,
            latest_seq: 0,
        }
    }

    /// Record a text change and decide what the input layer does next.
    pub fn text_changed(&mut self, text: &str) -> InputAction {
        if text.chars().count() > MAX_INPUT_CHARS {
            return InputAction::Reject;
        }

        self.source_text = text.to_string();
        if self.source_text.is_empty() {
            self.clear_result();
            return InputAction::Clear;
        }

        InputAction::Schedule
    }

    /// Allocate the sequence number for a new request. Any request
    /// dispatched earlier becomes stale immediately (last write wins).
    pub fn schedule_request(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    /// A scheduled request actually went out. Shows the loading state
    /// unless the request was already superseded.
    pub fn request_dispatched(&mut self, seq: u64) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.view = View::Loading;
        true
    }

    /// Apply a finished translation. Returns false when the response
    /// belongs to a superseded request and was discarded.
    pub fn translation_resolved(&mut self, seq: u64, response: TranslationResponse) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.translated_text = Some(response.translated_text);
        self.detected_language = response.detected_language;
        self.error = None;
        self.view = View::Result;
        true
    }

    /// Surface a failed translation inline. Stale failures are dropped
    /// the same way stale results are.
    pub fn translation_failed(&mut self, seq: u64, message: &str) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.error = Some(message.to_string());
        self.translated_text = None;
        self.view = View::Error;
        true
    }

    pub fn set_languages(&mut self, source: &str, target: &str) {
        self.source_language = source.to_string();
        self.target_language = target.to_string();
    }

    /// Swap source and target. Disabled while the source is "auto".
    /// When a translation is showing, it becomes the new source text.
    pub fn swap_languages(&mut self) -> SwapOutcome {
        if self.source_language == "auto" {
            return SwapOutcome::Ignored;
        }
        std::mem::swap(&mut self.source_language, &mut self.target_language);

        if self.view == View::Result {
            if let Some(translated) = self.translated_text.take() {
                self.source_text = translated;
            }
            self.clear_result();
            return SwapOutcome::Retranslate;
        }
        SwapOutcome::Swapped
    }

    fn clear_result(&mut self) {
        self.translated_text = None;
        self.detected_language = None;
        self.error = None;
        self.view = View::Placeholder;
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn detected_language(&self) -> Option<&str> {
        self.detected_language.as_deref()
    }

    pub fn translated_text(&self) -> Option<&str> {
        self.translated_text.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn char_count(&self) -> usize {
        self.source_text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str, detected: Option<&str>) -> TranslationResponse {
        TranslationResponse {
            translated_text: text.to_string(),
            detected_language: detected.map(|l| l.to_string()),
        }
    }

    #[test]
    fn non_empty_text_schedules_a_request() {
        let mut session = SessionState::new("auto", "es");
        assert_eq!(session.text_changed("Hello"), InputAction::Schedule);
        assert_eq!(session.char_count(), 5);
    }

    #[test]
    fn empty_text_clears_without_a_request() {
        let mut session = SessionState::new("auto", "es");
        session.text_changed("Hello");
        let seq = session.schedule_request();
        session.request_dispatched(seq);
        session.translation_resolved(seq, result("Hola", Some("en")));

        assert_eq!(session.text_changed(""), InputAction::Clear);
        assert_eq!(session.view(), View::Placeholder);
        assert!(session.translated_text().is_none());
        assert!(session.detected_language().is_none());
    }

    #[test]
    fn oversized_text_is_rejected_and_state_untouched() {
        let mut session = SessionState::new("en", "es");
        session.text_changed("short");

        let oversized = "a".repeat(MAX_INPUT_CHARS + 1);
        assert_eq!(session.text_changed(&oversized), InputAction::Reject);
        assert_eq!(session.source_text(), "short");
    }

    #[test]
    fn text_at_the_cap_is_accepted() {
        let mut session = SessionState::new("en", "es");
        let at_cap = "a".repeat(MAX_INPUT_CHARS);
        assert_eq!(session.text_changed(&at_cap), InputAction::Schedule);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut session = SessionState::new("auto", "es");
        session.text_changed("Hello");
        let first = session.schedule_request();
        session.text_changed("Hello world");
        let second = session.schedule_request();
        session.request_dispatched(second);

        // The slow first response arrives after the second was dispatched.
        assert!(!session.translation_resolved(first, result("stale", Some("en"))));
        assert_eq!(session.view(), View::Loading);

        assert!(session.translation_resolved(second, result("fresh", Some("en"))));
        assert_eq!(session.translated_text(), Some("fresh"));
        assert_eq!(session.view(), View::Result);
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut session = SessionState::new("en", "es");
        session.text_changed("Hello");
        let first = session.schedule_request();
        let second = session.schedule_request();

        assert!(!session.translation_failed(first, "Translation error occurred"));
        assert!(session.translation_failed(second, "Translation error occurred"));
        assert_eq!(session.view(), View::Error);
        assert_eq!(session.error(), Some("Translation error occurred"));
    }

    #[test]
    fn superseded_dispatch_does_not_show_loading() {
        let mut session = SessionState::new("en", "es");
        session.text_changed("Hello");
        let first = session.schedule_request();
        let _second = session.schedule_request();

        assert!(!session.request_dispatched(first));
        assert_eq!(session.view(), View::Placeholder);
    }

    #[test]
    fn swap_is_disabled_for_auto_source() {
        let mut session = SessionState::new("auto", "es");
        assert_eq!(session.swap_languages(), SwapOutcome::Ignored);
        assert_eq!(session.source_language(), "auto");
        assert_eq!(session.target_language(), "es");
    }

    #[test]
    fn swap_without_a_result_only_exchanges_the_pair() {
        let mut session = SessionState::new("en", "es");
        session.text_changed("Hello");

        assert_eq!(session.swap_languages(), SwapOutcome::Swapped);
        assert_eq!(session.source_language(), "es");
        assert_eq!(session.target_language(), "en");
        assert_eq!(session.source_text(), "Hello");
    }

    #[test]
    fn swap_moves_the_translation_into_the_source() {
        let mut session = SessionState::new("en", "es");
        session.text_changed("Hello");
        let seq = session.schedule_request();
        session.request_dispatched(seq);
        session.translation_resolved(seq, result("Traducción al español: Hello", None));

        assert_eq!(session.swap_languages(), SwapOutcome::Retranslate);
        assert_eq!(session.source_language(), "es");
        assert_eq!(session.target_language(), "en");
        assert_eq!(session.source_text(), "Traducción al español: Hello");
        assert_eq!(session.view(), View::Placeholder);
    }

    #[test]
    fn failure_replaces_a_previous_result() {
        let mut session = SessionState::new("en", "es");
        session.text_changed("Hello");
        let first = session.schedule_request();
        session.translation_resolved(first, result("Hola", None));

        session.text_changed("Hello again");
        let second = session.schedule_request();
        assert!(session.translation_failed(second, "Translation error occurred"));
        assert!(session.translated_text().is_none());
        assert_eq!(session.view(), View::Error);
    }
}
