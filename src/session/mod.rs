//! Editor sessions
//!
//! An [`EditorSession`] is the state behind one open practice view. It is a
//! small state machine:
//!
//! - `Idle`: buffer editable, nothing in flight
//! - `Submitting`: one submission in flight; further submits are ignored
//!
//! Every change of algorithm or language bumps a generation counter. A
//! submission captures the generation when issued, and its result is only
//! applied if the session is still on that generation when it completes.

pub mod store;

use serde::Serialize;

use crate::{
    models::{AlgorithmEntry, Language, SubmissionRequest, VerdictResult},
    scaffold,
};

pub use store::{SessionSnapshot, SessionStore, SubmitStart};

/// Submission state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Submitting,
}

/// Captured at submit time; carries the code snapshot sent to the judge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub generation: u64,
    pub request: SubmissionRequest,
}

/// What happened to a completed submission's result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Stored as the session's last result
    Applied,
    /// Algorithm or language changed while in flight; result dropped
    Stale,
    /// Session no longer exists; result dropped
    Detached,
}

/// Ephemeral editor state for one algorithm view
#[derive(Debug, Clone)]
pub struct EditorSession {
    algorithm: &'static AlgorithmEntry,
    language: Language,
    buffer: String,
    is_submitting: bool,
    last_result: Option<VerdictResult>,
    generation: u64,
}

impl EditorSession {
    /// Open a session with the scaffold for `language` in the buffer
    pub fn new(algorithm: &'static AlgorithmEntry, language: Language) -> Self {
        Self {
            algorithm,
            language,
            buffer: scaffold::render(algorithm.name, language),
            is_submitting: false,
            last_result: None,
            generation: 0,
        }
    }

    pub fn algorithm(&self) -> &'static AlgorithmEntry {
        self.algorithm
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn last_result(&self) -> Option<&VerdictResult> {
        self.last_result.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> SessionState {
        if self.is_submitting {
            SessionState::Submitting
        } else {
            SessionState::Idle
        }
    }

    /// Switch language. Discards the buffer in favor of the new scaffold;
    /// `last_result` is kept.
    pub fn select_language(&mut self, language: Language) {
        self.language = language;
        self.reset_buffer();
    }

    /// Switch algorithm. Discards the buffer in favor of the new scaffold.
    pub fn select_algorithm(&mut self, algorithm: &'static AlgorithmEntry) {
        self.algorithm = algorithm;
        self.reset_buffer();
    }

    /// Replace the buffer. Accepted while submitting; the in-flight request
    /// already holds its own copy of the code.
    pub fn edit_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Start a submission. Returns `None` if one is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmissionTicket> {
        if self.is_submitting {
            return None;
        }

        self.is_submitting = true;
        self.last_result = None;

        Some(SubmissionTicket {
            generation: self.generation,
            request: SubmissionRequest {
                code: self.buffer.clone(),
                language: self.language.id().to_string(),
                algorithm_name: Some(self.algorithm.name.to_string()),
            },
        })
    }

    /// Finish the in-flight submission issued at `generation`.
    ///
    /// The in-flight slot is always released; the result is stored only when
    /// the generation still matches.
    pub fn complete(&mut self, generation: u64, result: VerdictResult) -> CompletionOutcome {
        self.is_submitting = false;

        if generation != self.generation {
            return CompletionOutcome::Stale;
        }

        self.last_result = Some(result);
        CompletionOutcome::Applied
    }

    /// Release the in-flight slot without a result
    pub fn abandon(&mut self) {
        self.is_submitting = false;
    }

    fn reset_buffer(&mut self) {
        self.buffer = scaffold::render(self.algorithm.name, self.language);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::catalog, models::VerdictCategory};

    fn bubble_sort() -> &'static AlgorithmEntry {
        catalog().resolve("bubble-sort").unwrap()
    }

    fn green() -> VerdictResult {
        VerdictResult {
            category: VerdictCategory::Green,
            evaluation: "Correct".to_string(),
            suggestions: Some("None".to_string()),
        }
    }

    #[test]
    fn test_new_session_holds_scaffold() {
        let session = EditorSession::new(bubble_sort(), Language::Cpp);
        assert_eq!(session.buffer(), scaffold::render("Bubble Sort", Language::Cpp));
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_select_language_discards_edits_and_keeps_result() {
        let mut session = EditorSession::new(bubble_sort(), Language::Cpp);
        let ticket = session.begin_submit().unwrap();
        session.complete(ticket.generation, green());

        session.edit_buffer("my half-written solution");
        session.select_language(Language::Python);

        assert_eq!(session.buffer(), scaffold::render("Bubble Sort", Language::Python));
        assert_ne!(session.buffer(), "my half-written solution");
        assert_eq!(session.last_result(), Some(&green()));
    }

    #[test]
    fn test_select_algorithm_resets_buffer() {
        let mut session = EditorSession::new(bubble_sort(), Language::Java);
        session.edit_buffer("class X {}");
        session.select_algorithm(catalog().resolve("heap-sort").unwrap());

        assert_eq!(session.algorithm().name, "Heap Sort");
        assert_eq!(session.buffer(), scaffold::render("Heap Sort", Language::Java));
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut session = EditorSession::new(bubble_sort(), Language::Cpp);
        assert!(session.begin_submit().is_some());
        assert!(session.begin_submit().is_none());
        assert_eq!(session.state(), SessionState::Submitting);
    }

    #[test]
    fn test_submit_clears_previous_result() {
        let mut session = EditorSession::new(bubble_sort(), Language::Cpp);
        let ticket = session.begin_submit().unwrap();
        session.complete(ticket.generation, green());

        session.begin_submit().unwrap();
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_ticket_snapshots_code_at_submit_time() {
        let mut session = EditorSession::new(bubble_sort(), Language::Cpp);
        session.edit_buffer("void BubbleSort(vector<int>& arr, int n) { sort(arr.begin(), arr.end()); }");
        let ticket = session.begin_submit().unwrap();

        session.edit_buffer("edited while waiting");

        assert_eq!(
            ticket.request.code,
            "void BubbleSort(vector<int>& arr, int n) { sort(arr.begin(), arr.end()); }"
        );
        assert_eq!(ticket.request.language, "cpp");
        assert_eq!(ticket.request.algorithm_name.as_deref(), Some("Bubble Sort"));
        assert_eq!(session.buffer(), "edited while waiting");
        assert_eq!(session.complete(ticket.generation, green()), CompletionOutcome::Applied);
    }

    #[test]
    fn test_result_for_previous_language_is_dropped() {
        let mut session = EditorSession::new(bubble_sort(), Language::Cpp);
        let ticket = session.begin_submit().unwrap();

        session.select_language(Language::Python);

        assert_eq!(session.complete(ticket.generation, green()), CompletionOutcome::Stale);
        assert!(session.last_result().is_none());
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.begin_submit().is_some());
    }

    #[test]
    fn test_abandon_releases_slot() {
        let mut session = EditorSession::new(bubble_sort(), Language::Cpp);
        session.begin_submit().unwrap();
        session.abandon();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.last_result().is_none());
    }
}
