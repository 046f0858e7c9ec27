//! Editor session service

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    handlers::sessions::response::{SessionResponse, SubmitResponse},
    judge::{JudgeApi, classifier},
    session::{CompletionOutcome, EditorSession, SessionStore, SubmissionTicket, SubmitStart},
    utils::{check_source_code, parse_practice_language},
};

use super::CatalogService;

/// Session lifecycle and submission dispatch
pub struct SessionService;

impl SessionService {
    /// Open a session for an algorithm, seeded with its scaffold
    pub async fn open(
        catalog: &'static Catalog,
        sessions: &SessionStore,
        slug: &str,
        language: Option<&str>,
    ) -> AppResult<SessionResponse> {
        let algorithm = CatalogService::resolve(catalog, slug)?;
        let language = parse_practice_language(language)?;

        let id = sessions.open(EditorSession::new(algorithm, language)).await?;
        info!(session_id = %id, algorithm = algorithm.name, language = %language, "Session opened");

        Self::get(sessions, id).await
    }

    /// Current state of a session
    pub async fn get(sessions: &SessionStore, id: Uuid) -> AppResult<SessionResponse> {
        sessions
            .snapshot(id)
            .await
            .map(SessionResponse::from)
            .ok_or(AppError::SessionNotFound(id))
    }

    /// Tear down a session, cancelling any in-flight submission
    pub async fn close(sessions: &SessionStore, id: Uuid) -> AppResult<()> {
        if !sessions.close(id).await {
            return Err(AppError::SessionNotFound(id));
        }
        info!(session_id = %id, "Session closed");
        Ok(())
    }

    /// Switch language; the buffer is replaced, never translated
    pub async fn select_language(
        sessions: &SessionStore,
        id: Uuid,
        language: &str,
    ) -> AppResult<SessionResponse> {
        let language = parse_practice_language(Some(language))?;

        sessions
            .update(id, |session| session.select_language(language))
            .await
            .ok_or(AppError::SessionNotFound(id))?;
        debug!(session_id = %id, language = %language, "Language selected");

        Self::get(sessions, id).await
    }

    /// Switch algorithm; the buffer is replaced with the new scaffold
    pub async fn select_algorithm(
        catalog: &'static Catalog,
        sessions: &SessionStore,
        id: Uuid,
        slug: &str,
    ) -> AppResult<SessionResponse> {
        let algorithm = CatalogService::resolve(catalog, slug)?;

        sessions
            .update(id, |session| session.select_algorithm(algorithm))
            .await
            .ok_or(AppError::SessionNotFound(id))?;
        debug!(session_id = %id, algorithm = algorithm.name, "Algorithm selected");

        Self::get(sessions, id).await
    }

    /// Replace the code buffer
    pub async fn edit_buffer(
        sessions: &SessionStore,
        id: Uuid,
        code: String,
    ) -> AppResult<SessionResponse> {
        check_source_code(&code)?;

        sessions
            .update(id, |session| session.edit_buffer(code))
            .await
            .ok_or(AppError::SessionNotFound(id))?;

        Self::get(sessions, id).await
    }

    /// Submit the buffer. A submit while one is in flight is a no-op.
    pub async fn submit(
        sessions: &SessionStore,
        judge: Arc<dyn JudgeApi>,
        id: Uuid,
    ) -> AppResult<SubmitResponse> {
        let start = sessions
            .begin_submit(id)
            .await
            .ok_or(AppError::SessionNotFound(id))?;

        match start {
            SubmitStart::AlreadyInFlight => {
                let generation = sessions
                    .snapshot(id)
                    .await
                    .map(|s| s.generation)
                    .unwrap_or_default();
                debug!(session_id = %id, "Submission already in flight, ignoring submit");
                Ok(SubmitResponse::ignored(id, generation))
            }
            SubmitStart::Dispatched { ticket, cancel } => {
                let generation = ticket.generation;
                Self::spawn_submission(sessions.clone(), judge, id, ticket, cancel);
                Ok(SubmitResponse::dispatched(id, generation))
            }
        }
    }

    /// Run one judge round trip in the background and hand the classified
    /// verdict back to the session that issued it.
    pub(crate) fn spawn_submission(
        sessions: SessionStore,
        judge: Arc<dyn JudgeApi>,
        id: Uuid,
        ticket: SubmissionTicket,
        cancel: CancellationToken,
    ) -> JoinHandle<CompletionOutcome> {
        info!(
            session_id = %id,
            generation = ticket.generation,
            language = %ticket.request.language,
            algorithm = ticket.request.algorithm_name.as_deref().unwrap_or_default(),
            code_bytes = ticket.request.code.len(),
            "Dispatching submission to judge"
        );

        tokio::spawn(async move {
            let outcome = judge.submit_test(&ticket.request, &cancel).await;

            match classifier::classify_verdict(outcome) {
                Some(verdict) => {
                    let category = verdict.category;
                    let completion = sessions.complete(id, ticket.generation, verdict).await;
                    if completion == CompletionOutcome::Applied {
                        info!(session_id = %id, category = %category, "Verdict applied");
                    }
                    completion
                }
                None => {
                    sessions.abandon(id).await;
                    CompletionOutcome::Detached
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::{
        catalog::catalog,
        config::JudgeConfig,
        handlers::sessions::response::SubmitStatus,
        judge::{JudgeClient, JudgeError, MockJudgeApi},
        models::{Language, VerdictCategory, VerdictResult},
        session::SessionState,
    };

    async fn open_bubble_sort(sessions: &SessionStore) -> Uuid {
        SessionService::open(catalog(), sessions, "bubble-sort", Some("cpp"))
            .await
            .unwrap()
            .id
    }

    fn judge_for(mock_server: &MockServer) -> Arc<dyn JudgeApi> {
        Arc::new(
            JudgeClient::new(&JudgeConfig {
                base_url: mock_server.uri(),
                timeout_seconds: 0,
            })
            .unwrap(),
        )
    }

    async fn dispatch(sessions: &SessionStore, judge: Arc<dyn JudgeApi>, id: Uuid) -> JoinHandle<CompletionOutcome> {
        let Some(SubmitStart::Dispatched { ticket, cancel }) = sessions.begin_submit(id).await else {
            panic!("expected a dispatched submission");
        };
        SessionService::spawn_submission(sessions.clone(), judge, id, ticket, cancel)
    }

    #[tokio::test]
    async fn test_open_unknown_slug_signals_not_found() {
        let sessions = SessionStore::new(4);
        let err = SessionService::open(catalog(), &sessions, "nonexistent-sort", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlgorithmNotFound(_)));
        assert!(sessions.is_empty().await);
    }

    #[tokio::test]
    async fn test_open_defaults_to_cpp() {
        let sessions = SessionStore::new(4);
        let session = SessionService::open(catalog(), &sessions, "quick-sort", None)
            .await
            .unwrap();
        assert_eq!(session.language, Language::Cpp);
        assert!(session.code.contains("void QuickSort(vector<int>& arr, int n)"));
    }

    #[tokio::test]
    async fn test_green_verdict_is_applied() {
        let sessions = SessionStore::new(4);
        let id = open_bubble_sort(&sessions).await;

        let mut judge = MockJudgeApi::new();
        judge
            .expect_submit_test()
            .withf(|request, _| request.algorithm_name.as_deref() == Some("Bubble Sort"))
            .times(1)
            .returning(|_, _| {
                Ok(VerdictResult {
                    category: VerdictCategory::Green,
                    evaluation: "Correct".to_string(),
                    suggestions: Some("None".to_string()),
                })
            });

        let outcome = dispatch(&sessions, Arc::new(judge), id).await.await.unwrap();
        assert_eq!(outcome, CompletionOutcome::Applied);

        let session = SessionService::get(&sessions, id).await.unwrap();
        let verdict = session.last_result.unwrap();
        assert_eq!(verdict.category, VerdictCategory::Green);
        assert_eq!(verdict.evaluation, "Correct");
        assert_eq!(verdict.suggestions.as_deref(), Some("None"));
        assert_eq!(session.state, SessionState::Idle);
    }

    #[tokio::test]
    async fn test_transport_failure_yields_red_verdict() {
        let sessions = SessionStore::new(4);
        let id = open_bubble_sort(&sessions).await;

        let mut judge = MockJudgeApi::new();
        judge
            .expect_submit_test()
            .times(1)
            .returning(|_, _| Err(JudgeError::Network("Network Error".to_string())));

        dispatch(&sessions, Arc::new(judge), id).await.await.unwrap();

        let snapshot = sessions.snapshot(id).await.unwrap();
        assert_eq!(
            snapshot.last_result,
            Some(VerdictResult {
                category: VerdictCategory::Red,
                evaluation: "Error: Network Error".to_string(),
                suggestions: None,
            })
        );
    }

    #[tokio::test]
    async fn test_double_submit_issues_one_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/code/test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(300))
                    .set_body_json(json!({
                        "category": "GREEN",
                        "evaluation": "Correct",
                        "suggestions": "None"
                    })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let sessions = SessionStore::new(4);
        let id = open_bubble_sort(&sessions).await;
        let judge = judge_for(&mock_server);

        let first = SessionService::submit(&sessions, judge.clone(), id).await.unwrap();
        let second = SessionService::submit(&sessions, judge, id).await.unwrap();
        assert_eq!(first.status, SubmitStatus::Submitting);
        assert_eq!(second.status, SubmitStatus::Ignored);

        for _ in 0..50 {
            if sessions.snapshot(id).await.unwrap().state == SessionState::Idle {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        let snapshot = sessions.snapshot(id).await.unwrap();
        assert_eq!(snapshot.last_result.unwrap().category, VerdictCategory::Green);
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_language_switch_drops_in_flight_result() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/code/test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(200))
                    .set_body_json(json!({ "category": "RED", "evaluation": "Wrong" })),
            )
            .mount(&mock_server)
            .await;

        let sessions = SessionStore::new(4);
        let id = open_bubble_sort(&sessions).await;
        let handle = dispatch(&sessions, judge_for(&mock_server), id).await;

        let switched = SessionService::select_language(&sessions, id, "java").await.unwrap();
        assert!(switched.code.starts_with("public class BubbleSort {"));

        assert_eq!(handle.await.unwrap(), CompletionOutcome::Stale);
        let snapshot = sessions.snapshot(id).await.unwrap();
        assert!(snapshot.last_result.is_none());
        assert_eq!(snapshot.state, SessionState::Idle);
    }

    #[tokio::test]
    async fn test_closing_session_cancels_submission() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/code/test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(10))
                    .set_body_json(json!({ "category": "GREEN", "evaluation": "Correct" })),
            )
            .mount(&mock_server)
            .await;

        let sessions = SessionStore::new(4);
        let id = open_bubble_sort(&sessions).await;
        let handle = dispatch(&sessions, judge_for(&mock_server), id).await;

        SessionService::close(&sessions, id).await.unwrap();

        let outcome = tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("cancelled submission should finish promptly")
            .unwrap();
        assert_eq!(outcome, CompletionOutcome::Detached);
        assert!(matches!(
            SessionService::get(&sessions, id).await,
            Err(AppError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unsupported_language_is_rejected() {
        let sessions = SessionStore::new(4);
        let id = open_bubble_sort(&sessions).await;

        let err = SessionService::select_language(&sessions, id, "haskell")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLanguage(_)));

        let session = SessionService::get(&sessions, id).await.unwrap();
        assert_eq!(session.language, Language::Cpp);
    }
}
