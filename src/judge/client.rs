//! HTTP client for the judge service
//!
//! Each call is a single POST with no retry. A failure is returned as a
//! [`JudgeError`] for the classifier to turn into something renderable.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Serialize, de::DeserializeOwned};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{
    config::JudgeConfig,
    constants::{JUDGE_RUN_PATH, JUDGE_TEST_PATH},
    models::{RunOutput, RunRequest, SubmissionRequest, VerdictResult},
};

use super::{
    JudgeApi,
    error::{JudgeError, JudgeResult},
};

/// reqwest-backed judge client
#[derive(Debug, Clone)]
pub struct JudgeClient {
    client: reqwest::Client,
    base_url: String,
}

impl JudgeClient {
    /// Create a client for the configured judge origin
    pub fn new(config: &JudgeConfig) -> JudgeResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| JudgeError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and decode a JSON reply, racing the cancellation token
    async fn post_json<B, R>(&self, path: &str, body: &B, cancel: &CancellationToken) -> JudgeResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let url = self.endpoint(path);

        let exchange = async {
            let response = self
                .client
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .json(body)
                .send()
                .await?;

            let status = response.status();
            let payload = response.bytes().await?;

            if !status.is_success() {
                return Err(JudgeError::from_status(status, &payload));
            }

            serde_json::from_slice::<R>(&payload)
                .map_err(|e| JudgeError::MalformedResponse(e.to_string()))
        };

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(JudgeError::Cancelled),
            result = exchange => result,
        };

        match &result {
            Ok(_) => debug!(url = %url, "Judge request completed"),
            Err(JudgeError::Cancelled) => debug!(url = %url, "Judge request cancelled"),
            Err(e) => warn!(url = %url, error = %e, "Judge request failed"),
        }

        result
    }
}

#[async_trait]
impl JudgeApi for JudgeClient {
    async fn submit_test(
        &self,
        request: &SubmissionRequest,
        cancel: &CancellationToken,
    ) -> JudgeResult<VerdictResult> {
        self.post_json(JUDGE_TEST_PATH, request, cancel).await
    }

    async fn submit_run(
        &self,
        request: &RunRequest,
        cancel: &CancellationToken,
    ) -> JudgeResult<RunOutput> {
        self.post_json(JUDGE_RUN_PATH, request, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::models::VerdictCategory;

    fn create_test_client(mock_server: &MockServer) -> JudgeClient {
        JudgeClient::new(&JudgeConfig {
            base_url: mock_server.uri(),
            timeout_seconds: 0,
        })
        .expect("client builds")
    }

    fn bubble_sort_request() -> SubmissionRequest {
        SubmissionRequest {
            code: "void BubbleSort(vector<int>& arr, int n) {}".to_string(),
            language: "cpp".to_string(),
            algorithm_name: Some("Bubble Sort".to_string()),
        }
    }

    #[tokio::test]
    async fn test_submit_test_returns_judge_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/code/test"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "code": "void BubbleSort(vector<int>& arr, int n) {}",
                "language": "cpp",
                "algorithmName": "Bubble Sort"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "category": "GREEN",
                "evaluation": "Correct",
                "suggestions": "None"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let verdict = client
            .submit_test(&bubble_sort_request(), &CancellationToken::new())
            .await
            .expect("submission failed");

        assert_eq!(verdict.category, VerdictCategory::Green);
        assert_eq!(verdict.evaluation, "Correct");
        assert_eq!(verdict.suggestions.as_deref(), Some("None"));
    }

    #[tokio::test]
    async fn test_server_error_field_becomes_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/code/test"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "Judge overloaded" })),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client
            .submit_test(&bubble_sort_request(), &CancellationToken::new())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            JudgeError::Status {
                status: 500,
                message: "Judge overloaded".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/code/test"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client
            .submit_test(&bubble_sort_request(), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, JudgeError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = JudgeClient::new(&JudgeConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 0,
        })
        .unwrap();

        let err = client
            .submit_test(&bubble_sort_request(), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, JudgeError::Network(_)));
    }

    #[tokio::test]
    async fn test_run_omits_algorithm_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/code/run"))
            .and(body_json(json!({ "code": "print(1)", "language": "python" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output": "1\n" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let output = client
            .submit_run(
                &RunRequest {
                    code: "print(1)".to_string(),
                    language: "python".to_string(),
                },
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(output.output, "1\n");
    }

    #[tokio::test]
    async fn test_cancellation_wins_over_slow_judge() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/code/test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(5))
                    .set_body_json(json!({ "category": "GREEN", "evaluation": "Correct" })),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let err = client
            .submit_test(&bubble_sort_request(), &cancel)
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_configured_timeout_fails_as_network_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/code/test"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&mock_server)
            .await;

        let client = JudgeClient::new(&JudgeConfig {
            base_url: mock_server.uri(),
            timeout_seconds: 1,
        })
        .unwrap();

        let err = client
            .submit_test(&bubble_sort_request(), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, JudgeError::Network(_)));
    }
}
