//! Playground service

use anyhow::anyhow;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    handlers::playground::{
        request::RunCodeRequest,
        response::{RunCodeResponse, TemplateResponse},
    },
    judge::{JudgeApi, classifier},
    models::RunRequest,
    scaffold,
    utils::{check_source_code, parse_playground_language},
};

/// Free-run playground
pub struct PlaygroundService;

impl PlaygroundService {
    /// Starter text for a playground language
    pub fn template(language: Option<&str>) -> AppResult<TemplateResponse> {
        let language = parse_playground_language(language)?;

        Ok(TemplateResponse {
            language,
            code: scaffold::playground_placeholder(language),
        })
    }

    /// Run code on the judge. Failures come back as `Error: ...` output.
    pub async fn run(judge: &dyn JudgeApi, payload: RunCodeRequest) -> AppResult<RunCodeResponse> {
        let language = parse_playground_language(Some(&payload.language))?;
        check_source_code(&payload.code)?;

        info!(language = %language, code_bytes = payload.code.len(), "Running playground code");

        let request = RunRequest {
            code: payload.code,
            language: language.id().to_string(),
        };

        // Dropped together with the HTTP request, so nothing else cancels it
        let cancel = CancellationToken::new();
        let outcome = judge.submit_run(&request, &cancel).await;

        classifier::classify_run(outcome)
            .map(|run| RunCodeResponse { output: run.output })
            .ok_or_else(|| AppError::Internal(anyhow!("playground run was cancelled")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        judge::{JudgeError, MockJudgeApi},
        models::{Language, RunOutput},
    };

    fn run_request(language: &str) -> RunCodeRequest {
        RunCodeRequest {
            code: "print('hi')".to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn test_template_defaults_to_python() {
        let template = PlaygroundService::template(None).unwrap();
        assert_eq!(template.language, Language::Python);
        assert_eq!(template.code, "# Write your code here\n");

        let template = PlaygroundService::template(Some("java")).unwrap();
        assert_eq!(template.code, "// Write your code here\n");
    }

    #[tokio::test]
    async fn test_run_returns_judge_output() {
        let mut judge = MockJudgeApi::new();
        judge
            .expect_submit_run()
            .withf(|request, _| request.language == "python" && request.code == "print('hi')")
            .times(1)
            .returning(|_, _| {
                Ok(RunOutput {
                    output: "hi\n".to_string(),
                })
            });

        let response = PlaygroundService::run(&judge, run_request("python")).await.unwrap();
        assert_eq!(response.output, "hi\n");
    }

    #[tokio::test]
    async fn test_run_failure_is_rendered_as_output() {
        let mut judge = MockJudgeApi::new();
        judge
            .expect_submit_run()
            .times(1)
            .returning(|_, _| Err(JudgeError::Network("Network Error".to_string())));

        let response = PlaygroundService::run(&judge, run_request("cpp")).await.unwrap();
        assert_eq!(response.output, "Error: Network Error");
    }

    #[tokio::test]
    async fn test_run_rejects_javascript_without_calling_judge() {
        let mut judge = MockJudgeApi::new();
        judge.expect_submit_run().never();

        let err = PlaygroundService::run(&judge, run_request("javascript")).await.unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLanguage(_)));
    }
}
