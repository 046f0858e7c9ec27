//! Judge service integration
//!
//! The judge executes and grades code; this module only speaks its
//! request/response contract and classifies the outcome.

pub mod classifier;
pub mod client;
pub mod error;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::models::{RunOutput, RunRequest, SubmissionRequest, VerdictResult};

pub use classifier::RenderedVerdict;
pub use client::JudgeClient;
pub use error::{JudgeError, JudgeResult};

/// Remote judge operations. Every call issues exactly one request and
/// resolves to [`JudgeError::Cancelled`] once `cancel` fires.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JudgeApi: Send + Sync {
    /// Evaluate an algorithm-practice submission
    async fn submit_test(
        &self,
        request: &SubmissionRequest,
        cancel: &CancellationToken,
    ) -> JudgeResult<VerdictResult>;

    /// Execute free-form code
    async fn submit_run(
        &self,
        request: &RunRequest,
        cancel: &CancellationToken,
    ) -> JudgeResult<RunOutput>;
}
