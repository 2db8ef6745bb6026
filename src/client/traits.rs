//! Trait abstraction for the parsing service client to enable mocking in tests

use super::submission::{CvSubmission, SubmitError};
use async_trait::async_trait;

/// Sends a CV submission to the parsing service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CvParserClient: Send + Sync {
    /// Post the submission; a 2xx response yields its body
    async fn parse_cv(&self, submission: CvSubmission) -> Result<serde_json::Value, SubmitError>;
}
