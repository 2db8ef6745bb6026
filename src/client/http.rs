//! HTTP client for the remote CV parsing service
//!
//! Sends the candidate's details and CV as `multipart/form-data` to
//! `<endpoint>/parse_cv`.

use super::submission::{CvSubmission, SubmitError};
use super::traits::CvParserClient;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Default parsing service address
pub const DEFAULT_ENDPOINT: &str = "https://chamika31.me:5443";

const PARSE_CV_PATH: &str = "/parse_cv";

/// Multipart key the file is sent under
const CV_FIELD_KEY: &str = "pdf";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// reqwest-backed parsing service client. No request timeout is set.
#[derive(Debug, Clone)]
pub struct HttpCvParserClient {
    client: Client,
    endpoint: String,
}

impl HttpCvParserClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn parse_cv_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), PARSE_CV_PATH)
    }

    /// Build the multipart body, reading the CV from disk
    async fn build_form(submission: &CvSubmission) -> Result<Form, SubmitError> {
        let bytes =
            tokio::fs::read(&submission.cv.path)
                .await
                .map_err(|source| SubmitError::FileRead {
                    path: submission.cv.path.clone(),
                    source,
                })?;

        let file_part = Part::bytes(bytes)
            .file_name(submission.cv.file_name.clone())
            .mime_str(submission.cv.mime_type())?;

        Ok(Form::new()
            .text("name", submission.name.clone())
            .text("email", submission.email.clone())
            .text("phone", submission.phone.clone())
            .text("timezone", submission.timezone.clone())
            .part(CV_FIELD_KEY, file_part))
    }
}

#[async_trait]
impl CvParserClient for HttpCvParserClient {
    async fn parse_cv(&self, submission: CvSubmission) -> Result<serde_json::Value, SubmitError> {
        let url = self.parse_cv_url();
        let form = Self::build_form(&submission).await?;

        info!(%url, file = %submission.cv.file_name, "Submitting CV");
        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            debug!(status = status.as_u16(), %body, "Parse service accepted CV");
            return Ok(parse_body(&body));
        }

        let message = extract_error_message(&body);
        warn!(status = status.as_u16(), ?message, "Parse service rejected CV");
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// JSON body if it parses, otherwise the raw text
fn parse_body(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}

/// The string `error` field of a JSON error body
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
}
