//! Submission lifecycle: validate, send, apply the outcome
//!
//! ```text
//! Idle -> Validating -> (invalid) Idle + field errors
//!                    -> Submitting -> (2xx)     Idle + success message
//!                                  -> (failure) Idle + form error
//! ```
//!
//! The request itself is split out of this module so the event loop can run
//! it on a spawned task: [`begin_submission`] and [`finish_submission`] only
//! touch state.

use crate::client::{CvSubmission, SubmitError};
use crate::state::{AppState, ErrorKey};
use crate::validation::validate;
use tracing::{debug, info, warn};

pub const SUCCESS_MESSAGE: &str = "CV submitted successfully!";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to submit CV. Please try again.";

/// Outcome of one request to the parsing service
pub type SubmitOutcome = Result<serde_json::Value, SubmitError>;

/// Behavior knobs for applying an outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitOptions {
    /// Keep the form contents when the submission fails
    pub preserve_input_on_failure: bool,
}

/// Validate the form and, if clean, mark a submission as started.
///
/// The error map is replaced by the validation result either way. Returns the
/// payload to send, or `None` when validation failed.
pub fn begin_submission(state: &mut AppState) -> Option<CvSubmission> {
    state.errors = validate(&state.form);
    if !state.errors.is_empty() {
        let fields: Vec<&str> = state.errors.iter().map(|(key, _)| key.as_str()).collect();
        debug!(?fields, "Submission blocked by validation");
        return None;
    }

    let cv = state.form.cv.clone()?;

    state.status.in_progress = true;
    state.status.success_message = None;
    info!(timezone = %state.form.timezone, "Starting CV submission");

    Some(CvSubmission {
        name: state.form.name.as_text().to_string(),
        email: state.form.email.as_text().to_string(),
        phone: state.form.phone.as_text().to_string(),
        timezone: state.form.timezone.clone(),
        cv,
    })
}

/// Apply a request outcome, then refill the timezone for the next attempt.
pub fn finish_submission(
    state: &mut AppState,
    outcome: SubmitOutcome,
    timezone: String,
    options: SubmitOptions,
) {
    let keep_input = match outcome {
        Ok(body) => {
            info!(response = %body, "CV submitted");
            state.status.success_message = Some(SUCCESS_MESSAGE.to_string());
            false
        }
        Err(err) => {
            warn!(error = %err, "Failed to submit CV");
            let message = err.server_message().unwrap_or(GENERIC_FAILURE_MESSAGE);
            state.errors.set(ErrorKey::Form, message);
            options.preserve_input_on_failure
        }
    };

    if !keep_input {
        state.form.reset();
    }
    state.status.in_progress = false;
    state.form.timezone = timezone;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CvParserClient, MockCvParserClient};
    use crate::state::{CvFile, ErrorMap, FormSlot};
    use crate::validation::NAME_REQUIRED;
    use std::path::PathBuf;

    fn valid_cv() -> CvFile {
        CvFile {
            path: PathBuf::from("/tmp/valid.pdf"),
            file_name: "valid.pdf".to_string(),
            size_bytes: 128,
        }
    }

    fn filled_state() -> AppState {
        let mut state = AppState::new("Asia/Colombo");
        state.set_form_value(FormSlot::Name, "Ada Lovelace");
        state.set_form_value(FormSlot::Email, "a@b.com");
        state.set_form_value(FormSlot::Phone, "+14155550123");
        state.form.cv = Some(valid_cv());
        state
    }

    fn next_timezone() -> String {
        "Europe/Paris".to_string()
    }

    /// Run a whole submission cycle against `client`.
    /// Returns true if a request was sent and succeeded.
    async fn submit(
        state: &mut AppState,
        client: &dyn CvParserClient,
        timezone: impl FnOnce() -> String,
        options: SubmitOptions,
    ) -> bool {
        let Some(submission) = begin_submission(state) else {
            return false;
        };
        let outcome = client.parse_cv(submission).await;
        let succeeded = outcome.is_ok();
        finish_submission(state, outcome, timezone(), options);
        succeeded
    }

    mod begin {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_form_is_blocked() {
            let mut state = filled_state();
            state.set_form_value(FormSlot::Name, "");

            assert!(begin_submission(&mut state).is_none());

            let expected: ErrorMap = [(ErrorKey::Name, NAME_REQUIRED.to_string())]
                .into_iter()
                .collect();
            assert_eq!(state.errors, expected);
            assert!(!state.status.in_progress);
        }

        #[test]
        fn test_blocked_attempt_keeps_success_message() {
            let mut state = AppState::new("UTC");
            state.status.success_message = Some(SUCCESS_MESSAGE.to_string());
            assert!(begin_submission(&mut state).is_none());
            assert_eq!(
                state.status.success_message.as_deref(),
                Some(SUCCESS_MESSAGE)
            );
        }

        #[test]
        fn test_valid_form_starts_submission() {
            let mut state = filled_state();
            state.status.success_message = Some(SUCCESS_MESSAGE.to_string());
            state.errors.set(ErrorKey::Form, GENERIC_FAILURE_MESSAGE);

            let submission = begin_submission(&mut state).unwrap();

            assert_eq!(
                submission,
                CvSubmission {
                    name: "Ada Lovelace".to_string(),
                    email: "a@b.com".to_string(),
                    phone: "+14155550123".to_string(),
                    timezone: "Asia/Colombo".to_string(),
                    cv: valid_cv(),
                }
            );
            assert!(state.status.in_progress);
            assert!(state.status.success_message.is_none());
            // Validation replaces the whole map, form error included
            assert!(state.errors.is_empty());
        }

        #[test]
        fn test_phone_is_sent_as_typed() {
            let mut state = filled_state();
            state.set_form_value(FormSlot::Phone, "+1 (415) 555-0123");
            let submission = begin_submission(&mut state).unwrap();
            assert_eq!(submission.phone, "+1 (415) 555-0123");
        }
    }

    mod finish {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_success_sets_message_and_resets_form() {
            let mut state = filled_state();
            begin_submission(&mut state).unwrap();

            finish_submission(
                &mut state,
                Ok(serde_json::json!({"ok": true})),
                next_timezone(),
                SubmitOptions::default(),
            );

            assert_eq!(
                state.status.success_message.as_deref(),
                Some(SUCCESS_MESSAGE)
            );
            assert!(!state.status.in_progress);
            assert!(state.errors.is_empty());
            assert_eq!(state.form.name.as_text(), "");
            assert_eq!(state.form.email.as_text(), "");
            assert_eq!(state.form.phone.as_text(), "");
            assert!(state.form.cv.is_none());
            assert_eq!(state.form.timezone, "Europe/Paris");
        }

        #[test]
        fn test_server_error_is_shown_and_input_lost() {
            let mut state = filled_state();
            begin_submission(&mut state).unwrap();

            finish_submission(
                &mut state,
                Err(SubmitError::Rejected {
                    status: 409,
                    message: Some("Duplicate submission".to_string()),
                }),
                next_timezone(),
                SubmitOptions::default(),
            );

            assert_eq!(state.errors.get(ErrorKey::Form), Some("Duplicate submission"));
            assert!(state.status.success_message.is_none());
            assert!(!state.status.in_progress);
            assert!(state.form.cv.is_none());
            assert_eq!(state.form.name.as_text(), "");
            assert_eq!(state.form.timezone, "Europe/Paris");
        }

        #[test]
        fn test_failure_without_server_message_uses_fallback() {
            let mut state = filled_state();
            begin_submission(&mut state).unwrap();

            finish_submission(
                &mut state,
                Err(SubmitError::FileRead {
                    path: PathBuf::from("/tmp/valid.pdf"),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
                }),
                next_timezone(),
                SubmitOptions::default(),
            );

            assert_eq!(state.errors.get(ErrorKey::Form), Some(GENERIC_FAILURE_MESSAGE));
        }

        #[tokio::test]
        async fn test_network_failure_uses_fallback() {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            let network_error = reqwest::Client::builder()
                .no_proxy()
                .build()
                .unwrap()
                .post(format!("http://{addr}/parse_cv"))
                .send()
                .await
                .unwrap_err();

            let mut state = filled_state();
            begin_submission(&mut state).unwrap();

            finish_submission(
                &mut state,
                Err(SubmitError::Http(network_error)),
                next_timezone(),
                SubmitOptions::default(),
            );

            assert_eq!(state.errors.get(ErrorKey::Form), Some(GENERIC_FAILURE_MESSAGE));
            assert!(state.status.success_message.is_none());
            assert!(!state.status.in_progress);
            assert!(state.form.cv.is_none());
        }

        #[test]
        fn test_preserve_option_keeps_input_on_failure() {
            let mut state = filled_state();
            begin_submission(&mut state).unwrap();

            finish_submission(
                &mut state,
                Err(SubmitError::Rejected {
                    status: 502,
                    message: None,
                }),
                next_timezone(),
                SubmitOptions {
                    preserve_input_on_failure: true,
                },
            );

            assert_eq!(state.errors.get(ErrorKey::Form), Some(GENERIC_FAILURE_MESSAGE));
            assert_eq!(state.form.name.as_text(), "Ada Lovelace");
            assert_eq!(state.form.cv, Some(valid_cv()));
            assert_eq!(state.form.timezone, "Europe/Paris");
            assert!(!state.status.in_progress);
        }

        #[test]
        fn test_preserve_option_still_resets_on_success() {
            let mut state = filled_state();
            begin_submission(&mut state).unwrap();

            finish_submission(
                &mut state,
                Ok(serde_json::Value::Null),
                next_timezone(),
                SubmitOptions {
                    preserve_input_on_failure: true,
                },
            );

            assert!(state.form.cv.is_none());
        }
    }

    mod full_cycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_blocked_submission_never_calls_client() {
            let mut client = MockCvParserClient::new();
            client.expect_parse_cv().never();

            let mut state = filled_state();
            state.set_form_value(FormSlot::Name, "");

            let sent = submit(&mut state, &client, next_timezone, SubmitOptions::default()).await;

            assert!(!sent);
            assert_eq!(state.errors.get(ErrorKey::Name), Some(NAME_REQUIRED));
            assert_eq!(state.form.email.as_text(), "a@b.com");
        }

        #[tokio::test]
        async fn test_success_cycle() {
            let mut client = MockCvParserClient::new();
            client
                .expect_parse_cv()
                .withf(|submission| {
                    submission.email == "a@b.com" && submission.timezone == "Asia/Colombo"
                })
                .times(1)
                .returning(|_| Ok(serde_json::json!({"id": "cv-1"})));

            let mut state = filled_state();
            let sent = submit(&mut state, &client, next_timezone, SubmitOptions::default()).await;

            assert!(sent);
            assert_eq!(
                state.status.success_message.as_deref(),
                Some(SUCCESS_MESSAGE)
            );
            assert!(state.errors.is_empty());
            let mut expected_form = crate::state::CvForm::with_timezone("Europe/Paris");
            expected_form.active_field_index = state.form.active_field_index;
            assert_eq!(state.form, expected_form);
        }

        #[tokio::test]
        async fn test_rejected_cycle() {
            let mut client = MockCvParserClient::new();
            client.expect_parse_cv().times(1).returning(|_| {
                Err(SubmitError::Rejected {
                    status: 400,
                    message: Some("Duplicate submission".to_string()),
                })
            });

            let mut state = filled_state();
            let sent = submit(&mut state, &client, next_timezone, SubmitOptions::default()).await;

            assert!(!sent);
            assert_eq!(state.errors.get(ErrorKey::Form), Some("Duplicate submission"));
            assert_eq!(state.errors.len(), 1);
            assert!(state.form.cv.is_none());
        }

        #[test]
        fn test_cycle_on_blocking_runtime() {
            let mut client = MockCvParserClient::new();
            client
                .expect_parse_cv()
                .returning(|_| Ok(serde_json::Value::Null));

            let mut state = filled_state();
            let sent = tokio_test::block_on(submit(
                &mut state,
                &client,
                next_timezone,
                SubmitOptions::default(),
            ));
            assert!(sent);
            assert!(!state.status.in_progress);
        }
    }
}
