//! Request payload and failure types for the parsing service

use crate::state::CvFile;
use std::path::PathBuf;
use thiserror::Error;

/// Snapshot of a validated form, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub timezone: String,
    pub cv: CvFile,
}

/// Why a submission did not succeed
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Submission rejected (status {status})")]
    Rejected {
        status: u16,
        /// `error` field of the response body, if it had one
        message: Option<String>,
    },

    #[error("Failed to read CV file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SubmitError {
    /// Message supplied by the server, if any and non-empty
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
