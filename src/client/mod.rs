//! Client module for the remote CV parsing service

mod http;
mod submission;
mod traits;

pub use http::{HttpCvParserClient, DEFAULT_ENDPOINT};
pub use submission::{CvSubmission, SubmitError};
pub use traits::CvParserClient;

#[cfg(test)]
pub use traits::MockCvParserClient;
