use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("unknown case `{0}` (try --list for the supported names)")]
    UnknownCase(String),

    #[error("no case given and no default_case configured")]
    MissingCase,

    /// Input that is not text. Raised at the boundary, before any conversion.
    #[error("input is not valid UTF-8 text")]
    InvalidInput(#[from] FromUtf8Error),
}
