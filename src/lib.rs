pub mod case;
pub mod cli;
pub mod config;
pub mod error;

pub use case::{
    alphanumcase, backslashcase, camelcase, capitalcase, constcase, convert, dotcase, format,
    lowercase, pascalcase, pathcase, sentencecase, snakecase, spinalcase, titlecase, tokenize,
    trimcase, uppercase, Capitalization, Case, Word,
};
pub use case::rule::CasingRule;
pub use config::Config;
pub use error::CaseError;

use serde::Serialize;

/// One input converted into one case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub case: Case,
    pub output: String,
}

impl Conversion {
    pub fn new(input: &str, case: Case) -> Self {
        Self {
            input: input.to_string(),
            case,
            output: case.apply(input),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutput {
    pub case: Case,
    pub output: String,
}

/// One input converted into every supported case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: String,
    pub conversions: Vec<CaseOutput>,
}

impl Report {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            conversions: Case::ALL
                .iter()
                .map(|&case| CaseOutput {
                    case,
                    output: case.apply(input),
                })
                .collect(),
        }
    }
}
