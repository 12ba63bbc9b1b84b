pub mod direct;
pub mod rule;
pub mod tokenizer;

use crate::error::CaseError;
use rule::CasingRule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use direct::{alphanumcase, capitalcase, lowercase, trimcase, uppercase};
pub use rule::{format, Capitalization};
pub use tokenizer::{tokenize, Word};

fn convert_words(text: &str, rule: CasingRule) -> String {
    format(&tokenize(text), rule)
}

pub fn camelcase(text: &str) -> String {
    convert_words(text, rule::CAMEL)
}

pub fn pascalcase(text: &str) -> String {
    convert_words(text, rule::PASCAL)
}

pub fn snakecase(text: &str) -> String {
    convert_words(text, rule::SNAKE)
}

pub fn constcase(text: &str) -> String {
    convert_words(text, rule::CONST)
}

pub fn spinalcase(text: &str) -> String {
    convert_words(text, rule::SPINAL)
}

pub fn pathcase(text: &str) -> String {
    convert_words(text, rule::PATH)
}

pub fn dotcase(text: &str) -> String {
    convert_words(text, rule::DOT)
}

pub fn backslashcase(text: &str) -> String {
    convert_words(text, rule::BACKSLASH)
}

pub fn titlecase(text: &str) -> String {
    convert_words(text, rule::TITLE)
}

pub fn sentencecase(text: &str) -> String {
    convert_words(text, rule::SENTENCE)
}

/// Every supported conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Case {
    Camel,
    Capital,
    Const,
    Lower,
    Pascal,
    Path,
    Backslash,
    Sentence,
    Snake,
    Spinal,
    Dot,
    Title,
    Trim,
    Upper,
    Alphanum,
}

impl Case {
    pub const ALL: [Case; 15] = [
        Case::Camel,
        Case::Capital,
        Case::Const,
        Case::Lower,
        Case::Pascal,
        Case::Path,
        Case::Backslash,
        Case::Sentence,
        Case::Snake,
        Case::Spinal,
        Case::Dot,
        Case::Title,
        Case::Trim,
        Case::Upper,
        Case::Alphanum,
    ];

    /// Name of the conversion function, e.g. `snakecase`
    pub fn name(&self) -> &'static str {
        match self {
            Case::Camel => "camelcase",
            Case::Capital => "capitalcase",
            Case::Const => "constcase",
            Case::Lower => "lowercase",
            Case::Pascal => "pascalcase",
            Case::Path => "pathcase",
            Case::Backslash => "backslashcase",
            Case::Sentence => "sentencecase",
            Case::Snake => "snakecase",
            Case::Spinal => "spinalcase",
            Case::Dot => "dotcase",
            Case::Title => "titlecase",
            Case::Trim => "trimcase",
            Case::Upper => "uppercase",
            Case::Alphanum => "alphanumcase",
        }
    }

    /// The word rule for tokenizing cases, `None` for the direct passes.
    pub fn rule(&self) -> Option<CasingRule> {
        match self {
            Case::Camel => Some(rule::CAMEL),
            Case::Pascal => Some(rule::PASCAL),
            Case::Snake => Some(rule::SNAKE),
            Case::Const => Some(rule::CONST),
            Case::Spinal => Some(rule::SPINAL),
            Case::Path => Some(rule::PATH),
            Case::Dot => Some(rule::DOT),
            Case::Backslash => Some(rule::BACKSLASH),
            Case::Title => Some(rule::TITLE),
            Case::Sentence => Some(rule::SENTENCE),
            Case::Capital | Case::Lower | Case::Upper | Case::Trim | Case::Alphanum => None,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Case::Camel => camelcase(text),
            Case::Capital => capitalcase(text),
            Case::Const => constcase(text),
            Case::Lower => lowercase(text),
            Case::Pascal => pascalcase(text),
            Case::Path => pathcase(text),
            Case::Backslash => backslashcase(text),
            Case::Sentence => sentencecase(text),
            Case::Snake => snakecase(text),
            Case::Spinal => spinalcase(text),
            Case::Dot => dotcase(text),
            Case::Title => titlecase(text),
            Case::Trim => trimcase(text),
            Case::Upper => uppercase(text),
            Case::Alphanum => alphanumcase(text),
        }
    }
}

/// Convert `text` into `case`.
pub fn convert(text: &str, case: Case) -> String {
    case.apply(text)
}

impl FromStr for Case {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let key = key.strip_suffix("case").unwrap_or(&key);

        match key {
            "camel" | "lowercamel" => Ok(Case::Camel),
            "capital" | "capitalize" => Ok(Case::Capital),
            "const" | "constant" | "screaming" | "screamingsnake" => Ok(Case::Const),
            "lower" => Ok(Case::Lower),
            "pascal" | "uppercamel" => Ok(Case::Pascal),
            "path" | "slash" => Ok(Case::Path),
            "backslash" => Ok(Case::Backslash),
            "sentence" => Ok(Case::Sentence),
            "snake" => Ok(Case::Snake),
            "spinal" | "kebab" => Ok(Case::Spinal),
            "dot" => Ok(Case::Dot),
            "title" => Ok(Case::Title),
            "trim" => Ok(Case::Trim),
            "upper" => Ok(Case::Upper),
            "alphanum" | "alphanumeric" => Ok(Case::Alphanum),
            _ => Err(CaseError::UnknownCase(s.to_string())),
        }
    }
}

impl TryFrom<String> for Case {
    type Error = CaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Case> for String {
    fn from(case: Case) -> Self {
        case.name().to_string()
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
