use crate::case::tokenizer::Word;

/// How a single word is re-cased before joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capitalization {
    Lower,
    Upper,
    /// First character upper, the rest lower
    Capitalized,
}

impl Capitalization {
    pub fn apply_to(self, word: &str, out: &mut String) {
        match self {
            Capitalization::Lower => out.extend(word.chars().flat_map(char::to_lowercase)),
            Capitalization::Upper => out.extend(word.chars().flat_map(char::to_uppercase)),
            Capitalization::Capitalized => {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.extend(chars.flat_map(char::to_lowercase));
                }
            }
        }
    }
}

/// Separator plus per-word capitalization for one output convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CasingRule {
    pub separator: &'static str,
    pub first: Capitalization,
    pub rest: Capitalization,
}

impl CasingRule {
    pub const fn new(separator: &'static str, first: Capitalization, rest: Capitalization) -> Self {
        Self {
            separator,
            first,
            rest,
        }
    }

    pub const fn uniform(separator: &'static str, capitalization: Capitalization) -> Self {
        Self::new(separator, capitalization, capitalization)
    }

    pub fn capitalization(&self, index: usize) -> Capitalization {
        if index == 0 {
            self.first
        } else {
            self.rest
        }
    }
}

pub const CAMEL: CasingRule = CasingRule::new("", Capitalization::Lower, Capitalization::Capitalized);
pub const PASCAL: CasingRule = CasingRule::uniform("", Capitalization::Capitalized);
pub const SNAKE: CasingRule = CasingRule::uniform("_", Capitalization::Lower);
pub const CONST: CasingRule = CasingRule::uniform("_", Capitalization::Upper);
pub const SPINAL: CasingRule = CasingRule::uniform("-", Capitalization::Lower);
pub const PATH: CasingRule = CasingRule::uniform("/", Capitalization::Lower);
pub const DOT: CasingRule = CasingRule::uniform(".", Capitalization::Lower);
pub const BACKSLASH: CasingRule = CasingRule::uniform("\\", Capitalization::Lower);
pub const TITLE: CasingRule = CasingRule::uniform(" ", Capitalization::Capitalized);
pub const SENTENCE: CasingRule =
    CasingRule::new(" ", Capitalization::Capitalized, Capitalization::Lower);

/// Join `words` back together according to `rule`.
pub fn format(words: &[Word<'_>], rule: CasingRule) -> String {
    let capacity = words.iter().map(|w| w.text.len()).sum::<usize>()
        + rule.separator.len() * words.len().saturating_sub(1);
    let mut out = String::with_capacity(capacity);

    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            out.push_str(rule.separator);
        }
        rule.capitalization(index).apply_to(word.text, &mut out);
    }

    out
}
