// Word splitting shared by every separator-based conversion

use unicode_segmentation::UnicodeSegmentation;

/// A word found in the input: a borrowed slice plus its byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub start: usize, // Byte offset where the word starts
    pub end: usize,   // Byte offset one past the last byte
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Delimiter,
}

impl CharClass {
    /// Class of a grapheme cluster, decided by its base character. Combining
    /// marks ride along with the base.
    fn of_grapheme(grapheme: &str) -> Self {
        grapheme.chars().next().map_or(CharClass::Delimiter, Self::of)
    }

    fn of(ch: char) -> Self {
        if ch.is_uppercase() {
            CharClass::Upper
        } else if ch.is_numeric() {
            CharClass::Digit
        } else if ch.is_alphabetic() {
            // Caseless letters count as lowercase
            CharClass::Lower
        } else {
            CharClass::Delimiter
        }
    }
}

/// Case of the last letter seen in the current word. Digits don't change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    None,
    Lower,
    Upper,
}

/// Split `input` into words.
///
/// Scanning is per grapheme cluster, so `e` plus a combining accent stays one
/// letter. Every non-alphanumeric character is a delimiter and is dropped. Inside a
/// run of letters and digits a new word starts at an uppercase letter that
/// follows a lowercase one (`fooBar`), or at the last capital of an acronym
/// run when a lowercase letter comes next (`HTTPServer` gives `HTTP`, `Server`).
pub fn tokenize(input: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut context = Context::None;

    let mut graphemes = input.grapheme_indices(true).peekable();
    while let Some((offset, grapheme)) = graphemes.next() {
        let class = CharClass::of_grapheme(grapheme);

        if class == CharClass::Delimiter {
            if let Some(word_start) = start.take() {
                words.push(word(input, word_start, offset));
            }
            context = Context::None;
            continue;
        }

        if class == CharClass::Upper {
            if let Some(word_start) = start {
                let next_is_lower = graphemes
                    .peek()
                    .is_some_and(|&(_, next)| CharClass::of_grapheme(next) == CharClass::Lower);
                let boundary = match context {
                    Context::Lower => true,
                    Context::Upper | Context::None => next_is_lower,
                };
                if boundary {
                    words.push(word(input, word_start, offset));
                    start = Some(offset);
                    context = Context::None;
                }
            }
        }

        if start.is_none() {
            start = Some(offset);
        }
        match class {
            CharClass::Lower => context = Context::Lower,
            CharClass::Upper => context = Context::Upper,
            _ => {}
        }
    }

    if let Some(word_start) = start {
        words.push(word(input, word_start, input.len()));
    }

    words
}

fn word(input: &str, start: usize, end: usize) -> Word<'_> {
    Word {
        text: &input[start..end],
        start,
        end,
    }
}
