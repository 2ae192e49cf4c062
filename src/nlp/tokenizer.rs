//! Whitespace tokenizer and frequency counter
//!
//! Tokens are whitespace-separated runs with at most one trailing character
//! trimmed. Case is preserved; normalization happens later in the
//! capitalization reconciler.

use std::io::BufRead;

use crate::errors::{KeywordError, Result};
use crate::types::{StripRule, WordFrequencies};

/// Trim at most one trailing character from `token` according to `rule`.
///
/// Under [`StripRule::Literal`] a token made of a single non-letter
/// character becomes the empty string.
pub fn strip_trailing(token: &str, rule: StripRule) -> &str {
    let Some(last) = token.chars().next_back() else {
        return token;
    };

    let strip = match rule {
        StripRule::Literal => !last.is_ascii_lowercase(),
        StripRule::AsciiPunctuation => last.is_ascii_punctuation(),
    };

    if strip {
        &token[..token.len() - last.len_utf8()]
    } else {
        token
    }
}

/// Split `line` on whitespace and record every trimmed token in `words`
pub fn count_line(line: &str, rule: StripRule, words: &mut WordFrequencies) {
    for token in line.split_whitespace() {
        words.record(strip_trailing(token, rule));
    }
}

/// Build a word → count mapping from a sequence of lines.
///
/// ```
/// use topic_words::nlp::tokenizer::record_frequencies;
/// use topic_words::types::StripRule;
///
/// let words = record_frequencies(["Hello world.", "hello again"], StripRule::Literal);
/// assert_eq!(words.count("world"), 1);
/// assert_eq!(words.count("Hello"), 1);
/// assert_eq!(words.count("hello"), 1);
/// ```
pub fn record_frequencies<I, S>(lines: I, rule: StripRule) -> WordFrequencies
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = WordFrequencies::new();
    for line in lines {
        count_line(line.as_ref(), rule, &mut words);
    }
    words
}

/// Build a word → count mapping by streaming lines from `reader`.
///
/// Fails on the first unreadable or non-UTF-8 line; no partial mapping is
/// returned.
pub fn record_frequencies_from_reader<R: BufRead>(
    mut reader: R,
    rule: StripRule,
) -> Result<WordFrequencies> {
    let mut words = WordFrequencies::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| KeywordError::io("<input>", e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let line = std::str::from_utf8(&buf).map_err(|_| KeywordError::Decode { line: line_no })?;
        count_line(line, rule, &mut words);
    }

    tracing::debug!(lines = line_no, distinct = words.len(), "counted words");
    Ok(words)
}
