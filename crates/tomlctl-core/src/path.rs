//! Dotted path parsing: `a.b[0].c` → addressing tokens.
//!
//! The grammar is deliberately small. Segments are split on `.`; a segment
//! may carry at most one `[index]` group. Empty segments are skipped, so
//! `a..b` addresses the same node as `a.b`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("missing closing bracket ']' in segment '{0}'")]
    MissingClosingBracket(String),
    #[error("invalid array index '{0}'")]
    InvalidIndex(String),
    #[error("unsupported segment format '{0}'")]
    UnsupportedSegment(String),
}

/// One addressing step: a table key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Key(String),
    /// Negative values parse but are always out of range at navigation time.
    Index(i64),
}

/// Parse a path string into a token sequence.
///
/// An entirely empty path (after skipping empty segments) parses to an empty
/// vector; callers treat that as "no addressable target".
///
/// # Example
///
/// ```
/// use tomlctl_core::path::{parse, Token};
///
/// let tokens = parse("a.b[0].c").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Key("a".to_string()),
///         Token::Key("b".to_string()),
///         Token::Index(0),
///         Token::Key("c".to_string()),
///     ],
/// );
/// ```
pub fn parse(path: &str) -> Result<Vec<Token>, PathError> {
    let mut tokens = Vec::new();
    for part in path.split('.') {
        // `a..b`, `.a`, `a.` read as if the stray dot were not there.
        if part.is_empty() {
            continue;
        }

        let Some(open) = part.find('[') else {
            tokens.push(Token::Key(part.to_string()));
            continue;
        };

        // Guard against `a[0` and `a]0[`.
        let close = match part.find(']') {
            Some(close) if close > open => close,
            _ => return Err(PathError::MissingClosingBracket(part.to_string())),
        };

        if open > 0 {
            tokens.push(Token::Key(part[..open].to_string()));
        }

        let index_text = &part[open + 1..close];
        let index: i64 = index_text
            .parse()
            .map_err(|_| PathError::InvalidIndex(index_text.to_string()))?;
        tokens.push(Token::Index(index));

        // Only one bracket group per segment: `tags[0]x` and `tags[0][1]`
        // are both rejected.
        if close + 1 < part.len() {
            return Err(PathError::UnsupportedSegment(part.to_string()));
        }
    }
    Ok(tokens)
}

/// Render a token sequence back to its canonical textual form.
///
/// Round-trips with [`parse`] for canonical paths (no redundant dots, every
/// index group attached to a key).
pub fn format(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            Token::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}
