//! Token classification and table lookups.
//!
//! A command-line token is classified by its first byte only:
//!
//! | First byte      | Kind         |
//! |-----------------|--------------|
//! | `E` or `e`      | name lookup  |
//! | `0`-`9`         | code lookup  |
//! | anything else   | invalid      |
//!
//! This is a heuristic, not validation. `Exyz` is a name lookup that misses,
//! `-5` is invalid, and `2abc` is a lookup of code 2.

use thiserror::Error;
use tracing::debug;

use crate::table::{ErrnoEntry, ErrnoTable};

/// Leading byte of every errno name.
pub const NAME_PREFIX: u8 = b'E';

/// How a token will be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    NameLookup,
    CodeLookup,
    Invalid,
}

/// Per-token lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// First byte is neither the name prefix nor a digit.
    #[error("Not understood: {token}")]
    UnrecognizedToken { token: String },

    /// Looks like a name but no table entry matches.
    #[error("No errno named {name}")]
    NameNotFound { name: String },

    /// Looks like a code but no table entry carries it.
    #[error("No errno with code {code}")]
    CodeNotFound { code: String },
}

impl LookupError {
    /// Whether the CLI writes a diagnostic line for this failure.
    ///
    /// Only classification failures are reported; misses just fail the exit
    /// status.
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::UnrecognizedToken { .. })
    }
}

/// Classify a token from its first byte.
#[must_use]
pub fn classify(token: &str) -> TokenKind {
    match token.as_bytes().first() {
        Some(b) if b.to_ascii_uppercase() == NAME_PREFIX => TokenKind::NameLookup,
        Some(b) if b.is_ascii_digit() => TokenKind::CodeLookup,
        _ => TokenKind::Invalid,
    }
}

/// Split off the run of leading ASCII digits.
fn leading_digits(token: &str) -> &str {
    let end = token
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(token.len());
    &token[..end]
}

/// Parse the leading integer of a token like C `atoi`, ignoring trailing
/// garbage.
///
/// Out-of-range values behave as glibc's `(int)strtol`: the digits saturate
/// at `LONG_MAX` and the result is truncated to `int`, so `4294967298` is 2.
/// Returns `None` only when there are no leading digits.
#[must_use]
pub fn parse_leading_code(token: &str) -> Option<i32> {
    let digits = leading_digits(token);
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<libc::c_long>().unwrap_or(libc::c_long::MAX);
    Some(value as i32)
}

impl ErrnoTable {
    /// First entry whose name matches, ignoring ASCII case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&'static ErrnoEntry> {
        self.iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// First entry carrying `code`, in table order.
    #[must_use]
    pub fn find_by_code(&self, code: i32) -> Option<&'static ErrnoEntry> {
        self.iter().find(|entry| entry.code == code)
    }

    /// All entries carrying `code`, in table order.
    pub fn aliases(&self, code: i32) -> impl Iterator<Item = &'static ErrnoEntry> {
        self.iter().filter(move |entry| entry.code == code)
    }

    /// Classify `token` and look it up.
    pub fn resolve(&self, token: &str) -> Result<&'static ErrnoEntry, LookupError> {
        match classify(token) {
            TokenKind::NameLookup => {
                self.find_by_name(token)
                    .ok_or_else(|| LookupError::NameNotFound {
                        name: token.to_string(),
                    })
            }
            TokenKind::CodeLookup => {
                let digits = leading_digits(token);
                let entry = parse_leading_code(token)
                    .and_then(|code| self.find_by_code(code))
                    .ok_or_else(|| LookupError::CodeNotFound {
                        code: digits.to_string(),
                    })?;

                if tracing::enabled!(tracing::Level::DEBUG) {
                    let shadowed: Vec<&str> = self
                        .aliases(entry.code)
                        .skip(1)
                        .map(|alias| alias.name)
                        .collect();
                    if !shadowed.is_empty() {
                        debug!(
                            code = entry.code,
                            chosen = entry.name,
                            ?shadowed,
                            "code has aliases, first in table order wins"
                        );
                    }
                }
                Ok(entry)
            }
            TokenKind::Invalid => Err(LookupError::UnrecognizedToken {
                token: token.to_string(),
            }),
        }
    }
}
