//! Report lines and the per-invocation processing loop.

use std::ffi::{CStr, OsStr};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

use tracing::debug;

use crate::table::ErrnoTable;

/// Longer than any libc error message.
const DESCRIPTION_BUF_LEN: usize = 256;

/// Human-readable description of `code` from the C library.
///
/// Uses the XSI `strerror_r`. Codes the library rejects fall back to the
/// glibc wording for unknown errors.
#[must_use]
#[allow(unsafe_code)]
pub fn describe(code: i32) -> String {
    let mut buf = [0 as libc::c_char; DESCRIPTION_BUF_LEN];
    // SAFETY: buf is writable for buf.len() bytes and strerror_r writes a
    // NUL-terminated string of at most that length on success.
    let rc = unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) };
    if rc != 0 {
        return format!("Unknown error {code}");
    }
    // SAFETY: strerror_r returned 0, so buf holds a NUL-terminated string.
    let message = unsafe { CStr::from_ptr(buf.as_ptr()) };
    message.to_string_lossy().into_owned()
}

/// Resolves tokens against a table and writes the results.
///
/// Successful lookups go to `out`, unrecognized tokens to `err`. Misses are
/// silent. Every token is processed regardless of earlier failures.
pub struct Reporter<O: Write, E: Write> {
    table: ErrnoTable,
    out: O,
    err: E,
    failed: bool,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(table: ErrnoTable, out: O, err: E) -> Self {
        Self {
            table,
            out,
            err,
            failed: false,
        }
    }

    /// Resolve one token and write its outcome.
    ///
    /// Returns whether the token resolved. I/O errors are propagated; lookup
    /// failures only set the failure flag. The diagnostic echoes the token's
    /// raw bytes, so non-UTF-8 arguments are reported unchanged.
    pub fn process<T: AsRef<OsStr> + ?Sized>(&mut self, token: &T) -> io::Result<bool> {
        let raw = token.as_ref();
        let text = raw.to_string_lossy();
        match self.table.resolve(&text) {
            Ok(entry) => {
                debug!(token = %text, name = entry.name, code = entry.code, "resolved");
                writeln!(self.out, "{entry}")?;
                Ok(true)
            }
            Err(error) => {
                debug!(token = %text, %error, "lookup failed");
                if error.is_reported() {
                    self.err.write_all(b"ERROR: Not understood: ")?;
                    self.err.write_all(raw.as_bytes())?;
                    self.err.write_all(b"\n")?;
                }
                self.failed = true;
                Ok(false)
            }
        }
    }

    /// Process every token in order.
    pub fn process_all<I, S>(&mut self, tokens: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for token in tokens {
            self.process(&token)?;
        }
        self.out.flush()?;
        self.err.flush()
    }

    /// Whether any token failed so far.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.failed
    }

    /// Consume the reporter and hand back the writers.
    pub fn into_parts(self) -> (O, E, bool) {
        (self.out, self.err, self.failed)
    }
}

/// Classify the outcome of a whole invocation as a process exit code.
#[must_use]
pub const fn exit_code(failed: bool) -> u8 {
    if failed { 1 } else { 0 }
}
