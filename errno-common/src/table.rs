//! Errno table for the host platform.
//!
//! The table maps each symbolic errno name to its numeric code. It is compiled
//! in from the `libc` crate's per-target constants, so the values always match
//! the C library the binary links against.
//!
//! # Ordering
//!
//! Entries are sorted by name in byte order (`E2BIG` first). Several names
//! share a code on most platforms:
//!
//! | Alias         | Canonical     | Platforms          |
//! |---------------|---------------|--------------------|
//! | `EWOULDBLOCK` | `EAGAIN`      | all unix           |
//! | `EDEADLOCK`   | `EDEADLK`     | Linux              |
//! | `ENOTSUP`     | `EOPNOTSUPP`  | Linux              |
//!
//! Code lookups return the first entry in table order, so the ordering is part
//! of the observable behaviour (`95` resolves to `ENOTSUP` on Linux).

use std::fmt;

use crate::report;

/// A single errno name with its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrnoEntry {
    /// Symbolic name, e.g. `ENOENT`.
    pub name: &'static str,
    /// Platform-defined error number.
    pub code: i32,
}

impl ErrnoEntry {
    #[must_use]
    pub const fn new(name: &'static str, code: i32) -> Self {
        Self { name, code }
    }

    /// Human-readable description from the C library.
    #[must_use]
    pub fn description(&self) -> String {
        report::describe(self.code)
    }
}

impl fmt::Display for ErrnoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.code, self.description())
    }
}

/// Immutable, ordered view over a set of errno entries.
#[derive(Debug, Clone, Copy)]
pub struct ErrnoTable {
    entries: &'static [ErrnoEntry],
}

impl ErrnoTable {
    /// Wrap an arbitrary static slice. Order is preserved as given.
    #[must_use]
    pub const fn new(entries: &'static [ErrnoEntry]) -> Self {
        Self { entries }
    }

    /// The table for the platform this binary was built for.
    #[must_use]
    pub const fn platform() -> Self {
        Self::new(PLATFORM_ERRNOS)
    }

    #[must_use]
    pub const fn entries(&self) -> &'static [ErrnoEntry] {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'static, ErrnoEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ErrnoTable {
    fn default() -> Self {
        Self::platform()
    }
}

impl IntoIterator for ErrnoTable {
    type Item = &'static ErrnoEntry;
    type IntoIter = std::slice::Iter<'static, ErrnoEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

macro_rules! errnos {
    ($($name:ident),* $(,)?) => {
        &[$(ErrnoEntry::new(stringify!($name), libc::$name)),*]
    };
}

#[cfg(target_os = "linux")]
static PLATFORM_ERRNOS: &[ErrnoEntry] = errnos![
    E2BIG, EACCES, EADDRINUSE, EADDRNOTAVAIL, EADV, EAFNOSUPPORT, EAGAIN,
    EALREADY, EBADE, EBADF, EBADFD, EBADMSG, EBADR, EBADRQC, EBADSLT, EBFONT,
    EBUSY, ECANCELED, ECHILD, ECHRNG, ECOMM, ECONNABORTED, ECONNREFUSED,
    ECONNRESET, EDEADLK, EDEADLOCK, EDESTADDRREQ, EDOM, EDOTDOT, EDQUOT,
    EEXIST, EFAULT, EFBIG, EHOSTDOWN, EHOSTUNREACH, EHWPOISON, EIDRM, EILSEQ,
    EINPROGRESS, EINTR, EINVAL, EIO, EISCONN, EISDIR, EISNAM, EKEYEXPIRED,
    EKEYREJECTED, EKEYREVOKED, EL2HLT, EL2NSYNC, EL3HLT, EL3RST, ELIBACC,
    ELIBBAD, ELIBEXEC, ELIBMAX, ELIBSCN, ELNRNG, ELOOP, EMEDIUMTYPE, EMFILE,
    EMLINK, EMSGSIZE, EMULTIHOP, ENAMETOOLONG, ENAVAIL, ENETDOWN, ENETRESET,
    ENETUNREACH, ENFILE, ENOANO, ENOBUFS, ENOCSI, ENODATA, ENODEV, ENOENT,
    ENOEXEC, ENOKEY, ENOLCK, ENOLINK, ENOMEDIUM, ENOMEM, ENOMSG, ENONET,
    ENOPKG, ENOPROTOOPT, ENOSPC, ENOSR, ENOSTR, ENOSYS, ENOTBLK, ENOTCONN,
    ENOTDIR, ENOTEMPTY, ENOTNAM, ENOTRECOVERABLE, ENOTSOCK, ENOTSUP, ENOTTY,
    ENOTUNIQ, ENXIO, EOPNOTSUPP, EOVERFLOW, EOWNERDEAD, EPERM, EPFNOSUPPORT,
    EPIPE, EPROTO, EPROTONOSUPPORT, EPROTOTYPE, ERANGE, EREMCHG, EREMOTE,
    EREMOTEIO, ERESTART, ERFKILL, EROFS, ESHUTDOWN, ESOCKTNOSUPPORT, ESPIPE,
    ESRCH, ESRMNT, ESTALE, ESTRPIPE, ETIME, ETIMEDOUT, ETOOMANYREFS, ETXTBSY,
    EUCLEAN, EUNATCH, EUSERS, EWOULDBLOCK, EXDEV, EXFULL,
];

// POSIX.1-2008 names, defined by every unix target in libc.
#[cfg(not(target_os = "linux"))]
static PLATFORM_ERRNOS: &[ErrnoEntry] = errnos![
    E2BIG, EACCES, EADDRINUSE, EADDRNOTAVAIL, EAFNOSUPPORT, EAGAIN, EALREADY,
    EBADF, EBADMSG, EBUSY, ECANCELED, ECHILD, ECONNABORTED, ECONNREFUSED,
    ECONNRESET, EDEADLK, EDESTADDRREQ, EDOM, EDQUOT, EEXIST, EFAULT, EFBIG,
    EHOSTUNREACH, EIDRM, EILSEQ, EINPROGRESS, EINTR, EINVAL, EIO, EISCONN,
    EISDIR, ELOOP, EMFILE, EMLINK, EMSGSIZE, EMULTIHOP, ENAMETOOLONG, ENETDOWN,
    ENETRESET, ENETUNREACH, ENFILE, ENOBUFS, ENODEV, ENOENT, ENOEXEC, ENOLCK,
    ENOLINK, ENOMEM, ENOMSG, ENOPROTOOPT, ENOSPC, ENOSYS, ENOTCONN, ENOTDIR,
    ENOTEMPTY, ENOTRECOVERABLE, ENOTSOCK, ENOTSUP, ENOTTY, ENXIO, EOPNOTSUPP,
    EOVERFLOW, EOWNERDEAD, EPERM, EPIPE, EPROTO, EPROTONOSUPPORT, EPROTOTYPE,
    ERANGE, EROFS, ESPIPE, ESRCH, ESTALE, ETIMEDOUT, ETXTBSY, EWOULDBLOCK,
    EXDEV,
];
