//! Logical CPU core count probe.
//!
//! Two kernel families expose the same information through incompatible
//! interfaces: Linux-family targets have a direct library call returning a
//! count (`get_nprocs`), Darwin-family targets answer a key-value sysctl
//! query into a typed output buffer (`hw.logicalcpu`). This module normalizes
//! both into one accessor with one return type and one failure policy, so
//! downstream sizing logic never needs platform awareness.
//!
//! The platform branch is resolved at build time: `build.rs` classifies the
//! target OS into a `probe_os` cfg, and any target outside both families is
//! rejected with a compile error rather than building a broken probe.

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::OnceLock;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Failure of the platform core-count facility.
///
/// There is no fallback count and no retry: a failing probe means the host
/// environment is broken, and callers of the convenience accessor
/// [`count_cores`] treat it as fatal. The two variants distinguish the
/// facility reporting a non-success status from the facility "succeeding"
/// with a count that violates the ≥ 1 invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    /// The platform facility returned a non-success status.
    ProbeFailed {
        /// `errno` captured immediately after the failing call.
        errno: i32,
    },
    /// The facility reported a count below 1. Zero and negative values are
    /// failure sentinels, never valid core counts.
    NonPositiveCount { count: i32 },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::ProbeFailed { errno } => {
                write!(f, "platform core-count probe failed (errno {errno})")
            }
            ProbeError::NonPositiveCount { count } => {
                write!(f, "platform reported non-positive core count ({count})")
            }
        }
    }
}

impl std::error::Error for ProbeError {}

// ─────────────────────────────────────────────────────────────────────────────
// Probe interface + per-platform implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Source of a raw logical-core count.
///
/// Exactly one implementation exists per supported kernel family ([`OsProbe`],
/// selected at build time); the trait is public so that validation and the
/// failure path stay testable against mock probes.
pub trait CoreCountProbe {
    /// Returns the unvalidated count from the underlying facility, or an
    /// error if the facility reported non-success. A `Ok` result may still
    /// carry a non-positive count; validation happens in
    /// [`count_cores_with`].
    fn raw_count(&self) -> Result<i32, ProbeError>;
}

/// The host operating system's core-count facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProbe;

// Declared here because the `libc` crate does not expose this glibc symbol.
#[cfg(probe_os = "linux")]
extern "C" {
    fn get_nprocs() -> libc::c_int;
}

#[cfg(probe_os = "linux")]
impl CoreCountProbe for OsProbe {
    fn raw_count(&self) -> Result<i32, ProbeError> {
        // "Processors currently online". Cannot report failure on a running
        // kernel; a nonsensical result is still caught by validation.
        Ok(unsafe { get_nprocs() })
    }
}

#[cfg(probe_os = "darwin")]
impl CoreCountProbe for OsProbe {
    fn raw_count(&self) -> Result<i32, ProbeError> {
        let mut cores: libc::c_int = 0;
        let mut len: libc::size_t = std::mem::size_of_val(&cores);
        // NUL-terminated literal; no CString allocation needed.
        const NAME: &[u8] = b"hw.logicalcpu\0";
        let rc = unsafe {
            libc::sysctlbyname(
                NAME.as_ptr() as *const libc::c_char,
                &mut cores as *mut libc::c_int as *mut libc::c_void,
                &mut len,
                std::ptr::null_mut(),
                0,
            )
        };
        if rc != 0 {
            return Err(ProbeError::ProbeFailed {
                errno: std::io::Error::last_os_error().raw_os_error().unwrap_or(0),
            });
        }
        Ok(cores)
    }
}

#[cfg(not(any(probe_os = "linux", probe_os = "darwin")))]
compile_error!(
    "corecount supports Linux-family (get_nprocs) and Darwin-family \
     (sysctlbyname) targets only; no core-count probe exists for this OS"
);

// ─────────────────────────────────────────────────────────────────────────────
// Validation + public accessors
// ─────────────────────────────────────────────────────────────────────────────

/// Runs `probe` and validates its raw count against the ≥ 1 invariant.
pub fn count_cores_with(probe: &dyn CoreCountProbe) -> Result<NonZeroUsize, ProbeError> {
    let raw = probe.raw_count()?;
    usize::try_from(raw)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(ProbeError::NonPositiveCount { count: raw })
}

/// Probes the host operating system for its logical core count.
///
/// Recoverable form of [`count_cores`], for initialization paths that want
/// to surface a broken host environment through their own error handling
/// instead of panicking. Re-probes on every call; the value is stable for
/// the process lifetime regardless.
pub fn try_count_cores() -> Result<NonZeroUsize, ProbeError> {
    count_cores_with(&OsProbe)
}

static CORE_COUNT: OnceLock<usize> = OnceLock::new();

/// Returns the number of logical CPU cores visible to this process.
///
/// The count is an estimate of available parallel execution units (hardware
/// threads count individually); a typical consumer sizes a worker pool as
/// some ratio of it. The value is probed once on first access, cached for
/// the process lifetime, and safe to read from any number of threads.
///
/// # Panics
///
/// Panics if the platform probe fails. A failing probe means the host
/// environment is broken; there is no meaningful fallback count, and
/// returning 0 here would let a careless caller size an empty pool or
/// divide by zero. Use [`try_count_cores`] to handle the failure instead.
pub fn count_cores() -> usize {
    *CORE_COUNT.get_or_init(|| match try_count_cores() {
        Ok(n) => n.get(),
        Err(e) => panic!("cannot determine logical core count: {e}"),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
