// Integration tests for the logical core count accessor (src/probe.rs).
//
// Coverage:
//   - count_cores() returns a positive integer on every supported platform
//   - Repeated calls return the same value (idempotent read)
//   - try_count_cores() agrees with count_cores()
//   - 100 concurrent threads observe identical values with no crash
//   - Mock probes: failure status and non-positive counts never surface as
//     values; 8 maps to 8 and 1 maps to 1
//   - Sanity against the num_cpus crate as an independent oracle

use corecount::{count_cores, count_cores_with, try_count_cores, CoreCountProbe, ProbeError};

// ─────────────────────────────────────────────────────────────────────────────
// Host probe contract
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn returns_at_least_one() {
    assert!(count_cores() >= 1, "count_cores() must be >= 1");
}

#[test]
fn returns_reasonable_upper_bound() {
    // No current machine has more than 65536 logical cores; guards against
    // returning an uninitialized buffer or a sign-mangled value.
    let cores = count_cores();
    assert!(cores <= 65_536, "suspiciously large core count: {cores}");
}

#[test]
fn repeated_calls_are_stable() {
    let first = count_cores();
    for _ in 0..1000 {
        assert_eq!(count_cores(), first);
    }
}

#[test]
fn try_variant_matches_cached_accessor() {
    let n = try_count_cores().expect("host probe should succeed");
    assert_eq!(n.get(), count_cores());
}

#[test]
fn at_least_as_many_as_the_affinity_oracle() {
    // num_cpus::get() honours the process affinity mask on Linux, which is a
    // subset of the online processors count_cores() reports, so the oracle
    // can only be lower. On Darwin both read the same sysctl value.
    assert!(count_cores() >= num_cpus::get());
}

// ─────────────────────────────────────────────────────────────────────────────
// Concurrency — read-only, no shared mutable state beyond the one-time cache
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn hundred_threads_observe_identical_value() {
    let counts: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..100).map(|_| s.spawn(count_cores)).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(counts.len(), 100);
    assert!(counts.iter().all(|&c| c == counts[0] && c >= 1));
}

// ─────────────────────────────────────────────────────────────────────────────
// Failure policy via mock probes
// ─────────────────────────────────────────────────────────────────────────────

struct FixedProbe(i32);

impl CoreCountProbe for FixedProbe {
    fn raw_count(&self) -> Result<i32, ProbeError> {
        Ok(self.0)
    }
}

struct BrokenProbe {
    errno: i32,
}

impl CoreCountProbe for BrokenProbe {
    fn raw_count(&self) -> Result<i32, ProbeError> {
        Err(ProbeError::ProbeFailed { errno: self.errno })
    }
}

#[test]
fn eight_core_host_reports_eight() {
    let n = count_cores_with(&FixedProbe(8)).unwrap();
    assert_eq!(n.get(), 8);
}

#[test]
fn single_core_host_is_valid_not_a_sentinel() {
    let n = count_cores_with(&FixedProbe(1)).unwrap();
    assert_eq!(n.get(), 1);
}

#[test]
fn zero_count_is_rejected() {
    let err = count_cores_with(&FixedProbe(0)).unwrap_err();
    assert_eq!(err, ProbeError::NonPositiveCount { count: 0 });
}

#[test]
fn negative_count_is_rejected() {
    let err = count_cores_with(&FixedProbe(-4)).unwrap_err();
    assert_eq!(err, ProbeError::NonPositiveCount { count: -4 });
}

#[test]
fn failing_facility_never_yields_a_value() {
    let err = count_cores_with(&BrokenProbe { errno: 2 }).unwrap_err();
    assert_eq!(err, ProbeError::ProbeFailed { errno: 2 });
}

#[test]
fn probe_errors_format_with_detail() {
    let msg = ProbeError::ProbeFailed { errno: 2 }.to_string();
    assert!(msg.contains("errno 2"), "unexpected message: {msg}");
}
