// corecount — logical CPU core count query

//! Cross-platform query for the number of logical CPU cores visible to the
//! running process.
//!
//! The single entry point is [`count_cores`]: no arguments, no configuration,
//! a positive integer back. It is backed by a platform probe selected at
//! build time (`get_nprocs` on Linux-family targets, the `hw.logicalcpu`
//! sysctl on Darwin-family targets); targets outside both families fail to
//! compile. A failing probe is fatal at the call site — use
//! [`try_count_cores`] from initialization paths that prefer a `Result`.
//!
//! The returned count is logical cores (hardware threads count separately);
//! consumers such as worker-pool sizing apply their own ratio on top.

pub mod boxed;
pub mod probe;

pub use boxed::Boxed;
pub use probe::{
    count_cores, count_cores_with, try_count_cores, CoreCountProbe, OsProbe, ProbeError,
};
