// build.rs — Target platform classification for the core-count probe.
//
// Emits `cargo:rustc-cfg=probe_os="linux"` or `probe_os="darwin"` so that
// source-level dispatch keys on one cfg value per kernel family instead of
// enumerating every `target_os` at each use site. Targets outside both
// families get no cfg; src/probe.rs rejects them with a compile error so an
// unsupported platform cannot silently build a broken probe.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // glibc and bionic both expose get_nprocs().
    let linux_family = ["linux", "android"];
    // XNU-kernel targets all answer the hw.logicalcpu sysctl.
    let darwin_family = ["macos", "ios", "tvos", "watchos", "visionos"];

    if linux_family.contains(&target_os.as_str()) {
        println!("cargo:rustc-cfg=probe_os=\"linux\"");
    } else if darwin_family.contains(&target_os.as_str()) {
        println!("cargo:rustc-cfg=probe_os=\"darwin\"");
    }
}
