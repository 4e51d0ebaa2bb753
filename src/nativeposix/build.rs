// nativeposix/build.rs
//
// Decides once, at build time, which implementation backs the exported entry
// points. `lind_native_posix` is set when the target is a unix whose errno we
// know how to reach and the `unsupported` feature is off.

const NATIVE_OSES: &[&str] = &[
    "linux", "android", "macos", "ios", "freebsd", "netbsd", "openbsd",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(lind_native_posix)");

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let forced_unsupported = std::env::var_os("CARGO_FEATURE_UNSUPPORTED").is_some();

    if !forced_unsupported && NATIVE_OSES.contains(&target_os.as_str()) {
        println!("cargo:rustc-cfg=lind_native_posix");
    }
}
