// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by the DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
