//! Build script for NFP
//!
//! Increments build number on each recompilation and embeds build metadata.

use std::fs;
use std::path::Path;

fn main() {
    // Rebuild metadata only when sources change
    println!("cargo:rerun-if-changed=src");

    let build_number_path = Path::new("build_number.txt");

    // Missing or unreadable counter starts over at 1
    let new_build = fs::read_to_string(build_number_path)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0)
        + 1;

    // A read-only checkout still builds, it just keeps the old number
    if let Err(e) = fs::write(build_number_path, new_build.to_string()) {
        println!("cargo:warning=Could not persist build number: {}", e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=NFP_BUILD_NUMBER={}", new_build);
    println!("cargo:rustc-env=NFP_BUILD_TIMESTAMP={}", timestamp);
}
