//! Runtime configuration

use std::path::{Path, PathBuf};

/// Environment variable overriding the export directory
pub const OUTPUT_DIR_ENV: &str = "NFP_OUTPUT_DIR";

/// Get the export directory from environment or use default
pub fn output_dir() -> PathBuf {
    std::env::var(OUTPUT_DIR_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));
            default_output_dir(&exe_dir)
        })
}

/// `output/` under the project root when running from target/{debug,release},
/// otherwise next to the executable
fn default_output_dir(exe_dir: &Path) -> PathBuf {
    let mut path = exe_dir.to_path_buf();

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("output");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_dir_from_target() {
        let dir = default_output_dir(Path::new("/work/nfp/target/release"));
        assert_eq!(dir, PathBuf::from("/work/nfp/output"));

        let dir = default_output_dir(Path::new("/work/nfp/target/debug"));
        assert_eq!(dir, PathBuf::from("/work/nfp/output"));
    }

    #[test]
    fn test_default_output_dir_installed() {
        let dir = default_output_dir(Path::new("/usr/local/bin"));
        assert_eq!(dir, PathBuf::from("/usr/local/bin/output"));
    }
}
