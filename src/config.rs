use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_TARGET_URL: &str = "https://kingdread.de/eltrur/upload";
pub const DEFAULT_JOB_URL_BASE: &str = "https://travis-ci.org/Kingdread/Rurtle/jobs/";
pub const DEFAULT_RESULTS_DIR: &str = "test-results";
pub const DEFAULT_MANIFEST: &str = "test-result";

/// Endpoint and file-name settings. Every key is optional in the TOML file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct UploaderConfig {
    pub target_url: String,
    /// Prefix of the CI job page; the job id is appended to it.
    pub job_url_base: String,
    /// Results directory, resolved against the crate root the test suite runs in.
    pub results_dir: String,
    /// Manifest file name inside the results directory.
    pub manifest: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            job_url_base: DEFAULT_JOB_URL_BASE.to_string(),
            results_dir: DEFAULT_RESULTS_DIR.to_string(),
            manifest: DEFAULT_MANIFEST.to_string(),
        }
    }
}

/// Load uploader configuration from a TOML file.
pub fn load_config(path: &Path) -> anyhow::Result<UploaderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: UploaderConfig =
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

/// Returns the default results directory. `cargo test` writes screenshots to
/// `test-results/` relative to the crate root, so that is where they are read.
pub fn default_results_dir(config: &UploaderConfig) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(&config.results_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(load_config(&path).unwrap(), UploaderConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.toml");
        fs::write(&path, "target_url = \"http://localhost:8000/upload\"\n").unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.target_url, "http://localhost:8000/upload");
        assert_eq!(cfg.job_url_base, DEFAULT_JOB_URL_BASE);
        assert_eq!(cfg.manifest, DEFAULT_MANIFEST);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.toml");
        fs::write(&path, "retries = 3\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_config(Path::new("/nonexistent/upload.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/upload.toml"));
    }

    #[test]
    fn test_default_results_dir_is_under_crate_root() {
        let dir = default_results_dir(&UploaderConfig::default());
        assert_eq!(dir, Path::new(env!("CARGO_MANIFEST_DIR")).join("test-results"));
    }

    #[test]
    fn test_absolute_results_dir_replaces_crate_root() {
        let cfg = UploaderConfig {
            results_dir: "/srv/ci/test-results".to_string(),
            ..UploaderConfig::default()
        };
        assert_eq!(default_results_dir(&cfg), Path::new("/srv/ci/test-results"));
    }
}
