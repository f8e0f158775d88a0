//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside a temporary directory with its own `HOME`, so
//! neither the developer's configuration nor `CRUMBTRAIL_*` variables leak
//! into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Configuration for a small documentation site.
#[allow(dead_code)]
pub const SITE_CONFIG: &str = r#"
routes:
  - name: index
    path: /
    title: Home
  - name: about___en
    path: /about
  - name: docs
    path: /docs
    title: Documentation
    children:
      - name: docs-slug
        path: ":slug(.*)+"
messages:
  en:
    breadcrumb:
      items:
        about:
          label: About us
  fr:
    breadcrumb:
      items:
        about:
          label: "À propos"
        index:
          label: Accueil
"#;

const ENV_VARS: [&str; 6] = [
    "CRUMBTRAIL_CONFIG",
    "CRUMBTRAIL_LOCALE",
    "CRUMBTRAIL_FALLBACK_LOCALE",
    "CRUMBTRAIL_ROOT_LABEL",
    "CRUMBTRAIL_OUTPUT_FORMAT",
    "CRUMBTRAIL_LOG_MODE",
];

/// Isolated test environment.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for commands.
    pub temp_path: PathBuf,
    /// Home directory for commands.
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().join("site");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&temp_path).expect("Failed to create site dir");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            temp_path,
            home_dir,
        }
    }

    /// Create an environment with `crumbtrail.yaml` set to [`SITE_CONFIG`].
    pub fn with_site() -> Self {
        let env = Self::new();
        env.write("crumbtrail.yaml", SITE_CONFIG);
        env
    }

    /// Command running in the working directory with an isolated home.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("crumbtrail").expect("Failed to find crumbtrail binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.home_dir);
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write a file relative to the working directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// The working directory.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }
}
