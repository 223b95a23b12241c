//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables the binary reads through clap's `env` support.
const SCRUBBED_ENV: &[&str] = &[
    "DOTENV_FILE_PATH",
    "CI_PROJECT_DIR",
    "AWS_SECRET_CONFIGS",
    "DOTENV_AWS_PROFILE",
    "AWS_REGION",
    "SECRETENV_LOG",
];

impl Test {
    /// Create a secretenv command running in the project directory.
    ///
    /// Inherited configuration variables are removed and colors disabled.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("secretenv").expect("failed to find secretenv binary");
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run secretenv with `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run secretenv")
    }
}
