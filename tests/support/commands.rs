//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create a credcheck command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test directory
    /// - NO_COLOR set so output is plain text
    /// - CREDCHECK_CONFIG and CREDCHECK_LOG removed
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("credcheck").expect("failed to find credcheck binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("CREDCHECK_CONFIG");
        cmd.env_remove("CREDCHECK_LOG");
        cmd
    }

    /// Run `credcheck --config <config> --credentials <credentials>`.
    pub fn check(&self, config: &Path, credentials: &Path) -> Output {
        self.cmd()
            .arg("--config")
            .arg(config)
            .arg("--credentials")
            .arg(credentials)
            .output()
            .expect("failed to run credcheck")
    }

    /// Run `credcheck --credentials <credentials>` with the default config path.
    pub fn check_default_config(&self, credentials: &Path) -> Output {
        self.cmd()
            .arg("--credentials")
            .arg(credentials)
            .output()
            .expect("failed to run credcheck")
    }

    /// Run credcheck with raw arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run credcheck")
    }
}
