//! Live version-control adapter using `git` CLI commands.

use std::path::Path;
use std::process::Command;

use crate::ports::vcs::VersionControl;
use crate::ports::PortError;

/// Live adapter that shells out to the `git` CLI.
pub struct LiveVersionControl;

fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<String, PortError> {
    let mut command = Command::new("git");
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }
    let output = command.output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git {} failed: {}", args.join(" "), stderr.trim()).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl VersionControl for LiveVersionControl {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), PortError> {
        let dest = dest.to_string_lossy();
        run_git(&["clone", url, dest.as_ref()], None)?;
        Ok(())
    }

    fn remote_url(&self, dir: &Path) -> Result<String, PortError> {
        let stdout = run_git(&["config", "--get", "remote.origin.url"], Some(dir))?;
        Ok(stdout.trim().to_string())
    }

    fn checkout(&self, dir: &Path, branch: &str) -> Result<(), PortError> {
        run_git(&["checkout", branch], Some(dir))?;
        Ok(())
    }

    fn create_and_checkout_branch(&self, dir: &Path, branch: &str) -> Result<(), PortError> {
        run_git(&["checkout", "-b", branch], Some(dir))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::run_git;

    #[test]
    fn failed_command_reports_the_command() {
        let dir = std::env::temp_dir().join("repolink_vcs_test_no_repo");
        std::fs::create_dir_all(&dir).unwrap();

        let err = run_git(&["config", "--get", "remote.origin.url"], Some(&dir)).unwrap_err();
        assert!(err.to_string().contains("git config"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
