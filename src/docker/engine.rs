use crate::docker::mount::Mount;
use crate::error::{ReviewAgentError, Result};
use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Stdio};

pub struct DockerCli;

impl DockerCli {
    /// Check if the docker CLI is installed
    pub fn is_installed() -> bool {
        which::which("docker").is_ok()
    }

    /// Check if the daemon answers. A CLI without a running daemon fails
    /// every other operation, so commands probe this up front.
    pub fn daemon_running() -> bool {
        Command::new("docker")
            .args(["info", "--format", "{{.ServerVersion}}"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Report the daemon's server version
    pub fn server_version() -> Option<String> {
        let output = Command::new("docker")
            .args(["version", "--format", "{{.Server.Version}}"])
            .output()
            .ok()?;

        if output.status.success() {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if version.is_empty() {
                None
            } else {
                Some(version)
            }
        } else {
            None
        }
    }

    /// Build an image from a context directory
    pub fn build(
        tag: &str,
        context: &Path,
        dockerfile: &Path,
        no_cache: bool,
        verbose: bool,
    ) -> Result<()> {
        let mut cmd = Command::new("docker");
        cmd.arg("build")
            .arg("--tag")
            .arg(tag)
            .arg("--file")
            .arg(dockerfile);

        if no_cache {
            cmd.arg("--no-cache");
        }

        cmd.arg(context);

        let result = if verbose {
            cmd.status()
        } else {
            cmd.stdout(Stdio::null()).stderr(Stdio::null()).status()
        };

        let status = result.map_err(|e| {
            ReviewAgentError::DockerExecution(format!("Failed to build image: {}", e))
        })?;

        if !status.success() {
            return Err(ReviewAgentError::DockerExecution(format!(
                "Failed to build image {}",
                tag
            )));
        }

        Ok(())
    }

    /// Check if an image with the given reference exists locally
    pub fn image_exists(tag: &str) -> Result<bool> {
        let status = Command::new("docker")
            .args(["image", "inspect", tag])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                ReviewAgentError::DockerExecution(format!("Failed to inspect image: {}", e))
            })?;

        Ok(status.success())
    }

    /// Remove an image
    pub fn remove_image(tag: &str, verbose: bool) -> Result<()> {
        let mut cmd = Command::new("docker");
        cmd.args(["rmi", tag]);

        let result = if verbose {
            cmd.status()
        } else {
            cmd.stdout(Stdio::null()).stderr(Stdio::null()).status()
        };

        let status = result.map_err(|e| {
            ReviewAgentError::DockerExecution(format!("Failed to remove image: {}", e))
        })?;

        if !status.success() {
            return Err(ReviewAgentError::DockerExecution(format!(
                "Failed to remove image {}",
                tag
            )));
        }

        Ok(())
    }

    /// Run a one-shot container with the given read-only mounts, forwarded
    /// environment, and entrypoint arguments. Output always streams to the
    /// terminal since it is the review itself.
    pub fn run(
        image: &str,
        mounts: &[Mount],
        env_vars: &HashMap<String, String>,
        args: &[String],
    ) -> Result<()> {
        let mut cmd = Command::new("docker");
        cmd.args(["run", "--rm"]);

        for mount in mounts {
            cmd.arg("--volume").arg(mount.to_volume_arg());
        }

        for (key, value) in env_vars {
            cmd.arg("--env").arg(format!("{}={}", key, value));
        }

        cmd.arg(image);
        cmd.args(args);

        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                ReviewAgentError::DockerExecution(format!("Failed to run container: {}", e))
            })?;

        if !status.success() {
            return Err(ReviewAgentError::CommandExitCode(
                status.code().unwrap_or(1),
            ));
        }

        Ok(())
    }
}
