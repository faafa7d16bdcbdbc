use crate::config::Config;
use crate::docker::DockerCli;
use crate::error::{ReviewAgentError, Result};
use crate::openai;

/// Verify the environment is ready for a sandboxed review
pub fn execute(config: &Config) -> Result<()> {
    if !DockerCli::is_installed() {
        return Err(ReviewAgentError::DockerNotInstalled);
    }
    println!("Docker: installed");

    if !DockerCli::daemon_running() {
        return Err(ReviewAgentError::DockerNotRunning);
    }
    match DockerCli::server_version() {
        Some(version) => println!("Daemon: running (server {})", version),
        None => println!("Daemon: running"),
    }

    let image = config.sandbox.reference();
    if DockerCli::image_exists(&image)? {
        println!("Image: {} present", image);
    } else {
        println!("Image: {} not built (run 'review-agent build')", image);
    }

    if std::env::var(openai::API_KEY_VAR).is_ok_and(|key| !key.is_empty()) {
        println!("API key: {} is set", openai::API_KEY_VAR);
    } else {
        println!(
            "API key: {} is not set (required to review)",
            openai::API_KEY_VAR
        );
    }

    Ok(())
}
