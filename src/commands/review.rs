use crate::cli::ReviewCmd;
use crate::commands::helpers;
use crate::config::Config;
use crate::docker::{mount, DockerCli};
use crate::error::{ReviewAgentError, Result};
use crate::openai;
use crate::utils::env as env_utils;
use std::path::PathBuf;

/// Review files inside an ephemeral container.
///
/// Each file is resolved to an absolute path and mounted read-only at that
/// same path, then the container runs `review-agent agent <paths...>`.
pub fn execute(config: &Config, cmd: &ReviewCmd) -> Result<()> {
    if !DockerCli::is_installed() {
        return Err(ReviewAgentError::DockerNotInstalled);
    }
    if !DockerCli::daemon_running() {
        return Err(ReviewAgentError::DockerNotRunning);
    }

    helpers::ensure_image_exists(config, cmd.yes)?;

    let mounts = mount::resolve_review_targets(&cmd.files)?;

    // Forward the key, the configured env file, proxies, and --env pairs
    let env_file = cmd
        .env_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.env.file));
    let mut env_vars =
        env_utils::collect_env_vars(&cmd.env, Some(env_file.as_path()), &config.env.inherit)?;

    if let Ok(key) = std::env::var(openai::API_KEY_VAR) {
        env_vars.entry(openai::API_KEY_VAR.to_string()).or_insert(key);
    }
    if !env_vars.contains_key(openai::API_KEY_VAR) {
        return Err(ReviewAgentError::MissingApiKey);
    }

    let image = config.sandbox.reference();
    if !config.verbose {
        eprintln!("Starting review container...");
    }

    let mut args: Vec<String> = vec!["agent".to_string()];
    args.extend(mount::container_paths(&mounts));

    DockerCli::run(&image, &mounts, &env_vars, &args)
}
