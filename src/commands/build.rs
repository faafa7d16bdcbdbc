use crate::cli::BuildCmd;
use crate::config::Config;
use crate::docker::DockerCli;
use crate::error::{ReviewAgentError, Result};
use std::path::{Path, PathBuf};

pub fn execute(config: &Config, cmd: &BuildCmd) -> Result<()> {
    if !DockerCli::is_installed() {
        return Err(ReviewAgentError::DockerNotInstalled);
    }

    build_image(
        config,
        cmd.context.as_deref(),
        cmd.dockerfile.as_deref(),
        cmd.no_cache,
    )
}

/// Build the review image. Shared with the review command, which offers to
/// build a missing image before running.
pub(crate) fn build_image(
    config: &Config,
    context: Option<&Path>,
    dockerfile: Option<&Path>,
    no_cache: bool,
) -> Result<()> {
    let context: PathBuf = match context {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let dockerfile: PathBuf = dockerfile
        .map(Path::to_path_buf)
        .unwrap_or_else(|| context.join("Dockerfile"));

    if !dockerfile.is_file() {
        return Err(ReviewAgentError::DockerfileNotFound(dockerfile));
    }

    let image = config.sandbox.reference();
    println!("Building image: {}", image);

    DockerCli::build(&image, &context, &dockerfile, no_cache, config.verbose)?;

    println!("Image built successfully: {}", image);
    Ok(())
}
