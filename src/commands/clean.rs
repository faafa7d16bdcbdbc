use crate::config::Config;
use crate::docker::DockerCli;
use crate::error::{ReviewAgentError, Result};
use std::io::{self, Write};

pub fn execute(config: &Config, yes: bool) -> Result<()> {
    if !DockerCli::is_installed() {
        return Err(ReviewAgentError::DockerNotInstalled);
    }

    let image = config.sandbox.reference();

    if !DockerCli::image_exists(&image)? {
        println!("Image does not exist: {}", image);
        return Ok(());
    }

    println!("Image: {}", image);
    println!("This will delete the review image.");
    println!();

    // Prompt for confirmation unless --yes was provided
    if !yes {
        print!("Delete image? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).ok();
        let input = input.trim().to_lowercase();

        if input != "y" && input != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Removing image: {}", image);
    DockerCli::remove_image(&image, config.verbose)?;
    println!("Image removed successfully: {}", image);

    Ok(())
}
