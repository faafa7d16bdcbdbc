use crate::commands::build;
use crate::config::Config;
use crate::docker::DockerCli;
use crate::error::{ReviewAgentError, Result};
use std::io::{self, Write};

/// Ensure the review image exists, prompting the user to build it if missing.
///
/// If the user declines, returns an error so the review aborts before any
/// files are touched.
pub fn ensure_image_exists(config: &Config, assume_yes: bool) -> Result<()> {
    let image = config.sandbox.reference();

    if DockerCli::image_exists(&image)? {
        return Ok(());
    }

    println!("Image not found: {}", image);

    if !assume_yes {
        print!("Build it now? [Y/n]: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim().to_lowercase();

        if !(input.is_empty() || input == "y" || input == "yes") {
            return Err(ReviewAgentError::ImageNotFound(image));
        }
        println!();
    }

    build::build_image(config, None, None, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_image_exists_function_signature() {
        // Verify the function signature is stable
        let _fn: fn(&Config, bool) -> Result<()> = ensure_image_exists;
    }
}
