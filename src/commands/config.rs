use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub fn execute(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Validate { file } => validate(file.as_deref()),
        ConfigCommands::Show => show(),
    }
}

fn validate(file: Option<&Path>) -> Result<()> {
    if let Some(path) = file {
        println!("Validating {}...", path.display());
        return match Config::from_file(path) {
            Ok(_) => {
                println!("✓ Configuration is valid!");
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {}", e);
                Err(e)
            }
        };
    }

    let local_config = PathBuf::from(".review-agent.toml");
    let global_config = std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".review-agent.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.review-agent.toml"));

    println!("Validating configuration files...\n");

    if global_config.exists() {
        println!("  Global config: {}", global_config.display());
    } else {
        println!(
            "  Global config: {} - not found (optional)",
            global_config.display()
        );
    }

    if local_config.exists() {
        println!("  Local config: {}", local_config.display());
    } else {
        println!(
            "  Local config: {} - not found (optional)",
            local_config.display()
        );
    }

    // Try to load merged config - this will validate all files
    println!("\nLoading and validating configuration...");
    match Config::load() {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {}", e);
            Err(e)
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;

    println!("Effective Configuration:");
    println!("(CLI > Environment > Local config > Global config > Defaults)\n");

    println!("Model:");
    println!("  name: {}", config.model.name);
    println!("  chunk_tokens: {}", config.model.chunk_tokens);
    println!("  completion_tokens: {}", config.model.completion_tokens);
    println!("  temperature: {}", config.model.temperature);

    println!("\nAPI:");
    println!("  base_url: {}", config.api.base_url);

    println!("\nSandbox:");
    println!("  image: {}", config.sandbox.reference());

    println!("\nEnv:");
    println!("  file: {}", config.env.file);
    println!("  inherit: {}", config.env.inherit.join(", "));

    Ok(())
}
