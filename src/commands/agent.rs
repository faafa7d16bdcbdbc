use crate::cli::AgentCmd;
use crate::config::Config;
use crate::error::Result;
use crate::openai::OpenAiClient;
use crate::review;
use crate::utils::env as env_utils;
use std::path::Path;

/// Run the review pipeline in this process. This is what the container
/// executes, and what `agent` runs directly on the host.
pub fn execute(config: &Config, cmd: &AgentCmd) -> Result<()> {
    // Load the dotenv file before reading any variables
    env_utils::load_dotenv(Path::new(&config.env.file));
    env_utils::report_proxies(&config.env.inherit);

    // Re-apply env overrides now that the dotenv file is loaded
    let config = config.clone().merge_env();

    let client = OpenAiClient::from_config(&config)?;
    client.validate_key()?;
    eprintln!("API key validated.");

    review::review_paths(&client, &config, &cmd.files)
}
