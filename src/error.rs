use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewAgentError {
    #[error("Docker not installed. Install from https://docs.docker.com/get-docker/")]
    DockerNotInstalled,

    #[error("Docker daemon is not responding. Is the Docker service running?")]
    DockerNotRunning,

    #[error("Image not found: {0}. Run 'review-agent build' first.")]
    ImageNotFound(String),

    #[error("Dockerfile not found: {0}")]
    DockerfileNotFound(PathBuf),

    #[error("Docker subprocess failed: {0}")]
    DockerExecution(String),

    #[error("Command exited with status {0}")]
    CommandExitCode(i32),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("OPENAI_API_KEY is not set. Export it or add it to your env file.")]
    MissingApiKey,

    #[error("OpenAI rejected the API key: {0}")]
    ApiAuth(String),

    #[error("OpenAI API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No readable files to review")]
    NoReviewableFiles,
}

pub type Result<T> = std::result::Result<T, ReviewAgentError>;
