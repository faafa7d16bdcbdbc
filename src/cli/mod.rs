use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod router;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate {
        /// Optional path to a specific config file to validate
        file: Option<PathBuf>,
    },

    /// Show effective configuration after merging all sources
    Show,
}

#[derive(Parser, Debug)]
#[command(name = "review-agent")]
#[command(about = "Run an LLM code reviewer against your files inside a sandboxed container", long_about = None)]
#[command(version = env!("REVIEW_AGENT_VERSION"))]
#[command(after_help = "\
INVOCATION PATTERNS:
  The 'review' command is the default. These are equivalent:

  review-agent [options] <files...>          Shorthand for 'review-agent review'
  review-agent review [options] <files...>   Explicit review command

EXAMPLES:
  review-agent src/main.rs                   Review one file in the sandbox
  review-agent src/main.rs src/lib.rs        Review several files together
  review-agent agent src/main.rs             Review directly, without the sandbox
  review-agent build                         Build the sandbox image

For details about a specific command, use:
  review-agent <command> --help")]
pub struct Cli {
    /// Show verbose output including Docker logs
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Review files with the LLM agent in an ephemeral container
    #[command(long_about = "Review files with the LLM agent in an ephemeral container.\n\n\
        Resolves each file to an absolute path, mounts it read-only into a\n\
        fresh container, and runs the review agent against it. This is the\n\
        default command - you can omit 'review' and pass files directly.")]
    Review(ReviewCmd),

    /// Run the review pipeline directly in this process
    #[command(long_about = "Run the review pipeline directly in this process.\n\n\
        This is the entry point the container executes; it can also be used\n\
        on the host to review files without a sandbox. Requires\n\
        OPENAI_API_KEY in the environment or the configured env file.")]
    Agent(AgentCmd),

    /// Build the review container image
    Build(BuildCmd),

    /// Remove the review container image
    Clean {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check that the container engine is installed and running
    Check,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Parser, Debug)]
pub struct ReviewCmd {
    /// Files to review
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Skip confirmation prompt when the image must be built first
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Extra environment variables to forward into the container
    #[arg(long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Env file to forward into the container (defaults to the configured file)
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct AgentCmd {
    /// Files to review
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct BuildCmd {
    /// Build context directory (defaults to the current directory)
    #[arg(value_name = "CONTEXT")]
    pub context: Option<PathBuf>,

    /// Dockerfile path (defaults to CONTEXT/Dockerfile)
    #[arg(long, value_name = "PATH")]
    pub dockerfile: Option<PathBuf>,

    /// Build without using the engine cache
    #[arg(long)]
    pub no_cache: bool,
}
